use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Extended ctags tag file
    #[default]
    Ctags,
    Json,
    Jsonl,
    Table,
}

/// Ordering of the emitted tag list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortKey {
    /// By tag name, like a sorted tag file
    #[default]
    Name,
    /// By file, then source order
    File,
    /// By kind, then name
    Kind,
}
