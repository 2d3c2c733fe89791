use crate::error::EngineError;
use scss_tags_core::Tag;
use serde::Serialize;
use std::path::PathBuf;

/// Tags found in one file, in source order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct FileTags {
    pub path: PathBuf,
    pub tags: Vec<Tag>,
    /// Skipped because it looked binary.
    pub is_binary: bool,
}

impl FileTags {
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self {
            path,
            tags: Vec::new(),
            is_binary: false,
        }
    }
}

#[derive(Debug, Default)]
pub struct RunResult {
    pub files: Vec<FileTags>,
    pub errors: Vec<(PathBuf, EngineError)>,
}

impl RunResult {
    /// Total tags across all files.
    #[must_use]
    pub fn tag_count(&self) -> usize {
        self.files.iter().map(|f| f.tags.len()).sum()
    }
}
