use alloc::string::String;
use serde::{Deserialize, Serialize};

use crate::kind::TagKind;

/// Emitted tag record.
///
/// Produced once per recognised declaration and handed to the sink; the
/// scanner keeps no reference to it afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tag {
    pub name: String,
    pub kind: TagKind,
    /// 1-based line on which the declaration started.
    pub line: usize,
}

impl Tag {
    #[must_use]
    pub fn new(name: impl Into<String>, kind: TagKind, line: usize) -> Self {
        Self {
            name: name.into(),
            kind,
            line,
        }
    }

    /// `(kind, name)` identity, ignoring the position.
    #[must_use]
    pub fn key(&self) -> (TagKind, &str) {
        (self.kind, self.name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_ignores_line() {
        let a = Tag::new("foo", TagKind::Class, 1);
        let b = Tag::new("foo", TagKind::Class, 7);
        assert_eq!(a.key(), b.key());
        assert_ne!(a, b);
    }
}
