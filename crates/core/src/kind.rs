//! タグ種別とその有効/無効セット
//!
//! Each kind carries the ctags metadata (letter, name, plural description)
//! that an indexing tool prints for `--list-kinds`.

use alloc::string::{String, ToString};
use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

/// タグの種別
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TagKind {
    /// `.name`
    Class,
    /// element / compound selector starting with an alphanumeric character
    Selector,
    /// `#name`
    Id,
}

impl TagKind {
    /// All kinds in kind-table order.
    pub const ALL: [Self; 3] = [Self::Class, Self::Selector, Self::Id];

    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::Class => 'c',
            Self::Selector => 's',
            Self::Id => 'i',
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Class => "class",
            Self::Selector => "selector",
            Self::Id => "id",
        }
    }

    /// Plural description shown in kind listings.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Class => "classes",
            Self::Selector => "selectors",
            Self::Id => "identities",
        }
    }

    #[must_use]
    pub const fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'c' => Some(Self::Class),
            's' => Some(Self::Selector),
            'i' => Some(Self::Id),
            _ => None,
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(name))
    }

    const fn bit(self) -> u8 {
        match self {
            Self::Class => 0b001,
            Self::Selector => 0b010,
            Self::Id => 0b100,
        }
    }
}

impl fmt::Display for TagKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a kind letter or name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseKindError {
    input: String,
}

impl ParseKindError {
    fn new(input: &str) -> Self {
        Self {
            input: input.to_string(),
        }
    }

    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl fmt::Display for ParseKindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unknown tag kind: '{}' (expected c/s/i or class/selector/id)",
            self.input
        )
    }
}

impl core::error::Error for ParseKindError {}

impl FromStr for TagKind {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        if let (Some(c), None) = (chars.next(), chars.next())
            && let Some(kind) = Self::from_letter(c.to_ascii_lowercase())
        {
            return Ok(kind);
        }
        Self::from_name(trimmed).ok_or_else(|| ParseKindError::new(s))
    }
}

/// 有効なタグ種別の集合
///
/// Defaults to every kind enabled, matching the kind table where all entries
/// are switched on.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct KindSet(u8);

impl KindSet {
    #[must_use]
    pub const fn all() -> Self {
        Self(0b111)
    }

    #[must_use]
    pub const fn empty() -> Self {
        Self(0)
    }

    #[must_use]
    pub const fn with(self, kind: TagKind) -> Self {
        Self(self.0 | kind.bit())
    }

    #[must_use]
    pub const fn without(self, kind: TagKind) -> Self {
        Self(self.0 & !kind.bit())
    }

    #[must_use]
    pub const fn contains(self, kind: TagKind) -> bool {
        self.0 & kind.bit() != 0
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn iter(self) -> impl Iterator<Item = TagKind> {
        TagKind::ALL.into_iter().filter(move |k| self.contains(*k))
    }
}

impl Default for KindSet {
    fn default() -> Self {
        Self::all()
    }
}

impl fmt::Debug for KindSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl FromIterator<TagKind> for KindSet {
    fn from_iter<T: IntoIterator<Item = TagKind>>(iter: T) -> Self {
        iter.into_iter().fold(Self::empty(), Self::with)
    }
}

/// Accepts a letter list (`"ci"`), a single name (`"class"`) or a comma
/// separated name list (`"class,id"`).
impl FromStr for KindSet {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseKindError::new(s));
        }

        if trimmed.contains(',') {
            return trimmed
                .split(',')
                .map(str::trim)
                .filter(|p| !p.is_empty())
                .map(TagKind::from_str)
                .collect();
        }

        if let Some(kind) = TagKind::from_name(trimmed) {
            return Ok(Self::empty().with(kind));
        }

        trimmed
            .chars()
            .map(|c| TagKind::from_letter(c.to_ascii_lowercase()).ok_or_else(|| ParseKindError::new(s)))
            .collect()
    }
}
