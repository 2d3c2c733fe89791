//! スキャナ状態
//!
//! Exactly one state is active at a time. It is the only information carried
//! from one character to the next (and from one line to the next) apart from
//! the declaration buffer owned by the scanner.

/// スキャン状態
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ScanState {
    /// Top level: waiting for a declaration, directive or comment.
    #[default]
    Neutral,
    /// Inside `/* ... */`.
    InComment,
    /// Inside `'...'` within a rule body.
    InSingleQuoteString,
    /// Inside `"..."` within a rule body.
    InDoubleQuoteString,
    /// Inside `{ ... }` of a rule, `@page` or `@font-face`.
    InRuleBody,
    /// Between `@media` and its opening brace.
    InMediaDirective,
    /// Between `@import` / `@namespace` and the closing `;`.
    InImportOrNamespaceDirective,
    /// Input ended while a declaration was open. No further processing.
    Terminated,
}

impl ScanState {
    #[must_use]
    pub const fn is_terminated(self) -> bool {
        matches!(self, Self::Terminated)
    }
}

/// 認識する `@` ディレクティブ
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Directive {
    Media,
    Import,
    Namespace,
    Page,
    FontFace,
}

impl Directive {
    pub const ALL: [Self; 5] = [
        Self::Media,
        Self::Import,
        Self::Namespace,
        Self::Page,
        Self::FontFace,
    ];

    /// Case-sensitive keyword match (the bytes following `@`).
    #[must_use]
    pub fn from_keyword(keyword: &[u8]) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|d| d.keyword().as_bytes() == keyword)
    }

    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Media => "media",
            Self::Import => "import",
            Self::Namespace => "namespace",
            Self::Page => "page",
            Self::FontFace => "font-face",
        }
    }

    /// State the scanner enters right after the keyword.
    ///
    /// `@page` and `@font-face` bodies are skipped exactly like a rule body.
    #[must_use]
    pub const fn entry_state(self) -> ScanState {
        match self {
            Self::Media => ScanState::InMediaDirective,
            Self::Import | Self::Namespace => ScanState::InImportOrNamespaceDirective,
            Self::Page | Self::FontFace => ScanState::InRuleBody,
        }
    }
}
