//! 言語定義
//!
//! Registration metadata of the scanner: the language name, the file
//! extensions it claims and its kind table.

use alloc::string::String;
use hashbrown::HashMap;

use crate::kind::TagKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    pub name: &'static str,
    pub extensions: &'static [&'static str],
    pub kinds: &'static [TagKind],
}

/// The stylesheet scanner.
pub const SCSS: Language = Language {
    name: "SCSS",
    extensions: &["css", "scss"],
    kinds: &TagKind::ALL,
};

impl Language {
    /// Case-insensitive extension check.
    #[must_use]
    pub fn handles_extension(&self, extension: &str) -> bool {
        self.extensions
            .iter()
            .any(|e| e.eq_ignore_ascii_case(extension))
    }

    /// 拡張子マッピングを適用してから判定する
    ///
    /// `map` routes other extensions (for example `less` → `css`) to this
    /// language. Unmapped extensions are checked as they are.
    #[must_use]
    pub fn handles(&self, extension: &str, map: &HashMap<String, String>) -> bool {
        let effective = map.get(extension).map_or(extension, String::as_str);
        self.handles_extension(effective)
    }
}
