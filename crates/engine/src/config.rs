use crate::options::{OutputFormat, SortKey};
use derive_builder::Builder;
use scss_tags_core::{KindSet, SCSS};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct WalkOptions {
    #[builder(default)]
    pub roots: Vec<PathBuf>,
    #[builder(default = "1")]
    pub threads: usize,
    #[builder(default)]
    pub hidden: bool,
    #[builder(default = "true")]
    pub git_ignore: bool,
    #[builder(default)]
    pub max_depth: Option<usize>,
    #[builder(default)]
    pub follow_links: bool,
    #[builder(default)]
    pub override_include: Vec<String>,
    #[builder(default)]
    pub override_exclude: Vec<String>,
}

impl Default for WalkOptions {
    fn default() -> Self {
        Self {
            roots: vec![],
            threads: 1,
            hidden: false,
            git_ignore: true,
            max_depth: None,
            follow_links: false,
            override_include: vec![],
            override_exclude: vec![],
        }
    }
}

/// Which walked files get scanned.
#[derive(Debug, Clone, Default, Builder)]
#[builder(setter(into))]
pub struct FilterConfig {
    /// Extensions to scan. Empty means the extensions of the scanner itself.
    #[builder(default)]
    pub allow_ext: Vec<String>,
    /// Alias → scanned extension (`less` → `css`).
    #[builder(default)]
    pub map_ext: hashbrown::HashMap<String, String>,
    #[builder(default)]
    pub max_size: Option<u64>,
}

impl FilterConfig {
    /// Extension check applied to files found while walking directories.
    #[must_use]
    pub fn accepts(&self, path: &Path) -> bool {
        let Some(ext) = path.extension().and_then(|s| s.to_str()) else {
            return false;
        };
        let ext = ext.to_ascii_lowercase();
        let ext = ext.as_str();
        if self.allow_ext.is_empty() {
            return SCSS.handles(ext, &self.map_ext);
        }
        let effective = self.map_ext.get(ext).map_or(ext, String::as_str);
        self.allow_ext
            .iter()
            .any(|allowed| allowed.eq_ignore_ascii_case(effective) || allowed.eq_ignore_ascii_case(ext))
    }
}

#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct Config {
    #[builder(default)]
    pub walk: WalkOptions,
    #[builder(default)]
    pub filter: FilterConfig,

    #[builder(default)]
    pub kinds: KindSet,
    #[builder(default)]
    pub format: OutputFormat,
    #[builder(default)]
    pub sort: SortKey,
    #[builder(default)]
    pub output_path: Option<PathBuf>,

    #[builder(default)]
    pub strict: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            walk: WalkOptions::default(),
            filter: FilterConfig::default(),
            kinds: KindSet::all(),
            format: OutputFormat::default(),
            sort: SortKey::default(),
            output_path: None,
            strict: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_uses_scanner_extensions() {
        let filter = FilterConfig::default();
        assert!(filter.accepts(Path::new("a/site.css")));
        assert!(filter.accepts(Path::new("theme.SCSS")));
        assert!(!filter.accepts(Path::new("main.rs")));
        assert!(!filter.accepts(Path::new("Makefile")));
    }

    #[test]
    fn test_map_ext_routes_alias() {
        let mut map_ext = hashbrown::HashMap::new();
        map_ext.insert("less".to_string(), "css".to_string());
        let filter = FilterConfigBuilder::default().map_ext(map_ext).build().unwrap();
        assert!(filter.accepts(Path::new("x.less")));
    }

    #[test]
    fn test_allow_ext_overrides_defaults() {
        let filter = FilterConfigBuilder::default()
            .allow_ext(vec!["scss".to_string()])
            .build()
            .unwrap();
        assert!(filter.accepts(Path::new("x.scss")));
        assert!(!filter.accepts(Path::new("x.css")));
    }

    #[test]
    fn test_config_builder_defaults() {
        let config = ConfigBuilder::default().build().unwrap();
        assert_eq!(config.kinds, KindSet::all());
        assert_eq!(config.format, OutputFormat::Ctags);
        assert_eq!(config.sort, SortKey::Name);
        assert!(config.walk.git_ignore);
        assert!(!config.strict);
    }
}
