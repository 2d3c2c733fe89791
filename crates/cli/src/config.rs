// crates/cli/src/config.rs
use crate::args::Args;
use crate::error::AppError;
use crate::options;
pub use scss_tags_engine::config::{
    Config, ConfigBuilder, FilterConfig, FilterConfigBuilder, WalkOptions, WalkOptionsBuilder,
};
use scss_tags_engine::options as engine_options;
use std::path::PathBuf;

impl TryFrom<Args> for Config {
    type Error = AppError;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        let walk = walk_options_from_args(&args)?;
        let filter = filter_config_from_args(&args)?;

        // Convert enums via From impls
        let format: engine_options::OutputFormat = args.output.format.into();
        let sort: engine_options::SortKey = args.output.sort.into();

        ConfigBuilder::default()
            .walk(walk)
            .filter(filter)
            .kinds(args.output.kinds)
            .format(format)
            .sort(sort)
            .output_path(args.output.output)
            .strict(args.behavior.strict)
            .build()
            .map_err(|e| AppError::InvalidArgument(e.to_string()))
    }
}

fn walk_options_from_args(args: &Args) -> Result<WalkOptions, AppError> {
    let scan = &args.scan;

    let roots = if args.paths.is_empty() {
        vec![PathBuf::from(".")]
    } else {
        args.paths.clone()
    };

    WalkOptionsBuilder::default()
        .roots(roots)
        .threads(scan.jobs.unwrap_or_else(num_cpus::get))
        .hidden(scan.hidden)
        .git_ignore(!scan.no_gitignore)
        .max_depth(scan.max_depth)
        .follow_links(scan.follow)
        .override_include(scan.override_include.clone())
        .override_exclude(scan.override_exclude.clone())
        .build()
        .map_err(|e| AppError::InvalidArgument(e.to_string()))
}

fn filter_config_from_args(args: &Args) -> Result<FilterConfig, AppError> {
    let opts = &args.filter;
    let map_ext: hashbrown::HashMap<String, String> = opts
        .map_ext
        .iter()
        .map(|(k, v)| (k.to_ascii_lowercase(), v.to_ascii_lowercase()))
        .collect();
    let allow_ext: Vec<String> = opts
        .ext
        .iter()
        .map(|e| e.trim().trim_start_matches('.').to_string())
        .filter(|e| !e.is_empty())
        .collect();

    FilterConfigBuilder::default()
        .allow_ext(allow_ext)
        .map_ext(map_ext)
        .max_size(opts.max_size.map(|s| s.0))
        .build()
        .map_err(|e| AppError::InvalidArgument(e.to_string()))
}

// From trait implementations for CLI -> Engine enum conversion

macro_rules! map_enum {
    ($from:ty, $to:ty, $($variant:ident),+ $(,)?) => {
        impl From<$from> for $to {
            fn from(f: $from) -> Self {
                match f {
                    $( <$from>::$variant => <$to>::$variant, )+
                }
            }
        }
    };
}

map_enum!(
    options::OutputFormat,
    engine_options::OutputFormat,
    Ctags,
    Json,
    Jsonl,
    Table
);
map_enum!(options::SortKey, engine_options::SortKey, Name, File, Kind);
