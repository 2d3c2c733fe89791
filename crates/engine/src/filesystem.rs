use crate::config::{FilterConfig, WalkOptions};
use crate::error::{EngineError, Result};
use crossbeam_channel::Sender;
use ignore::WalkBuilder;
use ignore::overrides::OverrideBuilder;
use std::path::PathBuf;

/// Parallel recursive directory walk.
///
/// Files named directly in `roots` are sent as-is, whatever their extension.
/// Directories are walked and only files accepted by `filters` are sent.
///
/// Roots that do not exist are skipped and returned, unless `strict` is set.
///
/// # Errors
/// Returns an error if an override glob is invalid, or in strict mode if a
/// root does not exist. Errors on individual entries during traversal are
/// logged and skipped.
pub fn walk_parallel(
    options: &WalkOptions,
    filters: &FilterConfig,
    tx: &Sender<(PathBuf, std::fs::Metadata)>,
    strict: bool,
) -> Result<Vec<EngineError>> {
    let mut missing = Vec::new();
    let mut dirs = Vec::new();
    for root in &options.roots {
        let Ok(meta) = std::fs::metadata(root) else {
            let err = EngineError::PathNotFound(root.clone());
            if strict {
                return Err(err);
            }
            missing.push(err);
            continue;
        };
        if meta.is_dir() {
            dirs.push(root);
        } else if tx.send((root.clone(), meta)).is_err() {
            return Ok(missing);
        }
    }

    let Some((first, rest)) = dirs.split_first() else {
        return Ok(missing);
    };

    let mut builder = WalkBuilder::new(first);
    for root in rest {
        builder.add(root);
    }

    builder
        .threads(options.threads)
        .hidden(!options.hidden)
        .git_ignore(options.git_ignore)
        .follow_links(options.follow_links)
        .max_depth(options.max_depth);

    // ignore crate only supports one Overrides instance per WalkBuilder.
    // Exclude patterns use the `!` prefix convention.
    if !options.override_include.is_empty() || !options.override_exclude.is_empty() {
        let mut ov_builder = OverrideBuilder::new(first);
        for ov in &options.override_include {
            ov_builder.add(ov)?;
        }
        for ov in &options.override_exclude {
            ov_builder.add(&format!("!{ov}"))?;
        }
        builder.overrides(ov_builder.build()?);
    }

    let filters = filters.clone();
    builder.filter_entry(move |entry| {
        if entry.file_type().is_some_and(|ft| ft.is_dir()) {
            return true;
        }
        filters.accepts(entry.path())
    });

    let walker = builder.build_parallel();
    walker.run(|| {
        let tx = tx.clone();
        Box::new(move |entry| {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    log::warn!("{e}");
                    return ignore::WalkState::Continue;
                }
            };
            if !entry.file_type().is_some_and(|ft| ft.is_file()) {
                return ignore::WalkState::Continue;
            }
            match entry.metadata() {
                Ok(meta) => {
                    if tx.send((entry.path().to_owned(), meta)).is_err() {
                        return ignore::WalkState::Quit;
                    }
                }
                Err(e) => log::warn!("{e}"),
            }
            ignore::WalkState::Continue
        })
    });

    Ok(missing)
}
