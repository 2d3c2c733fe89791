// crates/engine/src/lib.rs
use rayon::prelude::*;
use std::path::PathBuf;

pub mod config;
pub mod error;
pub mod filesystem;
pub mod options;
pub mod processor;
pub mod reader;
pub mod result;

use crate::config::Config;
use crate::error::{EngineError, Result};
use crate::result::{FileTags, RunResult};

/// Run the tagging engine.
///
/// Files are scanned in parallel; the returned files are sorted by path so
/// output does not depend on scheduling.
///
/// # Errors
///
/// In strict mode, the first file or walk error. Otherwise errors are
/// collected in `RunResult::errors` and this only fails if the engine
/// cannot start.
pub fn run(config: &Config) -> Result<RunResult> {
    let (tx, rx) = crossbeam_channel::bounded(1024);
    let (err_tx, err_rx) = std::sync::mpsc::channel();

    let walk_cfg = config.walk.clone();
    let filter_cfg = config.filter.clone();
    let strict = config.strict;

    let walker = std::thread::spawn(move || {
        match crate::filesystem::walk_parallel(&walk_cfg, &filter_cfg, &tx, strict) {
            Ok(skipped) => {
                for e in skipped {
                    let _ = err_tx.send(e);
                }
            }
            Err(e) => {
                let _ = err_tx.send(e);
            }
        }
    });

    let iter = rx.into_iter().par_bridge();

    let mut result = if config.strict {
        // Strict mode: fail on first error
        let files = iter
            .map(|item| processor::process_file(item, config))
            .collect::<Result<Vec<_>>>()?;
        RunResult {
            files,
            errors: Vec::new(),
        }
    } else {
        let (files, errors): (Vec<FileTags>, Vec<(PathBuf, EngineError)>) = iter
            .map(|item| {
                let path = item.0.clone();
                processor::process_file(item, config).map_err(|e| (path, e))
            })
            .partition_map(|r| match r {
                Ok(file) => rayon::iter::Either::Left(file),
                Err(e) => rayon::iter::Either::Right(e),
            });
        RunResult { files, errors }
    };

    if walker.join().is_err() {
        return Err(EngineError::Config("directory walker panicked".to_string()));
    }

    // Walk errors from the background thread; it has finished sending
    for walk_err in err_rx.try_iter() {
        if config.strict {
            return Err(walk_err);
        }
        let path = match &walk_err {
            EngineError::PathNotFound(root) => root.clone(),
            _ => PathBuf::from("<walk>"),
        };
        result.errors.push((path, walk_err));
    }

    result.files.sort_by(|a, b| a.path.cmp(&b.path));
    result.errors.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(result)
}
