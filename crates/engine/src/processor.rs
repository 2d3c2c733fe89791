use crate::config::Config;
use crate::error::{EngineError, Result};
use crate::reader::ReaderLines;
use crate::result::FileTags;
use scss_tags_core::{KindFilter, KindSet, ScanState, Tag, scan};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

/// Scan a single file and return its tags.
///
/// # Errors
/// Returns [`EngineError::FileRead`] if the file cannot be opened or read.
pub fn process_file((path, meta): (PathBuf, std::fs::Metadata), config: &Config) -> Result<FileTags> {
    let mut out = FileTags::new(path.clone());

    if let Some(max) = config.filter.max_size
        && meta.len() > max
    {
        log::debug!("skipping {} ({} bytes > {max})", path.display(), meta.len());
        return Ok(out);
    }

    let file = File::open(&path).map_err(|e| EngineError::FileRead {
        path: path.clone(),
        source: e,
    })?;
    let mut reader = BufReader::new(file);

    // Binary check (Initial buffer check)
    {
        let buffer = reader.fill_buf().map_err(|e| EngineError::FileRead {
            path: path.clone(),
            source: e,
        })?;
        if buffer.is_empty() {
            return Ok(out);
        }
        if buffer.contains(&0) {
            log::warn!("skipping binary file {}", path.display());
            out.is_binary = true;
            return Ok(out);
        }
    }

    out.tags = scan_reader(reader, config.kinds).map_err(|e| EngineError::FileRead {
        path: path.clone(),
        source: e,
    })?;
    log::debug!("{}: {} tags", path.display(), out.tags.len());
    Ok(out)
}

/// Scan everything a reader yields, keeping only the enabled kinds.
///
/// Input that ends inside a declaration is not an error; the open
/// declaration is still emitted.
///
/// # Errors
/// Returns the first read error. Tags found before it are discarded.
pub fn scan_reader<R: BufRead>(reader: R, kinds: KindSet) -> io::Result<Vec<Tag>> {
    let mut lines = ReaderLines::new(reader);
    let mut sink = KindFilter::new(Vec::new(), kinds);
    let state = scan(&mut lines, &mut sink);
    if let Some(e) = lines.take_error() {
        return Err(e);
    }
    if state == ScanState::Terminated {
        log::debug!("input ended inside an open declaration");
    }
    Ok(sink.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use scss_tags_core::TagKind;
    use std::io::Cursor;

    fn names(tags: &[Tag]) -> Vec<&str> {
        tags.iter().map(|t| t.name.as_str()).collect()
    }

    #[test]
    fn test_scan_reader_basic() {
        let css = b"#header {\n  color: red;\n}\n.nav,\n.menu {}\n";
        let tags = scan_reader(Cursor::new(css.to_vec()), KindSet::all()).unwrap();
        assert_eq!(names(&tags), vec!["header", "nav", "menu"]);
        assert_eq!(tags[0].kind, TagKind::Id);
        assert_eq!(tags[2].line, 5);
    }

    #[test]
    fn test_scan_reader_kind_filter() {
        let css = b"#a {}\n.b {}\nc {}\n";
        let kinds = KindSet::empty().with(TagKind::Selector);
        let tags = scan_reader(Cursor::new(css.to_vec()), kinds).unwrap();
        assert_eq!(names(&tags), vec!["c "]);
    }

    #[test]
    fn test_scan_reader_crlf() {
        let css = b".a,\r\n.b {\r\n}\r\n";
        let tags = scan_reader(Cursor::new(css.to_vec()), KindSet::all()).unwrap();
        assert_eq!(names(&tags), vec!["a", "b"]);
    }

    #[test]
    fn test_scan_reader_unterminated_declaration() {
        let tags = scan_reader(Cursor::new(b".ok {}\n.open".to_vec()), KindSet::all()).unwrap();
        assert_eq!(names(&tags), vec!["ok", "open"]);
    }
}
