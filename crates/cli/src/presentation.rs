// crates/cli/src/presentation.rs
use crate::config::Config;
use scss_tags_core::{SCSS, TagKind};
use scss_tags_engine::options::{OutputFormat, SortKey};
use scss_tags_engine::result::FileTags;
use serde::Serialize;
use std::io::{self, Write};

/// One output row: a tag together with the file it came from.
#[derive(Debug, Clone, Serialize)]
pub struct TagEntry<'a> {
    pub name: &'a str,
    pub kind: TagKind,
    pub file: String,
    pub line: usize,
}

/// Flatten per-file results into rows ordered by `sort`.
///
/// `files` is expected in path order with tags in source order, which is
/// what the engine returns. All sorts are stable on top of that.
///
/// Tags with an empty name (`. { }`) are dropped; a tag line cannot start
/// with its separator.
#[must_use]
pub fn collect_entries(files: &[FileTags], sort: SortKey) -> Vec<TagEntry<'_>> {
    let mut entries: Vec<TagEntry<'_>> = files
        .iter()
        .flat_map(|f| {
            let file = f.path.display().to_string();
            f.tags.iter().filter(|t| !t.name.is_empty()).map(move |t| TagEntry {
                name: &t.name,
                kind: t.kind,
                file: file.clone(),
                line: t.line,
            })
        })
        .collect();

    match sort {
        SortKey::Name => entries.sort_by(|a, b| a.name.cmp(b.name)),
        SortKey::File => {}
        SortKey::Kind => entries.sort_by(|a, b| a.kind.cmp(&b.kind).then_with(|| a.name.cmp(b.name))),
    }
    entries
}

/// Write the tags of a run in the configured format.
///
/// # Errors
/// Returns any error from the writer or the JSON serializer.
pub fn write_results<W: Write>(out: &mut W, files: &[FileTags], config: &Config) -> crate::error::Result<()> {
    let entries = collect_entries(files, config.sort);
    let file_count = files.iter().filter(|f| !f.is_binary).count();

    match config.format {
        OutputFormat::Ctags => write_ctags(out, &entries, config.sort == SortKey::Name)?,
        OutputFormat::Json => write_json(out, &entries)?,
        OutputFormat::Jsonl => write_jsonl(out, &entries, file_count)?,
        OutputFormat::Table => write_table(out, &entries, file_count, config.walk.threads)?,
    }
    out.flush()?;
    Ok(())
}

fn write_ctags<W: Write>(out: &mut W, entries: &[TagEntry<'_>], sorted: bool) -> io::Result<()> {
    writeln!(out, "!_TAG_FILE_FORMAT\t2\t/extended format/")?;
    writeln!(out, "!_TAG_FILE_SORTED\t{}\t/0=unsorted, 1=sorted/", u8::from(sorted))?;
    writeln!(out, "!_TAG_PROGRAM_NAME\tscss_tags\t//")?;
    writeln!(out, "!_TAG_PROGRAM_VERSION\t{}\t//", crate::VERSION)?;

    for e in entries {
        let name = e.name.replace('\t', " ");
        writeln!(out, "{name}\t{}\t{};\"\t{}", e.file, e.line, e.kind.letter())?;
    }
    Ok(())
}

fn write_json<W: Write>(out: &mut W, entries: &[TagEntry<'_>]) -> serde_json::Result<()> {
    serde_json::to_writer_pretty(&mut *out, entries)?;
    writeln!(out).map_err(serde_json::Error::io)
}

#[derive(Serialize)]
struct JsonlRecord<'a, 'b> {
    #[serde(rename = "type")]
    record_type: &'static str,
    #[serde(flatten)]
    entry: &'b TagEntry<'a>,
}

fn write_jsonl<W: Write>(out: &mut W, entries: &[TagEntry<'_>], file_count: usize) -> crate::error::Result<()> {
    for entry in entries {
        serde_json::to_writer(&mut *out, &JsonlRecord { record_type: "tag", entry })?;
        writeln!(out)?;
    }

    let total = serde_json::json!({
        "type": "total",
        "version": crate::VERSION,
        "files": file_count,
        "tags": entries.len(),
    });
    writeln!(out, "{total}")?;
    Ok(())
}

fn write_table<W: Write>(
    out: &mut W,
    entries: &[TagEntry<'_>],
    file_count: usize,
    threads: usize,
) -> io::Result<()> {
    writeln!(out, "scss_tags v{} · parallel={threads}", crate::VERSION)?;
    writeln!(out)?;

    let name_width = entries
        .iter()
        .map(|e| e.name.chars().count())
        .max()
        .unwrap_or(0)
        .max("NAME".len());

    writeln!(out, "{:<9}{:>7}  {:<name_width$}  FILE", "KIND", "LINE", "NAME")?;
    writeln!(out, "{}", "-".repeat(9 + 7 + 2 + name_width + 2 + 4))?;
    for e in entries {
        writeln!(
            out,
            "{:<9}{:>7}  {:<name_width$}  {}",
            e.kind.name(),
            e.line,
            e.name,
            e.file
        )?;
    }
    writeln!(out, "---")?;
    writeln!(out, "{} tags in {file_count} files", entries.len())?;
    Ok(())
}

/// `--list-kinds`: the kind table of the scanner.
///
/// # Errors
/// Returns any error from the writer.
pub fn write_kinds<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", SCSS.name)?;
    for kind in SCSS.kinds {
        writeln!(out, "{}  {:<9}{}", kind.letter(), kind.name(), kind.description())?;
    }
    Ok(())
}
