use scss_tags_core::{KindSet, TagKind};
use scss_tags_engine::config::{ConfigBuilder, WalkOptionsBuilder};
use scss_tags_engine::error::EngineError;
use scss_tags_engine::run;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn walk_of(root: &Path) -> scss_tags_engine::config::WalkOptions {
    WalkOptionsBuilder::default()
        .roots(vec![root.to_path_buf()])
        .threads(2usize)
        .build()
        .unwrap()
}

#[test]
fn run_collects_tags_sorted_by_path() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("b.css"), "#footer {\n}\n").unwrap();
    fs::write(dir.path().join("a.scss"), ".nav,\n.menu {\n  content: '}';\n}\n").unwrap();
    fs::write(dir.path().join("readme.md"), ".not-css {}\n").unwrap();

    let config = ConfigBuilder::default().walk(walk_of(dir.path())).build().unwrap();
    let result = run(&config).unwrap();

    assert!(result.errors.is_empty());
    assert_eq!(result.files.len(), 2);
    assert_eq!(result.files[0].path, dir.path().join("a.scss"));
    let names: Vec<_> = result.files[0].tags.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["nav", "menu"]);
    assert_eq!(result.files[1].tags[0].name, "footer");
    assert_eq!(result.files[1].tags[0].kind, TagKind::Id);
    assert_eq!(result.tag_count(), 3);
}

#[test]
fn run_applies_kind_set() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("site.css"), "#a {}\n.b {}\nul li {}\n").unwrap();

    let config = ConfigBuilder::default()
        .walk(walk_of(dir.path()))
        .kinds(KindSet::empty().with(TagKind::Class))
        .build()
        .unwrap();
    let result = run(&config).unwrap();
    let tags = &result.files[0].tags;
    assert_eq!(tags.len(), 1);
    assert_eq!(tags[0].name, "b");
}

#[test]
fn run_skips_binary_files() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("blob.css"), b".a {}\0\0").unwrap();

    let config = ConfigBuilder::default().walk(walk_of(dir.path())).build().unwrap();
    let result = run(&config).unwrap();
    assert!(result.files[0].is_binary);
    assert!(result.files[0].tags.is_empty());
}

#[test]
fn run_missing_root_is_collected_unless_strict() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("missing");

    let lenient = ConfigBuilder::default().walk(walk_of(&missing)).build().unwrap();
    let result = run(&lenient).unwrap();
    assert!(result.files.is_empty());
    assert_eq!(result.errors.len(), 1);
    assert!(matches!(result.errors[0].1, EngineError::PathNotFound(_)));

    let strict = ConfigBuilder::default()
        .walk(walk_of(&missing))
        .strict(true)
        .build()
        .unwrap();
    assert!(matches!(run(&strict), Err(EngineError::PathNotFound(_))));
}

#[test]
fn run_keeps_walking_past_a_missing_root() {
    let dir = tempdir().unwrap();
    let good = dir.path().join("good");
    fs::create_dir(&good).unwrap();
    fs::write(good.join("a.css"), ".a {}\n").unwrap();

    let walk = WalkOptionsBuilder::default()
        .roots(vec![dir.path().join("missing"), good.clone()])
        .build()
        .unwrap();
    let config = ConfigBuilder::default().walk(walk).build().unwrap();
    let result = run(&config).unwrap();

    assert_eq!(result.files.len(), 1);
    assert_eq!(result.files[0].path, good.join("a.css"));
    assert_eq!(result.files[0].tags[0].name, "a");
    assert_eq!(result.errors.len(), 1);
    assert!(matches!(result.errors[0].1, EngineError::PathNotFound(_)));
}
