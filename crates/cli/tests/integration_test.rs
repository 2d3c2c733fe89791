//! End-to-end tests for the `scss_tags` binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

fn scss_tags() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_scss_tags"));
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn shows_help() {
    scss_tags()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("scss_tags"));
}

#[test]
fn lists_kinds() {
    scss_tags()
        .arg("--list-kinds")
        .assert()
        .success()
        .stdout(predicate::str::contains("c  class"))
        .stdout(predicate::str::contains("i  id"));
}

#[test]
fn writes_sorted_ctags_for_directory() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("site.scss"),
        "/* .ignored {} */\n#header {\n  color: red;\n}\n.nav,\n.menu { content: \"}\"; }\n",
    )
    .unwrap();
    fs::write(dir.path().join("notes.txt"), ".skipped {}\n").unwrap();

    let assert = scss_tags().arg(dir.path()).assert().success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let tags: Vec<&str> = stdout.lines().filter(|l| !l.starts_with("!_TAG_")).collect();

    let file = dir.path().join("site.scss").display().to_string();
    assert_eq!(
        tags,
        vec![
            format!("header\t{file}\t2;\"\ti"),
            format!("menu\t{file}\t6;\"\tc"),
            format!("nav\t{file}\t5;\"\tc"),
        ]
    );
    assert!(stdout.starts_with("!_TAG_FILE_FORMAT\t2\t"));
    assert!(!stdout.contains("ignored"));
    assert!(!stdout.contains("skipped"));
}

#[test]
fn explicit_file_is_scanned_regardless_of_extension() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("theme.less");
    fs::write(&file, ".button {}\n").unwrap();

    scss_tags()
        .args(["--format", "jsonl"])
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"name\":\"button\""))
        .stdout(predicate::str::contains("\"type\":\"total\""));
}

#[test]
fn kinds_filter_and_json_output() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("a.css");
    fs::write(&file, "ul li {}\n.x {}\n#y {}\n").unwrap();

    let assert = scss_tags()
        .args(["-f", "json", "--kinds", "s"])
        .arg(&file)
        .assert()
        .success();
    let value: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    let arr = value.as_array().unwrap();
    assert_eq!(arr.len(), 1);
    assert_eq!(arr[0]["name"], "ul li ");
    assert_eq!(arr[0]["kind"], "selector");
    assert_eq!(arr[0]["line"], 1);
}

#[test]
fn writes_output_file() {
    let dir = tempdir().unwrap();
    let css = dir.path().join("a.css");
    let out = dir.path().join("tags");
    fs::write(&css, ".only {}\n").unwrap();

    scss_tags()
        .arg("-o")
        .arg(&out)
        .arg(&css)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let written = fs::read_to_string(&out).unwrap();
    assert!(written.contains("only\t"));
}

#[test]
fn missing_path_warns_but_succeeds() {
    let dir = tempdir().unwrap();
    scss_tags()
        .arg(dir.path().join("missing"))
        .assert()
        .success()
        .stderr(predicate::str::contains("does not exist"));
}

#[test]
fn missing_path_fails_in_strict_mode() {
    let dir = tempdir().unwrap();
    scss_tags()
        .arg("--strict")
        .arg(dir.path().join("missing"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not exist"));
}

#[test]
fn rejects_unknown_kind() {
    scss_tags().args(["--kinds", "q"]).assert().failure();
}

#[test]
fn missing_root_does_not_hide_other_roots() {
    let dir = tempdir().unwrap();
    let css = dir.path().join("a.css");
    fs::write(&css, ".still-here {}\n").unwrap();

    scss_tags()
        .arg(dir.path().join("missing"))
        .arg(&css)
        .assert()
        .success()
        .stdout(predicate::str::contains("still-here\t"))
        .stderr(predicate::str::contains("does not exist"));
}
