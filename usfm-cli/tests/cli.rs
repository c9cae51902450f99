use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;

fn usfm2dict(dir: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("usfm2dict");
    cmd.current_dir(dir).env_remove("RUST_LOG");
    cmd
}

fn write(dir: &Path, name: &str, contents: &str) {
    fs::write(dir.join(name), contents).expect("write fixture");
}

#[test]
fn test_single_file_to_stdout() {
    let dir = tempfile::tempdir().expect("temp dir");
    write(dir.path(), "gen.usfm", "\\id GEN\n\\c 1\n\\v 1 In the beginning.");

    usfm2dict(dir.path())
        .arg("gen.usfm")
        .assert()
        .success()
        .stdout("{\"GEN 1:1\":\"In the beginning.\"}\n");
}

#[test]
fn test_pretty_output() {
    let dir = tempfile::tempdir().expect("temp dir");
    write(
        dir.path(),
        "gen.usfm",
        "\\id GEN\n\\c 1\n\\v 1 One\n\\v 2 Two",
    );

    usfm2dict(dir.path())
        .args(["gen.usfm", "--pretty"])
        .assert()
        .success()
        .stdout("{\n    \"GEN 1:1\": \"One\",\n    \"GEN 1:2\": \"Two\"\n}\n");
}

#[test]
fn test_glob_merges_files_last_wins() {
    let dir = tempfile::tempdir().expect("temp dir");
    write(dir.path(), "a.usfm", "\\id GEN\n\\c 1\n\\v 1 First\n\\v 2 Kept");
    write(dir.path(), "b.usfm", "\\id GEN\n\\c 1\n\\v 1 Second");

    usfm2dict(dir.path())
        .arg("*.usfm")
        .assert()
        .success()
        .stdout("{\"GEN 1:1\":\"Second\",\"GEN 1:2\":\"Kept\"}\n");
}

#[test]
fn test_missing_input_is_skipped() {
    let dir = tempfile::tempdir().expect("temp dir");
    write(dir.path(), "gen.usfm", "\\id GEN\n\\c 1\n\\v 1 Text");

    usfm2dict(dir.path())
        .args(["missing.usfm", "gen.usfm"])
        .assert()
        .success()
        .stdout("{\"GEN 1:1\":\"Text\"}\n")
        .stderr(predicate::str::contains("missing.usfm"));
}

#[test]
fn test_no_readable_input_gives_empty_object() {
    let dir = tempfile::tempdir().expect("temp dir");

    usfm2dict(dir.path())
        .arg("nothing-*.usfm")
        .assert()
        .success()
        .stdout("{}\n");
}

#[test]
fn test_output_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    write(dir.path(), "gen.usfm", "\\id GEN\n\\c 1\n\\v 1 Text");

    usfm2dict(dir.path())
        .args(["gen.usfm", "-o", "out.json"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let written = fs::read_to_string(dir.path().join("out.json")).expect("output written");
    assert_eq!(written, "{\"GEN 1:1\":\"Text\"}");
}

#[test]
fn test_token_simple_format() {
    let dir = tempfile::tempdir().expect("temp dir");
    write(dir.path(), "gen.usfm", "\\c 1");

    usfm2dict(dir.path())
        .args(["gen.usfm", "--format", "token-simple"])
        .assert()
        .success()
        .stdout("# gen.usfm\n<chapter:\\c 1>\n<text:\"\\n\">\n");
}

#[test]
fn test_config_file_sets_indent() {
    let dir = tempfile::tempdir().expect("temp dir");
    write(dir.path(), "gen.usfm", "\\id GEN\n\\c 1\n\\v 1 Text");
    write(dir.path(), "usfm2dict.toml", "[output]\npretty = true\nindent = 2\n");

    usfm2dict(dir.path())
        .arg("gen.usfm")
        .assert()
        .success()
        .stdout("{\n  \"GEN 1:1\": \"Text\"\n}\n");
}

#[test]
fn test_invalid_log_level_fails() {
    let dir = tempfile::tempdir().expect("temp dir");
    write(dir.path(), "gen.usfm", "\\id GEN");

    usfm2dict(dir.path())
        .args(["gen.usfm", "--log-level", "loud"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::starts_with("Error: invalid log level"));
}
