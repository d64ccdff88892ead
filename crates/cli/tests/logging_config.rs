mod common;

use assert_cmd::prelude::*;
use common::Site;

#[test]
fn test_logging_to_file() {
    let log_file = tempfile::tempdir().unwrap();
    let log_path = log_file.path().join("logs/postmeta.log");
    let site = Site::with_logging(&format!(
        "[logging]\nlevel = \"warn\"\nfile_level = \"debug\"\nfile = \"{}\"\n",
        log_path.display()
    ));
    site.write_post("a.md", "---\ntitle: A\ndate: March 05, 2023\n---\n\nA");

    site.cmd().arg("index").assert().success();

    let log = std::fs::read_to_string(&log_path).unwrap();
    assert!(log.contains("indexed 1 posts"), "log was: {log}");
}

#[test]
fn test_logging_level_parsing() {
    let site = Site::with_logging("[logging]\nlevel = \"trace\"\n");
    site.cmd().arg("doctor").assert().success();
}

#[test]
fn test_sort_fallback_warns_on_stderr() {
    let site = Site::new();
    site.write_post("a.md", "---\ndate: someday\n---\n\nA");

    site.cmd()
        .arg("index")
        .assert()
        .success()
        .stderr(predicates::str::contains("a.md"))
        .stderr(predicates::str::contains("someday"));
}

#[test]
fn test_unwritable_log_directory_fails() {
    let blocker = tempfile::NamedTempFile::new().unwrap();
    let log_path = blocker.path().join("postmeta.log");
    let site = Site::with_logging(&format!("[logging]\nfile = \"{}\"\n", log_path.display()));

    site.cmd()
        .arg("index")
        .assert()
        .failure()
        .stderr(predicates::str::contains("Failed to create log directory"));
}
