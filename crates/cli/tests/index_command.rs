mod common;

use assert_cmd::prelude::*;
use common::Site;
use predicates::prelude::*;
use regex::Regex;

fn filenames(json: &str) -> Vec<String> {
    let re = Regex::new(r#""filename": "([^"]+)""#).unwrap();
    re.captures_iter(json).map(|c| c[1].to_string()).collect()
}

#[test]
fn index_writes_to_configured_path() {
    let site = Site::new();
    site.write_post("jan.md", "---\ntitle: Jan\ndate: January 01, 2023\n---\n\nJanuary.");
    site.write_post("mar.md", "---\ntitle: Mar\ndate: March 05, 2023\n---\n\nMarch.");
    site.write_post("feb.md", "---\ntitle: Feb\ndate: February 10, 2023\n---\n\nFebruary.");

    site.cmd()
        .arg("index")
        .assert()
        .success()
        .stdout(predicate::str::contains("Generated index with 3 posts"));

    let json = std::fs::read_to_string(site.root().join("post-index.json")).unwrap();
    assert_eq!(filenames(&json), vec!["mar.md", "feb.md", "jan.md"]);
}

#[test]
fn index_output_override_and_text_fallback() {
    let site = Site::new();
    site.write_post("a.md", "---\ndate: January 01, 2023\n---\n\nA");
    site.write_post("b.md", "---\ndate: yesterday\n---\n\nB");
    let output = site.root().join("public/index.json");

    site.cmd()
        .arg("index")
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("sorted as text"));

    let json = std::fs::read_to_string(&output).unwrap();
    assert_eq!(filenames(&json), vec!["b.md", "a.md"]);
    assert!(!site.root().join("post-index.json").exists());
}

#[test]
fn index_verbose_lists_posts() {
    let site = Site::new();
    site.write_post("only.md", "Body");
    site.cmd()
        .args(["index", "--verbose"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[1/1] only.md"));
}

#[test]
fn index_fails_without_posts_dir() {
    let site = Site::new();
    std::fs::remove_dir(site.root().join("posts")).unwrap();
    site.cmd()
        .arg("index")
        .assert()
        .failure()
        .stderr(predicate::str::contains("posts"));
}

#[test]
fn completions_prints_script() {
    let site = Site::new();
    site.cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("postmeta"));
}
