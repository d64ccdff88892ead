use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::tempdir;

fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

#[test]
fn doctor_reads_provided_config_path() {
    let tmp = tempdir().unwrap();
    let cfg = tmp.path().join("config.toml");
    let toml = r#"
version = 1
profile = "default"

[profiles.default]
site_root  = "/tmp/blog"
index_path = "{{site_root}}/public/post-index.json"
"#;
    write_file(&cfg, toml);

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("postmeta"));
    cmd.args(["doctor", "--config", cfg.to_str().unwrap()]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("OK   postmeta doctor"))
        .stdout(predicate::str::contains("profile: default"))
        .stdout(predicate::str::contains("site_root: /tmp/blog"))
        .stdout(predicate::str::contains("posts_dir: /tmp/blog/posts"))
        .stdout(predicate::str::contains("index_path: /tmp/blog/public/post-index.json"));
}

#[test]
fn doctor_uses_xdg_default_when_present() {
    let tmp = tempdir().unwrap();
    let cfg_path = tmp.path().join("postmeta").join("config.toml");
    write_file(
        &cfg_path,
        r#"
version = 1
profile = "default"
[profiles.default]
site_root = "/tmp/b"
"#,
    );

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("postmeta"));
    cmd.env("XDG_CONFIG_HOME", tmp.path());
    cmd.arg("doctor");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("OK   postmeta doctor"))
        .stdout(predicate::str::contains("site_root: /tmp/b"));
}

#[test]
fn doctor_flags_missing_posts_dir() {
    let tmp = tempdir().unwrap();
    let cfg = tmp.path().join("config.toml");
    write_file(
        &cfg,
        &format!("version = 1\n[profiles.default]\nsite_root = \"{}\"\n", tmp.path().display()),
    );

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("postmeta"));
    cmd.arg("--config").arg(&cfg).arg("doctor");
    cmd.assert().success().stdout(predicate::str::contains("(missing)"));
}
