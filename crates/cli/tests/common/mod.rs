#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

/// A temporary site with a `posts/` directory and a config pointing at it.
pub struct Site {
    pub dir: TempDir,
    pub config: PathBuf,
}

impl Site {
    pub fn new() -> Self {
        Self::with_logging("")
    }

    pub fn with_logging(logging: &str) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("posts")).unwrap();

        let config = root.join("config.toml");
        let toml = format!(
            r#"
version = 1
profile = "default"

[profiles.default]
site_root = "{}"
{logging}
"#,
            root.display()
        );
        write_file(&config, &toml);
        Self { dir, config }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn post(&self, name: &str) -> PathBuf {
        self.root().join("posts").join(name)
    }

    pub fn write_post(&self, name: &str, content: &str) {
        write_file(&self.post(name), content);
    }

    pub fn read_post(&self, name: &str) -> String {
        fs::read_to_string(self.post(name)).unwrap()
    }

    pub fn cmd(&self) -> std::process::Command {
        let mut cmd = std::process::Command::new(assert_cmd::cargo::cargo_bin!("postmeta"));
        cmd.arg("--config").arg(&self.config);
        cmd.env_remove("RUST_LOG");
        cmd
    }
}
