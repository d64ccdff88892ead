//! Posts directory on disk.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

use super::{PostStore, StoreError};

/// Store backed by a single posts directory.
///
/// Listing is not recursive: posts live directly in the directory.
#[derive(Debug, Clone)]
pub struct FsStore {
    root: PathBuf,
}

impl FsStore {
    pub fn new(root: &Path) -> Result<Self, StoreError> {
        let root = root
            .canonicalize()
            .map_err(|_| StoreError::MissingRoot(root.display().to_string()))?;

        if !root.is_dir() {
            return Err(StoreError::MissingRoot(root.display().to_string()));
        }

        Ok(Self { root })
    }

    /// Get the posts directory path.
    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path_of(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }
}

impl PostStore for FsStore {
    fn list_files(&self, extension: &str) -> Result<Vec<String>, StoreError> {
        let mut names = Vec::new();

        for entry in WalkDir::new(&self.root)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .into_iter()
            .filter_entry(|e| !is_hidden(e))
        {
            let entry =
                entry.map_err(|e| StoreError::WalkError(self.root.display().to_string(), e))?;

            let path = entry.path();
            if !entry.file_type().is_file() || !has_extension(path, extension) {
                continue;
            }
            names.push(entry.file_name().to_string_lossy().into_owned());
        }

        names.sort();
        debug!("found {} .{extension} files in {}", names.len(), self.root.display());
        Ok(names)
    }

    fn read(&self, name: &str) -> Result<String, StoreError> {
        let path = self.path_of(name);
        if !path.is_file() {
            return Err(StoreError::NotFound(path.display().to_string()));
        }
        fs::read_to_string(&path)
            .map_err(|source| StoreError::Read { path: path.display().to_string(), source })
    }

    fn write(&mut self, name: &str, contents: &str) -> Result<(), StoreError> {
        let path = self.path_of(name);
        write_atomic(&path, contents)
            .map_err(|source| StoreError::Write { path: path.display().to_string(), source })
    }

    fn exists(&self, name: &str) -> bool {
        self.path_of(name).is_file()
    }
}

/// Write `contents` to a temporary sibling of `path`, then rename it over
/// `path`. Readers never observe a partially written file.
pub fn write_atomic(path: &Path, contents: &str) -> std::io::Result<()> {
    let file_name = path.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default();
    let tmp = path.with_file_name(format!(".{file_name}.tmp-{}", std::process::id()));

    let result = (|| {
        let mut file = fs::File::create(&tmp)?;
        file.write_all(contents.as_bytes())?;
        file.sync_all()?;
        fs::rename(&tmp, path)
    })();

    if result.is_err() {
        let _ = fs::remove_file(&tmp);
    }
    result
}

fn is_hidden(entry: &walkdir::DirEntry) -> bool {
    entry.depth() > 0 && entry.file_name().to_string_lossy().starts_with('.')
}

fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension().and_then(|e| e.to_str()).is_some_and(|e| e == extension)
}
