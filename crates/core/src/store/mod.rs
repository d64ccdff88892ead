//! Post storage.
//!
//! Operations reach posts only through [`PostStore`], so they can run
//! against the posts directory ([`FsStore`]) or an in-memory map
//! ([`MemoryStore`]).

pub mod fs;
pub mod memory;

use thiserror::Error;

pub use fs::{FsStore, write_atomic};
pub use memory::MemoryStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("posts directory does not exist: {0}")]
    MissingRoot(String),

    #[error("file not found: {0}")]
    NotFound(String),

    #[error("failed to list posts in {0}: {1}")]
    WalkError(String, #[source] walkdir::Error),

    #[error("failed to read file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write file {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// A flat collection of named post files.
pub trait PostStore {
    /// Names of files with the given extension (without the dot), sorted.
    fn list_files(&self, extension: &str) -> Result<Vec<String>, StoreError>;

    fn read(&self, name: &str) -> Result<String, StoreError>;

    /// Replace (or create) a file with `contents`.
    fn write(&mut self, name: &str, contents: &str) -> Result<(), StoreError>;

    fn exists(&self, name: &str) -> bool;
}
