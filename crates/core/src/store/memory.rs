//! In-memory post store.

use std::collections::BTreeMap;

use super::{PostStore, StoreError};

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    files: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, handy for setting up fixtures.
    pub fn with_file(mut self, name: impl Into<String>, contents: impl Into<String>) -> Self {
        self.files.insert(name.into(), contents.into());
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.files.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl PostStore for MemoryStore {
    fn list_files(&self, extension: &str) -> Result<Vec<String>, StoreError> {
        let suffix = format!(".{extension}");
        Ok(self.files.keys().filter(|name| name.ends_with(&suffix)).cloned().collect())
    }

    fn read(&self, name: &str) -> Result<String, StoreError> {
        self.files.get(name).cloned().ok_or_else(|| StoreError::NotFound(name.to_string()))
    }

    fn write(&mut self, name: &str, contents: &str) -> Result<(), StoreError> {
        self.files.insert(name.to_string(), contents.to_string());
        Ok(())
    }

    fn exists(&self, name: &str) -> bool {
        self.files.contains_key(name)
    }
}
