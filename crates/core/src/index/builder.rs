//! Index building orchestration.

use std::path::Path;

use thiserror::Error;
use tracing::{debug, info};

use super::sort::sort_entries;
use super::types::{IndexEntry, SortMode};
use crate::excerpt::excerpt;
use crate::frontmatter::parse_document;
use crate::store::{PostStore, StoreError};

#[derive(Debug, Error)]
pub enum BuilderError {
    #[error("Failed to list posts: {0}")]
    List(#[source] StoreError),

    #[error("Failed to read post {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: StoreError,
    },
}

/// Statistics from an indexing run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexStats {
    /// Number of posts written to the index.
    pub posts_indexed: usize,
    /// Ordering strategy that was applied.
    pub sort_mode: SortMode,
    /// Indexing duration in milliseconds.
    pub duration_ms: u64,
}

/// Progress callback for indexing operations.
/// Parameters: (current, total, current_file)
pub type ProgressCallback = Box<dyn Fn(usize, usize, &str)>;

/// Build the sorted index for a set of `(filename, text)` documents.
pub fn build_index(documents: &[(String, String)]) -> Vec<IndexEntry> {
    build_sorted(documents).0
}

/// Like [`build_index`], also reporting which ordering was used.
pub fn build_sorted(documents: &[(String, String)]) -> (Vec<IndexEntry>, SortMode) {
    let mut entries: Vec<IndexEntry> =
        documents.iter().map(|(filename, text)| index_entry(filename, text)).collect();
    let mode = sort_entries(&mut entries);
    (entries, mode)
}

/// Derive the index entry for a single post.
pub fn index_entry(filename: &str, text: &str) -> IndexEntry {
    let (record, body) = parse_document(text).into_parts();
    let title = if record.title.trim().is_empty() {
        title_from_filename(filename)
    } else {
        record.title
    };

    IndexEntry {
        filename: filename.to_string(),
        title,
        date: record.date,
        categories: record.categories,
        tags: record.tags,
        image: record.image,
        excerpt: excerpt(&body),
    }
}

/// `my-first-post.md` becomes `my first post`.
fn title_from_filename(filename: &str) -> String {
    let stem = Path::new(filename)
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| filename.to_string());
    stem.replace('-', " ")
}

/// Builder that reads every post from a store and indexes it.
pub struct IndexBuilder<'a> {
    store: &'a dyn PostStore,
}

impl<'a> IndexBuilder<'a> {
    pub fn new(store: &'a dyn PostStore) -> Self {
        Self { store }
    }

    /// Read all `*.md` posts and build the sorted index.
    ///
    /// A post that cannot be read aborts the run; nothing is partially
    /// indexed.
    pub fn build(
        &self,
        progress: Option<ProgressCallback>,
    ) -> Result<(Vec<IndexEntry>, IndexStats), BuilderError> {
        let start = std::time::Instant::now();

        let names = self.store.list_files("md").map_err(BuilderError::List)?;
        let mut documents = Vec::with_capacity(names.len());
        for (i, name) in names.iter().enumerate() {
            if let Some(ref cb) = progress {
                cb(i + 1, names.len(), name.as_str());
            }
            let text = self
                .store
                .read(name)
                .map_err(|source| BuilderError::Read { path: name.clone(), source })?;
            debug!("indexing {name}");
            documents.push((name.clone(), text));
        }

        let (entries, sort_mode) = build_sorted(&documents);
        let stats = IndexStats {
            posts_indexed: entries.len(),
            sort_mode,
            duration_ms: start.elapsed().as_millis() as u64,
        };
        info!(
            "indexed {} posts ({} order) in {}ms",
            stats.posts_indexed,
            stats.sort_mode.as_str(),
            stats.duration_ms
        );
        Ok((entries, stats))
    }
}
