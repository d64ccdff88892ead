//! Post operations: creating posts, editing their metadata and
//! regenerating the site index.
//!
//! Every operation goes through a [`PostStore`], so the same code runs
//! against the posts directory and against an in-memory store in tests.

pub mod create;
pub mod edit;
pub mod notebook;

use std::path::Path;

use thiserror::Error;

use crate::index::{
    BuilderError, IndexBuilder, IndexStats, IndexWriteError, ProgressCallback, write_index,
};
use crate::store::{PostStore, StoreError};

pub use create::{create_post, slugify};
pub use edit::{add_tags, parse_tag_list, show_post, update_post};
pub use notebook::{ConversionError, NotebookConverter, import_notebook};

#[derive(Debug, Error)]
pub enum PostError {
    #[error("post not found: {0}")]
    NotFound(String),

    #[error("not a markdown post (expected .md): {0}")]
    NotMarkdown(String),

    #[error("not a Jupyter notebook (expected .ipynb): {0}")]
    NotANotebook(String),

    #[error("post already exists: {0}")]
    AlreadyExists(String),

    #[error("title {0:?} does not produce a usable filename")]
    InvalidTitle(String),

    #[error("date should be YYYY-MM-DD, got {0:?}")]
    InvalidDate(String),

    #[error("notebook conversion failed: {0}")]
    Conversion(String),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Index(#[from] BuilderError),

    #[error(transparent)]
    IndexWrite(#[from] IndexWriteError),
}

/// Regenerate the JSON index from every `*.md` post in the store.
pub fn generate_index(
    store: &dyn PostStore,
    output: &Path,
    progress: Option<ProgressCallback>,
) -> Result<IndexStats, PostError> {
    let (entries, stats) = IndexBuilder::new(store).build(progress)?;
    write_index(output, &entries)?;
    Ok(stats)
}

/// Check that `filename` names an existing markdown post.
pub(crate) fn ensure_post(store: &dyn PostStore, filename: &str) -> Result<(), PostError> {
    if !is_markdown(filename) {
        return Err(PostError::NotMarkdown(filename.to_string()));
    }
    if !store.exists(filename) {
        return Err(PostError::NotFound(filename.to_string()));
    }
    Ok(())
}

fn is_markdown(filename: &str) -> bool {
    Path::new(filename).extension().is_some_and(|ext| ext == "md")
}
