//! JSON index artifact.

use std::path::Path;

use thiserror::Error;
use tracing::debug;

use super::types::IndexEntry;
use crate::store::write_atomic;

#[derive(Debug, Error)]
pub enum IndexWriteError {
    #[error("failed to encode index: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("failed to write index {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Render entries as a pretty-printed JSON array.
pub fn render_index(entries: &[IndexEntry]) -> Result<String, IndexWriteError> {
    let mut json = serde_json::to_string_pretty(entries)?;
    json.push('\n');
    Ok(json)
}

/// Write the index to `path`, replacing any previous file atomically.
///
/// Missing parent directories are created.
pub fn write_index(path: &Path, entries: &[IndexEntry]) -> Result<(), IndexWriteError> {
    let json = render_index(entries)?;
    let write_err = |source| IndexWriteError::Write { path: path.display().to_string(), source };

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(write_err)?;
    }
    write_atomic(path, &json).map_err(write_err)?;
    debug!("wrote {} entries to {}", entries.len(), path.display());
    Ok(())
}
