//! Metadata edits on existing posts.

use tracing::{debug, info};

use super::{PostError, ensure_post};
use crate::clock::{Clock, normalize_input_date};
use crate::frontmatter::{
    MetadataRecord, MetadataUpdate, merge_metadata, parse_document, serialize_with_defaults,
};
use crate::store::PostStore;

/// Split a comma-separated tag list, dropping blank entries.
pub fn parse_tag_list(tags: &str) -> Vec<String> {
    tags.split(',').map(str::trim).filter(|t| !t.is_empty()).map(ToOwned::to_owned).collect()
}

/// Add comma-separated `tags` to a post. Existing tags are kept.
pub fn add_tags(
    store: &mut dyn PostStore,
    filename: &str,
    tags: &str,
    clock: &dyn Clock,
) -> Result<MetadataRecord, PostError> {
    let update = MetadataUpdate::with_tags(parse_tag_list(tags));
    update_post(store, filename, &update, clock)
}

/// Merge `update` into a post's metadata and write the post back.
///
/// A `YYYY-MM-DD` date in the update is stored in display form. A post
/// without a metadata block gets one; a missing date is set to today.
/// Returns the merged record.
pub fn update_post(
    store: &mut dyn PostStore,
    filename: &str,
    update: &MetadataUpdate,
    clock: &dyn Clock,
) -> Result<MetadataRecord, PostError> {
    ensure_post(store, filename)?;
    let content = store.read(filename)?;
    let parsed = parse_document(&content);
    if !parsed.has_frontmatter {
        debug!("{filename} has no frontmatter, creating a new block");
    }

    let mut update = update.clone();
    update.date = update.date.as_deref().map(normalize_input_date);

    let merged = merge_metadata(&parsed.record, &update);
    let output = serialize_with_defaults(&merged, &parsed.body, clock);
    if output != content {
        store.write(filename, &output)?;
        info!("updated {filename}");
    } else {
        debug!("{filename} unchanged");
    }

    Ok(parse_document(&output).record)
}

/// Read a post's metadata and body.
pub fn show_post(
    store: &dyn PostStore,
    filename: &str,
) -> Result<(MetadataRecord, String), PostError> {
    ensure_post(store, filename)?;
    let content = store.read(filename)?;
    Ok(parse_document(&content).into_parts())
}
