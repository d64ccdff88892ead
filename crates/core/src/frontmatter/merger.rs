//! Merging partial metadata updates into an existing record.

use super::types::{FieldSet, MetadataRecord, MetadataUpdate};

/// Merge `update` into `existing`, producing a new record.
///
/// - Scalars: a present, non-blank update value replaces the existing one.
/// - `categories`/`tags`: set union, duplicates removed.
/// - Unknown fields: kept unless the update names the same key.
///
/// No clock is read here; a missing date is filled in by
/// [`serialize_with_defaults`](super::serializer::serialize_with_defaults).
pub fn merge(existing: &MetadataRecord, update: &MetadataUpdate) -> MetadataRecord {
    let mut merged = existing.clone();

    if let Some(title) = non_blank(&update.title) {
        merged.title = title;
    }
    if let Some(date) = non_blank(&update.date) {
        merged.date = date;
    }
    if let Some(image) = non_blank(&update.image) {
        merged.image = Some(image);
    }

    merged.categories = union(&existing.categories, &update.categories);
    merged.tags = union(&existing.tags, &update.tags);

    for (key, raw) in update.extra.iter() {
        merged.extra.insert(key, raw);
    }

    merged
}

fn non_blank(value: &Option<String>) -> Option<String> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty()).map(ToOwned::to_owned)
}

fn union(existing: &[String], update: &[String]) -> Vec<String> {
    let mut set: FieldSet = existing.iter().cloned().collect();
    set.extend(update.iter().map(|v| v.trim()).filter(|v| !v.is_empty()));
    set.into_vec()
}
