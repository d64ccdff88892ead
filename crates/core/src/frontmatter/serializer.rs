//! Frontmatter serialization back to post text.

use tracing::debug;

use super::codec::{encode_array, encode_scalar};
use super::types::{KNOWN_KEYS, MetadataRecord};
use crate::clock::Clock;

/// Serialize a record and body to post text.
///
/// Fields are written in fixed order (title, date, categories, tags, image,
/// then unknown keys in their original order). Empty fields are omitted.
/// The body is appended verbatim after a blank separator line.
pub fn serialize(record: &MetadataRecord, body: &str) -> String {
    let mut out = String::with_capacity(body.len() + 128);
    out.push_str("---\n");
    out.push_str(&serialize_fields(record));
    out.push_str("---\n\n");
    out.push_str(body);
    out
}

/// Like [`serialize`], but a missing date is set to today from `clock`.
pub fn serialize_with_defaults(record: &MetadataRecord, body: &str, clock: &dyn Clock) -> String {
    if record.date.trim().is_empty() {
        let mut record = record.clone();
        record.date = clock.display_date();
        debug!("defaulting missing date to {}", record.date);
        return serialize(&record, body);
    }
    serialize(record, body)
}

/// Serialize the fields of a record (without delimiters).
pub fn serialize_fields(record: &MetadataRecord) -> String {
    let mut out = String::new();

    push_scalar(&mut out, "title", &record.title);
    push_scalar(&mut out, "date", &record.date);
    push_array(&mut out, "categories", &record.categories);
    push_array(&mut out, "tags", &record.tags);
    if let Some(image) = &record.image {
        push_scalar(&mut out, "image", image);
    }

    for (key, raw) in record.extra.iter() {
        if KNOWN_KEYS.contains(&key) {
            debug!("skipping unknown-field entry shadowing known key {key}");
            continue;
        }
        if raw.is_empty() || raw.starts_with('\n') {
            out.push_str(&format!("{key}:{raw}\n"));
        } else {
            out.push_str(&format!("{key}: {raw}\n"));
        }
    }

    out
}

fn push_scalar(out: &mut String, key: &str, value: &str) {
    if value.trim().is_empty() {
        return;
    }
    out.push_str(&format!("{key}: {}\n", encode_scalar(value)));
}

fn push_array(out: &mut String, key: &str, values: &[String]) {
    if let Some(encoded) = encode_array(values) {
        out.push_str(&format!("{key}: {encoded}\n"));
    }
}
