//! Frontmatter types and data structures.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::collections::HashSet;

use super::codec;

/// Keys with dedicated fields on [`MetadataRecord`], in emission order.
pub const KNOWN_KEYS: [&str; 5] = ["title", "date", "categories", "tags", "image"];

/// Structured form of a post's frontmatter block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MetadataRecord {
    pub title: String,
    /// Free-form display date, e.g. `March 05, 2023`.
    pub date: String,
    pub categories: Vec<String>,
    pub tags: Vec<String>,
    pub image: Option<String>,
    /// Unrecognized keys, kept verbatim so they survive a rewrite.
    pub extra: ExtraFields,
}

impl MetadataRecord {
    /// True when no field would be emitted by the serializer.
    pub fn is_empty(&self) -> bool {
        self.title.is_empty()
            && self.date.is_empty()
            && self.categories.is_empty()
            && self.tags.is_empty()
            && self.image.as_deref().is_none_or(str::is_empty)
            && self.extra.is_empty()
    }
}

/// Result of splitting a post into its metadata and body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedDocument {
    /// Decoded metadata (empty if the post has no block).
    pub record: MetadataRecord,
    /// Everything after the closing delimiter and its blank separator line.
    pub body: String,
    /// Whether a frontmatter block was found at the start of the text.
    pub has_frontmatter: bool,
}

impl ParsedDocument {
    pub fn into_parts(self) -> (MetadataRecord, String) {
        (self.record, self.body)
    }
}

/// Opaque `key: raw` entries in order of first appearance.
///
/// The raw text is everything after the colon, including any continuation
/// lines (for example a block list under an unknown key), so that writing
/// the record back reproduces the original lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtraFields {
    entries: Vec<(String, String)>,
}

impl ExtraFields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a field. A replaced field keeps its position.
    pub fn insert(&mut self, key: impl Into<String>, raw: impl Into<String>) {
        let key = key.into();
        let raw = raw.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = raw,
            None => self.entries.push((key, raw)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ExtraFields {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut fields = Self::new();
        for (k, v) in iter {
            fields.insert(k, v);
        }
        fields
    }
}

impl Serialize for ExtraFields {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (k, v) in &self.entries {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

/// Set of array-field values (categories, tags).
///
/// Membership is what matters; iteration yields values in insertion order
/// only so that output is reproducible, not because callers may rely on it.
#[derive(Debug, Clone, Default)]
pub struct FieldSet {
    items: Vec<String>,
    seen: HashSet<String>,
}

impl FieldSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a value. Returns false if it was already present.
    pub fn insert(&mut self, value: impl Into<String>) -> bool {
        let value = value.into();
        if self.seen.contains(&value) {
            return false;
        }
        self.seen.insert(value.clone());
        self.items.push(value);
        true
    }

    pub fn contains(&self, value: &str) -> bool {
        self.seen.contains(value)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }

    /// Materialize the set as a sequence.
    pub fn into_vec(self) -> Vec<String> {
        self.items
    }
}

impl PartialEq for FieldSet {
    fn eq(&self, other: &Self) -> bool {
        self.seen == other.seen
    }
}

impl Eq for FieldSet {}

impl<S: Into<String>> FromIterator<S> for FieldSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<S: Into<String>> Extend<S> for FieldSet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

/// A partial set of field values to merge into a [`MetadataRecord`].
///
/// `None` or empty scalars leave the existing value alone; array values are
/// unioned with the existing ones.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetadataUpdate {
    pub title: Option<String>,
    pub date: Option<String>,
    pub image: Option<String>,
    pub categories: Vec<String>,
    pub tags: Vec<String>,
    pub extra: ExtraFields,
}

impl MetadataUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Update that only adds tags.
    pub fn with_tags<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { tags: tags.into_iter().map(Into::into).collect(), ..Self::default() }
    }

    /// Set a field by key, routing well-known keys to their typed slot.
    ///
    /// Array keys accept either a bracketed list or a bare comma-separated
    /// list. Unknown keys are stored as raw text.
    pub fn set_field(&mut self, key: &str, value: &str) {
        match key {
            "title" => self.title = Some(codec::decode_scalar(value)),
            "date" => self.date = Some(codec::decode_scalar(value)),
            "image" => self.image = Some(codec::decode_scalar(value)),
            "categories" => self.categories.extend(codec::decode_array(value)),
            "tags" => self.tags.extend(codec::decode_array(value)),
            _ => self.extra.insert(key, value.trim()),
        }
    }

    /// True when merging this update changes nothing.
    pub fn is_empty(&self) -> bool {
        let blank = |v: &Option<String>| v.as_deref().is_none_or(|s| s.trim().is_empty());
        blank(&self.title)
            && blank(&self.date)
            && blank(&self.image)
            && self.categories.is_empty()
            && self.tags.is_empty()
            && self.extra.is_empty()
    }
}
