//! Frontmatter parsing, merging, and serialization.
//!
//! This module provides functionality to:
//! - Parse the `---` delimited metadata block at the top of a post
//! - Merge partial metadata updates into an existing record
//! - Serialize a record and body back to a post in canonical form

pub mod codec;
pub mod merger;
pub mod parser;
pub mod serializer;
pub mod types;

pub use merger::merge as merge_metadata;
pub use parser::parse as parse_document;
pub use serializer::{serialize as serialize_document, serialize_with_defaults};
pub use types::{ExtraFields, FieldSet, MetadataRecord, MetadataUpdate, ParsedDocument};
