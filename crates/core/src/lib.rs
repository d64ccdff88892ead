//! Core library for postmeta.
//!
//! Parses the `---` delimited frontmatter of blog posts, merges metadata
//! updates into it, writes posts back out and builds the aggregate post
//! index consumed by the site.

#![allow(clippy::module_name_repetitions)]

pub mod clock;
pub mod config;
pub mod excerpt;
pub mod frontmatter;
pub mod index;
pub mod posts;
pub mod store;

pub use frontmatter::{
    MetadataRecord, MetadataUpdate, merge_metadata, parse_document, serialize_document,
};
pub use index::{IndexEntry, build_index};

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
