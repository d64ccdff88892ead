//! Aggregate post index.
//!
//! Every run regenerates the index from scratch: each post is parsed, given
//! an excerpt, and the entries are ordered newest first before being
//! written out as a JSON array.
//!
//! # Example
//!
//! ```
//! use postmeta_core::index::build_index;
//!
//! let posts = vec![
//!     ("old.md".to_string(), "---\ndate: January 01, 2023\n---\n\nOld".to_string()),
//!     ("new.md".to_string(), "---\ndate: March 05, 2023\n---\n\nNew".to_string()),
//! ];
//! let index = build_index(&posts);
//! assert_eq!(index[0].filename, "new.md");
//! ```

pub mod builder;
pub mod sort;
pub mod types;
pub mod writer;

pub use builder::{
    BuilderError, IndexBuilder, IndexStats, ProgressCallback, build_index, build_sorted,
    index_entry,
};
pub use sort::sort_entries;
pub use types::{IndexEntry, SortMode};
pub use writer::{IndexWriteError, render_index, write_index};
