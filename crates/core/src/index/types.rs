//! Index data types.

use serde::{Deserialize, Serialize};

/// One post in the aggregate index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexEntry {
    pub filename: String,
    pub title: String,
    /// Display date as written in the post (may be empty).
    pub date: String,
    pub categories: Vec<String>,
    pub tags: Vec<String>,
    pub image: Option<String>,
    pub excerpt: String,
}

/// How entries were ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortMode {
    /// Every date parsed in the display format.
    Chronological,
    /// At least one date did not parse; raw strings were compared instead.
    Lexicographic,
}

impl SortMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Chronological => "chronological",
            Self::Lexicographic => "lexicographic",
        }
    }
}
