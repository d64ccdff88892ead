//! Newest-first ordering of index entries.

use std::cmp::Reverse;

use tracing::warn;

use super::types::{IndexEntry, SortMode};
use crate::clock::parse_display_date;

/// Sort entries by date, newest first. Entries without a date go last.
///
/// Dates are compared as calendar dates when every non-empty date parses in
/// the display format. A single unparseable date switches the whole
/// collection to descending comparison of the raw strings; the two
/// strategies are never mixed. The sort is stable.
pub fn sort_entries(entries: &mut [IndexEntry]) -> SortMode {
    let unparseable = entries
        .iter()
        .find(|entry| !entry.date.trim().is_empty() && parse_display_date(&entry.date).is_none());

    if let Some(entry) = unparseable {
        warn!(
            "{}: date {:?} is not in 'Month DD, YYYY' form, falling back to text ordering",
            entry.filename, entry.date
        );
        entries.sort_by_key(|entry| Reverse(entry.date.clone()));
        return SortMode::Lexicographic;
    }

    entries.sort_by_cached_key(|entry| {
        let date = parse_display_date(&entry.date);
        (date.is_none(), Reverse(date))
    });
    SortMode::Chronological
}
