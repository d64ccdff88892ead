//! New post scaffolding.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use tracing::info;

use super::PostError;
use crate::clock::{Clock, INPUT_DATE_FORMAT, format_display_date};
use crate::frontmatter::{MetadataRecord, serialize_document};
use crate::store::PostStore;

static NON_SLUG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9]+").expect("valid regex"));

/// Turn a title into a filename stem: `Hello, World!` becomes `hello-world`.
pub fn slugify(title: &str) -> String {
    NON_SLUG.replace_all(&title.to_lowercase(), "-").trim_matches('-').to_string()
}

/// Create a new post named after `title`.
///
/// `date` must be `YYYY-MM-DD` when given; it is stored in the display
/// form. Without it, today's date from `clock` is used. Returns the new
/// post's filename.
pub fn create_post(
    store: &mut dyn PostStore,
    title: &str,
    date: Option<&str>,
    clock: &dyn Clock,
) -> Result<String, PostError> {
    let slug = slugify(title);
    if slug.is_empty() {
        return Err(PostError::InvalidTitle(title.to_string()));
    }
    let filename = format!("{slug}.md");

    let date = match date {
        Some(input) => NaiveDate::parse_from_str(input.trim(), INPUT_DATE_FORMAT)
            .map(format_display_date)
            .map_err(|_| PostError::InvalidDate(input.to_string()))?,
        None => clock.display_date(),
    };

    if store.exists(&filename) {
        return Err(PostError::AlreadyExists(filename));
    }

    let record = MetadataRecord {
        title: title.trim().to_string(),
        date,
        ..Default::default()
    };
    let body = format!("# {}\n\nWrite your post content here...\n", title.trim());
    store.write(&filename, &serialize_document(&record, &body))?;

    info!("created post {filename}");
    Ok(filename)
}
