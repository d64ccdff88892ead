//! Importing Jupyter notebooks as posts.
//!
//! The notebook-to-markdown step itself is delegated to a
//! [`NotebookConverter`]; this module only validates the input and merges
//! metadata into whatever the converter produced.

use std::path::Path;

use chrono::NaiveDate;
use thiserror::Error;
use tracing::info;

use super::PostError;
use crate::clock::{Clock, INPUT_DATE_FORMAT, format_display_date};
use crate::frontmatter::{MetadataUpdate, merge_metadata, parse_document, serialize_with_defaults};
use crate::store::PostStore;

/// Failure reported by a converter. The message is shown to the user as is.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct ConversionError(pub String);

/// Turns a notebook file into markdown text.
pub trait NotebookConverter {
    fn convert(&self, notebook: &Path) -> Result<String, ConversionError>;
}

/// Convert `notebook` and store it as a post.
///
/// The post is named `<output>.md` (or the notebook stem when `output` is
/// `None`). A leading `YYYY-MM-DD` in the stem becomes the date, and the
/// rest of the stem, with hyphens turned into spaces, the default title.
/// Returns the post's filename.
pub fn import_notebook(
    store: &mut dyn PostStore,
    converter: &dyn NotebookConverter,
    notebook: &Path,
    output: Option<&str>,
    update: &MetadataUpdate,
    clock: &dyn Clock,
) -> Result<String, PostError> {
    if !notebook.is_file() {
        return Err(PostError::NotFound(notebook.display().to_string()));
    }
    if notebook.extension().is_none_or(|ext| ext != "ipynb") {
        return Err(PostError::NotANotebook(notebook.display().to_string()));
    }

    let stem = notebook
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    let markdown = converter.convert(notebook).map_err(|e| PostError::Conversion(e.0))?;
    let (existing, body) = parse_document(&markdown).into_parts();

    let mut merged = merge_metadata(&existing, update);
    let dated = date_prefix(&stem);
    if merged.title.trim().is_empty() {
        merged.title = default_title(&stem, dated.is_some());
    }
    if merged.date.trim().is_empty()
        && let Some(date) = dated
    {
        merged.date = date;
    }

    let filename = match output {
        Some(name) if name.ends_with(".md") => name.to_string(),
        Some(name) => format!("{name}.md"),
        None => format!("{stem}.md"),
    };
    store.write(&filename, &serialize_with_defaults(&merged, &body, clock))?;

    info!("imported {} as {filename}", notebook.display());
    Ok(filename)
}

/// `2023-03-05-linear-models` becomes `linear models`.
fn default_title(stem: &str, dated: bool) -> String {
    let rest = if dated { stem[10..].trim_start_matches('-') } else { stem };
    let rest = if rest.is_empty() { stem } else { rest };
    rest.replace('-', " ")
}

/// `2023-03-05-intro` yields `March 05, 2023`.
fn date_prefix(stem: &str) -> Option<String> {
    let prefix = stem.get(..10)?;
    NaiveDate::parse_from_str(prefix, INPUT_DATE_FORMAT).ok().map(format_display_date)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::store::MemoryStore;
    use std::fs;
    use tempfile::TempDir;

    struct FakeConverter(Result<String, String>);

    impl NotebookConverter for FakeConverter {
        fn convert(&self, _notebook: &Path) -> Result<String, ConversionError> {
            self.0.clone().map_err(ConversionError)
        }
    }

    fn clock() -> FixedClock {
        FixedClock(NaiveDate::from_ymd_opt(2024, 6, 9).unwrap())
    }

    fn notebook(dir: &TempDir, name: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, "{\"cells\": []}").unwrap();
        path
    }

    #[test]
    fn imports_with_defaults_from_filename() {
        let dir = TempDir::new().unwrap();
        let path = notebook(&dir, "2023-03-05-linear-models.ipynb");
        let converter = FakeConverter(Ok("# Linear models\n\nSome text.\n".into()));
        let mut store = MemoryStore::new();

        let name = import_notebook(
            &mut store,
            &converter,
            &path,
            None,
            &MetadataUpdate::with_tags(["ml"]),
            &clock(),
        )
        .unwrap();

        assert_eq!(name, "2023-03-05-linear-models.md");
        assert_eq!(
            store.get(&name).unwrap(),
            "---\ntitle: linear models\ndate: March 05, 2023\ntags: [ml]\n---\n\n# Linear models\n\nSome text.\n"
        );
    }

    #[test]
    fn converter_frontmatter_is_merged() {
        let dir = TempDir::new().unwrap();
        let path = notebook(&dir, "intro.ipynb");
        let converter =
            FakeConverter(Ok("---\ntitle: Intro\ntags: [python]\n---\n\nCells\n".into()));
        let mut store = MemoryStore::new();

        let mut update = MetadataUpdate::with_tags(["ml"]);
        update.categories.push("notebooks".into());
        let name =
            import_notebook(&mut store, &converter, &path, Some("intro-post"), &update, &clock())
                .unwrap();

        assert_eq!(name, "intro-post.md");
        assert_eq!(
            store.get(&name).unwrap(),
            "---\ntitle: Intro\ndate: June 09, 2024\ncategories: [notebooks]\ntags: [python, ml]\n---\n\nCells\n"
        );
    }

    #[test]
    fn missing_notebook() {
        let dir = TempDir::new().unwrap();
        let converter = FakeConverter(Ok(String::new()));
        let mut store = MemoryStore::new();
        let err = import_notebook(
            &mut store,
            &converter,
            &dir.path().join("nope.ipynb"),
            None,
            &MetadataUpdate::new(),
            &clock(),
        )
        .unwrap_err();
        assert!(matches!(err, PostError::NotFound(_)));
    }

    #[test]
    fn wrong_extension() {
        let dir = TempDir::new().unwrap();
        let path = notebook(&dir, "notes.md");
        let converter = FakeConverter(Ok(String::new()));
        let mut store = MemoryStore::new();
        let err =
            import_notebook(&mut store, &converter, &path, None, &MetadataUpdate::new(), &clock())
                .unwrap_err();
        assert!(matches!(err, PostError::NotANotebook(_)));
    }

    #[test]
    fn converter_message_is_passed_through() {
        let dir = TempDir::new().unwrap();
        let path = notebook(&dir, "broken.ipynb");
        let converter = FakeConverter(Err("nbconvert: kernel died".into()));
        let mut store = MemoryStore::new();
        let err =
            import_notebook(&mut store, &converter, &path, None, &MetadataUpdate::new(), &clock())
                .unwrap_err();
        match err {
            PostError::Conversion(message) => assert_eq!(message, "nbconvert: kernel died"),
            other => panic!("expected Conversion, got {other:?}"),
        }
        assert!(store.is_empty());
    }

    #[test]
    fn date_prefix_requires_valid_date() {
        assert_eq!(date_prefix("2023-03-05-x").as_deref(), Some("March 05, 2023"));
        assert_eq!(date_prefix("2023-13-05-x"), None);
        assert_eq!(date_prefix("short"), None);
    }

    #[test]
    fn default_titles() {
        assert_eq!(default_title("2023-03-05-linear-models", true), "linear models");
        assert_eq!(default_title("2023-03-05", true), "2023 03 05");
        assert_eq!(default_title("intro-to-rust", false), "intro to rust");
    }
}
