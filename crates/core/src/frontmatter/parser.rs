//! Frontmatter parsing from post content.
//!
//! The block is recognized only at offset 0:
//! ```markdown
//! ---
//! title: Hello
//! tags: [rust, cli]
//! ---
//!
//! # Post content
//! ```
//!
//! Inside the block a small line scanner decodes the well-known keys and
//! keeps every other `key: ...` entry as raw text.

use tracing::debug;

use super::codec;
use super::types::{MetadataRecord, ParsedDocument};

const DELIMITER: &str = "---";

/// Parse a post into its metadata record and body.
///
/// Never fails: text without a complete block at the very start yields an
/// empty record and the whole input as body.
pub fn parse(content: &str) -> ParsedDocument {
    match split_block(content) {
        Some((block, body)) => ParsedDocument {
            record: scan_block(block),
            body: body.to_string(),
            has_frontmatter: true,
        },
        None => ParsedDocument {
            record: MetadataRecord::default(),
            body: content.to_string(),
            has_frontmatter: false,
        },
    }
}

/// Split content into the raw block text and the body.
///
/// The body starts after the closing delimiter line; a single blank
/// separator line directly after it is consumed as well.
fn split_block(content: &str) -> Option<(&str, &str)> {
    let mut lines = content.split_inclusive('\n');
    let opener = lines.next()?;
    if !opener.ends_with('\n') || !is_delimiter(opener) {
        return None;
    }

    let block_start = opener.len();
    let mut offset = block_start;
    for line in lines {
        if is_delimiter(line) {
            let block = &content[block_start..offset];
            let rest = &content[offset + line.len()..];
            let body = rest
                .strip_prefix("\r\n")
                .or_else(|| rest.strip_prefix('\n'))
                .unwrap_or(rest);
            return Some((block, body));
        }
        offset += line.len();
    }

    // No closing ---, treat as no frontmatter
    None
}

fn is_delimiter(line: &str) -> bool {
    line.trim_end_matches(['\n', '\r']) == DELIMITER
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ArrayField {
    Categories,
    Tags,
}

/// One classified line of the block.
enum Line<'a> {
    Blank,
    Key(&'a str, &'a str),
    Item(String),
    Other,
}

fn classify(line: &str) -> Line<'_> {
    if line.trim().is_empty() {
        return Line::Blank;
    }
    if let Some((key, value)) = line.split_once(':')
        && is_field_key(key)
    {
        return Line::Key(key, value.trim());
    }
    match codec::decode_list_item(line) {
        Some(item) => Line::Item(item),
        None => Line::Other,
    }
}

/// Whether `key` is read back as a field name when written as `key: value`.
///
/// Any text before the first `:` counts, unless it is empty or starts like
/// an indented continuation, a list item or a comment.
pub fn is_field_key(key: &str) -> bool {
    !key.is_empty()
        && !key.contains(':')
        && !key.starts_with(|c: char| c.is_whitespace() || matches!(c, '-' | '*' | '#'))
}

enum State {
    /// Expecting key lines.
    Fields,
    /// Reading block-list items for an array key.
    Items(ArrayField),
    /// Skipping items that belong to a repeated array key.
    Ignoring,
    /// Collecting continuation lines of an unrecognized key. Blank lines are
    /// held back until an indented line shows the value goes on.
    Opaque { key: String, raw: String, blanks: usize },
}

struct Scanner {
    record: MetadataRecord,
    seen_categories: bool,
    seen_tags: bool,
    state: State,
}

impl Scanner {
    fn new() -> Self {
        Self {
            record: MetadataRecord::default(),
            seen_categories: false,
            seen_tags: false,
            state: State::Fields,
        }
    }

    fn feed(&mut self, raw_line: &str) {
        let line = raw_line.trim_end_matches('\r');
        let class = classify(line);

        let state = match std::mem::replace(&mut self.state, State::Fields) {
            State::Opaque { key, raw, blanks } if matches!(class, Line::Blank) => {
                self.state = State::Opaque { key, raw, blanks: blanks + 1 };
                return;
            }
            State::Opaque { key, mut raw, blanks } => {
                let continues = if blanks > 0 {
                    starts_indented(line)
                } else {
                    matches!(class, Line::Item(_)) || starts_indented(line)
                };
                if continues {
                    raw.push_str(&"\n".repeat(blanks + 1));
                    raw.push_str(line);
                    self.state = State::Opaque { key, raw, blanks: 0 };
                    return;
                }
                self.record.extra.insert(key, raw);
                State::Fields
            }
            other => other,
        };

        match (state, class) {
            (_, Line::Key(key, value)) => self.on_key(key, value),
            (State::Items(field), Line::Item(item)) => {
                if !item.is_empty() {
                    self.array_mut(field).push(item);
                }
                self.state = State::Items(field);
            }
            (State::Ignoring, Line::Item(_)) => self.state = State::Ignoring,
            (_, Line::Blank) => {}
            (_, _) => self.skip(line),
        }
    }

    fn finish(mut self) -> MetadataRecord {
        if let State::Opaque { key, raw, .. } = std::mem::replace(&mut self.state, State::Fields) {
            self.record.extra.insert(key, raw);
        }
        self.record
    }

    fn skip(&self, line: &str) {
        if !line.trim().is_empty() {
            debug!("ignoring unrecognized frontmatter line: {line:?}");
        }
    }

    fn on_key(&mut self, key: &str, value: &str) {
        match key {
            "title" | "date" | "image" => {
                if value.is_empty() {
                    return;
                }
                let value = codec::decode_scalar(value);
                match key {
                    "title" => self.record.title = value,
                    "date" => self.record.date = value,
                    _ => self.record.image = Some(value),
                }
            }
            "categories" => self.on_array(ArrayField::Categories, value),
            "tags" => self.on_array(ArrayField::Tags, value),
            _ => {
                self.state =
                    State::Opaque { key: key.to_string(), raw: value.to_string(), blanks: 0 };
            }
        }
    }

    /// The first occurrence of an array key wins, whatever its shape.
    fn on_array(&mut self, field: ArrayField, value: &str) {
        let seen = match field {
            ArrayField::Categories => &mut self.seen_categories,
            ArrayField::Tags => &mut self.seen_tags,
        };
        if *seen {
            debug!("ignoring repeated {field:?} entry");
            if value.is_empty() {
                self.state = State::Ignoring;
            }
            return;
        }
        *seen = true;

        if value.is_empty() {
            self.state = State::Items(field);
        } else {
            *self.array_mut(field) = codec::decode_array(value);
        }
    }

    fn array_mut(&mut self, field: ArrayField) -> &mut Vec<String> {
        match field {
            ArrayField::Categories => &mut self.record.categories,
            ArrayField::Tags => &mut self.record.tags,
        }
    }
}

fn starts_indented(line: &str) -> bool {
    line.starts_with([' ', '\t'])
}

fn scan_block(block: &str) -> MetadataRecord {
    let mut scanner = Scanner::new();
    for line in block.lines() {
        scanner.feed(line);
    }
    scanner.finish()
}
