//! Short previews of post bodies for the index.

/// Maximum length, in characters, of an excerpt cut from a body that has
/// no paragraph break.
pub const EXCERPT_CHARS: usize = 150;

pub const ELLIPSIS: &str = "...";

/// Derive a preview from a post body.
///
/// Leading heading lines (`# `, `## `, ...) and blank lines are skipped.
/// The excerpt is the first paragraph, i.e. the text up to the first blank
/// line. A body with no paragraph break yields its first [`EXCERPT_CHARS`]
/// characters followed by [`ELLIPSIS`].
pub fn excerpt(body: &str) -> String {
    let lines = body.lines().skip_while(|line| line.trim().is_empty() || is_heading(line));

    let mut paragraph = Vec::new();
    let mut found_break = false;
    for line in lines {
        if line.trim().is_empty() {
            found_break = true;
            break;
        }
        if !is_heading(line) {
            paragraph.push(line);
        }
    }

    let text = paragraph.join("\n");
    let text = text.trim();
    if found_break || text.is_empty() { text.to_string() } else { truncate(text) }
}

/// A run of `#` at the start of the line, then whitespace or nothing.
fn is_heading(line: &str) -> bool {
    let rest = line.trim_start_matches('#');
    rest.len() < line.len() && (rest.is_empty() || rest.starts_with(char::is_whitespace))
}

fn truncate(text: &str) -> String {
    let cut = text.char_indices().nth(EXCERPT_CHARS).map_or(text.len(), |(i, _)| i);
    format!("{}{ELLIPSIS}", &text[..cut])
}
