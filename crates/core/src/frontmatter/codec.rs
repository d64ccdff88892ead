//! Encoding and decoding of individual frontmatter values.
//!
//! Three textual shapes are understood:
//! - scalar: `title: Hello`
//! - inline array: `tags: [rust, cli]`
//! - block list: `tags:` followed by `- rust` / `* cli` lines
//!
//! Arrays are always written back in the inline shape.

const QUOTES: [char; 2] = ['"', '\''];

/// Decode a scalar value: trim, then strip one layer of matching quotes.
pub fn decode_scalar(raw: &str) -> String {
    strip_quotes(raw.trim()).to_string()
}

/// Encode a scalar so that [`decode_scalar`] returns it unchanged.
pub fn encode_scalar(value: &str) -> String {
    let value = flatten(value);
    if needs_quotes(&value) { format!("\"{value}\"") } else { value }
}

/// Decode an inline array value such as `[a, "b, c", d]`.
///
/// Surrounding brackets are optional, so a bare `a, b` decodes the same
/// way. Commas inside quoted elements do not split. Empty elements are
/// dropped, so `[]` decodes to an empty sequence.
pub fn decode_array(raw: &str) -> Vec<String> {
    let trimmed = raw.trim();
    let inner = trimmed
        .strip_prefix('[')
        .and_then(|s| s.strip_suffix(']'))
        .unwrap_or(trimmed);

    split_elements(inner)
        .into_iter()
        .map(|element| decode_scalar(&element))
        .filter(|element| !element.is_empty())
        .collect()
}

/// Encode a sequence in the inline `[e1, e2]` shape.
///
/// Returns `None` for an empty sequence: empty arrays are omitted from the
/// block rather than written as `key: []`.
pub fn encode_array<S: AsRef<str>>(values: &[S]) -> Option<String> {
    let encoded: Vec<String> = values
        .iter()
        .map(|v| flatten(v.as_ref()))
        .filter(|v| !v.trim().is_empty())
        .map(quote_element)
        .collect();

    if encoded.is_empty() { None } else { Some(format!("[{}]", encoded.join(", "))) }
}

/// Decode one block-list item line (`- value` or `* value`).
///
/// Leading indentation is allowed. Returns `None` if the line is not a
/// list item.
pub fn decode_list_item(line: &str) -> Option<String> {
    let rest = line.trim_start();
    let rest = rest.strip_prefix('-').or_else(|| rest.strip_prefix('*'))?;
    Some(decode_scalar(rest))
}

fn strip_quotes(value: &str) -> &str {
    for q in QUOTES {
        if value.len() >= 2
            && let Some(inner) = value.strip_prefix(q).and_then(|s| s.strip_suffix(q))
        {
            return inner;
        }
    }
    value
}

/// Quote an array element if it would not survive [`decode_array`] bare.
///
/// The wrapping quote is one the element does not contain where possible,
/// otherwise one that never appears right before a comma inside it.
fn quote_element(value: String) -> String {
    if !needs_quotes(&value) && !value.contains([',', '[', ']']) {
        return value;
    }
    let q = if !value.contains('"') {
        '"'
    } else if !value.contains('\'') {
        '\''
    } else if closes_early(&value, '"') {
        '\''
    } else {
        '"'
    };
    format!("{q}{value}{q}")
}

/// Whether `q` inside `value` would end a quoted element too soon.
fn closes_early(value: &str, q: char) -> bool {
    value
        .match_indices(q)
        .any(|(i, _)| value[i + q.len_utf8()..].trim_start().starts_with(','))
}

fn needs_quotes(value: &str) -> bool {
    value != value.trim() || value.starts_with(QUOTES) || value.ends_with(QUOTES)
}

/// Frontmatter values are single-line.
fn flatten(value: &str) -> String {
    if value.contains(['\n', '\r']) {
        value.split(['\n', '\r']).filter(|s| !s.is_empty()).collect::<Vec<_>>().join(" ")
    } else {
        value.to_string()
    }
}

/// Split on commas outside quoted elements.
///
/// A quote closes an element only when a comma or the end of the input
/// follows it, so `'say "hi", bye'` stays whole. If a quote never closes
/// that way, the first matching quote closes it instead.
fn split_elements(inner: &str) -> Vec<String> {
    split_with(inner, true).or_else(|| split_with(inner, false)).unwrap_or_default()
}

fn split_with(inner: &str, strict: bool) -> Option<Vec<String>> {
    let mut elements = Vec::new();
    let mut current = String::new();
    let mut quote: Option<char> = None;

    for (i, c) in inner.char_indices() {
        match quote {
            Some(q) if c == q && (!strict || ends_element(&inner[i + c.len_utf8()..])) => {
                quote = None;
                current.push(c);
            }
            Some(_) => current.push(c),
            None if QUOTES.contains(&c) && current.trim().is_empty() => {
                quote = Some(c);
                current.push(c);
            }
            None if c == ',' => elements.push(std::mem::take(&mut current)),
            None => current.push(c),
        }
    }
    if strict && quote.is_some() {
        return None;
    }
    elements.push(current);
    Some(elements)
}

fn ends_element(rest: &str) -> bool {
    let rest = rest.trim_start();
    rest.is_empty() || rest.starts_with(',')
}
