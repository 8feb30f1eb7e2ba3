//! Placeholder extraction
//!
//! Scans prompt text for `{{variable}}` placeholders. Anything that does
//! not form a well-balanced placeholder with a valid name is treated as
//! literal text, so arbitrary drafts never fail to tokenize.

use regex::Regex;
use std::sync::LazyLock;

/// Pattern for well-formed placeholders: `{{name}}` with optional inner
/// whitespace, where the name is an ASCII letter followed by letters or digits
static PLACEHOLDER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{\s*([A-Za-z][A-Za-z0-9]*)\s*\}\}").unwrap()
});

/// A placeholder occurrence in a section body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder {
    /// Variable name inside the braces, whitespace stripped
    pub name: String,
    /// Byte offset of the opening `{{`
    pub start: usize,
    /// Byte offset just past the closing `}}`
    pub end: usize,
}

/// Find every well-formed placeholder in `body`, in order of appearance.
///
/// Offsets are byte indices into `body`, so `&body[p.start..p.end]` is the
/// exact matched text including braces and any inner whitespace.
pub fn placeholders(body: &str) -> Vec<Placeholder> {
    PLACEHOLDER_PATTERN
        .captures_iter(body)
        .filter_map(|cap| {
            let whole = cap.get(0)?;
            let name = cap.get(1)?;
            Some(Placeholder {
                name: name.as_str().to_string(),
                start: whole.start(),
                end: whole.end(),
            })
        })
        .collect()
}

/// Extract the variable names referenced in `body`, in order of appearance.
///
/// Duplicates are kept. Malformed placeholders are skipped, never an error.
pub fn extract_placeholders(body: &str) -> Vec<String> {
    placeholders(body).into_iter().map(|p| p.name).collect()
}

/// Check whether `name` is usable as a placeholder variable name
pub fn is_valid_variable_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {
            chars.all(|c| c.is_ascii_alphanumeric())
        }
        _ => false,
    }
}
