//! Placeholder highlighting for editor previews
//!
//! Splits a section body into plain text and known-variable segments, driven
//! by the same scan the registry uses. Only names the caller passes in are
//! treated as variables; anything else stays literal text.

use crate::placeholder::placeholders;
use std::collections::HashSet;

/// Default opening marker for [`highlight`]
pub const HIGHLIGHT_OPEN: &str = "<mark>";
/// Default closing marker for [`highlight`]
pub const HIGHLIGHT_CLOSE: &str = "</mark>";

/// One piece of a highlighted section body
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HighlightSegment {
    /// Literal text, passed through untouched
    Text(String),
    /// A placeholder whose name is known to the caller
    Variable {
        /// Exact source text including braces and inner whitespace
        text: String,
        /// The variable name inside the braces
        name: String,
    },
}

impl HighlightSegment {
    /// Source text of the segment
    pub fn text(&self) -> &str {
        match self {
            HighlightSegment::Text(text) => text,
            HighlightSegment::Variable { text, .. } => text,
        }
    }
}

/// Split `body` into literal and variable segments.
///
/// Concatenating the segment texts reproduces `body` exactly. Placeholders
/// whose name is not in `variable_names` are left inside literal text.
pub fn highlight_segments<S: AsRef<str>>(
    body: &str,
    variable_names: &[S],
) -> Vec<HighlightSegment> {
    let known: HashSet<&str> = variable_names.iter().map(|n| n.as_ref()).collect();
    let mut segments = Vec::new();
    let mut cursor = 0;

    for placeholder in placeholders(body) {
        if !known.contains(placeholder.name.as_str()) {
            continue;
        }
        if placeholder.start > cursor {
            segments.push(HighlightSegment::Text(
                body[cursor..placeholder.start].to_string(),
            ));
        }
        segments.push(HighlightSegment::Variable {
            text: body[placeholder.start..placeholder.end].to_string(),
            name: placeholder.name,
        });
        cursor = placeholder.end;
    }

    if cursor < body.len() {
        segments.push(HighlightSegment::Text(body[cursor..].to_string()));
    }

    segments
}

/// Wrap known placeholders in the default `<mark>` markers.
///
/// The returned string is raw markup around raw source text; escaping for the
/// target surface is the caller's job.
pub fn highlight<S: AsRef<str>>(body: &str, variable_names: &[S]) -> String {
    highlight_with(body, variable_names, HIGHLIGHT_OPEN, HIGHLIGHT_CLOSE)
}

/// Wrap known placeholders in caller-chosen markers
pub fn highlight_with<S: AsRef<str>>(
    body: &str,
    variable_names: &[S],
    open: &str,
    close: &str,
) -> String {
    let mut result = String::with_capacity(body.len());
    for segment in highlight_segments(body, variable_names) {
        match segment {
            HighlightSegment::Text(text) => result.push_str(&text),
            HighlightSegment::Variable { text, .. } => {
                result.push_str(open);
                result.push_str(&text);
                result.push_str(close);
            }
        }
    }
    result
}
