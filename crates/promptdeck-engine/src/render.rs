//! Section body rendering
//!
//! Substitutes placeholder occurrences with concrete values in one pass over
//! the source text. Inserted values are never rescanned, so a value that
//! contains `{{ }}` text ends up in the output verbatim.

use crate::placeholder::placeholders;
use std::collections::HashMap;
use thiserror::Error;

/// Errors during rendering
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Missing value for variable: {0}")]
    MissingValue(String),
}

/// Render `body` with name/value pairs
pub fn render(body: &str, values: &[(&str, &str)]) -> String {
    let map: HashMap<&str, &str> = values.iter().cloned().collect();
    render_map(body, &map)
}

/// Render `body` with a value map.
///
/// Every well-formed placeholder is replaced; names missing from `values`
/// render as the empty string. Malformed placeholder text stays literal.
pub fn render_map(body: &str, values: &HashMap<&str, &str>) -> String {
    let mut result = String::with_capacity(body.len());
    let mut cursor = 0;

    for placeholder in placeholders(body) {
        result.push_str(&body[cursor..placeholder.start]);
        result.push_str(values.get(placeholder.name.as_str()).copied().unwrap_or(""));
        cursor = placeholder.end;
    }
    result.push_str(&body[cursor..]);

    result
}

/// Render `body`, failing on the first placeholder without a value
pub fn render_strict(body: &str, values: &HashMap<&str, &str>) -> Result<String, RenderError> {
    for placeholder in placeholders(body) {
        if !values.contains_key(placeholder.name.as_str()) {
            return Err(RenderError::MissingValue(placeholder.name));
        }
    }

    Ok(render_map(body, values))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_basic() {
        let result = render("Hello {{name}}!", &[("name", "World")]);
        assert_eq!(result, "Hello World!");
    }

    #[test]
    fn test_render_multiple_variables() {
        let result = render(
            "{{greeting}} {{name}}, welcome to {{place}}!",
            &[("greeting", "Hello"), ("name", "Alice"), ("place", "Promptdeck")],
        );
        assert_eq!(result, "Hello Alice, welcome to Promptdeck!");
    }

    #[test]
    fn test_render_repeated_variable() {
        let result = render("{{name}} said: Hello {{name}}!", &[("name", "Bob")]);
        assert_eq!(result, "Bob said: Hello Bob!");
    }

    #[test]
    fn test_render_whitespace_variant() {
        let result = render("Hi {{ name }}!", &[("name", "En")]);
        assert_eq!(result, "Hi En!");
    }

    #[test]
    fn test_render_missing_value_renders_empty() {
        let result = render("Hello {{name}}!", &[]);
        assert_eq!(result, "Hello !");
    }

    #[test]
    fn test_render_malformed_stays_literal() {
        let result = render("Open {{name and {{1bad}} stay", &[("name", "X")]);
        assert_eq!(result, "Open {{name and {{1bad}} stay");
    }

    #[test]
    fn test_render_value_not_rescanned() {
        let result = render("A {{a}} B", &[("a", "{{b}}"), ("b", "Z")]);
        assert_eq!(result, "A {{b}} B");
    }

    #[test]
    fn test_render_no_placeholders() {
        let result = render("Static text.", &[("name", "unused")]);
        assert_eq!(result, "Static text.");
    }

    #[test]
    fn test_render_strict_success() {
        let mut values = HashMap::new();
        values.insert("name", "World");
        let result = render_strict("Hello {{name}}!", &values);
        assert_eq!(result.unwrap(), "Hello World!");
    }

    #[test]
    fn test_render_strict_missing_value() {
        let values: HashMap<&str, &str> = HashMap::new();
        let result = render_strict("Hello {{name}}!", &values);
        assert!(matches!(result, Err(RenderError::MissingValue(name)) if name == "name"));
    }

    #[test]
    fn test_render_strict_reports_first_missing() {
        let mut values = HashMap::new();
        values.insert("a", "1");
        let result = render_strict("{{a}} {{b}} {{c}}", &values);
        assert!(matches!(result, Err(RenderError::MissingValue(name)) if name == "b"));
    }
}
