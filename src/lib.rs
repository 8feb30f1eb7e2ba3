//! Promptdeck
//!
//! Top-level crate for the Promptdeck prompt template engine. Re-exports the
//! engine API so dashboard services depend on one crate.
//!
//! # Example
//!
//! ```rust
//! use promptdeck::{PromptSection, VariableRegistry, highlight};
//!
//! let sections = vec![
//!     PromptSection::system("You are a {{persona}}."),
//!     PromptSection::user("Explain {{topic}} simply."),
//! ];
//!
//! let registry = VariableRegistry::reconcile(&sections, &VariableRegistry::new());
//! assert_eq!(registry.names(), vec!["persona", "topic"]);
//!
//! let preview = highlight(&sections[1].body, &registry.names());
//! assert_eq!(preview, "Explain <mark>{{topic}}</mark> simply.");
//! ```

// Re-export the engine API
pub use promptdeck_engine::{
    diff::{DiffKind, DiffSpan, VersionDiff, diff_versions, flatten_sections},
    highlight::{
        HIGHLIGHT_CLOSE, HIGHLIGHT_OPEN, HighlightSegment, highlight, highlight_segments,
        highlight_with,
    },
    placeholder::{Placeholder, extract_placeholders, is_valid_variable_name, placeholders},
    render::{RenderError, render, render_map, render_strict},
    section::{PromptSection, SectionRole},
    variables::{DEFAULT_VARIABLE_TYPE, Variable, VariableRegistry},
};
