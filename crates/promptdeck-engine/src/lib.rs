//! Promptdeck Engine
//!
//! Core template engine for the Promptdeck dashboard: placeholder
//! extraction, variable registry reconciliation, editor highlighting and
//! version diffing. All operations are pure functions over in-memory
//! template data.
//!
//! ```
//! use promptdeck_engine::{PromptSection, VariableRegistry};
//!
//! let sections = vec![PromptSection::user("Hello {{name}}, you are {{ age }} years old.")];
//! let registry = VariableRegistry::reconcile(&sections, &VariableRegistry::new());
//!
//! assert_eq!(registry.names(), vec!["name", "age"]);
//! ```

pub mod diff;
pub mod highlight;
pub mod placeholder;
pub mod render;
pub mod section;
pub mod variables;

// Re-export commonly used types
pub use diff::{DiffKind, DiffSpan, VersionDiff, diff_versions, flatten_sections};
pub use highlight::{
    HIGHLIGHT_CLOSE, HIGHLIGHT_OPEN, HighlightSegment, highlight, highlight_segments,
    highlight_with,
};
pub use placeholder::{Placeholder, extract_placeholders, is_valid_variable_name, placeholders};
pub use render::{RenderError, render, render_map, render_strict};
pub use section::{PromptSection, SectionRole};
pub use variables::{DEFAULT_VARIABLE_TYPE, Variable, VariableRegistry};
