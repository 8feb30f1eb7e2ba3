//! Prompt section types
//!
//! A prompt template is an ordered list of role-tagged sections.

use serde::{Deserialize, Serialize};

/// Role of a section in the prompt template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionRole {
    /// System section (instructions)
    System,
    /// User section (human turn)
    User,
    /// Assistant section (model turn)
    Assistant,
}

impl SectionRole {
    /// Wire-format name of the role
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionRole::System => "system",
            SectionRole::User => "user",
            SectionRole::Assistant => "assistant",
        }
    }
}

impl std::fmt::Display for SectionRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single section of a prompt template
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptSection {
    /// Role the section is sent under
    pub role: SectionRole,
    /// Raw section text with `{{variable}}` placeholders
    pub body: String,
}

impl PromptSection {
    /// Create a new section
    pub fn new(role: SectionRole, body: impl Into<String>) -> Self {
        Self {
            role,
            body: body.into(),
        }
    }

    /// Create a new system section
    pub fn system<S: Into<String>>(body: S) -> Self {
        Self::new(SectionRole::System, body)
    }

    /// Create a new user section
    pub fn user<S: Into<String>>(body: S) -> Self {
        Self::new(SectionRole::User, body)
    }

    /// Create a new assistant section
    pub fn assistant<S: Into<String>>(body: S) -> Self {
        Self::new(SectionRole::Assistant, body)
    }
}
