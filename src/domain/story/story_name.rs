//! StoryName - the free-text name of a myth or story to analyze.

use std::fmt;

use crate::domain::foundation::ValidationError;

/// Name of a myth, epic, folktale, or retelling.
///
/// Always non-empty and stored trimmed. No escaping is applied: the name is
/// embedded as plain text in a model prompt, never executed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StoryName(String);

impl StoryName {
    /// Field name used in validation errors and on the wire.
    pub const FIELD: &'static str = "storyName";

    /// Creates a story name, trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyField` if nothing remains after trimming.
    pub fn new(value: impl AsRef<str>) -> Result<Self, ValidationError> {
        let trimmed = value.as_ref().trim();
        if trimmed.is_empty() {
            return Err(ValidationError::empty_field(Self::FIELD));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StoryName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
