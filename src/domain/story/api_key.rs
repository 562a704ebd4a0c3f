//! ApiKey - the caller's credential for the upstream model API.

use secrecy::{ExposeSecret, Secret};

use crate::domain::foundation::ValidationError;

/// User-supplied model API credential.
///
/// Travels with a single request and is never stored or logged. `Debug`
/// output is redacted by `secrecy`.
#[derive(Debug, Clone)]
pub struct ApiKey(Secret<String>);

impl ApiKey {
    /// Field name used in validation errors and on the wire.
    pub const FIELD: &'static str = "apiKey";

    /// Creates an API key, trimming surrounding whitespace.
    ///
    /// The key ends up in an HTTP header, so control characters and non-ASCII
    /// are rejected. Interior spaces and tabs are legal header bytes and pass
    /// through for the upstream to judge.
    pub fn new(value: impl AsRef<str>) -> Result<Self, ValidationError> {
        let trimmed = value.as_ref().trim();
        if trimmed.is_empty() {
            return Err(ValidationError::empty_field(Self::FIELD));
        }
        if !trimmed.chars().all(is_header_char) {
            return Err(ValidationError::invalid_format(
                Self::FIELD,
                "must not contain control or non-ASCII characters",
            ));
        }
        Ok(Self(Secret::new(trimmed.to_string())))
    }

    /// Exposes the key for building the upstream request.
    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}

fn is_header_char(c: char) -> bool {
    c == ' ' || c == '\t' || c.is_ascii_graphic()
}
