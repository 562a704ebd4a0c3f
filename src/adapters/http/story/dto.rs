//! HTTP DTOs for story analysis endpoints.

use serde::{Deserialize, Serialize};
use serde_json::Value;

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Body of `POST /api/analyze`.
///
/// Fields are kept as raw JSON so that a missing field, a non-string value
/// and a blank string all surface as the same "required" error.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeStoryRequest {
    #[serde(default)]
    pub story_name: Option<Value>,
    #[serde(default)]
    pub api_key: Option<Value>,
}

impl AnalyzeStoryRequest {
    /// The story name, if present and a JSON string.
    pub fn story_name_str(&self) -> Option<&str> {
        self.story_name.as_ref().and_then(Value::as_str)
    }

    /// The API key, if present and a JSON string.
    pub fn api_key_str(&self) -> Option<&str> {
        self.api_key.as_ref().and_then(Value::as_str)
    }
}

/// Query parameters of `POST /api/analyze`.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct AnalyzeStoryParams {
    #[serde(default)]
    pub format: OutputFormat,
}

/// Representation of the analysis in the response.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `{"analysis": <document>}`
    #[default]
    Json,
    /// Rendered numbered panels as `text/markdown`.
    Markdown,
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Successful analysis response.
#[derive(Debug, Clone, Serialize)]
pub struct AnalyzeStoryResponse {
    pub analysis: Value,
}

/// Error response body.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub provider: String,
    pub model: String,
}
