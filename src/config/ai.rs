//! AI provider configuration
//!
//! No API key is configured here: each request carries the caller's own
//! credential.

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;
use crate::adapters::ai::{AnthropicConfig, DEFAULT_BASE_URL, DEFAULT_MODEL};
use crate::application::handlers::AnalysisOptions;

/// Upper bound accepted for `max_tokens`.
const MAX_TOKENS_LIMIT: u32 = 64_000;

/// AI provider configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AiConfig {
    /// Base URL of the Anthropic API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Model used for analysis
    #[serde(default = "default_model")]
    pub model: String,

    /// Maximum tokens the model may generate
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    /// Sampling temperature
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Upstream request timeout in seconds; unset keeps the HTTP client default
    pub timeout_secs: Option<u64>,
}

impl AiConfig {
    /// Get timeout as Duration
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    /// Adapter configuration for the Anthropic provider
    pub fn anthropic_config(&self) -> AnthropicConfig {
        let config = AnthropicConfig::new()
            .with_base_url(&self.base_url)
            .with_model(&self.model);
        match self.timeout() {
            Some(timeout) => config.with_timeout(timeout),
            None => config,
        }
    }

    /// Generation settings for the analysis handler
    pub fn analysis_options(&self) -> AnalysisOptions {
        AnalysisOptions {
            max_tokens: self.max_tokens,
            temperature: self.temperature,
        }
    }

    /// Validate AI configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(ValidationError::InvalidBaseUrl);
        }
        if self.model.trim().is_empty() {
            return Err(ValidationError::MissingRequired("AI__MODEL"));
        }
        if self.max_tokens == 0 || self.max_tokens > MAX_TOKENS_LIMIT {
            return Err(ValidationError::InvalidMaxTokens {
                max: MAX_TOKENS_LIMIT,
            });
        }
        if !(0.0..=1.0).contains(&self.temperature) {
            return Err(ValidationError::InvalidTemperature);
        }
        if self.timeout_secs == Some(0) {
            return Err(ValidationError::InvalidTimeout);
        }
        Ok(())
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            model: default_model(),
            max_tokens: default_max_tokens(),
            temperature: default_temperature(),
            timeout_secs: None,
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_max_tokens() -> u32 {
    8192
}

fn default_temperature() -> f32 {
    0.7
}
