//! HTTP handlers for story analysis endpoints.
//!
//! These handlers validate request input, delegate to the application
//! layer, and map every failure to `{"error": "<message>"}` with a status
//! that mirrors where the failure came from.

use std::sync::Arc;

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Json, Query, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};

use crate::application::handlers::{
    AnalysisOptions, AnalyzeStoryCommand, AnalyzeStoryError, AnalyzeStoryHandler,
};
use crate::domain::foundation::ValidationError;
use crate::domain::story::{render_markdown, ApiKey, ArchetypalAnalysis, StoryName};
use crate::ports::{AIError, AIProvider, RequestMetadata};

use super::dto::{
    AnalyzeStoryParams, AnalyzeStoryRequest, AnalyzeStoryResponse, ErrorResponse,
    HealthResponse, OutputFormat,
};

pub const STORY_NAME_REQUIRED: &str = "Story name is required";
pub const API_KEY_REQUIRED: &str = "API key is required";
pub const API_KEY_INVALID_FORMAT: &str = "API key has invalid format";
pub const INVALID_REQUEST_BODY: &str = "Invalid request body";
pub const UNSUPPORTED_FORMAT: &str = "Unsupported format; expected 'json' or 'markdown'";
pub const INVALID_API_KEY: &str = "Invalid API key";
pub const UPSTREAM_FAILED: &str = "Failed to analyze story. Please try again.";
pub const UPSTREAM_UNREACHABLE: &str = "Failed to reach the model service";
pub const UPSTREAM_BAD_RESPONSE: &str = "Unexpected response from the model service";
pub const UPSTREAM_TIMEOUT: &str = "The model service timed out";
pub const EMPTY_RESPONSE: &str = "No response from model";
pub const MALFORMED_ANALYSIS: &str = "Failed to parse analysis. The response was malformed.";

// ════════════════════════════════════════════════════════════════════════════════
// Error Type
// ════════════════════════════════════════════════════════════════════════════════

/// Story API error that implements IntoResponse.
#[derive(Debug)]
pub enum StoryApiError {
    BadRequest(String),
    InvalidApiKey,
    /// Upstream non-success status, passed through.
    Upstream { status: StatusCode, message: String },
    BadGateway(String),
    GatewayTimeout,
    Internal(String),
}

impl StoryApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            StoryApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            StoryApiError::InvalidApiKey => StatusCode::UNAUTHORIZED,
            StoryApiError::Upstream { status, .. } => *status,
            StoryApiError::BadGateway(_) => StatusCode::BAD_GATEWAY,
            StoryApiError::GatewayTimeout => StatusCode::GATEWAY_TIMEOUT,
            StoryApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            StoryApiError::BadRequest(msg)
            | StoryApiError::BadGateway(msg)
            | StoryApiError::Internal(msg) => msg,
            StoryApiError::Upstream { message, .. } => message,
            StoryApiError::InvalidApiKey => INVALID_API_KEY,
            StoryApiError::GatewayTimeout => UPSTREAM_TIMEOUT,
        }
    }
}

impl IntoResponse for StoryApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        (status, Json(ErrorResponse::new(self.message()))).into_response()
    }
}

impl From<AnalyzeStoryError> for StoryApiError {
    fn from(error: AnalyzeStoryError) -> Self {
        match error {
            AnalyzeStoryError::Provider(AIError::AuthenticationFailed) => {
                StoryApiError::InvalidApiKey
            }
            AnalyzeStoryError::Provider(AIError::Upstream { status, message }) => {
                StoryApiError::Upstream {
                    status: StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY),
                    message: message.unwrap_or_else(|| UPSTREAM_FAILED.to_string()),
                }
            }
            AnalyzeStoryError::Provider(AIError::Network(_)) => {
                StoryApiError::BadGateway(UPSTREAM_UNREACHABLE.to_string())
            }
            AnalyzeStoryError::Provider(AIError::Parse(_)) => {
                StoryApiError::BadGateway(UPSTREAM_BAD_RESPONSE.to_string())
            }
            AnalyzeStoryError::Provider(AIError::Timeout) => StoryApiError::GatewayTimeout,
            AnalyzeStoryError::EmptyResponse => StoryApiError::Internal(EMPTY_RESPONSE.to_string()),
            AnalyzeStoryError::MalformedAnalysis(_) => {
                StoryApiError::Internal(MALFORMED_ANALYSIS.to_string())
            }
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state containing story analysis dependencies.
#[derive(Clone)]
pub struct StoryAppState {
    pub ai_provider: Arc<dyn AIProvider>,
    pub options: AnalysisOptions,
}

impl StoryAppState {
    pub fn new(ai_provider: Arc<dyn AIProvider>, options: AnalysisOptions) -> Self {
        Self {
            ai_provider,
            options,
        }
    }

    pub fn analyze_story_handler(&self) -> AnalyzeStoryHandler {
        AnalyzeStoryHandler::new(self.ai_provider.clone(), self.options)
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Validation
// ════════════════════════════════════════════════════════════════════════════════

/// Turns the raw request body into a validated command.
///
/// The story name is checked before the API key.
pub fn parse_command(request: &AnalyzeStoryRequest) -> Result<AnalyzeStoryCommand, StoryApiError> {
    let story_name = request
        .story_name_str()
        .ok_or(ValidationError::empty_field(StoryName::FIELD))
        .and_then(StoryName::new)
        .map_err(|_| StoryApiError::BadRequest(STORY_NAME_REQUIRED.to_string()))?;

    let api_key = request
        .api_key_str()
        .ok_or(ValidationError::empty_field(ApiKey::FIELD))
        .and_then(ApiKey::new)
        .map_err(|e| match e {
            ValidationError::InvalidFormat { .. } => {
                StoryApiError::BadRequest(API_KEY_INVALID_FORMAT.to_string())
            }
            ValidationError::EmptyField { .. } => {
                StoryApiError::BadRequest(API_KEY_REQUIRED.to_string())
            }
        })?;

    Ok(AnalyzeStoryCommand {
        story_name,
        api_key,
    })
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/analyze
///
/// Runs one archetypal analysis. Returns `{"analysis": ...}`, or the rendered
/// markdown when called with `?format=markdown`.
pub async fn analyze_story(
    State(state): State<StoryAppState>,
    params: Result<Query<AnalyzeStoryParams>, QueryRejection>,
    body: Result<Json<AnalyzeStoryRequest>, JsonRejection>,
) -> Result<Response, StoryApiError> {
    let Query(params) =
        params.map_err(|_| StoryApiError::BadRequest(UNSUPPORTED_FORMAT.to_string()))?;
    let Json(request) = body.map_err(|rejection| {
        tracing::debug!(error = %rejection, "Rejected analysis request body");
        StoryApiError::BadRequest(INVALID_REQUEST_BODY.to_string())
    })?;

    let cmd = parse_command(&request)?;
    let result = state
        .analyze_story_handler()
        .handle(cmd, RequestMetadata::generate())
        .await?;

    match params.format {
        OutputFormat::Json => Ok(Json(AnalyzeStoryResponse {
            analysis: result.analysis,
        })
        .into_response()),
        OutputFormat::Markdown => {
            let analysis = ArchetypalAnalysis::from_value(&result.analysis).map_err(|e| {
                tracing::error!(error = %e, "Analysis does not match the document shape");
                StoryApiError::Internal(MALFORMED_ANALYSIS.to_string())
            })?;
            Ok((
                [(header::CONTENT_TYPE, "text/markdown; charset=utf-8")],
                render_markdown(&analysis),
            )
                .into_response())
        }
    }
}

/// GET /health
pub async fn health(State(state): State<StoryAppState>) -> Json<HealthResponse> {
    let info = state.ai_provider.provider_info();
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        provider: info.name,
        model: info.model,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request(value: serde_json::Value) -> AnalyzeStoryRequest {
        serde_json::from_value(value).unwrap()
    }

    fn bad_request_message(result: Result<AnalyzeStoryCommand, StoryApiError>) -> String {
        match result {
            Err(StoryApiError::BadRequest(msg)) => msg,
            other => panic!("expected bad request, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn parse_command_accepts_valid_input() {
        let cmd = parse_command(&request(json!({"storyName": " Odyssey ", "apiKey": "sk-1"})))
            .unwrap();

        assert_eq!(cmd.story_name.as_str(), "Odyssey");
        assert_eq!(cmd.api_key.expose(), "sk-1");
    }

    #[test]
    fn parse_command_requires_story_name_first() {
        let msg = bad_request_message(parse_command(&request(json!({}))));
        assert_eq!(msg, STORY_NAME_REQUIRED);

        let msg = bad_request_message(parse_command(&request(json!({"storyName": ["x"], "apiKey": "k"}))));
        assert_eq!(msg, STORY_NAME_REQUIRED);

        let msg = bad_request_message(parse_command(&request(json!({"storyName": "   ", "apiKey": "k"}))));
        assert_eq!(msg, STORY_NAME_REQUIRED);
    }

    #[test]
    fn parse_command_requires_api_key() {
        let msg = bad_request_message(parse_command(&request(json!({"storyName": "Odyssey"}))));
        assert_eq!(msg, API_KEY_REQUIRED);

        let msg = bad_request_message(parse_command(&request(json!({"storyName": "Odyssey", "apiKey": ""}))));
        assert_eq!(msg, API_KEY_REQUIRED);

        let msg = bad_request_message(parse_command(&request(json!({"storyName": "Odyssey", "apiKey": 7}))));
        assert_eq!(msg, API_KEY_REQUIRED);
    }

    #[test]
    fn parse_command_rejects_control_characters_in_api_key() {
        let msg = bad_request_message(parse_command(&request(
            json!({"storyName": "Odyssey", "apiKey": "sk\u{0}ant"}),
        )));
        assert_eq!(msg, API_KEY_INVALID_FORMAT);
    }

    #[test]
    fn parse_command_forwards_api_key_with_interior_space() {
        let cmd = parse_command(&request(json!({"storyName": "Odyssey", "apiKey": "sk ant"})))
            .unwrap();
        assert_eq!(cmd.api_key.expose(), "sk ant");
    }

    #[test]
    fn authentication_failure_maps_to_401() {
        let err: StoryApiError = AnalyzeStoryError::Provider(AIError::AuthenticationFailed).into();
        assert_eq!(err.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(err.message(), INVALID_API_KEY);
    }

    #[test]
    fn upstream_status_and_message_pass_through() {
        let err: StoryApiError =
            AnalyzeStoryError::Provider(AIError::upstream(429, Some("Rate limited".to_string())))
                .into();
        assert_eq!(err.status(), StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(err.message(), "Rate limited");
    }

    #[test]
    fn upstream_without_message_uses_generic_text() {
        let err: StoryApiError = AnalyzeStoryError::Provider(AIError::upstream(500, None)).into();
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.message(), UPSTREAM_FAILED);
    }

    #[test]
    fn transport_failures_map_to_gateway_errors() {
        let err: StoryApiError = AnalyzeStoryError::Provider(AIError::network("refused")).into();
        assert_eq!(err.status(), StatusCode::BAD_GATEWAY);
        assert_eq!(err.message(), UPSTREAM_UNREACHABLE);

        let err: StoryApiError = AnalyzeStoryError::Provider(AIError::parse("bad envelope")).into();
        assert_eq!(err.status(), StatusCode::BAD_GATEWAY);

        let err: StoryApiError = AnalyzeStoryError::Provider(AIError::Timeout).into();
        assert_eq!(err.status(), StatusCode::GATEWAY_TIMEOUT);
    }

    #[test]
    fn output_failures_map_to_500() {
        let err: StoryApiError = AnalyzeStoryError::EmptyResponse.into();
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.message(), EMPTY_RESPONSE);

        let parse_error = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err: StoryApiError = AnalyzeStoryError::MalformedAnalysis(parse_error).into();
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.message(), MALFORMED_ANALYSIS);
    }
}
