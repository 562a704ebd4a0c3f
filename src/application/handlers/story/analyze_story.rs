//! AnalyzeStoryHandler - Command handler for one archetypal analysis.
//!
//! Builds the prompt, makes exactly one model call with the caller's
//! credential, strips optional markdown fences from the reply and parses it
//! as JSON. The parsed document is returned untouched.

use std::sync::Arc;
use std::time::Instant;

use crate::domain::prompts::{build_analysis_prompt, SYSTEM_PROMPT};
use crate::domain::story::{strip_markdown_fences, ApiKey, StoryName};
use crate::ports::{
    AIError, AIProvider, CompletionRequest, FinishReason, MessageRole, RequestMetadata,
    TokenUsage,
};

/// Maximum characters of raw model output written to the log on a parse failure.
const LOGGED_CONTENT_LIMIT: usize = 500;

/// Command to analyze a story.
#[derive(Debug, Clone)]
pub struct AnalyzeStoryCommand {
    pub story_name: StoryName,
    pub api_key: ApiKey,
}

/// Generation settings applied to every analysis request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnalysisOptions {
    pub max_tokens: u32,
    pub temperature: f32,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            max_tokens: 8192,
            temperature: 0.7,
        }
    }
}

/// Result of a successful analysis.
#[derive(Debug, Clone)]
pub struct AnalyzeStoryResult {
    /// The analysis document exactly as the model produced it.
    pub analysis: serde_json::Value,
    pub model: String,
    pub usage: TokenUsage,
}

/// Errors from analyzing a story.
#[derive(Debug, thiserror::Error)]
pub enum AnalyzeStoryError {
    #[error(transparent)]
    Provider(#[from] AIError),

    #[error("model returned no text content")]
    EmptyResponse,

    #[error("model output is not valid JSON: {0}")]
    MalformedAnalysis(#[source] serde_json::Error),
}

/// Handler for story analysis.
pub struct AnalyzeStoryHandler {
    ai_provider: Arc<dyn AIProvider>,
    options: AnalysisOptions,
}

impl AnalyzeStoryHandler {
    pub fn new(ai_provider: Arc<dyn AIProvider>, options: AnalysisOptions) -> Self {
        Self {
            ai_provider,
            options,
        }
    }

    pub async fn handle(
        &self,
        cmd: AnalyzeStoryCommand,
        metadata: RequestMetadata,
    ) -> Result<AnalyzeStoryResult, AnalyzeStoryError> {
        let started = Instant::now();
        let trace_id = metadata.trace_id.clone();

        // 1. Build the request
        let request = CompletionRequest::new(cmd.api_key, self.options.max_tokens, metadata)
            .with_system_prompt(SYSTEM_PROMPT)
            .with_message(MessageRole::User, build_analysis_prompt(&cmd.story_name))
            .with_temperature(self.options.temperature);

        // 2. Single upstream call
        let completion = self.ai_provider.complete(request).await.map_err(|e| {
            tracing::warn!(trace_id = %trace_id, story = %cmd.story_name, error = %e, "Model call failed");
            e
        })?;

        if completion.finish_reason == FinishReason::Length {
            tracing::warn!(
                trace_id = %trace_id,
                max_tokens = self.options.max_tokens,
                "Model output hit max_tokens and may be truncated"
            );
        }

        if completion.content.is_empty() {
            tracing::error!(trace_id = %trace_id, "Model returned no text content");
            return Err(AnalyzeStoryError::EmptyResponse);
        }

        // 3. Parse the document
        let analysis: serde_json::Value = serde_json::from_str(strip_markdown_fences(&completion.content))
            .map_err(|e| {
                tracing::error!(
                    trace_id = %trace_id,
                    error = %e,
                    content = %truncate(&completion.content, LOGGED_CONTENT_LIMIT),
                    "Failed to parse model output"
                );
                AnalyzeStoryError::MalformedAnalysis(e)
            })?;

        tracing::info!(
            trace_id = %trace_id,
            story = %cmd.story_name,
            model = %completion.model,
            input_tokens = completion.usage.prompt_tokens,
            output_tokens = completion.usage.completion_tokens,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Story analyzed"
        );

        Ok(AnalyzeStoryResult {
            analysis,
            model: completion.model,
            usage: completion.usage,
        })
    }
}

fn truncate(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::{MockAIProvider, MockError};
    use crate::domain::prompts::STORY_NAME_PLACEHOLDER;
    use serde_json::json;

    fn command(story: &str) -> AnalyzeStoryCommand {
        AnalyzeStoryCommand {
            story_name: StoryName::new(story).unwrap(),
            api_key: ApiKey::new("sk-ant-user-key").unwrap(),
        }
    }

    fn handler(provider: &MockAIProvider) -> AnalyzeStoryHandler {
        AnalyzeStoryHandler::new(Arc::new(provider.clone()), AnalysisOptions::default())
    }

    #[tokio::test]
    async fn sends_one_templated_request_with_user_credential() {
        let provider = MockAIProvider::new().with_response(r#"{"storyName":"Odyssey"}"#);

        handler(&provider)
            .handle(command("  Odyssey "), RequestMetadata::new("trace-1"))
            .await
            .unwrap();

        let calls = provider.get_calls();
        assert_eq!(calls.len(), 1);
        let request = &calls[0];
        assert_eq!(request.credential.expose(), "sk-ant-user-key");
        assert_eq!(request.system_prompt.as_deref(), Some(SYSTEM_PROMPT));
        assert_eq!(request.messages.len(), 1);
        assert_eq!(request.messages[0].role, MessageRole::User);
        assert!(request.messages[0].content.contains("STORY: Odyssey\n"));
        assert!(!request.messages[0].content.contains(STORY_NAME_PLACEHOLDER));
        assert_eq!(request.max_tokens, 8192);
        assert_eq!(request.temperature, Some(0.7));
        assert_eq!(request.metadata.trace_id, "trace-1");
    }

    #[tokio::test]
    async fn valid_json_round_trips_unchanged() {
        let document = json!({
            "storyName": "Odyssey",
            "archetypalCore": {"roles": [], "extra": [1, 2, 3]},
            "unknownField": {"nested": true}
        });
        let provider = MockAIProvider::new().with_response(document.to_string());

        let result = handler(&provider)
            .handle(command("Odyssey"), RequestMetadata::generate())
            .await
            .unwrap();

        assert_eq!(result.analysis, document);
        assert_eq!(result.model, "mock-model-1");
    }

    #[tokio::test]
    async fn parsed_document_keeps_key_order() {
        let raw = r#"{"storyName":"Odyssey","archetypalCore":{"roles":[]},"interpretiveInsight":"x"}"#;
        let provider = MockAIProvider::new().with_response(raw);

        let result = handler(&provider)
            .handle(command("Odyssey"), RequestMetadata::generate())
            .await
            .unwrap();

        assert_eq!(serde_json::to_string(&result.analysis).unwrap(), raw);
    }

    #[tokio::test]
    async fn fenced_output_is_unwrapped() {
        let provider = MockAIProvider::new().with_response("```json\n{\"storyName\":\"Beowulf\"}\n```");

        let result = handler(&provider)
            .handle(command("Beowulf"), RequestMetadata::generate())
            .await
            .unwrap();

        assert_eq!(result.analysis, json!({"storyName": "Beowulf"}));
    }

    #[tokio::test]
    async fn non_json_output_is_malformed() {
        let provider = MockAIProvider::new().with_response("I'd be happy to analyze Beowulf!");

        let err = handler(&provider)
            .handle(command("Beowulf"), RequestMetadata::generate())
            .await
            .unwrap_err();

        assert!(matches!(err, AnalyzeStoryError::MalformedAnalysis(_)));
    }

    #[tokio::test]
    async fn truncated_json_is_malformed_not_partial() {
        let provider = MockAIProvider::new()
            .with_response_full(r#"{"storyName":"Beowulf","archetypalCore":{"roles":["#, FinishReason::Length);

        let err = handler(&provider)
            .handle(command("Beowulf"), RequestMetadata::generate())
            .await
            .unwrap_err();

        assert!(matches!(err, AnalyzeStoryError::MalformedAnalysis(_)));
    }

    #[tokio::test]
    async fn empty_output_is_empty_response() {
        let provider = MockAIProvider::new().with_response("");

        let err = handler(&provider)
            .handle(command("Beowulf"), RequestMetadata::generate())
            .await
            .unwrap_err();

        assert!(matches!(err, AnalyzeStoryError::EmptyResponse));
    }

    #[tokio::test]
    async fn whitespace_only_output_is_malformed() {
        let provider = MockAIProvider::new().with_response("  \n");

        let err = handler(&provider)
            .handle(command("Beowulf"), RequestMetadata::generate())
            .await
            .unwrap_err();

        assert!(matches!(err, AnalyzeStoryError::MalformedAnalysis(_)));
    }

    #[tokio::test]
    async fn provider_errors_pass_through() {
        let provider = MockAIProvider::new().with_error(MockError::AuthenticationFailed);

        let err = handler(&provider)
            .handle(command("Beowulf"), RequestMetadata::generate())
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            AnalyzeStoryError::Provider(AIError::AuthenticationFailed)
        ));
        assert_eq!(provider.call_count(), 1);
    }

    #[test]
    fn truncate_respects_char_boundaries() {
        assert_eq!(truncate("héllo", 2), "hé");
        assert_eq!(truncate("short", 100), "short");
    }
}
