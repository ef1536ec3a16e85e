//! OpenAI-compatible completion provider adapter.
//!
//! Implements the completion port against a `/chat/completions` endpoint.
//! The caller-supplied credential travels as the bearer token and the
//! message becomes a single user-role entry.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use vschat_core::{CompletionError, CompletionPort};

/// Default upstream API base URL.
pub const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";

/// Request body for the upstream chat-completions endpoint.
#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
}

/// A single chat message.
#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

/// Response from the upstream endpoint (non-streaming).
#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

/// A single completion choice.
#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: AssistantMessage,
}

/// Assistant message within a choice. Content may be absent on
/// tool-call replies; those count as malformed for this gateway.
#[derive(Debug, Deserialize)]
struct AssistantMessage {
    content: Option<String>,
}

/// Completion provider backed by an OpenAI-compatible HTTP API.
#[derive(Debug, Clone)]
pub struct OpenAiProvider {
    client: Client,
    base_url: String,
}

impl OpenAiProvider {
    /// Create a provider targeting `base_url` (no trailing slash).
    ///
    /// # Errors
    ///
    /// Returns the underlying client build error.
    pub fn new(base_url: impl Into<String>) -> reqwest::Result<Self> {
        let client = Client::builder().build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }
}

#[async_trait]
impl CompletionPort for OpenAiProvider {
    async fn complete(
        &self,
        credential: &str,
        model: &str,
        message: &str,
    ) -> Result<String, CompletionError> {
        let url = format!("{}/chat/completions", self.base_url);
        let body = ChatCompletionRequest {
            model,
            messages: vec![ChatMessage {
                role: "user",
                content: message,
            }],
        };

        debug!(%url, model, "requesting completion");

        let response = self
            .client
            .post(&url)
            .bearer_auth(credential)
            .json(&body)
            .send()
            .await
            .map_err(|err| CompletionError::Transport(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(CompletionError::Api(format!(
                "provider returned {status}: {detail}"
            )));
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|err| CompletionError::MalformedReply(err.to_string()))?;

        completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| {
                CompletionError::MalformedReply("reply carried no completion choice".to_string())
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    #[test]
    fn request_body_matches_the_upstream_shape() {
        let body = ChatCompletionRequest {
            model: "gpt-4",
            messages: vec![ChatMessage {
                role: "user",
                content: "Hello",
            }],
        };
        let value: Value = serde_json::to_value(&body).unwrap();
        assert_eq!(
            value,
            json!({
                "model": "gpt-4",
                "messages": [{ "role": "user", "content": "Hello" }]
            })
        );
    }

    #[test]
    fn reply_parsing_extracts_the_first_choice() {
        let raw = json!({
            "id": "chatcmpl-123",
            "object": "chat.completion",
            "created": 1_700_000_000,
            "model": "gpt-4",
            "choices": [{
                "index": 0,
                "message": { "role": "assistant", "content": "Hi there" },
                "finish_reason": "stop"
            }],
            "usage": { "prompt_tokens": 5, "completion_tokens": 2, "total_tokens": 7 }
        });
        let parsed: ChatCompletionResponse = serde_json::from_value(raw).unwrap();
        assert_eq!(
            parsed.choices[0].message.content.as_deref(),
            Some("Hi there")
        );
    }

    #[test]
    fn reply_without_content_parses_as_absent() {
        let raw = json!({
            "choices": [{ "message": { "role": "assistant", "content": null } }]
        });
        let parsed: ChatCompletionResponse = serde_json::from_value(raw).unwrap();
        assert_eq!(parsed.choices[0].message.content, None);
    }
}
