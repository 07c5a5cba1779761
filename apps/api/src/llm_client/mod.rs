/// LLM Client — the single point of entry for all completion API calls.
///
/// Handlers never talk to the completion API directly; they go through a
/// `CompletionClient` held in the service state.

use async_trait::async_trait;
use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::config::EssayConfig;

pub mod prompts;

#[cfg(test)]
pub mod mock;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("completion client is not configured")]
    Unavailable,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("LLM returned empty content")]
    EmptyContent,
}

/// One role-tagged completion call. Exactly one choice is requested.
#[derive(Debug, Clone)]
pub struct CompletionRequest<'a> {
    pub system: &'a str,
    pub prompt: &'a str,
    pub temperature: f32,
    pub max_tokens: u32,
}

/// The completion API seen by the essay service.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// False when the client could not be initialized at startup.
    fn available(&self) -> bool;

    /// Sends one request and returns the raw text of the single completion.
    async fn complete(&self, request: &CompletionRequest<'_>) -> Result<String, LlmError>;
}

/// Calls the client and deserializes the text response as JSON.
/// The prompt must instruct the model to return valid JSON.
pub async fn complete_json<T: DeserializeOwned>(
    client: &dyn CompletionClient,
    request: &CompletionRequest<'_>,
) -> Result<T, LlmError> {
    let text = client.complete(request).await?;

    // Strip markdown code fences if the model wraps JSON in them
    let text = strip_json_fences(&text);

    serde_json::from_str(text).map_err(LlmError::Parse)
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
    n: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
    usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Usage {
    prompt_tokens: u32,
    completion_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// OpenAI-compatible chat completions client.
/// Built once at startup; without an API key it reports itself unavailable.
#[derive(Clone)]
pub struct OpenAiClient {
    client: Client,
    base_url: String,
    model: String,
    api_key: Option<String>,
}

impl OpenAiClient {
    pub fn new(config: &EssayConfig) -> Result<Self, LlmError> {
        Ok(Self {
            client: Client::builder().build()?,
            base_url: config.openai_base_url.trim_end_matches('/').to_string(),
            model: config.openai_model.clone(),
            api_key: config.openai_api_key.clone(),
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl CompletionClient for OpenAiClient {
    fn available(&self) -> bool {
        self.api_key.is_some()
    }

    async fn complete(&self, request: &CompletionRequest<'_>) -> Result<String, LlmError> {
        let api_key = self.api_key.as_deref().ok_or(LlmError::Unavailable)?;

        let body = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: request.system,
                },
                ChatMessage {
                    role: "user",
                    content: request.prompt,
                },
            ],
            temperature: request.temperature,
            max_tokens: request.max_tokens,
            n: 1,
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            // Try to parse error message
            let message = serde_json::from_str::<ApiError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let chat: ChatResponse = response.json().await?;

        if let Some(usage) = &chat.usage {
            debug!(
                "LLM call succeeded: prompt_tokens={}, completion_tokens={}",
                usage.prompt_tokens, usage.completion_tokens
            );
        }

        chat.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.trim().is_empty())
            .ok_or(LlmError::EmptyContent)
    }
}

/// Strips ```json ... ``` or ``` ... ``` code fences from LLM output.
fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    if let Some(stripped) = text.strip_prefix("```json") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else if let Some(stripped) = text.strip_prefix("```") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::mock::ScriptedCompletion;
    use super::*;

    fn request() -> CompletionRequest<'static> {
        CompletionRequest {
            system: "system",
            prompt: "prompt",
            temperature: 0.3,
            max_tokens: 100,
        }
    }

    #[test]
    fn test_strip_json_fences_with_json_tag() {
        let input = "```json\n{\"key\": \"value\"}\n```";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_json_fences_without_tag() {
        let input = "```\n{\"key\": \"value\"}\n```";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_json_fences_no_fences() {
        let input = "{\"key\": \"value\"}";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_client_without_key_is_unavailable() {
        let config = EssayConfig {
            openai_api_key: None,
            openai_base_url: "https://api.openai.com/v1/".to_string(),
            openai_model: "gpt-4".to_string(),
            port: 5000,
            rust_log: "info".to_string(),
        };
        let client = OpenAiClient::new(&config).unwrap();
        assert!(!client.available());
        assert_eq!(client.base_url, "https://api.openai.com/v1");
        assert_eq!(client.model(), "gpt-4");
    }

    #[tokio::test]
    async fn test_complete_without_key_fails_fast() {
        let config = EssayConfig {
            openai_api_key: None,
            openai_base_url: "http://127.0.0.1:9".to_string(),
            openai_model: "gpt-4".to_string(),
            port: 5000,
            rust_log: "info".to_string(),
        };
        let client = OpenAiClient::new(&config).unwrap();
        let err = client.complete(&request()).await.unwrap_err();
        assert!(matches!(err, LlmError::Unavailable));
    }

    #[tokio::test]
    async fn test_complete_json_parses_fenced_reply() {
        let client = ScriptedCompletion::replying("```json\n[\"a\", \"b\"]\n```");
        let parsed: Vec<String> = complete_json(&client, &request()).await.unwrap();
        assert_eq!(parsed, vec!["a", "b"]);
    }

    #[tokio::test]
    async fn test_complete_json_rejects_prose() {
        let client = ScriptedCompletion::replying("Sure! Here is your analysis.");
        let err = complete_json::<Vec<String>>(&client, &request())
            .await
            .unwrap_err();
        assert!(matches!(err, LlmError::Parse(_)));
    }
}
