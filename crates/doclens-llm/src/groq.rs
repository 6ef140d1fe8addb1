//! Groq HTTP client for text completions.
//!
//! Talks to the OpenAI-compatible chat completions endpoint with the model
//! and token limit from an explicit [`LlmConfig`], built once at process
//! start. No retries, no streaming.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

use doclens_core::{DoclensError, DoclensResult};

use crate::client::CompletionClient;

/// Default chat completions endpoint.
pub const DEFAULT_API_URL: &str = "https://api.groq.com/openai/v1/chat/completions";

/// Default completion model.
pub const DEFAULT_MODEL: &str = "mixtral-8x7b-32768";

/// Default completion token limit.
pub const DEFAULT_MAX_TOKENS: u32 = 2000;

const REQUEST_TIMEOUT_SECS: u64 = 60;

/// Process-wide model provider configuration.
#[derive(Debug, Clone)]
pub struct LlmConfig {
    pub api_url: String,
    pub api_key: Option<String>,
    pub model: String,
    pub max_tokens: u32,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }
}

/// Groq completion client.
#[derive(Clone)]
pub struct GroqClient {
    api_url: String,
    api_key: String,
    model: String,
    max_tokens: u32,
    http: reqwest::Client,
}

impl GroqClient {
    /// Create a client from an [`LlmConfig`]. Fails when no API key is
    /// configured.
    pub fn new(config: &LlmConfig) -> DoclensResult<Self> {
        let api_key = config
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .ok_or_else(|| {
                DoclensError::config("GROQ_API_KEY is not set; export it or pass --api-key")
            })?
            .to_string();

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .unwrap_or_default();

        Ok(Self {
            api_url: config.api_url.trim_end_matches('/').to_string(),
            api_key,
            model: config.model.clone(),
            max_tokens: config.max_tokens,
            http,
        })
    }
}

#[async_trait]
impl CompletionClient for GroqClient {
    async fn complete(&self, system: &str, user: &str) -> DoclensResult<String> {
        let request = ChatRequest {
            model: &self.model,
            max_tokens: self.max_tokens,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: user,
                },
            ],
        };

        let response = self
            .http
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                DoclensError::model_invocation(format!("request to model provider failed: {e}"))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(DoclensError::model_invocation(format!(
                "model provider returned {status}: {body}"
            )));
        }

        let completion: ChatResponse = response.json().await.map_err(|e| {
            DoclensError::model_invocation(format!("unreadable model provider response: {e}"))
        })?;

        first_choice_text(completion)
    }
}

/// Pull the assistant text out of a chat completion response.
fn first_choice_text(response: ChatResponse) -> DoclensResult<String> {
    if let Some(usage) = &response.usage {
        debug!(
            prompt_tokens = usage.prompt_tokens,
            completion_tokens = usage.completion_tokens,
            "Completion token usage"
        );
    }

    let text = response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .unwrap_or_default();

    if text.is_empty() {
        return Err(DoclensError::model_invocation(
            "model provider returned an empty completion",
        ));
    }

    Ok(text)
}

// --- API types ---

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
    usage: Option<ChatUsage>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

#[derive(Deserialize)]
struct ChatUsage {
    prompt_tokens: u64,
    completion_tokens: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_requires_api_key() {
        let err = match GroqClient::new(&LlmConfig::default()) {
            Err(e) => e,
            Ok(_) => panic!("expected a missing key error"),
        };
        assert!(matches!(err, DoclensError::Config(_)));
        assert!(err.to_string().contains("GROQ_API_KEY"));
    }

    #[test]
    fn test_new_rejects_blank_api_key() {
        let config = LlmConfig {
            api_key: Some("   ".to_string()),
            ..LlmConfig::default()
        };
        assert!(GroqClient::new(&config).is_err());
    }

    #[test]
    fn test_new_with_api_key() {
        let config = LlmConfig {
            api_key: Some("gsk_test".to_string()),
            ..LlmConfig::default()
        };
        assert!(GroqClient::new(&config).is_ok());
    }

    #[test]
    fn test_extracts_first_choice_content() {
        let body = r#"{
            "choices": [
                {"message": {"role": "assistant", "content": "Summary: a short one"}}
            ],
            "usage": {"prompt_tokens": 42, "completion_tokens": 7, "total_tokens": 49}
        }"#;
        let response: ChatResponse = serde_json::from_str(body).unwrap();
        assert_eq!(first_choice_text(response).unwrap(), "Summary: a short one");
    }

    #[test]
    fn test_empty_choices_is_an_error() {
        let response: ChatResponse = serde_json::from_str(r#"{"choices": []}"#).unwrap();
        let err = first_choice_text(response).unwrap_err();
        assert!(err.to_string().contains("empty completion"));
    }

    #[test]
    fn test_null_content_is_an_error() {
        let body = r#"{"choices": [{"message": {"role": "assistant", "content": null}}]}"#;
        let response: ChatResponse = serde_json::from_str(body).unwrap();
        assert!(first_choice_text(response).is_err());
    }
}
