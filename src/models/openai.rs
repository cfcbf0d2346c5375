use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;
use tracing::debug;

use super::traits::ChatProvider;
use super::types::{CompletionParams, CompletionRequest, ProviderResponse, ReportedUsage};
use crate::utils::ProviderError;

/// Chat-completion client for any OpenAI-compatible API
pub struct OpenAiProvider {
    client: Client,
    base_url: String,
    api_key: SecretString,
}

impl OpenAiProvider {
    /// Create a new provider. Fails only if the HTTP client cannot be built.
    pub fn new(
        base_url: &str,
        api_key: SecretString,
        timeout: Duration,
    ) -> Result<Self, ProviderError> {
        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        })
    }

    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }
}

#[async_trait]
impl ChatProvider for OpenAiProvider {
    async fn complete(
        &self,
        request: &CompletionRequest,
        params: &CompletionParams,
    ) -> Result<ProviderResponse, ProviderError> {
        let messages: Vec<_> = request
            .messages()
            .iter()
            .map(|msg| {
                json!({
                    "role": msg.role.as_str(),
                    "content": msg.content,
                })
            })
            .collect();

        let request_body = json!({
            "model": params.model,
            "messages": messages,
            "temperature": params.temperature,
            "max_tokens": params.max_tokens,
        });

        let url = self.completions_url();
        debug!(url = %url, model = %params.model, messages = messages.len(), "sending chat completion");

        let response = self
            .client
            .post(&url)
            .bearer_auth(self.api_key.expose_secret())
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(ProviderError::Api {
                status: status.as_u16(),
                message: extract_error_message(&body),
            });
        }

        let parsed: ChatCompletionResponse = serde_json::from_str(&body)
            .map_err(|e| ProviderError::Malformed(e.to_string()))?;

        Ok(ProviderResponse {
            choices: parsed
                .choices
                .into_iter()
                .map(|choice| choice.message.content)
                .collect(),
            usage: parsed.usage,
        })
    }

    fn name(&self) -> &str {
        "openai"
    }
}

/// Pull `error.message` out of an OpenAI-style error body, falling back to the raw text
fn extract_error_message(body: &str) -> String {
    serde_json::from_str::<ErrorEnvelope>(body)
        .map(|envelope| envelope.error.message)
        .unwrap_or_else(|_| body.trim().to_string())
}

// Response structures (OpenAI format)

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
    usage: Option<ReportedUsage>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Message,
}

#[derive(Debug, Deserialize)]
struct Message {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}
