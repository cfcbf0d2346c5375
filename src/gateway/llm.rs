use std::sync::Arc;
use tracing::warn;

use super::result::{CompletionResult, GatewayError};
use crate::app::LlmSettings;
use crate::models::{
    ChatProvider, CompletionParams, CompletionRequest, ProviderFactory, ProviderResponse,
    TokenUsage,
};
use crate::utils::{log_error, log_info, log_warn, ProviderError};

/// Whether the gateway can reach a provider. Decided once, at construction.
enum GatewayState {
    Configured(Arc<dyn ChatProvider>),
    Unconfigured { reason: String },
}

/// Sole boundary between the application and the language model provider.
///
/// Holds only immutable configuration and a shareable provider, so one
/// instance can serve concurrent callers behind an `Arc` without locking.
pub struct LlmGateway {
    params: CompletionParams,
    state: GatewayState,
}

impl LlmGateway {
    /// Build the gateway from configuration. Never fails: a missing key or a
    /// client that cannot be initialized yields a disabled gateway.
    pub fn from_settings(settings: &LlmSettings) -> Self {
        let params = CompletionParams {
            model: settings.model.clone(),
            temperature: settings.temperature,
            max_tokens: settings.max_tokens,
        };

        match ProviderFactory::create(settings) {
            Ok(provider) => {
                log_info("✅", format!("LLM Service initialized with model: {}", params.model));
                Self::with_provider(provider, params)
            }
            Err(e) => {
                log_warn("⚠️", format!("LLM Service disabled: {}", e));
                Self::unconfigured(e.to_string(), params)
            }
        }
    }

    /// Gateway backed by an already constructed provider
    pub fn with_provider(provider: Arc<dyn ChatProvider>, params: CompletionParams) -> Self {
        Self {
            params,
            state: GatewayState::Configured(provider),
        }
    }

    /// Disabled gateway; every call fails with [`GatewayError::NotConfigured`]
    pub fn unconfigured(reason: impl Into<String>, params: CompletionParams) -> Self {
        Self {
            params,
            state: GatewayState::Unconfigured {
                reason: reason.into(),
            },
        }
    }

    pub fn is_configured(&self) -> bool {
        matches!(self.state, GatewayState::Configured(_))
    }

    pub fn params(&self) -> &CompletionParams {
        &self.params
    }

    /// Send `prompt` (optionally preceded by `system_prompt`) to the provider.
    ///
    /// The only error is a disabled gateway, raised before any I/O. Everything
    /// that goes wrong at the provider comes back as
    /// [`CompletionResult::Failure`].
    pub async fn generate(
        &self,
        prompt: &str,
        system_prompt: Option<&str>,
    ) -> Result<CompletionResult, GatewayError> {
        let provider = match &self.state {
            GatewayState::Configured(provider) => provider,
            GatewayState::Unconfigured { reason } => {
                return Err(GatewayError::NotConfigured {
                    reason: reason.clone(),
                })
            }
        };

        let request = CompletionRequest::new(prompt, system_prompt);

        let outcome = provider
            .complete(&request, &self.params)
            .await
            .and_then(normalize);

        Ok(match outcome {
            Ok((text, usage)) => {
                log_info(
                    "✅",
                    format!("LLM response generated ({} tokens)", usage.total_tokens),
                );
                CompletionResult::Success { text, usage }
            }
            Err(e) => {
                log_error("❌", format!("LLM API Error: {}", e));
                CompletionResult::Failure {
                    message: e.to_string(),
                }
            }
        })
    }
}

/// First choice's text plus usage. Zero choices and counters whose sum
/// overflows are provider errors; null content is empty text; a missing usage
/// block counts as zero.
fn normalize(response: ProviderResponse) -> Result<(String, TokenUsage), ProviderError> {
    let text = response
        .choices
        .into_iter()
        .next()
        .ok_or(ProviderError::NoChoices)?
        .unwrap_or_default();

    let usage = match response.usage {
        Some(reported) => {
            let usage = TokenUsage::new(reported.prompt_tokens, reported.completion_tokens)
                .ok_or_else(|| ProviderError::Malformed("token usage overflow".to_string()))?;
            if reported.total_tokens != usage.total_tokens {
                warn!(
                    reported = reported.total_tokens,
                    computed = usage.total_tokens,
                    "provider total_tokens disagrees with prompt + completion"
                );
            }
            usage
        }
        None => TokenUsage::default(),
    };

    Ok((text, usage))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MessageRole, MockChatProvider, ReportedUsage};

    fn params() -> CompletionParams {
        CompletionParams {
            model: "gpt-3.5-turbo".to_string(),
            temperature: 0.7,
            max_tokens: 500,
        }
    }

    fn reply(text: &str, prompt_tokens: u64, completion_tokens: u64) -> ProviderResponse {
        ProviderResponse {
            choices: vec![Some(text.to_string())],
            usage: Some(ReportedUsage {
                prompt_tokens,
                completion_tokens,
                total_tokens: prompt_tokens + completion_tokens,
            }),
        }
    }

    #[tokio::test]
    async fn test_unconfigured_gateway_fails_fast() {
        let gateway = LlmGateway::unconfigured("no key", params());
        assert!(!gateway.is_configured());

        let err = gateway.generate("hello", None).await.unwrap_err();
        assert_eq!(
            err,
            GatewayError::NotConfigured {
                reason: "no key".to_string()
            }
        );
        assert!(err.to_string().contains("not configured"));
    }

    #[test]
    fn test_missing_key_yields_disabled_gateway() {
        let gateway = LlmGateway::from_settings(&LlmSettings::default());
        assert!(!gateway.is_configured());
        assert_eq!(gateway.params().max_tokens, 500);
    }

    #[tokio::test]
    async fn test_single_user_message_without_system_prompt() {
        let mut provider = MockChatProvider::new();
        provider
            .expect_complete()
            .withf(|request: &CompletionRequest, params: &CompletionParams| {
                let messages = request.messages();
                messages.len() == 1
                    && messages[0].role == MessageRole::User
                    && messages[0].content == "hello"
                    && params.model == "gpt-3.5-turbo"
            })
            .times(1)
            .returning(|_, _| Ok(reply("hi", 5, 2)));

        let gateway = LlmGateway::with_provider(Arc::new(provider), params());
        let result = gateway.generate("hello", None).await.unwrap();

        assert!(result.is_success());
        assert_eq!(result.tokens_used(), Some(7));
    }

    #[tokio::test]
    async fn test_system_message_precedes_user_message() {
        let mut provider = MockChatProvider::new();
        provider
            .expect_complete()
            .withf(|request: &CompletionRequest, _: &CompletionParams| {
                let roles: Vec<_> = request.messages().iter().map(|m| m.role).collect();
                roles == vec![MessageRole::System, MessageRole::User]
                    && request.messages()[0].content == "be brief"
            })
            .times(1)
            .returning(|_, _| Ok(reply("hi", 8, 2)));

        let gateway = LlmGateway::with_provider(Arc::new(provider), params());
        let result = gateway.generate("hello", Some("be brief")).await.unwrap();
        assert!(result.is_success());
    }

    #[tokio::test]
    async fn test_provider_error_becomes_failure() {
        let mut provider = MockChatProvider::new();
        provider.expect_complete().times(1).returning(|_, _| {
            Err(ProviderError::Api {
                status: 401,
                message: "Incorrect API key provided".to_string(),
            })
        });

        let gateway = LlmGateway::with_provider(Arc::new(provider), params());
        let result = gateway.generate("hello", None).await.unwrap();

        match result {
            CompletionResult::Failure { message } => {
                assert!(message.contains("401"));
                assert!(message.contains("Incorrect API key provided"));
            }
            _ => panic!("Expected failure"),
        }
    }

    #[tokio::test]
    async fn test_zero_choices_is_failure() {
        let mut provider = MockChatProvider::new();
        provider.expect_complete().returning(|_, _| {
            Ok(ProviderResponse {
                choices: vec![],
                usage: None,
            })
        });

        let gateway = LlmGateway::with_provider(Arc::new(provider), params());
        let result = gateway.generate("hello", None).await.unwrap();
        assert_eq!(result.error(), Some("Provider returned no choices"));
    }

    #[tokio::test]
    async fn test_overflowing_usage_is_failure() {
        let mut provider = MockChatProvider::new();
        provider.expect_complete().times(1).returning(|_, _| {
            Ok(ProviderResponse {
                choices: vec![Some("hi".to_string())],
                usage: Some(ReportedUsage {
                    prompt_tokens: u64::MAX,
                    completion_tokens: 1,
                    total_tokens: 0,
                }),
            })
        });

        let gateway = LlmGateway::with_provider(Arc::new(provider), params());
        let result = gateway.generate("hello", None).await.unwrap();
        assert_eq!(
            result.error(),
            Some("Malformed provider response: token usage overflow")
        );
    }

    #[tokio::test]
    async fn test_empty_system_prompt_sends_only_user_message() {
        let mut provider = MockChatProvider::new();
        provider
            .expect_complete()
            .withf(|request: &CompletionRequest, _: &CompletionParams| {
                let roles: Vec<_> = request.messages().iter().map(|m| m.role).collect();
                roles == vec![MessageRole::User]
            })
            .times(1)
            .returning(|_, _| Ok(reply("hi", 1, 1)));

        let gateway = LlmGateway::with_provider(Arc::new(provider), params());
        let result = gateway.generate("hello", Some("")).await.unwrap();
        assert!(result.is_success());
    }

    #[test]
    fn test_normalize_usage_invariant() {
        let (text, usage) = normalize(ProviderResponse {
            choices: vec![None, Some("second".to_string())],
            usage: Some(ReportedUsage {
                prompt_tokens: 10,
                completion_tokens: 5,
                total_tokens: 99,
            }),
        })
        .unwrap();

        assert_eq!(text, "");
        assert_eq!(usage.total_tokens, usage.prompt_tokens + usage.completion_tokens);
        assert_eq!(usage.total_tokens, 15);

        let (_, usage) = normalize(ProviderResponse {
            choices: vec![Some("x".to_string())],
            usage: None,
        })
        .unwrap();
        assert_eq!(usage, TokenUsage::default());
    }

    #[tokio::test]
    async fn test_configured_gateway_round_trip_over_http() {
        use secrecy::SecretString;
        use serde_json::json;
        use wiremock::matchers::{body_partial_json, method, path};
        use wiremock::{Mock, MockServer, ResponseTemplate};

        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .and(body_partial_json(json!({
                "model": "gpt-4o-mini",
                "max_tokens": 64,
                "messages": [
                    { "role": "system", "content": "be brief" },
                    { "role": "user", "content": "hello" }
                ]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "choices": [{ "message": { "role": "assistant", "content": "hi there" } }],
                "usage": { "prompt_tokens": 12, "completion_tokens": 3, "total_tokens": 15 }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let settings = LlmSettings {
            api_key: Some(SecretString::new("sk-test".to_string())),
            model: "gpt-4o-mini".to_string(),
            max_tokens: 64,
            base_url: server.uri(),
            ..LlmSettings::default()
        };
        let gateway = LlmGateway::from_settings(&settings);
        assert!(gateway.is_configured());

        let result = gateway.generate("hello", Some("be brief")).await.unwrap();
        assert_eq!(result.text(), Some("hi there"));
        assert_eq!(result.usage(), TokenUsage::new(12, 3).as_ref());
    }

    #[tokio::test]
    async fn test_unconfigured_gateway_sends_nothing() {
        use wiremock::{matchers::any, Mock, MockServer, ResponseTemplate};

        let server = MockServer::start().await;
        Mock::given(any())
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let settings = LlmSettings {
            base_url: server.uri(),
            ..LlmSettings::default()
        };
        let gateway = LlmGateway::from_settings(&settings);

        assert!(gateway.generate("hello", None).await.is_err());
        assert!(server.received_requests().await.unwrap_or_default().is_empty());
    }
}
