use async_trait::async_trait;

use super::types::{CompletionParams, CompletionRequest, ProviderResponse};
use crate::utils::ProviderError;

/// Core trait that all chat-completion backends must implement
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ChatProvider: Send + Sync {
    /// Send one chat completion request and decode the reply
    async fn complete(
        &self,
        request: &CompletionRequest,
        params: &CompletionParams,
    ) -> Result<ProviderResponse, ProviderError>;

    /// Get the name of the provider
    fn name(&self) -> &str;
}
