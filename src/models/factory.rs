use std::sync::Arc;
use std::time::Duration;

use super::openai::OpenAiProvider;
use super::traits::ChatProvider;
use crate::app::LlmSettings;
use crate::utils::CoachError;

/// Factory for creating provider instances from configuration
pub struct ProviderFactory;

impl ProviderFactory {
    /// Create the chat provider described by `settings`.
    ///
    /// Returns a configuration error when no API key is set or the HTTP
    /// client cannot be initialized.
    pub fn create(settings: &LlmSettings) -> Result<Arc<dyn ChatProvider>, CoachError> {
        let api_key = settings.api_key.clone().ok_or_else(|| {
            CoachError::ConfigError("OPENAI_API_KEY not found in environment variables".to_string())
        })?;

        let provider = OpenAiProvider::new(
            &settings.base_url,
            api_key,
            Duration::from_secs(settings.timeout_secs),
        )
        .map_err(|e| CoachError::ConfigError(format!("Failed to initialize HTTP client: {}", e)))?;

        Ok(Arc::new(provider))
    }
}
