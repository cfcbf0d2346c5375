use std::sync::Arc;

use crate::app::{Config, ServerSettings};
use crate::gateway::LlmGateway;
use crate::users::UserStore;

/// Shared state handed to every request handler
#[derive(Clone)]
pub struct AppState {
    /// LLM gateway, immutable after startup
    pub gateway: Arc<LlmGateway>,
    /// In-memory user registry
    pub users: Arc<UserStore>,
    /// Server settings (environment name, debug flag)
    pub server: Arc<ServerSettings>,
}

impl AppState {
    /// Create new app state
    pub fn new(gateway: LlmGateway, server: ServerSettings) -> Self {
        Self {
            gateway: Arc::new(gateway),
            users: Arc::new(UserStore::new()),
            server: Arc::new(server),
        }
    }

    /// Build everything from loaded configuration
    pub fn from_config(config: &Config) -> Self {
        Self::new(LlmGateway::from_settings(&config.llm), config.server.clone())
    }
}
