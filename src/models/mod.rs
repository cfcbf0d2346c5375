// Gateway module for models - follows the Train Station Pattern
// All external access must go through this gateway

// Private submodules - not directly accessible from outside
mod factory;
mod openai;
mod traits;
mod types;

// Public re-exports - the ONLY way to access model functionality
pub use factory::ProviderFactory;
pub use openai::OpenAiProvider;
pub use traits::ChatProvider;
#[cfg(test)]
pub use traits::MockChatProvider;
pub use types::{
    ChatMessage, CompletionParams, CompletionRequest, MessageRole, ProviderResponse,
    ReportedUsage, TokenUsage,
};
