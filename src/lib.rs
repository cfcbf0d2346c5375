pub mod app;
pub mod cli;
pub mod constants;
pub mod gateway;
pub mod models;
pub mod server;
pub mod users;
pub mod utils;

pub use app::{load_config, AppState, Config};
pub use gateway::{CompletionResult, GatewayError, LlmGateway};
pub use models::{ChatProvider, TokenUsage};
pub use utils::CoachError;
