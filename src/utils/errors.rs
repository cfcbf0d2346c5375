use thiserror::Error;

/// Main error type for the career coach backend
#[derive(Error, Debug)]
pub enum CoachError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("{0}")]
    ValidationError(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),
}

/// Failures raised while talking to the chat-completion provider
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("{0}")]
    Http(#[from] reqwest::Error),

    #[error("Provider returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Malformed provider response: {0}")]
    Malformed(String),

    #[error("Provider returned no choices")]
    NoChoices,
}
