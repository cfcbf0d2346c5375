use thiserror::Error;

use crate::models::TokenUsage;

/// Outcome of one completion call. Provider failures are values, not errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompletionResult {
    Success { text: String, usage: TokenUsage },
    Failure { message: String },
}

impl CompletionResult {
    pub fn is_success(&self) -> bool {
        matches!(self, CompletionResult::Success { .. })
    }

    /// Generated text, if the call succeeded
    pub fn text(&self) -> Option<&str> {
        match self {
            CompletionResult::Success { text, .. } => Some(text),
            CompletionResult::Failure { .. } => None,
        }
    }

    pub fn usage(&self) -> Option<&TokenUsage> {
        match self {
            CompletionResult::Success { usage, .. } => Some(usage),
            CompletionResult::Failure { .. } => None,
        }
    }

    /// Error message, if the call failed
    pub fn error(&self) -> Option<&str> {
        match self {
            CompletionResult::Success { .. } => None,
            CompletionResult::Failure { message } => Some(message),
        }
    }

    pub fn tokens_used(&self) -> Option<u64> {
        self.usage().map(|u| u.total_tokens)
    }
}

/// Raised before any network I/O when the gateway cannot serve requests
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    #[error("LLM provider not configured: {reason}")]
    NotConfigured { reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let ok = CompletionResult::Success {
            text: "done".to_string(),
            usage: TokenUsage::new(3, 4).unwrap(),
        };
        assert!(ok.is_success());
        assert_eq!(ok.text(), Some("done"));
        assert_eq!(ok.tokens_used(), Some(7));
        assert_eq!(ok.error(), None);

        let failed = CompletionResult::Failure {
            message: "boom".to_string(),
        };
        assert!(!failed.is_success());
        assert_eq!(failed.text(), None);
        assert_eq!(failed.tokens_used(), None);
        assert_eq!(failed.error(), Some("boom"));
    }
}
