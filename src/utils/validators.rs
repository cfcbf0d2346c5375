use once_cell::sync::Lazy;
use regex::Regex;

use crate::constants::{EMAIL_PATTERN, MIN_PASSWORD_LENGTH, PASSWORD_SPECIAL_CHARS};

use super::CoachError;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(EMAIL_PATTERN).expect("email pattern is a valid regex"));

/// Validate email format
pub fn validate_email(email: &str) -> Result<(), CoachError> {
    if EMAIL_RE.is_match(email) {
        Ok(())
    } else {
        Err(CoachError::ValidationError("Invalid email format".to_string()))
    }
}

/// Validate password strength, reporting the first rule that fails
pub fn validate_password(password: &str) -> Result<(), CoachError> {
    let failure = if password.chars().count() < MIN_PASSWORD_LENGTH {
        Some("Password must be at least 8 characters")
    } else if !password.chars().any(|c| c.is_ascii_uppercase()) {
        Some("Password must contain an uppercase letter")
    } else if !password.chars().any(|c| c.is_ascii_lowercase()) {
        Some("Password must contain a lowercase letter")
    } else if !password.chars().any(|c| c.is_ascii_digit()) {
        Some("Password must contain a digit")
    } else if !password.chars().any(|c| PASSWORD_SPECIAL_CHARS.contains(c)) {
        Some("Password must contain a special character")
    } else {
        None
    };

    match failure {
        Some(message) => Err(CoachError::ValidationError(message.to_string())),
        None => Ok(()),
    }
}
