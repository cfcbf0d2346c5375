// Gateway module for utils - follows the Train Station Pattern
// All external access must go through this gateway

// Private submodules - not directly accessible from outside
mod errors;
mod logger;
mod validators;

// Public re-exports - the ONLY way to access utils functionality
pub use errors::{CoachError, ProviderError};
pub use logger::{init_logger, log_error, log_info, log_warn};
pub use validators::{validate_email, validate_password};
