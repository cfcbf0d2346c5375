/// Constants module to avoid magic numbers in the codebase

// Service identity
pub const SERVICE_NAME: &str = "AI-Smart-Career-Coach API";
pub const API_VERSION: &str = "1.0.0";
pub const LLM_SERVICE_NAME: &str = "LLM Service";

// Network Configuration
pub const DEFAULT_API_HOST: &str = "0.0.0.0";
pub const DEFAULT_API_PORT: u16 = 8000;
pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_ALLOWED_ORIGINS: &str = "*";
pub const DEFAULT_ENVIRONMENT: &str = "development";

// Timeouts
pub const HTTP_REQUEST_TIMEOUT_SECS: u64 = 600; // 10 minutes for large model requests

// Default Model Configuration
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";
pub const DEFAULT_TEMPERATURE: f64 = 0.7;
pub const DEFAULT_MAX_TOKENS: u32 = 500;

// Interview levels accepted by the interview-prep operation
pub const INTERVIEW_LEVELS: &[&str] = &["junior", "mid", "senior"];

// Validation patterns
pub const EMAIL_PATTERN: &str = r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$";
pub const PASSWORD_SPECIAL_CHARS: &str = r#"!@#$%^&*(),.?":{}|<>"#;
pub const MIN_PASSWORD_LENGTH: usize = 8;
