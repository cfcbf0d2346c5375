use anyhow::{Context, Result};
use directories::ProjectDirs;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use secrecy::SecretString;
use serde::{Deserialize, Deserializer, Serialize};
use std::path::{Path, PathBuf};

use crate::constants::{
    DEFAULT_ALLOWED_ORIGINS, DEFAULT_API_HOST, DEFAULT_API_PORT, DEFAULT_ENVIRONMENT,
    DEFAULT_MAX_TOKENS, DEFAULT_MODEL, DEFAULT_OPENAI_BASE_URL, DEFAULT_TEMPERATURE,
    HTTP_REQUEST_TIMEOUT_SECS,
};

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Language model provider configuration
    #[serde(default)]
    pub llm: LlmSettings,

    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerSettings,
}

/// Provider credentials and sampling parameters, fixed for the process lifetime
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmSettings {
    /// Provider API key. Never written back to disk.
    #[serde(skip_serializing)]
    pub api_key: Option<SecretString>,
    /// Model identifier sent with every completion
    pub model: String,
    /// Sampling temperature (0.0 - 2.0)
    pub temperature: f64,
    /// Maximum tokens to generate
    pub max_tokens: u32,
    /// Base URL of the OpenAI-compatible API
    pub base_url: String,
    /// HTTP client timeout
    pub timeout_secs: u64,
}

impl Default for LlmSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
            base_url: DEFAULT_OPENAI_BASE_URL.to_string(),
            timeout_secs: HTTP_REQUEST_TIMEOUT_SECS,
        }
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    /// Bind address
    pub host: String,
    /// Bind port
    pub port: u16,
    /// Deployment environment name, reported by the root endpoint
    pub environment: String,
    /// Expose error details in 500 responses
    #[serde(deserialize_with = "deserialize_flag")]
    pub debug: bool,
    /// Comma separated CORS origins, `*` for any
    pub allowed_origins: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: DEFAULT_API_HOST.to_string(),
            port: DEFAULT_API_PORT,
            environment: DEFAULT_ENVIRONMENT.to_string(),
            debug: true,
            allowed_origins: DEFAULT_ALLOWED_ORIGINS.to_string(),
        }
    }
}

impl ServerSettings {
    /// Parsed list of allowed CORS origins
    pub fn origins(&self) -> Vec<String> {
        self.allowed_origins
            .split(',')
            .map(str::trim)
            .filter(|o| !o.is_empty())
            .map(String::from)
            .collect()
    }
}

// Real booleans from TOML; from the environment only "true" (any case) is on
fn deserialize_flag<'de, D>(deserializer: D) -> std::result::Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Int(i64),
        Text(String),
    }

    Ok(match Flag::deserialize(deserializer)? {
        Flag::Bool(b) => b,
        Flag::Int(_) => false,
        Flag::Text(s) => s.eq_ignore_ascii_case("true"),
    })
}

/// Flat environment variable names used by existing deployments
fn legacy_env() -> Env {
    Env::raw().filter_map(|key| {
        let mapped = match key.as_str().to_ascii_uppercase().as_str() {
            "OPENAI_API_KEY" => "llm.api_key",
            "OPENAI_BASE_URL" => "llm.base_url",
            "LLM_MODEL" => "llm.model",
            "LLM_TEMPERATURE" => "llm.temperature",
            "LLM_MAX_TOKENS" => "llm.max_tokens",
            "API_HOST" => "server.host",
            "API_PORT" => "server.port",
            "ENVIRONMENT" => "server.environment",
            "DEBUG" => "server.debug",
            "ALLOWED_ORIGINS" => "server.allowed_origins",
            _ => return None,
        };
        Some(mapped.into())
    })
}

/// Build the layered configuration: defaults, global file, local file,
/// explicit file, then environment
pub fn config_figment(explicit: Option<&Path>) -> Figment {
    let mut figment = Figment::from(Serialized::defaults(Config::default()));

    if let Some(global_config) = global_config_path() {
        if global_config.exists() {
            figment = figment.merge(Toml::file(&global_config));
        }
    }

    let local_config = PathBuf::from(".career-coach/config.toml");
    if local_config.exists() {
        figment = figment.merge(Toml::file(&local_config));
    }

    if let Some(path) = explicit {
        figment = figment.merge(Toml::file(path));
    }

    figment
        .merge(legacy_env())
        .merge(Env::prefixed("COACH_").split("__"))
}

/// Load configuration from multiple sources
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    if let Some(path) = explicit {
        anyhow::ensure!(path.exists(), "Config file not found: {}", path.display());
    }

    config_figment(explicit)
        .extract()
        .context("Failed to load configuration")
}

fn global_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "career-coach").map(|dirs| dirs.config_dir().join("config.toml"))
}

/// Get the configuration directory, creating it if needed
pub fn get_config_dir() -> Result<PathBuf> {
    if let Some(proj_dirs) = ProjectDirs::from("", "", "career-coach") {
        let config_dir = proj_dirs.config_dir();
        std::fs::create_dir_all(config_dir)?;
        Ok(config_dir.to_path_buf())
    } else {
        // Fallback to home directory
        let home = std::env::var("HOME")
            .or_else(|_| std::env::var("USERPROFILE"))
            .context("Could not determine home directory")?;
        let config_dir = PathBuf::from(home).join(".config").join("career-coach");
        std::fs::create_dir_all(&config_dir)?;
        Ok(config_dir)
    }
}

/// Save configuration to file
pub fn save_config(config: &Config, path: Option<PathBuf>) -> Result<()> {
    let path = if let Some(p) = path {
        p
    } else {
        get_config_dir()?.join("config.toml")
    };

    let toml_string = toml::to_string_pretty(config)?;
    std::fs::write(&path, toml_string)
        .with_context(|| format!("Failed to write config to {}", path.display()))?;

    Ok(())
}

/// Create a default configuration file if it doesn't exist
pub fn init_config() -> Result<PathBuf> {
    let config_file = get_config_dir()?.join("config.toml");

    if !config_file.exists() {
        save_config(&Config::default(), Some(config_file.clone()))?;
    }

    Ok(config_file)
}
