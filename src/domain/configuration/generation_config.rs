//! Generation configuration loaded from `pageforge.toml`.

use std::path::Path;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::AppError;

/// Configuration file name looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "pageforge.toml";

/// Top-level configuration for a generation run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GenerationConfig {
    /// Oracle API configuration.
    #[serde(default)]
    pub oracle: OracleApiConfig,
}

impl GenerationConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        self.oracle.validate()
    }

    /// Load configuration from `path`, falling back to defaults when the
    /// file does not exist.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Load `pageforge.toml` from the current directory if present.
    pub fn load_default() -> Result<Self, AppError> {
        Self::load(Path::new(CONFIG_FILE_NAME))
    }
}

/// Oracle API configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OracleApiConfig {
    /// Chat-completions endpoint URL.
    #[serde(default = "default_api_url")]
    pub api_url: Url,
    /// Model identifier sent with every request.
    #[serde(default = "default_model")]
    pub model: String,
    /// Sampling temperature.
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
    /// Maximum retry attempts.
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
    /// Delay between retries in milliseconds.
    #[serde(default = "default_retry_delay_ms")]
    pub retry_delay_ms: u64,
}

impl Default for OracleApiConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            model: default_model(),
            temperature: default_temperature(),
            timeout_secs: default_timeout(),
            max_retries: default_max_retries(),
            retry_delay_ms: default_retry_delay_ms(),
        }
    }
}

impl OracleApiConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.model.trim().is_empty() {
            return Err(AppError::InvalidConfig("model must not be empty".to_string()));
        }
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(AppError::InvalidConfig(
                "temperature must be between 0.0 and 2.0".to_string(),
            ));
        }
        if self.timeout_secs == 0 {
            return Err(AppError::InvalidConfig("timeout_secs must be greater than 0".to_string()));
        }
        if self.max_retries == 0 {
            return Err(AppError::InvalidConfig("max_retries must be greater than 0".to_string()));
        }
        if self.retry_delay_ms == 0 {
            return Err(AppError::InvalidConfig(
                "retry_delay_ms must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

fn default_api_url() -> Url {
    Url::parse("https://api.openai.com/v1/chat/completions").expect("Default API URL must be valid")
}

fn default_model() -> String {
    "gpt-4o".to_string()
}

fn default_temperature() -> f32 {
    0.7
}

fn default_timeout() -> u64 {
    60
}

fn default_max_retries() -> u32 {
    3
}

fn default_retry_delay_ms() -> u64 {
    1000
}
