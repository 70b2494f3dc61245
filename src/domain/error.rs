use std::io;

use thiserror::Error;

/// Library-wide error type for pageforge operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration value is out of range or malformed.
    #[error("{0}")]
    InvalidConfig(String),

    /// Required environment variable is not set.
    #[error("Environment variable {0} is not set")]
    EnvironmentVariableMissing(String),

    /// Oracle transport or HTTP-level failure (unreachable, timeout, non-2xx).
    #[error("Oracle request failed: {message}")]
    OracleApi { message: String, status: Option<u16> },

    /// Oracle responded, but the body is not JSON of the expected shape.
    #[error("Failed to parse oracle output: {reason}")]
    GenerationParse { reason: String },

    /// Plan limit reached before generation started; no oracle call was made.
    #[error("Generation limit reached ({used}/{limit})")]
    UsageLimitExceeded { used: u32, limit: u32 },

    /// Archetype tag is not one of the known page families.
    #[error("Invalid archetype '{0}': must be saas, mobile-app, or creator")]
    InvalidArchetype(String),

    /// Project identifier is invalid.
    #[error("Invalid project identifier '{0}': must be alphanumeric with hyphens or underscores")]
    InvalidProjectId(String),

    /// Prompt assembly failed.
    #[error("Prompt assembly failed: {0}")]
    PromptAssembly(String),

    /// Parse error for local inputs (page files, stored documents).
    #[error("Failed to parse {what}: {details}")]
    Parse { what: String, details: String },

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

impl AppError {
    /// Provide an `io::ErrorKind`-like view for callers expecting legacy behavior.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::InvalidConfig(_)
            | AppError::GenerationParse { .. }
            | AppError::InvalidArchetype(_)
            | AppError::InvalidProjectId(_)
            | AppError::PromptAssembly(_)
            | AppError::Parse { .. }
            | AppError::TomlParse(_) => io::ErrorKind::InvalidInput,
            AppError::EnvironmentVariableMissing(_) => io::ErrorKind::NotFound,
            AppError::UsageLimitExceeded { .. } => io::ErrorKind::PermissionDenied,
            AppError::OracleApi { .. } => io::ErrorKind::Other,
        }
    }
}
