use std::io;

use thiserror::Error;

/// Library-wide error type for relaygen operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration value outside what the form accepts.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Config file already exists at the target location.
    #[error("Config file already exists: {0}")]
    ConfigExists(String),

    /// Config file explicitly requested but not present.
    #[error("Config file not found: {0}")]
    ConfigNotFound(String),

    /// Embedded fragment template failed to load or render.
    #[error("Template error: {0}")]
    Template(String),

    /// Strict mode refused to emit code with unsafe literals.
    #[error("{0} literal warning(s) reported; refusing to continue in strict mode")]
    LiteralLint(usize),
}

impl AppError {
    pub fn invalid_config<S: Into<String>>(message: S) -> Self {
        AppError::InvalidConfig(message.into())
    }
}
