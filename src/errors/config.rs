use std::env::VarError;

use thiserror::Error;

/// Failures while reading settings from the environment
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Environment variable error: {0}")]
    EnvVarError(#[from] VarError),

    /// A variable was present but did not parse into the expected type
    #[error("Parse error: {0}")]
    ParseError(String),
}
