//! Error types for the imposter CLI.

use std::fmt;

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// CLI error types.
#[derive(Debug)]
pub enum CliError {
    /// IO error (terminal or file output)
    Io(std::io::Error),

    /// Settings file or environment could not be used
    Config(String),

    /// Invalid argument
    InvalidArgument(String),

    /// Word generation failed; carries the translated notice
    Generate(String),

    /// Copy or download failed; carries the translated notice
    Export(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Io(e) => write!(f, "IO error: {}", e),
            CliError::Config(msg) => write!(f, "Configuration error: {}", msg),
            CliError::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            CliError::Generate(msg) => write!(f, "{}", msg),
            CliError::Export(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for CliError {}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        CliError::Io(e)
    }
}

impl From<imposter_config::ConfigError> for CliError {
    fn from(e: imposter_config::ConfigError) -> Self {
        CliError::Config(e.to_string())
    }
}

impl From<imposter::AppError> for CliError {
    fn from(e: imposter::AppError) -> Self {
        CliError::InvalidArgument(e.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Io(e.into())
    }
}
