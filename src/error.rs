//! Application errors

use imposter_i18n::I18nError;
use imposter_words::WordsError;
use thiserror::Error;

/// Failure handing generated words to the outside world.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Clipboard write failed: {0}")]
    Clipboard(String),

    #[error("Download failed: {0}")]
    Download(String),
}

/// Errors raised by the application layer.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Export(#[from] ExportError),

    #[error(transparent)]
    I18n(#[from] I18nError),

    #[error(transparent)]
    Words(#[from] WordsError),

    #[cfg(feature = "config")]
    #[error(transparent)]
    Config(#[from] imposter_config::ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
