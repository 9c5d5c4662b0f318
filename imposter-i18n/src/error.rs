//! Error types for i18n operations

use thiserror::Error;

/// Errors that can occur during locale resolution and translation.
#[derive(Debug, Error)]
pub enum I18nError {
    /// String is not a language tag at all
    #[error("Invalid locale: {0}")]
    InvalidLocale(String),

    /// Well-formed tag outside the supported set
    #[error("Unsupported locale: {0}")]
    UnsupportedLocale(String),

    /// Key not found in the active or the fallback table
    #[error("Translation not found: {key} for locale {locale}")]
    TranslationMissing { key: String, locale: String },

    /// Translation resource could not be used
    #[error("Failed to load translations: {0}")]
    TranslationLoad(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parse error
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}
