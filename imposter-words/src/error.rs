//! Error types for word generation

use thiserror::Error;

/// Errors that can occur while drawing words.
#[derive(Debug, Error)]
pub enum WordsError {
    /// No word list, or an empty one, for the pair
    #[error("Word pack not found: {locale}/{theme}")]
    CatalogMissing { locale: String, theme: String },

    /// Difficulty name not recognised
    #[error("Invalid difficulty: {0}")]
    InvalidDifficulty(String),

    /// A locale lacks a theme that the reference locale has
    #[error("Incomplete catalog: {locale} has no words for {theme}")]
    IncompleteCatalog { locale: String, theme: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parse error
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}
