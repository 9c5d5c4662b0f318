// Imposter Generator - random word lists for the Imposter party game
//
// The application layer ties the member crates together: locale resolution
// and translations (imposter-i18n), word packs and the generator
// (imposter-words), and saved settings (store).

mod app;
mod error;
mod store;

pub use app::{
    App, BootstrapOptions, DirExporter, Exporter, Notice, NoticeKind, language_label,
};
pub use error::{AppError, ExportError};
pub use store::{JsonFileStore, KeyValueStore, LOCALE_KEY, MemoryStore, PersistedState, STATE_KEY};

// Re-export member crates
pub use imposter_i18n;
pub use imposter_log;
pub use imposter_words;

#[cfg(feature = "config")]
pub use imposter_config;

/// Result type for the application layer
pub type Result<T> = std::result::Result<T, AppError>;

// Prelude for common imports
pub mod prelude {
    pub use crate::{
        App, AppError, BootstrapOptions, Exporter, KeyValueStore, MemoryStore, Notice,
        NoticeKind, Result,
    };
    pub use imposter_i18n::{Locale, Translator};
    pub use imposter_words::{Difficulty, GeneratorState, WordCatalog};
}
