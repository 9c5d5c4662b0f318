//! Internationalization for the Imposter word generator
//!
//! - **Locales**: the five supported UI languages ([`Locale`])
//! - **Resolution**: URL path > saved preference > browser language > default
//! - **Lookup**: dotted keys over nested tables, with fallback and `{name}`
//!   placeholders
//!
//! # Quick Start
//!
//! ```rust
//! use imposter_i18n::{LocaleSources, Translator, resolve_initial_locale};
//!
//! let resolution = resolve_initial_locale(
//!     &LocaleSources::new("/zh/").browser_language(Some("ko-KR")),
//! );
//!
//! let mut translator = Translator::bundled();
//! translator.set_locale(resolution.locale);
//!
//! assert_eq!(translator.translate("generator.results.title"), "生成的词汇");
//! assert_eq!(
//!     translator.translate_with("generator.results.count", &[("count", "10")]),
//!     "共 10 个词汇"
//! );
//! ```

mod error;
mod fallback;
mod locale;
mod resolver;
mod table;
mod translator;

pub use error::I18nError;
pub use fallback::fallback_table;
pub use locale::{Locale, primary_language};
pub use resolver::{
    LocaleSource, LocaleSources, Resolution, locale_from_path, resolve_initial_locale,
};
pub use table::{TranslationTable, TranslationValue};
pub use translator::{Translator, substitute};

/// Result type for i18n operations
pub type Result<T> = std::result::Result<T, I18nError>;

/// The translation resource shipped with the crate.
pub const BUNDLED_TRANSLATIONS: &str = include_str!("../locales/translations.json");

impl Translator {
    /// Translator over [`BUNDLED_TRANSLATIONS`].
    pub fn bundled() -> Self {
        Self::from_json_or_fallback(BUNDLED_TRANSLATIONS)
    }
}

/// Prelude for common imports
pub mod prelude {
    pub use crate::{
        I18nError, Locale, LocaleSources, Result, TranslationTable, Translator,
        resolve_initial_locale,
    };
}
