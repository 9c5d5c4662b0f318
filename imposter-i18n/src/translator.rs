//! Translation Lookup
//!
//! Resolves dotted keys against the active locale, retries the fallback
//! locale, and finally echoes the key. Placeholders of the form `{name}`
//! are filled in a single pass.

use crate::{I18nError, Locale, Result, TranslationTable, TranslationValue, fallback_table};
use imposter_log::{debug, error, warn};
use std::path::Path;

/// Translator owned by the application.
///
/// # Example
///
/// ```
/// use imposter_i18n::{Locale, Translator, fallback_table};
///
/// let mut translator = Translator::new(fallback_table());
/// translator.set_locale(Locale::Ja);
///
/// // Japanese is missing from the embedded table, English answers
/// assert_eq!(translator.translate("generator.results.title"), "Generated Words");
/// assert_eq!(translator.translate("nonexistent.key"), "nonexistent.key");
/// ```
#[derive(Debug, Clone)]
pub struct Translator {
    table: TranslationTable,
    locale: Locale,
    fallback: Locale,
}

impl Translator {
    /// Create a translator over `table`, active and fallback locale both
    /// [`Locale::DEFAULT`].
    pub fn new(table: TranslationTable) -> Self {
        Self {
            table,
            locale: Locale::DEFAULT,
            fallback: Locale::DEFAULT,
        }
    }

    /// Load the resource at `path`, or the embedded table if that fails.
    ///
    /// The failure is logged and otherwise invisible.
    pub fn load_or_fallback(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match TranslationTable::load(path) {
            Ok(table) => {
                debug!("Loaded translations from {}", path.display());
                Self::new(table)
            }
            Err(e) => {
                error!("Error loading translations from {}: {}", path.display(), e);
                Self::new(fallback_table())
            }
        }
    }

    /// Parse an in-memory resource, or use the embedded table if it does not
    /// parse.
    pub fn from_json_or_fallback(json: &str) -> Self {
        match TranslationTable::from_json(json) {
            Ok(table) => Self::new(table),
            Err(e) => {
                error!("Error loading translations: {}", e);
                Self::new(fallback_table())
            }
        }
    }

    pub fn with_fallback(mut self, fallback: Locale) -> Self {
        self.fallback = fallback;
        self
    }

    pub fn set_locale(&mut self, locale: Locale) {
        debug!("Translator locale {} -> {}", self.locale, locale);
        self.locale = locale;
    }

    pub fn current_locale(&self) -> Locale {
        self.locale
    }

    pub fn fallback_locale(&self) -> Locale {
        self.fallback
    }

    pub fn supported_locales(&self) -> &'static [Locale] {
        &Locale::ALL
    }

    pub fn table(&self) -> &TranslationTable {
        &self.table
    }

    /// Find the string for `key`: active locale first, then fallback.
    ///
    /// A key that ends on a nested namespace rather than a string counts as
    /// missing.
    fn resolve(&self, key: &str) -> Option<&str> {
        self.table
            .lookup(self.locale, key)
            .and_then(TranslationValue::as_text)
            .or_else(|| {
                self.table
                    .lookup(self.fallback, key)
                    .and_then(TranslationValue::as_text)
            })
    }

    /// Translate `key`, reporting a miss as an error.
    pub fn try_translate(&self, key: &str, params: &[(&str, &str)]) -> Result<String> {
        let text = self
            .resolve(key)
            .ok_or_else(|| I18nError::TranslationMissing {
                key: key.to_string(),
                locale: self.locale.code().to_string(),
            })?;

        if params.is_empty() {
            Ok(text.to_string())
        } else {
            Ok(substitute(text, params))
        }
    }

    /// Translate `key`. A miss is logged and the key itself is returned.
    pub fn translate(&self, key: &str) -> String {
        self.translate_with(key, &[])
    }

    /// Translate `key` and fill `{name}` placeholders from `params`.
    pub fn translate_with(&self, key: &str, params: &[(&str, &str)]) -> String {
        match self.try_translate(key, params) {
            Ok(text) => text,
            Err(e) => {
                warn!("{}", e);
                key.to_string()
            }
        }
    }

    /// Whether `key` resolves without falling back.
    pub fn has(&self, key: &str) -> bool {
        self.table
            .lookup(self.locale, key)
            .and_then(TranslationValue::as_text)
            .is_some()
    }
}

/// Replace every `{name}` in `text` with the matching param.
///
/// Names are ASCII word characters. Unknown names stay verbatim, and
/// inserted values are not scanned again.
///
/// ```
/// use imposter_i18n::substitute;
///
/// assert_eq!(substitute("Hello {name}", &[("name", "Bob")]), "Hello Bob");
/// assert_eq!(substitute("Hello {other}", &[("name", "Bob")]), "Hello {other}");
/// ```
pub fn substitute(text: &str, params: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];

        let name_len = after
            .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
            .unwrap_or(after.len());
        let name = &after[..name_len];

        if name_len > 0 && after[name_len..].starts_with('}') {
            match params.iter().find(|(k, _)| *k == name) {
                Some((_, value)) => out.push_str(value),
                None => {
                    out.push('{');
                    out.push_str(name);
                    out.push('}');
                }
            }
            rest = &after[name_len + 1..];
        } else {
            out.push('{');
            rest = after;
        }
    }

    out.push_str(rest);
    out
}
