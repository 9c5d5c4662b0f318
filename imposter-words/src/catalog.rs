//! Word Catalog
//!
//! Immutable mapping of locale → theme → word list. Themes keep their
//! insertion order so menus list them the same way every time.

use crate::packs::BUILTIN;
use crate::{Result, WordsError};
use imposter_log::{debug, error};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Locale whose theme set every other locale is checked against.
pub const REFERENCE_LOCALE: &str = "en";

/// One theme's word list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeWords {
    pub theme: String,
    pub words: Vec<String>,
}

/// The static word data, fully preloaded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordCatalog {
    locales: HashMap<String, Vec<ThemeWords>>,
}

impl WordCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// The packs compiled into the crate.
    pub fn builtin() -> Self {
        let mut catalog = Self::new();
        for (locale, pack) in BUILTIN {
            for (theme, words) in pack.iter() {
                catalog.insert(locale, theme, words.iter().map(|w| w.to_string()).collect());
            }
        }
        catalog
    }

    /// Parse `{ "<locale>": { "<theme>": ["word", ...] } }`.
    ///
    /// Themes of a parsed catalog are ordered by name.
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: HashMap<String, serde_json::Map<String, serde_json::Value>> =
            serde_json::from_str(json)?;

        let mut catalog = Self::new();
        for (locale, themes) in raw {
            for (theme, words) in themes {
                let words: Vec<String> = serde_json::from_value(words)?;
                catalog.insert(&locale, &theme, words);
            }
        }
        Ok(catalog)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_json(&content)
    }

    /// Add or replace a theme's words.
    pub fn insert(&mut self, locale: &str, theme: &str, words: Vec<String>) {
        let themes = self.locales.entry(locale.to_string()).or_default();
        match themes.iter_mut().find(|t| t.theme == theme) {
            Some(existing) => existing.words = words,
            None => themes.push(ThemeWords {
                theme: theme.to_string(),
                words,
            }),
        }
    }

    pub fn has_locale(&self, locale: &str) -> bool {
        self.locales.contains_key(locale)
    }

    /// Word list for the pair, if present.
    pub fn words(&self, locale: &str, theme: &str) -> Option<&[String]> {
        self.locales
            .get(locale)?
            .iter()
            .find(|t| t.theme == theme)
            .map(|t| t.words.as_slice())
    }

    /// Theme names of `locale`, in catalog order.
    pub fn themes(&self, locale: &str) -> Vec<&str> {
        self.locales
            .get(locale)
            .map(|themes| themes.iter().map(|t| t.theme.as_str()).collect())
            .unwrap_or_default()
    }

    /// Locale codes present, sorted.
    pub fn locales(&self) -> Vec<&str> {
        let mut codes: Vec<&str> = self.locales.keys().map(String::as_str).collect();
        codes.sort_unstable();
        codes
    }

    /// Check that each of `locales` has a non-empty list for every theme of
    /// [`REFERENCE_LOCALE`].
    ///
    /// Gaps are configuration errors; each one is logged and returned.
    pub fn validate(&self, locales: &[&str]) -> Vec<WordsError> {
        let reference = self.themes(REFERENCE_LOCALE);
        let mut problems = Vec::new();

        for locale in locales {
            for theme in &reference {
                let complete = self
                    .words(locale, theme)
                    .is_some_and(|words| !words.is_empty());
                if !complete {
                    let problem = WordsError::IncompleteCatalog {
                        locale: locale.to_string(),
                        theme: theme.to_string(),
                    };
                    error!("{}", problem);
                    problems.push(problem);
                }
            }
        }

        if problems.is_empty() {
            debug!("Catalog complete for {} locales", locales.len());
        }
        problems
    }
}
