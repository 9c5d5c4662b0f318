//! Generator State
//!
//! Current locale, theme, difficulty and word count, plus the words drawn by
//! the last [`GeneratorState::generate`] call.

use crate::catalog::REFERENCE_LOCALE;
use crate::select::{DEFAULT_WORD_COUNT, clamp_word_count, draw};
use crate::{Difficulty, Result, WordCatalog, WordsError};
use chrono::NaiveDate;
use imposter_log::{debug, error, info};
use rand::Rng;
use serde::Serialize;

/// Theme selected before the player picks one.
pub const DEFAULT_THEME: &str = "animals";

/// Snapshot of the generator for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratorStats {
    pub locale: String,
    pub theme: String,
    pub difficulty: Difficulty,
    pub word_count: usize,
    pub generated_count: usize,
    pub available_themes: usize,
    pub total_words_in_theme: usize,
}

/// Mutable generator configuration and its last result.
///
/// # Example
///
/// ```
/// use imposter_words::{Difficulty, GeneratorState, WordCatalog};
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let mut generator = GeneratorState::new(WordCatalog::builtin());
/// generator.set_theme("food");
/// generator.set_difficulty(Difficulty::Hard);
/// generator.set_word_count(3);
///
/// let mut rng = StdRng::seed_from_u64(1);
/// let words = generator.generate(&mut rng).unwrap();
/// assert_eq!(words.len(), 5);
/// ```
#[derive(Debug, Clone)]
pub struct GeneratorState {
    catalog: WordCatalog,
    locale: String,
    theme: String,
    difficulty: Difficulty,
    word_count: usize,
    generated: Vec<String>,
}

impl GeneratorState {
    pub fn new(catalog: WordCatalog) -> Self {
        Self {
            catalog,
            locale: REFERENCE_LOCALE.to_string(),
            theme: DEFAULT_THEME.to_string(),
            difficulty: Difficulty::default(),
            word_count: DEFAULT_WORD_COUNT,
            generated: Vec::new(),
        }
    }

    /// Switch the word language. Locales without any catalog entry are
    /// ignored.
    pub fn set_locale(&mut self, locale: &str) {
        if self.catalog.has_locale(locale) {
            self.locale = locale.to_string();
        } else {
            debug!("No word packs for locale {}, keeping {}", locale, self.locale);
        }
    }

    pub fn set_theme(&mut self, theme: &str) {
        self.theme = theme.to_string();
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
    }

    /// Store `count`, clamped to the allowed range.
    pub fn set_word_count(&mut self, count: i64) {
        self.word_count = clamp_word_count(count);
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn theme(&self) -> &str {
        &self.theme
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn word_count(&self) -> usize {
        self.word_count
    }

    pub fn catalog(&self) -> &WordCatalog {
        &self.catalog
    }

    /// Draw a fresh word list for the current settings, replacing the last
    /// one.
    ///
    /// A missing or empty theme list leaves the result empty and returns
    /// [`WordsError::CatalogMissing`].
    pub fn generate<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<&[String]> {
        let words = match self.catalog.words(&self.locale, &self.theme) {
            Some(words) if !words.is_empty() => words,
            _ => {
                self.generated.clear();
                let err = WordsError::CatalogMissing {
                    locale: self.locale.clone(),
                    theme: self.theme.clone(),
                };
                error!("{}", err);
                return Err(err);
            }
        };

        self.generated = draw(words, self.difficulty, self.word_count, rng);
        info!(
            "Generated {} {} words ({}, {})",
            self.generated.len(),
            self.theme,
            self.locale,
            self.difficulty
        );
        Ok(&self.generated)
    }

    pub fn generated_words(&self) -> &[String] {
        &self.generated
    }

    /// The clipboard form: `"Lion, Tiger"`.
    pub fn words_as_text(&self) -> String {
        self.generated.join(", ")
    }

    /// The download form, one word per line.
    pub fn words_for_download(&self) -> String {
        self.generated.join("\n")
    }

    /// `imposter-game-words-<theme>-<YYYY-MM-DD>.txt`
    pub fn file_name(&self, date: NaiveDate) -> String {
        format!(
            "imposter-game-words-{}-{}.txt",
            self.theme,
            date.format("%Y-%m-%d")
        )
    }

    /// Themes of the current locale, or of the reference locale if the
    /// current one has none.
    pub fn available_themes(&self) -> Vec<&str> {
        let themes = self.catalog.themes(&self.locale);
        if themes.is_empty() {
            self.catalog.themes(REFERENCE_LOCALE)
        } else {
            themes
        }
    }

    pub fn theme_word_count(&self, theme: &str) -> usize {
        self.catalog
            .words(&self.locale, theme)
            .map_or(0, |words| words.len())
    }

    pub fn reset(&mut self) {
        self.generated.clear();
    }

    pub fn stats(&self) -> GeneratorStats {
        GeneratorStats {
            locale: self.locale.clone(),
            theme: self.theme.clone(),
            difficulty: self.difficulty,
            word_count: self.word_count,
            generated_count: self.generated.len(),
            available_themes: self.available_themes().len(),
            total_words_in_theme: self.theme_word_count(&self.theme),
        }
    }
}

impl Default for GeneratorState {
    fn default() -> Self {
        Self::new(WordCatalog::builtin())
    }
}
