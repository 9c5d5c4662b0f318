//! Word generation for the Imposter party game
//!
//! - **Catalog**: built-in locale × theme word lists ([`WordCatalog`])
//! - **Selection**: Fisher-Yates shuffle, then a prefix or suffix cut by
//!   [`Difficulty`]
//! - **State**: [`GeneratorState`] holds the player's settings and the last
//!   result, with clipboard and download text forms
//!
//! The random source is always passed in, so a seeded generator makes every
//! draw reproducible.
//!
//! # Quick Start
//!
//! ```rust
//! use imposter_words::{Difficulty, GeneratorState, WordCatalog};
//!
//! let mut generator = GeneratorState::new(WordCatalog::builtin());
//! generator.set_locale("ja");
//! generator.set_theme("colors");
//! generator.set_difficulty(Difficulty::Easy);
//! generator.set_word_count(8);
//!
//! let words = generator.generate(&mut rand::rng()).unwrap();
//! assert_eq!(words.len(), 8);
//! println!("{}", generator.words_as_text());
//! ```

mod catalog;
mod difficulty;
mod error;
mod generator;
mod packs;
mod select;

pub use catalog::{REFERENCE_LOCALE, ThemeWords, WordCatalog};
pub use difficulty::Difficulty;
pub use error::WordsError;
pub use generator::{DEFAULT_THEME, GeneratorState, GeneratorStats};
pub use select::{
    DEFAULT_WORD_COUNT, MAX_WORD_COUNT, MIN_WORD_COUNT, clamp_word_count, draw, shuffle,
};

/// Result type for word generation
pub type Result<T> = std::result::Result<T, WordsError>;

/// Prelude for common imports
pub mod prelude {
    pub use crate::{Difficulty, GeneratorState, Result, WordCatalog, WordsError};
}
