//! Embedded fallback translations.
//!
//! Only used when the translation resource cannot be loaded. English only,
//! and only the strings the generator screen needs; anything else echoes its
//! key.

use crate::{Locale, TranslationTable, TranslationValue};
use once_cell::sync::Lazy;
use std::collections::BTreeMap;

static FALLBACK: Lazy<TranslationTable> = Lazy::new(build);

/// The embedded table.
pub fn fallback_table() -> TranslationTable {
    FALLBACK.clone()
}

fn leaf(text: &str) -> TranslationValue {
    TranslationValue::Leaf(text.to_string())
}

fn node(entries: &[(&str, TranslationValue)]) -> TranslationValue {
    TranslationValue::Node(
        entries
            .iter()
            .map(|(key, value)| (key.to_string(), value.clone()))
            .collect::<BTreeMap<_, _>>(),
    )
}

fn build() -> TranslationTable {
    let generator = node(&[
        ("logo", leaf("Imposter Generator")),
        ("badge", leaf("Free Word Generator Tool")),
        ("title", leaf("Free Imposter Game Generator")),
        ("subtitle", leaf("Generate random words for your imposter game sessions")),
        (
            "controls",
            node(&[
                ("title", leaf("Generator Settings")),
                ("theme", leaf("Select Theme")),
                ("difficulty", leaf("Difficulty Level")),
                ("wordCount", leaf("Number of Words")),
                ("generate", leaf("Generate Words")),
            ]),
        ),
        (
            "themes",
            node(&[
                ("animals", leaf("Animals")),
                ("sports", leaf("Sports")),
                ("movies", leaf("Movies")),
                ("food", leaf("Food")),
                ("technology", leaf("Technology")),
                ("music", leaf("Music")),
                ("countries", leaf("Countries")),
                ("colors", leaf("Colors")),
            ]),
        ),
        (
            "difficulty",
            node(&[
                ("easy", leaf("Easy")),
                ("medium", leaf("Medium")),
                ("hard", leaf("Hard")),
            ]),
        ),
        (
            "results",
            node(&[
                ("title", leaf("Generated Words")),
                ("empty", leaf("No words generated yet")),
                ("emptyHint", leaf("Click the generate button")),
                ("copy", leaf("Copy All")),
                ("copied", leaf("Copied!")),
                ("download", leaf("Download")),
            ]),
        ),
        (
            "toast",
            node(&[
                ("copied", leaf("Words copied to clipboard!")),
                ("downloaded", leaf("File downloaded successfully!")),
                ("error", leaf("Something went wrong")),
            ]),
        ),
    ]);

    let mut table = TranslationTable::new();
    table.insert(Locale::En, node(&[("generator", generator)]));
    table
}
