//! Translation Tables
//!
//! Translations are a tree per locale: every node is either a string or a
//! map of further nodes. Keys such as `generator.results.title` are walked
//! one segment at a time.

use crate::{I18nError, Locale, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// A node of a translation tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TranslationValue {
    /// Translated text
    Leaf(String),
    /// Nested namespace
    Node(BTreeMap<String, TranslationValue>),
}

impl TranslationValue {
    /// Follow a dotted key from this node.
    ///
    /// Fails on a missing segment or when a string is reached with segments
    /// still left.
    pub fn get_path(&self, key: &str) -> Option<&TranslationValue> {
        key.split('.').try_fold(self, |node, segment| match node {
            TranslationValue::Node(children) => children.get(segment),
            TranslationValue::Leaf(_) => None,
        })
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            TranslationValue::Leaf(text) => Some(text),
            TranslationValue::Node(_) => None,
        }
    }

    /// Number of strings below this node.
    pub fn leaf_count(&self) -> usize {
        match self {
            TranslationValue::Leaf(_) => 1,
            TranslationValue::Node(children) => children.values().map(Self::leaf_count).sum(),
        }
    }
}

/// All locales' translation trees. Read-only once loaded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TranslationTable {
    locales: BTreeMap<String, TranslationValue>,
}

impl TranslationTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a `{ "<locale>": { ... } }` document.
    ///
    /// Every top-level value must be an object; unknown locale codes are kept
    /// but never consulted.
    pub fn from_json(json: &str) -> Result<Self> {
        let table: Self = serde_json::from_str(json)?;
        if let Some((code, _)) = table
            .locales
            .iter()
            .find(|(_, tree)| matches!(tree, TranslationValue::Leaf(_)))
        {
            return Err(I18nError::TranslationLoad(format!(
                "locale `{}` must map to an object",
                code
            )));
        }
        Ok(table)
    }

    /// Read and parse a translation resource from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_json(&content)
    }

    /// Replace the tree of one locale.
    pub fn insert(&mut self, locale: Locale, tree: TranslationValue) {
        self.locales.insert(locale.code().to_string(), tree);
    }

    pub fn tree(&self, locale: Locale) -> Option<&TranslationValue> {
        self.locales.get(locale.code())
    }

    pub fn has_locale(&self, locale: Locale) -> bool {
        self.locales.contains_key(locale.code())
    }

    /// Resolve `key` under one locale only, without fallback.
    pub fn lookup(&self, locale: Locale, key: &str) -> Option<&TranslationValue> {
        self.tree(locale)?.get_path(key)
    }

    /// Supported locales present in the table.
    pub fn locales(&self) -> Vec<Locale> {
        Locale::ALL
            .into_iter()
            .filter(|l| self.has_locale(*l))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = r#"{
        "en": {
            "generator": {
                "title": "Free Imposter Game Generator",
                "results": { "title": "Generated Words" }
            }
        },
        "zh": {
            "generator": { "title": "免费冒名顶替者游戏生成器" }
        }
    }"#;

    #[test]
    fn test_from_json_builds_trees() {
        let table = TranslationTable::from_json(DOC).unwrap();
        assert_eq!(table.locales(), vec![Locale::En, Locale::Zh]);
        assert_eq!(
            table
                .lookup(Locale::En, "generator.results.title")
                .and_then(TranslationValue::as_text),
            Some("Generated Words")
        );
    }

    #[test]
    fn test_lookup_misses() {
        let table = TranslationTable::from_json(DOC).unwrap();
        assert!(table.lookup(Locale::En, "generator.missing").is_none());
        assert!(table.lookup(Locale::Ja, "generator.title").is_none());
        // A string with segments left over is a miss
        assert!(table.lookup(Locale::En, "generator.title.extra").is_none());
    }

    #[test]
    fn test_lookup_can_stop_on_a_node() {
        let table = TranslationTable::from_json(DOC).unwrap();
        let node = table.lookup(Locale::En, "generator.results").unwrap();
        assert!(node.as_text().is_none());
        assert_eq!(node.leaf_count(), 1);
    }

    #[test]
    fn test_from_json_rejects_bad_documents() {
        assert!(matches!(
            TranslationTable::from_json(r#"{"en": "flat"}"#),
            Err(I18nError::TranslationLoad(_))
        ));
        assert!(matches!(
            TranslationTable::from_json(r#"{"en": {"count": 3}}"#),
            Err(I18nError::Json(_))
        ));
        assert!(TranslationTable::from_json("not json").is_err());
    }

    #[test]
    fn test_insert_replaces_tree() {
        let mut table = TranslationTable::new();
        assert!(!table.has_locale(Locale::Ko));

        let tree: TranslationValue = serde_json::from_str(r#"{"hello": "안녕하세요"}"#).unwrap();
        table.insert(Locale::Ko, tree);
        assert_eq!(
            table.lookup(Locale::Ko, "hello").and_then(TranslationValue::as_text),
            Some("안녕하세요")
        );
    }
}
