//! Supported Locales
//!
//! The generator ships five UI languages. Anything else is parsed down to
//! its primary subtag and either matches one of them or is rejected.

use crate::{I18nError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A supported UI language.
///
/// # Examples
///
/// ```
/// use imposter_i18n::Locale;
///
/// let zh: Locale = "zh".parse().unwrap();
/// assert_eq!(zh.code(), "zh");
/// assert_eq!(Locale::default(), Locale::En);
/// assert!("fr".parse::<Locale>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// English, the default and fallback locale
    #[default]
    En,
    /// Chinese
    Zh,
    /// Japanese
    Ja,
    /// Korean
    Ko,
    /// Spanish
    Es,
}

impl Locale {
    /// Every supported locale, in menu order.
    pub const ALL: [Locale; 5] = [Locale::En, Locale::Zh, Locale::Ja, Locale::Ko, Locale::Es];

    /// Locale used when nothing else resolves, and for fallback lookups.
    pub const DEFAULT: Locale = Locale::En;

    /// Two-letter code, as used in URL paths and translation tables.
    pub fn code(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Zh => "zh",
            Locale::Ja => "ja",
            Locale::Ko => "ko",
            Locale::Es => "es",
        }
    }

    /// Label shown on the language switcher.
    pub fn label(&self) -> &'static str {
        match self {
            Locale::En => "🇺🇸 English",
            Locale::Zh => "🇨🇳 中文",
            Locale::Ja => "🇯🇵 日本語",
            Locale::Ko => "🇰🇷 한국어",
            Locale::Es => "🇪🇸 Español",
        }
    }

    /// Look up an exact two-letter code. `"ZH"` and `" zh"` are not codes.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|l| l.code() == code)
    }

    /// Resolve any language tag (`zh-CN`, `ko_KR.UTF-8`) by its primary subtag.
    pub fn from_tag(tag: &str) -> Result<Self> {
        let primary =
            primary_language(tag).ok_or_else(|| I18nError::InvalidLocale(tag.to_string()))?;
        Self::from_code(&primary).ok_or(I18nError::UnsupportedLocale(primary))
    }

    /// Whether `code` names a supported locale exactly.
    pub fn is_supported(code: &str) -> bool {
        Self::from_code(code).is_some()
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = I18nError;

    fn from_str(s: &str) -> Result<Self> {
        Locale::from_tag(s)
    }
}

/// Extract the lowercase primary language subtag of a tag.
///
/// Accepts BCP 47 (`zh-Hans-CN`), underscore (`zh_CN`) and POSIX locale
/// (`zh_CN.UTF-8`, `de_DE@euro`) forms. Returns `None` when the primary
/// subtag is not 2-3 ASCII letters.
///
/// ```
/// use imposter_i18n::primary_language;
///
/// assert_eq!(primary_language("zh-CN").as_deref(), Some("zh"));
/// assert_eq!(primary_language("ko_KR.UTF-8").as_deref(), Some("ko"));
/// assert_eq!(primary_language("C"), None);
/// ```
pub fn primary_language(tag: &str) -> Option<String> {
    let tag = tag.trim();
    let tag = tag.split(['.', '@']).next().unwrap_or(tag);
    let primary = tag.split(['-', '_']).next()?.to_ascii_lowercase();

    if (2..=3).contains(&primary.len()) && primary.chars().all(|c| c.is_ascii_alphabetic()) {
        Some(primary)
    } else {
        None
    }
}
