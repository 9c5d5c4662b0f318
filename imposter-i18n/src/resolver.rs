//! Initial Locale Resolution
//!
//! Picks the session locale once at startup from, in order:
//!
//! 1. a non-default locale segment at the end of the URL path (`/zh`,
//!    `/site/ja/`), or a legacy `?lang=` parameter when the path is the site
//!    root,
//! 2. the locale saved by a previous session,
//! 3. the primary subtag of the browser language, if supported,
//! 4. [`Locale::DEFAULT`].
//!
//! The winning value is validated last: a stored `fr` yields the default
//! locale, it does not fall through to the browser language.

use crate::{Locale, primary_language};
use imposter_log::{debug, info, warn};

/// Which layer decided the locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocaleSource {
    /// Locale segment in the URL path
    Path,
    /// `?lang=` parameter on the root path
    Query,
    /// Preference saved by a previous session
    Stored,
    /// Browser / system language
    Browser,
    /// Nothing matched, or the match was unsupported
    Default,
}

impl LocaleSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            LocaleSource::Path => "path",
            LocaleSource::Query => "query",
            LocaleSource::Stored => "stored",
            LocaleSource::Browser => "browser",
            LocaleSource::Default => "default",
        }
    }
}

/// Inputs for [`resolve_initial_locale`].
#[derive(Debug, Clone, Default)]
pub struct LocaleSources<'a> {
    /// URL path of the page, e.g. `/imposter/zh/`
    pub path: &'a str,
    /// Value of the `lang` query parameter, if any
    pub query_lang: Option<&'a str>,
    /// Locale persisted under the `locale` key
    pub stored: Option<&'a str>,
    /// Browser or system language tag, e.g. `ko-KR`
    pub browser_language: Option<&'a str>,
}

impl<'a> LocaleSources<'a> {
    pub fn new(path: &'a str) -> Self {
        Self {
            path,
            ..Self::default()
        }
    }

    pub fn query_lang(mut self, lang: Option<&'a str>) -> Self {
        self.query_lang = lang;
        self
    }

    pub fn stored(mut self, stored: Option<&'a str>) -> Self {
        self.stored = stored;
        self
    }

    pub fn browser_language(mut self, tag: Option<&'a str>) -> Self {
        self.browser_language = tag;
        self
    }
}

/// Result of locale resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub locale: Locale,
    pub source: LocaleSource,
}

/// Locale named by the URL, if any.
///
/// A trailing path segment that is exactly a supported code other than
/// [`Locale::DEFAULT`] wins; `/en/` is served as the root. Otherwise,
/// on the site root (`""`, `/`, any path ending in `/`, or `.../index.html`)
/// a supported `?lang=` value is accepted. Everything else yields `None`.
///
/// ```
/// use imposter_i18n::{Locale, LocaleSource, locale_from_path};
///
/// assert_eq!(locale_from_path("/zh/", None), Some((Locale::Zh, LocaleSource::Path)));
/// assert_eq!(locale_from_path("/", Some("ko")), Some((Locale::Ko, LocaleSource::Query)));
/// assert_eq!(locale_from_path("/fr/", None), None);
/// ```
pub fn locale_from_path(path: &str, query_lang: Option<&str>) -> Option<(Locale, LocaleSource)> {
    let trimmed = path.strip_suffix('/').unwrap_or(path);
    if let Some(segment) = trimmed.rsplit('/').next() {
        if !segment.is_empty() && trimmed.contains('/') {
            if let Some(locale) = Locale::ALL
                .into_iter()
                .filter(|l| *l != Locale::DEFAULT)
                .find(|l| l.code() == segment)
            {
                return Some((locale, LocaleSource::Path));
            }
        }
    }

    if is_root_path(path) {
        if let Some(locale) = query_lang.and_then(Locale::from_code) {
            return Some((locale, LocaleSource::Query));
        }
    }

    None
}

fn is_root_path(path: &str) -> bool {
    path.is_empty() || path.ends_with('/') || path.ends_with("/index.html")
}

/// Resolve the session locale. Runs once per bootstrap; later changes are
/// explicit user actions.
pub fn resolve_initial_locale(sources: &LocaleSources<'_>) -> Resolution {
    if let Some((locale, source)) = locale_from_path(sources.path, sources.query_lang) {
        debug!("Using {} language: {}", source.as_str(), locale);
        return Resolution { locale, source };
    }

    let browser = sources
        .browser_language
        .and_then(primary_language)
        .filter(|code| Locale::is_supported(code));

    let (candidate, source) = match (sources.stored, browser.as_deref()) {
        (Some(stored), _) if !stored.is_empty() => (stored.to_string(), LocaleSource::Stored),
        (_, Some(code)) => (code.to_string(), LocaleSource::Browser),
        _ => {
            debug!("No locale hint, using default {}", Locale::DEFAULT);
            return Resolution {
                locale: Locale::DEFAULT,
                source: LocaleSource::Default,
            };
        }
    };

    match Locale::from_code(&candidate) {
        Some(locale) => {
            info!("Initial locale {} from {}", locale, source.as_str());
            Resolution { locale, source }
        }
        None => {
            warn!("Locale not supported: {}", candidate);
            Resolution {
                locale: Locale::DEFAULT,
                source: LocaleSource::Default,
            }
        }
    }
}
