//! Application Orchestration
//!
//! [`App`] owns the translator, the generator, the persisted store and the
//! random source. Front-ends call its `change_*` methods for user actions and
//! show the [`Notice`]s it returns.

use crate::store::{KeyValueStore, LOCALE_KEY, PersistedState, STATE_KEY};
use crate::{AppError, ExportError};
use chrono::NaiveDate;
use imposter_i18n::{Locale, LocaleSources, Resolution, Translator, resolve_initial_locale};
use imposter_log::{debug, error, info, warn};
use imposter_words::{
    DEFAULT_THEME, DEFAULT_WORD_COUNT, Difficulty, GeneratorState, WordCatalog, WordsError,
};
use rand::Rng;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

/// Startup inputs of [`App::bootstrap`].
#[derive(Debug, Clone)]
pub struct BootstrapOptions {
    /// URL path the page was opened at
    pub path: String,
    /// Legacy `?lang=` value
    pub query_lang: Option<String>,
    /// Browser or system language tag
    pub browser_language: Option<String>,
    /// Translation resource; `None` uses the bundled one
    pub translations: Option<PathBuf>,
    pub default_theme: String,
    pub default_difficulty: Difficulty,
    pub default_word_count: i64,
}

impl Default for BootstrapOptions {
    fn default() -> Self {
        Self {
            path: "/".to_string(),
            query_lang: None,
            browser_language: None,
            translations: None,
            default_theme: DEFAULT_THEME.to_string(),
            default_difficulty: Difficulty::default(),
            default_word_count: DEFAULT_WORD_COUNT as i64,
        }
    }
}

#[cfg(feature = "config")]
impl BootstrapOptions {
    /// Options carrying the generator defaults and resource path of
    /// `settings`.
    pub fn from_settings(settings: &imposter_config::Settings) -> Self {
        Self {
            translations: settings.translations.clone(),
            default_theme: settings.default_theme.clone(),
            default_difficulty: settings.default_difficulty,
            default_word_count: settings.default_word_count,
            ..Self::default()
        }
    }
}

/// Severity of a [`Notice`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// A short translated message for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == NoticeKind::Error
    }
}

/// Destination of copied and downloaded words.
pub trait Exporter {
    /// Put `text` on the clipboard.
    fn copy_text(&mut self, text: &str) -> Result<(), ExportError>;

    /// Save `contents` as a file called `file_name`.
    fn save_file(&mut self, file_name: &str, contents: &str) -> Result<(), ExportError>;
}

/// Exporter for terminals: the clipboard is a writer (usually stdout) and
/// downloads land in a directory.
#[derive(Debug)]
pub struct DirExporter<W: Write> {
    dir: PathBuf,
    clipboard: W,
}

impl<W: Write> DirExporter<W> {
    pub fn new(dir: impl Into<PathBuf>, clipboard: W) -> Self {
        Self {
            dir: dir.into(),
            clipboard,
        }
    }

    pub fn dir(&self) -> &std::path::Path {
        &self.dir
    }

    pub fn into_clipboard(self) -> W {
        self.clipboard
    }
}

impl<W: Write> Exporter for DirExporter<W> {
    fn copy_text(&mut self, text: &str) -> Result<(), ExportError> {
        writeln!(self.clipboard, "{}", text)
            .and_then(|_| self.clipboard.flush())
            .map_err(|e| ExportError::Clipboard(e.to_string()))
    }

    fn save_file(&mut self, file_name: &str, contents: &str) -> Result<(), ExportError> {
        let path = self.dir.join(file_name);
        fs::write(&path, contents)
            .map_err(|e| ExportError::Download(format!("{}: {}", path.display(), e)))?;
        info!("Saved {}", path.display());
        Ok(())
    }
}

/// Display label of a locale, e.g. `🇯🇵 日本語`.
pub fn language_label(locale: Locale) -> &'static str {
    locale.label()
}

/// The generator application.
///
/// # Example
///
/// ```
/// use imposter::{App, BootstrapOptions, MemoryStore};
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let options = BootstrapOptions {
///     path: "/ko/".to_string(),
///     ..BootstrapOptions::default()
/// };
/// let mut app = App::bootstrap(options, MemoryStore::new(), StdRng::seed_from_u64(9));
///
/// app.change_theme("food");
/// app.change_word_count(6);
/// assert_eq!(app.generate().unwrap().len(), 6);
/// assert_eq!(app.t("generator.results.title"), "생성된 단어");
/// ```
pub struct App<S: KeyValueStore, R: Rng> {
    translator: Translator,
    generator: GeneratorState,
    store: S,
    rng: R,
    resolution: Resolution,
    catalog_issues: Vec<WordsError>,
}

impl<S: KeyValueStore, R: Rng> App<S, R> {
    /// Resolve the session locale, load translations, apply defaults, then
    /// restore saved settings from `store`.
    pub fn bootstrap(options: BootstrapOptions, store: S, rng: R) -> Self {
        Self::bootstrap_with_catalog(options, WordCatalog::builtin(), store, rng)
    }

    /// [`App::bootstrap`] over a custom word catalog. Missing packs are
    /// logged here, once, and kept in [`App::catalog_issues`].
    pub fn bootstrap_with_catalog(
        options: BootstrapOptions,
        catalog: WordCatalog,
        store: S,
        rng: R,
    ) -> Self {
        let codes: Vec<&str> = Locale::ALL.iter().map(|l| l.code()).collect();
        let catalog_issues = catalog.validate(&codes);

        let stored: Option<String> = store.get_json(LOCALE_KEY);
        let sources = LocaleSources::new(&options.path)
            .query_lang(options.query_lang.as_deref())
            .stored(stored.as_deref())
            .browser_language(options.browser_language.as_deref());
        let resolution = resolve_initial_locale(&sources);

        let translator = match &options.translations {
            Some(path) => Translator::load_or_fallback(path),
            None => Translator::bundled(),
        };

        let mut generator = GeneratorState::new(catalog);
        generator.set_theme(&options.default_theme);
        generator.set_difficulty(options.default_difficulty);
        generator.set_word_count(options.default_word_count);

        let mut app = Self {
            translator,
            generator,
            store,
            rng,
            resolution,
            catalog_issues,
        };
        app.apply_locale(resolution.locale);
        app.restore_state();

        info!(
            "Ready: locale {} (from {}), theme {}",
            app.locale(),
            resolution.source.as_str(),
            app.generator.theme()
        );
        app
    }

    fn apply_locale(&mut self, locale: Locale) {
        self.translator.set_locale(locale);
        self.generator.set_locale(locale.code());
        if let Err(e) = self.store.set_json(LOCALE_KEY, &locale.code()) {
            error!("Storage set error: {}", e);
        }
    }

    fn restore_state(&mut self) {
        let Some(state) = self.store.get_json::<PersistedState>(STATE_KEY) else {
            return;
        };

        if let Some(theme) = state.theme.filter(|t| !t.is_empty()) {
            self.generator.set_theme(&theme);
        }
        if let Some(difficulty) = state.difficulty {
            match difficulty.parse::<Difficulty>() {
                Ok(difficulty) => self.generator.set_difficulty(difficulty),
                Err(e) => warn!("Not restoring difficulty: {}", e),
            }
        }
        if let Some(count) = state.word_count.filter(|c| *c != 0) {
            self.generator.set_word_count(count);
        }
        debug!("Restored settings: {:?}", self.generator.stats());
    }

    fn save_state(&mut self) {
        let state = PersistedState {
            theme: Some(self.generator.theme().to_string()),
            difficulty: Some(self.generator.difficulty().to_string()),
            word_count: Some(self.generator.word_count() as i64),
            locale: Some(self.locale().code().to_string()),
        };
        if let Err(e) = self.store.set_json(STATE_KEY, &state) {
            error!("Storage set error: {}", e);
        }
    }

    pub fn change_theme(&mut self, theme: &str) {
        self.generator.set_theme(theme);
        self.save_state();
    }

    /// Apply a difficulty by name. Unknown names are logged and ignored.
    pub fn change_difficulty(&mut self, difficulty: &str) -> Result<(), AppError> {
        match difficulty.parse::<Difficulty>() {
            Ok(difficulty) => {
                self.generator.set_difficulty(difficulty);
                self.save_state();
                Ok(())
            }
            Err(e) => {
                warn!("{}", e);
                Err(e.into())
            }
        }
    }

    pub fn change_word_count(&mut self, count: i64) {
        self.generator.set_word_count(count);
        self.save_state();
    }

    /// Switch language on user request.
    ///
    /// Unsupported codes select the default locale. Words already on screen
    /// are drawn again in the new language.
    pub fn change_locale(&mut self, code: &str) -> Locale {
        let locale = Locale::from_code(code).unwrap_or_else(|| {
            warn!("Unsupported locale: {}, falling back to {}", code, Locale::DEFAULT);
            Locale::DEFAULT
        });

        self.apply_locale(locale);

        if !self.generator.generated_words().is_empty() {
            debug!("Regenerating words in {}", locale);
            if let Some(notice) = self.generate().err() {
                warn!("Regeneration failed: {}", notice.message);
            }
        }
        locale
    }

    /// Draw a new word list. A missing word pack yields an error notice.
    pub fn generate(&mut self) -> Result<&[String], Notice> {
        let outcome = self.generator.generate(&mut self.rng).map(|words| words.len());
        match outcome {
            Ok(_) => Ok(self.generator.generated_words()),
            Err(_) => Err(Notice::error(self.t("generator.toast.error"))),
        }
    }

    /// Copy the words as comma-separated text.
    pub fn copy(&mut self, exporter: &mut impl Exporter) -> Notice {
        match exporter.copy_text(&self.generator.words_as_text()) {
            Ok(()) => Notice::success(self.t("generator.toast.copied")),
            Err(e) => {
                error!("Error copying: {}", e);
                Notice::error(self.t("generator.toast.error"))
            }
        }
    }

    /// Save the words one per line, in a file named after the theme and
    /// `date`.
    pub fn download(&mut self, exporter: &mut impl Exporter, date: NaiveDate) -> Notice {
        let file_name = self.generator.file_name(date);
        match exporter.save_file(&file_name, &self.generator.words_for_download()) {
            Ok(()) => Notice::success(self.t("generator.toast.downloaded")),
            Err(e) => {
                error!("Error downloading: {}", e);
                Notice::error(self.t("generator.toast.error"))
            }
        }
    }

    /// Translate `key` in the current locale.
    pub fn t(&self, key: &str) -> String {
        self.translator.translate(key)
    }

    /// Translate `key` with `{name}` parameters.
    pub fn t_with(&self, key: &str, params: &[(&str, &str)]) -> String {
        self.translator.translate_with(key, params)
    }

    /// Locale/theme pairs without words, found at bootstrap.
    pub fn catalog_issues(&self) -> &[WordsError] {
        &self.catalog_issues
    }

    pub fn locale(&self) -> Locale {
        self.translator.current_locale()
    }

    /// How the locale was chosen at startup.
    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    pub fn translator(&self) -> &Translator {
        &self.translator
    }

    pub fn generator(&self) -> &GeneratorState {
        &self.generator
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn boot(path: &str, store: MemoryStore) -> App<MemoryStore, StdRng> {
        let options = BootstrapOptions {
            path: path.to_string(),
            ..BootstrapOptions::default()
        };
        App::bootstrap(options, store, StdRng::seed_from_u64(17))
    }

    struct FailingExporter;

    impl Exporter for FailingExporter {
        fn copy_text(&mut self, _text: &str) -> Result<(), ExportError> {
            Err(ExportError::Clipboard("denied".into()))
        }

        fn save_file(&mut self, _file_name: &str, _contents: &str) -> Result<(), ExportError> {
            Err(ExportError::Download("read-only".into()))
        }
    }

    #[test]
    fn test_bootstrap_persists_resolved_locale() {
        let app = boot("/ja/", MemoryStore::new());
        assert_eq!(app.locale(), Locale::Ja);
        assert_eq!(app.generator().locale(), "ja");
        assert_eq!(app.store().get(LOCALE_KEY).as_deref(), Some("\"ja\""));
    }

    #[test]
    fn test_builtin_catalog_has_no_issues() {
        let app = boot("/", MemoryStore::new());
        assert!(app.catalog_issues().is_empty());
    }

    #[test]
    fn test_bootstrap_reports_missing_packs() {
        let mut catalog = WordCatalog::builtin();
        catalog.insert("ko", "music", Vec::new());

        let app = App::bootstrap_with_catalog(
            BootstrapOptions::default(),
            catalog,
            MemoryStore::new(),
            StdRng::seed_from_u64(17),
        );
        assert_eq!(app.catalog_issues().len(), 1);
        assert!(matches!(
            &app.catalog_issues()[0],
            WordsError::IncompleteCatalog { locale, theme } if locale == "ko" && theme == "music"
        ));
    }

    #[test]
    fn test_bootstrap_uses_stored_locale_on_root() {
        let mut store = MemoryStore::new();
        store.set_json(LOCALE_KEY, &"es").unwrap();
        let app = boot("/", store);
        assert_eq!(app.locale(), Locale::Es);
    }

    #[test]
    fn test_restore_ignores_locale_and_bad_values() {
        let mut store = MemoryStore::new();
        store
            .set(
                STATE_KEY,
                r#"{"theme":"music","difficulty":"brutal","wordCount":0,"locale":"ko"}"#.to_string(),
            )
            .unwrap();

        let app = boot("/", store);
        assert_eq!(app.locale(), Locale::En);
        assert_eq!(app.generator().theme(), "music");
        assert_eq!(app.generator().difficulty(), Difficulty::Medium);
        assert_eq!(app.generator().word_count(), 10);
    }

    #[test]
    fn test_restore_clamps_word_count() {
        let mut store = MemoryStore::new();
        store
            .set_json(
                STATE_KEY,
                &PersistedState {
                    word_count: Some(40),
                    difficulty: Some("hard".into()),
                    ..PersistedState::default()
                },
            )
            .unwrap();
        let app = boot("/", store);
        assert_eq!(app.generator().word_count(), 20);
        assert_eq!(app.generator().difficulty(), Difficulty::Hard);
    }

    #[test]
    fn test_changes_are_saved() {
        let mut app = boot("/", MemoryStore::new());
        app.change_theme("countries");
        app.change_difficulty("easy").unwrap();
        app.change_word_count(3);

        let saved: PersistedState = app.store().get_json(STATE_KEY).unwrap();
        assert_eq!(
            saved,
            PersistedState {
                theme: Some("countries".into()),
                difficulty: Some("easy".into()),
                word_count: Some(5),
                locale: Some("en".into()),
            }
        );
    }

    #[test]
    fn test_unknown_difficulty_is_rejected() {
        let mut app = boot("/", MemoryStore::new());
        assert!(app.change_difficulty("brutal").is_err());
        assert_eq!(app.generator().difficulty(), Difficulty::Medium);
        assert!(app.store().get(STATE_KEY).is_none());
    }

    #[test]
    fn test_change_locale_regenerates() {
        let mut app = boot("/", MemoryStore::new());
        app.generate().unwrap();
        let english = app.generator().generated_words().to_vec();

        assert_eq!(app.change_locale("zh"), Locale::Zh);
        let chinese = app.generator().generated_words().to_vec();
        assert_eq!(chinese.len(), english.len());

        let zh_words = app.generator().catalog().words("zh", "animals").unwrap();
        assert!(chinese.iter().all(|w| zh_words.contains(w)));
        assert_eq!(app.store().get(LOCALE_KEY).as_deref(), Some("\"zh\""));
    }

    #[test]
    fn test_change_locale_without_words_does_not_generate() {
        let mut app = boot("/", MemoryStore::new());
        app.change_locale("ko");
        assert!(app.generator().generated_words().is_empty());
    }

    #[test]
    fn test_change_locale_unsupported_downgrades() {
        let mut app = boot("/ja/", MemoryStore::new());
        assert_eq!(app.change_locale("fr"), Locale::En);
        assert_eq!(app.locale(), Locale::En);
    }

    #[test]
    fn test_generate_missing_theme_gives_error_notice() {
        let mut app = boot("/", MemoryStore::new());
        app.change_theme("dinosaurs");
        let notice = app.generate().unwrap_err();
        assert!(notice.is_error());
        assert_eq!(notice.message, "Something went wrong");
        assert!(app.generator().generated_words().is_empty());
    }

    #[test]
    fn test_copy_and_download_notices() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = boot("/", MemoryStore::new());
        app.change_word_count(5);
        app.generate().unwrap();

        let mut exporter = DirExporter::new(dir.path(), Vec::new());
        let notice = app.copy(&mut exporter);
        assert_eq!(notice, Notice::success("Words copied to clipboard!"));

        let date = NaiveDate::from_ymd_opt(2025, 1, 31).unwrap();
        let notice = app.download(&mut exporter, date);
        assert_eq!(notice, Notice::success("File downloaded successfully!"));

        let saved = fs::read_to_string(
            dir.path()
                .join("imposter-game-words-animals-2025-01-31.txt"),
        )
        .unwrap();
        assert_eq!(saved, app.generator().words_for_download());

        let copied = String::from_utf8(exporter.into_clipboard()).unwrap();
        assert_eq!(copied.trim_end(), app.generator().words_as_text());
    }

    #[test]
    fn test_export_failures() {
        let mut app = boot("/es/", MemoryStore::new());
        app.generate().unwrap();
        let error = app.t("generator.toast.error");

        assert_eq!(app.copy(&mut FailingExporter), Notice::error(error.clone()));
        let date = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        assert_eq!(app.download(&mut FailingExporter, date), Notice::error(error));
    }

    #[test]
    fn test_language_labels() {
        assert_eq!(language_label(Locale::En), "🇺🇸 English");
        assert_eq!(language_label(Locale::Ko), "🇰🇷 한국어");
    }
}
