//! Integration tests for common generator workflows.
//!
//! Each test drives the application the way a front-end would: bootstrap,
//! a few user actions, then the outputs.

use chrono::NaiveDate;
use imposter::prelude::*;
use imposter::{DirExporter, JsonFileStore, LOCALE_KEY, STATE_KEY};
use imposter_i18n::LocaleSource;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::Write;

fn options(path: &str) -> BootstrapOptions {
    BootstrapOptions {
        path: path.to_string(),
        ..BootstrapOptions::default()
    }
}

// =============================================================================
// Locale Resolution
// =============================================================================

#[test]
fn test_locale_priority_chain() {
    let mut store = MemoryStore::new();
    store.set_json(LOCALE_KEY, &"ja").unwrap();

    let with_browser = |path: &str, store: MemoryStore| {
        let options = BootstrapOptions {
            browser_language: Some("ko-KR".to_string()),
            ..options(path)
        };
        App::bootstrap(options, store, StdRng::seed_from_u64(1))
    };

    // Path beats the stored preference
    let app = with_browser("/zh/", store.clone());
    assert_eq!(app.locale(), Locale::Zh);
    assert_eq!(app.resolution().source, LocaleSource::Path);

    // Stored preference beats the browser
    let app = with_browser("/", store);
    assert_eq!(app.locale(), Locale::Ja);
    assert_eq!(app.resolution().source, LocaleSource::Stored);

    // Browser beats the default
    let app = with_browser("/", MemoryStore::new());
    assert_eq!(app.locale(), Locale::Ko);
    assert_eq!(app.resolution().source, LocaleSource::Browser);
}

#[test]
fn test_unsupported_path_and_root_fall_back() {
    let app = App::bootstrap(options("/fr/"), MemoryStore::new(), StdRng::seed_from_u64(1));
    assert_eq!(app.locale(), Locale::En);

    let app = App::bootstrap(options("/"), MemoryStore::new(), StdRng::seed_from_u64(1));
    assert_eq!(app.locale(), Locale::En);
    assert_eq!(app.resolution().source, LocaleSource::Default);
}

#[test]
fn test_query_lang_only_at_root() {
    let at_root = BootstrapOptions {
        query_lang: Some("es".to_string()),
        ..options("/")
    };
    let app = App::bootstrap(at_root, MemoryStore::new(), StdRng::seed_from_u64(1));
    assert_eq!(app.locale(), Locale::Es);

    let deep = BootstrapOptions {
        query_lang: Some("es".to_string()),
        ..options("/about")
    };
    let app = App::bootstrap(deep, MemoryStore::new(), StdRng::seed_from_u64(1));
    assert_eq!(app.locale(), Locale::En);
}

// =============================================================================
// Sessions
// =============================================================================

#[test]
fn test_settings_survive_a_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state.json");

    {
        let store = JsonFileStore::open(&path);
        let mut app = App::bootstrap(options("/ko/"), store, StdRng::seed_from_u64(3));
        app.change_theme("technology");
        app.change_difficulty("hard").unwrap();
        app.change_word_count(14);
    }

    let store = JsonFileStore::open(&path);
    let app = App::bootstrap(options("/"), store, StdRng::seed_from_u64(3));

    // Locale comes back through the `locale` key, not appState
    assert_eq!(app.locale(), Locale::Ko);
    assert_eq!(app.generator().theme(), "technology");
    assert_eq!(app.generator().difficulty(), Difficulty::Hard);
    assert_eq!(app.generator().word_count(), 14);
}

#[test]
fn test_corrupt_state_file_starts_fresh() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state.json");
    std::fs::write(&path, "\u{0}\u{1}garbage").unwrap();

    let app = App::bootstrap(
        options("/"),
        JsonFileStore::open(&path),
        StdRng::seed_from_u64(3),
    );
    assert_eq!(app.generator().theme(), "animals");
    assert!(app.store().get(STATE_KEY).is_none());
    assert_eq!(app.store().get(LOCALE_KEY).as_deref(), Some("\"en\""));
}

#[test]
fn test_generate_copy_download() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = App::bootstrap(options("/es/"), MemoryStore::new(), StdRng::seed_from_u64(5));
    app.change_theme("food");
    app.change_word_count(7);

    let words = app.generate().unwrap().to_vec();
    assert_eq!(words.len(), 7);

    let mut exporter = DirExporter::new(dir.path(), Vec::new());
    let notice = app.copy(&mut exporter);
    assert_eq!(notice.kind, NoticeKind::Success);
    assert_eq!(notice.message, app.t("generator.toast.copied"));

    let date = NaiveDate::from_ymd_opt(2024, 12, 24).unwrap();
    let notice = app.download(&mut exporter, date);
    assert!(!notice.is_error());

    let file = dir.path().join("imposter-game-words-food-2024-12-24.txt");
    let lines: Vec<String> = std::fs::read_to_string(file)
        .unwrap()
        .lines()
        .map(String::from)
        .collect();
    assert_eq!(lines, words);
}

#[test]
fn test_seeded_sessions_are_reproducible() {
    let run = || {
        let mut app =
            App::bootstrap(options("/ja/"), MemoryStore::new(), StdRng::seed_from_u64(77));
        app.change_theme("movies");
        app.generate().unwrap().to_vec()
    };
    assert_eq!(run(), run());
}

// =============================================================================
// Translations
// =============================================================================

#[test]
fn test_custom_translation_file() {
    let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    file.write_all(
        br#"{"en": {"generator": {"toast": {"copied": "Copied, mate"}}}}"#,
    )
    .unwrap();

    let options = BootstrapOptions {
        translations: Some(file.path().to_path_buf()),
        ..options("/")
    };
    let app = App::bootstrap(options, MemoryStore::new(), StdRng::seed_from_u64(1));
    assert_eq!(app.t("generator.toast.copied"), "Copied, mate");
    assert_eq!(app.t("generator.results.title"), "generator.results.title");
}

#[test]
fn test_unreadable_translation_file_uses_embedded_table() {
    let options = BootstrapOptions {
        translations: Some("/no/such/translations.json".into()),
        ..options("/zh/")
    };
    let app = App::bootstrap(options, MemoryStore::new(), StdRng::seed_from_u64(1));
    assert_eq!(app.locale(), Locale::Zh);
    // Embedded table is English only
    assert_eq!(app.t("generator.results.title"), "Generated Words");
    assert_eq!(app.t("generator.faq.title"), "generator.faq.title");
}

#[test]
fn test_parameterised_strings() {
    let app = App::bootstrap(options("/zh/"), MemoryStore::new(), StdRng::seed_from_u64(1));
    assert_eq!(
        app.t_with("generator.results.count", &[("count", "10")]),
        "共 10 个词汇"
    );
}

#[cfg(feature = "config")]
#[test]
fn test_options_from_settings() {
    let settings = imposter::imposter_config::Settings {
        default_theme: "colors".to_string(),
        default_difficulty: Difficulty::Easy,
        default_word_count: 6,
        ..Default::default()
    };
    let app = App::bootstrap(
        BootstrapOptions::from_settings(&settings),
        MemoryStore::new(),
        StdRng::seed_from_u64(1),
    );
    assert_eq!(app.generator().theme(), "colors");
    assert_eq!(app.generator().difficulty(), Difficulty::Easy);
    assert_eq!(app.generator().word_count(), 6);
}
