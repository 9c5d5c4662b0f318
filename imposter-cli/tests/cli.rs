//! End-to-end tests for the imposter binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Command isolated from the caller's environment and saved state.
fn imposter(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("imposter").unwrap();
    cmd.current_dir(dir.path())
        .env_remove("LANG")
        .env_remove("IMPOSTER_CONFIG")
        .env_remove("IMPOSTER_STATE_FILE")
        .env_remove("IMPOSTER_TRANSLATIONS")
        .env_remove("IMPOSTER_DEFAULT_THEME")
        .env_remove("IMPOSTER_DEFAULT_DIFFICULTY")
        .env_remove("IMPOSTER_DEFAULT_WORD_COUNT")
        .arg("--no-color")
        .arg("--state-file")
        .arg(dir.path().join("state.json"));
    cmd
}

fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.output().unwrap();
    assert!(output.status.success(), "{:?}", output);
    String::from_utf8(output.stdout).unwrap()
}

#[test]
fn test_generate_prints_requested_count() {
    let dir = TempDir::new().unwrap();
    imposter(&dir)
        .args(["generate", "--count", "6", "--seed", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Generated Words"))
        .stdout(predicate::str::contains(" 6. "))
        .stdout(predicate::str::contains(" 7. ").not())
        .stdout(predicate::str::contains("6 words"));
}

#[test]
fn test_generate_clamps_count() {
    let dir = TempDir::new().unwrap();
    imposter(&dir)
        .args(["generate", "--count", "3", "--seed", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("5 words"));

    imposter(&dir)
        .args(["generate", "--count", "99", "--seed", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("20 words"));
}

#[test]
fn test_seeded_runs_match() {
    let dir = TempDir::new().unwrap();
    let first = stdout_of(imposter(&dir).args(["generate", "--seed", "42", "--theme", "food"]));
    let second = stdout_of(imposter(&dir).args(["generate", "--seed", "42"]));
    assert_eq!(first, second);
}

#[test]
fn test_path_selects_language() {
    let dir = TempDir::new().unwrap();
    imposter(&dir)
        .args(["--path", "/es/", "generate", "--seed", "3", "--count", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Palabras generadas"))
        .stdout(predicate::str::contains("5 palabras"));
}

#[test]
fn test_browser_language_and_saved_locale() {
    let dir = TempDir::new().unwrap();
    imposter(&dir)
        .env("LANG", "ko_KR.UTF-8")
        .args(["locale"])
        .assert()
        .success()
        .stdout(predicate::str::contains("현재 언어: 🇰🇷 한국어"))
        .stdout(predicate::str::contains("browser"));

    // The resolved locale was saved and now wins over the browser
    imposter(&dir)
        .env("LANG", "ja_JP.UTF-8")
        .args(["locale"])
        .assert()
        .success()
        .stdout(predicate::str::contains("현재 언어"))
        .stdout(predicate::str::contains("stored"));
}

#[test]
fn test_locale_set_unsupported_falls_back() {
    let dir = TempDir::new().unwrap();
    imposter(&dir)
        .args(["--path", "/zh/", "locale", "--set", "fr"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Current language: 🇺🇸 English"));
}

#[test]
fn test_settings_are_remembered() {
    let dir = TempDir::new().unwrap();
    imposter(&dir)
        .args(["generate", "--theme", "colors", "--difficulty", "hard", "--count", "8"])
        .assert()
        .success();

    let state = fs::read_to_string(dir.path().join("state.json")).unwrap();
    assert!(state.contains("appState"));

    imposter(&dir)
        .args(["stats", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""theme": "colors""#))
        .stdout(predicate::str::contains(r#""difficulty": "hard""#))
        .stdout(predicate::str::contains(r#""wordCount": 8"#));
}

#[test]
fn test_unknown_theme_fails_with_notice() {
    let dir = TempDir::new().unwrap();
    imposter(&dir)
        .args(["generate", "--theme", "dinosaurs"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Something went wrong"));
}

#[test]
fn test_unknown_difficulty_is_rejected() {
    let dir = TempDir::new().unwrap();
    imposter(&dir)
        .args(["generate", "--difficulty", "brutal"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid difficulty: brutal"));
}

#[test]
fn test_copy_prints_comma_separated_words() {
    let dir = TempDir::new().unwrap();
    let out = stdout_of(imposter(&dir).args([
        "--quiet", "generate", "--count", "5", "--seed", "9", "--copy",
    ]));

    let lines: Vec<&str> = out.lines().collect();
    let listed: Vec<&str> = lines
        .iter()
        .filter_map(|line| line.trim().split_once(". ").map(|(_, word)| word))
        .collect();
    assert_eq!(listed.len(), 5);
    assert_eq!(lines.last().copied(), Some(listed.join(", ").as_str()));
}

#[test]
fn test_download_writes_file() {
    let dir = TempDir::new().unwrap();
    let downloads = dir.path().join("downloads");
    fs::create_dir(&downloads).unwrap();

    imposter(&dir)
        .args(["generate", "--theme", "music", "--count", "5", "--download"])
        .arg(&downloads)
        .assert()
        .success()
        .stderr(predicate::str::contains("File downloaded successfully!"));

    let files: Vec<_> = fs::read_dir(&downloads).unwrap().collect();
    assert_eq!(files.len(), 1);
    let entry = files.into_iter().next().unwrap().unwrap();
    let name = entry.file_name().into_string().unwrap();
    assert!(name.starts_with("imposter-game-words-music-"));
    assert!(name.ends_with(".txt"));
    assert_eq!(fs::read_to_string(entry.path()).unwrap().lines().count(), 5);
}

#[test]
fn test_download_into_missing_dir_fails() {
    let dir = TempDir::new().unwrap();
    imposter(&dir)
        .args(["generate", "--download"])
        .arg(dir.path().join("nope"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Something went wrong"));
}

#[test]
fn test_translate_with_params_and_missing_key() {
    let dir = TempDir::new().unwrap();
    imposter(&dir)
        .args(["--path", "/zh/", "translate", "generator.results.count", "-p", "count=12"])
        .assert()
        .success()
        .stdout("共 12 个词汇\n");

    imposter(&dir)
        .args(["translate", "nonexistent.key"])
        .assert()
        .success()
        .stdout("nonexistent.key\n");
}

#[test]
fn test_themes_lists_translated_names() {
    let dir = TempDir::new().unwrap();
    imposter(&dir)
        .args(["--path", "/ja/", "themes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("animals"))
        .stdout(predicate::str::contains("20 個の単語"));
}

#[test]
fn test_config_file_defaults() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("imposter.toml");
    fs::write(&config, "default_theme = \"sports\"\ndefault_word_count = 7\n").unwrap();

    imposter(&dir)
        .arg("--config")
        .arg(&config)
        .args(["stats", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""theme": "sports""#))
        .stdout(predicate::str::contains(r#""wordCount": 7"#));
}

#[test]
fn test_invalid_config_is_reported() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("imposter.json");
    fs::write(&config, r#"{"default_word_count": 2}"#).unwrap();

    imposter(&dir)
        .arg("--config")
        .arg(&config)
        .arg("stats")
        .assert()
        .failure()
        .stderr(predicate::str::contains("default_word_count"));
}

#[test]
fn test_completions() {
    let dir = TempDir::new().unwrap();
    imposter(&dir)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("imposter"));
}
