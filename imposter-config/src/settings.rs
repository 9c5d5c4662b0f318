// Generator settings and their layering

use crate::{ConfigError, ConfigLoader, ConfigValidator, EnvLoader, Result, Validate};
use imposter_log::{debug, info};
use imposter_words::{
    DEFAULT_THEME, DEFAULT_WORD_COUNT, Difficulty, MAX_WORD_COUNT, MIN_WORD_COUNT,
    REFERENCE_LOCALE, WordCatalog,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Directory under the user data dir that holds the state file.
pub const APP_DIR_NAME: &str = "imposter-generator";

/// File name of the persisted state.
pub const STATE_FILE_NAME: &str = "state.json";

/// Settings of the generator front-end.
///
/// Layered as built-in defaults < settings file < `IMPOSTER_*` environment;
/// command-line flags are applied on top by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Translation resource; `None` uses the bundled one.
    pub translations: Option<PathBuf>,
    /// Persisted key-value store; `None` uses the user data dir.
    pub state_file: Option<PathBuf>,
    pub default_theme: String,
    pub default_difficulty: Difficulty,
    pub default_word_count: i64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            translations: None,
            state_file: None,
            default_theme: DEFAULT_THEME.to_string(),
            default_difficulty: Difficulty::default(),
            default_word_count: DEFAULT_WORD_COUNT as i64,
        }
    }
}

impl Settings {
    /// Defaults, then the file at `path` if given, then the environment,
    /// validated.
    pub fn load(path: Option<&Path>, env: &EnvLoader) -> Result<Self> {
        let mut settings = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        settings.apply_env(env)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Read a JSON or TOML settings file. Absent keys keep their defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let value = ConfigLoader::auto(path)?.load_file(path)?;
        let settings: Self = serde_json::from_value(value)
            .map_err(|e| ConfigError::ParseError(format!("{}: {}", path.display(), e)))?;
        info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Override fields from `IMPOSTER_*` variables.
    pub fn apply_env(&mut self, env: &EnvLoader) -> Result<()> {
        let vars = env.load();

        if let Some(path) = vars.get("translations") {
            self.translations = Some(PathBuf::from(path));
        }
        if let Some(path) = vars.get("state_file") {
            self.state_file = Some(PathBuf::from(path));
        }
        if let Some(theme) = vars.get("default_theme") {
            self.default_theme = theme.clone();
        }
        if let Some(difficulty) = vars.get("default_difficulty") {
            self.default_difficulty = difficulty
                .parse()
                .map_err(|e| ConfigError::ParseError(format!("IMPOSTER_DEFAULT_DIFFICULTY: {}", e)))?;
        }
        if let Some(count) = vars.get("default_word_count") {
            self.default_word_count = count.trim().parse().map_err(|_| {
                ConfigError::ParseError(format!(
                    "IMPOSTER_DEFAULT_WORD_COUNT: not a number: {}",
                    count
                ))
            })?;
        }

        debug!("Settings after environment: {:?}", self);
        Ok(())
    }

    /// Where the persisted state lives, if anywhere.
    ///
    /// `None` when no path is configured and the platform has no data dir.
    pub fn state_file_path(&self) -> Option<PathBuf> {
        self.state_file.clone().or_else(|| {
            dirs::data_dir().map(|dir| dir.join(APP_DIR_NAME).join(STATE_FILE_NAME))
        })
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        ConfigValidator::not_empty(&self.default_theme, "default_theme")?;

        let catalog = WordCatalog::builtin();
        ConfigValidator::one_of(
            &self.default_theme.as_str(),
            &catalog.themes(REFERENCE_LOCALE),
            "default_theme",
        )?;

        ConfigValidator::in_range(
            self.default_word_count,
            MIN_WORD_COUNT as i64,
            MAX_WORD_COUNT as i64,
            "default_word_count",
        )
    }
}

/// Load a `.env` file into the process environment.
///
/// With no path, a missing `.env` in the working directory is fine.
pub fn load_dotenv(path: Option<&Path>) -> Result<()> {
    match path {
        Some(path) => {
            dotenvy::from_path(path).map_err(|e| ConfigError::LoadError(e.to_string()))?;
        }
        None => {
            dotenvy::dotenv().ok();
        }
    }
    Ok(())
}
