//! Session setup: settings, storage and the application instance.

use crate::error::CliResult;
use imposter::{App, BootstrapOptions, JsonFileStore, KeyValueStore, MemoryStore};
use imposter_config::{EnvLoader, Settings, load_dotenv};
use imposter_log::{debug, info};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;

/// Store chosen at runtime: the state file, or memory when there is no
/// place to keep one.
pub enum Store {
    File(JsonFileStore),
    Memory(MemoryStore),
}

impl KeyValueStore for Store {
    fn get(&self, key: &str) -> Option<String> {
        match self {
            Store::File(store) => store.get(key),
            Store::Memory(store) => store.get(key),
        }
    }

    fn set(&mut self, key: &str, value: String) -> imposter::Result<()> {
        match self {
            Store::File(store) => store.set(key, value),
            Store::Memory(store) => store.set(key, value),
        }
    }

    fn remove(&mut self, key: &str) -> imposter::Result<()> {
        match self {
            Store::File(store) => store.remove(key),
            Store::Memory(store) => store.remove(key),
        }
    }
}

pub type CliApp = App<Store, StdRng>;

/// Global flags that shape the session.
#[derive(Debug, Clone, Default)]
pub struct SessionOptions {
    pub config: Option<PathBuf>,
    pub state_file: Option<PathBuf>,
    pub translations: Option<PathBuf>,
    pub path: String,
    pub lang_query: Option<String>,
    pub browser_lang: Option<String>,
    pub seed: Option<u64>,
}

/// Layer settings (defaults < file < environment < flags) and bootstrap the
/// application.
pub fn open(options: &SessionOptions) -> CliResult<CliApp> {
    load_dotenv(None)?;
    let mut settings = Settings::load(options.config.as_deref(), &EnvLoader::default())?;

    if let Some(path) = &options.state_file {
        settings.state_file = Some(path.clone());
    }
    if let Some(path) = &options.translations {
        settings.translations = Some(path.clone());
    }

    let store = match settings.state_file_path() {
        Some(path) => {
            debug!("Using state file {}", path.display());
            Store::File(JsonFileStore::open(path))
        }
        None => {
            info!("No data directory, settings will not be saved");
            Store::Memory(MemoryStore::new())
        }
    };

    let rng = match options.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let bootstrap = BootstrapOptions {
        path: options.path.clone(),
        query_lang: options.lang_query.clone(),
        browser_language: options.browser_lang.clone(),
        ..BootstrapOptions::from_settings(&settings)
    };

    Ok(App::bootstrap(bootstrap, store, rng))
}
