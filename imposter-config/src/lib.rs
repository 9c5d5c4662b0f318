// Settings management for the Imposter word generator

pub mod env;
pub mod error;
pub mod loader;
pub mod settings;
pub mod validation;

pub use env::{ENV_PREFIX, EnvLoader};
pub use error::{ConfigError, Result};
pub use loader::{ConfigLoader, FileFormat};
pub use settings::{APP_DIR_NAME, STATE_FILE_NAME, Settings, load_dotenv};
pub use validation::{ConfigValidator, Validate};
