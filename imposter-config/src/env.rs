// Environment variable loading

use std::collections::HashMap;
use std::env;

/// Prefix of every variable the generator reads.
pub const ENV_PREFIX: &str = "IMPOSTER";

/// Environment variable loader.
///
/// Reads the process environment, or a fixed set of variables handed in with
/// [`EnvLoader::with_vars`].
pub struct EnvLoader {
    prefix: Option<String>,
    vars: Option<HashMap<String, String>>,
}

impl EnvLoader {
    pub fn new(prefix: Option<String>) -> Self {
        Self { prefix, vars: None }
    }

    /// Loader over `vars` instead of the process environment.
    pub fn with_vars<I, K, V>(prefix: Option<String>, vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            prefix,
            vars: Some(
                vars.into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }

    fn all_vars(&self) -> Vec<(String, String)> {
        match &self.vars {
            Some(vars) => vars.iter().map(|(k, v)| (k.clone(), v.clone())).collect(),
            None => env::vars().collect(),
        }
    }

    /// Load every matching variable, keyed by the lowercase name with the
    /// prefix removed (`IMPOSTER_STATE_FILE` becomes `state_file`).
    pub fn load(&self) -> HashMap<String, String> {
        let mut config = HashMap::new();

        for (key, value) in self.all_vars() {
            match &self.prefix {
                Some(prefix) => {
                    if let Some(rest) = key
                        .strip_prefix(prefix.as_str())
                        .and_then(|rest| rest.strip_prefix('_'))
                    {
                        config.insert(rest.to_lowercase(), value);
                    }
                }
                None => {
                    config.insert(key.to_lowercase(), value);
                }
            }
        }

        config
    }
}

impl Default for EnvLoader {
    fn default() -> Self {
        Self::new(Some(ENV_PREFIX.to_string()))
    }
}
