//! Translate command - look up one key in the current language.

use crate::error::{CliError, CliResult};
use crate::session::CliApp;

/// Split `name=value` parameters.
pub fn parse_params(raw: &[String]) -> CliResult<Vec<(String, String)>> {
    raw.iter()
        .map(|param| {
            param
                .split_once('=')
                .filter(|(name, _)| !name.is_empty())
                .map(|(name, value)| (name.to_string(), value.to_string()))
                .ok_or_else(|| {
                    CliError::InvalidArgument(format!("expected name=value, got `{}`", param))
                })
        })
        .collect()
}

pub fn run(app: &CliApp, key: &str, params: &[String]) -> CliResult<()> {
    let params = parse_params(params)?;
    let borrowed: Vec<(&str, &str)> = params
        .iter()
        .map(|(name, value)| (name.as_str(), value.as_str()))
        .collect();

    println!("{}", app.t_with(key, &borrowed));
    Ok(())
}
