//! Generate command - draw a word list, optionally copy or save it.

use chrono::Local;
use imposter::{DirExporter, Notice};
use std::io;
use std::path::PathBuf;

use crate::error::{CliError, CliResult};
use crate::output;
use crate::session::CliApp;

/// Settings changes and exports requested on the command line.
#[derive(Debug, Default)]
pub struct GenerateOptions {
    pub theme: Option<String>,
    pub difficulty: Option<String>,
    pub count: Option<i64>,
    pub locale: Option<String>,
    pub copy: bool,
    pub download: Option<PathBuf>,
}

/// Apply the requested settings, generate and print the words.
pub fn run(app: &mut CliApp, options: GenerateOptions) -> CliResult<()> {
    if let Some(code) = &options.locale {
        app.change_locale(code);
    }
    if let Some(theme) = &options.theme {
        app.change_theme(theme);
    }
    if let Some(difficulty) = &options.difficulty {
        app.change_difficulty(difficulty)?;
    }
    if let Some(count) = options.count {
        app.change_word_count(count);
    }

    let words = match app.generate() {
        Ok(words) => words.to_vec(),
        Err(notice) => {
            output::notice(&notice);
            return Err(CliError::Generate(notice.message));
        }
    };

    output::header(&app.t("generator.results.title"));
    for (i, word) in words.iter().enumerate() {
        println!("  {:>2}. {}", i + 1, word);
    }
    let count = words.len().to_string();
    output::info(&app.t_with("generator.results.count", &[("count", count.as_str())]));

    if !options.copy && options.download.is_none() {
        return Ok(());
    }

    let dir = options.download.clone().unwrap_or_else(|| PathBuf::from("."));
    let mut exporter = DirExporter::new(dir, io::stdout());

    if options.copy {
        report(app.copy(&mut exporter))?;
    }
    if options.download.is_some() {
        report(app.download(&mut exporter, Local::now().date_naive()))?;
    }
    Ok(())
}

fn report(notice: Notice) -> CliResult<()> {
    output::notice(&notice);
    if notice.is_error() {
        Err(CliError::Export(notice.message))
    } else {
        Ok(())
    }
}
