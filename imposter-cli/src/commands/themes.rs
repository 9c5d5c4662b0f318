//! Themes command - list the word themes of the current language.

use colored::Colorize;

use crate::error::CliResult;
use crate::output;
use crate::session::CliApp;

pub fn run(app: &CliApp) -> CliResult<()> {
    let generator = app.generator();
    output::header(&app.t("generator.controls.theme"));

    for theme in generator.available_themes() {
        let label = app.t(&format!("generator.themes.{}", theme));
        let count = generator.theme_word_count(theme).to_string();
        let size = app.t_with("generator.results.count", &[("count", count.as_str())]);
        let marker = if theme == generator.theme() {
            "✓".green().bold().to_string()
        } else {
            " ".to_string()
        };
        println!("  {} {:<12} {} {}", marker, theme, label, format!("({})", size).dimmed());
    }
    Ok(())
}
