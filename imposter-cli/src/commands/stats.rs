//! Stats command - show the generator settings.

use crate::error::CliResult;
use crate::output;
use crate::session::CliApp;

pub fn run(app: &CliApp, json: bool) -> CliResult<()> {
    let stats = app.generator().stats();

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    let difficulty = app.t(&format!("generator.difficulty.{}", stats.difficulty));
    let theme = app.t(&format!("generator.themes.{}", stats.theme));

    output::header(&app.t("generator.stats.title"));
    output::field(&app.t("generator.stats.locale"), &stats.locale);
    output::field(&app.t("generator.stats.theme"), &theme);
    output::field(&app.t("generator.stats.difficulty"), &difficulty);
    output::field(&app.t("generator.stats.wordCount"), &stats.word_count.to_string());
    output::field(&app.t("generator.stats.generated"), &stats.generated_count.to_string());
    output::field(&app.t("generator.stats.themes"), &stats.available_themes.to_string());
    output::field(
        &app.t("generator.stats.themeSize"),
        &stats.total_words_in_theme.to_string(),
    );
    Ok(())
}
