//! Locale command - show, or explicitly switch, the interface language.

use colored::Colorize;
use imposter::language_label;
use imposter_i18n::Locale;

use crate::error::CliResult;
use crate::output;
use crate::session::CliApp;

pub fn run(app: &mut CliApp, set: Option<&str>) -> CliResult<()> {
    let source = match set {
        Some(code) => {
            app.change_locale(code);
            "explicit"
        }
        None => app.resolution().source.as_str(),
    };

    let current = app.locale();
    output::header(&app.t("generator.language.title"));

    for locale in Locale::ALL {
        if locale == current {
            println!(
                "  {} {}  {}",
                "✓".green().bold(),
                locale.code().bright_white().bold(),
                language_label(locale)
            );
        } else {
            println!("    {}  {}", locale.code(), language_label(locale).dimmed());
        }
    }

    println!();
    output::info(&app.t_with(
        "generator.language.current",
        &[("language", language_label(current))],
    ));
    output::field("source", source);
    Ok(())
}
