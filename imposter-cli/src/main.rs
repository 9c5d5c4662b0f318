//! Imposter CLI - random word lists for the Imposter party game.
//!
//! # Commands
//!
//! - `imposter generate` - Draw a word list (optionally copy or save it)
//! - `imposter themes` - List word themes of the current language
//! - `imposter translate <key>` - Look up an interface string
//! - `imposter locale` - Show or switch the interface language
//! - `imposter stats` - Show generator settings
//! - `imposter completions <shell>` - Generate shell completions

use clap::{Args, CommandFactory, Parser, Subcommand};
use clap_complete::{Shell, generate};
use colored::Colorize;
use imposter_log::Level;
use std::io;
use std::path::PathBuf;

mod commands;
mod error;
mod output;
mod session;

use error::CliResult;
use session::SessionOptions;

/// Imposter word generator
#[derive(Parser)]
#[command(name = "imposter")]
#[command(version)]
#[command(about = "🎭 Random word lists for the Imposter party game")]
#[command(long_about = None)]
#[command(propagate_version = true)]
#[command(after_help = format!(
    "{}\n  {} imposter generate --theme food --count 8\n  {} imposter --path /ja/ generate --difficulty hard\n  {} imposter generate --copy --quiet\n  {} imposter locale --set es",
    "Examples:".bright_cyan().bold(),
    "$".dimmed(),
    "$".dimmed(),
    "$".dimmed(),
    "$".dimmed(),
))]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Settings file (JSON or TOML)
    #[arg(long, global = true, env = "IMPOSTER_CONFIG")]
    config: Option<PathBuf>,

    /// Where saved settings live
    #[arg(long, global = true)]
    state_file: Option<PathBuf>,

    /// Translation resource to use instead of the bundled one
    #[arg(long, global = true)]
    translations: Option<PathBuf>,

    /// Page path the session starts at, e.g. /zh/
    #[arg(long, global = true, default_value = "/")]
    path: String,

    /// Legacy ?lang= value, honoured only on the root path
    #[arg(long, global = true)]
    lang_query: Option<String>,

    /// Browser language tag
    #[arg(long, global = true, env = "LANG")]
    browser_lang: Option<String>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress all output except results and errors
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a word list
    #[command(alias = "g")]
    Generate(GenerateArgs),

    /// List the word themes
    #[command(alias = "t")]
    Themes,

    /// Translate an interface key
    Translate(TranslateArgs),

    /// Show or switch the interface language
    #[command(alias = "l")]
    Locale(LocaleArgs),

    /// Show generator settings
    Stats(StatsArgs),

    /// Generate shell completions
    Completions {
        /// The shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Args)]
struct GenerateArgs {
    /// Word theme, e.g. animals, food, colors
    #[arg(long)]
    theme: Option<String>,

    /// easy, medium or hard
    #[arg(long)]
    difficulty: Option<String>,

    /// Number of words (5-20)
    #[arg(long, allow_negative_numbers = true)]
    count: Option<i64>,

    /// Switch the interface language first
    #[arg(long)]
    locale: Option<String>,

    /// Seed for a reproducible draw
    #[arg(long)]
    seed: Option<u64>,

    /// Print the comma-separated list as the clipboard text
    #[arg(long)]
    copy: bool,

    /// Save the list into this directory
    #[arg(long, value_name = "DIR")]
    download: Option<PathBuf>,
}

#[derive(Args)]
struct TranslateArgs {
    /// Dotted key, e.g. generator.results.title
    key: String,

    /// Placeholder value, as name=value
    #[arg(short, long = "param")]
    params: Vec<String>,
}

#[derive(Args)]
struct LocaleArgs {
    /// Switch to this language and remember it
    #[arg(long, value_name = "CODE")]
    set: Option<String>,
}

#[derive(Args)]
struct StatsArgs {
    /// Print as JSON
    #[arg(long)]
    json: bool,
}

// =============================================================================
// MAIN
// =============================================================================

fn main() {
    let cli = Cli::parse();

    // Handle color preferences
    if cli.no_color {
        colored::control::set_override(false);
    }

    if cli.verbose {
        imposter_log::set_debug(true);
    } else if cli.quiet {
        imposter_log::set_level(Level::Error);
    }
    output::set_quiet(cli.quiet);

    let mut options = SessionOptions {
        config: cli.config,
        state_file: cli.state_file,
        translations: cli.translations,
        path: cli.path,
        lang_query: cli.lang_query,
        browser_lang: cli.browser_lang,
        seed: None,
    };

    let result: CliResult<()> = match cli.command {
        Commands::Generate(args) => {
            options.seed = args.seed;
            session::open(&options).and_then(|mut app| {
                commands::generate::run(
                    &mut app,
                    commands::generate::GenerateOptions {
                        theme: args.theme,
                        difficulty: args.difficulty,
                        count: args.count,
                        locale: args.locale,
                        copy: args.copy,
                        download: args.download,
                    },
                )
            })
        }

        Commands::Themes => session::open(&options).and_then(|app| commands::themes::run(&app)),

        Commands::Translate(args) => session::open(&options)
            .and_then(|app| commands::translate::run(&app, &args.key, &args.params)),

        Commands::Locale(args) => session::open(&options)
            .and_then(|mut app| commands::locale::run(&mut app, args.set.as_deref())),

        Commands::Stats(args) => {
            session::open(&options).and_then(|app| commands::stats::run(&app, args.json))
        }

        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "imposter", &mut io::stdout());
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("\n  {} {}\n", "Error:".red().bold(), e);
        std::process::exit(1);
    };
}
