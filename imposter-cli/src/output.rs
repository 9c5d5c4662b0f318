//! Terminal output helpers.
//!
//! Data (words, translations, JSON) goes to stdout. Decoration and notices
//! are suppressed by `--quiet`; notices and errors go to stderr.

use colored::Colorize;
use imposter::{Notice, NoticeKind};
use std::sync::atomic::{AtomicBool, Ordering};

static QUIET: AtomicBool = AtomicBool::new(false);

pub fn set_quiet(quiet: bool) {
    QUIET.store(quiet, Ordering::Relaxed);
}

pub fn is_quiet() -> bool {
    QUIET.load(Ordering::Relaxed)
}

/// Section title, e.g. the translated "Generated Words".
pub fn header(title: &str) {
    if !is_quiet() {
        println!("\n  {}\n", title.bright_white().bold());
    }
}

/// Label/value row.
pub fn field(label: &str, value: &str) {
    if !is_quiet() {
        println!("  {} {}", format!("{}:", label).bright_white().bold(), value.cyan());
    }
}

pub fn info(msg: &str) {
    if !is_quiet() {
        println!("  {} {}", "→".cyan(), msg);
    }
}

/// A translated notice from the application, on stderr.
pub fn notice(notice: &Notice) {
    match notice.kind {
        NoticeKind::Success => {
            if !is_quiet() {
                eprintln!("  {} {}", "✓".green().bold(), notice.message.green());
            }
        }
        NoticeKind::Error => eprintln!("  {} {}", "✗".red().bold(), notice.message.red()),
    }
}
