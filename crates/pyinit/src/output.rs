//! User-facing terminal messages
//!
//! Progress and results go to stdout; warnings and errors go to stderr so
//! they stay visible when stdout is piped.

use std::time::Duration;

use console::{style, StyledObject};
use indicatif::{ProgressBar, ProgressStyle};

const SPINNER_FRAMES: &str = "⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏";

fn mark(symbol: &'static str) -> StyledObject<&'static str> {
    style(symbol).bold()
}

/// A step finished
pub fn success(msg: &str) {
    println!("{} {}", mark("✓").green(), msg);
}

/// The run failed; printed once by `main`
pub fn error(msg: &str) {
    eprintln!("{} {}", mark("✗").red(), msg);
}

/// Something was skipped or only partly done
pub fn warning(msg: &str) {
    eprintln!("{} {}", mark("⚠").yellow(), msg);
}

pub fn info(msg: &str) {
    println!("{} {}", mark("ℹ").blue(), msg);
}

/// Section title, preceded by a blank line
pub fn header(title: &str) {
    println!("\n{}", style(title).bold().underlined());
}

/// Indented `label: value` line for summaries
pub fn kv(label: &str, value: &str) {
    println!("  {}: {}", style(label).dim(), value);
}

/// Shell commands the user can copy and run later
pub fn commands(lines: &[String]) {
    for line in lines {
        println!("    {}", style(line).cyan());
    }
}

/// Spinner shown while project files are written.
///
/// The caller must clear it before prompting again.
pub fn spinner(msg: &str) -> ProgressBar {
    let style = ProgressStyle::with_template("{spinner:.blue} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
        .tick_chars(SPINNER_FRAMES);

    let bar = ProgressBar::new_spinner().with_style(style);
    bar.set_message(msg.to_string());
    bar.enable_steady_tick(Duration::from_millis(100));
    bar
}
