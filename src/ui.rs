// UI layer: terminal feedback around API calls. Everything here writes to
// stderr so that stdout only carries the encoded result.

use std::io::IsTerminal;
use std::time::Duration;

use anyhow::Result;
use crossterm::style::Stylize;
use dialoguer::Confirm;
use indicatif::{ProgressBar, ProgressStyle};

/// Spinner shown while a request is in flight. indicatif hides it when
/// stderr is not a terminal.
pub fn spinner(message: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}

/// Ask a yes/no question, defaulting to "no".
pub fn confirm(prompt: &str) -> Result<bool> {
    Ok(Confirm::new().with_prompt(prompt).default(false).interact()?)
}

/// Print `err` with its full cause chain.
pub fn print_error(err: &anyhow::Error) {
    if std::io::stderr().is_terminal() {
        eprintln!("{} {:#}", "Error:".red().bold(), err);
    } else {
        eprintln!("Error: {:#}", err);
    }
}
