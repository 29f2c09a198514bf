//! Operator-facing progress output on stderr.

use std::io::Write;

use console::Style;
use indicatif::{ProgressBar, ProgressStyle};

fn status_line(style: Style, label: &str, message: &str) {
    let _ = writeln!(std::io::stderr(), "{:>12} {message}", style.apply_to(label));
}

/// Cargo-style action line, e.g. `   Installed eu.algites:common:1.0.0`.
/// The label is right-aligned to 12 columns in bold green.
pub fn status(label: &str, message: &str) {
    status_line(Style::new().green().bold(), label, message);
}

/// Informational line (bold cyan), used for the local-fallback notice.
pub fn status_info(label: &str, message: &str) {
    status_line(Style::new().cyan().bold(), label, message);
}

/// Warning line (bold yellow).
pub fn status_warn(label: &str, message: &str) {
    status_line(Style::new().yellow().bold(), label, message);
}

/// Spinner shown while a module uploads. Clear it with
/// [`ProgressBar::finish_and_clear`].
pub fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
        pb.set_style(style);
    }
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(80));
    pb
}
