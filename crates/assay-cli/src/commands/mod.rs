//! CLI command implementations.

pub mod columns;
pub mod detect;
pub mod profile;

use colored::{ColoredString, Colorize};

/// Format a 0-1 score as a colored percentage.
pub(crate) fn score_label(score: f64) -> ColoredString {
    let text = format!("{:.0}%", score * 100.0);
    if score >= 0.8 {
        text.green()
    } else if score >= 0.6 {
        text.yellow()
    } else {
        text.red()
    }
}
