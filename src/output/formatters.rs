//! Formatting utilities for terminal output

use crate::core::Code;
use crate::game::Round;

/// Space-separated symbols, or underscores for a missing code
///
/// Shows a hidden solution as `_ _ _ _` and an unplayed round the same way.
#[must_use]
pub fn spaced_code(code: Option<&Code>, positions: usize) -> String {
    code.map_or_else(
        || vec!["_"; positions].join(" "),
        |code| {
            code.symbols()
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(" ")
        },
    )
}

/// One board row: round number, guess, pegs
#[must_use]
pub fn round_line(round: &Round, positions: usize) -> String {
    format!(
        "{:>2}\t{} | {}",
        round.number(),
        spaced_code(round.guess(), positions),
        round.feedback().pegs()
    )
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
