//! Formatting utilities for terminal output

use crate::core::{Feedback, Symbol};
use crate::engine::PossibilitySet;

/// Printable marker for the blank symbol on the board
pub const BLANK_MARKER: char = '␣';

/// Format a feedback row as emoji string
#[must_use]
pub fn feedback_to_emoji(feedback: &Feedback) -> String {
    feedback.to_emoji()
}

/// Character shown for a board symbol, making the blank visible
#[must_use]
pub const fn symbol_char(symbol: Symbol) -> char {
    if symbol.is_blank() {
        BLANK_MARKER
    } else {
        symbol.to_char()
    }
}

/// Word text with visible blanks, e.g. "CAT␣␣"
#[must_use]
pub fn visible_text(symbols: &[Symbol]) -> String {
    symbols.iter().map(|&s| symbol_char(s)).collect()
}

/// Compact a possibility set into runs, e.g. "A-C E X-Z ␣"
///
/// Fillers are never shown since a player cannot type them.
#[must_use]
pub fn format_possibilities(set: PossibilitySet) -> String {
    let mut runs: Vec<(Symbol, Symbol)> = Vec::new();
    for symbol in set.iter().filter(|s| s.is_guessable()) {
        match runs.last_mut() {
            Some((_, end)) if end.index() + 1 == symbol.index() => *end = symbol,
            _ => runs.push((symbol, symbol)),
        }
    }

    if runs.is_empty() {
        return "∅".to_string();
    }

    runs.iter()
        .map(|&(start, end)| match end.index() - start.index() {
            0 => symbol_char(start).to_string(),
            1 => format!("{} {}", symbol_char(start), symbol_char(end)),
            _ => format!("{}-{}", symbol_char(start), symbol_char(end)),
        })
        .collect::<Vec<_>>()
        .join(" ")
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
