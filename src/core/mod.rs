//! Core domain types for Warmle
//!
//! This module contains the symbol space, the distance metric and the scoring rule.
//! All types here are pure, testable, and have clear mathematical properties.

mod feedback;
mod symbol;
mod word;

pub use feedback::{Classification, Feedback, InvalidOffset, Offset, classify};
pub use symbol::{FILLER_COUNT, LETTER_COUNT, SYMBOL_COUNT, Symbol};
pub use word::{Word, WordError};

/// Fixed board width
pub const COLUMNS: usize = 5;
