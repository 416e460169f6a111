//! Warmle
//!
//! A Wordle variant scored by alphabet distance: every guessed symbol is Correct,
//! Close (within the variant's offset of the secret's symbol in the same column)
//! or Far. The engine turns that feedback into per-column possibility sets and
//! filters the dictionary down to the words still consistent with it.
//!
//! # Quick Start
//!
//! ```rust
//! use warmle::core::{Classification, Feedback, Offset, Word};
//!
//! let secret = Word::new("crane").unwrap();
//! let guess = Word::new("crone").unwrap();
//!
//! let feedback = Feedback::calculate(secret.symbols(), guess.symbols(), Offset::new(3));
//! assert_eq!(feedback.get(2), Classification::Far);
//! assert_eq!(feedback.count(Classification::Correct), 4);
//! ```

// Core domain types
pub mod core;

// Scoring, constraint tracking and game sessions
pub mod engine;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
