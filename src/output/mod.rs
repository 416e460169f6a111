//! Terminal output formatting
//!
//! Board rendering and pretty-printing of command results.

pub mod display;
pub mod formatters;

pub use display::{
    print_board, print_candidates, print_game_over, print_keyboard, print_possibilities,
    print_replay_result, print_simulation_result,
};
