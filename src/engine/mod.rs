//! Warmle feedback engine
//!
//! Constraint tracking, candidate filtering and the game session state machine.

mod constraints;
mod error;
mod filter;
pub mod session;
mod variant;

pub use constraints::{ConstraintError, PossibilitySet, recompute};
pub use error::GameError;
pub use filter::{filter_candidates, is_consistent};
pub use session::{GameSession, GameState, KeyHint, Row, RowReport, Submission};
pub use variant::{DEFAULT_LINES, GameConfig, Variant};
