//! Game error taxonomy

use super::ConstraintError;
use crate::core::{InvalidOffset, WordError};

/// Errors raised by a game session
///
/// An incomplete row is not an error: submitting it is a no-op reported as
/// [`Submission::Incomplete`](super::Submission::Incomplete).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error(transparent)]
    InvalidOffset(#[from] InvalidOffset),
    #[error("a board needs at least one row, got {0}")]
    InvalidLines(usize),
    #[error("cannot start a game with an empty dictionary")]
    EmptyDictionary,
    #[error("the game is over, start a new one")]
    GameOver,
    #[error("column {0} is outside the board")]
    ColumnOutOfRange(usize),
    #[error("there is no candidate number {0}")]
    NoSuchCandidate(usize),
    #[error("{0:?} cannot be entered on the board")]
    UnplayableSymbol(char),
    #[error(transparent)]
    Constraint(#[from] ConstraintError),
    #[error(transparent)]
    Word(#[from] WordError),
}
