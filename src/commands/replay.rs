//! Replay command
//!
//! Scores a fixed sequence of guesses against a known secret and records how the
//! column possibilities and the candidate list evolve.

use crate::core::{COLUMNS, Feedback, Word};
use crate::engine::{GameConfig, GameError, GameSession, GameState, PossibilitySet, Submission};
use crate::wordlists::Dictionary;

/// Configuration for replaying a game
pub struct ReplayConfig {
    pub secret: String,
    pub guesses: Vec<String>,
    pub game: GameConfig,
}

impl ReplayConfig {
    #[must_use]
    pub fn new(secret: String, guesses: Vec<String>) -> Self {
        Self {
            secret,
            guesses,
            game: GameConfig::default(),
        }
    }
}

/// Result of replaying a game
pub struct ReplayResult {
    pub secret: Word,
    pub steps: Vec<ReplayStep>,
    pub state: GameState,
    /// Guesses left over after the game ended
    pub ignored: usize,
}

/// A single scored row of the replay
pub struct ReplayStep {
    pub guess: Word,
    pub feedback: Feedback,
    pub candidates_before: usize,
    pub candidates_after: usize,
    pub possibilities: [PossibilitySet; COLUMNS],
}

/// Replay guesses against a known secret
///
/// No random first row is seeded: the first guess is row 0.
///
/// # Errors
///
/// Returns an error if the secret or a guess is not a valid word.
pub fn replay_game(config: &ReplayConfig, dictionary: &Dictionary) -> Result<ReplayResult, GameError> {
    let secret = Word::new(&config.secret)?;
    let mut session = GameSession::with_secret(dictionary.words(), config.game, secret.clone());

    let mut steps = Vec::with_capacity(config.guesses.len());
    let mut candidates_before = dictionary.len();

    for guess in &config.guesses {
        if session.is_over() {
            break;
        }

        let Submission::Scored(report) = session.guess(guess)? else {
            continue;
        };

        let candidates_after = if report.state == GameState::Won {
            1
        } else {
            report.candidates
        };

        steps.push(ReplayStep {
            guess: report.guess,
            feedback: report.feedback,
            candidates_before,
            candidates_after,
            possibilities: *session.possibilities(),
        });
        candidates_before = candidates_after;
    }

    Ok(ReplayResult {
        secret,
        ignored: config.guesses.len() - steps.len(),
        steps,
        state: session.state(),
    })
}
