//! Simulation command
//!
//! Auto-plays many games, picking a random surviving candidate on every row, and
//! collects win statistics.

use crate::engine::{GameConfig, GameError, GameSession, GameState};
use crate::wordlists::Dictionary;
use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};
use tracing::debug;

/// Settings for a simulation run
#[derive(Debug, Clone, Copy)]
pub struct SimulationConfig {
    pub games: usize,
    pub seed: u64,
    pub game: GameConfig,
    pub show_progress: bool,
}

/// Outcome of a single simulated game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOutcome {
    pub won: bool,
    /// Scored rows, including the seeded first row
    pub rows: usize,
}

/// Result of a simulation run
pub struct SimulationResult {
    pub total_games: usize,
    pub won: usize,
    pub lost: usize,
    pub average_rows: f64,
    pub min_rows: usize,
    pub max_rows: usize,
    /// Winning games by number of scored rows
    pub distribution: FxHashMap<usize, usize>,
    pub duration: Duration,
    pub games_per_second: f64,
}

impl SimulationResult {
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.won as f64 / self.total_games as f64
        }
    }
}

/// Play one game to the end, choosing a random candidate on each row
///
/// # Errors
///
/// Returns `GameError::EmptyDictionary` if the dictionary is empty.
pub fn play_game<R: Rng + ?Sized>(
    dictionary: &Dictionary,
    config: GameConfig,
    rng: &mut R,
) -> Result<GameOutcome, GameError> {
    let mut session = GameSession::new(dictionary.words(), config, rng)?;

    while !session.is_over() {
        let count = session.candidates().len();
        if count == 0 {
            // Secret outside the dictionary: nothing left to pick
            break;
        }
        session.pick_candidate(rng.random_range(0..count))?;
        session.submit_row()?;
    }

    let rows = session
        .rows()
        .iter()
        .filter(|row| row.feedback().is_scored())
        .count();

    Ok(GameOutcome {
        won: session.state() == GameState::Won,
        rows,
    })
}

/// Run many independent games in parallel
///
/// Game `i` uses the seed `config.seed + i`, so a run is reproducible.
///
/// # Errors
///
/// Returns `GameError::EmptyDictionary` if the dictionary is empty.
pub fn run_simulation(
    dictionary: &Dictionary,
    config: &SimulationConfig,
) -> Result<SimulationResult, GameError> {
    let start = Instant::now();

    let pb = if config.show_progress {
        ProgressBar::new(config.games as u64)
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }

    let outcomes = (0..config.games)
        .into_par_iter()
        .map(|i| {
            let mut rng = StdRng::seed_from_u64(config.seed.wrapping_add(i as u64));
            let outcome = play_game(dictionary, config.game, &mut rng);
            pb.inc(1);
            outcome
        })
        .collect::<Result<Vec<_>, _>>()?;

    pb.finish_with_message("Complete!");
    let duration = start.elapsed();

    let mut distribution: FxHashMap<usize, usize> = FxHashMap::default();
    for outcome in outcomes.iter().filter(|o| o.won) {
        *distribution.entry(outcome.rows).or_insert(0) += 1;
    }

    let total_games = outcomes.len();
    let won = distribution.values().sum();
    let total_rows: usize = outcomes.iter().map(|o| o.rows).sum();
    debug!(total_games, won, "simulation finished");

    Ok(SimulationResult {
        total_games,
        won,
        lost: total_games - won,
        average_rows: if total_games == 0 {
            0.0
        } else {
            total_rows as f64 / total_games as f64
        },
        min_rows: outcomes.iter().map(|o| o.rows).min().unwrap_or(0),
        max_rows: outcomes.iter().map(|o| o.rows).max().unwrap_or(0),
        distribution,
        duration,
        games_per_second: total_games as f64 / duration.as_secs_f64().max(f64::EPSILON),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dictionary() -> Dictionary {
        Dictionary::from_lists([&["apple", "crane", "crone", "slate", "zebra", "cat", "ox"][..]])
    }

    fn config(games: usize) -> SimulationConfig {
        SimulationConfig {
            games,
            seed: 42,
            game: GameConfig::default(),
            show_progress: false,
        }
    }

    #[test]
    fn single_game_ends() {
        let mut rng = StdRng::seed_from_u64(5);
        let outcome = play_game(&dictionary(), GameConfig::default(), &mut rng).unwrap();
        assert!(outcome.rows >= 1);
        assert!(outcome.rows <= GameConfig::default().lines());
    }

    #[test]
    fn tiny_dictionary_is_always_won() {
        // Picking among surviving candidates always includes the secret; with 7 words
        // and 8 rows the game cannot be lost.
        let result = run_simulation(&dictionary(), &config(20)).unwrap();
        assert_eq!(result.total_games, 20);
        assert_eq!(result.won, 20);
        assert_eq!(result.lost, 0);
        assert!((result.win_rate() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn distribution_sums_to_wins() {
        let result = run_simulation(&Dictionary::embedded(), &config(30)).unwrap();
        let distribution_sum: usize = result.distribution.values().sum();
        assert_eq!(distribution_sum, result.won);
        assert_eq!(result.won + result.lost, result.total_games);
        assert!(result.average_rows >= result.min_rows as f64);
        assert!(result.average_rows <= result.max_rows as f64);
    }

    #[test]
    fn runs_are_reproducible() {
        let dictionary = Dictionary::embedded();
        let first = run_simulation(&dictionary, &config(10)).unwrap();
        let second = run_simulation(&dictionary, &config(10)).unwrap();
        assert_eq!(first.won, second.won);
        assert_eq!(first.distribution, second.distribution);
    }

    #[test]
    fn empty_dictionary_fails() {
        let result = run_simulation(&Dictionary::default(), &config(3));
        assert!(matches!(result, Err(GameError::EmptyDictionary)));
    }

    #[test]
    fn zero_games() {
        let result = run_simulation(&dictionary(), &config(0)).unwrap();
        assert_eq!(result.total_games, 0);
        assert!(result.win_rate().abs() < f64::EPSILON);
    }
}
