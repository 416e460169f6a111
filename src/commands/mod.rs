//! Command implementations

pub mod play;
pub mod replay;
pub mod simulate;

pub use play::run_play;
pub use replay::{ReplayConfig, ReplayResult, ReplayStep, replay_game};
pub use simulate::{GameOutcome, SimulationConfig, SimulationResult, play_game, run_simulation};
