//! Monty Hall Logic
//!
//! Round engine and statistics for the Monty Hall problem.
//! This crate is compiled to:
//! - Native (for the terminal front end)
//! - WASM (for browser front ends)

mod config;
mod error;
mod game;
mod random;
mod session;
mod simulation;
mod stats;
mod strategy;

#[cfg(feature = "wasm")]
mod wasm;

pub use config::{
    GameConfig, SimulationConfig, CLASSIC_DOORS, DEFAULT_BULK_ROUNDS, DEFAULT_CHUNK_SIZE,
    DEFAULT_PACE_MS, MAX_DOORS, MIN_DOORS,
};
pub use error::{Action, ConfigError, GameError};
pub use game::{Phase, RoundEngine, RoundOutcome, RoundState};
pub use random::{ScriptedSource, SeededRng, UniformSource};
pub use session::Session;
pub use simulation::{simulate, BulkSummary, Simulator};
pub use stats::{Stats, StatsAggregator};
pub use strategy::{describe_strategy, Strategy};

/// Probability that `strategy` wins with `doors` doors when the host opens
/// one door and a switch picks uniformly among the rest.
pub fn expected_win_rate(strategy: Strategy, doors: usize) -> f64 {
    if doors < MIN_DOORS {
        return 0.0;
    }
    let n = doors as f64;
    match strategy {
        Strategy::Stay => 1.0 / n,
        Strategy::Switch => (n - 1.0) / (n * (n - 2.0)),
    }
}
