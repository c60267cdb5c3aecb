//! Game and simulation configuration

use crate::error::ConfigError;

/// Fewest doors for which the puzzle makes sense
pub const MIN_DOORS: usize = 3;

/// The door count of the classic puzzle
pub const CLASSIC_DOORS: usize = 3;

/// Upper bound on doors per round, caps per-round allocation
pub const MAX_DOORS: usize = 1024;

/// Rounds per bulk run when the caller does not say otherwise
pub const DEFAULT_BULK_ROUNDS: u32 = 1000;

/// Suggested delay between the initial pick and the host reveal in
/// interactive play. Purely presentational; the core never sleeps.
pub const DEFAULT_PACE_MS: u64 = 1000;

/// Rounds between progress callbacks during bulk runs
pub const DEFAULT_CHUNK_SIZE: u32 = 10_000;

/// Door layout for a single round
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameConfig {
    pub doors: usize,
}

impl GameConfig {
    /// Three doors, one car
    pub fn classic() -> Self {
        Self { doors: CLASSIC_DOORS }
    }

    pub fn new(doors: usize) -> Result<Self, ConfigError> {
        let config = Self { doors };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.doors < MIN_DOORS || self.doors > MAX_DOORS {
            return Err(ConfigError::DoorCount { doors: self.doors });
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::classic()
    }
}

/// Parameters for a headless bulk run
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SimulationConfig {
    pub rounds: u32,
    pub game: GameConfig,
    pub chunk_size: u32,
}

impl SimulationConfig {
    pub fn new(rounds: u32, doors: usize) -> Self {
        Self {
            rounds,
            game: GameConfig { doors },
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }

    pub fn with_chunk_size(mut self, chunk_size: u32) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.game.validate()?;
        if self.rounds == 0 {
            return Err(ConfigError::NoRounds);
        }
        if self.chunk_size == 0 {
            return Err(ConfigError::ZeroChunk);
        }
        Ok(())
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BULK_ROUNDS, CLASSIC_DOORS)
    }
}
