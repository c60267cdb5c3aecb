//! Session facade for front ends
//!
//! A [`Session`] owns one engine, one stats aggregator and one random
//! source. Interactive decisions are folded into the stats as soon as
//! they resolve; bulk runs share the same totals.

use crate::config::SimulationConfig;
use crate::error::{Action, GameError};
use crate::game::{Phase, RoundEngine, RoundOutcome, RoundState};
use crate::random::{SeededRng, UniformSource};
use crate::simulation::{BulkSummary, Simulator};
use crate::stats::{Stats, StatsAggregator};

pub struct Session<R: UniformSource = SeededRng> {
    engine: RoundEngine,
    stats: StatsAggregator,
    rng: R,
}

// the generator state would let a reader replay the prize draw
impl<R: UniformSource> core::fmt::Debug for Session<R> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Session")
            .field("engine", &self.engine)
            .field("stats", &self.stats)
            .finish_non_exhaustive()
    }
}

impl Session<SeededRng> {
    pub fn with_seed(seed: &[u8; 32]) -> Self {
        Self::with_source(SeededRng::new(seed, 0))
    }
}

impl<R: UniformSource> Session<R> {
    pub fn with_source(rng: R) -> Self {
        Self {
            engine: RoundEngine::new(),
            stats: StatsAggregator::new(),
            rng,
        }
    }

    pub fn start_round(&mut self, door_count: usize) -> Result<RoundState, GameError> {
        self.engine.start_round(door_count, &mut self.rng)
    }

    pub fn pick_initial_door(&mut self, door: usize) -> Result<RoundState, GameError> {
        self.engine.pick_initial_door(door)
    }

    pub fn host_reveal(&mut self) -> Result<usize, GameError> {
        self.engine.host_reveal(&mut self.rng)
    }

    /// Resolve the round and count it in the stats.
    pub fn decide(&mut self, stay: bool) -> Result<RoundOutcome, GameError> {
        let outcome = self.engine.decide(stay, &mut self.rng)?;
        self.stats.fold(outcome);
        Ok(outcome)
    }

    /// Outcome of the decision not taken in the last resolved round.
    /// Not counted in the stats.
    pub fn alternative_outcome(&mut self) -> Result<RoundOutcome, GameError> {
        self.engine.alternative_outcome(&mut self.rng)
    }

    pub fn round_state(&self) -> Option<RoundState> {
        self.engine.state()
    }

    pub fn get_stats(&self) -> Stats {
        self.stats.snapshot()
    }

    pub fn reset_stats(&mut self) {
        self.stats.reset();
    }

    /// Run `rounds` headless trials into the session stats.
    ///
    /// Refused between the initial pick and the final decision. When an
    /// interactive round existed, a fresh one with the same door count is
    /// started afterwards.
    pub fn simulate_bulk(&mut self, rounds: u32, door_count: usize) -> Result<BulkSummary, GameError> {
        self.simulate_bulk_with_progress(SimulationConfig::new(rounds, door_count), |_| {})
    }

    pub fn simulate_bulk_with_progress<F: FnMut(&BulkSummary)>(
        &mut self,
        config: SimulationConfig,
        on_chunk: F,
    ) -> Result<BulkSummary, GameError> {
        let phase = self.engine.phase();
        if matches!(phase, Some(Phase::HostRevealing | Phase::AwaitingFinalDecision)) {
            return Err(GameError::InvalidTransition { action: Action::SimulateBulk, phase });
        }

        let simulator = Simulator::new(config)?;
        let summary = simulator.run_with_progress(&mut self.stats, &mut self.rng, on_chunk)?;

        if let Some(doors) = self.engine.door_count() {
            self.engine.start_round(doors, &mut self.rng)?;
        }
        Ok(summary)
    }
}
