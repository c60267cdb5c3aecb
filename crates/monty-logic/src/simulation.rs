//! Headless bulk simulation
//!
//! Each trial plays one round through the [`RoundEngine`] with a random
//! initial pick, then scores both strategies against that same placement,
//! pick and reveal. One outcome per strategy is folded into the stats.

use serde::{Deserialize, Serialize};
use crate::config::SimulationConfig;
use crate::error::GameError;
use crate::game::{RoundEngine, RoundOutcome};
use crate::random::UniformSource;
use crate::stats::StatsAggregator;
use crate::strategy::Strategy;

/// What a bulk run added to the stats
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkSummary {
    pub rounds_run: u64,
    pub stay_wins_delta: u64,
    pub switch_wins_delta: u64,
}

impl BulkSummary {
    /// Win rate of `strategy` within this run alone
    pub fn win_rate(&self, strategy: Strategy) -> f64 {
        if self.rounds_run == 0 {
            return 0.0;
        }
        let wins = match strategy {
            Strategy::Stay => self.stay_wins_delta,
            Strategy::Switch => self.switch_wins_delta,
        };
        wins as f64 / self.rounds_run as f64
    }

    fn record(&mut self, stay: &RoundOutcome, switch: &RoundOutcome) {
        self.rounds_run += 1;
        self.stay_wins_delta += stay.won as u64;
        self.switch_wins_delta += switch.won as u64;
    }
}

/// Drives the engine through many rounds
#[derive(Clone, Debug)]
pub struct Simulator {
    config: SimulationConfig,
}

impl Simulator {
    pub fn new(config: SimulationConfig) -> Result<Self, GameError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn run<R: UniformSource + ?Sized>(
        &self,
        stats: &mut StatsAggregator,
        rng: &mut R,
    ) -> Result<BulkSummary, GameError> {
        self.run_with_progress(stats, rng, |_| {})
    }

    /// Run all rounds, calling `on_chunk` with the running summary after
    /// every `chunk_size` rounds and once at the end.
    pub fn run_with_progress<R, F>(
        &self,
        stats: &mut StatsAggregator,
        rng: &mut R,
        mut on_chunk: F,
    ) -> Result<BulkSummary, GameError>
    where
        R: UniformSource + ?Sized,
        F: FnMut(&BulkSummary),
    {
        let doors = self.config.game.doors;
        let total = self.config.rounds as u64;
        let chunk = self.config.chunk_size as u64;

        let mut engine = RoundEngine::new();
        let mut summary = BulkSummary::default();

        while summary.rounds_run < total {
            let end = (summary.rounds_run + chunk).min(total);
            while summary.rounds_run < end {
                let (stay, switch) = play_trial(&mut engine, doors, rng)?;
                stats.fold(stay);
                stats.fold(switch);
                summary.record(&stay, &switch);
            }
            log::trace!("simulated {}/{} rounds", summary.rounds_run, total);
            on_chunk(&summary);
        }

        log::info!(
            "simulated {} rounds with {} doors: stay won {} ({:.2}%), switch won {} ({:.2}%)",
            summary.rounds_run,
            doors,
            summary.stay_wins_delta,
            summary.win_rate(Strategy::Stay) * 100.0,
            summary.switch_wins_delta,
            summary.win_rate(Strategy::Switch) * 100.0,
        );
        Ok(summary)
    }
}

/// Run `rounds` trials on `doors` doors and fold them into `stats`.
pub fn simulate<R: UniformSource + ?Sized>(
    rounds: u32,
    doors: usize,
    stats: &mut StatsAggregator,
    rng: &mut R,
) -> Result<BulkSummary, GameError> {
    Simulator::new(SimulationConfig::new(rounds, doors))?.run(stats, rng)
}

/// One shared draw scored both ways: (stay outcome, switch outcome)
fn play_trial<R: UniformSource + ?Sized>(
    engine: &mut RoundEngine,
    doors: usize,
    rng: &mut R,
) -> Result<(RoundOutcome, RoundOutcome), GameError> {
    engine.start_round(doors, rng)?;
    let pick = rng.next_index(doors) % doors;
    engine.pick_initial_door(pick)?;
    engine.host_reveal(rng)?;
    let stay = engine.decide(true, rng)?;
    let switch = engine.alternative_outcome(rng)?;
    Ok((stay, switch))
}
