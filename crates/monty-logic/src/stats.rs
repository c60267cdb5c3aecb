//! Running win/loss totals per strategy

use serde::{Deserialize, Serialize};
use crate::game::RoundOutcome;
use crate::strategy::Strategy;

/// Cumulative totals
///
/// `stay_wins <= stay_games` and `switch_wins <= switch_games` always hold.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub stay_wins: u64,
    pub stay_games: u64,
    pub switch_wins: u64,
    pub switch_games: u64,
}

impl Stats {
    pub fn wins(&self, strategy: Strategy) -> u64 {
        match strategy {
            Strategy::Stay => self.stay_wins,
            Strategy::Switch => self.switch_wins,
        }
    }

    pub fn games(&self, strategy: Strategy) -> u64 {
        match strategy {
            Strategy::Stay => self.stay_games,
            Strategy::Switch => self.switch_games,
        }
    }

    /// `wins / games`, or 0 when no games were played
    pub fn win_rate(&self, strategy: Strategy) -> f64 {
        let games = self.games(strategy);
        if games == 0 {
            return 0.0;
        }
        self.wins(strategy) as f64 / games as f64
    }

    pub fn total_games(&self) -> u64 {
        self.stay_games + self.switch_games
    }
}

/// Sole owner of the running [`Stats`]
#[derive(Clone, Debug, Default)]
pub struct StatsAggregator {
    totals: Stats,
}

impl StatsAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one finished round against the strategy it used.
    pub fn fold(&mut self, outcome: RoundOutcome) {
        let win = outcome.won as u64;
        if outcome.did_switch {
            self.totals.switch_games += 1;
            self.totals.switch_wins += win;
        } else {
            self.totals.stay_games += 1;
            self.totals.stay_wins += win;
        }
    }

    pub fn snapshot(&self) -> Stats {
        self.totals
    }

    pub fn win_rate(&self, strategy: Strategy) -> f64 {
        self.totals.win_rate(strategy)
    }

    /// Zero every counter. Gameplay never calls this.
    pub fn reset(&mut self) {
        log::info!("resetting stats after {} games", self.totals.total_games());
        self.totals = Stats::default();
    }
}
