//! WASM bindings for browser front ends

#![cfg(feature = "wasm")]

use wasm_bindgen::prelude::*;
use crate::{GameError, Session, Stats, Strategy};
use crate::strategy::describe_strategy;

fn js_error(err: GameError) -> JsError {
    JsError::new(&err.to_string())
}

fn to_js<T: serde::Serialize>(value: &T) -> Result<JsValue, JsError> {
    serde_wasm_bindgen::to_value(value)
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}

fn parse_strategy(strategy: &str) -> Result<Strategy, JsError> {
    match strategy {
        "stay" | "Stay" => Ok(Strategy::Stay),
        "switch" | "Switch" => Ok(Strategy::Switch),
        _ => Err(JsError::new(&format!("Unknown strategy: {}", strategy))),
    }
}

/// One player's game: current round plus running stats
#[wasm_bindgen]
pub struct MontyHall {
    session: Session,
}

#[wasm_bindgen]
impl MontyHall {
    /// Create a session from a 32-byte seed
    #[wasm_bindgen(constructor)]
    pub fn new(seed: &[u8]) -> Result<MontyHall, JsError> {
        let seed_arr: [u8; 32] = seed.try_into()
            .map_err(|_| JsError::new("Seed must be exactly 32 bytes"))?;
        Ok(MontyHall { session: Session::with_seed(&seed_arr) })
    }

    /// Start a new round. Returns the serialized RoundState.
    #[wasm_bindgen(js_name = startRound)]
    pub fn start_round(&mut self, door_count: usize) -> Result<JsValue, JsError> {
        let state = self.session.start_round(door_count).map_err(js_error)?;
        to_js(&state)
    }

    #[wasm_bindgen(js_name = pickInitialDoor)]
    pub fn pick_initial_door(&mut self, door: usize) -> Result<JsValue, JsError> {
        let state = self.session.pick_initial_door(door).map_err(js_error)?;
        to_js(&state)
    }

    /// Returns the index of the door the host opened
    #[wasm_bindgen(js_name = hostReveal)]
    pub fn host_reveal(&mut self) -> Result<usize, JsError> {
        self.session.host_reveal().map_err(js_error)
    }

    /// Resolve the round. Returns the serialized RoundOutcome.
    #[wasm_bindgen]
    pub fn decide(&mut self, stay: bool) -> Result<JsValue, JsError> {
        let outcome = self.session.decide(stay).map_err(js_error)?;
        to_js(&outcome)
    }

    /// Serialized RoundState, or `null` before the first round
    #[wasm_bindgen(js_name = roundState)]
    pub fn round_state(&self) -> Result<JsValue, JsError> {
        to_js(&self.session.round_state())
    }

    #[wasm_bindgen(js_name = getStats)]
    pub fn get_stats(&self) -> Result<JsValue, JsError> {
        to_js(&self.session.get_stats())
    }

    #[wasm_bindgen(js_name = resetStats)]
    pub fn reset_stats(&mut self) {
        self.session.reset_stats();
    }

    /// Returns `{rounds_run, stay_wins_delta, switch_wins_delta}`
    #[wasm_bindgen(js_name = simulateBulk)]
    pub fn simulate_bulk(&mut self, rounds: u32, door_count: usize) -> Result<JsValue, JsError> {
        let summary = self.session.simulate_bulk(rounds, door_count).map_err(js_error)?;
        to_js(&summary)
    }

    /// Cumulative win rate for "stay" or "switch"
    #[wasm_bindgen(js_name = winRate)]
    pub fn win_rate(&self, strategy: &str) -> Result<f64, JsError> {
        Ok(self.session.get_stats().win_rate(parse_strategy(strategy)?))
    }
}

/// Win rate from a serialized Stats object
#[wasm_bindgen]
pub fn stats_win_rate(stats: JsValue, strategy: &str) -> Result<f64, JsError> {
    let stats: Stats = serde_wasm_bindgen::from_value(stats)
        .map_err(|e| JsError::new(&format!("Invalid stats: {}", e)))?;
    Ok(stats.win_rate(parse_strategy(strategy)?))
}

/// Human-readable description of "stay" or "switch"
#[wasm_bindgen]
pub fn get_strategy_description(strategy: &str) -> Result<String, JsError> {
    Ok(describe_strategy(parse_strategy(strategy)?))
}
