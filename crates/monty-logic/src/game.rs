//! Round engine
//!
//! One round moves linearly through
//! `AwaitingInitialPick → HostRevealing → AwaitingFinalDecision → Resolved`.
//! Each operation checks the phase first and returns an error without
//! touching the round when called out of order. The prize door is kept
//! private until the round is resolved.

use serde::{Deserialize, Serialize};
use crate::config::GameConfig;
use crate::error::{Action, GameError};
use crate::random::UniformSource;
use crate::strategy::Strategy;

/// Lifecycle phase of a round
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    AwaitingInitialPick,
    HostRevealing,
    AwaitingFinalDecision,
    Resolved,
}

impl core::fmt::Display for Phase {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let name = match self {
            Phase::AwaitingInitialPick => "awaiting initial pick",
            Phase::HostRevealing => "host revealing",
            Phase::AwaitingFinalDecision => "awaiting final decision",
            Phase::Resolved => "resolved",
        };
        f.write_str(name)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Door {
    index: usize,
    has_prize: bool,
}

/// Result of a completed round
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundOutcome {
    pub did_switch: bool,
    pub won: bool,
    pub final_pick: usize,
    pub prize_door: usize,
}

impl RoundOutcome {
    pub fn strategy(&self) -> Strategy {
        Strategy::from_stay(!self.did_switch)
    }
}

/// Caller-facing view of the current round
///
/// `prize_door` and `outcome` stay `None` until the round is resolved.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundState {
    pub phase: Phase,
    pub door_count: usize,
    pub player_pick: Option<usize>,
    pub host_revealed: Option<usize>,
    pub prize_door: Option<usize>,
    pub outcome: Option<RoundOutcome>,
}

impl RoundState {
    /// Doors that are neither picked nor opened, in index order
    pub fn remaining_doors(&self) -> Vec<usize> {
        (0..self.door_count)
            .filter(|i| Some(*i) != self.player_pick && Some(*i) != self.host_revealed)
            .collect()
    }
}

struct Round {
    doors: Vec<Door>,
    prize: usize,
    phase: Phase,
    player_pick: Option<usize>,
    host_revealed: Option<usize>,
    outcome: Option<RoundOutcome>,
}

impl Round {
    fn view(&self) -> RoundState {
        let resolved = self.phase == Phase::Resolved;
        RoundState {
            phase: self.phase,
            door_count: self.doors.len(),
            player_pick: self.player_pick,
            host_revealed: self.host_revealed,
            prize_door: resolved.then_some(self.prize),
            outcome: self.outcome,
        }
    }

    /// Outcome of `strategy` given the current pick and reveal.
    fn resolve<R: UniformSource + ?Sized>(
        &self,
        strategy: Strategy,
        rng: &mut R,
    ) -> Option<RoundOutcome> {
        let pick = self.player_pick?;
        let revealed = self.host_revealed?;

        let final_pick = match strategy {
            Strategy::Stay => pick,
            Strategy::Switch => {
                let remaining: Vec<usize> = self
                    .doors
                    .iter()
                    .map(|door| door.index)
                    .filter(|&i| i != pick && i != revealed)
                    .collect();
                choose(&remaining, rng)?
            }
        };

        Some(RoundOutcome {
            did_switch: !strategy.is_stay(),
            won: self.doors[final_pick].has_prize,
            final_pick,
            prize_door: self.prize,
        })
    }
}

impl core::fmt::Debug for Round {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        // the prize stays out of debug output until the round is resolved
        let mut out = f.debug_struct("Round");
        out.field("phase", &self.phase)
            .field("door_count", &self.doors.len())
            .field("player_pick", &self.player_pick)
            .field("host_revealed", &self.host_revealed);
        if self.phase == Phase::Resolved {
            out.field("prize", &self.prize).field("outcome", &self.outcome);
        }
        out.finish_non_exhaustive()
    }
}

/// Uniform choice among `candidates`. A single candidate is returned
/// without drawing. Only used once the player has decided, so the number
/// of draws says nothing about the prize.
fn choose<R: UniformSource + ?Sized>(candidates: &[usize], rng: &mut R) -> Option<usize> {
    match candidates.len() {
        0 => None,
        1 => Some(candidates[0]),
        n => Some(candidates[rng.next_index(n) % n]),
    }
}

/// Owner of the current round
#[derive(Debug, Default)]
pub struct RoundEngine {
    round: Option<Round>,
}

impl RoundEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Phase of the current round, `None` before the first `start_round`
    pub fn phase(&self) -> Option<Phase> {
        self.round.as_ref().map(|round| round.phase)
    }

    pub fn state(&self) -> Option<RoundState> {
        self.round.as_ref().map(Round::view)
    }

    pub fn door_count(&self) -> Option<usize> {
        self.round.as_ref().map(|round| round.doors.len())
    }

    /// Place the prize and wait for the player's first pick.
    ///
    /// Replaces any existing round, finished or not.
    pub fn start_round<R: UniformSource + ?Sized>(
        &mut self,
        door_count: usize,
        rng: &mut R,
    ) -> Result<RoundState, GameError> {
        GameConfig::new(door_count)?;

        if let Some(previous) = &self.round {
            if previous.phase != Phase::Resolved {
                log::debug!("abandoning round in phase '{}'", previous.phase);
            }
        }

        let prize = rng.next_index(door_count) % door_count;
        let doors = (0..door_count)
            .map(|index| Door { index, has_prize: index == prize })
            .collect();

        let round = Round {
            doors,
            prize,
            phase: Phase::AwaitingInitialPick,
            player_pick: None,
            host_revealed: None,
            outcome: None,
        };
        let state = round.view();
        self.round = Some(round);

        log::debug!("round started with {} doors", door_count);
        Ok(state)
    }

    pub fn pick_initial_door(&mut self, door: usize) -> Result<RoundState, GameError> {
        let round = self.round_in(Action::PickInitialDoor, Phase::AwaitingInitialPick)?;

        let door_count = round.doors.len();
        if door >= door_count {
            return Err(GameError::InvalidDoorIndex { door, door_count });
        }

        round.player_pick = Some(door);
        round.phase = Phase::HostRevealing;

        log::debug!("player picked door {}", door);
        Ok(round.view())
    }

    /// Open one door that is neither the player's pick nor the prize.
    ///
    /// Returns the opened door.
    pub fn host_reveal<R: UniformSource + ?Sized>(&mut self, rng: &mut R) -> Result<usize, GameError> {
        let round = self.round_in(Action::HostReveal, Phase::HostRevealing)?;

        let pick = round.player_pick;
        let prize = round.prize;
        let candidates: Vec<usize> = round
            .doors
            .iter()
            .filter(|door| Some(door.index) != pick && !door.has_prize)
            .map(|door| door.index)
            .collect();

        if candidates.is_empty() {
            return Err(GameError::InvalidTransition {
                action: Action::HostReveal,
                phase: Some(round.phase),
            });
        }
        // exactly one draw whether or not the pick is the prize
        let n = candidates.len();
        let revealed = candidates[rng.next_index(n) % n];
        debug_assert!(Some(revealed) != pick && revealed != prize);

        round.host_revealed = Some(revealed);
        round.phase = Phase::AwaitingFinalDecision;

        log::debug!("host opened door {}", revealed);
        Ok(revealed)
    }

    /// Keep the pick (`stay`) or move to another unopened door, then resolve.
    pub fn decide<R: UniformSource + ?Sized>(
        &mut self,
        stay: bool,
        rng: &mut R,
    ) -> Result<RoundOutcome, GameError> {
        let round = self.round_in(Action::Decide, Phase::AwaitingFinalDecision)?;

        let outcome = round
            .resolve(Strategy::from_stay(stay), rng)
            .ok_or(GameError::InvalidTransition {
                action: Action::Decide,
                phase: Some(round.phase),
            })?;

        round.outcome = Some(outcome);
        round.phase = Phase::Resolved;

        log::debug!(
            "round resolved: {} to door {}, prize behind door {}, {}",
            if outcome.did_switch { "switched" } else { "stayed" },
            outcome.final_pick,
            outcome.prize_door,
            if outcome.won { "won" } else { "lost" }
        );
        Ok(outcome)
    }

    /// Outcome the opposite decision would have produced in the resolved
    /// round, from the same placement, pick and reveal.
    pub fn alternative_outcome<R: UniformSource + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<RoundOutcome, GameError> {
        let invalid = GameError::InvalidTransition {
            action: Action::AlternativeOutcome,
            phase: self.phase(),
        };
        let round = match &self.round {
            Some(round) if round.phase == Phase::Resolved => round,
            _ => return Err(invalid),
        };
        let taken = round.outcome.ok_or(invalid)?;
        round.resolve(taken.strategy().opposite(), rng).ok_or(invalid)
    }

    fn round_in(&mut self, action: Action, phase: Phase) -> Result<&mut Round, GameError> {
        match self.round.as_mut() {
            Some(round) if round.phase == phase => Ok(round),
            other => Err(GameError::InvalidTransition {
                action,
                phase: other.map(|round| round.phase),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MAX_DOORS;
    use crate::error::ConfigError;
    use crate::random::{ScriptedSource, SeededRng};
    use crate::strategy::Strategy;
    use proptest::prelude::*;

    /// Engine with prize behind `prize` and the player on `pick`.
    fn picked(door_count: usize, prize: usize, pick: usize) -> RoundEngine {
        let mut engine = RoundEngine::new();
        engine.start_round(door_count, &mut ScriptedSource::new(vec![prize])).unwrap();
        engine.pick_initial_door(pick).unwrap();
        engine
    }

    #[test]
    fn test_start_round_enters_initial_pick() {
        let mut engine = RoundEngine::new();
        assert_eq!(engine.phase(), None);

        let state = engine.start_round(3, &mut ScriptedSource::new(vec![2])).unwrap();
        assert_eq!(state.phase, Phase::AwaitingInitialPick);
        assert_eq!(state.door_count, 3);
        assert_eq!(state.player_pick, None);
        assert_eq!(state.host_revealed, None);
        assert_eq!(state.prize_door, None, "prize must stay hidden");
    }

    #[test]
    fn test_start_round_rejects_bad_door_counts() {
        let mut engine = RoundEngine::new();
        let mut rng = SeededRng::from_u64(1);
        assert_eq!(
            engine.start_round(2, &mut rng),
            Err(GameError::InvalidConfiguration(ConfigError::DoorCount { doors: 2 }))
        );
        assert!(engine.start_round(MAX_DOORS + 1, &mut rng).is_err());
        assert_eq!(engine.phase(), None);
    }

    #[test]
    fn test_prize_forced_reveal() {
        // prize 1, pick 0: only door 2 can be opened, whatever is drawn
        for drawn in 0..3 {
            let mut engine = picked(3, 1, 0);
            assert_eq!(engine.host_reveal(&mut ScriptedSource::new(vec![drawn])).unwrap(), 2);
        }

        // prize 2, pick 0: only door 1 can be opened
        for drawn in 0..3 {
            let mut engine = picked(3, 2, 0);
            assert_eq!(engine.host_reveal(&mut ScriptedSource::new(vec![drawn])).unwrap(), 1);
        }
    }

    #[test]
    fn test_reveal_draw_count_does_not_depend_on_prize() {
        for prize in 0..3 {
            let mut engine = picked(3, prize, 0);
            let mut script = ScriptedSource::new(vec![0]);
            engine.host_reveal(&mut script).unwrap();
            assert_eq!(script.draws(), 1, "prize {} changed the draw count", prize);
        }
    }

    #[test]
    fn test_debug_output_hides_prize_until_resolved() {
        let mut engine = RoundEngine::new();
        engine.start_round(3, &mut ScriptedSource::new(vec![1])).unwrap();
        let text = format!("{:?}", engine);
        assert!(!text.contains("prize"), "{}", text);
        assert!(!text.contains("has_prize"), "{}", text);

        engine.pick_initial_door(0).unwrap();
        engine.host_reveal(&mut ScriptedSource::new(vec![0])).unwrap();
        assert!(!format!("{:?}", engine).contains("prize"));

        engine.decide(true, &mut ScriptedSource::new(Vec::new())).unwrap();
        assert!(format!("{:?}", engine).contains("prize: 1"));
    }

    #[test]
    fn test_reveal_when_pick_is_prize_draws_among_others() {
        let mut engine = picked(3, 0, 0);
        assert_eq!(engine.host_reveal(&mut ScriptedSource::new(vec![0])).unwrap(), 1);

        let mut engine = picked(3, 0, 0);
        assert_eq!(engine.host_reveal(&mut ScriptedSource::new(vec![1])).unwrap(), 2);
    }

    #[test]
    fn test_reveal_is_uniform_when_pick_is_prize() {
        let mut rng = SeededRng::new(&[42u8; 32], 0);
        let mut counts = [0u32; 3];
        let samples = 3000;

        for _ in 0..samples {
            let mut engine = picked(3, 0, 0);
            counts[engine.host_reveal(&mut rng).unwrap()] += 1;
        }

        assert_eq!(counts[0], 0);
        assert_eq!(counts[1] + counts[2], samples);
        let share = counts[1] as f64 / samples as f64;
        assert!(share > 0.45 && share < 0.55, "door 1 share {} not ~0.5", share);
    }

    #[test]
    fn test_switch_after_forced_reveal_wins() {
        let mut engine = picked(3, 1, 0);
        assert_eq!(engine.host_reveal(&mut ScriptedSource::new(vec![0])).unwrap(), 2);

        // the switch target is forced, nothing is drawn
        let mut empty = ScriptedSource::new(Vec::new());
        let outcome = engine.decide(false, &mut empty).unwrap();
        assert_eq!(
            outcome,
            RoundOutcome { did_switch: true, won: true, final_pick: 1, prize_door: 1 }
        );
        assert_eq!(empty.draws(), 0);

        let state = engine.state().unwrap();
        assert_eq!(state.phase, Phase::Resolved);
        assert_eq!(state.prize_door, Some(1));
        assert_eq!(state.outcome, Some(outcome));
    }

    #[test]
    fn test_stay_keeps_pick() {
        let mut engine = picked(3, 1, 0);
        let mut rng = SeededRng::from_u64(3);
        engine.host_reveal(&mut rng).unwrap();

        let outcome = engine.decide(true, &mut rng).unwrap();
        assert!(!outcome.did_switch);
        assert!(!outcome.won);
        assert_eq!(outcome.final_pick, 0);
        assert_eq!(outcome.strategy(), Strategy::Stay);
    }

    #[test]
    fn test_switch_with_many_doors_draws_among_remaining() {
        // 5 doors, prize 3, pick 0, host opens door 1 (first candidate)
        let mut engine = picked(5, 3, 0);
        let mut script = ScriptedSource::new(vec![0, 2]);
        assert_eq!(engine.host_reveal(&mut script).unwrap(), 1);

        // remaining are [2, 3, 4]; index 2 -> door 4
        let outcome = engine.decide(false, &mut script).unwrap();
        assert_eq!(outcome.final_pick, 4);
        assert!(!outcome.won);
        assert_eq!(script.remaining(), 0);
    }

    #[test]
    fn test_alternative_outcome_mirrors_decision() {
        let mut engine = picked(3, 1, 0);
        engine.host_reveal(&mut ScriptedSource::new(vec![0])).unwrap();

        let mut empty = ScriptedSource::new(Vec::new());
        assert!(matches!(
            engine.alternative_outcome(&mut empty),
            Err(GameError::InvalidTransition { action: Action::AlternativeOutcome, .. })
        ));

        let stayed = engine.decide(true, &mut empty).unwrap();
        let switched = engine.alternative_outcome(&mut empty).unwrap();
        assert!(!stayed.won);
        assert!(switched.did_switch);
        assert!(switched.won);
        assert_eq!(switched.prize_door, stayed.prize_door);
        assert_eq!(engine.phase(), Some(Phase::Resolved));
    }

    #[test]
    fn test_reveal_before_pick_is_rejected_without_mutation() {
        let mut engine = RoundEngine::new();
        let mut rng = SeededRng::from_u64(11);
        assert_eq!(
            engine.host_reveal(&mut rng),
            Err(GameError::InvalidTransition { action: Action::HostReveal, phase: None })
        );

        engine.start_round(3, &mut rng).unwrap();
        let before = engine.state();
        assert_eq!(
            engine.host_reveal(&mut rng),
            Err(GameError::InvalidTransition {
                action: Action::HostReveal,
                phase: Some(Phase::AwaitingInitialPick),
            })
        );
        assert_eq!(engine.state(), before);
    }

    #[test]
    fn test_out_of_order_calls_are_rejected() {
        let mut engine = picked(3, 0, 1);
        let mut rng = SeededRng::from_u64(5);

        assert!(matches!(
            engine.pick_initial_door(2),
            Err(GameError::InvalidTransition { action: Action::PickInitialDoor, .. })
        ));
        assert!(matches!(
            engine.decide(true, &mut rng),
            Err(GameError::InvalidTransition { action: Action::Decide, .. })
        ));

        engine.host_reveal(&mut rng).unwrap();
        assert!(engine.host_reveal(&mut rng).is_err());
        engine.decide(false, &mut rng).unwrap();
        assert!(matches!(
            engine.decide(false, &mut rng),
            Err(GameError::InvalidTransition { phase: Some(Phase::Resolved), .. })
        ));
    }

    #[test]
    fn test_pick_out_of_range() {
        let mut engine = RoundEngine::new();
        engine.start_round(4, &mut SeededRng::from_u64(2)).unwrap();
        let before = engine.state();

        assert_eq!(
            engine.pick_initial_door(4),
            Err(GameError::InvalidDoorIndex { door: 4, door_count: 4 })
        );
        assert_eq!(engine.state(), before);
    }

    #[test]
    fn test_start_round_abandons_round_in_progress() {
        let mut engine = picked(3, 0, 2);
        let state = engine.start_round(4, &mut SeededRng::from_u64(9)).unwrap();
        assert_eq!(state.phase, Phase::AwaitingInitialPick);
        assert_eq!(state.door_count, 4);
        assert_eq!(state.player_pick, None);
    }

    #[test]
    fn test_remaining_doors() {
        let mut engine = picked(4, 2, 0);
        let mut empty = ScriptedSource::new(vec![1]);
        let revealed = engine.host_reveal(&mut empty).unwrap();
        assert_eq!(revealed, 3);
        assert_eq!(engine.state().unwrap().remaining_doors(), vec![1, 2]);
    }

    #[test]
    fn test_outcome_serializes() {
        let outcome = RoundOutcome { did_switch: true, won: false, final_pick: 2, prize_door: 0 };
        let json = serde_json::to_string(&outcome).unwrap();
        assert_eq!(json, r#"{"did_switch":true,"won":false,"final_pick":2,"prize_door":0}"#);
    }

    proptest! {
        #[test]
        fn prop_reveal_never_opens_pick_or_prize(
            door_count in 3usize..16,
            pick in 0usize..16,
            seed in any::<u64>(),
            stay in any::<bool>(),
        ) {
            let pick = pick % door_count;
            let mut rng = SeededRng::from_u64(seed);
            let mut engine = RoundEngine::new();

            engine.start_round(door_count, &mut rng).unwrap();
            engine.pick_initial_door(pick).unwrap();
            let revealed = engine.host_reveal(&mut rng).unwrap();
            let outcome = engine.decide(stay, &mut rng).unwrap();

            prop_assert_ne!(revealed, pick);
            prop_assert_ne!(revealed, outcome.prize_door);
            prop_assert_ne!(outcome.final_pick, revealed);
            prop_assert_eq!(outcome.won, outcome.final_pick == outcome.prize_door);
            if stay {
                prop_assert_eq!(outcome.final_pick, pick);
            } else {
                prop_assert_ne!(outcome.final_pick, pick);
            }
        }
    }
}
