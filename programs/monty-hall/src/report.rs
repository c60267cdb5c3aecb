//! Player-facing text. Doors are numbered from 1 on screen.

use monty_logic::{expected_win_rate, BulkSummary, RoundOutcome, RoundState, Stats, Strategy};

pub fn door_label(door: usize) -> String {
    format!("Door {}", door + 1)
}

fn door_list(doors: &[usize]) -> String {
    doors.iter().map(|d| (d + 1).to_string()).collect::<Vec<_>>().join(", ")
}

pub fn welcome_message(doors: usize) -> String {
    format!(
        "Welcome to the Monty Hall Problem! {} doors, one car. Pick a door, or run simulations.",
        doors
    )
}

pub fn pick_message(door: usize) -> String {
    format!("You picked {}. Monty is thinking...", door_label(door))
}

/// Text shown once the host has opened a door
pub fn reveal_message(state: &RoundState) -> String {
    let (Some(pick), Some(opened)) = (state.player_pick, state.host_revealed) else {
        return String::new();
    };
    let remaining = state.remaining_doors();
    let target = match remaining.as_slice() {
        [only] => door_label(*only),
        others => format!("one of Doors {}", door_list(others)),
    };
    format!(
        "Monty opened {} (it has a goat!). Do you want to stay with {} or switch to {}?",
        door_label(opened),
        door_label(pick),
        target
    )
}

pub fn result_message(outcome: &RoundOutcome) -> String {
    format!(
        "You {} {}. {} The car was behind {}.",
        if outcome.did_switch { "switched to" } else { "stayed with" },
        door_label(outcome.final_pick),
        if outcome.won { "And you WON the car!" } else { "And you lost." },
        door_label(outcome.prize_door)
    )
}

pub fn bulk_message(summary: &BulkSummary) -> String {
    format!(
        "Finished {} simulations. Stay won {}, switch won {}. Stats updated.",
        summary.rounds_run, summary.stay_wins_delta, summary.switch_wins_delta
    )
}

/// Cumulative stats with the theoretical rate for `doors` doors
pub fn stats_table(stats: &Stats, doors: usize) -> String {
    let mut lines = vec![format!(
        "{:<8}{:>10}{:>10}{:>10}{:>10}",
        "", "games", "wins", "rate", "expected"
    )];
    for strategy in Strategy::ALL {
        lines.push(format!(
            "{:<8}{:>10}{:>10}{:>9.2}%{:>9.2}%",
            strategy.to_string(),
            stats.games(strategy),
            stats.wins(strategy),
            stats.win_rate(strategy) * 100.0,
            expected_win_rate(strategy, doors) * 100.0
        ));
    }
    lines.join("\n")
}

/// Machine-readable result of `simulate --json`
pub fn json_report(summary: &BulkSummary, stats: &Stats, doors: usize) -> serde_json::Value {
    serde_json::json!({
        "doors": doors,
        "summary": summary,
        "stats": stats,
        "win_rate": {
            "stay": stats.win_rate(Strategy::Stay),
            "switch": stats.win_rate(Strategy::Switch),
        },
        "expected_win_rate": {
            "stay": expected_win_rate(Strategy::Stay, doors),
            "switch": expected_win_rate(Strategy::Switch, doors),
        },
    })
}
