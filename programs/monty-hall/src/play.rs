//! Interactive rounds in the terminal

use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use dialoguer::{Confirm, Select};
use monty_logic::{Phase, Session, DEFAULT_BULK_ROUNDS};

use crate::report;

enum Next {
    Again,
    Simulate,
    Reset,
    Quit,
}

pub fn run(session: &mut Session, doors: usize, pace: Duration) -> Result<()> {
    println!("{}", report::welcome_message(doors));
    loop {
        play_round(session, doors, pace)?;
        println!("\n{}\n", report::stats_table(&session.get_stats(), doors));

        match menu()? {
            Next::Again => {}
            Next::Simulate => {
                let summary = session
                    .simulate_bulk(DEFAULT_BULK_ROUNDS, doors)
                    .context("bulk simulation failed")?;
                println!("{}", report::bulk_message(&summary));
                println!("\n{}\n", report::stats_table(&session.get_stats(), doors));
            }
            Next::Reset => {
                let sure = Confirm::new()
                    .with_prompt("Reset all stats?")
                    .default(false)
                    .interact()?;
                if sure {
                    session.reset_stats();
                }
            }
            Next::Quit => return Ok(()),
        }
    }
}

fn menu() -> Result<Next> {
    let choices = [
        "Play again",
        "Simulate 1000 games",
        "Reset stats",
        "Quit",
    ];
    let selection = Select::new()
        .with_prompt("What next?")
        .items(choices.as_slice())
        .default(0)
        .interact()?;
    Ok(match selection {
        0 => Next::Again,
        1 => Next::Simulate,
        2 => Next::Reset,
        _ => Next::Quit,
    })
}

fn play_round(session: &mut Session, doors: usize, pace: Duration) -> Result<()> {
    // a bulk run leaves a fresh round behind; reuse it
    let fresh = session
        .round_state()
        .is_some_and(|state| state.phase == Phase::AwaitingInitialPick && state.door_count == doors);
    if !fresh {
        session.start_round(doors).context("could not start a round")?;
    }

    let labels: Vec<String> = (0..doors).map(report::door_label).collect();
    let pick = Select::new()
        .with_prompt("Pick a door")
        .items(labels.as_slice())
        .default(0)
        .interact()?;
    session.pick_initial_door(pick)?;
    println!("{}", report::pick_message(pick));

    // presentation only; the engine does not wait
    thread::sleep(pace);

    session.host_reveal()?;
    let state = session.round_state().context("round vanished after reveal")?;
    println!("{}", report::reveal_message(&state));

    let decisions = [
        format!("Stay with {}", report::door_label(pick)),
        "Switch door".to_string(),
    ];
    let decision = Select::new()
        .with_prompt("Your decision")
        .items(decisions.as_slice())
        .default(0)
        .interact()?;
    let outcome = session.decide(decision == 0)?;
    println!("{}", report::result_message(&outcome));

    let other = session.alternative_outcome()?;
    log::debug!(
        "the other choice would have {}",
        if other.won { "won" } else { "lost" }
    );
    Ok(())
}
