//! Monty Hall - terminal front end
//!
//! `play` walks through rounds with prompts; `simulate` runs both
//! strategies headless and prints the empirical win rates.

mod cli;
mod play;
mod report;

use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use log::LevelFilter;
use monty_logic::{SeededRng, Session, SimulationConfig};

use crate::cli::{Cli, Command};

fn main() -> Result<()> {
    let cli = Cli::parse();
    log(cli.level())?;

    match cli.command {
        Command::Play { doors, pace_ms, seed } => {
            let mut session = session(seed);
            play::run(&mut session, doors, Duration::from_millis(pace_ms))
        }
        Command::Simulate { rounds, doors, seed, chunk_size, json } => {
            simulate(session(seed), SimulationConfig::new(rounds, doors).with_chunk_size(chunk_size), json)
        }
    }
}

/// Terminal logger with location, target and thread noise turned off
fn log(level: LevelFilter) -> Result<()> {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Off)
        .set_thread_level(LevelFilter::Off)
        .build();
    simplelog::TermLogger::init(
        level,
        config,
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )
    .context("initialize logger")
}

fn session(seed: Option<u64>) -> Session {
    let seed = seed.unwrap_or_else(rand::random);
    log::info!("{:<32}{:<32}", "using seed", seed);
    Session::with_source(SeededRng::from_u64(seed))
}

fn simulate(mut session: Session, config: SimulationConfig, json: bool) -> Result<()> {
    let total = config.rounds;
    let summary = session
        .simulate_bulk_with_progress(config, |progress| {
            if progress.rounds_run < total as u64 {
                log::info!("{:<32}{}/{}", "simulating", progress.rounds_run, total);
            }
        })
        .context("bulk simulation failed")?;
    let stats = session.get_stats();
    let doors = config.game.doors;

    if json {
        let report = report::json_report(&summary, &stats, doors);
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report::bulk_message(&summary));
        println!("\n{}", report::stats_table(&stats, doors));
    }
    Ok(())
}
