use clap::{Parser, Subcommand};
use log::LevelFilter;
use monty_logic::{CLASSIC_DOORS, DEFAULT_BULK_ROUNDS, DEFAULT_CHUNK_SIZE, DEFAULT_PACE_MS};

#[derive(Parser, Debug)]
#[command(author, version, about = "Play and simulate the Monty Hall problem", long_about = None)]
pub struct Cli {
    /// More log output (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
    /// Only log warnings and errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    pub fn level(&self) -> LevelFilter {
        match (self.quiet, self.verbose) {
            (true, _) => LevelFilter::Warn,
            (false, 0) => LevelFilter::Info,
            (false, 1) => LevelFilter::Debug,
            (false, _) => LevelFilter::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    #[command(about = "Play rounds interactively", alias = "p")]
    Play {
        #[arg(short, long, default_value_t = CLASSIC_DOORS)]
        doors: usize,
        /// Delay before the host opens a door, in milliseconds
        #[arg(long, default_value_t = DEFAULT_PACE_MS)]
        pace_ms: u64,
        #[arg(long)]
        seed: Option<u64>,
    },
    #[command(about = "Simulate many rounds of both strategies", alias = "sim")]
    Simulate {
        #[arg(short, long, default_value_t = DEFAULT_BULK_ROUNDS)]
        rounds: u32,
        #[arg(short, long, default_value_t = CLASSIC_DOORS)]
        doors: usize,
        #[arg(long)]
        seed: Option<u64>,
        /// Rounds between progress lines
        #[arg(long, default_value_t = DEFAULT_CHUNK_SIZE)]
        chunk_size: u32,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
}
