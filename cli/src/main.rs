//! Hotel Simulator Command-Line Runner
//!
//! Loads a room inventory and an order book, runs the month-long simulation
//! and prints the daily statistics.
//!
//! Usage:
//!   hotel-sim
//!   hotel-sim --rooms data/fund.txt --orders data/booking.txt --seed 7
//!   hotel-sim --config sim.json --json > report.json
//!
//! Logs go to stderr; set `RUST_LOG=hotel_simulator_core_rs=debug` to see
//! every event.

mod report;

use hotel_simulator_core_rs::{Orchestrator, SimulationConfig, SimulationError};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use thiserror::Error;
use tracing::{error, info};

const USAGE: &str = "\
usage: hotel-sim [--rooms PATH] [--orders PATH] [--config PATH] [--seed N] [--json]

  --rooms PATH    room inventory (default: fund.txt)
  --orders PATH   order book (default: booking.txt)
  --config PATH   JSON simulation config (default: built-in)
  --seed N        override the config's RNG seed
  --json          print the full report as JSON";

#[derive(Debug, Error)]
enum CliError {
    #[error("{0}\n\n{usage}", usage = USAGE)]
    Usage(String),

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {path}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Simulation(#[from] SimulationError),

    #[error("failed to encode report: {0}")]
    Encode(#[from] serde_json::Error),
}

#[derive(Debug)]
struct Args {
    rooms: PathBuf,
    orders: PathBuf,
    config: Option<PathBuf>,
    seed: Option<u64>,
    json: bool,
}

impl Args {
    fn parse(mut raw: impl Iterator<Item = String>) -> Result<Self, CliError> {
        let mut args = Args {
            rooms: PathBuf::from("fund.txt"),
            orders: PathBuf::from("booking.txt"),
            config: None,
            seed: None,
            json: false,
        };

        while let Some(flag) = raw.next() {
            let mut value = || {
                raw.next()
                    .ok_or_else(|| CliError::Usage(format!("{} needs a value", flag)))
            };

            match flag.as_str() {
                "--rooms" => args.rooms = PathBuf::from(value()?),
                "--orders" => args.orders = PathBuf::from(value()?),
                "--config" => args.config = Some(PathBuf::from(value()?)),
                "--seed" => {
                    let seed = value()?;
                    args.seed = Some(seed.parse().map_err(|_| {
                        CliError::Usage(format!("--seed expects an integer, got {:?}", seed))
                    })?);
                }
                "--json" => args.json = true,
                other => return Err(CliError::Usage(format!("unknown argument {:?}", other))),
            }
        }

        Ok(args)
    }
}

fn read(path: &Path) -> Result<String, CliError> {
    std::fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn load_config(args: &Args) -> Result<SimulationConfig, CliError> {
    let mut config = match &args.config {
        Some(path) => serde_json::from_str(&read(path)?).map_err(|source| CliError::Config {
            path: path.clone(),
            source,
        })?,
        None => SimulationConfig::default(),
    };

    if let Some(seed) = args.seed {
        config.rng_seed = seed;
    }

    Ok(config)
}

fn run(args: Args) -> Result<(), CliError> {
    let config = load_config(&args)?;

    let rooms_text = read(&args.rooms)?;
    let orders_text = read(&args.orders)?;

    info!(
        rooms = %args.rooms.display(),
        orders = %args.orders.display(),
        "loading inventory"
    );

    let mut orchestrator = Orchestrator::from_text(config, &rooms_text, &orders_text)?;
    let report = orchestrator.run()?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", report::render(&report));
    }

    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("hotel_simulator_core_rs=info,warn")),
        )
        .init();

    let result = Args::parse(std::env::args().skip(1)).and_then(run);

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}", err);
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}
