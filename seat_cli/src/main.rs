//! Replay arrivals and departures against a seating venue.
//!
//! The venue layout and the command source come from flags or the
//! environment; the venue is printed after every step.

use anyhow::{Context, Result};
use pico_args::Arguments;
use seat_cli::{
    commands::parse_script,
    config::{CliOverrides, DriverConfig, EventSource},
    driver::{Driver, REFERENCE_SCRIPT, simulate},
    logging,
};
use seating::SeatingManager;
use std::{io, path::PathBuf};
use tracing::info;

const HELP: &str = "\
Replay arrivals and departures against a seating venue

USAGE:
  seat_cli [OPTIONS]

OPTIONS:
  --tables     LIST        Table capacities, comma separated  [default: env SEATING_TABLES or 2,2,3,4,5,6,6]
  --script     PATH        Script of 'in N' / 'out K' / 'show' lines  [default: env SEATING_SCRIPT]
  --simulate   N           Generate N random events instead of a script  [default: env SEATING_SIMULATE]
  --seed       S           Seed for --simulate  [default: env SEATING_SEED or 42]
  --format     FORMAT      Output format: text or json  [default: env SEATING_FORMAT or text]

FLAGS:
  -h, --help               Print help information

ENVIRONMENT:
  RUST_LOG                 Log filter (e.g., debug)
  SEATING_VENUE_NAME       Venue name used in logs
  (A .env file is loaded if present)

Without --script or --simulate the reference scenario is replayed.
";

fn main() -> Result<()> {
    // Load .env file if it exists
    let _ = dotenvy::dotenv();

    let mut pargs = Arguments::from_env();

    // Help has a higher priority and should be handled separately.
    if pargs.contains(["-h", "--help"]) {
        print!("{HELP}");
        std::process::exit(0);
    }

    let overrides = CliOverrides {
        tables: pargs.opt_value_from_str("--tables")?,
        script: pargs.opt_value_from_str::<_, PathBuf>("--script")?,
        simulate: pargs.opt_value_from_str("--simulate")?,
        seed: pargs.opt_value_from_str("--seed")?,
        format: pargs.opt_value_from_str("--format")?,
    };

    let remaining = pargs.finish();
    if !remaining.is_empty() {
        anyhow::bail!("Unexpected arguments: {:?}", remaining);
    }

    logging::init();

    let config = DriverConfig::from_env(overrides).context("Failed to load configuration")?;
    config.validate().context("Invalid configuration")?;

    let manager =
        SeatingManager::from_config(&config.venue).context("Failed to open the venue")?;
    info!(
        "Opened {} with {} table(s), {} seat(s)",
        config.venue.name,
        config.venue.table_capacities.len(),
        config.venue.total_seats()
    );

    let commands = match &config.source {
        EventSource::Reference => {
            info!("Replaying the reference scenario");
            parse_script(REFERENCE_SCRIPT)?
        }
        EventSource::Script(path) => {
            info!("Replaying script {}", path.display());
            let script = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            parse_script(&script).with_context(|| format!("Failed to parse {}", path.display()))?
        }
        EventSource::Simulate { events, seed } => {
            info!("Simulating {} event(s) with seed {}", events, seed);
            simulate(*events, *seed, config.venue.max_capacity() + 1)
        }
    };

    let stdout = io::stdout();
    let mut driver = Driver::new(manager, config.format, stdout.lock());
    driver.run(commands).context("Failed to write output")?;

    let report = driver.into_report();
    info!("Run complete: {}", report);

    Ok(())
}
