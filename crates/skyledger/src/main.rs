//! `skyledg` - CLI for skyledger
//!
//! This binary runs the interactive airline reservation menu, loading the
//! reservation ledger from its flat file at startup and persisting it after
//! every mutation.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use std::io;

use anyhow::Context;
use clap::Parser;

use skyledger::cli::Cli;
use skyledger::{init_logging, Config, FlightCatalog, ReservationStore, Shell};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    init_logging(cli.verbosity());

    // Load configuration
    let config = Config::load_from(cli.config.clone()).context("loading configuration")?;

    // The CLI data-file flag overrides the configured path
    let data_path = cli.data_file.clone().unwrap_or_else(|| config.data_path());

    let mut store = ReservationStore::open(&data_path, config.storage.max_reservations)
        .with_context(|| format!("opening reservation store at {}", data_path.display()))?;

    if cli.dump {
        println!("{}", serde_json::to_string_pretty(store.reservations())?);
        return Ok(());
    }

    let catalog = FlightCatalog::standard();
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut shell = Shell::new(
        stdin.lock(),
        stdout.lock(),
        &catalog,
        &mut store,
        config.cabin.max_seats,
    );
    shell.run().context("running the reservation shell")?;

    Ok(())
}
