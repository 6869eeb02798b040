//! Command-line interface for skyledger.
//!
//! This module provides the CLI structure for the `skyledg` binary. There
//! are no subcommands: the default action runs the interactive reservation
//! menu over stdin/stdout.

use std::path::PathBuf;

use clap::Parser;

/// skyledg - Airline reservation ledger
///
/// An interactive menu for booking, cancelling, modifying, and listing
/// reservations over a fixed flight catalog, persisted to a flat file.
#[derive(Debug, Parser)]
#[command(name = "skyledg")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to custom configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Path to the reservation data file (overrides configuration)
    #[arg(short, long, value_name = "FILE")]
    pub data_file: Option<PathBuf>,

    /// Print the stored reservations as JSON and exit
    #[arg(long)]
    pub dump: bool,

    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Get the verbosity level based on flags.
    #[must_use]
    pub fn verbosity(&self) -> crate::logging::Verbosity {
        if self.quiet {
            crate::logging::Verbosity::Quiet
        } else {
            match self.verbose {
                0 => crate::logging::Verbosity::Normal,
                1 => crate::logging::Verbosity::Verbose,
                _ => crate::logging::Verbosity::Trace,
            }
        }
    }
}
