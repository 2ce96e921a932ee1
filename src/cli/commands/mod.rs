//! Command implementations for the ridership processor CLI
//!
//! This module contains the command execution logic and dispatch. Each
//! command is implemented in its own module:
//! - `monthly`: per-year aggregation of monthly trip counts
//! - `count`: row count of one explicit export file
//! - `station`: per-station trip statistics and top destinations

pub mod count;
pub mod monthly;
pub mod shared;
pub mod station;

use crate::cli::args::{Args, Commands};
use crate::Result;

/// Main command runner for the ridership processor
///
/// Dispatches to the appropriate subcommand handler based on CLI args.
pub fn run(args: Args) -> Result<()> {
    match args.get_command() {
        Commands::Monthly(monthly_args) => monthly::run_monthly(monthly_args),
        Commands::Count(count_args) => count::run_count(count_args),
        Commands::Station(station_args) => station::run_station(station_args),
    }
}
