//! Command-line argument definitions for the ridership processor
//!
//! This module defines the complete CLI interface using the clap derive API.

use crate::app::models::StationQuery;
use crate::constants::DEFAULT_DATA_ROOT;
use crate::{Error, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the bike share ridership processor
///
/// Counts trips from monthly CSV ridership exports and derives simple
/// per-station statistics.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "ridership-processor",
    version,
    about = "Count bike share trips from monthly CSV ridership exports",
    long_about = "Counts bike share trips from monthly CSV ridership exports laid out as \
                  data/<year>/<description>-<MM>.csv. Files are decoded as UTF-8 with a \
                  Windows-1252 fallback for legacy exports; unreadable files are skipped \
                  and reported rather than aborting a whole year."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for the ridership processor
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Aggregate per-month trip counts for a year (default workflow)
    Monthly(MonthlyArgs),
    /// Count the trips of one explicit export file
    Count(CountArgs),
    /// Analyze start/end trips and top destinations for one station
    Station(StationArgs),
}

/// Arguments for the monthly command (per-year aggregation)
#[derive(Debug, Clone, Parser)]
pub struct MonthlyArgs {
    /// Year directory to aggregate under the data root
    ///
    /// Expects one CSV file per month named like
    /// "Bike share ridership 2024-09.csv".
    #[arg(short = 'y', long = "year", value_name = "YYYY")]
    pub year: Option<String>,

    /// Aggregate every year directory discovered under the data root
    #[arg(long = "all-years", conflicts_with = "year")]
    pub all_years: bool,

    /// Root directory holding one subdirectory per year
    #[arg(
        long = "data-root",
        value_name = "PATH",
        default_value = DEFAULT_DATA_ROOT,
        help = "Root directory holding one subdirectory per year"
    )]
    pub data_root: PathBuf,

    /// Output format for results
    #[arg(long = "format", value_enum, default_value = "human")]
    pub output_format: OutputFormat,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output except errors
    #[arg(short = 'q', long = "quiet", conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Arguments for the count command (single-file row count)
#[derive(Debug, Clone, Parser)]
pub struct CountArgs {
    /// Export file to count
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Output format for results
    #[arg(long = "format", value_enum, default_value = "human")]
    pub output_format: OutputFormat,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output except errors
    #[arg(short = 'q', long = "quiet", conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Arguments for the station command (per-station statistics)
#[derive(Debug, Clone, Parser)]
pub struct StationArgs {
    /// Station identifier to analyze
    ///
    /// Compared against the "Start Station Id" and "End Station Id" columns
    /// as trimmed text.
    #[arg(short = 's', long = "station", value_name = "ID")]
    pub station: String,

    /// Monthly export file to analyze
    #[arg(short = 'f', long = "file", value_name = "PATH")]
    pub file: PathBuf,

    /// Output format for the station report
    #[arg(long = "format", value_enum, default_value = "human")]
    pub output_format: OutputFormat,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output except errors
    #[arg(short = 'q', long = "quiet", conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Output format options for results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON format for scripting
    Json,
}

impl Args {
    /// Get the command if one was specified
    pub fn get_command(&self) -> Commands {
        self.command
            .clone()
            .expect("Command should be present when get_command() is called")
    }
}

impl MonthlyArgs {
    /// Validate the monthly command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if self.year.is_none() && !self.all_years {
            return Err(Error::configuration(
                "Either --year or --all-years is required".to_string(),
            ));
        }

        if let Some(year) = &self.year {
            if year.len() != 4 || !year.chars().all(|c| c.is_ascii_digit()) {
                return Err(Error::configuration(format!(
                    "Invalid year '{}': expected four digits",
                    year
                )));
            }
        }

        if !self.data_root.is_dir() {
            return Err(Error::configuration(format!(
                "Data root is not a directory: {}",
                self.data_root.display()
            )));
        }

        Ok(())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        log_level(self.verbose, self.quiet)
    }
}

impl CountArgs {
    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        log_level(self.verbose, self.quiet)
    }
}

impl StationArgs {
    /// Validate the station command arguments for consistency
    ///
    /// The export file's existence is deliberately not checked here: a
    /// missing file surfaces as `UnreadableFile` from the reader.
    pub fn validate(&self) -> Result<()> {
        if self.station.trim().is_empty() {
            return Err(Error::configuration(
                "Station id cannot be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Build the station query from the validated arguments
    pub fn to_query(&self) -> StationQuery {
        StationQuery::new(self.station.clone(), self.file.clone())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        log_level(self.verbose, self.quiet)
    }
}

fn log_level(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn monthly_args(year: Option<&str>, data_root: PathBuf) -> MonthlyArgs {
        MonthlyArgs {
            year: year.map(|y| y.to_string()),
            all_years: false,
            data_root,
            output_format: OutputFormat::Human,
            verbose: 0,
            quiet: false,
        }
    }

    #[test]
    fn test_monthly_args_validation() {
        let temp_dir = TempDir::new().unwrap();

        let args = monthly_args(Some("2024"), temp_dir.path().to_path_buf());
        assert!(args.validate().is_ok());

        // Neither year nor all-years
        let args = monthly_args(None, temp_dir.path().to_path_buf());
        assert!(args.validate().is_err());

        // All-years alone is valid
        let mut args = monthly_args(None, temp_dir.path().to_path_buf());
        args.all_years = true;
        assert!(args.validate().is_ok());

        // Malformed years
        for bad in ["24", "20244", "2o24", ""] {
            let args = monthly_args(Some(bad), temp_dir.path().to_path_buf());
            assert!(args.validate().is_err(), "year '{}' should fail", bad);
        }

        // Nonexistent data root
        let args = monthly_args(Some("2024"), PathBuf::from("/nonexistent/data"));
        assert!(args.validate().is_err());
    }

    #[test]
    fn test_station_args_validation() {
        let args = StationArgs {
            station: "7041".to_string(),
            file: PathBuf::from("trips.csv"),
            output_format: OutputFormat::Human,
            verbose: 0,
            quiet: false,
        };
        assert!(args.validate().is_ok());

        let query = args.to_query();
        assert_eq!(query.station_id, "7041");
        assert_eq!(query.source_path, PathBuf::from("trips.csv"));

        let mut blank = args.clone();
        blank.station = "   ".to_string();
        assert!(blank.validate().is_err());
    }

    #[test]
    fn test_log_level() {
        assert_eq!(log_level(0, false), "warn");
        assert_eq!(log_level(1, false), "info");
        assert_eq!(log_level(2, false), "debug");
        assert_eq!(log_level(3, false), "trace");
        assert_eq!(log_level(2, true), "error");
    }
}
