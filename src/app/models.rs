//! Data models for ridership processing
//!
//! This module contains the core data structures for representing discovered
//! trip files, aggregated monthly counts, and per-station statistics.

use serde::Serialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::constants::month_label;

// =============================================================================
// Discovered Trip Files
// =============================================================================

/// One discovered monthly trip export
///
/// Produced by the directory scanner, read once by the aggregator, then
/// discarded. The month token is parsed from filenames following the
/// `<prefix>-<MM>.csv` convention.
#[derive(Debug, Clone)]
pub struct TripFile {
    /// Year directory the file was discovered in
    pub year: String,

    /// Two-digit month token from the filename, if it follows the convention
    pub month: Option<String>,

    /// Base filename without path
    pub filename: String,

    /// Full path to the CSV file
    pub path: PathBuf,
}

impl TripFile {
    /// Get the aggregation key for this file, if the month token is known
    pub fn month_label(&self) -> Option<String> {
        self.month.as_deref().map(|m| month_label(m, &self.year))
    }
}

// =============================================================================
// Monthly Aggregation Results
// =============================================================================

/// A file omitted during multi-file aggregation, with the reason
#[derive(Debug, Clone, Serialize)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub reason: String,
}

/// Ordered mapping of month label to trip count
///
/// Keys are unique per (year, month) and iterate sorted ascending
/// lexicographically by label, which is chronological within a year because
/// month tokens are zero-padded. Files that could not be read are recorded in
/// `skipped` rather than failing the whole aggregation.
#[derive(Debug, Clone, Default, Serialize)]
pub struct MonthlySummary {
    /// Trip counts keyed by `"Month {MM} Year {YYYY}"` (or by path for
    /// single-file counts)
    pub counts: BTreeMap<String, usize>,

    /// Files skipped during aggregation, with reasons
    pub skipped: Vec<SkippedFile>,
}

impl MonthlySummary {
    /// Create an empty summary
    pub fn new() -> Self {
        Self::default()
    }

    /// Total trips across all aggregated months
    pub fn total_trips(&self) -> usize {
        self.counts.values().sum()
    }

    /// Whether no file was successfully aggregated
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Record a file that could not be aggregated
    pub fn record_skip(&mut self, path: impl Into<PathBuf>, reason: impl Into<String>) {
        self.skipped.push(SkippedFile {
            path: path.into(),
            reason: reason.into(),
        });
    }
}

// =============================================================================
// Station Analysis
// =============================================================================

/// Explicit configuration for a station analysis
///
/// The caller supplies both the station identifier and the source file; there
/// is no embedded default pointing at a particular dataset snapshot.
#[derive(Debug, Clone)]
pub struct StationQuery {
    /// Station identifier, compared against the id columns as trimmed text
    pub station_id: String,

    /// Monthly export to analyze
    pub source_path: PathBuf,
}

impl StationQuery {
    pub fn new(station_id: impl Into<String>, source_path: impl Into<PathBuf>) -> Self {
        Self {
            station_id: station_id.into(),
            source_path: source_path.into(),
        }
    }

    pub fn source_path(&self) -> &Path {
        &self.source_path
    }
}

/// One destination reached from the queried station
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Destination {
    /// End station name
    pub name: String,

    /// Number of trips from the queried station ending here
    pub trips: usize,
}

/// Per-station trip statistics for one monthly export
///
/// Computed fresh per call; not persisted.
#[derive(Debug, Clone, Serialize)]
pub struct StationStats {
    /// Station identifier the analysis was run for (trimmed)
    pub station_id: String,

    /// Start-station name of the first matching row, or `"Unknown"` when no
    /// trip starts at the station
    pub station_name: String,

    /// Trips that start or end at the station (a round trip counts once)
    pub total_trips: usize,

    /// Trips starting at the station
    pub trips_starting: usize,

    /// Trips ending at the station
    pub trips_ending: usize,

    /// Most common destinations for trips starting at the station, descending
    /// by count with alphabetical tie-break, at most five entries
    pub top_destinations: Vec<Destination>,
}
