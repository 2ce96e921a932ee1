//! Per-month trip count aggregation
//!
//! This module walks the discovered exports of one year and records the data
//! row count of each under its `"Month {MM} Year {YYYY}"` label. A file that
//! cannot be read is logged, recorded in the skip ledger, and does not abort
//! the remaining files. The single-file counter shares the same resilient
//! reader, so encoding fallback applies uniformly at every read site.

use std::path::Path;

use tracing::{info, warn};

use crate::app::models::MonthlySummary;
use crate::app::services::{csv_reader, trip_scanner};
use crate::constants::month_label;
use crate::Result;

/// Aggregate per-month trip counts for one year
///
/// Propagates [`crate::Error::DirectoryNotFound`] when the year directory is
/// absent. Per-file failures are recorded in the returned summary's skip
/// ledger instead of failing the call; zero readable files yields an empty
/// mapping and a logged notice, not an error.
pub fn aggregate_year(data_root: &Path, year: &str) -> Result<MonthlySummary> {
    let files = trip_scanner::scan_year(data_root, year)?;

    let mut summary = MonthlySummary::new();
    for file in &files {
        let Some(month) = file.month.as_deref() else {
            warn!(
                "Skipping '{}': filename does not follow '<prefix>-<MM>.csv'",
                file.filename
            );
            summary.record_skip(&file.path, "filename does not follow '<prefix>-<MM>.csv'");
            continue;
        };

        match csv_reader::read_trip_table(&file.path) {
            Ok(table) => {
                let trip_count = table.row_count();
                info!("Successfully read month {}: {} trips", month, trip_count);
                summary.counts.insert(month_label(month, year), trip_count);
            }
            Err(error) => {
                warn!("Error reading {}: {}", file.filename, error);
                summary.record_skip(&file.path, error.to_string());
            }
        }
    }

    if summary.is_empty() {
        info!("No CSV files were found or could be read for year {}", year);
    }

    Ok(summary)
}

/// Count the data rows of one explicit export
///
/// Returns a single-entry mapping from the path to its row count. Errors
/// propagate to the caller; there is no skip-and-continue in this path.
pub fn count_single_month(path: &Path) -> Result<MonthlySummary> {
    let table = csv_reader::read_trip_table(path)?;

    let mut summary = MonthlySummary::new();
    summary
        .counts
        .insert(path.display().to_string(), table.row_count());
    Ok(summary)
}
