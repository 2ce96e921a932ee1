//! Count command implementation
//!
//! Counts the data rows of one explicit export file. Uses the same resilient
//! reader as aggregation, so encoding fallback applies here too; errors
//! propagate rather than being skipped.

use std::time::Instant;

use tracing::info;

use super::shared;
use crate::app::services::monthly_aggregator;
use crate::cli::args::{CountArgs, OutputFormat};
use crate::Result;

/// Count command runner
pub fn run_count(args: CountArgs) -> Result<()> {
    shared::setup_logging(args.get_log_level())?;

    info!("Counting trips in {}", args.file.display());

    let start_time = Instant::now();

    let summary = monthly_aggregator::count_single_month(&args.file)?;

    match args.output_format {
        OutputFormat::Human => {
            println!("{}", shared::render_summary_human("Trip count", &summary));
        }
        OutputFormat::Json => {
            println!("{}", shared::to_json(&summary)?);
        }
    }

    info!(
        "Count completed in {:.2}s",
        start_time.elapsed().as_secs_f64()
    );

    Ok(())
}
