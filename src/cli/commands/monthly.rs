//! Monthly command implementation
//!
//! Aggregates per-month trip counts for one year, or for every year
//! discovered under the data root with `--all-years`.

use std::collections::BTreeMap;
use std::time::Instant;

use tracing::{debug, info};

use super::shared;
use crate::app::models::MonthlySummary;
use crate::app::services::{monthly_aggregator, trip_scanner};
use crate::cli::args::{MonthlyArgs, OutputFormat};
use crate::Result;

/// Monthly command runner
pub fn run_monthly(args: MonthlyArgs) -> Result<()> {
    shared::setup_logging(args.get_log_level())?;

    info!("Starting monthly trip aggregation");
    debug!("Monthly arguments: {:?}", args);

    args.validate()?;

    let start_time = Instant::now();

    let years = match &args.year {
        Some(year) => vec![year.clone()],
        None => trip_scanner::discover_years(&args.data_root)?,
    };

    let mut results: BTreeMap<String, MonthlySummary> = BTreeMap::new();
    for year in &years {
        let summary = monthly_aggregator::aggregate_year(&args.data_root, year)?;
        results.insert(year.clone(), summary);
    }

    match args.output_format {
        OutputFormat::Human => {
            for (year, summary) in &results {
                println!(
                    "{}",
                    shared::render_summary_human(
                        &format!("Monthly trip counts for {}", year),
                        summary
                    )
                );
            }
        }
        OutputFormat::Json => {
            println!("{}", shared::to_json(&results)?);
        }
    }

    info!(
        "Aggregation of {} year(s) completed in {:.2}s",
        years.len(),
        start_time.elapsed().as_secs_f64()
    );

    Ok(())
}
