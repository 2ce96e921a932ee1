//! Station command implementation
//!
//! Analyzes one station against one monthly export and reports trip counts
//! and top destinations in human-readable or JSON form.

use std::time::Instant;

use colored::*;
use tracing::{debug, info};

use super::shared;
use crate::app::models::StationStats;
use crate::app::services::station_analyzer;
use crate::cli::args::{OutputFormat, StationArgs};
use crate::Result;

/// Station command runner
pub fn run_station(args: StationArgs) -> Result<()> {
    shared::setup_logging(args.get_log_level())?;

    info!("Starting station analysis");
    debug!("Station arguments: {:?}", args);

    args.validate()?;

    let start_time = Instant::now();

    let stats = station_analyzer::analyze_station(&args.to_query())?;

    match args.output_format {
        OutputFormat::Human => {
            println!("{}", render_station_report(&stats));
        }
        OutputFormat::Json => {
            println!("{}", shared::to_json(&stats)?);
        }
    }

    info!(
        "Station analysis completed in {:.2}s",
        start_time.elapsed().as_secs_f64()
    );

    Ok(())
}

/// Render the human-readable station report
fn render_station_report(stats: &StationStats) -> String {
    let heading = format!(
        "Analysis for Station {} ({})",
        stats.station_id, stats.station_name
    );

    let mut output = format!("{}\n", heading.bright_green().bold());
    output.push_str(&format!(
        "Total trips: {}\n",
        shared::format_count(stats.total_trips)
    ));
    output.push_str(&format!(
        "Trips starting at station: {}\n",
        shared::format_count(stats.trips_starting)
    ));
    output.push_str(&format!(
        "Trips ending at station: {}\n",
        shared::format_count(stats.trips_ending)
    ));

    if !stats.top_destinations.is_empty() {
        output.push_str(&format!(
            "\n{}\n",
            "Top 5 destinations from this station:".bright_white()
        ));
        for destination in &stats.top_destinations {
            output.push_str(&format!(
                "  {}: {} trips\n",
                destination.name.bright_cyan(),
                shared::format_count(destination.trips)
            ));
        }
    }

    output
}
