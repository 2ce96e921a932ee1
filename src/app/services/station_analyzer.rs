//! Per-station trip statistics for one monthly export
//!
//! This module computes, in a single pass over one export's rows, how many
//! trips start at, end at, or touch a given station, and the most common
//! destinations of trips leaving it. Station ids are compared as trimmed
//! text on both sides; the export's id column may carry numeric or padded
//! values depending on the tooling that produced it.

use std::collections::HashMap;

use crate::app::models::{Destination, StationQuery, StationStats};
use crate::app::services::csv_reader;
use crate::constants::{columns, TOP_DESTINATION_COUNT, UNKNOWN_STATION_NAME};
use crate::Result;

/// Analyze one station against one monthly export
///
/// Propagates [`crate::Error::UnreadableFile`] when the export is missing or
/// malformed and [`crate::Error::FieldNotFound`] when a required column is
/// absent. A trip that starts and ends at the station counts once toward
/// `total_trips`.
pub fn analyze_station(query: &StationQuery) -> Result<StationStats> {
    let table = csv_reader::read_trip_table(query.source_path())?;

    let start_id_col = table.column_index(columns::START_STATION_ID)?;
    let end_id_col = table.column_index(columns::END_STATION_ID)?;
    let start_name_col = table.column_index(columns::START_STATION_NAME)?;
    let end_name_col = table.column_index(columns::END_STATION_NAME)?;

    let station_id = query.station_id.trim();

    let mut trips_starting = 0;
    let mut trips_ending = 0;
    let mut total_trips = 0;
    let mut first_match_name: Option<String> = None;
    let mut destination_counts: HashMap<String, usize> = HashMap::new();

    for row in table.rows() {
        let starts_here = field(row, start_id_col).trim() == station_id;
        let ends_here = field(row, end_id_col).trim() == station_id;

        if starts_here {
            trips_starting += 1;
            *destination_counts
                .entry(field(row, end_name_col).to_string())
                .or_insert(0) += 1;
        }
        if ends_here {
            trips_ending += 1;
        }
        if starts_here || ends_here {
            total_trips += 1;
            if first_match_name.is_none() {
                first_match_name = Some(field(row, start_name_col).to_string());
            }
        }
    }

    // The name is only trusted when at least one trip starts at the station
    let station_name = if trips_starting > 0 {
        first_match_name.unwrap_or_else(|| UNKNOWN_STATION_NAME.to_string())
    } else {
        UNKNOWN_STATION_NAME.to_string()
    };

    Ok(StationStats {
        station_id: station_id.to_string(),
        station_name,
        total_trips,
        trips_starting,
        trips_ending,
        top_destinations: top_destinations(destination_counts),
    })
}

/// Rank destinations descending by count, alphabetical on ties, keep five
fn top_destinations(counts: HashMap<String, usize>) -> Vec<Destination> {
    let mut destinations: Vec<Destination> = counts
        .into_iter()
        .map(|(name, trips)| Destination { name, trips })
        .collect();

    destinations.sort_by(|a, b| b.trips.cmp(&a.trips).then_with(|| a.name.cmp(&b.name)));
    destinations.truncate(TOP_DESTINATION_COUNT);
    destinations
}

fn field(row: &csv::StringRecord, index: usize) -> &str {
    row.get(index).unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    const HEADER: &str = "Trip Id,Trip Duration,Start Station Id,Start Station Name,End Station Id,End Station Name\n";

    fn write_fixture(rows: &[(&str, &str, &str, &str)]) -> (TempDir, PathBuf) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("ridership-09.csv");

        let mut content = String::from(HEADER);
        for (i, (start_id, start_name, end_id, end_name)) in rows.iter().enumerate() {
            content.push_str(&format!(
                "{},600,{},{},{},{}\n",
                i + 1,
                start_id,
                start_name,
                end_id,
                end_name
            ));
        }
        fs::write(&path, content).unwrap();
        (temp_dir, path)
    }

    #[test]
    fn test_counts_starts_ends_and_overlap() {
        // 10 starts, 4 ends, 1 of them both starts and ends at the station
        let mut rows: Vec<(&str, &str, &str, &str)> = Vec::new();
        for _ in 0..9 {
            rows.push(("7041", "College St", "7100", "King St"));
        }
        rows.push(("7041", "College St", "7041", "College St")); // round trip
        for _ in 0..3 {
            rows.push(("7200", "Queen St", "7041", "College St"));
        }
        rows.push(("7300", "Front St", "7301", "Spadina Ave")); // unrelated

        let (_temp_dir, path) = write_fixture(&rows);
        let stats = analyze_station(&StationQuery::new("7041", &path)).unwrap();

        assert_eq!(stats.trips_starting, 10);
        assert_eq!(stats.trips_ending, 4);
        assert_eq!(stats.total_trips, 13);
        assert!(stats.total_trips <= stats.trips_starting + stats.trips_ending);
        assert_eq!(stats.station_name, "College St");
    }

    #[test]
    fn test_station_name_unknown_when_no_trip_starts_there() {
        let rows = vec![
            ("7100", "King St", "7041", "College St"),
            ("7200", "Queen St", "7041", "College St"),
        ];

        let (_temp_dir, path) = write_fixture(&rows);
        let stats = analyze_station(&StationQuery::new("7041", &path)).unwrap();

        assert_eq!(stats.trips_starting, 0);
        assert_eq!(stats.trips_ending, 2);
        assert_eq!(stats.total_trips, 2);
        assert_eq!(stats.station_name, "Unknown");
        assert!(stats.top_destinations.is_empty());
    }

    #[test]
    fn test_top_destinations_ranked_with_alphabetical_tie_break() {
        let mut rows: Vec<(&str, &str, &str, &str)> = Vec::new();
        for _ in 0..4 {
            rows.push(("7041", "College St", "7100", "King St"));
        }
        for _ in 0..2 {
            rows.push(("7041", "College St", "7200", "Queen St"));
        }
        // Two destinations tied at 2 trips: alphabetical order breaks the tie
        for _ in 0..2 {
            rows.push(("7041", "College St", "7300", "Bay St"));
        }
        rows.push(("7041", "College St", "7400", "Front St"));
        rows.push(("7041", "College St", "7500", "Spadina Ave"));
        rows.push(("7041", "College St", "7600", "Yonge St"));

        let (_temp_dir, path) = write_fixture(&rows);
        let stats = analyze_station(&StationQuery::new("7041", &path)).unwrap();

        let ranked: Vec<(&str, usize)> = stats
            .top_destinations
            .iter()
            .map(|d| (d.name.as_str(), d.trips))
            .collect();
        assert_eq!(
            ranked,
            vec![
                ("King St", 4),
                ("Bay St", 2),
                ("Queen St", 2),
                ("Front St", 1),
                ("Spadina Ave", 1),
            ]
        );
        assert_eq!(stats.top_destinations.len(), TOP_DESTINATION_COUNT);
    }

    #[test]
    fn test_station_id_comparison_trims_both_sides() {
        let rows = vec![
            (" 7041 ", "College St", "7100", "King St"),
            ("7041", "College St", "7200", "Queen St"),
        ];

        let (_temp_dir, path) = write_fixture(&rows);
        let stats = analyze_station(&StationQuery::new(" 7041 ", &path)).unwrap();

        assert_eq!(stats.trips_starting, 2);
        assert_eq!(stats.station_id, "7041");
    }

    #[test]
    fn test_missing_column_is_field_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("ridership-09.csv");
        fs::write(&path, "Trip Id,Start Station Id\n1,7041\n").unwrap();

        let err = analyze_station(&StationQuery::new("7041", &path)).unwrap_err();
        assert!(
            matches!(err, Error::FieldNotFound { ref field, .. } if field == "End Station Id")
        );
    }

    #[test]
    fn test_missing_file_is_unreadable() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("absent.csv");

        let err = analyze_station(&StationQuery::new("7041", &path)).unwrap_err();
        assert!(matches!(err, Error::UnreadableFile { .. }));
    }
}
