//! Directory scanning for monthly trip exports
//!
//! This module lists the CSV files of one year directory in deterministic
//! (sorted) order, and discovers which year directories exist under the data
//! root. The expected layout is `<data_root>/<YYYY>/<description>-<MM>.csv`,
//! one file per month.

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::app::models::TripFile;
use crate::constants::CSV_EXTENSION;
use crate::{Error, Result};

/// List the CSV files of one year directory, sorted by filename
///
/// Fails with [`Error::DirectoryNotFound`] when `<data_root>/<year>` does not
/// exist; no partial results are produced in that case. Sorting is
/// lexicographic, which is chronological when month tokens are zero-padded.
pub fn scan_year(data_root: &Path, year: &str) -> Result<Vec<TripFile>> {
    let year_dir = data_root.join(year);
    if !year_dir.is_dir() {
        return Err(Error::directory_not_found(year_dir));
    }

    debug!("Looking for CSV files in: {}", year_dir.display());

    let mut files = Vec::new();
    for entry in fs::read_dir(&year_dir)
        .map_err(|e| Error::io(format!("failed to read directory {}", year_dir.display()), e))?
    {
        let entry = entry.map_err(|e| Error::io("failed to read directory entry", e))?;
        let path = entry.path();

        if !path.is_file() || path.extension().is_none_or(|ext| ext != CSV_EXTENSION) {
            continue;
        }

        let filename = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .into_owned();

        files.push(TripFile {
            year: year.to_string(),
            month: month_token(&filename),
            filename,
            path,
        });
    }

    // Sort by filename for deterministic month ordering
    files.sort_by(|a, b| a.filename.cmp(&b.filename));

    info!("Discovered {} CSV files for year {}", files.len(), year);
    Ok(files)
}

/// List the year directories available under the data root, sorted
pub fn discover_years(data_root: &Path) -> Result<Vec<String>> {
    if !data_root.is_dir() {
        return Err(Error::directory_not_found(data_root));
    }

    let mut years = Vec::new();
    for entry in fs::read_dir(data_root).map_err(|e| {
        Error::io(
            format!("failed to read data root {}", data_root.display()),
            e,
        )
    })? {
        let entry = entry.map_err(|e| Error::io("failed to read directory entry", e))?;
        let path = entry.path();

        if path.is_dir() {
            if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                years.push(name.to_string());
            }
        }
    }

    years.sort();
    Ok(years)
}

/// Extract the month token from a filename following `<prefix>-<MM>.csv`
///
/// Takes the second `-`-separated segment up to (excluding) the extension.
/// Returns `None` when the filename does not follow the convention; callers
/// skip such files and record the reason.
pub fn month_token(filename: &str) -> Option<String> {
    let segment = filename.split('-').nth(1)?;
    let token = segment.split('.').next().unwrap_or(segment);
    if token.is_empty() {
        None
    } else {
        Some(token.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_month_token_extraction() {
        assert_eq!(
            month_token("Bike share ridership 2024-09.csv"),
            Some("09".to_string())
        );
        assert_eq!(month_token("2024-02.csv"), Some("02".to_string()));
        assert_eq!(month_token("trips-11.csv"), Some("11".to_string()));
        assert_eq!(month_token("no_separator.csv"), None);
        assert_eq!(month_token("trailing-.csv"), None);
    }

    #[test]
    fn test_missing_year_directory() {
        let temp_dir = TempDir::new().unwrap();

        let err = scan_year(temp_dir.path(), "1999").unwrap_err();
        assert!(matches!(err, Error::DirectoryNotFound { .. }));
    }

    #[test]
    fn test_filters_non_csv_files() {
        let temp_dir = TempDir::new().unwrap();
        let year_dir = temp_dir.path().join("2024");
        fs::create_dir_all(&year_dir).unwrap();
        fs::write(year_dir.join("ridership 2024-01.csv"), "h\n1\n").unwrap();
        fs::write(year_dir.join("readme.txt"), "not data").unwrap();
        fs::write(year_dir.join("notes-02.md"), "not data").unwrap();

        let files = scan_year(temp_dir.path(), "2024").unwrap();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].filename, "ridership 2024-01.csv");
        assert_eq!(files[0].month.as_deref(), Some("01"));
        assert_eq!(files[0].year, "2024");
    }

    #[test]
    fn test_files_sorted_by_name() {
        let temp_dir = TempDir::new().unwrap();
        let year_dir = temp_dir.path().join("2024");
        fs::create_dir_all(&year_dir).unwrap();
        for name in ["trips-03.csv", "trips-01.csv", "trips-02.csv"] {
            fs::write(year_dir.join(name), "h\n").unwrap();
        }

        let files = scan_year(temp_dir.path(), "2024").unwrap();
        let names: Vec<&str> = files.iter().map(|f| f.filename.as_str()).collect();
        assert_eq!(names, vec!["trips-01.csv", "trips-02.csv", "trips-03.csv"]);
    }

    #[test]
    fn test_discover_years() {
        let temp_dir = TempDir::new().unwrap();
        for year in ["2021", "2019", "2020"] {
            fs::create_dir_all(temp_dir.path().join(year)).unwrap();
        }
        fs::write(temp_dir.path().join("stray.csv"), "not a year dir").unwrap();

        let years = discover_years(temp_dir.path()).unwrap();
        assert_eq!(years, vec!["2019", "2020", "2021"]);
    }

    #[test]
    fn test_discover_years_missing_root() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("nope");

        let err = discover_years(&missing).unwrap_err();
        assert!(matches!(err, Error::DirectoryNotFound { .. }));
    }
}
