//! Resilient CSV reading with encoding fallback
//!
//! This module opens one monthly trip export and parses it into an in-memory
//! table. Files are decoded as UTF-8 first; byte sequences invalid under
//! UTF-8 are retried with Windows-1252, the encoding older export tooling
//! produced. No other encodings are attempted. Every failure mode (missing
//! file, undecodable bytes, malformed delimited data) surfaces as
//! [`Error::UnreadableFile`] so callers can skip the file and continue with
//! its siblings.

use std::borrow::Cow;
use std::fs;
use std::path::{Path, PathBuf};

use encoding_rs::WINDOWS_1252;
use tracing::{debug, info};

use crate::{Error, Result};

/// Text encoding that successfully decoded a trip export
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableEncoding {
    /// Primary encoding
    Utf8,
    /// Fallback for legacy exports
    Windows1252,
}

impl TableEncoding {
    /// Human-readable encoding name for diagnostics
    pub fn label(&self) -> &'static str {
        match self {
            TableEncoding::Utf8 => "utf-8",
            TableEncoding::Windows1252 => "windows-1252",
        }
    }
}

/// Decoded tabular content of one trip export
///
/// The header row is kept separately and excluded from all row counts.
#[derive(Debug, Clone)]
pub struct TripTable {
    path: PathBuf,
    headers: csv::StringRecord,
    rows: Vec<csv::StringRecord>,
    encoding: TableEncoding,
}

impl TripTable {
    /// Number of data rows (header excluded)
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Encoding that succeeded for this file
    pub fn encoding(&self) -> TableEncoding {
        self.encoding
    }

    /// Column header record
    pub fn headers(&self) -> &csv::StringRecord {
        &self.headers
    }

    /// Data rows in file order
    pub fn rows(&self) -> &[csv::StringRecord] {
        &self.rows
    }

    /// Source path the table was read from
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Look up a column by exact header name (case- and space-sensitive)
    pub fn column_index(&self, name: &str) -> Result<usize> {
        self.headers
            .iter()
            .position(|header| header == name)
            .ok_or_else(|| Error::field_not_found(name, &self.path))
    }
}

/// Read one trip export, trying UTF-8 first and Windows-1252 on failure
///
/// The file handle is scoped to the byte read and released before decoding
/// begins, whatever the outcome of the fallback attempts.
pub fn read_trip_table(path: &Path) -> Result<TripTable> {
    let bytes =
        fs::read(path).map_err(|e| Error::unreadable_file(path, format!("read failed: {}", e)))?;

    let (text, encoding) = decode(&bytes, path);
    let (headers, rows) = parse_rows(path, &text)?;

    info!(
        "Read {} as {}: {} data rows",
        path.display(),
        encoding.label(),
        rows.len()
    );

    Ok(TripTable {
        path: path.to_path_buf(),
        headers,
        rows,
        encoding,
    })
}

/// Decode file bytes, falling back to Windows-1252 on invalid UTF-8
///
/// Windows-1252 assigns a character to every byte value, so the fallback
/// itself cannot fail; malformed tables are still caught by the CSV parse.
fn decode<'a>(bytes: &'a [u8], path: &Path) -> (Cow<'a, str>, TableEncoding) {
    match std::str::from_utf8(bytes) {
        Ok(text) => (Cow::Borrowed(text), TableEncoding::Utf8),
        Err(utf8_error) => {
            debug!(
                "UTF-8 decode failed for {} ({}), retrying as windows-1252",
                path.display(),
                utf8_error
            );
            let (decoded, _, _) = WINDOWS_1252.decode(bytes);
            (decoded, TableEncoding::Windows1252)
        }
    }
}

/// Parse decoded text as comma-delimited data with a mandatory header row
fn parse_rows(path: &Path, text: &str) -> Result<(csv::StringRecord, Vec<csv::StringRecord>)> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(text.as_bytes());

    let headers = reader
        .headers()
        .map_err(|e| Error::unreadable_file(path, format!("failed to read CSV header: {}", e)))?
        .clone();

    if headers.is_empty() {
        return Err(Error::unreadable_file(path, "missing header row"));
    }

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record
            .map_err(|e| Error::unreadable_file(path, format!("malformed CSV record: {}", e)))?;
        rows.push(record);
    }

    Ok((headers, rows))
}
