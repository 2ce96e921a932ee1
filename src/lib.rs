//! Ridership Processor Library
//!
//! A Rust library for counting bike share trips from monthly CSV ridership
//! exports and deriving simple per-station statistics.
//!
//! This library provides tools for:
//! - Discovering monthly trip exports under a `data/<year>/` layout
//! - Reading CSV files with UTF-8 decoding and Windows-1252 fallback
//! - Aggregating per-month trip counts into an ordered mapping
//! - Computing start/end trip counts and top destinations for a station
//! - Comprehensive error handling with per-file skip-and-continue

pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod csv_reader;
        pub mod monthly_aggregator;
        pub mod station_analyzer;
        pub mod trip_scanner;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{MonthlySummary, StationQuery, StationStats};

/// Result type alias for the ridership processor
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for ridership processing operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Year directory absent under the data root
    #[error("Directory not found: {}", .path.display())]
    DirectoryNotFound { path: std::path::PathBuf },

    /// File could not be decoded or parsed as a delimited table
    #[error("Unreadable file '{}': {reason}", .path.display())]
    UnreadableFile {
        path: std::path::PathBuf,
        reason: String,
    },

    /// Expected column absent from the table schema
    #[error("Field '{field}' not found in '{}'", .path.display())]
    FieldNotFound {
        field: String,
        path: std::path::PathBuf,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a directory not found error
    pub fn directory_not_found(path: impl Into<std::path::PathBuf>) -> Self {
        Self::DirectoryNotFound { path: path.into() }
    }

    /// Create an unreadable file error with the failure cause
    pub fn unreadable_file(path: impl Into<std::path::PathBuf>, reason: impl Into<String>) -> Self {
        Self::UnreadableFile {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a missing field error
    pub fn field_not_found(field: impl Into<String>, path: impl Into<std::path::PathBuf>) -> Self {
        Self::FieldNotFound {
            field: field.into(),
            path: path.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}
