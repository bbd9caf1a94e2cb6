//! Unified error type for the shell boundary.
//!
//! The view model itself is total; these errors only come out of argument
//! parsing, configuration loading and terminal I/O.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrackerError {
    #[error("Invalid date (expected YYYY-MM-DD): {0}")]
    InvalidDate(String),

    #[error("Unknown tab: {0} (expected user, admin or reports)")]
    UnknownTab(String),

    #[error("Export format not supported: {0}")]
    InvalidExportFormat(String),

    #[error("Failed to read config {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid config {}: {source}", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type TrackerResult<T> = Result<T, TrackerError>;
