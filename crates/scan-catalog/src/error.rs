//! Catalog error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading the disease and symptom tables.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Reading a local table failed.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// HTTP transport error while fetching a remote table.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The remote host answered with a non-success status.
    #[error("fetching {url} returned status {status}")]
    Status { url: String, status: u16 },

    /// The CSV could not be parsed into rows.
    #[error("CSV error in {table} table: {source}")]
    Csv {
        table: &'static str,
        #[source]
        source: csv::Error,
    },

    /// A row parsed but carries unusable values.
    #[error("invalid row {row} in {table} table: {reason}")]
    InvalidRow {
        table: &'static str,
        row: usize,
        reason: String,
    },

    /// A table has a header but no rows.
    #[error("{0} table is empty")]
    Empty(&'static str),
}
