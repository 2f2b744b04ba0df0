//! Error types for azmar-parser
//!
//! Loaders surface read failures as distinct variants so callers can tell a
//! missing file from a missing sheet. Extractors never fail.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// azmar-parser error types
#[derive(Error, Debug)]
pub enum Error {
    /// Input file does not exist
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// Requested sheet is absent from the workbook
    #[error("Sheet not found: '{sheet}'\nAvailable sheets: {}", .available.join(", "))]
    SheetNotFound {
        /// Sheet name that was requested
        sheet: String,
        /// Sheet names present in the workbook
        available: Vec<String>,
    },

    /// Row width disagrees with the header under the active ragged-row policy
    #[error("Ragged row at line {line}: expected {expected} fields, saw {found}")]
    RaggedRow {
        /// 1-based line number in the source file
        line: u64,
        /// Number of header columns
        expected: usize,
        /// Number of fields on the offending row
        found: usize,
    },

    /// Nothing left to build a header from
    #[error("Empty table: {0}")]
    EmptyTable(String),

    /// Workbook could not be opened or parsed
    #[error("Spreadsheet error: {0}")]
    Spreadsheet(#[from] calamine::Error),

    /// Delimited text could not be read
    #[error("Delimited text error: {0}")]
    Delimited(#[from] csv::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Arrow error (table assembly)
    #[error("Arrow error: {0}")]
    Arrow(#[from] arrow::error::ArrowError),
}

impl Error {
    /// Map an open failure on `path` to [`Error::FileNotFound`] when the
    /// path is missing, or [`Error::Io`] otherwise.
    pub(crate) fn from_open(path: &std::path::Path, err: std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::NotFound {
            Self::FileNotFound(path.to_path_buf())
        } else {
            Self::Io(err)
        }
    }
}
