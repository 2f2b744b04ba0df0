//! Tabular loaders
//!
//! Two fixed-purpose entry points read the expedition's inputs:
//!
//! - [`load_artifact_data`]: sheet "Main Chamber" of a workbook, 3-row preamble skipped
//! - [`load_location_notes`]: tab-separated notes, first line is the header
//!
//! Both are thin wrappers over [`load_spreadsheet`] and [`load_delimited`]
//! with default options.

mod delimited;
mod options;
mod spreadsheet;

pub use delimited::{load_delimited, read_delimited};
pub use options::{
    DelimitedOptions, DelimitedOptionsBuilder, RaggedRows, SpreadsheetOptions,
    SpreadsheetOptionsBuilder, ARTIFACT_SHEET, ARTIFACT_SKIP_ROWS,
};
pub use spreadsheet::load_spreadsheet;

use crate::table::Table;
use crate::Result;
use std::path::Path;

/// Load the artifact inventory from the "Main Chamber" sheet.
///
/// The first 3 rows of the sheet are discarded; the row after them is the
/// header.
///
/// # Errors
/// [`Error::FileNotFound`](crate::Error::FileNotFound) if the file is
/// missing, [`Error::SheetNotFound`](crate::Error::SheetNotFound) if the
/// workbook has no "Main Chamber" sheet
pub fn load_artifact_data<P: AsRef<Path>>(path: P) -> Result<Table> {
    load_spreadsheet(path, &SpreadsheetOptions::default())
}

/// Load temple location notes from a tab-separated file.
///
/// Short rows are padded with nulls; rows longer than the header are
/// rejected.
///
/// # Errors
/// [`Error::FileNotFound`](crate::Error::FileNotFound) if the file is
/// missing, [`Error::RaggedRow`](crate::Error::RaggedRow) for an over-long row
pub fn load_location_notes<P: AsRef<Path>>(path: P) -> Result<Table> {
    load_delimited(path, &DelimitedOptions::default())
}
