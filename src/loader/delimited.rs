//! Delimited-text loader (TSV by default)

use super::options::{DelimitedOptions, RaggedRows};
use crate::table::{Cell, Table};
use crate::{Error, Result};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info, warn};

/// Load a delimited text file into a [`Table`].
///
/// # Errors
/// - [`Error::FileNotFound`] if `path` does not exist
/// - [`Error::RaggedRow`] if a row violates the ragged-row policy
/// - [`Error::Delimited`] on malformed input (e.g. invalid UTF-8)
/// - [`Error::EmptyTable`] if the file has no header line
pub fn load_delimited<P: AsRef<Path>>(path: P, options: &DelimitedOptions) -> Result<Table> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| Error::from_open(path, e))?;
    debug!(path = %path.display(), delimiter = %char::from(options.delimiter()), "Reading delimited file");

    let table = read_delimited(file, options)?;
    info!(
        path = %path.display(),
        rows = table.num_rows(),
        columns = table.num_columns(),
        "Loaded delimited file"
    );
    Ok(table)
}

/// Parse delimited text from any reader.
///
/// # Errors
/// Same as [`load_delimited`], minus [`Error::FileNotFound`]
pub fn read_delimited<R: Read>(reader: R, options: &DelimitedOptions) -> Result<Table> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(options.delimiter())
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut records = reader.records();
    let header: Vec<Cell> = match records.next() {
        Some(record) => record?.iter().map(header_cell).collect(),
        None => return Err(Error::EmptyTable("no header line".to_string())),
    };
    let width = header.len();

    let mut rows = Vec::new();
    for record in records {
        let record = record?;
        let found = record.len();
        let line = record.position().map_or(0, csv::Position::line);

        if found > width || (found < width && options.ragged_rows() == RaggedRows::Strict) {
            return Err(Error::RaggedRow {
                line,
                expected: width,
                found,
            });
        }
        if found < width {
            warn!(line, expected = width, found, "Padding short row with nulls");
        }

        // Empty lines never reach here; a row of NA markers is kept as nulls
        rows.push(record.iter().map(Cell::parse).collect::<Vec<_>>());
    }

    Table::from_rows(&header, &rows)
}

/// Header fields are names, never values; only blank ones are missing
fn header_cell(field: &str) -> Cell {
    if field.is_empty() {
        Cell::Empty
    } else {
        Cell::Text(field.to_string())
    }
}
