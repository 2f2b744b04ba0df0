//! Spreadsheet loader (xlsx/xlsm/xlsb/xls/ods via calamine)

use super::options::SpreadsheetOptions;
use crate::table::{Cell, Table};
use crate::{Error, Result};
use calamine::{open_workbook_auto, Data, Reader};
use std::path::Path;
use tracing::{debug, info};

/// Load one sheet of a workbook into a [`Table`].
///
/// The first `skip_rows` physical rows of the sheet are discarded, the next
/// non-blank row becomes the header, and every later non-blank row is data.
/// A row is blank only when none of its cells hold anything; rows of error
/// cells are kept as nulls. Columns count from `A`, so leading empty
/// columns come through as unnamed all-null columns.
///
/// # Errors
/// - [`Error::FileNotFound`] if `path` does not exist
/// - [`Error::SheetNotFound`] if the workbook has no sheet with that name
/// - [`Error::Spreadsheet`] if the workbook cannot be parsed
/// - [`Error::EmptyTable`] if no header row remains after skipping
pub fn load_spreadsheet<P: AsRef<Path>>(path: P, options: &SpreadsheetOptions) -> Result<Table> {
    let path = path.as_ref();
    std::fs::metadata(path).map_err(|e| Error::from_open(path, e))?;

    let mut workbook = open_workbook_auto(path)?;
    let available = workbook.sheet_names();
    if !available.iter().any(|name| name == options.sheet()) {
        return Err(Error::SheetNotFound {
            sheet: options.sheet().to_string(),
            available,
        });
    }

    let range = workbook.worksheet_range(options.sheet())?;
    let Some((first_row, first_col)) = range.start() else {
        return Err(Error::EmptyTable(format!(
            "sheet '{}' has no cells",
            options.sheet()
        )));
    };

    // calamine ranges begin at the first non-empty cell; skipping counts
    // physical rows from the top of the sheet.
    let leading_blank = usize::try_from(first_row).unwrap_or(usize::MAX);
    let skip_in_range = options.skip_rows().saturating_sub(leading_blank);
    let leading_cols = usize::try_from(first_col).unwrap_or(0);
    debug!(
        sheet = options.sheet(),
        first_row,
        first_col,
        skip_in_range,
        "Skipping sheet preamble"
    );

    let mut rows = range
        .rows()
        .skip(skip_in_range)
        .filter(|row| !row.iter().all(|data| matches!(data, Data::Empty)))
        .map(|row| {
            std::iter::repeat(Cell::Empty)
                .take(leading_cols)
                .chain(row.iter().map(to_cell))
                .collect::<Vec<_>>()
        });

    let header = rows.next().ok_or_else(|| {
        Error::EmptyTable(format!(
            "sheet '{}' has no header row after skipping {} rows",
            options.sheet(),
            options.skip_rows()
        ))
    })?;
    let data: Vec<Vec<Cell>> = rows.collect();

    let table = Table::from_rows(&header, &data)?;
    info!(
        path = %path.display(),
        sheet = options.sheet(),
        rows = table.num_rows(),
        columns = table.num_columns(),
        "Loaded spreadsheet"
    );
    Ok(table)
}

fn to_cell(data: &Data) -> Cell {
    match data {
        Data::Int(v) => Cell::Int(*v),
        Data::Float(v) => Cell::from_number(*v),
        Data::Bool(v) => Cell::Bool(*v),
        Data::String(s) if s.is_empty() => Cell::Empty,
        Data::String(s) | Data::DateTimeIso(s) | Data::DurationIso(s) => Cell::Text(s.clone()),
        Data::DateTime(dt) => {
            if dt.is_duration() {
                Cell::Float(dt.as_f64())
            } else {
                dt.as_datetime()
                    .map_or_else(|| Cell::Float(dt.as_f64()), Cell::from_datetime)
            }
        }
        Data::Error(_) | Data::Empty => Cell::Empty,
    }
}
