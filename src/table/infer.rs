//! Column type inference
//!
//! Each column gets the narrowest Arrow type that holds all of its
//! non-missing cells: `Int64`, then `Float64`, then `Boolean`, falling back
//! to `Utf8`. A [`Cell::Float`] always makes a column non-integer; the
//! spreadsheet loader turns whole-valued numbers into [`Cell::Int`] itself.

use super::cell::Cell;
use arrow::array::{ArrayRef, BooleanArray, Float64Array, Int64Array, StringArray};
use arrow::datatypes::DataType;
use std::sync::Arc;

/// Decide the Arrow type for a column of cells
#[must_use]
pub fn infer_type(cells: &[Cell]) -> DataType {
    let mut present = cells.iter().filter(|c| !c.is_empty()).peekable();
    if present.peek().is_none() {
        return DataType::Utf8;
    }

    let mut all_int = true;
    let mut all_numeric = true;
    let mut all_bool = true;
    for cell in present {
        match cell {
            Cell::Int(_) => all_bool = false,
            Cell::Float(_) => {
                all_bool = false;
                all_int = false;
            }
            Cell::Bool(_) => {
                all_int = false;
                all_numeric = false;
            }
            Cell::Text(_) => return DataType::Utf8,
            Cell::Empty => {}
        }
    }

    if all_int {
        DataType::Int64
    } else if all_numeric {
        DataType::Float64
    } else if all_bool {
        DataType::Boolean
    } else {
        DataType::Utf8
    }
}

/// Build an Arrow array for a column, inferring its type
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn build_column(cells: &[Cell]) -> (DataType, ArrayRef) {
    let data_type = infer_type(cells);
    let array: ArrayRef = match data_type {
        DataType::Int64 => Arc::new(
            cells
                .iter()
                .map(|c| match c {
                    Cell::Int(v) => Some(*v),
                    _ => None,
                })
                .collect::<Int64Array>(),
        ),
        DataType::Float64 => Arc::new(
            cells
                .iter()
                .map(|c| match c {
                    Cell::Int(v) => Some(*v as f64),
                    Cell::Float(v) => Some(*v),
                    _ => None,
                })
                .collect::<Float64Array>(),
        ),
        DataType::Boolean => Arc::new(
            cells
                .iter()
                .map(|c| match c {
                    Cell::Bool(v) => Some(*v),
                    _ => None,
                })
                .collect::<BooleanArray>(),
        ),
        _ => Arc::new(cells.iter().map(Cell::render).collect::<StringArray>()),
    };
    (data_type, array)
}
