//! In-memory tables (Arrow `RecordBatch`)
//!
//! Both loaders read rows of [`Cell`]s and hand them to [`Table::from_rows`],
//! which names the columns from the header row and infers one Arrow type per
//! column. A `Table` is immutable once built.

mod cell;
mod infer;

pub use cell::{Cell, NA_MARKERS};
pub use infer::{build_column, infer_type};

use crate::Result;
use arrow::array::{Array, ArrayRef, AsArray};
use arrow::datatypes::{DataType, Field, Float64Type, Int64Type, Schema, SchemaRef};
use arrow::record_batch::{RecordBatch, RecordBatchOptions};
use serde_json::{Map, Value};
use std::collections::HashSet;
use std::sync::Arc;

/// Tabular load result
#[derive(Debug, Clone)]
pub struct Table {
    batch: RecordBatch,
}

impl Table {
    /// Build a table from a header row and data rows.
    ///
    /// The header defines the width. Short rows are padded with
    /// [`Cell::Empty`]; cells beyond the header width are ignored, so callers
    /// enforce their own ragged-row policy before calling this.
    ///
    /// # Errors
    /// Returns error if Arrow rejects the assembled batch
    pub fn from_rows(header: &[Cell], rows: &[Vec<Cell>]) -> Result<Self> {
        let names = column_names(header);

        let mut fields = Vec::with_capacity(names.len());
        let mut columns: Vec<ArrayRef> = Vec::with_capacity(names.len());
        for (idx, name) in names.into_iter().enumerate() {
            let cells: Vec<Cell> = rows
                .iter()
                .map(|row| row.get(idx).cloned().unwrap_or(Cell::Empty))
                .collect();
            let (data_type, array) = build_column(&cells);
            fields.push(Field::new(name, data_type, true));
            columns.push(array);
        }

        // Explicit row count keeps zero-column tables valid
        let options = RecordBatchOptions::new().with_row_count(Some(rows.len()));
        let batch =
            RecordBatch::try_new_with_options(Arc::new(Schema::new(fields)), columns, &options)?;
        Ok(Self { batch })
    }

    /// Wrap an existing record batch
    #[must_use]
    pub const fn new(batch: RecordBatch) -> Self {
        Self { batch }
    }

    /// Number of data rows (header excluded)
    #[must_use]
    pub fn num_rows(&self) -> usize {
        self.batch.num_rows()
    }

    /// Number of columns
    #[must_use]
    pub fn num_columns(&self) -> usize {
        self.batch.num_columns()
    }

    /// Column names in header order
    #[must_use]
    pub fn column_names(&self) -> Vec<String> {
        self.batch
            .schema()
            .fields()
            .iter()
            .map(|f| f.name().clone())
            .collect()
    }

    /// Arrow schema
    #[must_use]
    pub fn schema(&self) -> SchemaRef {
        self.batch.schema()
    }

    /// Column by name
    #[must_use]
    pub fn column(&self, name: &str) -> Option<&ArrayRef> {
        self.batch.column_by_name(name)
    }

    /// Underlying record batch
    #[must_use]
    pub const fn record_batch(&self) -> &RecordBatch {
        &self.batch
    }

    /// Consume the table, returning the record batch
    #[must_use]
    pub fn into_record_batch(self) -> RecordBatch {
        self.batch
    }

    /// Rows as JSON objects keyed by column name.
    ///
    /// Nulls (and non-finite floats) become JSON `null`.
    #[must_use]
    pub fn to_json_records(&self) -> Value {
        let names = self.column_names();
        let records = (0..self.num_rows())
            .map(|row| {
                let object: Map<String, Value> = names
                    .iter()
                    .zip(self.batch.columns())
                    .map(|(name, array)| (name.clone(), json_value(array.as_ref(), row)))
                    .collect();
                Value::Object(object)
            })
            .collect();
        Value::Array(records)
    }
}

impl From<Table> for RecordBatch {
    fn from(table: Table) -> Self {
        table.batch
    }
}

/// Column names from a header row.
///
/// Blank header cells become `Unnamed: <index>`; repeated names get a
/// `.1`, `.2`, ... suffix.
#[must_use]
pub fn column_names(header: &[Cell]) -> Vec<String> {
    let mut seen = HashSet::with_capacity(header.len());
    header
        .iter()
        .enumerate()
        .map(|(idx, cell)| {
            let base = cell
                .render()
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| format!("Unnamed: {idx}"));
            let mut name = base.clone();
            let mut suffix = 1;
            while !seen.insert(name.clone()) {
                name = format!("{base}.{suffix}");
                suffix += 1;
            }
            name
        })
        .collect()
}

fn json_value(array: &dyn Array, row: usize) -> Value {
    if array.is_null(row) {
        return Value::Null;
    }
    match array.data_type() {
        DataType::Int64 => Value::from(array.as_primitive::<Int64Type>().value(row)),
        DataType::Float64 => {
            serde_json::Number::from_f64(array.as_primitive::<Float64Type>().value(row))
                .map_or(Value::Null, Value::Number)
        }
        DataType::Boolean => Value::Bool(array.as_boolean().value(row)),
        DataType::Utf8 => Value::String(array.as_string::<i32>().value(row).to_string()),
        _ => Value::Null,
    }
}
