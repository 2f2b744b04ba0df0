//! Format-neutral cell values shared by both loaders

use chrono::{NaiveDateTime, Timelike};

/// Text values treated as missing in delimited input.
pub const NA_MARKERS: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// A single cell after reading, before column types are decided.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    /// Missing value
    Empty,
    /// Integer
    Int(i64),
    /// Floating point number
    Float(f64),
    /// Boolean
    Bool(bool),
    /// Free text
    Text(String),
}

impl Cell {
    /// Parse a raw delimited-text field.
    ///
    /// NA markers become [`Cell::Empty`]; integers, floats and the usual
    /// spellings of `true`/`false` are recognized; everything else is text.
    #[must_use]
    pub fn parse(field: &str) -> Self {
        if NA_MARKERS.contains(&field) {
            return Self::Empty;
        }
        if let Ok(v) = field.parse::<i64>() {
            return Self::Int(v);
        }
        if let Ok(v) = field.parse::<f64>() {
            return Self::Float(v);
        }
        match field {
            "True" | "TRUE" | "true" => Self::Bool(true),
            "False" | "FALSE" | "false" => Self::Bool(false),
            _ => Self::Text(field.to_string()),
        }
    }

    /// Spreadsheet number. Workbooks store every number as a float, so
    /// whole values become [`Cell::Int`].
    #[must_use]
    pub fn from_number(v: f64) -> Self {
        as_whole(v).map_or(Self::Float(v), Self::Int)
    }

    /// Render a spreadsheet date/time as ISO-8601 text.
    ///
    /// Midnight values drop the time component.
    #[must_use]
    pub fn from_datetime(value: NaiveDateTime) -> Self {
        let text = if value.num_seconds_from_midnight() == 0 && value.nanosecond() == 0 {
            value.date().format("%Y-%m-%d").to_string()
        } else {
            value.format("%Y-%m-%dT%H:%M:%S").to_string()
        };
        Self::Text(text)
    }

    /// Whether the cell holds no value
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Text rendering used for header names and `Utf8` columns.
    ///
    /// Returns `None` for [`Cell::Empty`].
    #[must_use]
    pub fn render(&self) -> Option<String> {
        match self {
            Self::Empty => None,
            Self::Int(v) => Some(v.to_string()),
            Self::Float(v) => Some(v.to_string()),
            Self::Bool(true) => Some("True".to_string()),
            Self::Bool(false) => Some("False".to_string()),
            Self::Text(s) => Some(s.clone()),
        }
    }
}

/// Integer value of a whole, in-range float
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn as_whole(v: f64) -> Option<i64> {
    // i64::MAX as f64 rounds up to 2^63, so the upper bound is exclusive
    if v.is_finite() && v.fract() == 0.0 && v >= i64::MIN as f64 && v < i64::MAX as f64 {
        Some(v as i64)
    } else {
        None
    }
}
