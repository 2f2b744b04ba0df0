//! Loader configuration
//!
//! Defaults reproduce the fixed behavior of [`load_artifact_data`] and
//! [`load_location_notes`].
//!
//! [`load_artifact_data`]: crate::load_artifact_data
//! [`load_location_notes`]: crate::load_location_notes

/// Sheet holding the artifact inventory
pub const ARTIFACT_SHEET: &str = "Main Chamber";

/// Preamble rows above the artifact header
pub const ARTIFACT_SKIP_ROWS: usize = 3;

/// Spreadsheet loading options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpreadsheetOptions {
    sheet: String,
    skip_rows: usize,
}

impl SpreadsheetOptions {
    /// Create a new options builder
    #[must_use]
    pub fn builder() -> SpreadsheetOptionsBuilder {
        SpreadsheetOptionsBuilder::default()
    }

    /// Sheet to read
    #[must_use]
    pub fn sheet(&self) -> &str {
        &self.sheet
    }

    /// Physical rows discarded before the header row
    #[must_use]
    pub const fn skip_rows(&self) -> usize {
        self.skip_rows
    }
}

impl Default for SpreadsheetOptions {
    fn default() -> Self {
        Self {
            sheet: ARTIFACT_SHEET.to_string(),
            skip_rows: ARTIFACT_SKIP_ROWS,
        }
    }
}

/// Spreadsheet options builder
#[derive(Debug, Default)]
pub struct SpreadsheetOptionsBuilder {
    options: SpreadsheetOptions,
}

impl SpreadsheetOptionsBuilder {
    /// Set the sheet name
    #[must_use]
    pub fn sheet(mut self, name: impl Into<String>) -> Self {
        self.options.sheet = name.into();
        self
    }

    /// Set the number of rows to skip above the header
    #[must_use]
    pub fn skip_rows(mut self, rows: usize) -> Self {
        self.options.skip_rows = rows;
        self
    }

    /// Build the options
    #[must_use]
    pub fn build(self) -> SpreadsheetOptions {
        self.options
    }
}

/// How rows whose width differs from the header are treated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RaggedRows {
    /// Pad short rows with nulls; reject rows longer than the header
    #[default]
    Pad,
    /// Reject any row whose width differs from the header
    Strict,
}

/// Delimited-text loading options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DelimitedOptions {
    delimiter: u8,
    ragged_rows: RaggedRows,
}

impl DelimitedOptions {
    /// Create a new options builder
    #[must_use]
    pub fn builder() -> DelimitedOptionsBuilder {
        DelimitedOptionsBuilder::default()
    }

    /// Field separator byte
    #[must_use]
    pub const fn delimiter(&self) -> u8 {
        self.delimiter
    }

    /// Ragged-row policy
    #[must_use]
    pub const fn ragged_rows(&self) -> RaggedRows {
        self.ragged_rows
    }
}

impl Default for DelimitedOptions {
    fn default() -> Self {
        Self {
            delimiter: b'\t',
            ragged_rows: RaggedRows::Pad,
        }
    }
}

/// Delimited options builder
#[derive(Debug, Default)]
pub struct DelimitedOptionsBuilder {
    options: DelimitedOptions,
}

impl DelimitedOptionsBuilder {
    /// Set the field separator
    #[must_use]
    pub const fn delimiter(mut self, delimiter: u8) -> Self {
        self.options.delimiter = delimiter;
        self
    }

    /// Set the ragged-row policy
    #[must_use]
    pub const fn ragged_rows(mut self, policy: RaggedRows) -> Self {
        self.options.ragged_rows = policy;
        self
    }

    /// Build the options
    #[must_use]
    pub const fn build(self) -> DelimitedOptions {
        self.options
    }
}
