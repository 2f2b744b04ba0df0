//! # azmar-parser: Expedition Data Parser
//!
//! **Version**: 0.1.0
//!
//! Reads the Lost Temple of Azmar expedition records: the artifact inventory
//! spreadsheet, tab-separated location notes, and free-text journal entries.
//!
//! ## Operations
//!
//! - [`load_artifact_data`]: sheet "Main Chamber", 3 preamble rows skipped
//! - [`load_location_notes`]: TSV with a header line
//! - [`extract_journal_dates`]: `MM/DD/YYYY` tokens with month 1-12, day 1-31
//! - [`extract_secret_codes`]: `AZMAR-` followed by exactly three digits
//!
//! Loaders return an Arrow-backed [`Table`]; extractors return tokens in
//! order of appearance. Every operation is stateless.
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use azmar_parser::{extract_journal_dates, extract_secret_codes, load_location_notes};
//!
//! let locations = load_location_notes("data/locations.tsv")?;
//! println!("{} locations: {:?}", locations.num_rows(), locations.column_names());
//!
//! let entry = "01/15/2024: found AZMAR-001 behind the altar.";
//! assert_eq!(extract_journal_dates(entry), vec!["01/15/2024"]);
//! assert_eq!(extract_secret_codes(entry), vec!["AZMAR-001"]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

pub mod error;
pub mod journal;
pub mod loader;
pub mod table;

pub use error::{Error, Result};
pub use journal::{extract_journal_dates, extract_secret_codes, JournalFindings};
pub use loader::{load_artifact_data, load_location_notes};
pub use table::Table;
