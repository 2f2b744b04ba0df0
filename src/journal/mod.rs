//! Journal token extraction
//!
//! Pure, stateless scans over free text. Compiled patterns are cached in
//! process-wide statics and never mutated after initialization.
//!
//! ## Usage
//!
//! ```rust
//! use azmar_parser::journal::JournalFindings;
//!
//! let entry = "03/14/1923: carved AZMAR-417 above the altar.";
//! let findings = JournalFindings::from_text(entry);
//! assert_eq!(findings.dates, vec!["03/14/1923"]);
//! assert_eq!(findings.codes, vec!["AZMAR-417"]);
//! ```

mod codes;
mod dates;

pub use codes::{extract_secret_codes, secret_codes, SecretCode, CODE_PREFIX};
pub use dates::{extract_journal_dates, journal_dates, JournalDate};

use serde::{Deserialize, Serialize};

/// Both extractions over one journal text
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalFindings {
    /// Date tokens in order of appearance
    pub dates: Vec<String>,
    /// Secret codes in order of appearance
    pub codes: Vec<String>,
}

impl JournalFindings {
    /// Run both extractors over `text`
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        Self {
            dates: extract_journal_dates(text),
            codes: extract_secret_codes(text),
        }
    }

    /// Whether nothing was found
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty() && self.codes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_findings_from_text() {
        let findings =
            JournalFindings::from_text("01/15/2024: AZMAR-001. 13/01/2024: AZMAR-1234.");
        assert_eq!(findings.dates, vec!["01/15/2024"]);
        assert_eq!(findings.codes, vec!["AZMAR-001"]);
        assert!(!findings.is_empty());
    }

    #[test]
    fn test_findings_empty() {
        let findings = JournalFindings::from_text("");
        assert!(findings.is_empty());
        assert_eq!(findings, JournalFindings::default());
    }

    #[test]
    fn test_findings_json_shape() {
        let findings = JournalFindings::from_text("05/06/1923 AZMAR-321");
        let value = serde_json::to_value(&findings).unwrap();
        assert_eq!(
            value,
            json!({"dates": ["05/06/1923"], "codes": ["AZMAR-321"]})
        );

        let back: JournalFindings = serde_json::from_value(value).unwrap();
        assert_eq!(back, findings);
    }
}
