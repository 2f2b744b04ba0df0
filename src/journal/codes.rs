//! Secret code extraction (`AZMAR-DDD`)

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

/// Literal prefix of every secret code
pub const CODE_PREFIX: &str = "AZMAR-";

static CODE_PATTERN: OnceLock<Regex> = OnceLock::new();

// The trailing \b rejects a fourth digit: AZMAR-1234 yields nothing.
#[allow(clippy::expect_used)]
fn code_pattern() -> &'static Regex {
    CODE_PATTERN.get_or_init(|| {
        Regex::new(r"\bAZMAR-([0-9]{3})\b")
            .expect("Static regex pattern is guaranteed to be valid")
    })
}

/// A secret code found in journal text
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SecretCode {
    text: String,
    number: u16,
}

impl SecretCode {
    /// Code as it appeared in the text
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Three-digit numeric part (000-999)
    #[must_use]
    pub const fn number(&self) -> u16 {
        self.number
    }
}

impl fmt::Display for SecretCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Secret codes in order of appearance, duplicates kept
#[must_use]
pub fn secret_codes(text: &str) -> Vec<SecretCode> {
    code_pattern()
        .captures_iter(text)
        .filter_map(|caps| {
            let number = caps[1].parse().ok()?;
            Some(SecretCode {
                text: caps[0].to_string(),
                number,
            })
        })
        .collect()
}

/// Extract every `AZMAR-` code followed by exactly three digits.
///
/// ```
/// use azmar_parser::extract_secret_codes;
///
/// let codes = extract_secret_codes("Codes: AZMAR-001, AZMAR-999, AZMAR-12, AZMARQ-123.");
/// assert_eq!(codes, vec!["AZMAR-001", "AZMAR-999"]);
/// ```
#[must_use]
pub fn extract_secret_codes(text: &str) -> Vec<String> {
    code_pattern()
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}
