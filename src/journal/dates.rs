//! Journal date extraction (`MM/DD/YYYY`)

use chrono::NaiveDate;
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

static DATE_PATTERN: OnceLock<Regex> = OnceLock::new();

#[allow(clippy::expect_used)]
fn date_pattern() -> &'static Regex {
    DATE_PATTERN.get_or_init(|| {
        Regex::new(r"\b([0-9]{2})/([0-9]{2})/([0-9]{4})\b")
            .expect("Static regex pattern is guaranteed to be valid")
    })
}

/// A date token found in journal text.
///
/// Month and day are range-checked (1-12, 1-31) but not checked against the
/// calendar, so `02/30/2024` is a valid token.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct JournalDate {
    text: String,
    month: u8,
    day: u8,
    year: u16,
}

impl JournalDate {
    fn from_captures(caps: &Captures<'_>) -> Option<Self> {
        let month: u8 = caps[1].parse().ok()?;
        let day: u8 = caps[2].parse().ok()?;
        let year: u16 = caps[3].parse().ok()?;
        if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
            return None;
        }
        Some(Self {
            text: caps[0].to_string(),
            month,
            day,
            year,
        })
    }

    /// Token as it appeared in the text
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Month (1-12)
    #[must_use]
    pub const fn month(&self) -> u8 {
        self.month
    }

    /// Day of month (1-31)
    #[must_use]
    pub const fn day(&self) -> u8 {
        self.day
    }

    /// Four-digit year
    #[must_use]
    pub const fn year(&self) -> u16 {
        self.year
    }

    /// Calendar date, or `None` if the day does not exist in that month
    #[must_use]
    pub fn to_naive_date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(
            i32::from(self.year),
            u32::from(self.month),
            u32::from(self.day),
        )
    }
}

impl fmt::Display for JournalDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Date tokens in order of appearance, duplicates kept
#[must_use]
pub fn journal_dates(text: &str) -> Vec<JournalDate> {
    date_pattern()
        .captures_iter(text)
        .filter_map(|caps| JournalDate::from_captures(&caps))
        .collect()
}

/// Extract every `MM/DD/YYYY` token with month 1-12 and day 1-31.
///
/// Matches must stand alone as words (`123/45/6789` is not a date). Order of
/// appearance and duplicates are preserved. Never fails; text without dates
/// yields an empty vector.
///
/// ```
/// use azmar_parser::extract_journal_dates;
///
/// let dates = extract_journal_dates("Found it on 01/15/2024 and again 13/40/2023.");
/// assert_eq!(dates, vec!["01/15/2024"]);
/// ```
#[must_use]
pub fn extract_journal_dates(text: &str) -> Vec<String> {
    journal_dates(text).into_iter().map(|d| d.text).collect()
}
