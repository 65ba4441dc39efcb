//! Calendar month keys used to filter the ledger.

use std::fmt;

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};

/// A `YYYY-MM` bucket. Ordering follows the calendar.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MonthKey(String);

impl MonthKey {
    pub fn new(year: i32, month: u32) -> Result<Self, MonthKeyError> {
        if !(0..=9999).contains(&year) {
            return Err(MonthKeyError::InvalidYear);
        }
        if !(1..=12).contains(&month) {
            return Err(MonthKeyError::InvalidMonth);
        }
        Ok(Self(format!("{year:04}-{month:02}")))
    }

    /// Month the given timestamp falls in (UTC).
    pub fn of(date: &DateTime<Utc>) -> Self {
        Self(format!("{:04}-{:02}", date.year(), date.month()))
    }

    pub fn parse(value: &str) -> Result<Self, MonthKeyError> {
        let raw = value.trim();
        let (year, month) = raw.split_once('-').ok_or(MonthKeyError::Malformed)?;
        if year.len() != 4 || month.len() != 2 {
            return Err(MonthKeyError::Malformed);
        }
        if !year.chars().chain(month.chars()).all(|c| c.is_ascii_digit()) {
            return Err(MonthKeyError::Malformed);
        }
        let year: i32 = year.parse().map_err(|_| MonthKeyError::Malformed)?;
        let month: u32 = month.parse().map_err(|_| MonthKeyError::Malformed)?;
        Self::new(year, month)
    }

    /// Empty input means "no month selected".
    pub fn parse_optional(value: &str) -> Result<Option<Self>, MonthKeyError> {
        if value.trim().is_empty() {
            Ok(None)
        } else {
            Self::parse(value).map(Some)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for MonthKey {
    type Error = MonthKeyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<MonthKey> for String {
    fn from(value: MonthKey) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Errors that can occur when constructing [`MonthKey`] values.
pub enum MonthKeyError {
    Malformed,
    InvalidYear,
    InvalidMonth,
}

impl fmt::Display for MonthKeyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MonthKeyError::Malformed => f.write_str("month must look like YYYY-MM"),
            MonthKeyError::InvalidYear => f.write_str("year must be between 0000 and 9999"),
            MonthKeyError::InvalidMonth => f.write_str("month must be between 01 and 12"),
        }
    }
}

impl std::error::Error for MonthKeyError {}
