//! Entry dates, kept exactly as they were stored.

use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::month::MonthKey;

/// ISO-8601 date text of a ledger entry. New entries are written like a
/// browser's `toISOString()` (UTC, milliseconds, `Z`); stored entries keep
/// whatever valid form they were saved in, so a reload never rewrites them.
/// The month bucket is the first seven characters of the text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EntryDate {
    raw: String,
    month: MonthKey,
    day: NaiveDate,
}

impl EntryDate {
    /// Accepts RFC 3339 timestamps with any offset, local date-times
    /// without an offset, and plain calendar dates.
    pub fn parse(value: &str) -> Result<Self, EntryDateError> {
        let invalid = || EntryDateError(value.to_string());
        let is_iso = DateTime::parse_from_rfc3339(value).is_ok()
            || NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f").is_ok()
            || NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M").is_ok()
            || NaiveDate::parse_from_str(value, "%Y-%m-%d").is_ok();
        if !is_iso {
            return Err(invalid());
        }

        let prefix = value.get(..10).ok_or_else(invalid)?;
        let day = NaiveDate::parse_from_str(prefix, "%Y-%m-%d").map_err(|_| invalid())?;
        let month = MonthKey::parse(&prefix[..7]).map_err(|_| invalid())?;
        Ok(Self {
            raw: value.to_string(),
            month,
            day,
        })
    }

    pub fn from_utc(at: DateTime<Utc>) -> Self {
        Self {
            raw: at.to_rfc3339_opts(SecondsFormat::Millis, true),
            month: MonthKey::of(&at),
            day: at.date_naive(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn month_key(&self) -> &MonthKey {
        &self.month
    }

    /// Calendar day as written, ignoring any offset.
    pub fn day(&self) -> NaiveDate {
        self.day
    }

    /// The exact instant, when the text carries an offset.
    pub fn instant(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.raw)
            .ok()
            .map(|date| date.with_timezone(&Utc))
    }
}

impl From<DateTime<Utc>> for EntryDate {
    fn from(at: DateTime<Utc>) -> Self {
        Self::from_utc(at)
    }
}

impl TryFrom<String> for EntryDate {
    type Error = EntryDateError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<EntryDate> for String {
    fn from(value: EntryDate) -> Self {
        value.raw
    }
}

impl fmt::Display for EntryDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryDateError(String);

impl fmt::Display for EntryDateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "`{}` is not an ISO-8601 date", self.0)
    }
}

impl std::error::Error for EntryDateError {}
