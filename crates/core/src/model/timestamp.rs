use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime, Timelike};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Wire format used when sending a reminder to the backend.
const MINUTE_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Formats accepted when reading a timestamp, most precise first.
const READ_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S", MINUTE_FORMAT];

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid local timestamp: {raw:?}")]
pub struct TimestampError {
    raw: String,
}

/// A wall-clock timestamp with no zone attached.
///
/// The value is never shifted: what the backend sends is what gets shown,
/// and what the user typed is what gets sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LocalTimestamp(NaiveDateTime);

impl LocalTimestamp {
    #[must_use]
    pub fn new(value: NaiveDateTime) -> Self {
        Self(value)
    }

    /// Parse a naive `yyyy-mm-ddThh:mm[:ss[.fff]]` string.
    ///
    /// A space is accepted in place of the `T` separator. Zone suffixes are
    /// rejected rather than converted.
    ///
    /// # Errors
    ///
    /// Returns `TimestampError` if the string matches none of the accepted formats.
    pub fn parse(raw: &str) -> Result<Self, TimestampError> {
        let normalized = raw.trim().replacen(' ', "T", 1);
        READ_FORMATS
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(&normalized, fmt).ok())
            .map(Self)
            .ok_or_else(|| TimestampError {
                raw: raw.to_string(),
            })
    }

    #[must_use]
    pub fn value(&self) -> NaiveDateTime {
        self.0
    }

    #[must_use]
    pub fn date(&self) -> NaiveDate {
        self.0.date()
    }

    /// Drop seconds and sub-second precision.
    #[must_use]
    pub fn truncate_to_minute(self) -> Self {
        let trimmed = self
            .0
            .with_second(0)
            .and_then(|t| t.with_nanosecond(0))
            .unwrap_or(self.0);
        Self(trimmed)
    }

    /// The minute-precision form the backend accepts on writes.
    #[must_use]
    pub fn to_wire(&self) -> String {
        self.0.format(MINUTE_FORMAT).to_string()
    }
}

impl From<NaiveDateTime> for LocalTimestamp {
    fn from(value: NaiveDateTime) -> Self {
        Self(value)
    }
}

impl fmt::Display for LocalTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_wire())
    }
}

impl FromStr for LocalTimestamp {
    type Err = TimestampError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for LocalTimestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_wire())
    }
}

impl<'de> Deserialize<'de> for LocalTimestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}
