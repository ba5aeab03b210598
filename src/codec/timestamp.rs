//! ISO-8601 dates as they appear on the wire

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, SecondsFormat};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A date or timestamp carrying exactly what its wire string encodes
///
/// The service mixes date-only values (`2024-03-01`), local timestamps
/// without an offset (`2024-03-01T10:15:00`) and zoned timestamps
/// (`2024-03-01T10:15:00Z`). No time zone is assumed for the first two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Timestamp {
    Date(NaiveDate),
    Local(NaiveDateTime),
    Offset(DateTime<FixedOffset>),
}

impl Timestamp {
    pub fn parse(text: &str) -> Result<Self, chrono::ParseError> {
        if let Ok(zoned) = DateTime::parse_from_rfc3339(text) {
            return Ok(Self::Offset(zoned));
        }
        if let Ok(local) = text.parse::<NaiveDateTime>() {
            return Ok(Self::Local(local));
        }
        text.parse::<NaiveDate>().map(Self::Date)
    }

    /// Calendar date part, as written (no zone conversion)
    pub fn date(&self) -> NaiveDate {
        match self {
            Self::Date(date) => *date,
            Self::Local(local) => local.date(),
            Self::Offset(zoned) => zoned.date_naive(),
        }
    }

    pub fn is_date_only(&self) -> bool {
        matches!(self, Self::Date(_))
    }

    pub fn to_wire_string(&self) -> String {
        match self {
            Self::Date(date) => date.format("%Y-%m-%d").to_string(),
            Self::Local(local) => local.format("%Y-%m-%dT%H:%M:%S%.f").to_string(),
            Self::Offset(zoned) => zoned.to_rfc3339_opts(SecondsFormat::AutoSi, true),
        }
    }
}

impl From<NaiveDate> for Timestamp {
    fn from(date: NaiveDate) -> Self {
        Self::Date(date)
    }
}

impl From<NaiveDateTime> for Timestamp {
    fn from(local: NaiveDateTime) -> Self {
        Self::Local(local)
    }
}

impl From<DateTime<FixedOffset>> for Timestamp {
    fn from(zoned: DateTime<FixedOffset>) -> Self {
        Self::Offset(zoned)
    }
}

impl FromStr for Timestamp {
    type Err = chrono::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_wire_string())
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_wire_string())
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Self::parse(&text).map_err(serde::de::Error::custom)
    }
}
