//! Release dates and the "new release" window.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Months, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::CardError;

/// Leading text of [`CardError::InvalidReleaseDate`] messages.
pub(crate) const INVALID_RELEASE_DATE: &str = "Invalid release date: ";

/// When a shoe was (or will be) released.
///
/// Catalog feeds send either epoch milliseconds, a plain `YYYY-MM-DD` date
/// (taken as midnight UTC) or an RFC 3339 timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ReleaseDate(DateTime<Utc>);

impl ReleaseDate {
    pub fn new(at: DateTime<Utc>) -> Self {
        Self(at)
    }

    /// Midnight UTC on the given calendar day.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, CardError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .map(|dt| Self(dt.and_utc()))
            .ok_or_else(|| CardError::InvalidReleaseDate(format!("{year}-{month}-{day}")))
    }

    pub fn from_millis(millis: i64) -> Result<Self, CardError> {
        DateTime::from_timestamp_millis(millis)
            .map(Self)
            .ok_or_else(|| CardError::InvalidReleaseDate(millis.to_string()))
    }

    pub fn as_datetime(&self) -> DateTime<Utc> {
        self.0
    }
}

impl FromStr for ReleaseDate {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Ok(Self(dt.with_timezone(&Utc)));
        }
        let date = NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map_err(|_| CardError::InvalidReleaseDate(s.to_string()))?;
        date.and_hms_opt(0, 0, 0)
            .map(|dt| Self(dt.and_utc()))
            .ok_or_else(|| CardError::InvalidReleaseDate(s.to_string()))
    }
}

impl From<DateTime<Utc>> for ReleaseDate {
    fn from(at: DateTime<Utc>) -> Self {
        Self(at)
    }
}

impl fmt::Display for ReleaseDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.to_rfc3339())
    }
}

impl Serialize for ReleaseDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0.to_rfc3339())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawReleaseDate {
    Millis(i64),
    Text(String),
}

impl<'de> Deserialize<'de> for ReleaseDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let parsed = match RawReleaseDate::deserialize(deserializer)? {
            RawReleaseDate::Millis(ms) => ReleaseDate::from_millis(ms),
            RawReleaseDate::Text(s) => s.parse(),
        };
        parsed.map_err(serde::de::Error::custom)
    }
}

/// How far back a release still counts as new, in calendar months.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecencyWindow {
    pub months: u32,
}

impl Default for RecencyWindow {
    fn default() -> Self {
        Self { months: 1 }
    }
}

impl RecencyWindow {
    pub fn months(months: u32) -> Self {
        Self { months }
    }

    /// Oldest instant still inside the window.
    ///
    /// Month arithmetic clamps to the end of shorter months, so the cutoff
    /// for March 31 is the last day of February.
    pub fn cutoff(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        now.checked_sub_months(Months::new(self.months))
            .unwrap_or(DateTime::<Utc>::MIN_UTC)
    }

    /// Whether `release` falls inside the window ending at `now`.
    ///
    /// Future release dates count as recent.
    pub fn is_recent(&self, release: &ReleaseDate, now: DateTime<Utc>) -> bool {
        release.0 >= self.cutoff(now)
    }
}

/// True when the shoe was released within the last calendar month.
pub fn is_new_shoe(release: &ReleaseDate, now: DateTime<Utc>) -> bool {
    RecencyWindow::default().is_recent(release, now)
}
