use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{DateError, JalaaliDate, RANGE_SEPARATOR, prelude::*};

/// An inclusive period between two Jalaali dates, such as a training plan's
/// start and end. The start date is never after the end date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{start} - {end}")]
pub struct JalaaliDateRange {
    start: JalaaliDate,
    end:   JalaaliDate,
}

/// Error type for date range operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    /// Start date is after end date.
    #[error("Invalid date range: start ({start}) is after end ({end})")]
    InvalidRange { start: JalaaliDate, end: JalaaliDate },

    /// Error parsing or validating one of the ends.
    #[error(transparent)]
    Date(#[from] DateError),

    /// Invalid range format.
    #[error("Invalid range format: {0}")]
    InvalidFormat(String),
}

impl JalaaliDateRange {
    /// Creates a new date range with validation.
    ///
    /// # Errors
    /// Returns `RangeError::InvalidRange` if start > end.
    pub fn new(start: JalaaliDate, end: JalaaliDate) -> Result<Self, RangeError> {
        if start > end {
            return Err(RangeError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Returns the start date of the range
    pub const fn start(&self) -> JalaaliDate {
        self.start
    }

    /// Returns the end date of the range
    pub const fn end(&self) -> JalaaliDate {
        self.end
    }

    /// Returns both start and end dates as a tuple
    pub const fn dates(&self) -> (JalaaliDate, JalaaliDate) {
        (self.start, self.end)
    }

    /// Checks if the range contains a given date
    pub fn contains(&self, date: &JalaaliDate) -> bool {
        self.start <= *date && *date <= self.end
    }

    /// Checks if this range shares at least one day with another range
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    /// Checks if this range is completely contained within another range
    pub fn is_within(&self, other: &Self) -> bool {
        other.start <= self.start && self.end <= other.end
    }

    /// Number of days covered, counting both ends.
    pub fn len_days(&self) -> u32 {
        u32::try_from(self.end.days_since(self.start) + 1).unwrap_or_default()
    }

    /// Both ends as Gregorian ISO `YYYY-MM-DD` strings, the backend's wire format.
    pub fn to_gregorian_iso(&self) -> (String, String) {
        (
            self.start.to_gregorian().to_string(),
            self.end.to_gregorian().to_string(),
        )
    }
}

impl FromStr for JalaaliDateRange {
    type Err = RangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let separator = RANGE_SEPARATOR.trim();

        let separator_count = trimmed.matches(separator).count();
        match separator_count {
            0 => Err(RangeError::InvalidFormat(format!(
                "No range separator found (expected '{separator}'): {s}"
            ))),
            1 => {
                let (start_str, end_str) = trimmed.split_once(separator).ok_or_else(|| {
                    RangeError::InvalidFormat(format!(
                        "Separator '{separator}' not found despite count == 1"
                    ))
                })?;

                let start = start_str.trim().parse::<JalaaliDate>()?;
                let end = end_str.trim().parse::<JalaaliDate>()?;

                Self::new(start, end)
            }
            _ => Err(RangeError::InvalidFormat(format!(
                "Too many '{separator}' separators: expected 1, found {separator_count}"
            ))),
        }
    }
}

impl Serialize for JalaaliDateRange {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for JalaaliDateRange {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
