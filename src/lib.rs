//! Persian (Jalaali) and Gregorian calendar dates.
//!
//! - [`convert`]: raw, unvalidated integer conversion in both directions.
//! - [`GregorianDate`] / [`JalaaliDate`]: validated value types.
//! - [`to_persian_date`], [`parse_persian_date`], [`is_valid_persian_date`],
//!   [`persian_to_gregorian`]: the `YYYY/MM/DD` string layer.
//! - [`calculate_age`], [`calculate_age_from_persian`]: ages against a [`Clock`].
//! - [`JalaaliDateRange`]: inclusive periods such as plan start/end dates.

mod age;
mod clock;
mod consts;
pub mod convert;
mod format;
mod prelude;
mod range;
mod types;

pub use age::{Age, Birthdate, age_between, calculate_age, calculate_age_from_persian};
pub use clock::{Clock, FixedClock, SystemClock};
pub use consts::*;
pub use convert::{
    gregorian_to_jalaali, is_jalaali_leap_year, jalaali_days_in_month, jalaali_to_gregorian,
};
pub use format::{
    DateParts, is_valid_persian_date, parse_persian_date, persian_to_gregorian, to_persian_date,
    to_persian_digits,
};
pub use range::{JalaaliDateRange, RangeError};
pub use types::{GregorianDate, JalaaliDate, Locale, days_in_month, is_leap_year};

use crate::prelude::*;

/// A date string that does not have the shape of a date.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Not an integer: {_0}")]
    InvalidNumber(String),
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for ParseError {}

/// Every failure a date operation can report.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("Invalid year: {0}")]
    InvalidYear(i32),

    #[error("Invalid month: {0} (must be 1-{max})", max = MAX_MONTH)]
    InvalidMonth(i32),

    #[error("Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { year: i32, month: i32, day: i32 },

    #[error("Invalid ISO 8601 date: {0}")]
    InvalidIso(String),

    #[error("Invalid Persian date: {0}")]
    InvalidPersian(String),

    #[error("Birth date {birth} is after today ({today})")]
    FutureDate {
        birth: GregorianDate,
        today: GregorianDate,
    },
}

/// Coarse classification of a [`DateError`], enough to pick a localized
/// message for the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The input is not shaped like a date
    Parse,
    /// The input names a date that does not exist or is out of range
    InvalidDate,
    /// A birth date lies after the current date
    FutureDate,
}

impl DateError {
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Parse(_) => ErrorKind::Parse,
            Self::InvalidYear(_)
            | Self::InvalidMonth(_)
            | Self::InvalidDay { .. }
            | Self::InvalidIso(_)
            | Self::InvalidPersian(_) => ErrorKind::InvalidDate,
            Self::FutureDate { .. } => ErrorKind::FutureDate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        struct TestCase {
            error: DateError,
            kind:  ErrorKind,
        }

        let today = GregorianDate::new(2024, 1, 1).unwrap();
        let cases = [
            TestCase {
                error: ParseError::EmptyInput.into(),
                kind:  ErrorKind::Parse,
            },
            TestCase {
                error: DateError::InvalidYear(0),
                kind:  ErrorKind::InvalidDate,
            },
            TestCase {
                error: DateError::InvalidMonth(13),
                kind:  ErrorKind::InvalidDate,
            },
            TestCase {
                error: DateError::InvalidDay {
                    year:  1402,
                    month: 12,
                    day:   30,
                },
                kind:  ErrorKind::InvalidDate,
            },
            TestCase {
                error: DateError::InvalidIso("x".to_owned()),
                kind:  ErrorKind::InvalidDate,
            },
            TestCase {
                error: DateError::InvalidPersian("x".to_owned()),
                kind:  ErrorKind::InvalidDate,
            },
            TestCase {
                error: DateError::FutureDate { birth: today, today },
                kind:  ErrorKind::FutureDate,
            },
        ];

        for case in &cases {
            assert_eq!(case.error.kind(), case.kind, "{}", case.error);
        }
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ParseError::InvalidNumber("aa".to_owned()).to_string(),
            "Not an integer: aa"
        );
        assert_eq!(
            DateError::from(ParseError::EmptyInput).to_string(),
            "Empty date string"
        );
        assert_eq!(
            DateError::InvalidMonth(13).to_string(),
            "Invalid month: 13 (must be 1-12)"
        );
        assert_eq!(
            DateError::InvalidDay {
                year:  1402,
                month: 12,
                day:   30
            }
            .to_string(),
            "Invalid day 30 for month 1402-12"
        );

        let birth = GregorianDate::new(2030, 1, 1).unwrap();
        let today = GregorianDate::new(2024, 1, 1).unwrap();
        assert_eq!(
            DateError::FutureDate { birth, today }.to_string(),
            "Birth date 2030-01-01 is after today (2024-01-01)"
        );
    }

    #[test]
    fn test_public_api_end_to_end() {
        let clock = FixedClock(GregorianDate::new(2024, 3, 20).unwrap());
        let today = clock.today().unwrap();

        let persian = to_persian_date(today);
        assert_eq!(persian, "1403/01/01");
        assert!(is_valid_persian_date(&persian));
        assert_eq!(persian_to_gregorian(&persian), "2024-03-20");

        let age = calculate_age_from_persian("1372/12/29", &clock).unwrap();
        assert_eq!(age, Age { years: 30, days: 0 });
    }
}
