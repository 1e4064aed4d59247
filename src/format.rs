//! Persian `YYYY/MM/DD` rendering and parsing.
//!
//! [`parse_persian_date`] only extracts three integers; range checks are a
//! separate step ([`is_valid_persian_date`] for the coarse check,
//! [`DateParts::validate`] for the strict one). [`persian_to_gregorian`]
//! reports failure with an empty string rather than an error.

use crate::consts::{JALAALI_SEPARATOR, MAX_MONTH};
use crate::convert::{gregorian_to_jalaali, jalaali_to_gregorian};
use crate::{DateError, GregorianDate, JalaaliDate, ParseError, prelude::*};

const PERSIAN_DIGITS: [char; 10] = ['۰', '۱', '۲', '۳', '۴', '۵', '۶', '۷', '۸', '۹'];

/// Highest day accepted by the coarse validator, whatever the month.
const MAX_COARSE_DAY: i32 = 31;

/// An unvalidated `(year, month, day)` triple read from a date string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{}/{:02}/{:02}", year, month, day)]
pub struct DateParts {
    pub year: i32,
    pub month: i32,
    pub day: i32,
}

impl DateParts {
    /// Coarse range check: positive year, month in 1..=12, day in 1..=31.
    /// Month lengths are not consulted, so `1403/07/31` passes.
    pub fn is_valid(&self) -> bool {
        self.year > 0
            && (1..=i32::from(MAX_MONTH)).contains(&self.month)
            && (1..=MAX_COARSE_DAY).contains(&self.day)
    }

    /// Strict check against the Jalaali month-length table.
    ///
    /// # Errors
    /// Returns the `DateError` describing the first out-of-range component.
    pub fn validate(self) -> Result<JalaaliDate, DateError> {
        JalaaliDate::from_parts(self.year, self.month, self.day)
    }

    /// Raw Jalaali to Gregorian conversion of these parts, without validation.
    pub fn to_gregorian_parts(self) -> Self {
        let (year, month, day) = jalaali_to_gregorian(self.year, self.month, self.day);
        Self { year, month, day }
    }
}

/// Formats a Gregorian date as a Persian date string, `"{jy}/{jm:02}/{jd:02}"`.
///
/// ```
/// use jalaali_date::{GregorianDate, to_persian_date};
///
/// let nowruz = GregorianDate::new(2024, 3, 20).unwrap();
/// assert_eq!(to_persian_date(nowruz), "1403/01/01");
/// ```
pub fn to_persian_date(date: GregorianDate) -> String {
    let (year, month, day) = gregorian_to_jalaali(
        i32::from(date.year()),
        i32::from(date.month()),
        i32::from(date.day()),
    );
    DateParts { year, month, day }.to_string()
}

/// Splits a Persian date string on `/` into three integers.
///
/// # Errors
/// Returns `ParseError` unless the input splits into exactly three
/// integer segments.
pub fn parse_persian_date(s: &str) -> Result<DateParts, ParseError> {
    let (year, month, day) = split_three(s, JALAALI_SEPARATOR)?;
    Ok(DateParts { year, month, day })
}

/// True when `s` parses and passes the coarse range check of
/// [`DateParts::is_valid`].
pub fn is_valid_persian_date(s: &str) -> bool {
    parse_persian_date(s).is_ok_and(|parts| parts.is_valid())
}

/// Converts a Persian date string to a Gregorian `"{y}-{m:02}-{d:02}"` string.
///
/// Malformed input yields `""`; callers must treat the empty string as the
/// failure signal. Parsed values are converted without range checks.
pub fn persian_to_gregorian(s: &str) -> String {
    match parse_persian_date(s) {
        Ok(parts) => {
            let gregorian = parts.to_gregorian_parts();
            format!("{}-{:02}-{:02}", gregorian.year, gregorian.month, gregorian.day)
        }
        Err(err) => {
            tracing::debug!(input = s, %err, "malformed persian date, returning empty string");
            String::new()
        }
    }
}

/// Replaces ASCII digits with Persian digits, leaving everything else as is.
pub fn to_persian_digits(s: &str) -> String {
    s.chars()
        .map(|c| {
            c.to_digit(10)
                .and_then(|digit| usize::try_from(digit).ok())
                .and_then(|digit| PERSIAN_DIGITS.get(digit))
                .copied()
                .unwrap_or(c)
        })
        .collect()
}

/// Splits `s` on `separator` into exactly three trimmed integer segments.
pub(crate) fn split_three(s: &str, separator: char) -> Result<(i32, i32, i32), ParseError> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err(ParseError::EmptyInput);
    }

    let parts: Vec<&str> = trimmed.split(separator).map(str::trim).collect();
    let [year, month, day] = parts.as_slice() else {
        return Err(ParseError::InvalidFormat(format!(
            "expected 3 '{separator}'-separated parts, found {}: {s}",
            parts.len()
        )));
    };

    Ok((parse_i32(year)?, parse_i32(month)?, parse_i32(day)?))
}

/// Helper to parse i32 with better error messages
fn parse_i32(s: &str) -> Result<i32, ParseError> {
    s.parse::<i32>()
        .map_err(|_| ParseError::InvalidNumber(s.to_owned()))
}
