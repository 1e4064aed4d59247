use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE,
    GREGORIAN_SEPARATOR, JALAALI_SEPARATOR, LEAP_YEAR_CYCLE, MAX_GREGORIAN_YEAR,
    MAX_JALAALI_YEAR, MAX_MONTH, MIN_DAY, MIN_GREGORIAN_YEAR, MIN_JALAALI_YEAR,
};
use crate::convert::{
    gregorian_day_number, gregorian_to_jalaali, is_jalaali_leap_year, jalaali_days_in_month,
    jalaali_to_gregorian,
};
use crate::format::{split_three, to_persian_digits};
use crate::{DateError, prelude::*};
use std::str::FromStr;

/// A date in the proleptic Gregorian calendar, years `1..=9999`.
///
/// Always a real calendar date: Feb 29 exists only in leap years.
/// Displays and parses as ISO 8601 `YYYY-MM-DD`, the backend wire format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}-{:02}-{:02}", year, month, day)]
pub struct GregorianDate {
    year: u16,
    month: u8,
    day: u8,
}

impl GregorianDate {
    /// Creates a new Gregorian date, validating every component.
    ///
    /// # Errors
    /// Returns `DateError::InvalidYear`, `InvalidMonth` or `InvalidDay` for the
    /// first component that is out of range.
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self, DateError> {
        Self::from_parts(i32::from(year), i32::from(month), i32::from(day))
    }

    /// Validates a signed triple, as produced by parsing or raw conversion.
    pub(crate) fn from_parts(year: i32, month: i32, day: i32) -> Result<Self, DateError> {
        let year = u16::try_from(year)
            .ok()
            .filter(|y| (MIN_GREGORIAN_YEAR..=MAX_GREGORIAN_YEAR).contains(y))
            .ok_or(DateError::InvalidYear(year))?;
        let month = validate_month(month)?;
        let day = u8::try_from(day)
            .ok()
            .filter(|d| (MIN_DAY..=days_in_month(year, month)).contains(d))
            .ok_or(DateError::InvalidDay {
                year: i32::from(year),
                month: i32::from(month),
                day,
            })?;
        Ok(Self { year, month, day })
    }

    /// Returns the year
    #[inline]
    pub const fn year(self) -> u16 {
        self.year
    }

    /// Returns the month (1..=12)
    #[inline]
    pub const fn month(self) -> u8 {
        self.month
    }

    /// Returns the day of month
    #[inline]
    pub const fn day(self) -> u8 {
        self.day
    }

    /// Returns true if this date falls in a Gregorian leap year
    pub const fn is_leap_year(self) -> bool {
        is_leap_year(self.year)
    }

    /// Signed number of days from `earlier` to `self`.
    pub fn days_since(self, earlier: Self) -> i64 {
        self.day_number() - earlier.day_number()
    }

    /// Converts to the Jalaali calendar.
    ///
    /// # Errors
    /// Returns `DateError::InvalidYear` for dates before 622-03-21 or from
    /// 9999-03-21 on, which fall outside the `JalaaliDate` year range.
    pub fn to_jalaali(self) -> Result<JalaaliDate, DateError> {
        JalaaliDate::try_from(self)
    }

    fn day_number(self) -> i64 {
        gregorian_day_number(
            i32::from(self.year),
            i32::from(self.month),
            i32::from(self.day),
        )
    }
}

impl FromStr for GregorianDate {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (year, month, day) = split_three(s, GREGORIAN_SEPARATOR)?;
        Self::from_parts(year, month, day)
    }
}

impl TryFrom<chrono::NaiveDate> for GregorianDate {
    type Error = DateError;

    fn try_from(date: chrono::NaiveDate) -> Result<Self, Self::Error> {
        use chrono::Datelike;

        // chrono months and days are always small
        let month = i32::try_from(date.month()).unwrap_or_default();
        let day = i32::try_from(date.day()).unwrap_or_default();
        Self::from_parts(date.year(), month, day)
    }
}

impl serde::Serialize for GregorianDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for GregorianDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// A date in the Persian (Jalaali) solar calendar, years `1..=9377`.
///
/// Months 1..=6 have 31 days, months 7..=11 have 30 and Esfand has 29 or 30
/// depending on the leap year. Displays as `YYYY/MM/DD` without padding the
/// year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{}/{:02}/{:02}", year, month, day)]
pub struct JalaaliDate {
    year: u16,
    month: u8,
    day: u8,
}

impl JalaaliDate {
    /// Creates a new Jalaali date, validating every component against the
    /// month-length table for `year`.
    ///
    /// # Errors
    /// Returns `DateError::InvalidYear`, `InvalidMonth` or `InvalidDay` for the
    /// first component that is out of range.
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self, DateError> {
        Self::from_parts(i32::from(year), i32::from(month), i32::from(day))
    }

    pub(crate) fn from_parts(year: i32, month: i32, day: i32) -> Result<Self, DateError> {
        let year = u16::try_from(year)
            .ok()
            .filter(|y| (MIN_JALAALI_YEAR..=MAX_JALAALI_YEAR).contains(y))
            .ok_or(DateError::InvalidYear(year))?;
        let month = validate_month(month)?;
        let day = u8::try_from(day)
            .ok()
            .filter(|d| (MIN_DAY..=jalaali_days_in_month(i32::from(year), month)).contains(d))
            .ok_or(DateError::InvalidDay {
                year: i32::from(year),
                month: i32::from(month),
                day,
            })?;
        Ok(Self { year, month, day })
    }

    /// Returns the year
    #[inline]
    pub const fn year(self) -> u16 {
        self.year
    }

    /// Returns the month (1..=12)
    #[inline]
    pub const fn month(self) -> u8 {
        self.month
    }

    /// Returns the day of month
    #[inline]
    pub const fn day(self) -> u8 {
        self.day
    }

    /// Returns true if Esfand of this year has 30 days
    pub fn is_leap_year(self) -> bool {
        is_jalaali_leap_year(i32::from(self.year))
    }

    /// Number of days in this date's month
    pub fn days_in_month(self) -> u8 {
        jalaali_days_in_month(i32::from(self.year), self.month)
    }

    /// Converts to the Gregorian calendar. Every `JalaaliDate` has a
    /// `GregorianDate` counterpart.
    pub fn to_gregorian(self) -> GregorianDate {
        GregorianDate::from(self)
    }

    /// Signed number of days from `earlier` to `self`.
    pub fn days_since(self, earlier: Self) -> i64 {
        self.to_gregorian().days_since(earlier.to_gregorian())
    }

    /// Name of this date's month in `locale`
    pub fn month_name(self, locale: Locale) -> &'static str {
        locale.month_name(self.month)
    }

    /// Long human form, e.g. `"1 Farvardin 1403"` or `"۱ فروردین ۱۴۰۳"`.
    pub fn format_long(self, locale: Locale) -> String {
        let text = format!("{} {} {}", self.day, self.month_name(locale), self.year);
        match locale {
            Locale::Persian => to_persian_digits(&text),
            Locale::English => text,
        }
    }
}

impl From<JalaaliDate> for GregorianDate {
    fn from(date: JalaaliDate) -> Self {
        let (year, month, day) = jalaali_to_gregorian(
            i32::from(date.year),
            i32::from(date.month),
            i32::from(date.day),
        );
        // Jalaali years 1..=9377 land on Gregorian 622..=9999
        Self {
            year: u16::try_from(year).unwrap_or(MAX_GREGORIAN_YEAR),
            month: u8::try_from(month).unwrap_or(MAX_MONTH),
            day: u8::try_from(day).unwrap_or(MIN_DAY),
        }
    }
}

impl TryFrom<GregorianDate> for JalaaliDate {
    type Error = DateError;

    fn try_from(date: GregorianDate) -> Result<Self, Self::Error> {
        let (year, month, day) = gregorian_to_jalaali(
            i32::from(date.year),
            i32::from(date.month),
            i32::from(date.day),
        );
        Self::from_parts(year, month, day)
    }
}

impl FromStr for JalaaliDate {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (year, month, day) = split_three(s, JALAALI_SEPARATOR)?;
        Self::from_parts(year, month, day)
    }
}

impl serde::Serialize for JalaaliDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for JalaaliDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Display language for month names and digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
pub enum Locale {
    /// Persian script, Persian digits
    #[default]
    #[serde(rename = "fa")]
    Persian,
    /// Latin transliteration, ASCII digits
    #[serde(rename = "en")]
    English,
}

const PERSIAN_MONTH_NAMES: [&str; 12] = [
    "فروردین",
    "اردیبهشت",
    "خرداد",
    "تیر",
    "مرداد",
    "شهریور",
    "مهر",
    "آبان",
    "آذر",
    "دی",
    "بهمن",
    "اسفند",
];

const ENGLISH_MONTH_NAMES: [&str; 12] = [
    "Farvardin",
    "Ordibehesht",
    "Khordad",
    "Tir",
    "Mordad",
    "Shahrivar",
    "Mehr",
    "Aban",
    "Azar",
    "Dey",
    "Bahman",
    "Esfand",
];

impl Locale {
    /// Name of Jalaali `month` (1..=12), or an empty string for anything else.
    pub fn month_name(self, month: u8) -> &'static str {
        let names = match self {
            Self::Persian => &PERSIAN_MONTH_NAMES,
            Self::English => &ENGLISH_MONTH_NAMES,
        };
        usize::from(month)
            .checked_sub(1)
            .and_then(|index| names.get(index))
            .copied()
            .unwrap_or_default()
    }
}

fn validate_month(month: i32) -> Result<u8, DateError> {
    u8::try_from(month)
        .ok()
        .filter(|m| (1..=MAX_MONTH).contains(m))
        .ok_or(DateError::InvalidMonth(month))
}

// Helper functions

pub const fn is_leap_year(year: u16) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

pub const fn days_in_month(year: u16, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}
