//! Age as whole years plus the days elapsed since the most recent birthday.
//!
//! Calendar subtraction is exact: leap days inside the elapsed window are
//! counted once, and a Feb 29 birthday falls on Mar 1 in common years.

use serde::{Deserialize, Serialize};

use crate::clock::Clock;
use crate::consts::{MARCH, MIN_DAY};
use crate::format::{is_valid_persian_date, parse_persian_date};
use crate::types::days_in_month;
use crate::{DateError, GregorianDate, JalaaliDate, prelude::*};

/// Elapsed time since a birth date: `years` full years plus `days` more days.
/// `days` is always below 366.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[display(fmt = "{years} years, {days} days")]
pub struct Age {
    pub years: u16,
    pub days: u16,
}

/// A birth date as supplied by a caller: a typed date or an ISO 8601 string.
#[derive(Debug, Clone, PartialEq, Eq, From)]
pub enum Birthdate {
    Date(GregorianDate),
    /// `YYYY-MM-DD`, or an RFC 3339 timestamp whose local date is used
    Iso(String),
}

impl From<&str> for Birthdate {
    fn from(s: &str) -> Self {
        Self::Iso(s.to_owned())
    }
}

impl From<JalaaliDate> for Birthdate {
    fn from(date: JalaaliDate) -> Self {
        Self::Date(date.to_gregorian())
    }
}

impl Birthdate {
    /// Resolves to a calendar date.
    ///
    /// # Errors
    /// Returns an error of kind [`ErrorKind::InvalidDate`](crate::ErrorKind)
    /// if the string is not a valid date.
    pub fn resolve(&self) -> Result<GregorianDate, DateError> {
        match self {
            Self::Date(date) => Ok(*date),
            Self::Iso(s) => parse_iso(s),
        }
    }
}

fn parse_iso(s: &str) -> Result<GregorianDate, DateError> {
    let trimmed = s.trim();
    if trimmed.contains(['T', 't']) {
        let timestamp = chrono::DateTime::parse_from_rfc3339(trimmed)
            .map_err(|_| DateError::InvalidIso(s.to_owned()))?;
        return GregorianDate::try_from(timestamp.date_naive());
    }

    trimmed.parse::<GregorianDate>().map_err(|err| match err {
        DateError::Parse(_) => DateError::InvalidIso(s.to_owned()),
        other => other,
    })
}

/// Age at `today` of someone born on `birth`.
///
/// # Errors
/// Returns `DateError::FutureDate` if `birth` is after `today`.
pub fn age_between(birth: GregorianDate, today: GregorianDate) -> Result<Age, DateError> {
    if birth > today {
        tracing::debug!(%birth, %today, "birth date is in the future");
        return Err(DateError::FutureDate { birth, today });
    }

    let birthday_passed = (today.month(), today.day()) >= (birth.month(), birth.day());
    let anniversary_year = if birthday_passed {
        today.year()
    } else {
        today.year().saturating_sub(1)
    };

    let last_birthday = birthday_in(anniversary_year, birth)?;
    let age = Age {
        years: anniversary_year - birth.year(),
        days: u16::try_from(today.days_since(last_birthday)).unwrap_or_default(),
    };

    tracing::trace!(%birth, %today, %age, "computed age");
    Ok(age)
}

/// Age of someone born on `birthdate`, as of `clock`'s today.
///
/// # Errors
/// Returns an `InvalidDate`-kind error for an unparseable birth date and
/// `DateError::FutureDate` for one after today.
pub fn calculate_age<C: Clock + ?Sized>(
    birthdate: impl Into<Birthdate>,
    clock: &C,
) -> Result<Age, DateError> {
    let birth = birthdate.into().resolve()?;
    let today = clock.today()?;
    age_between(birth, today)
}

/// Age of someone whose birth date is given as a Persian `YYYY/MM/DD` string.
///
/// The string only has to pass the coarse [`is_valid_persian_date`] check;
/// it is then converted without further range checks.
///
/// # Errors
/// Returns `DateError::InvalidPersian` if the check fails, and the errors of
/// [`calculate_age`] otherwise.
pub fn calculate_age_from_persian<C: Clock + ?Sized>(
    persian: &str,
    clock: &C,
) -> Result<Age, DateError> {
    if !is_valid_persian_date(persian) {
        return Err(DateError::InvalidPersian(persian.to_owned()));
    }

    let gregorian = parse_persian_date(persian)?.to_gregorian_parts();
    let birth = GregorianDate::from_parts(gregorian.year, gregorian.month, gregorian.day)?;
    calculate_age(birth, clock)
}

fn birthday_in(year: u16, birth: GregorianDate) -> Result<GregorianDate, DateError> {
    if birth.day() > days_in_month(year, birth.month()) {
        return GregorianDate::new(year, MARCH, MIN_DAY);
    }
    GregorianDate::new(year, birth.month(), birth.day())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;
    use crate::clock::FixedClock;

    fn date(year: u16, month: u8, day: u8) -> GregorianDate {
        GregorianDate::new(year, month, day).unwrap()
    }

    fn today() -> FixedClock {
        FixedClock(date(2026, 10, 16))
    }

    #[test]
    fn test_exact_anniversary() {
        let age = calculate_age(date(2016, 10, 16), &today()).unwrap();
        assert_eq!(age, Age { years: 10, days: 0 });
    }

    #[test]
    fn test_anniversary_plus_one_day() {
        let age = calculate_age(date(2016, 10, 15), &today()).unwrap();
        assert_eq!(age, Age { years: 10, days: 1 });
    }

    #[test]
    fn test_birthday_not_yet_reached() {
        let age = calculate_age(date(1990, 12, 25), &today()).unwrap();
        assert_eq!(age, Age { years: 35, days: 295 });
    }

    #[test]
    fn test_born_today() {
        let age = calculate_age(date(2026, 10, 16), &today()).unwrap();
        assert_eq!(age, Age { years: 0, days: 0 });
    }

    #[test]
    fn test_future_birth_date() {
        let result = calculate_age(date(2026, 10, 17), &today());
        assert_eq!(
            result,
            Err(DateError::FutureDate {
                birth: date(2026, 10, 17),
                today: date(2026, 10, 16)
            })
        );
        assert_eq!(result.unwrap_err().kind(), ErrorKind::FutureDate);
    }

    #[test]
    fn test_leap_day_outside_window() {
        // Feb 29 2000 precedes the birthday, so it is not in the window
        let age = age_between(date(2000, 2, 28), date(2001, 3, 1)).unwrap();
        assert_eq!(age, Age { years: 1, days: 1 });
    }

    #[test]
    fn test_leap_day_inside_window() {
        let age = age_between(date(2003, 2, 28), date(2004, 3, 1)).unwrap();
        assert_eq!(age, Age { years: 1, days: 2 });
    }

    #[test]
    fn test_leap_day_birthday() {
        let birth = date(2000, 2, 29);

        let age = age_between(birth, date(2024, 2, 29)).unwrap();
        assert_eq!(age, Age { years: 24, days: 0 });

        let age = age_between(birth, date(2025, 2, 28)).unwrap();
        assert_eq!(age, Age { years: 24, days: 365 });

        let age = age_between(birth, date(2025, 3, 1)).unwrap();
        assert_eq!(age, Age { years: 25, days: 0 });
    }

    #[test]
    fn test_days_stay_below_a_year() {
        let today = date(2024, 2, 29);
        for (month, day) in [(1, 1), (2, 28), (3, 1), (6, 15), (12, 31)] {
            let age = age_between(date(1999, month, day), today).unwrap();
            assert!(age.days < 366, "{age} for 1999-{month}-{day}");
        }
    }

    #[test]
    fn test_iso_string_birthdate() {
        let age = calculate_age("2016-10-16", &today()).unwrap();
        assert_eq!(age, Age { years: 10, days: 0 });

        let age = calculate_age(String::from("2016-10-15"), &today()).unwrap();
        assert_eq!(age, Age { years: 10, days: 1 });
    }

    #[test]
    fn test_rfc3339_birthdate_uses_its_own_date() {
        let age = calculate_age("2016-10-16T23:30:00+03:30", &today()).unwrap();
        assert_eq!(age, Age { years: 10, days: 0 });
    }

    #[test]
    fn test_invalid_iso_birthdate() {
        let garbage = calculate_age("yesterday", &today()).unwrap_err();
        assert_eq!(garbage, DateError::InvalidIso("yesterday".to_owned()));
        assert_eq!(garbage.kind(), ErrorKind::InvalidDate);

        let impossible = calculate_age("2016-02-30", &today()).unwrap_err();
        assert!(matches!(impossible, DateError::InvalidDay { .. }));
        assert_eq!(impossible.kind(), ErrorKind::InvalidDate);

        let bad_timestamp = calculate_age("2016-10-16T25:00:00Z", &today()).unwrap_err();
        assert_eq!(bad_timestamp.kind(), ErrorKind::InvalidDate);
    }

    #[test]
    fn test_jalaali_birthdate() {
        let birth = JalaaliDate::new(1395, 7, 25).unwrap();
        let age = calculate_age(birth, &today()).unwrap();
        assert_eq!(age, Age { years: 10, days: 0 });
    }

    #[test]
    fn test_calculate_age_from_persian() {
        let age = calculate_age_from_persian("1395/07/25", &today()).unwrap();
        assert_eq!(age, Age { years: 10, days: 0 });

        let age = calculate_age_from_persian("1369/01/01", &today()).unwrap();
        assert_eq!(age, calculate_age(date(1990, 3, 21), &today()).unwrap());
    }

    #[test]
    fn test_calculate_age_from_persian_invalid() {
        for input in ["1403/13/01", "0/01/01", "not-a-date", ""] {
            let err = calculate_age_from_persian(input, &today()).unwrap_err();
            assert_eq!(err, DateError::InvalidPersian(input.to_owned()));
            assert_eq!(err.kind(), ErrorKind::InvalidDate);
        }
    }

    #[test]
    fn test_calculate_age_from_persian_future() {
        let err = calculate_age_from_persian("1405/07/25", &today()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::FutureDate);
    }

    #[test]
    fn test_dyn_clock() {
        let clock: Box<dyn Clock> = Box::new(today());
        let age = calculate_age(date(2016, 10, 16), clock.as_ref()).unwrap();
        assert_eq!(age.years, 10);
    }

    #[test]
    fn test_age_display_and_serde() {
        let age = Age { years: 10, days: 1 };
        assert_eq!(age.to_string(), "10 years, 1 days");

        let json = serde_json::to_string(&age).unwrap();
        assert_eq!(json, r#"{"years":10,"days":1}"#);
    }
}
