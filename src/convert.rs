//! Raw day-count arithmetic between the Gregorian and Jalaali calendars.
//!
//! Both directions work on plain integer triples and perform no validation:
//! an impossible input date yields a meaningless (but well-defined) output
//! triple, never a panic. Validation belongs to the date types and the
//! string layer built on top.
//!
//! Intermediates are `i64` and every division is a floor division, so dates
//! before the alignment epoch reduce the same way as later ones. The two
//! functions are exact inverses for Gregorian `0001-01-01..=9999-12-31`
//! (Jalaali `-621/10/11..=9378/10/10`).

use crate::consts::{
    CENTURY_CYCLE, DAYS_BEFORE_MONTH, DAYS_IN_MONTH, DAYS_PER_100_YEARS, DAYS_PER_33_YEARS,
    DAYS_PER_400_YEARS, DAYS_PER_4_YEARS, DAYS_PER_YEAR, ESFAND_DAYS, ESFAND_DAYS_LEAP, FEBRUARY,
    FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE, GREGORIAN_EPOCH_OFFSET, JALAALI_EPOCH_OFFSET,
    JALAALI_EPOCH_SHIFT, JALAALI_FIRST_HALF_DAYS, JALAALI_GRAND_CYCLE_YEARS,
    JALAALI_LEAPS_PER_GRAND_CYCLE, JALAALI_LONG_MONTH_DAYS, JALAALI_LONG_MONTHS,
    JALAALI_SHORT_MONTH_DAYS, LEAP_YEAR_CYCLE, MAX_MONTH,
};

const LONG_MONTH: i64 = JALAALI_LONG_MONTH_DAYS as i64;
const SHORT_MONTH: i64 = JALAALI_SHORT_MONTH_DAYS as i64;
const FIRST_SHORT_MONTH: i64 = JALAALI_LONG_MONTHS as i64 + 1;
const LEAP_CYCLE: i64 = LEAP_YEAR_CYCLE as i64;
const CENTURY: i64 = CENTURY_CYCLE as i64;
const FOUR_CENTURIES: i64 = GREGORIAN_CYCLE as i64;

/// Converts a Gregorian `(year, month, day)` to the Jalaali calendar.
///
/// ```
/// use jalaali_date::gregorian_to_jalaali;
///
/// assert_eq!(gregorian_to_jalaali(1979, 2, 11), (1357, 11, 22));
/// ```
pub fn gregorian_to_jalaali(gy: i32, gm: i32, gd: i32) -> (i32, i32, i32) {
    let mut days = gregorian_day_number(gy, gm, gd);

    let mut jy = -JALAALI_EPOCH_SHIFT + JALAALI_GRAND_CYCLE_YEARS * days.div_euclid(DAYS_PER_33_YEARS);
    days = days.rem_euclid(DAYS_PER_33_YEARS);
    jy += LEAP_CYCLE * (days / DAYS_PER_4_YEARS);
    days %= DAYS_PER_4_YEARS;
    if days > DAYS_PER_YEAR {
        jy += (days - 1) / DAYS_PER_YEAR;
        days = (days - 1) % DAYS_PER_YEAR;
    }

    let (jm, jd) = if days < JALAALI_FIRST_HALF_DAYS {
        (1 + days / LONG_MONTH, 1 + days % LONG_MONTH)
    } else {
        let rest = days - JALAALI_FIRST_HALF_DAYS;
        (FIRST_SHORT_MONTH + rest / SHORT_MONTH, 1 + rest % SHORT_MONTH)
    };

    (narrow(jy), narrow(jm), narrow(jd))
}

/// Converts a Jalaali `(year, month, day)` to the Gregorian calendar.
///
/// ```
/// use jalaali_date::jalaali_to_gregorian;
///
/// assert_eq!(jalaali_to_gregorian(1403, 1, 1), (2024, 3, 20));
/// ```
pub fn jalaali_to_gregorian(jy: i32, jm: i32, jd: i32) -> (i32, i32, i32) {
    let mut days = jalaali_day_number(jy, jm, jd);

    let mut gy = FOUR_CENTURIES * days.div_euclid(DAYS_PER_400_YEARS);
    days = days.rem_euclid(DAYS_PER_400_YEARS);
    if days > DAYS_PER_100_YEARS {
        // the first century of the cycle is the only one with 36525 days
        days -= 1;
        gy += CENTURY * (days / DAYS_PER_100_YEARS);
        days %= DAYS_PER_100_YEARS;
        if days >= DAYS_PER_YEAR {
            days += 1;
        }
    }
    gy += LEAP_CYCLE * (days / DAYS_PER_4_YEARS);
    days %= DAYS_PER_4_YEARS;
    if days > DAYS_PER_YEAR {
        gy += (days - 1) / DAYS_PER_YEAR;
        days = (days - 1) % DAYS_PER_YEAR;
    }

    let mut gd = days + 1;
    let mut gm: i64 = 1;
    while gm <= i64::from(MAX_MONTH) {
        let length = gregorian_month_length(gy, gm);
        if gd <= length {
            break;
        }
        gd -= length;
        gm += 1;
    }

    (narrow(gy), narrow(gm), narrow(gd))
}

/// Returns true when Esfand of `jy` has 30 days.
///
/// The leap pattern is the one implied by the 33-year arithmetic above, so
/// the answer always agrees with the conversion functions.
pub fn is_jalaali_leap_year(jy: i32) -> bool {
    let (gy, gm, gd) = jalaali_to_gregorian(jy, 12, 30);
    gregorian_to_jalaali(gy, gm, gd) == (jy, 12, 30)
}

/// Number of days in Jalaali month `jm` (1..=12) of year `jy`.
pub fn jalaali_days_in_month(jy: i32, jm: u8) -> u8 {
    debug_assert!(jm != 0 && jm <= MAX_MONTH);

    if jm <= JALAALI_LONG_MONTHS {
        JALAALI_LONG_MONTH_DAYS
    } else if jm < MAX_MONTH {
        JALAALI_SHORT_MONTH_DAYS
    } else if is_jalaali_leap_year(jy) {
        ESFAND_DAYS_LEAP
    } else {
        ESFAND_DAYS
    }
}

/// Continuous day count of a Gregorian date on the conversion's internal epoch.
///
/// Only differences between two day numbers are meaningful.
pub(crate) fn gregorian_day_number(gy: i32, gm: i32, gd: i32) -> i64 {
    let gy = i64::from(gy);
    // leap days are counted up to the end of February of the year in question
    let gy2 = if gm > i32::from(FEBRUARY) { gy + 1 } else { gy };

    GREGORIAN_EPOCH_OFFSET + DAYS_PER_YEAR * gy + (gy2 + 3).div_euclid(LEAP_CYCLE)
        - (gy2 + 99).div_euclid(CENTURY)
        + (gy2 + 399).div_euclid(FOUR_CENTURIES)
        + i64::from(gd)
        + days_before_month(gm)
}

fn jalaali_day_number(jy: i32, jm: i32, jd: i32) -> i64 {
    let jy = i64::from(jy) + JALAALI_EPOCH_SHIFT;
    let jm = i64::from(jm);
    let month_offset = if jm < FIRST_SHORT_MONTH {
        (jm - 1) * LONG_MONTH
    } else {
        (jm - FIRST_SHORT_MONTH) * SHORT_MONTH + JALAALI_FIRST_HALF_DAYS
    };

    -JALAALI_EPOCH_OFFSET
        + DAYS_PER_YEAR * jy
        + jy.div_euclid(JALAALI_GRAND_CYCLE_YEARS) * JALAALI_LEAPS_PER_GRAND_CYCLE
        + (jy.rem_euclid(JALAALI_GRAND_CYCLE_YEARS) + 3) / 4
        + i64::from(jd)
        + month_offset
}

/// Out-of-range months contribute nothing.
fn days_before_month(gm: i32) -> i64 {
    usize::try_from(gm)
        .ok()
        .and_then(|month| DAYS_BEFORE_MONTH.get(month.wrapping_sub(1)))
        .copied()
        .unwrap_or(0)
}

const fn is_gregorian_leap(year: i64) -> bool {
    (year % LEAP_CYCLE == 0 && year % CENTURY != 0) || year % FOUR_CENTURIES == 0
}

fn gregorian_month_length(year: i64, month: i64) -> i64 {
    if month == i64::from(FEBRUARY) && is_gregorian_leap(year) {
        return i64::from(FEBRUARY_DAYS_LEAP);
    }
    usize::try_from(month)
        .ok()
        .and_then(|index| DAYS_IN_MONTH.get(index))
        .map_or(0, |&days| i64::from(days))
}

/// Saturates instead of wrapping for absurd inputs near the `i32` limits.
fn narrow(value: i64) -> i32 {
    i32::try_from(value).unwrap_or(if value < 0 { i32::MIN } else { i32::MAX })
}
