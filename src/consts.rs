/// Smallest Gregorian year accepted by [`GregorianDate`](crate::GregorianDate)
pub const MIN_GREGORIAN_YEAR: u16 = 1;
/// Largest Gregorian year accepted by [`GregorianDate`](crate::GregorianDate)
pub const MAX_GREGORIAN_YEAR: u16 = 9999;

/// Smallest Jalaali year accepted by [`JalaaliDate`](crate::JalaaliDate)
pub const MIN_JALAALI_YEAR: u16 = 1;
/// Largest Jalaali year accepted by [`JalaaliDate`](crate::JalaaliDate).
/// Jalaali 9378 runs past Gregorian 9999-12-31, so it is excluded.
pub const MAX_JALAALI_YEAR: u16 = 9377;

/// Maximum valid month (Esfand / December)
pub const MAX_MONTH: u8 = 12;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;

/// Month number for February
pub const FEBRUARY: u8 = 2;
/// Month number for March
pub const MARCH: u8 = 3;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each Gregorian month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Days elapsed in a common Gregorian year before the first of each month
pub(crate) const DAYS_BEFORE_MONTH: [i64; 12] =
    [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

/// Jalaali months 1..=6 have this many days
pub const JALAALI_LONG_MONTH_DAYS: u8 = 31;
/// Jalaali months 7..=11 have this many days
pub const JALAALI_SHORT_MONTH_DAYS: u8 = 30;
/// Esfand (month 12) in a common year
pub const ESFAND_DAYS: u8 = 29;
/// Esfand (month 12) in a leap year
pub const ESFAND_DAYS_LEAP: u8 = 30;
/// Number of Jalaali months with 31 days
pub const JALAALI_LONG_MONTHS: u8 = 6;
/// Day-of-year (0-based) where the 30-day months begin
pub(crate) const JALAALI_FIRST_HALF_DAYS: i64 = 186;

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: u16 = 100;
/// ...they are divisible by 400
pub(crate) const GREGORIAN_CYCLE: u16 = 400;

/// Days in the 400-year Gregorian cycle
pub(crate) const DAYS_PER_400_YEARS: i64 = 146_097;
/// Days in a 100-year Gregorian sub-cycle (ending on a common year)
pub(crate) const DAYS_PER_100_YEARS: i64 = 36_524;
/// Days in a 4-year cycle with one leap year
pub(crate) const DAYS_PER_4_YEARS: i64 = 1461;
/// Days in the 33-year Jalaali grand cycle (8 leap years)
pub(crate) const DAYS_PER_33_YEARS: i64 = 12_053;
/// Jalaali years in a grand cycle
pub(crate) const JALAALI_GRAND_CYCLE_YEARS: i64 = 33;
/// Leap years in a Jalaali grand cycle
pub(crate) const JALAALI_LEAPS_PER_GRAND_CYCLE: i64 = 8;
/// Days in a common year
pub(crate) const DAYS_PER_YEAR: i64 = 365;

/// Shift applied to Jalaali years so day counts stay positive for Gregorian year 1
pub(crate) const JALAALI_EPOCH_SHIFT: i64 = 1595;
/// Day-count offset aligning a Gregorian date with the shifted Jalaali epoch
pub(crate) const GREGORIAN_EPOCH_OFFSET: i64 = 355_666;
/// Day-count offset aligning a Jalaali date with the Gregorian epoch
pub(crate) const JALAALI_EPOCH_OFFSET: i64 = 355_668;

/// Jalaali date component separator
pub const JALAALI_SEPARATOR: char = '/';
/// Gregorian date component separator (ISO 8601 format)
pub const GREGORIAN_SEPARATOR: char = '-';
/// Separator between the two ends of a date range
pub const RANGE_SEPARATOR: &str = " - ";
