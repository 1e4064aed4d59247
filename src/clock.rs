//! Sources of "today" for age computations.

use crate::{DateError, GregorianDate};

/// Supplies the current calendar date.
///
/// Age computations read it once per call so a single computation never
/// straddles two different days.
pub trait Clock: Send + Sync {
    /// The current date.
    ///
    /// # Errors
    /// Returns `DateError` if the current date cannot be represented as a
    /// `GregorianDate`.
    fn today(&self) -> Result<GregorianDate, DateError>;
}

/// The system wall clock in the local time zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> Result<GregorianDate, DateError> {
        GregorianDate::try_from(chrono::Local::now().date_naive())
    }
}

/// A clock pinned to one date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub GregorianDate);

impl Clock for FixedClock {
    fn today(&self) -> Result<GregorianDate, DateError> {
        Ok(self.0)
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn today(&self) -> Result<GregorianDate, DateError> {
        (**self).today()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock() {
        let date = GregorianDate::new(2024, 3, 20).unwrap();
        assert_eq!(FixedClock(date).today(), Ok(date));
    }

    #[test]
    fn test_system_clock_matches_chrono() {
        let before = chrono::Local::now().date_naive();
        let today = SystemClock.today().unwrap();
        let after = chrono::Local::now().date_naive();

        let today = chrono::NaiveDate::from_ymd_opt(
            i32::from(today.year()),
            u32::from(today.month()),
            u32::from(today.day()),
        )
        .unwrap();
        assert!(before <= today && today <= after);
    }

    #[test]
    fn test_clock_by_reference() {
        let date = GregorianDate::new(2000, 1, 1).unwrap();
        let clock = FixedClock(date);
        let dynamic: &dyn Clock = &clock;
        assert_eq!(dynamic.today(), Ok(date));
        let by_ref = &clock;
        assert_eq!(<&FixedClock as Clock>::today(&by_ref), Ok(date));
    }
}
