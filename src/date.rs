//! This module implements `CalendarDate`.

use crate::{Calendar, JdnError, JdnResult, JulianDayNumber, Month};

/// The largest supported magnitude for a year or day.
const MAX_YEAR_OR_DAY: i64 = 1_000_000_000_000_000;

/// A year, month, and day in the proleptic Julian or Gregorian calendar.
///
/// Years have no year zero: year `-1` is 1 BCE and is immediately followed by
/// year `1`. The day is not validated against the length of its month.
///
/// Ordering compares year, then month, then day. It is chronological only for
/// days within their month: February 40 sorts before March 5 even though it
/// falls on March 12. Compare Julian Day Numbers for chronological order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate {
    year: i64,
    month: Month,
    day: i64,
}

impl CalendarDate {
    /// Creates a new `CalendarDate` without any validation.
    #[inline]
    #[must_use]
    pub const fn new_unchecked(year: i64, month: Month, day: i64) -> Self {
        Self { year, month, day }
    }

    /// Creates a new `CalendarDate`, validating the month ordinal and that the
    /// year and day are within the supported range.
    ///
    /// The day is not checked against the length of the month.
    pub fn try_new(year: i64, month: u8, day: i64) -> JdnResult<Self> {
        let month = Month::try_from(month)?;
        let supported = -MAX_YEAR_OR_DAY..=MAX_YEAR_OR_DAY;
        if !supported.contains(&year) || !supported.contains(&day) {
            #[cfg(feature = "log")]
            log::error!("{year}-{month:?}-{day} is outside the supported range");
            return Err(
                JdnError::range().with_message("CalendarDate not within a valid range.")
            );
        }
        Ok(Self::new_unchecked(year, month, day))
    }

    /// Returns the year.
    #[inline]
    #[must_use]
    pub const fn year(&self) -> i64 {
        self.year
    }

    /// Returns the month.
    #[inline]
    #[must_use]
    pub const fn month(&self) -> Month {
        self.month
    }

    /// Returns the day.
    #[inline]
    #[must_use]
    pub const fn day(&self) -> i64 {
        self.day
    }

    /// Returns the calendar this date is reckoned in.
    #[inline]
    #[must_use]
    pub const fn calendar(&self) -> Calendar {
        Calendar::for_date(self.year, self.month, self.day)
    }

    /// Returns this date's Julian Day Number.
    #[inline]
    #[must_use]
    pub fn to_julian_day_number(self) -> JulianDayNumber {
        JulianDayNumber::from_date(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn try_new_validates_month_only() {
        let date = CalendarDate::try_new(2023, 2, 30).unwrap();
        assert_eq!(date.month(), Month::February);
        assert_eq!(date.day(), 30);

        let err = CalendarDate::try_new(2023, 13, 1).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Range);
        assert!(CalendarDate::try_new(2023, 0, 1).is_err());
    }

    #[test]
    fn try_new_range() {
        assert!(CalendarDate::try_new(1_000_000_000_000_000, 1, 1).is_ok());
        assert!(CalendarDate::try_new(-1_000_000_000_000_001, 1, 1).is_err());
        assert!(CalendarDate::try_new(1, 1, i64::MAX).is_err());
        assert!(CalendarDate::try_new(i64::MIN, 1, 1).is_err());
        assert!(CalendarDate::try_new(1, 1, i64::MIN).is_err());
    }

    #[test]
    fn ordering() {
        let a = CalendarDate::new_unchecked(-1, Month::December, 31);
        let b = CalendarDate::new_unchecked(1, Month::January, 1);
        let c = CalendarDate::new_unchecked(1, Month::February, 1);
        assert!(a < b);
        assert!(b < c);
    }

    #[test]
    fn ordering_is_by_fields_for_overflowing_days() {
        let overflowing = CalendarDate::new_unchecked(2023, Month::February, 40);
        let march_fifth = CalendarDate::new_unchecked(2023, Month::March, 5);
        assert!(overflowing < march_fifth);
        assert!(overflowing.to_julian_day_number() > march_fifth.to_julian_day_number());
        assert_eq!(
            overflowing.to_julian_day_number().to_date(),
            CalendarDate::new_unchecked(2023, Month::March, 12)
        );
    }

    #[test]
    fn calendar_and_julian_day() {
        let date = CalendarDate::new_unchecked(1582, Month::October, 15);
        assert_eq!(date.calendar(), Calendar::Gregorian);
        assert_eq!(date.to_julian_day_number(), JulianDayNumber::GREGORIAN_CUTOVER);
        let date = CalendarDate::new_unchecked(1582, Month::October, 4);
        assert_eq!(date.calendar(), Calendar::Julian);
    }

    #[test]
    fn largest_supported_year() {
        let date = CalendarDate::try_new(1_000_000_000_000_000, 12, 31).unwrap();
        assert_eq!(date.to_julian_day_number().to_date(), date);
        let date = CalendarDate::try_new(-1_000_000_000_000_000, 1, 1).unwrap();
        assert_eq!(date.to_julian_day_number().to_date(), date);
    }
}
