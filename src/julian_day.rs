//! This module implements `JulianDayNumber` and the two conversions.

use crate::{Calendar, CalendarDate, JdnError, JdnResult, Month};

/// The Julian Day Number of January 1, 1970.
const UNIX_EPOCH_JDN: i64 = 2_440_588;

/// A Julian Day Number: the count of days since January 1, 4713 BCE in the
/// proleptic Julian calendar.
///
/// The conversions are exact for any value within [`JulianDayNumber::MIN`]
/// and [`JulianDayNumber::MAX`]. Values outside that range may overflow.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct JulianDayNumber(i64);

impl JulianDayNumber {
    /// The smallest supported Julian Day Number, -2^60.
    pub const MIN: Self = Self(-(1 << 60));
    /// The largest supported Julian Day Number, 2^60.
    pub const MAX: Self = Self(1 << 60);
    /// January 1, 4713 BCE (Julian).
    pub const EPOCH: Self = Self(0);
    /// October 15, 1582, the first day of the Gregorian calendar.
    pub const GREGORIAN_CUTOVER: Self = Self(jdn_equations::GREGORIAN_CUTOVER_JDN);
    /// January 1, 1970.
    pub const UNIX_EPOCH: Self = Self(UNIX_EPOCH_JDN);

    /// Creates a new `JulianDayNumber` without any validation.
    #[inline]
    #[must_use]
    pub const fn new_unchecked(julian_day: i64) -> Self {
        Self(julian_day)
    }

    /// Creates a new `JulianDayNumber` that is within the supported range.
    pub fn try_new(julian_day: i64) -> JdnResult<Self> {
        if !(Self::MIN.0..=Self::MAX.0).contains(&julian_day) {
            #[cfg(feature = "log")]
            log::error!("Julian Day Number {julian_day} is outside the supported range");
            return Err(
                JdnError::range().with_message("Julian Day Number not within a valid range.")
            );
        }
        Ok(Self(julian_day))
    }

    /// Returns the day count.
    #[inline]
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }

    /// Converts a date into its Julian Day Number.
    ///
    /// The day is not checked against the month, so February 30 is the day
    /// after February 29 whether or not that exists.
    #[must_use]
    pub fn from_date(date: CalendarDate) -> Self {
        #[cfg(feature = "log")]
        {
            if crate::calendar::is_reform_gap(date.year(), date.month(), date.day()) {
                log::debug!("{date:?} falls in the 1582 reform gap; reckoning it as Julian");
            }
            log::trace!(
                "reckoning {date:?} in the {} calendar",
                Calendar::for_date(date.year(), date.month(), date.day())
            );
        }
        Self(jdn_equations::julian_day_number(
            date.year(),
            i64::from(date.month().ordinal()),
            date.day(),
        ))
    }

    /// Converts this Julian Day Number into a date in the calendar in force
    /// on that day.
    #[must_use]
    pub fn to_date(self) -> CalendarDate {
        #[cfg(feature = "log")]
        log::trace!("reckoning {self:?} in the {} calendar", self.calendar());
        let (year, month, day) = jdn_equations::ymd_from_julian_day_number(self.0);
        CalendarDate::new_unchecked(year, Month::from_month_index(month), day)
    }

    /// Returns the calendar in force on this day.
    #[inline]
    #[must_use]
    pub const fn calendar(self) -> Calendar {
        Calendar::for_julian_day(self)
    }

    /// Adds a number of days, returning `None` on overflow.
    #[must_use]
    pub const fn checked_add_days(self, days: i64) -> Option<Self> {
        match self.0.checked_add(days) {
            Some(julian_day) => Some(Self(julian_day)),
            None => None,
        }
    }

    /// Returns the number of days from `self` until `other`.
    ///
    /// Exact when both values are within [`JulianDayNumber::MIN`] and
    /// [`JulianDayNumber::MAX`]; wraps otherwise.
    #[inline]
    #[must_use]
    pub const fn days_until(self, other: Self) -> i64 {
        other.0.wrapping_sub(self.0)
    }

    /// Creates a `JulianDayNumber` from a count of days since January 1, 1970.
    ///
    /// Exact for results within [`JulianDayNumber::MIN`] and
    /// [`JulianDayNumber::MAX`]; wraps otherwise.
    #[inline]
    #[must_use]
    pub const fn from_unix_epoch_days(epoch_days: i64) -> Self {
        Self(epoch_days.wrapping_add(UNIX_EPOCH_JDN))
    }

    /// Returns the count of days since January 1, 1970.
    ///
    /// Exact within [`JulianDayNumber::MIN`] and [`JulianDayNumber::MAX`];
    /// wraps otherwise.
    #[inline]
    #[must_use]
    pub const fn to_unix_epoch_days(self) -> i64 {
        self.0.wrapping_sub(UNIX_EPOCH_JDN)
    }
}

impl From<CalendarDate> for JulianDayNumber {
    fn from(value: CalendarDate) -> Self {
        Self::from_date(value)
    }
}

impl From<JulianDayNumber> for CalendarDate {
    fn from(value: JulianDayNumber) -> Self {
        value.to_date()
    }
}

impl From<JulianDayNumber> for i64 {
    fn from(value: JulianDayNumber) -> Self {
        value.0
    }
}

/// Converts a year, month, and day into a Julian Day Number.
///
/// Years have no year zero: `-1` is 1 BCE and a year of `0` is read as `1`.
#[must_use]
pub fn to_number(year: i64, month: Month, day: i64) -> i64 {
    JulianDayNumber::from_date(CalendarDate::new_unchecked(year, month, day)).get()
}

/// Converts a Julian Day Number into a year, month, and day in the Julian
/// or Gregorian calendar, whichever was in force on that day.
#[must_use]
pub fn from_number(julian_day: i64) -> (i64, Month, i64) {
    let date = JulianDayNumber::new_unchecked(julian_day).to_date();
    (date.year(), date.month(), date.day())
}
