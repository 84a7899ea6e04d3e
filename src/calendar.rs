//! This module implements the calendar selection rule.
//!
//! Dates up to and including October 4, 1582 are reckoned in the proleptic
//! Julian calendar. Dates from October 15, 1582 onward are reckoned in the
//! proleptic Gregorian calendar. The ten days in between do not exist in
//! either reckoning; they are accepted as Julian dates but never produced.

use core::fmt;

use crate::{JulianDayNumber, Month};

/// The calendar in force for a given date or Julian Day Number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Calendar {
    /// The Julian calendar, in force until October 4, 1582.
    Julian,
    /// The Gregorian calendar, in force from October 15, 1582.
    Gregorian,
}

impl Calendar {
    /// Returns the calendar used to reckon the provided date.
    #[must_use]
    pub const fn for_date(year: i64, month: Month, day: i64) -> Self {
        let year = jdn_equations::continuous_year(year);
        if jdn_equations::is_gregorian_date(year, month as i64, day) {
            Self::Gregorian
        } else {
            Self::Julian
        }
    }

    /// Returns the calendar in force on the provided Julian Day Number.
    #[must_use]
    pub const fn for_julian_day(julian_day: JulianDayNumber) -> Self {
        if julian_day.get() >= jdn_equations::GREGORIAN_CUTOVER_JDN {
            Self::Gregorian
        } else {
            Self::Julian
        }
    }

    /// Returns the calendar's identifier.
    #[inline]
    #[must_use]
    pub const fn identifier(&self) -> &'static str {
        match self {
            Self::Julian => "julian",
            Self::Gregorian => "gregorian",
        }
    }
}

impl fmt::Display for Calendar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}

/// Returns whether the date is one of October 5 through 14, 1582, the days
/// dropped by the Gregorian reform.
#[must_use]
pub const fn is_reform_gap(year: i64, month: Month, day: i64) -> bool {
    year == 1582 && month as u8 == Month::October as u8 && matches!(day, 5..=14)
}
