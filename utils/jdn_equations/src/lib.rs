//! # JDN Equations
//!
//! JDN Equations is a small library of integer calendar calculations for
//! converting between a proleptic Julian/Gregorian date and a Julian Day
//! Number. Dates on or after October 15, 1582 are reckoned in the Gregorian
//! calendar, earlier dates in the Julian calendar.
//!
//! Years are given with no year zero: year `-1` is immediately followed by
//! year `1`. A year `0` passed in is read as year `1`.
//!
//! ``` rust
//! use jdn_equations::{julian_day_number, ymd_from_julian_day_number};
//!
//! assert_eq!(julian_day_number(1970, 1, 1), 2_440_588);
//! assert_eq!(ymd_from_julian_day_number(0), (-4713, 1, 1));
//! ```
#![no_std]

pub mod gregorian;
pub mod julian;

/// The Julian Day Number of October 15, 1582, the first Gregorian date.
pub const GREGORIAN_CUTOVER_JDN: i64 = 2_299_161;

/// Offset subtracted after the Gregorian century correction.
pub const GREGORIAN_EPOCH_OFFSET: i64 = 32_045;

/// Offset subtracted for dates reckoned in the Julian calendar.
pub const JULIAN_EPOCH_OFFSET: i64 = 32_083;

const CUTOVER_YEAR: i64 = 1582;
const CUTOVER_MONTH: i64 = 10;
const CUTOVER_DAY: i64 = 15;

/// Maps a year with no year zero onto a continuous scale.
#[inline]
pub const fn continuous_year(year: i64) -> i64 {
    if year <= 0 {
        year + 1
    } else {
        year
    }
}

/// Maps a continuous year back onto a scale with no year zero.
#[inline]
pub const fn historical_year(year: i64) -> i64 {
    if year <= 0 {
        year - 1
    } else {
        year
    }
}

/// Returns whether a continuous year, month, and day falls on or after
/// October 15, 1582.
#[inline]
pub const fn is_gregorian_date(year: i64, month: i64, day: i64) -> bool {
    year > CUTOVER_YEAR
        || (year == CUTOVER_YEAR
            && (month > CUTOVER_MONTH || (month == CUTOVER_MONTH && day >= CUTOVER_DAY)))
}

// Returns y, m where the computational year starts in March.
const fn computational_year_and_month(year: i64, month: i64) -> (i64, i64) {
    let a = (14 - month).div_euclid(12);
    (year + 4800 - a, month + 12 * a - 3)
}

/// Converts a year, month, and day into a Julian Day Number.
///
/// The day is not checked against the length of the month, so out of range
/// days count forward or backward from the start of the month.
pub const fn julian_day_number(year: i64, month: i64, day: i64) -> i64 {
    let year = continuous_year(year);
    let (y, m) = computational_year_and_month(year, month);
    let julian_day = day + (153 * m + 2).div_euclid(5) + 365 * y + y.div_euclid(4);
    if is_gregorian_date(year, month, day) {
        julian_day + gregorian::century_correction(y) - GREGORIAN_EPOCH_OFFSET
    } else {
        julian_day - JULIAN_EPOCH_OFFSET
    }
}

/// Converts a Julian Day Number into a year, month, and day in the calendar
/// in force on that day.
pub const fn ymd_from_julian_day_number(julian_day: i64) -> (i64, i64, i64) {
    if julian_day >= GREGORIAN_CUTOVER_JDN {
        gregorian::ymd_from_julian_day_number(julian_day)
    } else {
        julian::ymd_from_julian_day_number(julian_day)
    }
}
