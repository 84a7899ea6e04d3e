//! Gregorian calendar calculations.
//!
//! The inverse conversion is the algorithm published by Henry F. Fliegel and
//! Thomas C. Van Flandern (1968), valid for every Julian Day Number on or
//! after the Gregorian cutover.

/// Days in a 400 year Gregorian cycle.
const DAYS_IN_A_400Y_CYCLE: i64 = 146_097;

/// Returns the Gregorian century correction for the computational year `y`.
#[inline]
pub const fn century_correction(y: i64) -> i64 {
    -y.div_euclid(100) + y.div_euclid(400)
}

/// Returns the year, month, and day for a Julian Day Number in the
/// Gregorian calendar.
pub const fn ymd_from_julian_day_number(julian_day: i64) -> (i64, i64, i64) {
    let ell = julian_day + 68_569;
    let n = (4 * ell).div_euclid(DAYS_IN_A_400Y_CYCLE);
    let ell = ell - (DAYS_IN_A_400Y_CYCLE * n + 3).div_euclid(4);
    let i = (4000 * (ell + 1)).div_euclid(1_461_001);
    let ell = ell - (1461 * i).div_euclid(4) + 31;
    let j = (80 * ell).div_euclid(2447);
    let day = ell - (2447 * j).div_euclid(80);
    let ell = j.div_euclid(11);
    let month = j + 2 - 12 * ell;
    let year = 100 * (n - 49) + i + ell;
    (year, month, day)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_gregorian_day() {
        assert_eq!(ymd_from_julian_day_number(2_299_161), (1582, 10, 15));
    }

    #[test]
    fn unix_epoch() {
        assert_eq!(ymd_from_julian_day_number(2_440_588), (1970, 1, 1));
        assert_eq!(ymd_from_julian_day_number(2_451_545), (2000, 1, 1));
    }

    #[test]
    fn leap_days() {
        // 2000 is a leap year, 1900 is not.
        assert_eq!(ymd_from_julian_day_number(2_451_604), (2000, 2, 29));
        assert_eq!(ymd_from_julian_day_number(2_415_079), (1900, 2, 28));
        assert_eq!(ymd_from_julian_day_number(2_415_080), (1900, 3, 1));
    }

    #[test]
    fn correction() {
        assert_eq!(century_correction(6382), -63 + 15);
        assert_eq!(century_correction(6800), -68 + 17);
    }
}
