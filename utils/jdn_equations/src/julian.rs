//! Julian calendar calculations.
//!
//! The inverse conversion follows Claus Toendering's "Frequently Asked
//! Questions about Calendars", with the year mapped back onto a scale that
//! has no year zero.

/// Days in a four year Julian cycle.
const DAYS_IN_A_4Y_CYCLE: i64 = 1461;

/// Returns the year, month, and day for a Julian Day Number in the Julian
/// calendar.
pub const fn ymd_from_julian_day_number(julian_day: i64) -> (i64, i64, i64) {
    let julian_day = julian_day + 32_082;
    let dd = (4 * julian_day + 3).div_euclid(DAYS_IN_A_4Y_CYCLE);
    let ee = julian_day - (DAYS_IN_A_4Y_CYCLE * dd).div_euclid(4);
    let mm = (5 * ee + 2).div_euclid(153);
    let day = ee - (153 * mm + 2).div_euclid(5) + 1;
    let month = mm + 3 - 12 * mm.div_euclid(10);
    let year = dd - 4800 + mm.div_euclid(10);
    (crate::historical_year(year), month, day)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn julian_period_epoch() {
        assert_eq!(ymd_from_julian_day_number(0), (-4713, 1, 1));
        assert_eq!(ymd_from_julian_day_number(-1), (-4714, 12, 31));
    }

    #[test]
    fn last_julian_day() {
        assert_eq!(ymd_from_julian_day_number(2_299_160), (1582, 10, 4));
    }

    #[test]
    fn never_produces_year_zero() {
        assert_eq!(ymd_from_julian_day_number(1_721_423).0, -1);
        assert_eq!(ymd_from_julian_day_number(1_721_424).0, 1);
    }

    #[test]
    fn before_the_julian_period() {
        assert_eq!(ymd_from_julian_day_number(-100_000), (-4987, 3, 20));
        assert_eq!(ymd_from_julian_day_number(-1_931_017), (-10000, 3, 1));
    }
}
