//! This module implements `Month`.

use num_traits::ToPrimitive;
use tinystr::{tinystr, TinyAsciiStr};

use crate::{JdnError, JdnResult};

const MONTH_CODES: [TinyAsciiStr<4>; 12] = [
    tinystr!(4, "M01"),
    tinystr!(4, "M02"),
    tinystr!(4, "M03"),
    tinystr!(4, "M04"),
    tinystr!(4, "M05"),
    tinystr!(4, "M06"),
    tinystr!(4, "M07"),
    tinystr!(4, "M08"),
    tinystr!(4, "M09"),
    tinystr!(4, "M10"),
    tinystr!(4, "M11"),
    tinystr!(4, "M12"),
];

/// A month of the Julian or Gregorian year, numbered from January = 1.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Month {
    January = 1,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

impl Month {
    /// Every month in calendar order.
    pub const ALL: [Month; 12] = [
        Self::January,
        Self::February,
        Self::March,
        Self::April,
        Self::May,
        Self::June,
        Self::July,
        Self::August,
        Self::September,
        Self::October,
        Self::November,
        Self::December,
    ];

    /// Returns the month's ordinal, 1 through 12.
    #[inline]
    #[must_use]
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// Creates a `Month` from any primitive integer, rejecting values outside 1..=12.
    pub fn from_ordinal<T: ToPrimitive>(value: T) -> JdnResult<Self> {
        let ordinal = value
            .to_u8()
            .ok_or(JdnError::range().with_message("month is not within 1..=12."))?;
        Self::try_from(ordinal)
    }

    /// Maps a month index onto 1..=12, wrapping anything outside that range.
    ///
    /// The conversion algorithms only ever produce 1..=12.
    pub(crate) const fn from_month_index(index: i64) -> Self {
        Self::ALL[(index - 1).rem_euclid(12) as usize]
    }

    /// Returns the following month, wrapping December to January.
    #[must_use]
    pub const fn next(self) -> Self {
        Self::from_month_index(self as i64 + 1)
    }

    /// Returns the preceding month, wrapping January to December.
    #[must_use]
    pub const fn previous(self) -> Self {
        Self::from_month_index(self as i64 - 1)
    }

    /// Returns the month code, `M01` through `M12`.
    #[inline]
    #[must_use]
    pub const fn code(self) -> TinyAsciiStr<4> {
        MONTH_CODES[self as usize - 1]
    }

    /// Resolves a month code, `M01` through `M12`, to a `Month`.
    pub fn try_from_code(code: &TinyAsciiStr<4>) -> JdnResult<Self> {
        MONTH_CODES
            .iter()
            .position(|c| c == code)
            .map(|i| Self::ALL[i])
            .ok_or(JdnError::range().with_message("MonthCode was not valid."))
    }
}

impl TryFrom<u8> for Month {
    type Error = JdnError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if !(1..=12).contains(&value) {
            return Err(JdnError::range().with_message("month is not within 1..=12."));
        }
        Ok(Self::ALL[usize::from(value) - 1])
    }
}

impl From<Month> for u8 {
    fn from(value: Month) -> Self {
        value.ordinal()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordinals() {
        assert_eq!(Month::January.ordinal(), 1);
        assert_eq!(Month::October.ordinal(), 10);
        assert_eq!(Month::December.ordinal(), 12);
        for (i, month) in Month::ALL.iter().enumerate() {
            assert_eq!(usize::from(month.ordinal()), i + 1);
        }
    }

    #[test]
    fn try_from_u8() {
        assert_eq!(Month::try_from(8), Ok(Month::August));
        assert!(Month::try_from(0).is_err());
        assert!(Month::try_from(13).is_err());
    }

    #[test]
    fn from_ordinal_primitives() {
        assert_eq!(Month::from_ordinal(2i64), Ok(Month::February));
        assert_eq!(Month::from_ordinal(12u32), Ok(Month::December));
        assert!(Month::from_ordinal(-1i32).is_err());
        assert!(Month::from_ordinal(268u16).is_err());
    }

    #[test]
    fn wrapping() {
        assert_eq!(Month::December.next(), Month::January);
        assert_eq!(Month::January.previous(), Month::December);
        assert_eq!(Month::June.next(), Month::July);
        assert_eq!(Month::from_month_index(13), Month::January);
        assert_eq!(Month::from_month_index(0), Month::December);
    }

    #[test]
    fn month_codes() {
        assert_eq!(Month::March.code(), tinystr!(4, "M03"));
        assert_eq!(Month::try_from_code(&tinystr!(4, "M11")), Ok(Month::November));
        assert!(Month::try_from_code(&tinystr!(4, "M13")).is_err());
        assert!(Month::try_from_code(&tinystr!(4, "M05L")).is_err());
    }

    #[test]
    fn ordering() {
        assert!(Month::January < Month::February);
        assert!(Month::November < Month::December);
    }
}
