//! The `jdn` crate converts between proleptic Julian/Gregorian calendar dates
//! and Julian Day Numbers using integer arithmetic only.
//!
//! ```rust
//! use jdn::{CalendarDate, JulianDayNumber, Month};
//!
//! let date = CalendarDate::try_new(1970, 1, 1).unwrap();
//! let julian_day = JulianDayNumber::from_date(date);
//! assert_eq!(julian_day.get(), 2_440_588);
//! assert_eq!(julian_day.to_date(), date);
//!
//! // The day before the Gregorian reform is a Julian date.
//! assert_eq!(jdn::to_number(1582, Month::October, 4), 2_299_160);
//! assert_eq!(jdn::from_number(2_299_161), (1582, Month::October, 15));
//! ```
//!
//! A Julian Day Number counts days from January 1, 4713 BCE in the proleptic
//! Julian calendar. Dates from October 15, 1582 onward are reckoned in the
//! Gregorian calendar, earlier dates in the Julian calendar, following the
//! adoption of the reform in most of Catholic Europe.
//!
//! Years are numbered with no year zero, so 1 BCE is year `-1`. Days are never
//! checked against the length of their month: February 30 converts to the
//! same day number as March 1 or 2, depending on the year.
//!
//! ## Features
//!
//! - `log`: emits `log` records when dates are converted and when checked
//!   constructors reject a value.
#![no_std]
#![cfg_attr(not(test), forbid(clippy::unwrap_used))]
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_possible_wrap
)]

#[cfg(test)]
extern crate alloc;

pub mod calendar;
pub mod error;

mod date;
mod julian_day;
mod month;

#[doc(inline)]
pub use error::JdnError;

/// The `jdn` result type
pub type JdnResult<T> = Result<T, JdnError>;

pub use crate::{
    calendar::Calendar,
    date::CalendarDate,
    julian_day::{from_number, to_number, JulianDayNumber},
    month::Month,
};
