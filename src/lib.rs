//! The `lunar_rs` crate converts Gregorian (solar) dates into the Chinese
//! lunar calendar and renders them the way they are written on traditional
//! calendars and almanacs.
//!
//! ```rust
//! use lunar_rs::{LunarDate, SolarDate};
//! use core::str::FromStr;
//!
//! // Convert a solar date with the bundled ICU4X Chinese calendar.
//! let new_year = SolarDate::from_str("2024-02-10").unwrap();
//! assert_eq!(new_year.to_chinese_string().unwrap(), "二零二四年正月初一日");
//!
//! // Or render a lunar date that was converted elsewhere.
//! let eve = LunarDate::try_new(2023, 12, 30, false).unwrap();
//! assert_eq!(eve.to_chinese_string().unwrap(), "二零二三年十二月三十日");
//! ```
//!
//! The year is read digit by digit ("二零二四", never "两千零二十四"), the
//! first month is "正", days one through ten are prefixed with "初", and days
//! twenty-one through twenty-nine with "廿". Intercalary months are marked
//! with "闰" unless [`options::DisplayLeapMonth::Never`] is requested.
//!
//! Conversion goes through the [`LunarConverter`] trait. With the default
//! `compiled_data` feature, [`ChineseCalendar`] provides an implementation
//! backed by `icu_calendar`.
#![no_std]
#![cfg_attr(not(test), forbid(clippy::unwrap_used))]
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]

extern crate alloc;
extern crate core;
#[cfg(test)]
#[macro_use]
extern crate std;

pub mod converter;
pub mod error;
pub mod format;
pub mod options;

mod lunar;
mod parsers;
mod solar;

#[doc(inline)]
pub use error::{ErrorKind, LunarError};

/// The `lunar_rs` result type
pub type LunarResult<T> = Result<T, LunarError>;

#[cfg(feature = "compiled_data")]
pub use crate::converter::ChineseCalendar;
pub use crate::{
    converter::LunarConverter,
    lunar::LunarDate,
    solar::{Elapsed, SolarDate},
};

#[doc(hidden)]
#[macro_export]
macro_rules! lunar_assert {
    ($condition:expr $(,)*) => {
        if !$condition {
            return Err($crate::LunarError::assert());
        }
    };
    ($condition:expr, $($args:tt)+) => {
        if !$condition {
            #[cfg(feature = "log")]
            log::error!($($args)+);
            return Err($crate::LunarError::assert());
        }
    };
}
