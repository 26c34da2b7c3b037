//! This module implements `SolarDate`, a proleptic Gregorian calendar date.
//!
//! A `SolarDate` is the input to the lunar conversion. It is always a legal
//! Gregorian date with a year of at least 1.

use alloc::string::String;
use core::{cmp::Ordering, str::FromStr};

use icu_calendar::{Date as IcuDate, Iso};

use crate::{
    converter::LunarConverter, lunar::LunarDate, lunar_assert, options::FormatOptions, parsers,
    LunarError, LunarResult,
};

#[cfg(feature = "compiled_data")]
use crate::converter::ChineseCalendar;

/// A validated Gregorian calendar date.
///
/// ```rust
/// use lunar_rs::SolarDate;
/// use core::str::FromStr;
///
/// let date = SolarDate::from_str("2024-02-10").unwrap();
/// assert_eq!((date.year(), date.month(), date.day()), (2024, 2, 10));
/// assert_eq!(date, SolarDate::try_new(2024, 2, 10).unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SolarDate {
    year: i32,
    month: u8,
    day: u8,
}

impl SolarDate {
    /// Creates a new `SolarDate` without determining the validity.
    pub(crate) const fn new_unchecked(year: i32, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    /// Creates a new `SolarDate`, rejecting anything that is not a legal
    /// Gregorian date in year 1 or later.
    pub fn try_new(year: i32, month: u8, day: u8) -> LunarResult<Self> {
        if year < 1 {
            return Err(
                LunarError::invalid_argument().with_message("solar year must be at least 1.")
            );
        }
        if !(1..=12).contains(&month) {
            return Err(
                LunarError::invalid_argument().with_message("solar month must be within 1..=12.")
            );
        }
        if !(1..=days_in_month(year, month)).contains(&day) {
            return Err(LunarError::invalid_argument()
                .with_message("solar day is not within a valid day range for the month."));
        }
        Ok(Self::new_unchecked(year, month, day))
    }

    #[inline]
    #[must_use]
    pub fn year(&self) -> i32 {
        self.year
    }

    #[inline]
    #[must_use]
    pub fn month(&self) -> u8 {
        self.month
    }

    #[inline]
    #[must_use]
    pub fn day(&self) -> u8 {
        self.day
    }

    /// Converts this date into ICU4X's `Date<Iso>`.
    pub(crate) fn to_icu4x(self) -> LunarResult<IcuDate<Iso>> {
        IcuDate::try_new_iso(self.year, self.month, self.day).map_err(|_| {
            LunarError::conversion().with_message("solar date is not representable by ICU4X.")
        })
    }

    /// Returns the number of days since 1970-01-01.
    pub(crate) fn to_epoch_days(self) -> i64 {
        epoch_days_from_gregorian(self.year, self.month, self.day)
    }
}

// ==== Lunar conversion ====

impl SolarDate {
    /// Converts this date with the provided `LunarConverter`.
    pub fn to_lunar_with_converter(
        &self,
        converter: &impl LunarConverter,
    ) -> LunarResult<LunarDate> {
        converter.to_lunar(*self)
    }

    /// Converts this date and renders it as `<year>年<month>月<day>日`.
    pub fn to_chinese_string_with_converter(
        &self,
        converter: &impl LunarConverter,
        options: FormatOptions,
    ) -> LunarResult<String> {
        self.to_lunar_with_converter(converter)?
            .to_chinese_string_with_options(options)
    }

    /// Converts this date with the ICU4X Chinese calendar.
    ///
    /// ```rust
    /// use lunar_rs::SolarDate;
    ///
    /// let date = SolarDate::try_new(2024, 2, 10).unwrap();
    /// let lunar = date.to_lunar().unwrap();
    /// assert_eq!((lunar.year(), lunar.month(), lunar.day()), (2024, 1, 1));
    /// ```
    #[cfg(feature = "compiled_data")]
    pub fn to_lunar(&self) -> LunarResult<LunarDate> {
        self.to_lunar_with_converter(&ChineseCalendar::new())
    }

    /// Converts this date with the ICU4X Chinese calendar and renders it.
    ///
    /// ```rust
    /// use lunar_rs::SolarDate;
    ///
    /// let date = SolarDate::try_new(2024, 2, 10).unwrap();
    /// assert_eq!(date.to_chinese_string().unwrap(), "二零二四年正月初一日");
    /// ```
    #[cfg(feature = "compiled_data")]
    pub fn to_chinese_string(&self) -> LunarResult<String> {
        self.to_chinese_string_with_converter(&ChineseCalendar::new(), FormatOptions::default())
    }
}

// ==== Elapsed time ====

/// The whole years, months, and days between two solar dates.
#[non_exhaustive]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Elapsed {
    pub years: u32,
    pub months: u8,
    pub days: u8,
}

impl SolarDate {
    /// Returns the years, months, and days elapsed from this date until
    /// `other`, e.g. the age of a birthday on a given day.
    ///
    /// Years are counted first, then months, then the remaining days. When
    /// the starting day does not exist in the intermediate month it is
    /// constrained to that month's last day.
    ///
    /// ```rust
    /// use lunar_rs::SolarDate;
    ///
    /// let birthday = SolarDate::try_new(2000, 1, 15).unwrap();
    /// let today = SolarDate::try_new(2024, 3, 20).unwrap();
    /// let age = birthday.elapsed_until(&today).unwrap();
    /// assert_eq!((age.years, age.months, age.days), (24, 2, 5));
    /// ```
    pub fn elapsed_until(&self, other: &Self) -> LunarResult<Elapsed> {
        if self > other {
            return Err(LunarError::invalid_argument()
                .with_message("start date must not be later than the end date."));
        }

        let mut years = other.year - self.year;
        if years != 0 && self.with_year_month(self.year + years, self.month) > *other {
            years -= 1;
        }

        let (mut year, mut month) = (self.year + years, self.month);
        let mut months = 0;
        while let Some((next_year, next_month)) = next_year_month(year, month) {
            if self.with_year_month(next_year, next_month) > *other {
                break;
            }
            (year, month) = (next_year, next_month);
            months += 1;
        }

        let intermediate =
            Self::new_unchecked(year, month, self.day.min(days_in_month(year, month)));
        let days = other.to_epoch_days() - intermediate.to_epoch_days();

        lunar_assert!(
            (0..=30).contains(&days) && months < 12,
            "elapsed time from {self:?} until {other:?} did not balance"
        );

        Ok(Elapsed {
            years: years as u32,
            months,
            days: days as u8,
        })
    }

    /// Returns a date that compares as this day of the month in `year` and
    /// `month`, even when the day does not exist in that month.
    fn with_year_month(&self, year: i32, month: u8) -> Self {
        Self::new_unchecked(year, month, self.day)
    }
}

impl FromStr for SolarDate {
    type Err = LunarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parsers::parse_solar_date(s)
    }
}

// ==== Gregorian utilities ====

pub(crate) fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

pub(crate) fn days_in_month(year: i32, month: u8) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        _ => 28,
    }
}

/// Returns the month following `year` and `month`, or `None` past the last
/// representable year.
fn next_year_month(year: i32, month: u8) -> Option<(i32, u8)> {
    match month.cmp(&12) {
        Ordering::Less => Some((year, month + 1)),
        _ => Some((year.checked_add(1)?, 1)),
    }
}

/// Days from 1970-01-01 to the given proleptic Gregorian date.
fn epoch_days_from_gregorian(year: i32, month: u8, day: u8) -> i64 {
    let (month, day) = (i64::from(month), i64::from(day));
    // Count years from March so the leap day is the last day of the year.
    let year = i64::from(year) - i64::from(month <= 2);
    let era = year.div_euclid(400);
    let year_of_era = year.rem_euclid(400);
    let day_of_year = (153 * ((month + 9) % 12) + 2) / 5 + day - 1;
    let day_of_era = year_of_era * 365 + year_of_era / 4 - year_of_era / 100 + day_of_year;
    era * 146_097 + day_of_era - 719_468
}
