//! The `LunarConverter` trait and its ICU4X backed implementation.

use core::ops::RangeInclusive;

use crate::{lunar::LunarDate, solar::SolarDate, LunarResult};

#[cfg(feature = "compiled_data")]
use crate::{lunar::parse_month_code, lunar_assert, LunarError};
#[cfg(feature = "compiled_data")]
use icu_calendar::{cal::Chinese, Ref};

/// Gregorian years the bundled converter accepts.
pub const SUPPORTED_YEARS: RangeInclusive<i32> = 1..=9999;

/// The `LunarConverter` trait provides the solar to lunar date conversion
/// the formatter depends on.
///
/// Conversion is deterministic, so implementors should report a failure
/// with `ErrorKind::Conversion` rather than substituting another date.
pub trait LunarConverter {
    /// Converts a solar date into its lunar calendar date.
    fn to_lunar(&self, date: SolarDate) -> LunarResult<LunarDate>;
}

impl<C: LunarConverter + ?Sized> LunarConverter for &C {
    fn to_lunar(&self, date: SolarDate) -> LunarResult<LunarDate> {
        (**self).to_lunar(date)
    }
}

/// A `LunarConverter` backed by ICU4X's astronomical Chinese calendar.
#[cfg(feature = "compiled_data")]
#[derive(Debug, Clone)]
pub struct ChineseCalendar(Chinese);

#[cfg(feature = "compiled_data")]
impl Default for ChineseCalendar {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "compiled_data")]
impl ChineseCalendar {
    /// Creates a new converter from ICU4X's compiled data.
    pub const fn new() -> Self {
        Self(Chinese::new())
    }
}

#[cfg(feature = "compiled_data")]
impl LunarConverter for ChineseCalendar {
    fn to_lunar(&self, date: SolarDate) -> LunarResult<LunarDate> {
        if !SUPPORTED_YEARS.contains(&date.year()) {
            #[cfg(feature = "log")]
            log::debug!("rejecting {date:?}: outside of {SUPPORTED_YEARS:?}");
            return Err(LunarError::conversion()
                .with_message("solar year is outside of the lunar converter's supported range."));
        }

        let chinese = date.to_icu4x()?.to_calendar(Ref(&self.0));

        let month_info = chinese.month();
        let Some((month, leap)) = parse_month_code(month_info.standard_code.0) else {
            #[cfg(feature = "log")]
            log::error!(
                "unexpected month code {} for {date:?}",
                month_info.standard_code.0
            );
            return Err(LunarError::assert());
        };

        let day = chinese.day_of_month().0;
        lunar_assert!(
            (1..=30).contains(&day),
            "lunar day {day} out of range for {date:?}"
        );

        // Lunar years are numbered by the ISO year in which they begin.
        let Some(year) = chinese.year().cyclic().map(|year| year.related_iso) else {
            #[cfg(feature = "log")]
            log::error!("missing related ISO year for {date:?}");
            return Err(LunarError::assert());
        };

        Ok(LunarDate::new_unchecked(year, month, day, leap))
    }
}
