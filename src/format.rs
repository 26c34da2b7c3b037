//! Traditional Chinese almanac rendering of lunar dates.
//!
//! A lunar date is written as its year read digit by digit, followed by the
//! almanac names of the month and the day:
//!
//! ```rust
//! use lunar_rs::format;
//!
//! assert_eq!(format::lunar_date(2024, 1, 1, false).unwrap(), "二零二四年正月初一日");
//! assert_eq!(format::lunar_date(2023, 12, 30, false).unwrap(), "二零二三年十二月三十日");
//! ```
//!
//! Every renderer validates its field on construction, so a `Formattable*`
//! value can always be written in full.

use alloc::string::{String, ToString};
use core::fmt::{self, Write};

use writeable::{impl_display_with_writeable, LengthHint, Writeable};

use crate::{
    lunar::LunarDate,
    options::{DisplayLeapMonth, FormatOptions},
    LunarError, LunarResult,
};

pub mod numeral;

use numeral::{digit_unchecked, TEN};

/// Every character the formatter emits is a three byte UTF-8 sequence.
const CHAR_LEN: usize = 3;

const LEAP_MARKER: char = '闰';
const FIRST_MONTH: char = '正';
const EARLY_DAY: char = '初';
const TWENTIES: char = '廿';

/// Renders a lunar year digit by digit, e.g. `2024` as "二零二四".
pub fn year(year: i32) -> LunarResult<String> {
    Ok(FormattableYear::try_new(year)?.to_string())
}

/// Renders a lunar month with its almanac name, e.g. `1` as "正".
pub fn month(month: u8, leap: bool) -> LunarResult<String> {
    Ok(FormattableMonth::try_new(month, leap)?.to_string())
}

/// Renders a lunar day with its almanac name, e.g. `21` as "廿一".
pub fn day(day: u8) -> LunarResult<String> {
    Ok(FormattableDay::try_new(day)?.to_string())
}

/// Renders a full lunar date as `<year>年<month>月<day>日`.
///
/// Fields are validated in year, month, day order and the first invalid
/// field is reported.
pub fn lunar_date(year: i32, month: u8, day: u8, leap: bool) -> LunarResult<String> {
    Ok(FormattableLunarDate::try_new(year, month, day, leap)?.to_string())
}

// ==== Year ====

/// A lunar year that renders as its individual digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormattableYear(u32);

impl FormattableYear {
    pub fn try_new(year: i32) -> LunarResult<Self> {
        u32::try_from(year).map(Self).map_err(|_| {
            LunarError::invalid_argument().with_message("lunar year must not be negative.")
        })
    }

    fn digit_count(self) -> usize {
        let mut count = 1;
        let mut rest = self.0 / 10;
        while rest > 0 {
            count += 1;
            rest /= 10;
        }
        count
    }
}

impl Writeable for FormattableYear {
    fn write_to<W: Write + ?Sized>(&self, sink: &mut W) -> fmt::Result {
        let mut divisor = 1u32;
        while self.0 / divisor >= 10 {
            divisor *= 10;
        }
        loop {
            sink.write_char(digit_unchecked(((self.0 / divisor) % 10) as u8))?;
            if divisor == 1 {
                return Ok(());
            }
            divisor /= 10;
        }
    }

    fn writeable_length_hint(&self) -> LengthHint {
        LengthHint::exact(self.digit_count() * CHAR_LEN)
    }
}

// ==== Month ====

/// A lunar month that renders with its almanac name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormattableMonth {
    month: u8,
    leap: bool,
}

impl FormattableMonth {
    pub fn try_new(month: u8, leap: bool) -> LunarResult<Self> {
        if !(1..=12).contains(&month) {
            return Err(
                LunarError::invalid_argument().with_message("lunar month must be within 1..=12.")
            );
        }
        Ok(Self { month, leap })
    }
}

impl Writeable for FormattableMonth {
    fn write_to<W: Write + ?Sized>(&self, sink: &mut W) -> fmt::Result {
        if self.leap {
            sink.write_char(LEAP_MARKER)?;
        }
        match self.month {
            1 => sink.write_char(FIRST_MONTH),
            2..=9 => sink.write_char(digit_unchecked(self.month)),
            10 => sink.write_char(TEN),
            _ => {
                sink.write_char(TEN)?;
                sink.write_char(digit_unchecked(self.month - 10))
            }
        }
    }

    fn writeable_length_hint(&self) -> LengthHint {
        let chars = usize::from(self.leap) + if self.month > 10 { 2 } else { 1 };
        LengthHint::exact(chars * CHAR_LEN)
    }
}

// ==== Day ====

/// A lunar day that renders with its almanac name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormattableDay(u8);

impl FormattableDay {
    pub fn try_new(day: u8) -> LunarResult<Self> {
        if !(1..=30).contains(&day) {
            return Err(
                LunarError::invalid_argument().with_message("lunar day must be within 1..=30.")
            );
        }
        Ok(Self(day))
    }
}

impl Writeable for FormattableDay {
    fn write_to<W: Write + ?Sized>(&self, sink: &mut W) -> fmt::Result {
        let day = self.0;
        match day {
            1..=9 => {
                sink.write_char(EARLY_DAY)?;
                sink.write_char(digit_unchecked(day))
            }
            10 => {
                sink.write_char(EARLY_DAY)?;
                sink.write_char(TEN)
            }
            11..=19 => {
                sink.write_char(TEN)?;
                sink.write_char(digit_unchecked(day - 10))
            }
            20 => {
                sink.write_char(digit_unchecked(2))?;
                sink.write_char(TEN)
            }
            21..=29 => {
                sink.write_char(TWENTIES)?;
                sink.write_char(digit_unchecked(day - 20))
            }
            _ => {
                sink.write_char(digit_unchecked(3))?;
                sink.write_char(TEN)
            }
        }
    }

    fn writeable_length_hint(&self) -> LengthHint {
        LengthHint::exact(2 * CHAR_LEN)
    }
}

// ==== Full date ====

/// A validated lunar date ready to be written as `<year>年<month>月<day>日`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormattableLunarDate {
    year: FormattableYear,
    month: FormattableMonth,
    day: FormattableDay,
}

impl FormattableLunarDate {
    pub fn try_new(year: i32, month: u8, day: u8, leap: bool) -> LunarResult<Self> {
        Ok(Self {
            year: FormattableYear::try_new(year)?,
            month: FormattableMonth::try_new(month, leap)?,
            day: FormattableDay::try_new(day)?,
        })
    }

    pub(crate) fn from_lunar_date(date: &LunarDate, options: FormatOptions) -> LunarResult<Self> {
        let leap = date.is_leap() && options.leap_month == DisplayLeapMonth::Auto;
        Self::try_new(date.year(), date.month(), date.day(), leap)
    }
}

impl Writeable for FormattableLunarDate {
    fn write_to<W: Write + ?Sized>(&self, sink: &mut W) -> fmt::Result {
        self.year.write_to(sink)?;
        sink.write_char('年')?;
        self.month.write_to(sink)?;
        sink.write_char('月')?;
        self.day.write_to(sink)?;
        sink.write_char('日')
    }

    fn writeable_length_hint(&self) -> LengthHint {
        self.year.writeable_length_hint()
            + self.month.writeable_length_hint()
            + self.day.writeable_length_hint()
            + 3 * CHAR_LEN
    }
}

impl_display_with_writeable!(FormattableYear);
impl_display_with_writeable!(FormattableMonth);
impl_display_with_writeable!(FormattableDay);
impl_display_with_writeable!(FormattableLunarDate);

#[cfg(test)]
mod tests {
    use super::{
        day, lunar_date, month, year, FormattableDay, FormattableLunarDate, FormattableMonth,
        FormattableYear,
    };
    use crate::ErrorKind;
    use alloc::string::ToString;
    use writeable::{assert_writeable_eq, LengthHint, Writeable};

    #[test]
    fn years_render_digit_by_digit() {
        for (value, expected) in [
            (0, "零"),
            (1, "一"),
            (10, "一零"),
            (1900, "一九零零"),
            (2024, "二零二四"),
            (12345, "一二三四五"),
        ] {
            assert_eq!(year(value).unwrap(), expected, "year {value}");
        }
    }

    #[test]
    fn negative_years_are_rejected() {
        for value in [-1, -2024, i32::MIN] {
            assert_eq!(year(value).unwrap_err().kind(), ErrorKind::InvalidArgument);
        }
    }

    #[test]
    fn months_use_almanac_names() {
        for (value, expected) in [
            (1, "正"),
            (2, "二"),
            (3, "三"),
            (9, "九"),
            (10, "十"),
            (11, "十一"),
            (12, "十二"),
        ] {
            assert_eq!(month(value, false).unwrap(), expected, "month {value}");
        }
    }

    #[test]
    fn leap_months_are_marked() {
        assert_eq!(month(1, true).unwrap(), "闰正");
        assert_eq!(month(6, true).unwrap(), "闰六");
        assert_eq!(month(11, true).unwrap(), "闰十一");
    }

    #[test]
    fn months_outside_range_are_rejected() {
        for value in [0, 13, u8::MAX] {
            let err = month(value, false).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidArgument, "month {value}");
        }
    }

    #[test]
    fn days_use_almanac_names() {
        for (value, expected) in [
            (1, "初一"),
            (5, "初五"),
            (10, "初十"),
            (11, "十一"),
            (15, "十五"),
            (19, "十九"),
            (20, "二十"),
            (21, "廿一"),
            (29, "廿九"),
            (30, "三十"),
        ] {
            assert_eq!(day(value).unwrap(), expected, "day {value}");
        }
    }

    #[test]
    fn days_outside_range_are_rejected() {
        for value in [0, 31, 40, u8::MAX] {
            let err = day(value).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidArgument, "day {value}");
        }
    }

    #[test]
    fn full_dates() {
        for ((y, m, d, leap), expected) in [
            ((2024, 1, 1, false), "二零二四年正月初一日"),
            ((2023, 12, 30, false), "二零二三年十二月三十日"),
            ((2024, 10, 10, false), "二零二四年十月初十日"),
            ((2023, 2, 1, true), "二零二三年闰二月初一日"),
        ] {
            assert_eq!(lunar_date(y, m, d, leap).unwrap(), expected);
        }
    }

    #[test]
    fn first_invalid_field_is_reported() {
        let err = lunar_date(-1, 13, 31, false).unwrap_err();
        assert!(err.message().contains("year"));
        let err = lunar_date(2024, 13, 31, false).unwrap_err();
        assert!(err.message().contains("month"));
        let err = lunar_date(2024, 12, 31, false).unwrap_err();
        assert!(err.message().contains("day"));
    }

    #[test]
    fn formatting_is_deterministic() {
        let first = lunar_date(2024, 8, 15, false).unwrap();
        let second = lunar_date(2024, 8, 15, false).unwrap();
        assert_eq!(first.as_bytes(), second.as_bytes());
    }

    #[test]
    fn length_hint_is_exact() {
        for (y, m, d, leap) in [
            (2024, 1, 1, false),
            (7, 12, 30, true),
            (0, 10, 20, false),
        ] {
            let formattable = FormattableLunarDate::try_new(y, m, d, leap).unwrap();
            let written = formattable.to_string();
            assert_eq!(
                formattable.writeable_length_hint(),
                LengthHint::exact(written.len())
            );
        }
    }

    #[test]
    fn string_renderers_match_writeable_output() {
        let year_value = FormattableYear::try_new(2024).unwrap();
        assert_writeable_eq!(year_value, "二零二四");
        assert_eq!(year(2024).unwrap(), "二零二四");

        let month_value = FormattableMonth::try_new(11, true).unwrap();
        assert_writeable_eq!(month_value, "闰十一");
        assert_eq!(month(11, true).unwrap(), "闰十一");

        let day_value = FormattableDay::try_new(21).unwrap();
        assert_writeable_eq!(day_value, "廿一");
        assert_eq!(day(21).unwrap(), "廿一");

        let date = FormattableLunarDate::try_new(2023, 2, 1, true).unwrap();
        assert_writeable_eq!(date, "二零二三年闰二月初一日");
        assert_eq!(
            lunar_date(2023, 2, 1, true).unwrap(),
            "二零二三年闰二月初一日"
        );
    }
}
