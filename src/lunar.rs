//! This module implements `LunarDate`, a date in the Chinese lunar calendar.

use alloc::string::{String, ToString};

use tinystr::{tinystr, TinyAsciiStr};

use crate::{format::FormattableLunarDate, options::FormatOptions, LunarError, LunarResult};

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

const LEAP_MONTH_CODES: [TinyAsciiStr<4>; 12] = [
    tinystr!(4, "M01L"),
    tinystr!(4, "M02L"),
    tinystr!(4, "M03L"),
    tinystr!(4, "M04L"),
    tinystr!(4, "M05L"),
    tinystr!(4, "M06L"),
    tinystr!(4, "M07L"),
    tinystr!(4, "M08L"),
    tinystr!(4, "M09L"),
    tinystr!(4, "M10L"),
    tinystr!(4, "M11L"),
    tinystr!(4, "M12L"),
];

/// A date in the traditional Chinese lunar calendar.
///
/// `year` is the Gregorian year in which the lunar year's first month
/// begins, `month` is the ordinal of the month within `1..=12` regardless of
/// whether it is intercalary, and `day` is within `1..=30`.
///
/// ```rust
/// use lunar_rs::LunarDate;
///
/// let date = LunarDate::try_new(2024, 1, 1, false).unwrap();
/// assert_eq!(date.to_chinese_string().unwrap(), "二零二四年正月初一日");
///
/// let leap = LunarDate::try_new(2023, 2, 1, true).unwrap();
/// assert_eq!(leap.month_code().as_str(), "M02L");
/// assert_eq!(leap.to_chinese_string().unwrap(), "二零二三年闰二月初一日");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LunarDate {
    year: i32,
    month: u8,
    day: u8,
    leap: bool,
}

impl LunarDate {
    /// Creates a new `LunarDate` without validating the month or day.
    ///
    /// Callers must guarantee `month` is within `1..=12`.
    pub(crate) const fn new_unchecked(year: i32, month: u8, day: u8, leap: bool) -> Self {
        Self {
            year,
            month,
            day,
            leap,
        }
    }

    /// Creates a new validated `LunarDate`.
    pub fn try_new(year: i32, month: u8, day: u8, leap: bool) -> LunarResult<Self> {
        if !(1..=12).contains(&month) {
            return Err(
                LunarError::invalid_argument().with_message("lunar month must be within 1..=12.")
            );
        }
        if !(1..=30).contains(&day) {
            return Err(
                LunarError::invalid_argument().with_message("lunar day must be within 1..=30.")
            );
        }
        Ok(Self::new_unchecked(year, month, day, leap))
    }

    /// Returns the lunar year.
    #[inline]
    #[must_use]
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Returns the lunar month within `1..=12`.
    #[inline]
    #[must_use]
    pub fn month(&self) -> u8 {
        self.month
    }

    /// Returns the lunar day within `1..=30`.
    #[inline]
    #[must_use]
    pub fn day(&self) -> u8 {
        self.day
    }

    /// Returns whether the month is an intercalary month.
    #[inline]
    #[must_use]
    pub fn is_leap(&self) -> bool {
        self.leap
    }

    /// Returns the CLDR month code of this date, e.g. `M06` or `M06L`.
    pub fn month_code(&self) -> TinyAsciiStr<4> {
        let index = usize::from(self.month - 1);
        if self.leap {
            LEAP_MONTH_CODES[index]
        } else {
            MONTH_CODES[index]
        }
    }

    /// Returns a `Writeable` rendering of this date.
    pub fn to_formattable(&self) -> LunarResult<FormattableLunarDate> {
        self.to_formattable_with_options(FormatOptions::default())
    }

    /// Returns a `Writeable` rendering of this date with the provided options.
    pub fn to_formattable_with_options(
        &self,
        options: FormatOptions,
    ) -> LunarResult<FormattableLunarDate> {
        FormattableLunarDate::from_lunar_date(self, options)
    }

    /// Renders this date as `<year>年<month>月<day>日`.
    pub fn to_chinese_string(&self) -> LunarResult<String> {
        self.to_chinese_string_with_options(FormatOptions::default())
    }

    /// Renders this date as `<year>年<month>月<day>日` with the provided options.
    pub fn to_chinese_string_with_options(&self, options: FormatOptions) -> LunarResult<String> {
        Ok(self.to_formattable_with_options(options)?.to_string())
    }
}

/// Parses a Chinese calendar month code such as `M05` or `M05L` into its
/// month ordinal and leap flag.
pub(crate) fn parse_month_code(code: TinyAsciiStr<4>) -> Option<(u8, bool)> {
    match *code.all_bytes() {
        [b'M', tens @ b'0'..=b'9', ones @ b'0'..=b'9', leap, ..] => {
            let month = (tens - b'0') * 10 + (ones - b'0');
            let leap = match leap {
                b'L' => true,
                0 => false,
                _ => return None,
            };
            (1..=12).contains(&month).then_some((month, leap))
        }
        _ => None,
    }
}
