//! Options for rendering a lunar date.
//!
//! The formatter has a small number of places where a caller may decide how
//! a date should be displayed. The defaults produce the traditional almanac
//! form.

use core::{fmt, str::FromStr};

/// Whether an intercalary month is marked with "闰".
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum DisplayLeapMonth {
    /// Prefix leap months with "闰".
    #[default]
    Auto,
    /// Render leap months like their common counterpart.
    Never,
}

/// A parsing error for `DisplayLeapMonth`.
#[derive(Debug, Clone, Copy)]
pub struct ParseDisplayLeapMonthError;

impl fmt::Display for ParseDisplayLeapMonthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("provided string was not a valid leap month display value")
    }
}

impl core::error::Error for ParseDisplayLeapMonthError {}

impl FromStr for DisplayLeapMonth {
    type Err = ParseDisplayLeapMonthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "auto" => Ok(Self::Auto),
            "never" => Ok(Self::Never),
            _ => Err(ParseDisplayLeapMonthError),
        }
    }
}

impl fmt::Display for DisplayLeapMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Auto => "auto",
            Self::Never => "never",
        }
        .fmt(f)
    }
}

/// Options accepted by `LunarDate::to_chinese_string_with_options`.
#[non_exhaustive]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FormatOptions {
    pub leap_month: DisplayLeapMonth,
}

impl FormatOptions {
    /// Sets how leap months are displayed.
    #[must_use]
    pub const fn with_leap_month(mut self, leap_month: DisplayLeapMonth) -> Self {
        self.leap_month = leap_month;
        self
    }
}
