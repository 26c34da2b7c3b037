//! Simplified Chinese numerals.

use crate::{LunarError, LunarResult};

/// Numerals for the digits `0..=9`.
const DIGITS: [char; 10] = ['零', '一', '二', '三', '四', '五', '六', '七', '八', '九'];

/// The numeral for ten.
pub const TEN: char = '十';

/// Returns the numeral for a single decimal digit.
///
/// ```rust
/// use lunar_rs::format::numeral;
///
/// assert_eq!(numeral::digit(0).unwrap(), '零');
/// assert_eq!(numeral::digit(9).unwrap(), '九');
/// assert!(numeral::digit(10).is_err());
/// ```
pub fn digit(value: i32) -> LunarResult<char> {
    usize::try_from(value)
        .ok()
        .and_then(|index| DIGITS.get(index).copied())
        .ok_or_else(|| {
            LunarError::invalid_argument().with_message("numeral digit must be within 0..=9.")
        })
}

/// Infallible lookup for values the caller has already range checked.
#[inline]
pub(crate) fn digit_unchecked(value: u8) -> char {
    debug_assert!(value < 10);
    DIGITS[usize::from(value % 10)]
}
