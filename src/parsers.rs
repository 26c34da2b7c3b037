//! This module implements parsing of solar date strings.
//!
//! Accepted strings are ISO 8601 / IXDTF calendar dates such as
//! `2024-02-10`. Time components are rejected.

use alloc::format;

use ixdtf::{parsers::IxdtfParser, ParseError};

use crate::{solar::SolarDate, LunarError, LunarResult};

/// Maps an `ixdtf` `ParseError` to a `LunarError`.
fn map_parse_error(err: ParseError) -> LunarError {
    use ParseError::*;
    match err {
        InvalidMonthRange => {
            LunarError::invalid_argument().with_message("Month is outside valid range (1-12)")
        }
        InvalidDayRange => LunarError::invalid_argument()
            .with_message("Day is outside valid range for the given month/year"),
        _ => LunarError::syntax().with_message(format!("Parse error: {err:?}")),
    }
}

/// Parses a solar date string, e.g. `2024-02-10`.
pub(crate) fn parse_solar_date(source: &str) -> LunarResult<SolarDate> {
    let record = IxdtfParser::from_utf8(source.as_bytes())
        .parse()
        .map_err(map_parse_error)?;

    if record.time.is_some() {
        return Err(LunarError::syntax().with_message("A solar date must not contain a time."));
    }

    let Some(date) = record.date else {
        return Err(LunarError::syntax().with_message("A solar date string is required."));
    };

    SolarDate::try_new(date.year, date.month, date.day)
}
