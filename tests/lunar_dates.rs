use core::str::FromStr;

use lunar_rs::{
    options::{DisplayLeapMonth, FormatOptions},
    ErrorKind, LunarConverter, LunarDate, LunarError, LunarResult, SolarDate,
};

/// A converter backed by a fixed lookup table.
struct TableConverter(&'static [((i32, u8, u8), (i32, u8, u8, bool))]);

impl LunarConverter for TableConverter {
    fn to_lunar(&self, date: SolarDate) -> LunarResult<LunarDate> {
        let key = (date.year(), date.month(), date.day());
        let Some((_, (year, month, day, leap))) = self.0.iter().find(|(solar, _)| *solar == key)
        else {
            return Err(LunarError::conversion().with_message("date not in table"));
        };
        LunarDate::try_new(*year, *month, *day, *leap)
    }
}

const TABLE: TableConverter = TableConverter(&[
    ((2024, 2, 10), (2024, 1, 1, false)),
    ((2024, 2, 9), (2023, 12, 30, false)),
    ((2023, 3, 22), (2023, 2, 1, true)),
]);

#[test]
fn lunar_dates_render_in_almanac_form() {
    for ((y, m, d, leap), expected) in [
        ((2024, 1, 1, false), "二零二四年正月初一日"),
        ((2023, 12, 30, false), "二零二三年十二月三十日"),
        ((2024, 10, 10, false), "二零二四年十月初十日"),
        ((2017, 6, 21, true), "二零一七年闰六月廿一日"),
    ] {
        let date = LunarDate::try_new(y, m, d, leap).unwrap();
        assert_eq!(date.to_chinese_string().unwrap(), expected);
    }
}

#[test]
fn custom_converter_feeds_the_formatter() {
    let solar = SolarDate::from_str("2024-02-10").unwrap();
    assert_eq!(
        solar
            .to_chinese_string_with_converter(&TABLE, FormatOptions::default())
            .unwrap(),
        "二零二四年正月初一日"
    );

    let leap = SolarDate::try_new(2023, 3, 22).unwrap();
    let never = FormatOptions::default().with_leap_month(DisplayLeapMonth::Never);
    assert_eq!(
        leap.to_chinese_string_with_converter(&TABLE, FormatOptions::default())
            .unwrap(),
        "二零二三年闰二月初一日"
    );
    assert_eq!(
        leap.to_chinese_string_with_converter(&TABLE, never).unwrap(),
        "二零二三年二月初一日"
    );
}

#[test]
fn conversion_failures_propagate_unchanged() {
    let solar = SolarDate::try_new(1999, 1, 1).unwrap();
    let err = solar
        .to_chinese_string_with_converter(&TABLE, FormatOptions::default())
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Conversion);
    assert_eq!(err.message(), "date not in table");
}

#[cfg(feature = "compiled_data")]
#[test]
fn solar_dates_round_the_lunar_new_year() {
    for (solar, expected) in [
        ("2024-02-09", "二零二三年十二月三十日"),
        ("2024-02-10", "二零二四年正月初一日"),
        ("2017-07-23", "二零一七年闰六月初一日"),
        ("2000-01-01", "一九九九年十一月廿五日"),
    ] {
        let date = SolarDate::from_str(solar).unwrap();
        assert_eq!(date.to_chinese_string().unwrap(), expected, "{solar}");
    }
}

#[cfg(feature = "compiled_data")]
#[test]
fn bundled_converter_agrees_with_table() {
    let calendar = lunar_rs::ChineseCalendar::new();
    for (solar, _) in TABLE.0 {
        let date = SolarDate::try_new(solar.0, solar.1, solar.2).unwrap();
        assert_eq!(
            date.to_lunar_with_converter(&calendar).unwrap(),
            date.to_lunar_with_converter(&TABLE).unwrap(),
            "{date:?}"
        );
    }
}
