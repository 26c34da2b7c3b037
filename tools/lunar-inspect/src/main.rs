//! Prints the lunar calendar breakdown of a Gregorian date.
//!
//! ```text
//! lunar-inspect <YYYY-MM-DD> [<reference YYYY-MM-DD>] [--leap=auto|never]
//! ```

use std::{env, str::FromStr};

use color_eyre::{
    eyre::{bail, WrapErr},
    Result,
};
use log::{debug, info};
use lunar_rs::{
    format,
    options::{DisplayLeapMonth, FormatOptions},
    ChineseCalendar, SolarDate,
};

macro_rules! format_line(
    ($a:expr, $b:expr, $c: expr) => {
        println!("{:<12} {:<16} {}", $a, $b, $c)
    };
    ($a:expr, $b:expr) => {
        println!("{:<12} {}", $a, $b)
    };
);

const USAGE: &str = "usage: lunar-inspect <YYYY-MM-DD> [<reference YYYY-MM-DD>] [--leap=auto|never]";

fn main() -> Result<()> {
    color_eyre::install()?;
    simple_logger::init_with_env()?;

    let mut dates = Vec::new();
    let mut options = FormatOptions::default();
    for arg in env::args().skip(1) {
        if let Some(value) = arg.strip_prefix("--leap=") {
            let leap_month = DisplayLeapMonth::from_str(value)
                .wrap_err_with(|| format!("invalid --leap value '{value}'"))?;
            options = options.with_leap_month(leap_month);
        } else {
            dates.push(arg);
        }
    }

    let (date, reference) = match dates.as_slice() {
        [date] => (date, None),
        [date, reference] => (date, Some(reference)),
        _ => bail!(USAGE),
    };

    let solar = SolarDate::from_str(date).wrap_err_with(|| format!("could not parse '{date}'"))?;
    debug!("parsed {solar:?} with {options:?}");

    let calendar = ChineseCalendar::new();
    let lunar = solar.to_lunar_with_converter(&calendar)?;
    info!("{solar:?} converts to {lunar:?}");

    let leap = lunar.is_leap() && options.leap_month == DisplayLeapMonth::Auto;

    format_line!(
        "solar date",
        format!(
            "{:04}-{:02}-{:02}",
            solar.year(),
            solar.month(),
            solar.day()
        )
    );
    println!();

    format_line!("Field", "Value", "Rendered");
    format_line!("year", lunar.year(), format::year(lunar.year())?);
    format_line!(
        "month",
        lunar.month_code(),
        format::month(lunar.month(), leap)?
    );
    format_line!("day", lunar.day(), format::day(lunar.day())?);

    println!();
    format_line!(
        "lunar date",
        solar.to_chinese_string_with_converter(&calendar, options)?
    );

    if let Some(reference) = reference {
        let reference = SolarDate::from_str(reference)
            .wrap_err_with(|| format!("could not parse reference '{reference}'"))?;
        let elapsed = solar.elapsed_until(&reference)?;
        format_line!(
            "elapsed",
            format!(
                "{} years, {} months, {} days",
                elapsed.years, elapsed.months, elapsed.days
            )
        );
    }

    Ok(())
}
