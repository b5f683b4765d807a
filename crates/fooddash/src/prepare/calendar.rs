//! Sunday-anchored week numbering.

use chrono::{Datelike, NaiveDate};

/// Zero-based week of the year with Sunday as the first day of the week.
///
/// Days before the year's first Sunday fall in week 0; every Sunday starts a
/// new week. This is the `%U` strftime directive read back as an integer, so
/// the result is always in `0..=53`.
pub fn week_of_year(date: NaiveDate) -> u32 {
    let ordinal0 = date.ordinal0();
    let days_from_sunday = date.weekday().num_days_from_sunday();
    (ordinal0 + 7 - days_from_sunday) / 7
}
