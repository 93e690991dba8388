//! Date helper functions

use chrono::{DateTime, TimeZone};

/// Format a date for display in post listings and headers
///
/// # Examples
/// ```ignore
/// long_date(&date) // -> "15 January 2024"
/// ```
pub fn long_date<Tz: TimeZone>(date: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    date.format("%-d %B %Y").to_string()
}
