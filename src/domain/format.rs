//! Display formatting shared by the terminal and HTML views

use chrono::{DateTime, Local, NaiveDate, NaiveTime, TimeZone};
use std::fmt;

/// e.g. "Jan 17, 2025"
pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// 12-hour clock, e.g. "2:05 PM"
pub fn format_time(time: NaiveTime) -> String {
    time.format("%-I:%M %p").to_string()
}

/// e.g. "Jan 17, 2025 at 2:05 PM"
pub fn format_datetime(date: NaiveDate, time: NaiveTime) -> String {
    format!("{} at {}", format_date(date), format_time(time))
}

pub fn format_timestamp<Tz: TimeZone>(timestamp: &DateTime<Tz>) -> String
where
    Tz::Offset: fmt::Display,
{
    timestamp.format("%b %-d, %Y, %-I:%M:%S %p").to_string()
}

/// Creation timestamp rendered in the local time zone
pub fn format_logged_on<Tz: TimeZone>(created_at: &DateTime<Tz>) -> String {
    format_timestamp(&created_at.with_timezone(&Local))
}

/// Escape text for interpolation into HTML element content or attributes
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
