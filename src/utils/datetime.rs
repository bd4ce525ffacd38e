//! Date utility functions
//!
//! Due date formatting: configured patterns and the relative labels drawn on
//! cards ("yesterday", "today", "in 5 days").

use chrono::format::{Item, StrftimeItems};
use chrono::{Datelike, NaiveDate, Weekday};

/// Standard date format used for due dates
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Format a NaiveDate to YYYY-MM-DD string
pub fn format_ymd(d: NaiveDate) -> String {
    d.format(DATE_FORMAT).to_string()
}

/// Whether `format` is a strftime pattern chrono can render
pub fn is_valid_date_format(format: &str) -> bool {
    !format.is_empty() && !StrftimeItems::new(format).any(|item| matches!(item, Item::Error))
}

/// Relative label for a due date seen from `today`.
///
/// Dates more than a month away fall back to `date_format`.
pub fn format_relative_date(date: NaiveDate, today: NaiveDate, date_format: &str) -> String {
    let days_diff = (date - today).num_days();

    match days_diff {
        -1 => "yesterday".to_string(),
        0 => "today".to_string(),
        1 => "tomorrow".to_string(),
        diff if diff > 1 && diff <= 7 => format!("next {}", weekday_name(date.weekday())),
        diff if (-7..-1).contains(&diff) => format!("last {}", weekday_name(date.weekday())),
        diff if diff > 7 && diff <= 30 => format!("in {} days", diff),
        diff if (-30..-7).contains(&diff) => format!("{} days ago", -diff),
        _ => format_date(date, date_format),
    }
}

/// Format with the configured pattern, falling back to YYYY-MM-DD when it is invalid
pub fn format_date(date: NaiveDate, date_format: &str) -> String {
    if is_valid_date_format(date_format) {
        date.format(date_format).to_string()
    } else {
        format_ymd(date)
    }
}

/// Get a human-readable weekday name
fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}
