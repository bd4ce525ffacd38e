use chrono::NaiveDate;
use taskboard::utils::datetime::{format_date, format_relative_date, format_ymd, is_valid_date_format};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_ymd_format() {
    assert_eq!(format_ymd(date(2025, 1, 5)), "2025-01-05");
}

#[test]
fn test_relative_labels() {
    // 2025-01-15 is a Wednesday
    let today = date(2025, 1, 15);
    let fmt = "%Y-%m-%d";

    assert_eq!(format_relative_date(today, today, fmt), "today");
    assert_eq!(format_relative_date(date(2025, 1, 14), today, fmt), "yesterday");
    assert_eq!(format_relative_date(date(2025, 1, 16), today, fmt), "tomorrow");
    assert_eq!(format_relative_date(date(2025, 1, 20), today, fmt), "next Monday");
    assert_eq!(format_relative_date(date(2025, 1, 10), today, fmt), "last Friday");
    assert_eq!(format_relative_date(date(2025, 2, 1), today, fmt), "in 17 days");
    assert_eq!(format_relative_date(date(2025, 1, 1), today, fmt), "14 days ago");
    assert_eq!(format_relative_date(date(2025, 6, 1), today, fmt), "2025-06-01");
}

#[test]
fn test_configured_format() {
    assert!(is_valid_date_format("%d %b %Y"));
    assert!(!is_valid_date_format("%Q"));
    assert!(!is_valid_date_format(""));

    assert_eq!(format_date(date(2025, 3, 9), "%d %b %Y"), "09 Mar 2025");
    assert_eq!(format_date(date(2025, 3, 9), "%Q"), "2025-03-09");
}
