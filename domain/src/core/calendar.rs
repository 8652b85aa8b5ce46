//! Date helpers used by the delivery schedule and email subjects.

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike, Weekday};

/// Whether the date falls on Saturday or Sunday
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// `YYYY/MM/DD HH:MM`
pub fn format_date_time(now: NaiveDateTime) -> String {
    format!(
        "{:04}/{:02}/{:02} {:02}:{:02}",
        now.year(),
        now.month(),
        now.day(),
        now.hour(),
        now.minute()
    )
}

/// `M月D日` without zero padding, as used in subjects
pub fn month_day_ja(date: NaiveDate) -> String {
    format!("{}月{}日", date.month(), date.day())
}
