use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Resolve the roster day: an explicit `--date` (YYYY-MM-DD) or today.
pub fn resolve_day(date: Option<&str>) -> AppResult<NaiveDate> {
    match date {
        Some(s) => parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string())),
        None => Ok(today()),
    }
}

/// Long form used in headers, e.g. `Friday 16 October 2026`.
pub fn long_label(date: NaiveDate) -> String {
    date.format("%A %d %B %Y").to_string()
}
