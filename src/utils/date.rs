use crate::errors::{AppError, AppResult};
use chrono::{Days, NaiveDate};

/// Number of calendar days covered by a day log, today included.
pub const DAYS_IN_YEAR: usize = 365;

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// ISO string as stored on disk.
pub fn iso(d: NaiveDate) -> String {
    d.format("%Y-%m-%d").to_string()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Parse an optional `--date` argument, falling back to `today`.
pub fn resolve_date(input: Option<&String>, today: NaiveDate) -> AppResult<NaiveDate> {
    match input {
        Some(s) => parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string())),
        None => Ok(today),
    }
}

/// First day of the rolling window that ends on `today`.
pub fn window_start(today: NaiveDate) -> NaiveDate {
    today
        .checked_sub_days(Days::new(DAYS_IN_YEAR as u64 - 1))
        .unwrap_or(NaiveDate::MIN)
}

pub fn in_window(date: NaiveDate, today: NaiveDate) -> bool {
    date >= window_start(today) && date <= today
}

/// `start + offset` days, saturating at the calendar bounds.
pub fn add_days(start: NaiveDate, offset: usize) -> NaiveDate {
    start
        .checked_add_days(Days::new(offset as u64))
        .unwrap_or(NaiveDate::MAX)
}
