use super::day_record::DayRecord;
use crate::errors::{AppError, AppResult};
use crate::utils::date::{in_window, window_start};
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Longest name that still fits the 50-byte NUL-terminated field on disk.
pub const MAX_NAME_LEN: usize = 49;

/// Largest hour count the signed 32-bit field on disk can hold.
pub const MAX_HOURS: u32 = i32::MAX as u32;

/// One activity and its day log for the rolling window.
///
/// Days are kept in a date-ordered map. A day with zero hours is never
/// stored, so `days.len()` is also the number of active days.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityLog {
    name: String,
    days: BTreeMap<NaiveDate, u32>,
}

impl ActivityLog {
    pub fn new(name: &str) -> AppResult<Self> {
        Ok(Self {
            name: validate_name(name)?,
            days: BTreeMap::new(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rename(&mut self, name: &str) -> AppResult<()> {
        self.name = validate_name(name)?;
        Ok(())
    }

    pub fn hours_on(&self, date: NaiveDate) -> u32 {
        self.days.get(&date).copied().unwrap_or(0)
    }

    /// Set the hours of `date`. Zero clears the day.
    pub fn log_hours(&mut self, date: NaiveDate, hours: u32, today: NaiveDate) -> AppResult<()> {
        if !in_window(date, today) {
            return Err(AppError::DateOutsideWindow {
                date,
                start: window_start(today),
                end: today,
            });
        }

        if hours > MAX_HOURS {
            return Err(AppError::InvalidHours(hours.to_string()));
        }

        if hours == 0 {
            self.days.remove(&date);
        } else {
            self.days.insert(date, hours);
        }
        Ok(())
    }

    /// Clear one day. Returns whether hours were recorded for it.
    pub fn clear_day(&mut self, date: NaiveDate) -> bool {
        self.days.remove(&date).is_some()
    }

    /// Drop every record older than the window ending on `today`.
    pub fn prune(&mut self, today: NaiveDate) -> Vec<DayRecord> {
        let keep = self.days.split_off(&window_start(today));
        let evicted = std::mem::replace(&mut self.days, keep);
        evicted
            .into_iter()
            .map(|(date, hours)| DayRecord::new(date, hours))
            .collect()
    }

    /// Insert a record read from disk. The first record seen for a date wins.
    pub(crate) fn restore(&mut self, record: DayRecord) {
        if record.hours > 0 {
            self.days.entry(record.date).or_insert(record.hours);
        }
    }

    /// Records in chronological order.
    pub fn records(&self) -> impl Iterator<Item = DayRecord> + '_ {
        self.days
            .iter()
            .map(|(&date, &hours)| DayRecord::new(date, hours))
    }

    pub fn first_date(&self) -> Option<NaiveDate> {
        self.days.keys().next().copied()
    }

    pub fn last_date(&self) -> Option<NaiveDate> {
        self.days.keys().next_back().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }
}

fn validate_name(raw: &str) -> AppResult<String> {
    let name = raw.trim();

    if name.is_empty() {
        return Err(AppError::InvalidActivityName(
            raw.to_string(),
            "name is empty",
        ));
    }
    if name.len() > MAX_NAME_LEN {
        return Err(AppError::InvalidActivityName(
            raw.to_string(),
            "name is longer than 49 bytes",
        ));
    }
    if name.chars().any(|c| c.is_control()) {
        return Err(AppError::InvalidActivityName(
            raw.to_string(),
            "name contains control characters",
        ));
    }

    Ok(name.to_string())
}
