use chrono::NaiveDate;

/// Hours logged for one calendar day of one activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayRecord {
    pub date: NaiveDate,
    pub hours: u32,
}

impl DayRecord {
    pub fn new(date: NaiveDate, hours: u32) -> Self {
        Self { date, hours }
    }
}
