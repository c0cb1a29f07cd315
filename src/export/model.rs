// src/export/model.rs

use crate::models::activity::ActivityLog;
use crate::utils::date::iso;
use serde::Serialize;

/// Flat row for CSV / JSON export: one logged day of one activity.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct RecordExport {
    pub activity: String,
    pub date: String,
    pub hours: u32,
}

/// Rows of one activity, oldest day first.
pub(crate) fn activity_rows(log: &ActivityLog) -> Vec<RecordExport> {
    log.records()
        .map(|r| RecordExport {
            activity: log.name().to_string(),
            date: iso(r.date),
            hours: r.hours,
        })
        .collect()
}
