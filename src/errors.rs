//! Unified application error type.
//! All modules (storage, core, cli, utils) return AppError to keep the error
//! handling consistent and easy to manage.

use chrono::NaiveDate;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Writing one of the data files failed. The in-memory change is not
    /// persisted; callers must report this instead of carrying on.
    #[error("Could not write {}: {source}", path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    // ---------------------------
    // Data file
    // ---------------------------
    #[error("Unrecognised data file format: {0}")]
    Format(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0} (expected YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("Invalid hours value: '{0}' (expected a non-negative integer)")]
    InvalidHours(String),

    // ---------------------------
    // Logic errors
    // ---------------------------
    #[error("Date {date} is outside the tracked window ({start} to {end})")]
    DateOutsideWindow {
        date: NaiveDate,
        start: NaiveDate,
        end: NaiveDate,
    },

    #[error("Activity table is full (max {0} activities)")]
    ActivityCapacity(usize),

    #[error("Activity '{0}' already exists")]
    DuplicateActivity(String),

    #[error("Invalid activity name '{0}': {1}")]
    InvalidActivityName(String, &'static str),

    #[error("Unknown activity: {0}")]
    UnknownActivity(String),

    #[error("No activities defined yet. Add one with `task-heatmap activity add <NAME>`")]
    NoActivities,

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),
}

pub type AppResult<T> = Result<T, AppError>;
