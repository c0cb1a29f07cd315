pub mod activity;
pub mod backup;
pub mod calculator;
pub mod config;
pub mod heatmap;
pub mod hours;
pub mod log;
pub mod stats;

use crate::config::Config;
use crate::errors::AppResult;
use crate::storage::{DataPaths, Store};
use chrono::NaiveDate;

/// Open the store described by `cfg`.
pub(crate) fn open_store(cfg: &Config, today: NaiveDate) -> AppResult<Store> {
    Store::open(DataPaths::resolve(cfg, None), today)
}

/// Position of the activity the command applies to.
pub(crate) fn current_activity(store: &Store, cfg: &Config) -> AppResult<usize> {
    store.resolve_current(
        cfg.selected_activity.as_deref(),
        cfg.default_activity.as_deref(),
    )
}
