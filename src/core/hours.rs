use crate::config::Config;
use crate::core::stats::StatsLogic;
use crate::core::{current_activity, open_store};
use crate::errors::{AppError, AppResult};
use crate::models::activity::MAX_HOURS;
use crate::ui::messages::{info, success};
use crate::utils::date::{self, iso};
use crate::utils::hours_label;

/// Parse user-entered hours. Only a non-negative integer that fits the
/// on-disk field is accepted.
pub fn parse_hours(text: &str) -> AppResult<u32> {
    let t = text.trim();
    if t.is_empty() || !t.chars().all(|c| c.is_ascii_digit()) {
        return Err(AppError::InvalidHours(text.to_string()));
    }
    t.parse::<u32>()
        .ok()
        .filter(|&h| h <= MAX_HOURS)
        .ok_or_else(|| AppError::InvalidHours(text.to_string()))
}

pub struct HoursLogic;

impl HoursLogic {
    /// Set the hours of one day (today by default) on the current activity.
    pub fn log(cfg: &Config, hours_text: &str, date_arg: Option<&String>) -> AppResult<()> {
        let hours = parse_hours(hours_text)?;
        let today = date::today();
        let day = date::resolve_date(date_arg, today)?;

        let mut store = open_store(cfg, today)?;
        let idx = current_activity(&store, cfg)?;
        let name = store.activity(idx)?.name().to_string();

        store.log_hours(idx, day, hours, today)?;

        let what = format!("{} on {}", hours_label(u64::from(hours)), iso(day));
        store.audit("log", &name, &what);
        success(format!("{name}: logged {what}"));

        StatsLogic::print_summary(store.activity(idx)?);
        Ok(())
    }

    /// Clear one day (today by default) on the current activity.
    pub fn reset(cfg: &Config, date_arg: Option<&String>) -> AppResult<()> {
        let today = date::today();
        let day = date::resolve_date(date_arg, today)?;

        let mut store = open_store(cfg, today)?;
        let idx = current_activity(&store, cfg)?;
        let name = store.activity(idx)?.name().to_string();

        let cleared = if day == today {
            store.reset_today(idx, today)?
        } else {
            store.clear_day(idx, day)?
        };

        if cleared {
            store.audit("reset", &name, &format!("Hours cleared for {}", iso(day)));
            success(format!("{name}: hours for {} reset", iso(day)));
        } else {
            info(format!("{name}: nothing logged on {}", iso(day)));
        }

        StatsLogic::print_summary(store.activity(idx)?);
        Ok(())
    }
}
