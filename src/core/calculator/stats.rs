use crate::models::activity::ActivityLog;
use crate::models::stats::Stats;
use crate::models::table::ActivityTable;
use crate::utils::date::DAYS_IN_YEAR;

/// Year-wide aggregates. Averages always divide by the full window, not by
/// the number of active days.
pub fn compute_stats(log: &ActivityLog) -> Stats {
    let (total_hours, days_active) = log
        .records()
        .filter(|r| r.hours > 0)
        .fold((0u64, 0usize), |(total, days), r| {
            (total + u64::from(r.hours), days + 1)
        });

    let window = DAYS_IN_YEAR as f64;
    let avg_per_day = total_hours as f64 / window;

    Stats {
        total_hours,
        days_active,
        avg_per_day,
        avg_per_week: avg_per_day * 7.0,
        avg_per_month: avg_per_day * 30.0,
        percent_days_active: days_active as f64 / window * 100.0,
    }
}

/// One entry per occupied slot, in slot order.
pub fn compute_table_stats(table: &ActivityTable) -> Vec<(&str, Stats)> {
    table
        .iter()
        .map(|(_, log)| (log.name(), compute_stats(log)))
        .collect()
}
