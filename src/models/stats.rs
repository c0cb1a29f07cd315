use serde::Serialize;

/// Aggregates of one activity over the yearly window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Stats {
    pub total_hours: u64,
    pub days_active: usize,
    pub avg_per_day: f64,
    pub avg_per_week: f64,
    pub avg_per_month: f64,
    pub percent_days_active: f64,
}
