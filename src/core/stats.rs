use crate::config::Config;
use crate::core::calculator::stats::{compute_stats, compute_table_stats};
use crate::core::{current_activity, open_store};
use crate::errors::{AppError, AppResult};
use crate::models::activity::ActivityLog;
use crate::models::stats::Stats;
use crate::utils::date;
use crate::utils::formatting::hours_2dp;
use crate::utils::hours_label;
use crate::utils::table::{Column, Table};
use serde::Serialize;

/// The summary shown under the heatmap.
pub fn summary_text(name: &str, s: &Stats) -> String {
    format!(
        "You spent {:.2}% of the year on {}.\n\
         Total hours this year: {}\n\
         Avg hours per day: {}\n\
         Avg hours per week: {}\n\
         Avg hours per month: {}",
        s.percent_days_active,
        name,
        hours_label(s.total_hours),
        hours_2dp(s.avg_per_day),
        hours_2dp(s.avg_per_week),
        hours_2dp(s.avg_per_month),
    )
}

/// One activity's figures as printed by `stats --json`.
#[derive(Serialize)]
struct StatsRow<'a> {
    activity: &'a str,
    #[serde(flatten)]
    stats: Stats,
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> AppResult<()> {
    let text = serde_json::to_string_pretty(value)
        .map_err(|e| AppError::Export(format!("JSON serialization error: {e}")))?;
    println!("{text}");
    Ok(())
}

pub struct StatsLogic;

impl StatsLogic {
    pub fn print_summary(log: &ActivityLog) {
        println!("\n{}", summary_text(log.name(), &compute_stats(log)));
    }

    pub fn show(cfg: &Config, all: bool, json: bool) -> AppResult<()> {
        let today = date::today();
        let store = open_store(cfg, today)?;

        if !all {
            let idx = current_activity(&store, cfg)?;
            let log = store.activity(idx)?;
            if json {
                return print_json(&StatsRow {
                    activity: log.name(),
                    stats: compute_stats(log),
                });
            }
            Self::print_summary(log);
            return Ok(());
        }

        if store.table().is_empty() {
            return Err(AppError::NoActivities);
        }

        if json {
            let rows: Vec<StatsRow<'_>> = compute_table_stats(store.table())
                .into_iter()
                .map(|(activity, stats)| StatsRow { activity, stats })
                .collect();
            return print_json(&rows);
        }

        let mut table = Table::new(vec![
            Column::new("Activity"),
            Column::new("Total"),
            Column::new("Days"),
            Column::new("Per day"),
            Column::new("Per week"),
            Column::new("Per month"),
            Column::new("Active"),
        ]);

        for (name, s) in compute_table_stats(store.table()) {
            table.add_row(vec![
                name.to_string(),
                hours_label(s.total_hours),
                s.days_active.to_string(),
                format!("{:.2}", s.avg_per_day),
                format!("{:.2}", s.avg_per_week),
                format!("{:.2}", s.avg_per_month),
                format!("{:.2}%", s.percent_days_active),
            ]);
        }

        print!("{}", table.render());
        Ok(())
    }
}
