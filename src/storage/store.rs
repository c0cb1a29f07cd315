use super::{DataPaths, audit, load_task_data, migrate, names, save_task_data};
use crate::errors::{AppError, AppResult};
use crate::models::activity::ActivityLog;
use crate::models::table::ActivityTable;
use crate::ui::messages::warning;
use crate::utils::date::iso;
use chrono::NaiveDate;

/// The activity table together with its files. Every successful mutation is
/// written to disk before the method returns.
pub struct Store {
    paths: DataPaths,
    table: ActivityTable,
}

impl Store {
    /// Load the data directory: upgrade a legacy hours file, pick up names
    /// that only exist in the activities file, evict records that left the
    /// window ending on `today`.
    pub fn open(paths: DataPaths, today: NaiveDate) -> AppResult<Self> {
        migrate::run_pending(&paths)?;

        let mut table = load_task_data(&paths.data)?;
        let listed = names::load_activity_names(&paths.activities)?;
        let mut dirty = false;

        for name in listed {
            if table.find(&name).is_some() {
                continue;
            }
            match table.add_activity(&name) {
                Ok(_) => dirty = true,
                Err(e) => warning(format!("Ignoring activity '{name}' from list: {e}")),
            }
        }

        let evicted = table.prune(today);
        dirty |= !evicted.is_empty();
        let store = Self { paths, table };

        for (name, record) in &evicted {
            let msg = format!(
                "{} hours on {} left the 365-day window",
                record.hours,
                iso(record.date)
            );
            warning(format!("{name}: {msg}"));
            store.audit("evict", name, &msg);
        }

        if dirty {
            store.save()?;
        }
        Ok(store)
    }

    pub fn table(&self) -> &ActivityTable {
        &self.table
    }

    pub fn activity(&self, index: usize) -> AppResult<&ActivityLog> {
        self.table
            .get(index)
            .ok_or_else(|| AppError::UnknownActivity(format!("#{index}")))
    }

    /// Position of the activity called `name`.
    pub fn select(&self, name: &str) -> AppResult<usize> {
        self.table
            .find(name)
            .ok_or_else(|| AppError::UnknownActivity(name.trim().to_string()))
    }

    /// Explicit selection first, then the preferred activity if it still
    /// exists, then the first occupied slot.
    pub fn resolve_current(
        &self,
        explicit: Option<&str>,
        preferred: Option<&str>,
    ) -> AppResult<usize> {
        if let Some(name) = explicit {
            return self.select(name);
        }
        if let Some(index) = preferred.and_then(|name| self.table.find(name)) {
            return Ok(index);
        }
        self.table.first_index().ok_or(AppError::NoActivities)
    }

    pub fn save(&self) -> AppResult<()> {
        save_task_data(&self.table, &self.paths.data)?;
        names::save_activity_names(&self.table, &self.paths.activities)
    }

    /// Record an operation in the audit log. Failures only warn.
    pub fn audit(&self, operation: &str, target: &str, message: &str) {
        if let Err(e) = audit::ttlog(&self.paths.log, operation, target, message) {
            warning(format!("Failed to write internal log: {e}"));
        }
    }

    pub fn log_hours(
        &mut self,
        index: usize,
        date: NaiveDate,
        hours: u32,
        today: NaiveDate,
    ) -> AppResult<()> {
        self.table.log_hours(index, date, hours, today)?;
        self.save()
    }

    pub fn clear_day(&mut self, index: usize, date: NaiveDate) -> AppResult<bool> {
        let cleared = self.table.clear_day(index, date)?;
        if cleared {
            self.save()?;
        }
        Ok(cleared)
    }

    pub fn reset_today(&mut self, index: usize, today: NaiveDate) -> AppResult<bool> {
        self.clear_day(index, today)
    }

    pub fn add_activity(&mut self, name: &str) -> AppResult<usize> {
        let index = self.table.add_activity(name)?;
        self.save()?;
        Ok(index)
    }

    pub fn remove_activity(&mut self, index: usize) -> AppResult<ActivityLog> {
        let removed = self.table.remove_activity(index)?;
        self.save()?;
        Ok(removed)
    }

    pub fn rename_activity(&mut self, index: usize, name: &str) -> AppResult<()> {
        self.table.rename_activity(index, name)?;
        self.save()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::date::parse_date;
    use std::env;
    use std::fs;

    fn d(s: &str) -> NaiveDate {
        parse_date(s).unwrap()
    }

    fn temp_paths(name: &str) -> DataPaths {
        let dir = env::temp_dir().join(format!("task_heatmap_store_{name}"));
        fs::remove_dir_all(&dir).ok();
        DataPaths::in_dir(&dir)
    }

    #[test]
    fn mutations_are_flushed_immediately() {
        let paths = temp_paths("flush");
        let today = d("2025-07-01");

        let mut store = Store::open(paths.clone(), today).unwrap();
        let idx = store.add_activity("Reading").unwrap();
        store.log_hours(idx, today, 5, today).unwrap();

        let reopened = Store::open(paths.clone(), today).unwrap();
        assert_eq!(reopened.activity(idx).unwrap().hours_on(today), 5);
        assert_eq!(
            fs::read_to_string(&paths.activities).unwrap(),
            "Reading\n"
        );

        fs::remove_dir_all(&paths.dir).ok();
    }

    #[test]
    fn names_only_in_list_are_adopted() {
        let paths = temp_paths("adopt");
        fs::create_dir_all(&paths.dir).unwrap();
        fs::write(&paths.activities, "Reading\nGuitar\n").unwrap();

        let store = Store::open(paths.clone(), d("2025-07-01")).unwrap();
        assert_eq!(store.table().names(), vec!["Reading", "Guitar"]);
        assert!(paths.data.exists());

        fs::remove_dir_all(&paths.dir).ok();
    }

    #[test]
    fn old_records_are_evicted_on_open() {
        let paths = temp_paths("evict");
        let then = d("2025-01-10");

        let mut store = Store::open(paths.clone(), then).unwrap();
        let idx = store.add_activity("Reading").unwrap();
        store.log_hours(idx, d("2025-01-09"), 2, then).unwrap();
        store.log_hours(idx, then, 3, then).unwrap();

        let later = Store::open(paths.clone(), d("2026-01-09")).unwrap();
        let log = later.activity(idx).unwrap();
        assert_eq!(log.len(), 1);
        assert_eq!(log.hours_on(then), 3);

        let entries = audit::read_entries(&paths.log).unwrap();
        assert!(entries.iter().any(|e| e.operation == "evict"));

        fs::remove_dir_all(&paths.dir).ok();
    }

    #[test]
    fn current_activity_resolution() {
        let paths = temp_paths("resolve");
        let today = d("2025-07-01");
        let mut store = Store::open(paths.clone(), today).unwrap();
        assert!(matches!(
            store.resolve_current(None, None),
            Err(AppError::NoActivities)
        ));

        store.add_activity("Reading").unwrap();
        store.add_activity("Guitar").unwrap();

        assert_eq!(store.resolve_current(None, None).unwrap(), 0);
        assert_eq!(store.resolve_current(None, Some("guitar")).unwrap(), 1);
        assert_eq!(store.resolve_current(None, Some("Gone")).unwrap(), 0);
        assert!(store.resolve_current(Some("Gone"), None).is_err());

        fs::remove_dir_all(&paths.dir).ok();
    }
}
