use super::activity::ActivityLog;
use super::day_record::DayRecord;
use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;

/// Number of activity slots, matching the slots of the data file.
pub const MAX_ACTIVITIES: usize = 10;

/// Positional table of activities. Removing an activity blanks its slot;
/// the other activities keep their positions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityTable {
    slots: [Option<ActivityLog>; MAX_ACTIVITIES],
}

impl Default for ActivityTable {
    fn default() -> Self {
        Self {
            slots: std::array::from_fn(|_| None),
        }
    }
}

impl ActivityTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, index: usize) -> Option<&ActivityLog> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    fn occupied_mut(&mut self, index: usize) -> AppResult<&mut ActivityLog> {
        self.slots
            .get_mut(index)
            .and_then(Option::as_mut)
            .ok_or_else(|| AppError::UnknownActivity(format!("#{index}")))
    }

    pub fn find(&self, name: &str) -> Option<usize> {
        let name = name.trim();
        self.iter()
            .find(|(_, a)| a.name().eq_ignore_ascii_case(name))
            .map(|(i, _)| i)
    }

    pub fn first_index(&self) -> Option<usize> {
        self.iter().map(|(i, _)| i).next()
    }

    /// Occupied slots with their position.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &ActivityLog)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, s)| s.as_ref().map(|a| (i, a)))
    }

    pub fn names(&self) -> Vec<String> {
        self.iter().map(|(_, a)| a.name().to_string()).collect()
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// Put an activity into the first free slot.
    pub fn add_activity(&mut self, name: &str) -> AppResult<usize> {
        let activity = ActivityLog::new(name)?;
        self.insert(activity)
    }

    pub(crate) fn insert(&mut self, activity: ActivityLog) -> AppResult<usize> {
        if self.find(activity.name()).is_some() {
            return Err(AppError::DuplicateActivity(activity.name().to_string()));
        }

        let free = self
            .slots
            .iter()
            .position(Option::is_none)
            .ok_or(AppError::ActivityCapacity(MAX_ACTIVITIES))?;

        self.slots[free] = Some(activity);
        Ok(free)
    }

    /// Place an activity at a fixed position, as read from disk.
    pub(crate) fn put(&mut self, index: usize, activity: ActivityLog) {
        if index < MAX_ACTIVITIES {
            self.slots[index] = Some(activity);
        }
    }

    /// Empty a slot, returning the activity with its whole day log.
    pub fn remove_activity(&mut self, index: usize) -> AppResult<ActivityLog> {
        self.slots
            .get_mut(index)
            .and_then(Option::take)
            .ok_or_else(|| AppError::UnknownActivity(format!("#{index}")))
    }

    pub fn rename_activity(&mut self, index: usize, name: &str) -> AppResult<()> {
        if let Some(other) = self.find(name)
            && other != index
        {
            return Err(AppError::DuplicateActivity(name.trim().to_string()));
        }
        self.occupied_mut(index)?.rename(name)
    }

    pub fn log_hours(
        &mut self,
        index: usize,
        date: NaiveDate,
        hours: u32,
        today: NaiveDate,
    ) -> AppResult<()> {
        self.occupied_mut(index)?.log_hours(date, hours, today)
    }

    pub fn clear_day(&mut self, index: usize, date: NaiveDate) -> AppResult<bool> {
        Ok(self.occupied_mut(index)?.clear_day(date))
    }

    pub fn reset_today(&mut self, index: usize, today: NaiveDate) -> AppResult<bool> {
        self.clear_day(index, today)
    }

    /// Evict out-of-window records from every activity.
    pub fn prune(&mut self, today: NaiveDate) -> Vec<(String, DayRecord)> {
        let mut evicted = Vec::new();
        for activity in self.slots.iter_mut().flatten() {
            let name = activity.name().to_string();
            evicted.extend(activity.prune(today).into_iter().map(|r| (name.clone(), r)));
        }
        evicted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::date::parse_date;

    fn d(s: &str) -> NaiveDate {
        parse_date(s).unwrap()
    }

    #[test]
    fn eleventh_activity_is_rejected() {
        let mut table = ActivityTable::new();
        for i in 0..MAX_ACTIVITIES {
            assert_eq!(table.add_activity(&format!("Activity {i}")).unwrap(), i);
        }

        let err = table.add_activity("One too many").unwrap_err();
        assert!(matches!(err, AppError::ActivityCapacity(10)));
        assert_eq!(table.len(), MAX_ACTIVITIES);
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let mut table = ActivityTable::new();
        table.add_activity("Reading").unwrap();
        assert!(matches!(
            table.add_activity("reading"),
            Err(AppError::DuplicateActivity(_))
        ));
    }

    #[test]
    fn removal_frees_the_slot_without_shifting() {
        let mut table = ActivityTable::new();
        table.add_activity("Reading").unwrap();
        table.add_activity("Guitar").unwrap();
        table.add_activity("Running").unwrap();

        let removed = table.remove_activity(1).unwrap();
        assert_eq!(removed.name(), "Guitar");
        assert_eq!(table.find("Running"), Some(2));
        assert_eq!(table.add_activity("Chess").unwrap(), 1);
        assert!(table.remove_activity(7).is_err());
    }

    #[test]
    fn remove_does_not_touch_other_logs() {
        let today = d("2025-02-01");
        let mut table = ActivityTable::new();
        let a = table.add_activity("Reading").unwrap();
        let b = table.add_activity("Guitar").unwrap();
        table.log_hours(a, today, 2, today).unwrap();
        table.log_hours(b, today, 1, today).unwrap();

        table.remove_activity(b).unwrap();
        assert_eq!(table.get(a).unwrap().hours_on(today), 2);
    }

    #[test]
    fn reset_today_only_clears_today() {
        let today = d("2025-02-01");
        let mut table = ActivityTable::new();
        let a = table.add_activity("Reading").unwrap();
        table.log_hours(a, d("2025-01-31"), 4, today).unwrap();
        table.log_hours(a, today, 2, today).unwrap();

        assert!(table.reset_today(a, today).unwrap());
        let log = table.get(a).unwrap();
        assert_eq!(log.hours_on(today), 0);
        assert_eq!(log.hours_on(d("2025-01-31")), 4);
    }

    #[test]
    fn rename_checks_for_collisions() {
        let mut table = ActivityTable::new();
        table.add_activity("Reading").unwrap();
        let g = table.add_activity("Guitar").unwrap();
        assert!(table.rename_activity(g, "Reading").is_err());
        table.rename_activity(g, "Bass").unwrap();
        assert_eq!(table.names(), vec!["Reading", "Bass"]);
    }
}
