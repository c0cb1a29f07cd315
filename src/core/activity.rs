use crate::config::Config;
use crate::core::calculator::stats::compute_stats;
use crate::core::open_store;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::utils::date::{self, iso};
use crate::utils::formatting::bold;
use crate::utils::hours_label;
use crate::utils::table::{Column, Table};

pub struct ActivityLogic;

impl ActivityLogic {
    pub fn add(cfg: &Config, name: &str) -> AppResult<()> {
        let mut store = open_store(cfg, date::today())?;
        let idx = store.add_activity(name)?;
        let name = store.activity(idx)?.name().to_string();

        store.audit("add", &name, &format!("Activity added in slot {idx}"));
        success(format!("Activity '{name}' added"));
        Ok(())
    }

    /// Remove the activity and its whole day log.
    pub fn remove(cfg: &Config, name: &str) -> AppResult<()> {
        let mut store = open_store(cfg, date::today())?;
        let idx = store.select(name)?;
        let removed = store.remove_activity(idx)?;

        store.audit(
            "remove",
            removed.name(),
            &format!("Activity removed with {} logged days", removed.len()),
        );
        success(format!(
            "Activity '{}' removed ({} logged days dropped)",
            removed.name(),
            removed.len()
        ));
        Ok(())
    }

    pub fn rename(cfg: &Config, old: &str, new: &str) -> AppResult<()> {
        let mut store = open_store(cfg, date::today())?;
        let idx = store.select(old)?;
        let before = store.activity(idx)?.name().to_string();
        store.rename_activity(idx, new)?;
        let after = store.activity(idx)?.name().to_string();

        // Keep the preferred activity pointing at the same slot.
        let mut saved = Config::load()?;
        if saved
            .default_activity
            .as_deref()
            .is_some_and(|d| d.eq_ignore_ascii_case(&before))
        {
            saved.default_activity = Some(after.clone());
            saved.save()?;
        }

        store.audit("rename", &before, &format!("Renamed to {after}"));
        success(format!("Activity '{before}' renamed to '{after}'"));
        Ok(())
    }

    pub fn list(cfg: &Config) -> AppResult<()> {
        let store = open_store(cfg, date::today())?;

        if store.table().is_empty() {
            info("No activities yet. Add one with `task-heatmap activity add <NAME>`.");
            return Ok(());
        }

        let current = store
            .resolve_current(None, cfg.default_activity.as_deref())
            .ok();

        let mut table = Table::new(vec![
            Column::new(" "),
            Column::new("#"),
            Column::new("Activity"),
            Column::new("Days"),
            Column::new("Total"),
            Column::new("Last logged"),
        ]);

        for (idx, log) in store.table().iter() {
            let stats = compute_stats(log);
            table.add_row(vec![
                if Some(idx) == current { "*" } else { "" }.to_string(),
                idx.to_string(),
                log.name().to_string(),
                stats.days_active.to_string(),
                hours_label(stats.total_hours),
                log.last_date().map(iso).unwrap_or_else(|| "--".to_string()),
            ]);
        }

        println!("{}", bold("Activities"));
        print!("{}", table.render());
        Ok(())
    }

    /// Persist `name` as the default activity in the configuration file.
    pub fn select(cfg: &Config, name: &str) -> AppResult<()> {
        let store = open_store(cfg, date::today())?;
        let idx = store.select(name)?;
        let chosen = store.activity(idx)?.name().to_string();

        let mut saved = Config::load()?;
        saved.default_activity = Some(chosen.clone());
        saved.save()?;

        store.audit("select", &chosen, "Default activity changed");
        success(format!("'{chosen}' is now the default activity"));
        Ok(())
    }
}
