// src/export/logic.rs

use crate::config::Config;
use crate::core::{current_activity, open_store};
use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::{RecordExport, activity_rows};
use crate::ui::messages::warning;
use crate::utils::date;
use std::path::Path;

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Export the logged days of the current activity, or of every activity
    /// with `all`.
    pub fn export(
        cfg: &Config,
        format: ExportFormat,
        file: &str,
        all: bool,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);
        let store = open_store(cfg, date::today())?;

        let rows: Vec<RecordExport> = if all {
            store
                .table()
                .iter()
                .flat_map(|(_, log)| activity_rows(log))
                .collect()
        } else {
            let idx = current_activity(&store, cfg)?;
            activity_rows(store.activity(idx)?)
        };

        if rows.is_empty() {
            warning("No logged days to export.");
            return Ok(());
        }

        ensure_writable(path, force)?;

        match format {
            ExportFormat::Csv => export_csv(&rows, path)?,
            ExportFormat::Json => export_json(&rows, path)?,
        }

        store.audit(
            "export",
            format.as_str(),
            &format!("{} rows to {}", rows.len(), path.display()),
        );
        Ok(())
    }
}
