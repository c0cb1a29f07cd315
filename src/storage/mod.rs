//! On-disk persistence: the binary hours file, the activity list and the
//! internal audit log, all kept in one data directory.

pub mod audit;
pub mod binary;
pub mod migrate;
pub mod names;
pub mod store;

pub use names::{load_activity_names, save_activity_names};
pub use store::Store;

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::table::ActivityTable;
use crate::utils::path::{ensure_private_dir, expand_tilde};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Resolved locations of every data file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataPaths {
    pub dir: PathBuf,
    pub data: PathBuf,
    pub activities: PathBuf,
    pub log: PathBuf,
}

impl DataPaths {
    /// Paths from the configuration, with an optional `--data-dir` override.
    pub fn resolve(cfg: &Config, data_dir: Option<&str>) -> Self {
        let dir = match data_dir {
            Some(d) => expand_tilde(d),
            None => cfg.data_dir(),
        };

        Self {
            data: dir.join(&cfg.data_file),
            activities: dir.join(&cfg.activities_file),
            log: dir.join(&cfg.log_file),
            dir,
        }
    }

    /// Default file names inside `dir`.
    pub fn in_dir(dir: &Path) -> Self {
        let cfg = Config::default();
        Self::resolve(&cfg, Some(&dir.to_string_lossy()))
    }
}

/// Load the hours file. A missing file is an empty table; a file that does
/// not decode is an error, so that a later save cannot overwrite it.
pub fn load_task_data(path: &Path) -> AppResult<ActivityTable> {
    let bytes = match fs::read(path) {
        Ok(b) => b,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(ActivityTable::new()),
        Err(e) => return Err(e.into()),
    };

    let (_, table) = migrate::decode_any(&bytes, migrate::DEFAULT_ACTIVITY)
        .map_err(|e| AppError::Format(format!("{}: {e}", path.display())))?;
    Ok(table)
}

/// Write the whole table in the current schema, creating the data
/// directory with owner-only permissions if needed.
pub fn save_task_data(table: &ActivityTable, path: &Path) -> AppResult<()> {
    if let Some(dir) = path.parent() {
        ensure_private_dir(dir).map_err(|source| AppError::Save {
            path: dir.to_path_buf(),
            source,
        })?;
    }

    let bytes = binary::encode_table(table)?;
    fs::write(path, bytes).map_err(|source| AppError::Save {
        path: path.to_path_buf(),
        source,
    })
}
