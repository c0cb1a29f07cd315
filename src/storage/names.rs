//! Line-oriented activity list used to populate the activity selector.

use crate::errors::{AppError, AppResult};
use crate::models::table::{ActivityTable, MAX_ACTIVITIES};
use crate::utils::path::ensure_private_dir;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Read up to ten names, one per line. A missing file yields no names.
pub fn load_activity_names(path: &Path) -> AppResult<Vec<String>> {
    let content = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(e.into()),
    };

    Ok(content
        .lines()
        .map(|l| l.trim_end_matches('\r').trim())
        .filter(|l| !l.is_empty())
        .take(MAX_ACTIVITIES)
        .map(str::to_string)
        .collect())
}

/// Overwrite the list with the occupied slots of `table`, in slot order.
pub fn save_activity_names(table: &ActivityTable, path: &Path) -> AppResult<()> {
    if let Some(dir) = path.parent() {
        ensure_private_dir(dir).map_err(|source| AppError::Save {
            path: dir.to_path_buf(),
            source,
        })?;
    }

    let mut content = String::new();
    for name in table.names() {
        content.push_str(&name);
        content.push('\n');
    }

    fs::write(path, content).map_err(|source| AppError::Save {
        path: path.to_path_buf(),
        source,
    })
}
