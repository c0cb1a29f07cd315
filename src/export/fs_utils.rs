// src/export/fs_utils.rs

use crate::errors::{AppError, AppResult};
use crate::ui::messages::warning;
use std::io::{self, BufRead, Write};
use std::path::Path;

/// Only an explicit yes replaces an existing export or backup.
fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

/// Make sure `path` may be written. An existing file is replaced only with
/// `--force` or after the user agrees on stdin; a closed stdin counts as no.
pub(crate) fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if !path.exists() || force {
        return Ok(());
    }

    warning(format!("'{}' already exists.", path.display()));
    print!("Replace it? [y/N]: ");
    io::stdout().flush().ok();

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;

    if is_yes(&answer) {
        Ok(())
    } else {
        Err(AppError::Export(format!(
            "'{}' kept, pass --force to replace it",
            path.display()
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::fs;

    #[test]
    fn only_yes_answers_confirm() {
        assert!(is_yes("y\n"));
        assert!(is_yes(" YES "));
        assert!(!is_yes(""));
        assert!(!is_yes("n"));
        assert!(!is_yes("yep"));
    }

    #[test]
    fn missing_or_forced_targets_are_writable() {
        let path = env::temp_dir().join("task_heatmap_fs_utils_target.csv");
        fs::remove_file(&path).ok();
        assert!(ensure_writable(&path, false).is_ok());

        fs::write(&path, "old").unwrap();
        assert!(ensure_writable(&path, true).is_ok());
        fs::remove_file(&path).ok();
    }
}
