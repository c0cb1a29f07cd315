//! Internal audit log: one tab-separated line per operation.

use crate::errors::AppResult;
use crate::utils::path::ensure_private_dir;
use chrono::Local;
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditEntry {
    pub date: String,
    pub operation: String,
    pub target: String,
    pub message: String,
}

fn clean(s: &str) -> String {
    s.replace(['\t', '\n', '\r'], " ")
}

/// Append an internal log line to the audit file.
pub fn ttlog(path: &Path, operation: &str, target: &str, message: &str) -> AppResult<()> {
    if let Some(dir) = path.parent() {
        ensure_private_dir(dir)?;
    }

    // Timestamp locale, ISO 8601
    let now = Local::now().to_rfc3339();

    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    writeln!(
        file,
        "{}\t{}\t{}\t{}",
        now,
        clean(operation),
        clean(target),
        clean(message)
    )?;

    Ok(())
}

/// Read every entry, oldest first. Lines that do not have four fields are
/// skipped. A missing file yields no entries.
pub fn read_entries(path: &Path) -> AppResult<Vec<AuditEntry>> {
    let content = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(e.into()),
    };

    Ok(content
        .lines()
        .filter_map(|line| {
            let mut parts = line.splitn(4, '\t');
            Some(AuditEntry {
                date: parts.next()?.to_string(),
                operation: parts.next()?.to_string(),
                target: parts.next()?.to_string(),
                message: parts.next()?.to_string(),
            })
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn entries_are_appended_in_order() {
        let path = env::temp_dir().join("task_heatmap_audit_test.log");
        fs::remove_file(&path).ok();

        ttlog(&path, "add", "Reading", "Activity added").unwrap();
        ttlog(&path, "log", "Reading", "5 hours on\t2025-01-01").unwrap();

        let entries = read_entries(&path).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].operation, "add");
        assert_eq!(entries[1].message, "5 hours on 2025-01-01");

        fs::remove_file(&path).ok();
    }
}
