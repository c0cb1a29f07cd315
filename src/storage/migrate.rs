//! Hours file schema detection and upgrade.
//!
//! Files written before the header existed are recognised by their exact
//! size: 365 bare records for the single-activity program, ten activity
//! blocks for the multi-activity one. Both are rewritten in the current
//! schema after a backup copy is taken.

use super::binary::{self, MAGIC, V0_SIZE, V1_SIZE, V2_SIZE};
use super::{DataPaths, audit, names, save_task_data};
use crate::errors::{AppError, AppResult};
use crate::models::activity::ActivityLog;
use crate::models::table::ActivityTable;
use crate::ui::messages::{success, warning};
use crate::utils::path::with_suffix;
use std::fs;
use std::io::ErrorKind;

/// Name given to the activity of a single-activity file when the
/// activities file does not provide one.
pub const DEFAULT_ACTIVITY: &str = "Default";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Schema {
    V0Single,
    V1Multi,
    V2,
}

impl Schema {
    /// The header only counts on a file of the current size, so a legacy
    /// file whose first name happens to start with the magic stays legacy.
    pub fn detect(bytes: &[u8]) -> AppResult<Schema> {
        if bytes.len() == V2_SIZE && bytes.starts_with(MAGIC) {
            Ok(Schema::V2)
        } else if bytes.len() == V1_SIZE {
            Ok(Schema::V1Multi)
        } else if bytes.len() == V0_SIZE {
            Ok(Schema::V0Single)
        } else {
            Err(AppError::Format(format!(
                "{} bytes without header match no known layout",
                bytes.len()
            )))
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            Schema::V0Single => "v0",
            Schema::V1Multi => "v1",
            Schema::V2 => "v2",
        }
    }
}

/// Decode a file of any known schema. `v0_name` names the activity of a
/// single-activity file.
pub fn decode_any(bytes: &[u8], v0_name: &str) -> AppResult<(Schema, ActivityTable)> {
    let schema = Schema::detect(bytes)?;

    let table = match schema {
        Schema::V2 => binary::decode_table(bytes)?,
        Schema::V1Multi => binary::decode_blocks(bytes)?,
        Schema::V0Single => {
            let mut activity = ActivityLog::new(v0_name)
                .or_else(|_| ActivityLog::new(DEFAULT_ACTIVITY))?;
            for record in binary::decode_records(bytes)? {
                activity.restore(record);
            }
            let mut table = ActivityTable::new();
            table.put(0, activity);
            table
        }
    };

    Ok((schema, table))
}

/// Upgrade a legacy hours file in place. Returns the schema that was
/// migrated from, or `None` when nothing had to be done.
pub fn run_pending(paths: &DataPaths) -> AppResult<Option<Schema>> {
    let bytes = match fs::read(&paths.data) {
        Ok(b) => b,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };

    let schema = Schema::detect(&bytes)?;
    if schema == Schema::V2 {
        return Ok(None);
    }

    let listed = names::load_activity_names(&paths.activities)?;
    let v0_name = listed.first().map(String::as_str).unwrap_or(DEFAULT_ACTIVITY);
    let (_, table) = decode_any(&bytes, v0_name)?;

    let backup = with_suffix(&paths.data, &format!("{}.bak", schema.tag()));
    fs::write(&backup, &bytes).map_err(|source| AppError::Save {
        path: backup.clone(),
        source,
    })?;

    save_task_data(&table, &paths.data)?;

    let message = format!(
        "Hours file migrated from {} to v2 ({} activities), backup at {}",
        schema.tag(),
        table.len(),
        backup.display()
    );
    if let Err(e) = audit::ttlog(&paths.log, "migrate_to_v2", schema.tag(), &message) {
        warning(format!("Failed to write internal log: {e}"));
    }
    success(message);

    Ok(Some(schema))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::load_task_data;
    use crate::utils::date::parse_date;
    use std::env;

    fn record(date: &str, hours: i32) -> Vec<u8> {
        let mut rec = vec![0u8; binary::RECORD_SIZE];
        rec[..date.len()].copy_from_slice(date.as_bytes());
        rec[12..16].copy_from_slice(&hours.to_le_bytes());
        rec
    }

    fn temp_paths(name: &str) -> DataPaths {
        let dir = env::temp_dir().join(format!("task_heatmap_migrate_{name}"));
        fs::remove_dir_all(&dir).ok();
        fs::create_dir_all(&dir).unwrap();
        DataPaths::in_dir(&dir)
    }

    #[test]
    fn unknown_sizes_are_rejected() {
        assert!(Schema::detect(&[0u8; 17]).is_err());
        assert_eq!(Schema::detect(&[0u8; V0_SIZE]).unwrap(), Schema::V0Single);
        assert_eq!(Schema::detect(&[0u8; V1_SIZE]).unwrap(), Schema::V1Multi);
    }

    #[test]
    fn legacy_name_starting_with_magic_is_not_a_header() {
        let mut bytes = vec![0u8; V1_SIZE];
        bytes[..6].copy_from_slice(b"THMPer");
        bytes[52..68].copy_from_slice(&record("2025-02-01", 4));
        assert_eq!(Schema::detect(&bytes).unwrap(), Schema::V1Multi);

        let (schema, table) = decode_any(&bytes, DEFAULT_ACTIVITY).unwrap();
        assert_eq!(schema, Schema::V1Multi);
        assert_eq!(table.names(), vec!["THMPer"]);
        assert_eq!(
            table
                .get(0)
                .unwrap()
                .hours_on(parse_date("2025-02-01").unwrap()),
            4
        );

        let mut truncated = vec![0u8; 100];
        truncated[..4].copy_from_slice(MAGIC);
        assert!(Schema::detect(&truncated).is_err());
    }

    #[test]
    fn single_activity_file_is_upgraded() {
        let paths = temp_paths("v0");

        let mut bytes = vec![0u8; V0_SIZE];
        bytes[..16].copy_from_slice(&record("2025-01-01", 3));
        bytes[16..32].copy_from_slice(&record("2025-01-02", 1));
        fs::write(&paths.data, &bytes).unwrap();
        fs::write(&paths.activities, "Studying\n").unwrap();

        assert_eq!(run_pending(&paths).unwrap(), Some(Schema::V0Single));
        assert_eq!(run_pending(&paths).unwrap(), None);

        let table = load_task_data(&paths.data).unwrap();
        let log = table.get(0).unwrap();
        assert_eq!(log.name(), "Studying");
        assert_eq!(log.hours_on(parse_date("2025-01-01").unwrap()), 3);
        assert_eq!(log.len(), 2);

        let backup = with_suffix(&paths.data, "v0.bak");
        assert_eq!(fs::read(backup).unwrap(), bytes);

        fs::remove_dir_all(&paths.dir).ok();
    }

    #[test]
    fn multi_activity_file_is_upgraded() {
        let paths = temp_paths("v1");

        let mut bytes = vec![0u8; V1_SIZE];
        let second = binary::ACTIVITY_SIZE;
        bytes[..7].copy_from_slice(b"Reading");
        bytes[52..68].copy_from_slice(&record("2025-02-01", 2));
        bytes[second..second + 6].copy_from_slice(b"Guitar");
        fs::write(&paths.data, &bytes).unwrap();

        assert_eq!(run_pending(&paths).unwrap(), Some(Schema::V1Multi));

        let table = load_task_data(&paths.data).unwrap();
        assert_eq!(table.names(), vec!["Reading", "Guitar"]);
        assert_eq!(
            table
                .get(0)
                .unwrap()
                .hours_on(parse_date("2025-02-01").unwrap()),
            2
        );

        fs::remove_dir_all(&paths.dir).ok();
    }
}
