//! Configuration file upgrades: detect keys missing from an older YAML file
//! and write them back with their default values.

use super::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

/// Keys a current configuration file is expected to carry.
fn expected_keys() -> AppResult<Mapping> {
    let value = serde_yaml::to_value(Config::default())
        .map_err(|e| AppError::Config(format!("cannot serialize defaults: {e}")))?;

    match value {
        Value::Mapping(map) => Ok(map),
        _ => Err(AppError::Config("defaults are not a mapping".to_string())),
    }
}

fn read_mapping(path: &Path) -> AppResult<Mapping> {
    let content = fs::read_to_string(path)
        .map_err(|e| AppError::Config(format!("cannot read {}: {e}", path.display())))?;

    match serde_yaml::from_str::<Value>(&content) {
        Ok(Value::Mapping(map)) => Ok(map),
        Ok(Value::Null) => Ok(Mapping::new()),
        Ok(_) => Err(AppError::Config(format!(
            "{} is not a YAML mapping",
            path.display()
        ))),
        Err(e) => Err(AppError::Config(format!(
            "cannot parse {}: {e}",
            path.display()
        ))),
    }
}

/// Names of the keys missing from the file at `path`.
pub fn missing_keys(path: &Path) -> AppResult<Vec<String>> {
    let current = read_mapping(path)?;
    let expected = expected_keys()?;

    Ok(expected
        .keys()
        .filter(|k| !current.contains_key(*k))
        .filter_map(|k| k.as_str().map(str::to_string))
        .collect())
}

/// Add every missing key with its default value. Existing values are kept.
/// Returns the keys that were added.
pub fn migrate_missing_keys(path: &Path) -> AppResult<Vec<String>> {
    let mut current = read_mapping(path)?;
    let expected = expected_keys()?;
    let mut added = Vec::new();

    for (key, value) in expected {
        if !current.contains_key(&key) {
            if let Some(name) = key.as_str() {
                added.push(name.to_string());
            }
            current.insert(key, value);
        }
    }

    if added.is_empty() {
        info("Configuration already up to date.");
        return Ok(added);
    }

    let serialized = serde_yaml::to_string(&Value::Mapping(current))
        .map_err(|e| AppError::Config(format!("cannot serialize configuration: {e}")))?;
    fs::write(path, serialized).map_err(|source| AppError::Save {
        path: path.to_path_buf(),
        source,
    })?;

    success(format!(
        "Configuration migrated: added {}",
        added.join(", ")
    ));
    Ok(added)
}
