use crate::errors::{AppError, AppResult};
use crate::utils::path::{ensure_private_dir, expand_tilde};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

pub mod migrate; // use submodule at src/config/migrate.rs

/// Environment variable that relocates the whole config directory.
pub const HOME_ENV: &str = "TASK_HEATMAP_HOME";

/// Where the heatmap strip starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum HeatmapAnchor {
    /// Start at the earliest logged day
    #[default]
    FirstEntry,
    /// Show the 365 days ending today
    Today,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
    #[serde(default = "default_data_file")]
    pub data_file: String,
    #[serde(default = "default_activities_file")]
    pub activities_file: String,
    #[serde(default = "default_log_file")]
    pub log_file: String,
    #[serde(default)]
    pub default_activity: Option<String>,
    #[serde(default = "default_full_threshold")]
    pub full_threshold: u32,
    #[serde(default = "default_heatmap_columns")]
    pub heatmap_columns: usize,
    #[serde(default)]
    pub heatmap_anchor: HeatmapAnchor,
    /// `--activity` given on the command line; never written to disk.
    #[serde(skip)]
    pub selected_activity: Option<String>,
}

fn default_data_dir() -> String {
    Config::config_dir().to_string_lossy().to_string()
}
fn default_data_file() -> String {
    "tasks.dat".to_string()
}
fn default_activities_file() -> String {
    "activities.txt".to_string()
}
fn default_log_file() -> String {
    "task-heatmap.log".to_string()
}
fn default_full_threshold() -> u32 {
    8
}
fn default_heatmap_columns() -> usize {
    30
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            data_file: default_data_file(),
            activities_file: default_activities_file(),
            log_file: default_log_file(),
            default_activity: None,
            full_threshold: default_full_threshold(),
            heatmap_columns: default_heatmap_columns(),
            heatmap_anchor: HeatmapAnchor::default(),
            selected_activity: None,
        }
    }
}

impl Config {
    /// Return the configuration directory: `$TASK_HEATMAP_HOME`, else the
    /// `.task-heatmap` dotfile directory in the user's home.
    pub fn config_dir() -> PathBuf {
        if let Ok(dir) = env::var(HOME_ENV)
            && !dir.trim().is_empty()
        {
            return expand_tilde(&dir);
        }

        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".task-heatmap")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("task-heatmap.conf")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .map_err(|e| AppError::Config(format!("cannot read {}: {e}", path.display())))?;
        let cfg: Config = serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("cannot parse {}: {e}", path.display())))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn save(&self) -> AppResult<()> {
        let path = Self::config_file();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let yaml = serde_yaml::to_string(self)
            .map_err(|e| AppError::Config(format!("cannot serialize configuration: {e}")))?;
        fs::write(&path, yaml).map_err(|source| AppError::Save { path, source })
    }

    /// Create the config directory and file. An explicit data directory is
    /// recorded in the file; an existing file is otherwise left untouched.
    pub fn init_all(data_dir: Option<&str>) -> AppResult<Self> {
        ensure_private_dir(&Self::config_dir())?;

        let path = Self::config_file();
        let existed = path.exists();
        let mut cfg = if existed { Self::load()? } else { Self::default() };

        if let Some(dir) = data_dir {
            cfg.data_dir = dir.to_string();
        }
        if !existed || data_dir.is_some() {
            cfg.save()?;
        }

        Ok(cfg)
    }

    fn validate(&self) -> AppResult<()> {
        if self.full_threshold == 0 {
            return Err(AppError::Config(
                "full_threshold must be at least 1".to_string(),
            ));
        }
        if self.heatmap_columns == 0 {
            return Err(AppError::Config(
                "heatmap_columns must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    pub fn data_dir(&self) -> PathBuf {
        expand_tilde(&self.data_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let cfg: Config = serde_yaml::from_str("data_dir: /tmp/th\nfull_threshold: 24\n").unwrap();
        assert_eq!(cfg.data_dir, "/tmp/th");
        assert_eq!(cfg.full_threshold, 24);
        assert_eq!(cfg.data_file, "tasks.dat");
        assert_eq!(cfg.heatmap_columns, 30);
        assert_eq!(cfg.heatmap_anchor, HeatmapAnchor::FirstEntry);
        assert!(cfg.default_activity.is_none());
    }

    #[test]
    fn anchor_uses_kebab_case() {
        let cfg: Config = serde_yaml::from_str("heatmap_anchor: today\n").unwrap();
        assert_eq!(cfg.heatmap_anchor, HeatmapAnchor::Today);
        let yaml = serde_yaml::to_string(&Config::default()).unwrap();
        assert!(yaml.contains("heatmap_anchor: first-entry"));
    }

    #[test]
    fn zero_threshold_is_invalid() {
        let cfg = Config {
            full_threshold: 0,
            ..Config::default()
        };
        assert!(cfg.validate().is_err());
    }
}
