use crate::config::Config;
use crate::config::migrate::{migrate_missing_keys, missing_keys};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};
use std::fs;
use std::path::Path;
use std::process::Command;

pub struct ConfigLogic;

impl ConfigLogic {
    pub fn print(path: &Path) -> AppResult<()> {
        let content = fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("cannot read {}: {e}", path.display())))?;
        println!("📄 Current configuration ({}):\n", path.display());
        println!("{}", content);
        Ok(())
    }

    pub fn check(path: &Path) -> AppResult<()> {
        let missing = missing_keys(path)?;
        if missing.is_empty() {
            success("Configuration file is complete.");
        } else {
            warning(format!(
                "Missing fields: {} (run `task-heatmap config --migrate`)",
                missing.join(", ")
            ));
        }
        Ok(())
    }

    pub fn migrate(path: &Path) -> AppResult<()> {
        migrate_missing_keys(path)?;
        Ok(())
    }

    /// Open the configuration in an editor: `--editor`, then `$EDITOR` or
    /// `$VISUAL`, then the platform default.
    pub fn edit(path: &Path, editor: &Option<String>) -> AppResult<()> {
        let default_editor = std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| {
                if cfg!(target_os = "windows") {
                    "notepad".to_string()
                } else {
                    "nano".to_string()
                }
            });
        let editor_to_use = editor.clone().unwrap_or_else(|| default_editor.clone());

        match Command::new(&editor_to_use).arg(path).status() {
            Ok(s) if s.success() => {
                success(format!(
                    "Configuration file edited successfully using '{editor_to_use}'"
                ));
                return Ok(());
            }
            _ => warning(format!(
                "Editor '{editor_to_use}' not available, falling back to '{default_editor}'"
            )),
        }

        let status = Command::new(&default_editor)
            .arg(path)
            .status()
            .map_err(|e| AppError::Config(format!("cannot start '{default_editor}': {e}")))?;

        if status.success() {
            success(format!(
                "Configuration file edited successfully using fallback '{default_editor}'"
            ));
            Ok(())
        } else {
            Err(AppError::Config(format!(
                "editor '{default_editor}' exited with {status}"
            )))
        }
    }

    /// Dispatch the flags of `config`; with none, print the file.
    pub fn handle(
        cfg: &Config,
        print: bool,
        check: bool,
        migrate: bool,
        edit: bool,
        editor: &Option<String>,
    ) -> AppResult<()> {
        let path = Config::config_file();

        if !path.exists() {
            if print || check || migrate || edit {
                return Err(AppError::Config(format!(
                    "{} not found, run `task-heatmap init` first",
                    path.display()
                )));
            }
            info("No configuration file, using defaults:");
            let yaml = serde_yaml::to_string(cfg)
                .map_err(|e| AppError::Config(e.to_string()))?;
            println!("{yaml}");
            return Ok(());
        }

        if migrate {
            Self::migrate(&path)?;
        }
        if check {
            Self::check(&path)?;
        }
        if print || !(check || migrate || edit) {
            Self::print(&path)?;
        }
        if edit {
            Self::edit(&path, editor)?;
        }
        Ok(())
    }
}
