use crate::cli::parser::{ActivityAction, Commands};
use crate::config::Config;
use crate::core::activity::ActivityLogic;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Activity { action } = cmd {
        match action {
            ActivityAction::Add { name } => ActivityLogic::add(cfg, name)?,
            ActivityAction::Remove { name } => ActivityLogic::remove(cfg, name)?,
            ActivityAction::Rename { old, new } => ActivityLogic::rename(cfg, old, new)?,
            ActivityAction::List => ActivityLogic::list(cfg)?,
            ActivityAction::Select { name } => ActivityLogic::select(cfg, name)?,
        }
    }
    Ok(())
}
