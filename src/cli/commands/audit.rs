use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::log::LogLogic;
use crate::errors::AppResult;
use crate::ui::messages::info;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Audit { print } = cmd {
        if *print {
            LogLogic::print_log(cfg)?;
        } else {
            info("Use `task-heatmap audit --print` to show the internal log.");
        }
    }

    Ok(())
}
