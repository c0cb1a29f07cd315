use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::stats::StatsLogic;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Stats { all, json } = cmd {
        StatsLogic::show(cfg, *all, *json)?;
    }
    Ok(())
}
