use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::heatmap::HeatmapLogic;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Heatmap { plain, anchor } = cmd {
        HeatmapLogic::show(cfg, *plain, *anchor)?;
    }
    Ok(())
}
