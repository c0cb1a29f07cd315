use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::hours::HoursLogic;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Reset { date } = cmd {
        HoursLogic::reset(cfg, date.as_ref())?;
    }
    Ok(())
}
