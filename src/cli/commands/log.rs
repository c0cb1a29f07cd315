use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::hours::HoursLogic;
use crate::errors::AppResult;

/// Log hours on the current activity.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Log { hours, date } = cmd {
        HoursLogic::log(cfg, hours, date.as_ref())?;
    }
    Ok(())
}
