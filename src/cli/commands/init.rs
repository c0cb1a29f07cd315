use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::storage::{DataPaths, Store};
use crate::ui::messages::success;
use crate::utils::date;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and file (if missing)
///  - the data directory, owner-only
///  - the hours file and activity list, upgrading legacy files
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = Config::init_all(cli.data_dir.as_deref())?;
    let paths = DataPaths::resolve(&cfg, None);

    println!("⚙️  Initializing task-heatmap…");
    println!("📄 Config file : {}", Config::config_file().display());
    println!("🗄️  Data dir   : {}", paths.dir.display());

    let store = Store::open(paths.clone(), date::today())?;
    store.save()?;

    store.audit(
        "init",
        &paths.dir.to_string_lossy(),
        &format!("Data directory initialized with {} activities", store.table().len()),
    );

    success("task-heatmap initialization completed!");
    Ok(())
}
