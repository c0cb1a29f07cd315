//! task-heatmap main entrypoint.

use task_heatmap::run;
use task_heatmap::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
