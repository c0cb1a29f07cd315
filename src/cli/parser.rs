use crate::config::HeatmapAnchor;
use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for task-heatmap
/// CLI application to log daily hours per activity and draw a yearly heatmap
#[derive(Parser)]
#[command(
    name = "task-heatmap",
    version = env!("CARGO_PKG_VERSION"),
    about = "Log daily hours per activity and render a 365-day heatmap",
    long_about = None
)]
pub struct Cli {
    /// Override the data directory (useful for tests or multiple profiles)
    #[arg(global = true, long = "data-dir", value_name = "DIR")]
    pub data_dir: Option<String>,

    /// Activity to work on (defaults to the selected one)
    #[arg(global = true, long = "activity", short = 'a', value_name = "NAME")]
    pub activity: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the data directory and configuration
    Init,

    /// Log hours for today (or --date) on the current activity
    Log {
        /// Hours spent (non-negative integer, 0 clears the day)
        #[arg(allow_hyphen_values = true)]
        hours: String,

        #[arg(long, value_name = "YYYY-MM-DD", help = "Day to log (default: today)")]
        date: Option<String>,
    },

    /// Reset today's hours (or --date) on the current activity
    Reset {
        #[arg(long, value_name = "YYYY-MM-DD", help = "Day to clear (default: today)")]
        date: Option<String>,
    },

    /// Show statistics for the current activity
    Stats {
        #[arg(long, help = "Show one line per activity")]
        all: bool,

        #[arg(long, help = "Print the figures as JSON")]
        json: bool,
    },

    /// Draw the heatmap of the current activity
    Heatmap {
        #[arg(long, help = "Use text glyphs instead of colors")]
        plain: bool,

        #[arg(long, value_enum, help = "Where the strip starts (overrides config)")]
        anchor: Option<HeatmapAnchor>,
    },

    /// Manage activities
    Activity {
        #[command(subcommand)]
        action: ActivityAction,
    },

    /// Export day records
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, help = "Export every activity, not only the current one")]
        all: bool,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Create a zip backup of the data files
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, help = "Deflate the archive entries")]
        compress: bool,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Manage the configuration file (view, check, migrate or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing fields with their defaults")]
        migrate: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Print the internal audit log
    Audit {
        #[arg(long = "print", help = "Print the entries of the internal audit log")]
        print: bool,
    },
}

#[derive(Subcommand)]
pub enum ActivityAction {
    /// Add a new activity
    Add { name: String },

    /// Remove an activity and all of its hours
    Remove { name: String },

    /// Rename an activity, keeping its hours
    Rename { old: String, new: String },

    /// List activities
    List,

    /// Make an activity the default one
    Select { name: String },
}
