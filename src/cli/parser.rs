use crate::core::SortMode;
use crate::export::ExportFormat;
use crate::models::Shift;
use clap::{Args, Parser, Subcommand};

/// Command-line interface definition for rShuttle
/// CLI application to browse the daily shuttle roster
#[derive(Parser)]
#[command(
    name = "rshuttle",
    version = env!("CARGO_PKG_VERSION"),
    about = "Browse the daily shuttle roster: filter by shift, station and name, and mark riders",
    long_about = None
)]
pub struct Cli {
    /// Override the roster source (CSV file path or URL template with {sheet})
    #[arg(global = true, long = "source")]
    pub source: Option<String>,

    /// Roster day (YYYY-MM-DD), defaults to today
    #[arg(global = true, long = "date")]
    pub date: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Filters, marks and ordering shared by `show` and `export`.
#[derive(Args, Debug, Clone, Default)]
pub struct ViewArgs {
    /// Shift filter
    #[arg(long, value_enum, default_value = "all")]
    pub shift: Shift,

    /// Station filter: `all`, a key (station1) or catalog number (1); repeatable
    #[arg(long = "station", value_name = "STATION")]
    pub stations: Vec<String>,

    /// Name search (case and accent insensitive)
    #[arg(long, short = 'n')]
    pub name: Option<String>,

    /// Toggle the mark of a row index; repeat to cycle selected → flagged → none
    #[arg(long = "mark", value_name = "INDEX")]
    pub marks: Vec<String>,

    /// Row ordering by mark
    #[arg(long, value_enum, default_value = "none")]
    pub sort: SortMode,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration file
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

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

    /// List the station catalog
    Stations,

    /// Show the roster once, with optional filters and marks
    Show {
        #[command(flatten)]
        view: ViewArgs,
    },

    /// Interactive session: read commands from stdin, one per line
    Session,

    /// Export the filtered roster
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f')]
        force: bool,

        #[command(flatten)]
        view: ViewArgs,
    },
}
