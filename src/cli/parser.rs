use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rShiftBalancer
#[derive(Parser)]
#[command(
    name = "rshiftbalancer",
    version = env!("CARGO_PKG_VERSION"),
    about = "Record AM/PM driver rosters per day and suggest days off from weekly and 14-day workloads",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing fields to the configuration file")]
        migrate: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(long = "editor", help = "Editor to use with --edit")]
        editor: Option<String>,
    },

    /// Save (or replace) the rosters of one day
    Save {
        /// Date of the rosters (YYYY-MM-DD)
        date: String,

        #[arg(long = "am", help = "AM scheduled drivers, one '<id> <name>' per line")]
        am: Option<String>,

        #[arg(long = "am-file", conflicts_with = "am", help = "Read AM scheduled drivers from FILE")]
        am_file: Option<String>,

        #[arg(long = "am-off", help = "AM off drivers")]
        am_off: Option<String>,

        #[arg(long = "am-off-file", conflicts_with = "am_off", help = "Read AM off drivers from FILE")]
        am_off_file: Option<String>,

        #[arg(long = "pm", help = "PM scheduled drivers, one '<id> <name>' per line")]
        pm: Option<String>,

        #[arg(long = "pm-file", conflicts_with = "pm", help = "Read PM scheduled drivers from FILE")]
        pm_file: Option<String>,

        #[arg(long = "pm-off", help = "PM off drivers")]
        pm_off: Option<String>,

        #[arg(long = "pm-off-file", conflicts_with = "pm_off", help = "Read PM off drivers from FILE")]
        pm_off_file: Option<String>,
    },

    /// List saved days
    List {
        #[arg(long, short, help = "Filter by year/month/day or a custom range (A:B)")]
        period: Option<String>,

        #[arg(long = "details", help = "Show the drivers present on each day")]
        details: bool,
    },

    /// Show per-driver workload and day-off suggestions
    Summary {
        #[arg(
            long = "date",
            value_name = "DATE",
            help = "Reference date (YYYY-MM-DD); its Monday starts 'this week'. Default: today"
        )]
        date: Option<String>,
    },

    /// Delete saved days
    Del {
        /// Dates to delete (YYYY-MM-DD)
        #[arg(required_unless_present = "all")]
        dates: Vec<String>,

        #[arg(long = "all", conflicts_with = "dates", help = "Delete every saved day")]
        all: bool,

        #[arg(long = "yes", short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Export the summary (or the saved days) to a file
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long = "date", value_name = "DATE", help = "Reference date for the summary")]
        date: Option<String>,

        #[arg(long = "days", help = "Export saved days (json) instead of the summary")]
        days: bool,

        #[arg(
            long,
            value_name = "RANGE",
            requires = "days",
            help = "Limit --days to year/month/day or a custom range"
        )]
        range: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Import saved days from a JSON file
    Import {
        #[arg(long, value_name = "FILE")]
        file: String,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },
}
