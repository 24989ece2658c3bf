use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for prodtrack
/// CLI productivity dashboard over per-user flat files
#[derive(Parser)]
#[command(
    name = "prodtrack",
    version = env!("CARGO_PKG_VERSION"),
    about = "A productivity dashboard CLI: per-analyst work-item metrics, TMO charts and a logbook",
    long_about = None
)]
pub struct Cli {
    /// Username for authentication (required by every data command)
    #[arg(global = true, long = "user", short = 'u')]
    pub user: Option<String>,

    /// Password for authentication
    #[arg(global = true, long = "password", short = 'p')]
    pub password: Option<String>,

    /// Override the data directory (useful for tests or custom locations)
    #[arg(global = true, long = "data-dir")]
    pub data_dir: Option<String>,

    /// Override the credentials file
    #[arg(global = true, long = "credentials")]
    pub credentials: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration, data directory and seed credentials
    Init,

    /// Manage the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,
    },

    /// Overall view: summary metrics, status distribution, TMO per day and
    /// the analyst leaderboard
    Overview {
        /// Start of the date filter (DD/MM/YYYY, defaults to earliest date)
        #[arg(long = "from")]
        from: Option<String>,

        /// End of the date filter (DD/MM/YYYY, defaults to latest date)
        #[arg(long = "to")]
        to: Option<String>,
    },

    /// Individual metrics for one analyst
    Analyst {
        /// Analyst username (omit with --list to see the available ones)
        name: Option<String>,

        #[arg(long = "from")]
        from: Option<String>,

        #[arg(long = "to")]
        to: Option<String>,

        #[arg(long = "list", help = "List the analysts present in the filtered table")]
        list: bool,
    },

    /// Logbook: list notes, or append one with --add
    Log {
        #[arg(long = "add", value_name = "TEXT", help = "Append a new note")]
        add: Option<String>,
    },

    /// Append the rows of a spreadsheet to the accumulated table and persist
    Upload {
        /// CSV file with the standard column set
        file: String,
    },

    /// Re-persist the full accumulated table with canonical cell formats
    Save,

    /// Export the accumulated table
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long = "from", help = "Only export rows from this date on")]
        from: Option<String>,

        #[arg(long = "to", help = "Only export rows up to this date")]
        to: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Back up the accumulated table and logbook files
    Backup {
        #[arg(long, value_name = "DEST")]
        file: String,

        #[arg(long)]
        compress: bool,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
