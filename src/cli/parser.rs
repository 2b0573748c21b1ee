use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for otledger
/// CLI application to log overtime sessions in a JSON ledger
#[derive(Parser)]
#[command(
    name = "otledger",
    version = env!("CARGO_PKG_VERSION"),
    about = "Log overtime sessions and compute OT statistics over a local JSON ledger",
    long_about = None
)]
pub struct Cli {
    /// Override ledger path (useful for tests or a second ledger)
    #[arg(global = true, long = "file", value_name = "PATH")]
    pub file: Option<String>,

    /// Print diagnostics on stderr (RUST_LOG overrides the level)
    #[arg(global = true, long, short = 'v')]
    pub verbose: bool,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write the configuration file and create the ledger document
    Init,

    /// Show the configuration
    Config {
        #[arg(long = "print", help = "Print the active configuration")]
        print_config: bool,
    },

    /// Record an overtime session
    Add {
        /// Date of the session (YYYY-MM-DD)
        date: String,

        /// Overtime length in minutes
        #[arg(allow_hyphen_values = true)]
        amount: String,

        #[arg(long, short, help = "Why the overtime was needed")]
        reason: Option<String>,

        #[arg(long, short, help = "Who asked for it")]
        by: Option<String>,
    },

    /// List recorded sessions
    List {
        #[arg(
            long,
            short,
            conflicts_with_all = ["from", "to"],
            help = "this-week, last-week, this-month, last-month, or YYYY[-MM[-DD]][:...]"
        )]
        period: Option<String>,

        #[arg(long, value_name = "DATE", requires = "to")]
        from: Option<String>,

        #[arg(long, value_name = "DATE", requires = "from")]
        to: Option<String>,

        #[arg(long, help = "Sort the ledger by date and save it before listing")]
        sort: bool,
    },

    /// Show OT statistics
    Stats {
        #[arg(
            long,
            short,
            help = "Also show extremes, date span, skewness, kurtosis and normality"
        )]
        detailed: bool,
    },

    /// Compute the overtime of a day from its four punches (HH:MM)
    Calc {
        arrive: String,
        lunch_out: String,
        lunch_back: String,
        leave: String,
    },

    /// Show or update the reference workday
    Workhour {
        #[arg(long, value_name = "HH:MM")]
        start: Option<String>,

        #[arg(long, value_name = "HH:MM")]
        end: Option<String>,

        #[arg(long = "lunch-start", value_name = "HH:MM")]
        lunch_start: Option<String>,

        #[arg(long = "lunch-end", value_name = "HH:MM")]
        lunch_end: Option<String>,
    },

    /// Export sessions to CSV or JSON
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        out: String,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter export by named period, year/month/day or a custom range"
        )]
        period: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
