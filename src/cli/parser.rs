use clap::{Parser, Subcommand};

/// Command-line interface definition for guardias
/// Load shift transfers between lawyers into SQLite and build an HTML report
#[derive(Parser)]
#[command(
    name = "guardias",
    version = env!("CARGO_PKG_VERSION"),
    about = "Analyse on-call shift transfers between lawyers and render an HTML report",
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

    /// Show the effective configuration
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,
    },

    /// Replace the stored shifts with the content of a CSV file
    Load {
        #[arg(long, value_name = "FILE", help = "CSV input (default from config)")]
        csv: Option<String>,
    },

    /// Build the HTML report from the stored shifts
    Report {
        #[arg(long, value_name = "FILE", help = "HTML output (default from config)")]
        out: Option<String>,
    },

    /// Full pipeline: init schema, load CSV, build the report
    Run {
        #[arg(long, value_name = "FILE", help = "CSV input (default from config)")]
        csv: Option<String>,

        #[arg(long, value_name = "FILE", help = "HTML output (default from config)")]
        out: Option<String>,
    },

    /// Print cession/reception counts to the terminal
    Stats {
        #[arg(long = "records", help = "Also list every stored record")]
        records: bool,
    },
}
