use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "bdash")]
#[command(about = "Live dashboard for the bd issue tracker", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Seconds between automatic refreshes (overrides config)
    #[arg(long, value_name = "SECS")]
    pub refresh: Option<u64>,

    /// Issue tracker binary to invoke (overrides config)
    #[arg(long, value_name = "COMMAND")]
    pub bd: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check that the bd binary is installed and answers --version
    CheckBd,

    /// Fetch the grouped issues and print them as JSON without the TUI
    Dump,

    /// Show config status and location, or create default config if missing
    InitConfig,
}

pub fn parse() -> Cli {
    Cli::parse()
}
