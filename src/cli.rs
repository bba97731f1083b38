use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// recipetui - record recipes with a photo and browse them by category
#[derive(Parser, Debug)]
#[command(name = "recipetui")]
#[command(about = "A terminal recipe organizer")]
#[command(version)]
pub struct Cli {
    /// Path to a JSON configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory the image picker opens in (overrides the config file)
    #[arg(long)]
    pub picker_dir: Option<PathBuf>,

    /// Write logs to this file (the TUI owns the terminal, so logs are
    /// discarded otherwise). Filter with RUST_LOG.
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate a configuration file and exit
    CheckConfig {
        /// Path to the configuration file to validate
        path: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
