use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "dp",
    about = concat!("dayplan v", env!("CARGO_PKG_VERSION"), " - plan tasks by date"),
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Config file (default: $DAYPLAN_CONFIG, then ./dayplan.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Select this date (YYYY-MM-DD) when the planner opens
    #[arg(long, value_parser = parse_date)]
    pub date: Option<NaiveDate>,

    /// Don't run the header clock
    #[arg(long)]
    pub no_clock: bool,

    /// Print all tasks as JSON after quitting
    #[arg(long)]
    pub json: bool,

    /// Write logs to this file
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Log filter, e.g. "debug" (RUST_LOG takes precedence)
    #[arg(long, global = true)]
    pub log_level: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the effective configuration as TOML
    Config,
}

fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|e| format!("expected a date like 2024-01-05: {}", e))
}
