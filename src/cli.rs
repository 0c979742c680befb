use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Climate trend summaries from daily temperature records.
#[derive(Parser)]
#[command(
    name = "climtrend",
    version,
    about = "Climate statistics from daily temperature readings"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Run the full pipeline and write the JSON summary.
    Summarize(SummarizeArgs),
    /// Read and normalize the input without computing statistics.
    Inspect(InspectArgs),
}

/// Arguments for the `summarize` subcommand.
#[derive(clap::Args)]
pub struct SummarizeArgs {
    /// Path to TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override input CSV path from config.
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Override output JSON path from config. Defaults to stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Override the yearly/decade threshold (°F).
    #[arg(short, long)]
    pub threshold: Option<f64>,

    /// Override the hot-day threshold (°F).
    #[arg(long)]
    pub hot: Option<f64>,

    /// Override the cold-day threshold (°F).
    #[arg(long)]
    pub cold: Option<f64>,
}

/// Arguments for the `inspect` subcommand.
#[derive(clap::Args)]
pub struct InspectArgs {
    /// Path to TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override input CSV path from config.
    #[arg(short, long)]
    pub input: Option<PathBuf>,
}
