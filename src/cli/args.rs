//! Command line argument parsing for the gazetteer CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// Gazetteer - a typo-tolerant place name resolver
#[derive(Parser, Debug, Clone)]
#[command(name = "gazetteer")]
#[command(about = "A typo-tolerant place name resolver for map datasets")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct GazetteerArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl GazetteerArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Resolve a place name against a dataset
    Resolve(ResolveArgs),

    /// Show dataset and index statistics
    Stats(StatsArgs),
}

/// Arguments for resolving a place name
#[derive(Parser, Debug, Clone)]
pub struct ResolveArgs {
    /// Path to the feature dataset (JSON array of features)
    #[arg(value_name = "DATASET")]
    pub dataset: PathBuf,

    /// Place name to resolve; multiple words are joined with spaces
    #[arg(value_name = "NAME", required = true, num_args = 1..)]
    pub name: Vec<String>,
}

/// Arguments for showing statistics
#[derive(Parser, Debug, Clone)]
pub struct StatsArgs {
    /// Path to the feature dataset (JSON array of features)
    #[arg(value_name = "DATASET")]
    pub dataset: PathBuf,
}

/// Output format for command results
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text
    Human,
    /// JSON
    Json,
}
