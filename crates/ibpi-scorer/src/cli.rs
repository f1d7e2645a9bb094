use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// Score IBPI answer sheets.
#[derive(Debug, Parser)]
#[command(name = "ibpi-scorer")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file path (default: <config dir>/ibpi/config.json)
    #[arg(short, long, env = "IBPI_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Score a JSON Lines file of answer sheets ("-" reads stdin)
    Score(ScoreArgs),

    /// Score a single comma-separated answer list
    ScoreOne(ScoreOneArgs),

    /// Print an inventory's reference tables as JSON
    Tables(TablesArgs),

    /// Show or initialize the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Debug, Args)]
pub struct ScoreArgs {
    /// Input file, one answer sheet per line
    #[arg(default_value = "-")]
    pub input: PathBuf,

    /// Write results here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Test type for sheets that do not name one
    #[arg(short, long)]
    pub test_type: Option<String>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Skip sheets that are incomplete or contain out-of-range answers
    #[arg(long)]
    pub strict: bool,

    /// Number of parallel workers (default: number of CPUs)
    #[arg(short = 'j', long)]
    pub jobs: Option<usize>,
}

#[derive(Debug, Args)]
pub struct ScoreOneArgs {
    #[arg(short, long)]
    pub test_type: String,

    /// Choices such as "0,3,,2"; empty, "-" or "-1" mean unanswered
    #[arg(short, long, allow_hyphen_values = true)]
    pub answers: String,

    /// Access code recorded on the output
    #[arg(long, default_value = "cli")]
    pub test_code: String,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,
}

#[derive(Debug, Args)]
pub struct TablesArgs {
    /// Only this test type (default: all)
    #[arg(short, long)]
    pub test_type: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration
    Show,
    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Json,
    Text,
}
