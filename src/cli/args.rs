//! Command line argument parsing for the Sentira CLI using clap.

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::attribution::DEFAULT_CUE_LIMIT;

/// Sentira - deterministic text-sentiment classification
#[derive(Parser, Debug, Clone)]
#[command(name = "sentira")]
#[command(about = "Classify text sentiment with a pre-trained linear model")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct SentiraArgs {
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

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Classify a piece of text
    Classify(ClassifyArgs),

    /// Show a summary of a model file
    Inspect(InspectArgs),
}

/// Arguments for classifying text
#[derive(Parser, Debug, Clone)]
pub struct ClassifyArgs {
    /// Path to the model JSON file
    #[arg(short, long, value_name = "MODEL_FILE", env = "SENTIRA_MODEL")]
    pub model: PathBuf,

    /// Text to classify (read from stdin when omitted)
    #[arg(value_name = "TEXT")]
    pub text: Option<String>,

    /// Maximum number of token cues to report
    #[arg(short = 'k', long, default_value_t = DEFAULT_CUE_LIMIT)]
    pub cues: usize,
}

/// Arguments for inspecting a model
#[derive(Parser, Debug, Clone)]
pub struct InspectArgs {
    /// Path to the model JSON file
    #[arg(short, long, value_name = "MODEL_FILE", env = "SENTIRA_MODEL")]
    pub model: PathBuf,
}

/// Output format options
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
