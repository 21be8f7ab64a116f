//! CLI interface for the resume analyzer

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "resume-analyzer")]
#[command(about = "Classify resume text and extract skills, experience level and readability")]
#[command(
    long_about = "Runs resume text through a preprocessing and classification pipeline backed \
                  by pre-trained model artifacts, then layers heuristic analyses on top"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Predict the job category for a resume
    Predict {
        /// Path to a plain-text resume, or "-" for stdin
        file: PathBuf,

        /// Directory holding the model artifacts (overrides config)
        #[arg(short, long)]
        artifacts_dir: Option<PathBuf>,

        /// Output format: console, json (defaults to the configured format)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Run the deep analysis: prediction plus text metrics
    Analyze {
        /// Path to a plain-text resume, or "-" for stdin
        file: PathBuf,

        /// Directory holding the model artifacts (overrides config)
        #[arg(short, long)]
        artifacts_dir: Option<PathBuf>,

        /// Output format: console, json (defaults to the configured format)
        #[arg(short, long)]
        output: Option<String>,
    },
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<crate::config::OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(crate::config::OutputFormat::Console),
        "json" => Ok(crate::config::OutputFormat::Json),
        _ => Err(format!(
            "Invalid output format: {}. Supported: console, json",
            format
        )),
    }
}
