//! Resume analyzer: classification and analysis over pre-trained artifacts

mod cli;
mod config;
mod error;
mod inference;
mod model;
mod output;
mod preprocessing;
mod validation;

use clap::Parser;
use cli::{Cli, Commands};
use config::{Config, OutputFormat};
use error::{Result, ResumeAnalyzerError};
use inference::InferenceEngine;
use log::{error, info, warn};
use model::ModelArtifacts;
use output::ReportFormatter;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process;
use validation::{validate_resume_text, Sanitizer};

fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config) {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

fn run_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Predict {
            file,
            artifacts_dir,
            output,
        } => {
            let engine = boot_engine(&config, artifacts_dir.as_deref())?;
            let text = read_resume_input(&config, &file)?;
            let format = resolve_output_format(&config, output.as_deref())?;

            let result = engine.predict(&text)?;

            let formatter = ReportFormatter::new(config.output.color_output && format == OutputFormat::Console);
            println!("{}", formatter.format_prediction(&result, format)?);
            Ok(())
        }

        Commands::Analyze {
            file,
            artifacts_dir,
            output,
        } => {
            let engine = boot_engine(&config, artifacts_dir.as_deref())?;
            let text = read_resume_input(&config, &file)?;
            let format = resolve_output_format(&config, output.as_deref())?;

            let result = engine.analyze(&text)?;

            let formatter = ReportFormatter::new(config.output.color_output && format == OutputFormat::Console);
            println!("{}", formatter.format_analysis(&result, format)?);
            Ok(())
        }
    }
}

fn resolve_output_format(config: &Config, flag: Option<&str>) -> Result<OutputFormat> {
    match flag {
        Some(value) => cli::parse_output_format(value).map_err(ResumeAnalyzerError::InvalidInput),
        None => Ok(config.output.format),
    }
}

/// Load artifacts and build the engine. Artifact failures are fatal
/// here rather than deferred to the first request.
fn boot_engine(config: &Config, artifacts_override: Option<&Path>) -> Result<InferenceEngine> {
    let artifacts_dir = artifacts_override.unwrap_or_else(|| config.artifacts_dir());
    info!("Loading model artifacts from {}", artifacts_dir.display());

    let artifacts = ModelArtifacts::load(artifacts_dir)?;
    Ok(InferenceEngine::new(artifacts))
}

/// Read, validate and sanitize the resume text.
fn read_resume_input(config: &Config, file: &PathBuf) -> Result<String> {
    let raw = if file.as_os_str() == "-" {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        std::fs::read_to_string(file)?
    };

    let report = validate_resume_text(&raw, &config.validation);
    if !report.is_valid {
        return Err(ResumeAnalyzerError::InvalidInput(report.errors.join("; ")));
    }
    for warning in &report.warnings {
        warn!("{}", warning);
    }

    Ok(Sanitizer::new().sanitize(&raw))
}
