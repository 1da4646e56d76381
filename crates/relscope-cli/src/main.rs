//! RelScope CLI - relationship inference for tabular data

use relscope_cli::cli;
use relscope_cli::input;
use relscope_cli::output;
use relscope_cli::schema;

use anyhow::{Context, Result};
use clap::Parser;
use relscope_core::{infer, InferenceOptions, InferenceRequest, Severity};
use relscope_export::{export_csv, export_mermaid};
use std::fs;
use std::io::{self, Write};
use std::process::ExitCode;

use cli::{Args, OutputFormat};
use output::{format_json, format_table};

/// Inference completed but reported errors.
const EXIT_FAILURE: u8 = 1;
/// Configuration error (bad input files, invalid options).
const EXIT_CONFIG_ERROR: u8 = 66;

fn main() -> ExitCode {
    let args = Args::parse();

    match run(args) {
        Ok(has_errors) => {
            if has_errors {
                ExitCode::from(EXIT_FAILURE)
            } else {
                ExitCode::SUCCESS
            }
        }
        Err(e) => {
            eprintln!("relscope: error: {e:#}");
            ExitCode::from(EXIT_CONFIG_ERROR)
        }
    }
}

/// Run inference and write the report. Returns whether the run reported
/// error-level issues.
fn run(args: Args) -> Result<bool> {
    let tables = input::read_input(&args.files)?;
    let schema = args
        .schema
        .as_deref()
        .map(schema::load_schema)
        .transpose()?;

    let request = InferenceRequest {
        tables,
        schema,
        constraints: vec![],
        options: Some(InferenceOptions {
            min_confidence: args.min_confidence.into(),
            ..InferenceOptions::default()
        }),
    };

    let result = infer(&request).context("Invalid inference configuration")?;

    if !args.quiet {
        for issue in result
            .issues
            .iter()
            .filter(|i| i.severity != Severity::Info)
        {
            let severity = match issue.severity {
                Severity::Error => "error",
                Severity::Warning => "warning",
                Severity::Info => "info",
            };
            eprintln!("relscope: {severity}: [{}] {}", issue.code, issue.message);
        }
    }

    let rendered: Vec<u8> = match args.format {
        OutputFormat::Table => {
            let use_colors = args.output.is_none();
            format_table(&result, args.quiet, use_colors, args.profiles).into_bytes()
        }
        OutputFormat::Json => format_json(&result, args.compact).into_bytes(),
        OutputFormat::Csv => export_csv(&result).context("Failed to render CSV report")?,
        OutputFormat::Mermaid => export_mermaid(&result).into_bytes(),
    };

    match &args.output {
        Some(path) => fs::write(path, rendered)
            .with_context(|| format!("Failed to write output to {}", path.display()))?,
        None => io::stdout()
            .write_all(&rendered)
            .context("Failed to write output")?,
    }

    Ok(result.summary.has_errors)
}
