//! CLI argument parsing using clap.

use clap::{Parser, ValueEnum};
use relscope_core::MinConfidence;
use std::path::PathBuf;

/// RelScope - relationship inference for tabular data
#[derive(Parser, Debug)]
#[command(name = "relscope")]
#[command(about = "Infer PK/FK relationships across CSV tables", long_about = None)]
#[command(version)]
pub struct Args {
    /// CSV files to analyze, one table per file (reads a single table from
    /// stdin if none provided)
    #[arg(value_name = "FILES")]
    pub files: Vec<PathBuf>,

    /// Declared schema file (JSON or YAML) merged in as an authoritative source
    #[arg(short, long, value_name = "FILE")]
    pub schema: Option<PathBuf>,

    /// Output format
    #[arg(short, long, default_value = "table", value_enum)]
    pub format: OutputFormat,

    /// Minimum confidence for inferred relationships
    #[arg(short, long, default_value = "medium", value_enum)]
    pub min_confidence: MinConfidenceArg,

    /// Output file (defaults to stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Include per-column profiles in table output
    #[arg(long)]
    pub profiles: bool,

    /// Suppress warnings on stderr
    #[arg(short, long)]
    pub quiet: bool,

    /// Compact JSON output (no pretty-printing)
    #[arg(short, long)]
    pub compact: bool,
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable report
    Table,
    /// Full result as JSON
    Json,
    /// Flat relationships report as CSV
    Csv,
    /// Mermaid entity-relationship diagram
    Mermaid,
}

/// Minimum confidence options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MinConfidenceArg {
    None,
    Low,
    Medium,
    High,
}

impl From<MinConfidenceArg> for MinConfidence {
    fn from(arg: MinConfidenceArg) -> Self {
        match arg {
            MinConfidenceArg::None => MinConfidence::None,
            MinConfidenceArg::Low => MinConfidence::Low,
            MinConfidenceArg::Medium => MinConfidence::Medium,
            MinConfidenceArg::High => MinConfidence::High,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_defaults() {
        let args = Args::parse_from(["relscope", "orders.csv"]);
        assert_eq!(args.format, OutputFormat::Table);
        assert_eq!(args.min_confidence, MinConfidenceArg::Medium);
        assert!(!args.quiet);
    }

    #[test]
    fn parses_format_and_confidence() {
        let args = Args::parse_from([
            "relscope",
            "--format",
            "mermaid",
            "--min-confidence",
            "low",
            "a.csv",
            "b.csv",
        ]);
        assert_eq!(args.format, OutputFormat::Mermaid);
        assert_eq!(args.min_confidence, MinConfidenceArg::Low);
        assert_eq!(args.files.len(), 2);
    }
}
