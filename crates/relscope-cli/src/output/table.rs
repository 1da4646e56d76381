//! Human-readable report formatting.

use is_terminal::IsTerminal;
use owo_colors::OwoColorize;
use relscope_core::{Confidence, InferenceResult, Provenance, Severity};
use std::fmt::Write;

/// Format the inference result as human-readable text with optional colors.
pub fn format_table(
    result: &InferenceResult,
    quiet: bool,
    use_colors: bool,
    show_profiles: bool,
) -> String {
    let colored = use_colors && std::io::stdout().is_terminal();
    let mut out = String::new();

    write_header(&mut out, colored);
    write_summary(&mut out, result, colored);
    write_relationships(&mut out, result, colored);

    if show_profiles {
        write_profiles(&mut out, result, colored);
    }

    if !quiet {
        write_issues(&mut out, result, colored);
    }

    out
}

fn write_header(out: &mut String, colored: bool) {
    let title = "RelScope Relationship Report";
    let line = "═".repeat(50);

    if colored {
        writeln!(out, "{}", title.bold()).unwrap();
        writeln!(out, "{}", line.dimmed()).unwrap();
    } else {
        writeln!(out, "{title}").unwrap();
        writeln!(out, "{line}").unwrap();
    }
}

fn write_summary(out: &mut String, result: &InferenceResult, colored: bool) {
    let summary = &result.summary;
    let stats = format!(
        "Summary: {} tables | {} columns | {} candidate pairs | {} relationships",
        summary.table_count,
        summary.column_count,
        summary.candidate_count,
        summary.relationship_count
    );

    if colored {
        writeln!(out, "{}", stats.cyan()).unwrap();
    } else {
        writeln!(out, "{stats}").unwrap();
    }
    writeln!(out).unwrap();
}

fn write_relationships(out: &mut String, result: &InferenceResult, colored: bool) {
    if result.relationships.is_empty() {
        writeln!(out, "No relationships found.").unwrap();
        writeln!(out).unwrap();
        return;
    }

    if colored {
        writeln!(out, "{}", "Relationships:".bold()).unwrap();
    } else {
        writeln!(out, "Relationships:").unwrap();
    }

    for rel in &result.relationships {
        let confidence = confidence_label(rel.confidence, colored);
        let provenance = match rel.provenance {
            Provenance::Inferred => rel
                .detected_by
                .map(|s| format!("inferred via {s}"))
                .unwrap_or_else(|| "inferred".to_string()),
            Provenance::DbConstraint => "db constraint".to_string(),
            Provenance::Declared => "declared".to_string(),
        };
        writeln!(
            out,
            "  {} -> {}  [{confidence} {:.2}]  ({provenance})",
            rel.source, rel.target, rel.score
        )
        .unwrap();
    }
    writeln!(out).unwrap();
}

fn confidence_label(confidence: Confidence, colored: bool) -> String {
    if !colored {
        return confidence.to_string();
    }
    match confidence {
        Confidence::High => confidence.to_string().green().to_string(),
        Confidence::Medium => confidence.to_string().yellow().to_string(),
        Confidence::Low => confidence.to_string().red().to_string(),
    }
}

fn write_profiles(out: &mut String, result: &InferenceResult, colored: bool) {
    if result.profiles.is_empty() {
        return;
    }

    if colored {
        writeln!(out, "{}", "Profiles:".bold()).unwrap();
    } else {
        writeln!(out, "Profiles:").unwrap();
    }

    for table in &result.profiles {
        let pk = table
            .primary_key
            .as_deref()
            .map(|pk| format!(", pk: {pk}"))
            .unwrap_or_default();
        writeln!(out, "  {} ({} rows{pk})", table.table, table.row_count).unwrap();
        for column in &table.columns {
            writeln!(
                out,
                "    {} [{}] distinct: {} nulls: {}{}",
                column.name,
                column.format,
                column.distinct_count,
                column.null_count,
                if column.truncated { " (sampled)" } else { "" }
            )
            .unwrap();
        }
    }
    writeln!(out).unwrap();
}

fn write_issues(out: &mut String, result: &InferenceResult, colored: bool) {
    if result.issues.is_empty() {
        return;
    }

    if colored {
        writeln!(out, "{}", "Issues:".bold()).unwrap();
    } else {
        writeln!(out, "Issues:").unwrap();
    }

    for issue in &result.issues {
        let severity = match issue.severity {
            Severity::Error => {
                if colored {
                    "error".red().to_string()
                } else {
                    "error".to_string()
                }
            }
            Severity::Warning => {
                if colored {
                    "warning".yellow().to_string()
                } else {
                    "warning".to_string()
                }
            }
            Severity::Info => {
                if colored {
                    "info".dimmed().to_string()
                } else {
                    "info".to_string()
                }
            }
        };
        writeln!(out, "  {severity} [{}] {}", issue.code, issue.message).unwrap();
    }
    writeln!(out).unwrap();
}
