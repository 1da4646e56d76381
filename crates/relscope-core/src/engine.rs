//! Run orchestration: profiling → candidate generation → signal evaluation →
//! composite scoring → authority resolution → graph assembly.
//!
//! Each stage consumes the immutable output of the previous one and writes
//! only its own private results, merged at the stage boundary.
//! Nothing survives between runs, so rerunning on
//! identical input and configuration reproduces the result bit for bit, and
//! an abandoned run can never leak partial state into a later one.

use std::collections::{BTreeMap, HashSet};

use crate::error::ConfigError;
use crate::profiler::{profile_table, table_summary, ColumnProfile};
use crate::signals::{all_signals, SignalContext, SignalResult};
use crate::types::*;
#[cfg(feature = "tracing")]
use tracing::info_span;

mod authority;
mod candidates;
mod config;
mod graph;
mod scorer;

pub use config::EngineConfig;

use candidates::CandidatePair;

/// Main entry point: run relationship inference over a set of loaded tables.
///
/// Configuration problems are rejected up front via [`ConfigError`]; every
/// data-level problem (insufficient statistics, oversized columns, authority
/// disagreements) is handled inside the run and reported as an issue on the
/// result.
pub fn infer(request: &InferenceRequest) -> Result<InferenceResult, ConfigError> {
    #[cfg(feature = "tracing")]
    let _span = info_span!("infer", tables = request.tables.len()).entered();

    let config = EngineConfig::from_options(request.options.as_ref())?;
    check_unique_table_names(&request.tables)?;

    let mut issues = Vec::new();

    // Stage 1: profile every column of every table. Tables are independent;
    // the stage boundary is the join point before any pair is formed.
    let profiles: Vec<Vec<ColumnProfile>> = {
        #[cfg(feature = "tracing")]
        let _span = info_span!("profile").entered();
        request
            .tables
            .iter()
            .map(|table| profile_table(table, &config.caps))
            .collect()
    };
    collect_profile_issues(&request.tables, &profiles, &mut issues);

    // Stage 2: enumerate candidate pairs.
    let pairs = candidates::generate(&profiles);
    let candidate_count = pairs.len();

    // Stage 3: evaluate the signals per pair and fold into candidates.
    let inferred = {
        #[cfg(feature = "tracing")]
        let _span = info_span!("evaluate", pairs = candidate_count).entered();
        score_candidates(&pairs, &config)
    };

    // Stage 4: merge with authoritative sources.
    let known_tables: HashSet<String> =
        request.tables.iter().map(|t| t.name.clone()).collect();
    let resolved = authority::resolve(
        request.schema.as_ref(),
        &request.constraints,
        inferred,
        &known_tables,
        &mut issues,
    );

    // Stage 5: assemble the terminal structure.
    let (graph, relationships) = graph::build(&request.tables, resolved);

    let profile_summaries: Vec<TableProfileSummary> = request
        .tables
        .iter()
        .zip(&profiles)
        .map(|(table, profiles)| table_summary(table, profiles))
        .collect();

    let summary = summarize(request, candidate_count, &relationships, &issues);
    Ok(InferenceResult {
        graph,
        relationships,
        profiles: profile_summaries,
        issues,
        summary,
    })
}

fn check_unique_table_names(tables: &[TableData]) -> Result<(), ConfigError> {
    let mut seen = HashSet::new();
    for table in tables {
        if !seen.insert(table.name.as_str()) {
            return Err(ConfigError::DuplicateTable(table.name.clone()));
        }
    }
    Ok(())
}

fn collect_profile_issues(
    tables: &[TableData],
    profiles: &[Vec<ColumnProfile>],
    issues: &mut Vec<Issue>,
) {
    for (table, table_profiles) in tables.iter().zip(profiles) {
        if !table.columns.is_empty() && table.row_count() == 0 {
            issues.push(
                Issue::info(
                    issue_codes::EMPTY_TABLE,
                    format!("table `{}` has no rows; content signals will abstain", table.name),
                )
                .with_table(table.name.clone()),
            );
        }
        for profile in table_profiles {
            if profile.truncated {
                issues.push(
                    Issue::warning(
                        issue_codes::COLUMN_SAMPLED,
                        format!(
                            "column `{}.{}` exceeded a resource cap and was profiled on a bounded sample",
                            profile.table, profile.name
                        ),
                    )
                    .with_table(profile.table.clone())
                    .with_column(profile.name.clone()),
                );
            }
        }
    }
}

/// Evaluate all signals for every candidate pair, combine, and keep the
/// best-scoring target per (FK column, PK table) so one well-linked column
/// does not flood the graph with near-duplicate edges.
fn score_candidates(pairs: &[CandidatePair<'_>], config: &EngineConfig) -> Vec<Relationship> {
    let signals = all_signals();

    // Keyed by (FK table, FK column, PK table); BTreeMap for stable output.
    let mut best: BTreeMap<(String, String, String), Relationship> = BTreeMap::new();

    for pair in pairs {
        let ctx = SignalContext {
            fk: pair.fk,
            pk: pair.pk,
        };
        let results: Vec<SignalResult> = signals
            .iter()
            .filter_map(|signal| signal.evaluate(&ctx))
            .collect();
        let Some(scored) = scorer::combine(&results, config) else {
            continue;
        };

        let relationship = Relationship {
            source: ColumnRef::new(&pair.fk.table, &pair.fk.name),
            target: ColumnRef::new(&pair.pk.table, &pair.pk.name),
            provenance: Provenance::Inferred,
            confidence: scored.confidence,
            score: scored.score,
            detected_by: Some(scored.detected_by),
            reasons: scored.reasons,
        };

        let key = (
            pair.fk.table.clone(),
            pair.fk.name.clone(),
            pair.pk.table.clone(),
        );
        match best.get(&key) {
            Some(existing)
                if existing.score.total_cmp(&relationship.score).is_ge() => {}
            _ => {
                best.insert(key, relationship);
            }
        }
    }

    best.into_values()
        .filter(|rel| meets_min_confidence(rel.confidence, config.min_confidence))
        .collect()
}

fn meets_min_confidence(confidence: Confidence, min: MinConfidence) -> bool {
    let floor = match min {
        MinConfidence::None | MinConfidence::Low => Confidence::Low,
        MinConfidence::Medium => Confidence::Medium,
        MinConfidence::High => Confidence::High,
    };
    confidence >= floor
}

fn summarize(
    request: &InferenceRequest,
    candidate_count: usize,
    relationships: &[Relationship],
    issues: &[Issue],
) -> Summary {
    let mut issue_count = IssueCount::default();
    for issue in issues {
        match issue.severity {
            Severity::Error => issue_count.errors += 1,
            Severity::Warning => issue_count.warnings += 1,
            Severity::Info => issue_count.infos += 1,
        }
    }
    Summary {
        table_count: request.tables.len(),
        column_count: request.tables.iter().map(|t| t.columns.len()).sum(),
        candidate_count,
        relationship_count: relationships.len(),
        has_errors: issue_count.errors > 0,
        issue_count,
    }
}
