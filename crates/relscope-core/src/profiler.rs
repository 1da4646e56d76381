//! Column profiling: per-column statistics computed once per table and
//! consumed by every signal evaluator.
//!
//! A [`ColumnProfile`] is a pure function of a column snapshot: profiling the
//! same values with the same caps always yields the same profile. Statistics
//! that do not apply (e.g. a numeric sample for a text column) are left
//! unset; evaluators treat unset fields as abstain triggers.

use regex::Regex;
use std::collections::HashSet;
use std::sync::OnceLock;

use crate::naming::{clean_name, is_pk_name, looks_like_identifier};
use crate::types::{ColumnData, ColumnProfileSummary, FormatTag, TableData, TableProfileSummary};

/// Minimum parseable numeric values for a distribution sample to exist.
pub const MIN_NUMERIC_SAMPLE: usize = 2;

/// Fraction of the probe that must match a pattern for a tag to apply.
const FORMAT_MATCH_FRACTION: f64 = 0.8;

/// Number of non-null values probed for format classification.
const FORMAT_PROBE_SIZE: usize = 200;

/// Memory bounds applied while profiling.
#[derive(Debug, Clone, Copy)]
pub struct ResourceCaps {
    /// Max distinct values materialized per column.
    pub distinct_cap: usize,
    /// Max values retained in a numeric distribution sample.
    pub numeric_sample_cap: usize,
}

impl Default for ResourceCaps {
    fn default() -> Self {
        Self {
            distinct_cap: 50_000,
            numeric_sample_cap: 1_000,
        }
    }
}

/// Derived statistics for one column, cached per table for the run.
#[derive(Debug, Clone)]
pub struct ColumnProfile {
    pub table: String,
    pub name: String,
    /// Cleaned table name, precomputed for naming checks.
    pub table_clean: String,
    /// Cleaned column name, precomputed for naming checks.
    pub name_clean: String,
    pub data_type: Option<String>,

    pub row_count: usize,
    pub null_count: usize,
    pub distinct_count: usize,
    /// Distinct values / rows; 0.0 for an empty column.
    pub cardinality_ratio: f64,
    /// Nulls / rows; 0.0 for an empty column.
    pub null_ratio: f64,

    pub format: FormatTag,

    /// Bit i = true if row i is null.
    pub null_bitmap: Vec<bool>,

    /// Distinct non-null values, bounded by `distinct_cap`.
    pub distinct_values: HashSet<String>,

    /// Sorted numeric values for distribution comparison; only present for
    /// integer/decimal columns with at least [`MIN_NUMERIC_SAMPLE`] values.
    pub numeric_sample: Option<Vec<f64>>,

    /// True when a resource cap bounded this profile.
    pub truncated: bool,
}

impl ColumnProfile {
    /// A unique, fully non-null column: the PK-like shape.
    pub fn is_pk_like(&self) -> bool {
        self.row_count > 0 && self.null_count == 0 && self.distinct_count == self.row_count
    }

    pub fn summary(&self) -> ColumnProfileSummary {
        ColumnProfileSummary {
            name: self.name.clone(),
            data_type: self.data_type.clone(),
            distinct_count: self.distinct_count,
            null_count: self.null_count,
            cardinality_ratio: self.cardinality_ratio,
            null_ratio: self.null_ratio,
            format: self.format,
            truncated: self.truncated,
        }
    }
}

fn uuid_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)^[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}$")
            .expect("invalid regex")
    })
}

fn date_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // Plain ISO dates and datetime prefixes share one tag; a column mixing
    // the two still fingerprints consistently.
    RE.get_or_init(|| {
        Regex::new(r"^\d{4}-\d{2}-\d{2}([ T]\d{2}:\d{2}(:\d{2})?)?$").expect("invalid regex")
    })
}

fn integer_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[+-]?\d+$").expect("invalid regex"))
}

fn decimal_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[+-]?\d+\.\d+$").expect("invalid regex"))
}

/// Classify a column's value format from a bounded probe of non-null values.
///
/// Matchers run in a fixed priority order (UUID > date > integer > decimal),
/// first tag crossing the match fraction wins; anything else with data is
/// free text, and a column with no non-null values is `Unknown`.
pub fn classify_format<'a, I>(values: I) -> FormatTag
where
    I: Iterator<Item = &'a str>,
{
    let probe: Vec<&str> = values.take(FORMAT_PROBE_SIZE).collect();
    if probe.is_empty() {
        return FormatTag::Unknown;
    }
    let needed = (probe.len() as f64 * FORMAT_MATCH_FRACTION).ceil() as usize;
    let matchers: [(&Regex, FormatTag); 4] = [
        (uuid_regex(), FormatTag::Uuid),
        (date_regex(), FormatTag::Date),
        (integer_regex(), FormatTag::Integer),
        (decimal_regex(), FormatTag::Decimal),
    ];
    for (re, tag) in matchers {
        let hits = probe.iter().filter(|v| re.is_match(v.trim())).count();
        if hits >= needed {
            return tag;
        }
    }
    FormatTag::FreeText
}

/// Profile a single column. Pure and deterministic for a fixed snapshot.
pub fn profile_column(table: &str, column: &ColumnData, caps: &ResourceCaps) -> ColumnProfile {
    let row_count = column.values.len();
    let null_bitmap: Vec<bool> = column.values.iter().map(|v| v.is_none()).collect();
    let null_count = null_bitmap.iter().filter(|&&n| n).count();

    let mut distinct_values: HashSet<String> = HashSet::new();
    let mut truncated = false;
    for value in column.values.iter().flatten() {
        let value = value.trim();
        if distinct_values.contains(value) {
            continue;
        }
        if distinct_values.len() >= caps.distinct_cap {
            truncated = true;
            break;
        }
        distinct_values.insert(value.to_string());
    }
    let distinct_count = distinct_values.len();

    let format = classify_format(column.values.iter().flatten().map(|v| v.as_str()));

    let numeric_sample = match format {
        FormatTag::Integer | FormatTag::Decimal => {
            let numeric: Vec<f64> = column
                .values
                .iter()
                .flatten()
                .filter_map(|v| v.trim().parse::<f64>().ok())
                .filter(|v| v.is_finite())
                .collect();
            if numeric.len() >= MIN_NUMERIC_SAMPLE {
                let (sample, sample_truncated) =
                    strided_sample(numeric, caps.numeric_sample_cap);
                truncated = truncated || sample_truncated;
                let mut sample = sample;
                sample.sort_by(|a, b| a.total_cmp(b));
                Some(sample)
            } else {
                None
            }
        }
        _ => None,
    };

    let ratio = |n: usize| {
        if row_count == 0 {
            0.0
        } else {
            n as f64 / row_count as f64
        }
    };

    ColumnProfile {
        table: table.to_string(),
        name: column.name.clone(),
        table_clean: clean_name(table),
        name_clean: clean_name(&column.name),
        data_type: column.data_type.clone(),
        row_count,
        null_count,
        distinct_count,
        cardinality_ratio: ratio(distinct_count),
        null_ratio: ratio(null_count),
        format,
        null_bitmap,
        distinct_values,
        numeric_sample,
        truncated,
    }
}

/// Deterministic bounded sample: every k-th element when over the cap.
///
/// A reservoir would need a seeded RNG to stay deterministic; an even stride
/// gives the same bound with none of the machinery.
fn strided_sample(values: Vec<f64>, cap: usize) -> (Vec<f64>, bool) {
    if values.len() <= cap {
        return (values, false);
    }
    let step = values.len() / cap;
    let sample: Vec<f64> = values.iter().step_by(step.max(1)).take(cap).copied().collect();
    (sample, true)
}

/// Profile every column of a table.
pub fn profile_table(table: &TableData, caps: &ResourceCaps) -> Vec<ColumnProfile> {
    table
        .columns
        .iter()
        .map(|column| profile_column(&table.name, column, caps))
        .collect()
}

/// Pick at most one primary-key column for a table, by priority:
/// naming convention match, then the first all-unique non-null column with
/// an identifier-like name, then the first all-unique non-null column.
pub fn detect_primary_key<'a>(profiles: &'a [ColumnProfile]) -> Option<&'a ColumnProfile> {
    if let Some(p) = profiles
        .iter()
        .find(|p| is_pk_name(&p.name_clean, &p.table_clean))
    {
        return Some(p);
    }
    let unique: Vec<&ColumnProfile> = profiles.iter().filter(|p| p.is_pk_like()).collect();
    unique
        .iter()
        .find(|p| looks_like_identifier(&p.name_clean))
        .copied()
        .or_else(|| unique.first().copied())
}

/// Build the per-table profile summary exposed in the result.
pub fn table_summary(table: &TableData, profiles: &[ColumnProfile]) -> TableProfileSummary {
    TableProfileSummary {
        table: table.name.clone(),
        row_count: table.row_count(),
        primary_key: detect_primary_key(profiles).map(|p| p.name.clone()),
        columns: profiles.iter().map(ColumnProfile::summary).collect(),
    }
}
