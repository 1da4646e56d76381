//! Request types for the relationship inference API.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A request to infer relationships across a set of loaded tables.
///
/// This is the main entry point for the inference API. It accepts loaded
/// tabular data along with optional declared-schema metadata, database
/// foreign-key constraints, and tuning options.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default)]
#[serde(rename_all = "camelCase")]
pub struct InferenceRequest {
    /// Loaded tables (names must be unique within the request)
    pub tables: Vec<TableData>,

    /// Optional declared schema (from a schema file)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<SchemaMetadata>,

    /// Optional foreign-key constraints reported by database introspection
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub constraints: Vec<ForeignKeyConstraint>,

    /// Optional tuning options
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<InferenceOptions>,
}

/// A loaded table: a name plus an ordered sequence of columns.
///
/// Immutable for the duration of an inference run; loaders produce a fresh
/// snapshot when the underlying data changes.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TableData {
    pub name: String,
    #[serde(default)]
    pub columns: Vec<ColumnData>,
}

impl TableData {
    /// Number of rows, taken from the longest column.
    ///
    /// Columns of a well-formed table all have the same length; the max is
    /// used so a ragged loader bug degrades gracefully instead of truncating.
    pub fn row_count(&self) -> usize {
        self.columns.iter().map(|c| c.values.len()).max().unwrap_or(0)
    }
}

/// A single column: name, optional declared datatype, and string-encoded
/// cell values (`None` = null).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ColumnData {
    pub name: String,

    /// Declared datatype from the loader, when known (e.g. "integer")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_type: Option<String>,

    /// Cell values in row order; `None` marks a null
    #[serde(default)]
    pub values: Vec<Option<String>>,
}

/// Declared schema metadata, typically parsed from a JSON or YAML schema
/// file by the CLI (or any other collaborator).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default)]
#[serde(rename_all = "camelCase")]
pub struct SchemaMetadata {
    #[serde(default)]
    pub tables: Vec<SchemaTable>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SchemaTable {
    pub name: String,
    #[serde(default)]
    pub columns: Vec<ColumnSchema>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ColumnSchema {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_type: Option<String>,

    /// True if this column is a primary key (or part of a composite PK)
    #[serde(default, alias = "primary_key", skip_serializing_if = "Option::is_none")]
    pub primary_key: Option<bool>,

    /// Foreign-key reference if this column references another table
    #[serde(default, alias = "foreign_key", skip_serializing_if = "Option::is_none")]
    pub foreign_key: Option<ForeignKeyRef>,
}

/// A foreign-key reference to another table's column.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ForeignKeyRef {
    /// The referenced table name
    pub table: String,
    /// The referenced column name
    pub column: String,
}

/// A foreign-key constraint reported by database introspection.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ForeignKeyConstraint {
    pub table: String,
    pub column: String,
    pub referenced_table: String,
    pub referenced_column: String,
}

/// Minimum confidence needed for an inferred relationship to be surfaced.
///
/// Applied when assembling the result, never inside scoring; authoritative
/// relationships are always surfaced regardless.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, JsonSchema, Default)]
#[serde(rename_all = "lowercase")]
pub enum MinConfidence {
    /// Surface every inferred relationship
    None,
    Low,
    #[default]
    Medium,
    High,
}

/// Tuning options for an inference run.
///
/// All numeric constants here are policy, not mechanism: the defaults are
/// starting points, callers tune them per dataset.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default)]
#[serde(rename_all = "camelCase")]
pub struct InferenceOptions {
    /// Minimum confidence for inferred relationships (default: medium)
    #[serde(default)]
    pub min_confidence: MinConfidence,

    /// Per-signal weight overrides
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weights: Option<SignalWeights>,

    /// Confidence label threshold overrides
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thresholds: Option<ConfidenceThresholds>,

    /// Cap on distinct values materialized per column (default: 50 000)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distinct_cap: Option<usize>,

    /// Cap on the numeric distribution sample per column (default: 1 000)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub numeric_sample_cap: Option<usize>,
}

/// Per-signal weights used by the composite scorer.
///
/// Weights are relative: the composite score renormalizes over the subset of
/// signals that did not abstain, so only the ratios matter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SignalWeights {
    pub naming: f64,
    pub name_similarity: f64,
    pub value_overlap: f64,
    pub cardinality: f64,
    pub format: f64,
    pub distribution: f64,
    pub null_pattern: f64,
}

impl Default for SignalWeights {
    fn default() -> Self {
        Self {
            naming: 1.0,
            cardinality: 0.95,
            value_overlap: 0.9,
            name_similarity: 0.6,
            distribution: 0.5,
            format: 0.4,
            null_pattern: 0.2,
        }
    }
}

/// Thresholds mapping a composite score to a confidence label.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfidenceThresholds {
    /// Scores at or above this are labeled `medium`
    pub medium: f64,
    /// Scores at or above this are labeled `high`
    pub high: f64,
}

impl Default for ConfidenceThresholds {
    fn default() -> Self {
        Self {
            medium: 0.55,
            high: 0.85,
        }
    }
}
