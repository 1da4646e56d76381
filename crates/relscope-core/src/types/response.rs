//! Response types for the relationship inference API.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::common::{Issue, IssueCount, Summary};

/// The result of an inference run.
///
/// Contains the relationship graph, the flat relationships report, per-column
/// profile summaries, any issues encountered, and summary statistics.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default)]
#[serde(rename_all = "camelCase")]
pub struct InferenceResult {
    /// Final deduplicated relationship graph (tables as nodes, FK→PK edges)
    pub graph: RelationshipGraph,

    /// Flat relationships report, sorted by confidence then score descending
    pub relationships: Vec<Relationship>,

    /// Per-table column profile summaries for metadata display
    pub profiles: Vec<TableProfileSummary>,

    /// All issues encountered during the run
    pub issues: Vec<Issue>,

    /// Summary statistics
    pub summary: Summary,
}

impl InferenceResult {
    /// Create an error result with a single issue.
    pub fn from_error(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            issues: vec![Issue::error(code, message)],
            summary: Summary {
                issue_count: IssueCount {
                    errors: 1,
                    warnings: 0,
                    infos: 0,
                },
                has_errors: true,
                ..Summary::default()
            },
            ..Self::default()
        }
    }
}

/// A qualified column endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ColumnRef {
    pub table: String,
    pub column: String,
}

impl ColumnRef {
    pub fn new(table: impl Into<String>, column: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            column: column.into(),
        }
    }
}

impl std::fmt::Display for ColumnRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.table, self.column)
    }
}

/// Origin of a relationship claim.
///
/// Ordered by authority: `Declared` (schema file, explicit human intent)
/// outranks `DbConstraint`, which outranks `Inferred`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "camelCase")]
pub enum Provenance {
    Inferred,
    DbConstraint,
    Declared,
}

impl std::fmt::Display for Provenance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Provenance::Inferred => "inferred",
            Provenance::DbConstraint => "dbConstraint",
            Provenance::Declared => "declared",
        };
        f.write_str(name)
    }
}

/// Discrete confidence label derived from the composite score.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    Low,
    Medium,
    High,
}

impl std::fmt::Display for Confidence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Confidence::Low => "low",
            Confidence::Medium => "medium",
            Confidence::High => "high",
        };
        f.write_str(name)
    }
}

/// The seven inference signals.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "camelCase")]
pub enum SignalKind {
    Naming,
    NameSimilarity,
    ValueOverlap,
    Cardinality,
    Format,
    Distribution,
    NullPattern,
}

impl SignalKind {
    /// All signal kinds in a fixed canonical order.
    pub const ALL: [SignalKind; 7] = [
        SignalKind::Naming,
        SignalKind::NameSimilarity,
        SignalKind::ValueOverlap,
        SignalKind::Cardinality,
        SignalKind::Format,
        SignalKind::Distribution,
        SignalKind::NullPattern,
    ];
}

impl std::fmt::Display for SignalKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            SignalKind::Naming => "naming",
            SignalKind::NameSimilarity => "name_similarity",
            SignalKind::ValueOverlap => "value_overlap",
            SignalKind::Cardinality => "cardinality",
            SignalKind::Format => "format",
            SignalKind::Distribution => "distribution",
            SignalKind::NullPattern => "null_pattern",
        };
        f.write_str(name)
    }
}

/// A single accepted relationship, directed FK → PK.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Relationship {
    /// Foreign-key side
    pub source: ColumnRef,

    /// Primary-key side
    pub target: ColumnRef,

    /// Where this relationship claim came from
    pub provenance: Provenance,

    /// Confidence label
    pub confidence: Confidence,

    /// Composite score in [0, 1]; 1.0 for authoritative relationships
    pub score: f64,

    /// Strongest contributing signal (inferred relationships only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detected_by: Option<SignalKind>,

    /// Human-readable evidence strings
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub reasons: Vec<String>,
}

/// The final node/edge structure for downstream rendering.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default)]
#[serde(rename_all = "camelCase")]
pub struct RelationshipGraph {
    /// Tables, sorted by name
    pub nodes: Vec<TableNode>,

    /// Relationships, directed FK → PK
    pub edges: Vec<RelationshipEdge>,
}

/// A table node in the relationship graph.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TableNode {
    /// Stable identifier (normalized table name)
    pub id: String,

    /// Human-readable label (the table name as loaded)
    pub label: String,

    /// Number of rows, when the table's data was loaded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub row_count: Option<usize>,

    /// Number of columns, when known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column_count: Option<usize>,
}

/// A directed edge (FK table → PK table) in the relationship graph.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RelationshipEdge {
    /// Node id of the FK-side table
    pub from: String,

    /// Node id of the PK-side table
    pub to: String,

    /// FK-side column name
    pub source_column: String,

    /// PK-side column name
    pub target_column: String,

    pub provenance: Provenance,
    pub confidence: Confidence,
    pub score: f64,
}

/// Column profile summaries for one table.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TableProfileSummary {
    pub table: String,
    pub row_count: usize,

    /// Detected primary-key column, when one qualifies
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_key: Option<String>,

    pub columns: Vec<ColumnProfileSummary>,
}

/// Profile summary for a single column.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ColumnProfileSummary {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_type: Option<String>,

    pub distinct_count: usize,
    pub null_count: usize,

    /// Distinct values / rows; 0.0 for an empty column
    pub cardinality_ratio: f64,

    /// Nulls / rows; 0.0 for an empty column
    pub null_ratio: f64,

    /// Inferred value format
    pub format: FormatTag,

    /// True when profiling was bounded by a resource cap
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub truncated: bool,
}

/// Inferred value format, classified by a fixed-priority pattern cascade.
///
/// Downstream signals dispatch on this tag instead of re-parsing values.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema, Default,
)]
#[serde(rename_all = "camelCase")]
pub enum FormatTag {
    Uuid,
    Date,
    Integer,
    Decimal,
    FreeText,
    /// No non-null values to classify
    #[default]
    Unknown,
}

impl std::fmt::Display for FormatTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            FormatTag::Uuid => "uuid",
            FormatTag::Date => "date",
            FormatTag::Integer => "integer",
            FormatTag::Decimal => "decimal",
            FormatTag::FreeText => "free_text",
            FormatTag::Unknown => "unknown",
        };
        f.write_str(name)
    }
}
