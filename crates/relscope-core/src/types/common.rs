//! Common types shared between request and response.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// An issue encountered during an inference run (error, warning, or info).
///
/// Issues never abort the run; fatal problems (invalid configuration) are
/// rejected before the run starts via [`crate::error::ConfigError`].
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    /// Severity level
    pub severity: Severity,

    /// Machine-readable issue code
    pub code: String,

    /// Human-readable message
    pub message: String,

    /// Optional: table the issue relates to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table: Option<String>,

    /// Optional: column the issue relates to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column: Option<String>,
}

impl Issue {
    pub fn error(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            code: code.into(),
            message: message.into(),
            table: None,
            column: None,
        }
    }

    pub fn warning(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            code: code.into(),
            message: message.into(),
            table: None,
            column: None,
        }
    }

    pub fn info(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Info,
            code: code.into(),
            message: message.into(),
            table: None,
            column: None,
        }
    }

    pub fn with_table(mut self, table: impl Into<String>) -> Self {
        self.table = Some(table.into());
        self
    }

    pub fn with_column(mut self, column: impl Into<String>) -> Self {
        self.column = Some(column.into());
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Info,
}

/// Summary statistics for an inference run.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    /// Number of tables in the run
    pub table_count: usize,

    /// Total number of columns profiled
    pub column_count: usize,

    /// Number of candidate column pairs evaluated
    pub candidate_count: usize,

    /// Number of relationships in the final graph
    pub relationship_count: usize,

    /// Issue counts by severity
    pub issue_count: IssueCount,

    /// Quick check: true if any errors were encountered
    pub has_errors: bool,
}

/// Counts of issues by severity level.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default)]
#[serde(rename_all = "camelCase")]
pub struct IssueCount {
    /// Number of error-level issues
    pub errors: usize,
    /// Number of warning-level issues
    pub warnings: usize,
    /// Number of info-level issues
    pub infos: usize,
}

/// Machine-readable issue codes.
pub mod issue_codes {
    /// Two authoritative sources disagree on the same foreign-key endpoint.
    pub const AUTHORITY_CONFLICT: &str = "AUTHORITY_CONFLICT";
    /// A column exceeded the distinct-value or sample cap and was profiled
    /// on a bounded sample.
    pub const COLUMN_SAMPLED: &str = "COLUMN_SAMPLED";
    /// A declared relationship references a table that was not loaded.
    pub const UNKNOWN_TABLE: &str = "UNKNOWN_TABLE";
    /// A table has no rows; content signals will abstain for its columns.
    pub const EMPTY_TABLE: &str = "EMPTY_TABLE";
}
