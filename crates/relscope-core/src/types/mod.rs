//! Types for the relationship inference API.
//!
//! This module defines the request and response types for the RelScope
//! inference API. The API accepts loaded tabular data plus optional
//! declared-schema metadata and returns a relationship graph with
//! per-relationship confidence and provenance.

mod common;
mod request;
mod response;

// Re-export all public types
pub use common::{issue_codes, Issue, IssueCount, Severity, Summary};
pub use request::{
    ColumnData, ColumnSchema, ConfidenceThresholds, ForeignKeyConstraint, ForeignKeyRef,
    InferenceOptions, InferenceRequest, MinConfidence, SchemaMetadata, SchemaTable, SignalWeights,
    TableData,
};
pub use response::{
    ColumnProfileSummary, ColumnRef, Confidence, FormatTag, InferenceResult, Provenance,
    Relationship, RelationshipEdge, RelationshipGraph, SignalKind, TableNode, TableProfileSummary,
};
