pub mod engine;
pub mod error;
pub mod naming;
pub mod profiler;
pub mod signals;
pub mod types;

// Re-export main types and functions
pub use engine::{infer, EngineConfig};
pub use error::ConfigError;
pub use profiler::{ColumnProfile, ResourceCaps};
pub use signals::{all_signals, Signal, SignalContext, SignalResult};

// Re-export types explicitly
pub use types::{
    // Issue codes
    issue_codes,
    // Request types
    ColumnData,
    ColumnProfileSummary,
    ColumnRef,
    ColumnSchema,
    Confidence,
    ConfidenceThresholds,
    ForeignKeyConstraint,
    ForeignKeyRef,
    FormatTag,
    InferenceOptions,
    InferenceRequest,
    // Response types
    InferenceResult,
    Issue,
    IssueCount,
    MinConfidence,
    Provenance,
    Relationship,
    RelationshipEdge,
    RelationshipGraph,
    SchemaMetadata,
    SchemaTable,
    Severity,
    SignalKind,
    SignalWeights,
    Summary,
    TableData,
    TableNode,
    TableProfileSummary,
};
