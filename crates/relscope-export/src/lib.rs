//! Report export for RelScope inference results.
//!
//! Renders an `InferenceResult` as a flat CSV report, a JSON document, or a
//! Mermaid entity-relationship diagram.

mod csv;
mod error;
mod json;
mod mermaid;

pub use error::ExportError;

use relscope_core::InferenceResult;

/// Supported export formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Flat relationships report, one CSV row per relationship
    Csv,
    /// The full result as JSON
    Json,
    /// Mermaid `erDiagram` of the relationship graph
    Mermaid,
}

/// Export an inference result in the requested format.
///
/// Returns raw bytes suitable for writing to a file or stdout.
pub fn export(result: &InferenceResult, format: Format) -> Result<Vec<u8>, ExportError> {
    match format {
        Format::Csv => csv::export_relationships_csv(result),
        Format::Json => json::export_json(result, true),
        Format::Mermaid => Ok(mermaid::format_mermaid(result).into_bytes()),
    }
}

/// Export the flat relationships report as CSV.
pub fn export_csv(result: &InferenceResult) -> Result<Vec<u8>, ExportError> {
    csv::export_relationships_csv(result)
}

/// Export the full result as JSON.
pub fn export_json(result: &InferenceResult, pretty: bool) -> Result<Vec<u8>, ExportError> {
    json::export_json(result, pretty)
}

/// Render the relationship graph as a Mermaid diagram.
pub fn export_mermaid(result: &InferenceResult) -> String {
    mermaid::format_mermaid(result)
}
