//! Flat CSV report: one row per relationship, sorted as in the result.

use csv::WriterBuilder;
use relscope_core::InferenceResult;

use crate::ExportError;

pub fn export_relationships_csv(result: &InferenceResult) -> Result<Vec<u8>, ExportError> {
    let mut writer = WriterBuilder::new()
        .has_headers(true)
        .from_writer(Vec::new());

    writer.write_record([
        "Source Table",
        "Source Column",
        "Target Table",
        "Target Column",
        "Provenance",
        "Confidence",
        "Score",
        "Detected By",
        "Reasons",
    ])?;

    for rel in &result.relationships {
        writer.write_record([
            rel.source.table.clone(),
            rel.source.column.clone(),
            rel.target.table.clone(),
            rel.target.column.clone(),
            rel.provenance.to_string(),
            rel.confidence.to_string(),
            format!("{:.4}", rel.score),
            rel.detected_by.map(|s| s.to_string()).unwrap_or_default(),
            rel.reasons.join("; "),
        ])?;
    }

    writer
        .into_inner()
        .map_err(|err| ExportError::Csv(err.to_string()))
}
