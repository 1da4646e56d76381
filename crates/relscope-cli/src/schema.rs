//! Declared-schema loading from JSON or YAML files.

use anyhow::{Context, Result};
use relscope_core::SchemaMetadata;
use std::path::Path;

/// Load declared schema metadata from a JSON or YAML file.
///
/// The format is chosen by extension (`.yaml`/`.yml` vs everything else);
/// both encode the same structure.
pub fn load_schema(path: &Path) -> Result<SchemaMetadata> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read schema file: {}", path.display()))?;

    let is_yaml = matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml") | Some("yml")
    );

    if is_yaml {
        serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse YAML schema: {}", path.display()))
    } else {
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse JSON schema: {}", path.display()))
    }
}
