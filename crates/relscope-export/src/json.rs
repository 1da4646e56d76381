//! JSON export: the full result, serialized as-is.

use relscope_core::InferenceResult;

use crate::ExportError;

pub fn export_json(result: &InferenceResult, pretty: bool) -> Result<Vec<u8>, ExportError> {
    let bytes = if pretty {
        serde_json::to_vec_pretty(result)?
    } else {
        serde_json::to_vec(result)?
    };
    Ok(bytes)
}
