//! JSON output formatting.

use relscope_core::InferenceResult;

/// Format the inference result as JSON.
///
/// If `compact` is true, outputs minified JSON without whitespace.
pub fn format_json(result: &InferenceResult, compact: bool) -> String {
    if compact {
        serde_json::to_string(result).expect("serialization cannot fail")
    } else {
        serde_json::to_string_pretty(result).expect("serialization cannot fail")
    }
}
