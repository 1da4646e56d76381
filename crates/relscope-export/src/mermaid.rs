//! Mermaid `erDiagram` rendering of the relationship graph.

use relscope_core::{InferenceResult, Provenance};

/// Format the relationship graph as a Mermaid entity-relationship diagram.
///
/// Authoritative relationships render as identifying (solid) links, inferred
/// ones as non-identifying (dashed) links annotated with the column pair and
/// confidence.
pub fn format_mermaid(result: &InferenceResult) -> String {
    let mut out = String::from("erDiagram\n");

    for node in &result.graph.nodes {
        out.push_str(&format!("    {}\n", sanitize_id(&node.id)));
    }

    for edge in &result.graph.edges {
        let link = match edge.provenance {
            Provenance::Inferred => "}o..||",
            Provenance::DbConstraint | Provenance::Declared => "}o--||",
        };
        let label = escape_label(&format!(
            "{} -> {} ({})",
            edge.source_column, edge.target_column, edge.confidence
        ));
        out.push_str(&format!(
            "    {} {} {} : \"{}\"\n",
            sanitize_id(&edge.from),
            link,
            sanitize_id(&edge.to),
            label
        ));
    }

    out
}

/// Mermaid identifiers allow only alphanumerics and underscores.
fn sanitize_id(id: &str) -> String {
    id.chars()
        .map(|c| if c.is_alphanumeric() || c == '_' { c } else { '_' })
        .collect()
}

fn escape_label(label: &str) -> String {
    label.replace('"', "\\\"").replace('\n', " ")
}
