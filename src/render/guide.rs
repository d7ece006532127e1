use crate::catalog::{
    AI_PREFIX, CONNECTION_AI_LANGUAGE_MODEL, CONNECTION_AI_MEMORY, CONNECTION_AI_TOOL, NodeCatalog,
    NodeConnectionInfo,
};
use crate::matrix::{CompatibilityEntry, CompatibilityMatrix};
use itertools::Itertools;
use std::fmt::Write;

use super::outputs::output_description;

/// Renders the Markdown connection guide for a single node.
///
/// The guide lists the node's connection types, the best upstream and
/// downstream partners (at most `limit` each), and any special AI input
/// requirements. The matrix supplies all compatibility data; this function
/// only formats it.
pub fn node_connection_guide(
    node: &NodeConnectionInfo,
    matrix: &CompatibilityMatrix,
    catalog: &NodeCatalog,
    limit: usize,
) -> String {
    let mut output = String::new();
    writeln!(&mut output, "## {}", node.display_name).unwrap();

    format_connection_types(&mut output, node);
    if !node.input_types.is_empty() {
        format_accepts_input_from(&mut output, node, matrix, catalog, limit);
    }
    if !node.output_types.is_empty() {
        format_connects_to(&mut output, node, matrix, catalog, limit);
    }
    if node.requires_special_inputs {
        format_special_requirements(&mut output, node);
    }

    output
}

fn format_connection_types(output: &mut String, node: &NodeConnectionInfo) {
    writeln!(output, "\n### Connection types\n").unwrap();

    if node.input_types.is_empty() {
        writeln!(output, "- Inputs: none (trigger/start node)").unwrap();
    } else {
        writeln!(output, "- Inputs: {}", node.input_types.iter().join(", ")).unwrap();
    }
    writeln!(output, "- Outputs: {}", node.output_types.iter().join(", ")).unwrap();

    if node.output_count > 1 || node.is_dynamic_output {
        writeln!(output, "- Output branches:").unwrap();
        for output_name in &node.output_names {
            match output_description(&node.node_type, output_name) {
                Some(description) => {
                    writeln!(output, "  - `{}`: {}", output_name, description).unwrap()
                }
                None => writeln!(output, "  - `{}`", output_name).unwrap(),
            }
        }
    }
}

/// Reverse scan: every catalog node whose compatible list names this node as a
/// target is an upstream candidate.
fn format_accepts_input_from(
    output: &mut String,
    node: &NodeConnectionInfo,
    matrix: &CompatibilityMatrix,
    catalog: &NodeCatalog,
    limit: usize,
) {
    writeln!(output, "\n### Accepts input from\n").unwrap();

    let mut sources: Vec<(&NodeConnectionInfo, &CompatibilityEntry)> = Vec::new();
    for candidate in catalog.iter() {
        if candidate.node_type == node.node_type {
            continue;
        }
        let entry = matrix
            .get(&candidate.node_type)
            .and_then(|c| c.compatible.iter().find(|e| e.target_node == node.node_type));
        if let Some(entry) = entry {
            sources.push((candidate, entry));
        }
    }
    // Stable: equal scores keep catalog order.
    sources.sort_by(|a, b| b.1.score.cmp(&a.1.score));

    if sources.is_empty() {
        writeln!(output, "This node does not accept input from other nodes.").unwrap();
        return;
    }
    for (source, entry) in sources.into_iter().take(limit) {
        writeln!(
            output,
            "- **{}** — via {}",
            source.display_name,
            entry.connection_types.iter().join(", ")
        )
        .unwrap();
    }
}

fn format_connects_to(
    output: &mut String,
    node: &NodeConnectionInfo,
    matrix: &CompatibilityMatrix,
    catalog: &NodeCatalog,
    limit: usize,
) {
    writeln!(output, "\n### Connects to\n").unwrap();

    for entry in matrix.recommended_connections(&node.node_type, limit) {
        // A stale matrix can reference targets filtered out of the catalog;
        // those entries are skipped rather than rendered with a raw type id.
        if let Some(display_name) = catalog.display_name(&entry.target_node) {
            writeln!(
                output,
                "- **{}** — via {}",
                display_name,
                entry.connection_types.iter().join(", ")
            )
            .unwrap();
        }
    }
}

fn format_special_requirements(output: &mut String, node: &NodeConnectionInfo) {
    let special: Vec<&str> = node.ai_input_types().collect();
    // The flag can be set without any ai_ input actually declared; render
    // nothing in that case.
    if special.is_empty() {
        return;
    }

    writeln!(output, "\n### Special input requirements\n").unwrap();
    for connection_type in special {
        writeln!(
            output,
            "- {} {}",
            humanize_ai_type(connection_type),
            requirement_note(connection_type)
        )
        .unwrap();
    }
}

/// Turns `ai_languageModel` into `Language Model`.
fn humanize_ai_type(connection_type: &str) -> String {
    let stripped = connection_type
        .strip_prefix(AI_PREFIX)
        .unwrap_or(connection_type);

    let mut humanized = String::with_capacity(stripped.len() + 4);
    for (i, ch) in stripped.chars().enumerate() {
        if i == 0 {
            humanized.extend(ch.to_uppercase());
        } else {
            if ch.is_uppercase() {
                humanized.push(' ');
            }
            humanized.push(ch);
        }
    }
    humanized
}

fn requirement_note(connection_type: &str) -> &'static str {
    match connection_type {
        CONNECTION_AI_LANGUAGE_MODEL => "(required)",
        CONNECTION_AI_TOOL | CONNECTION_AI_MEMORY => "(optional, multiple allowed)",
        _ => "(optional)",
    }
}
