//! Common test utilities for building node catalogs.
use haisen::prelude::*;

/// Creates a node descriptor with the given ports; the multiplicity and
/// special-input flags are derived the way the introspection pipeline does.
#[allow(dead_code)]
pub fn node(
    node_type: &str,
    display_name: &str,
    inputs: &[&str],
    outputs: &[&str],
    category: &str,
) -> NodeConnectionInfo {
    NodeConnectionInfo {
        node_type: node_type.to_string(),
        display_name: display_name.to_string(),
        input_types: inputs.iter().map(|s| s.to_string()).collect(),
        output_types: outputs.iter().map(|s| s.to_string()).collect(),
        is_multi_input: inputs.len() > 1,
        is_multi_output: outputs.len() > 1,
        requires_special_inputs: inputs.iter().any(|t| is_ai_type(t)),
        category: category.to_string(),
        output_count: outputs.len(),
        output_names: Vec::new(),
        is_dynamic_output: false,
    }
}

/// A trigger and two ordinary processing nodes, all wired over `main`.
#[allow(dead_code)]
pub fn create_basic_catalog() -> NodeCatalog {
    NodeCatalog::new(vec![
        node(
            "n8n-nodes-base.webhook",
            "Webhook",
            &[],
            &["main"],
            "trigger",
        ),
        node(
            "n8n-nodes-base.httpRequest",
            "HTTP Request",
            &["main"],
            &["main"],
            "action",
        ),
        node(
            "n8n-nodes-base.slack",
            "Slack",
            &["main"],
            &["main"],
            "action",
        ),
    ])
}

/// An AI agent with its capability sub-nodes (model, tool, memory).
#[allow(dead_code)]
pub fn create_ai_catalog() -> NodeCatalog {
    NodeCatalog::new(vec![
        node(
            "langchain.agent",
            "AI Agent",
            &["main", "ai_languageModel", "ai_tool", "ai_memory"],
            &["main"],
            "ai",
        ),
        node(
            "langchain.lmChatOpenAi",
            "OpenAI Chat Model",
            &[],
            &["ai_languageModel"],
            "ai",
        ),
        node(
            "langchain.toolCalculator",
            "Calculator Tool",
            &[],
            &["ai_tool"],
            "ai",
        ),
        node(
            "langchain.memoryBufferWindow",
            "Window Buffer Memory",
            &[],
            &["ai_memory"],
            "ai",
        ),
    ])
}
