use serde::{Deserialize, Serialize};

/// Connection type identifier.
pub type ConnectionType = String;

/// The ordinary data-flow connection type.
pub const CONNECTION_MAIN: &str = "main";

/// Prefix shared by all specialized AI capability channels.
pub const AI_PREFIX: &str = "ai_";

/// Well-known AI capability channels.
pub const CONNECTION_AI_LANGUAGE_MODEL: &str = "ai_languageModel";
pub const CONNECTION_AI_TOOL: &str = "ai_tool";
pub const CONNECTION_AI_MEMORY: &str = "ai_memory";
pub const CONNECTION_AI_OUTPUT_PARSER: &str = "ai_outputParser";

/// Category assigned to workflow-starting nodes.
pub const CATEGORY_TRIGGER: &str = "trigger";

/// Returns `true` if the connection type is a specialized AI capability channel.
pub fn is_ai_type(connection_type: &str) -> bool {
    connection_type.starts_with(AI_PREFIX)
}

/// The declared connection surface of a single node type.
///
/// One record exists per distinct node type in the working set. The record is
/// purely descriptive: it carries what the node declares about its ports, not
/// anything about how the node behaves at runtime.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeConnectionInfo {
    /// Unique, package-qualified identifier (e.g. `"n8n-nodes-base.slack"`).
    pub node_type: String,
    /// Human-readable label.
    pub display_name: String,
    /// Connection types the node accepts. Empty for trigger/start nodes.
    pub input_types: Vec<ConnectionType>,
    /// Connection types the node emits.
    pub output_types: Vec<ConnectionType>,
    /// The node accepts more than one connection of some input type.
    pub is_multi_input: bool,
    /// The node produces more than one connection of some output type.
    pub is_multi_output: bool,
    /// Any input type is a non-`main` capability channel, so the node needs
    /// specialized upstream wiring.
    pub requires_special_inputs: bool,
    /// Coarse classification (e.g. `"trigger"`, `"action"`, `"ai"`). Only used
    /// for scoring bonuses, never for matching.
    pub category: String,
    /// Number of distinct output connectors. May exceed `output_types.len()`
    /// when several connectors share a type (conditional branches).
    pub output_count: usize,
    /// Labels for each output connector. May be empty when connectors are
    /// unnamed or fixed.
    pub output_names: Vec<String>,
    /// The output connector count is runtime-configurable rather than fixed by
    /// the node type.
    pub is_dynamic_output: bool,
}

impl NodeConnectionInfo {
    /// Returns `true` if this node starts a workflow.
    pub fn is_trigger(&self) -> bool {
        self.category == CATEGORY_TRIGGER
    }

    /// Iterates over the node's AI capability inputs, in declaration order.
    pub fn ai_input_types(&self) -> impl Iterator<Item = &str> {
        self.input_types
            .iter()
            .map(String::as_str)
            .filter(|t| is_ai_type(t))
    }
}

/// The complete working set of node descriptors, ready for analysis.
///
/// The caller supplies the nodes deduplicated by `node_type`; iteration order
/// is the caller's order and is preserved everywhere it is observable.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NodeCatalog {
    pub nodes: Vec<NodeConnectionInfo>,
}

impl NodeCatalog {
    pub fn new(nodes: Vec<NodeConnectionInfo>) -> Self {
        Self { nodes }
    }

    /// Load a catalog from a JSON file matching the crate's serialized format.
    pub fn from_file(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let catalog = serde_json::from_str(&content)?;
        Ok(catalog)
    }

    /// Looks up a node descriptor by its type identifier.
    pub fn find(&self, node_type: &str) -> Option<&NodeConnectionInfo> {
        self.nodes.iter().find(|n| n.node_type == node_type)
    }

    /// Resolves a node type to its display name, if present in the catalog.
    pub fn display_name(&self, node_type: &str) -> Option<&str> {
        self.find(node_type).map(|n| n.display_name.as_str())
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &NodeConnectionInfo> {
        self.nodes.iter()
    }
}
