/// Semantic descriptions for the output branches of well-known multi-output
/// nodes, keyed by `(node_type, output_name)`.
///
/// Kept as one explicit table so the special cases stay auditable; nodes and
/// outputs not listed here simply render without a description.
static KNOWN_OUTPUT_DESCRIPTIONS: &[((&str, &str), &str)] = &[
    (
        ("n8n-nodes-base.if", "true"),
        "Items that matched the condition",
    ),
    (
        ("n8n-nodes-base.if", "false"),
        "Items that did not match the condition",
    ),
    (
        ("n8n-nodes-base.splitInBatches", "done"),
        "Runs once after the final batch has been processed",
    ),
    (
        ("n8n-nodes-base.splitInBatches", "loop"),
        "Runs for each batch of items",
    ),
    (
        ("n8n-nodes-base.compareDatasets", "In A only"),
        "Items present only in the first dataset",
    ),
    (
        ("n8n-nodes-base.compareDatasets", "Same"),
        "Items identical in both datasets",
    ),
    (
        ("n8n-nodes-base.compareDatasets", "Different"),
        "Items present in both datasets but with different values",
    ),
    (
        ("n8n-nodes-base.compareDatasets", "In B only"),
        "Items present only in the second dataset",
    ),
    (("n8n-nodes-base.switch", "0"), "Items routed by the first rule"),
    (("n8n-nodes-base.switch", "1"), "Items routed by the second rule"),
    (("n8n-nodes-base.switch", "2"), "Items routed by the third rule"),
    (("n8n-nodes-base.switch", "3"), "Items routed by the fourth rule"),
    (
        ("n8n-nodes-base.switch", "fallback"),
        "Items that matched no routing rule",
    ),
];

/// Looks up the description for one output of a well-known multi-output node.
pub fn output_description(node_type: &str, output_name: &str) -> Option<&'static str> {
    KNOWN_OUTPUT_DESCRIPTIONS
        .iter()
        .find(|((nt, on), _)| *nt == node_type && *on == output_name)
        .map(|(_, description)| *description)
}
