//! Tests for the Markdown renderers: per-node guides and the matrix table.
mod common;
use common::*;
use haisen::prelude::*;

#[test]
fn test_guide_connection_types_for_trigger() {
    let catalog = create_basic_catalog();
    let analyzer = Analyzer::builder(catalog).build();
    let matrix = analyzer.build_matrix();

    let webhook = analyzer.catalog().find("n8n-nodes-base.webhook").unwrap();
    let guide = node_connection_guide(webhook, &matrix, analyzer.catalog(), 10);

    assert!(guide.contains("## Webhook"));
    assert!(guide.contains("- Inputs: none (trigger/start node)"));
    assert!(guide.contains("- Outputs: main"));
    // No inputs means no "accepts input" section at all.
    assert!(!guide.contains("### Accepts input from"));
    assert!(guide.contains("### Connects to"));
    assert!(guide.contains("- **HTTP Request** — via main"));
    assert!(guide.contains("- **Slack** — via main"));
}

#[test]
fn test_guide_accepts_input_sorted_by_score() {
    let catalog = create_basic_catalog();
    let analyzer = Analyzer::builder(catalog).build();
    let matrix = analyzer.build_matrix();

    let http = analyzer.catalog().find("n8n-nodes-base.httpRequest").unwrap();
    let guide = node_connection_guide(http, &matrix, analyzer.catalog(), 10);

    assert!(guide.contains("### Accepts input from"));
    // The webhook scores 70 into this node, Slack only 50.
    let webhook_pos = guide.find("- **Webhook** — via main").unwrap();
    let slack_pos = guide.find("- **Slack** — via main").unwrap();
    assert!(webhook_pos < slack_pos);
}

#[test]
fn test_guide_respects_limit() {
    let catalog = NodeCatalog::new(vec![
        node("w", "Webhook", &[], &["main"], "trigger"),
        node("a", "Action A", &["main"], &["main"], "action"),
        node("b", "Action B", &["main"], &["main"], "action"),
        node("c", "Action C", &["main"], &["main"], "action"),
    ]);
    let analyzer = Analyzer::builder(catalog).build();
    let matrix = analyzer.build_matrix();

    let webhook = analyzer.catalog().find("w").unwrap();
    let guide = node_connection_guide(webhook, &matrix, analyzer.catalog(), 2);

    assert!(guide.contains("- **Action A** — via main"));
    assert!(guide.contains("- **Action B** — via main"));
    assert!(!guide.contains("- **Action C** — via main"));
}

#[test]
fn test_guide_does_not_accept_input_message() {
    let catalog = NodeCatalog::new(vec![
        node("lonely", "Lonely", &["main"], &[], "action"),
        node("mute", "Mute", &[], &[], "action"),
    ]);
    let analyzer = Analyzer::builder(catalog).build();
    let matrix = analyzer.build_matrix();

    let lonely = analyzer.catalog().find("lonely").unwrap();
    let guide = node_connection_guide(lonely, &matrix, analyzer.catalog(), 10);

    assert!(guide.contains("This node does not accept input from other nodes."));
    // No outputs, so no downstream section either.
    assert!(!guide.contains("### Connects to"));
}

#[test]
fn test_guide_silently_drops_stale_targets() {
    // Matrix built over the full catalog, guide rendered against a filtered
    // node list missing one target.
    let full = NodeCatalog::new(vec![
        node("w", "Webhook", &[], &["main"], "trigger"),
        node("a", "Action A", &["main"], &["main"], "action"),
        node("ghost", "Ghost", &["main"], &["main"], "action"),
    ]);
    let matrix = Analyzer::builder(full).build().build_matrix();

    let filtered = NodeCatalog::new(vec![
        node("w", "Webhook", &[], &["main"], "trigger"),
        node("a", "Action A", &["main"], &["main"], "action"),
    ]);
    let webhook = filtered.find("w").unwrap();
    let guide = node_connection_guide(webhook, &matrix, &filtered, 10);

    assert!(guide.contains("- **Action A** — via main"));
    assert!(!guide.contains("Ghost"));
}

#[test]
fn test_guide_known_output_branches() {
    let mut if_node = node("n8n-nodes-base.if", "IF", &["main"], &["main"], "action");
    if_node.output_count = 2;
    if_node.is_multi_output = true;
    if_node.output_names = vec!["true".to_string(), "false".to_string()];

    let catalog = NodeCatalog::new(vec![if_node]);
    let analyzer = Analyzer::builder(catalog).build();
    let matrix = analyzer.build_matrix();

    let if_node = analyzer.catalog().find("n8n-nodes-base.if").unwrap();
    let guide = node_connection_guide(if_node, &matrix, analyzer.catalog(), 10);

    assert!(guide.contains("- Output branches:"));
    assert!(guide.contains("  - `true`: Items that matched the condition"));
    assert!(guide.contains("  - `false`: Items that did not match the condition"));
}

#[test]
fn test_guide_unknown_output_branch_has_no_description() {
    let mut branchy = node("custom.branchy", "Branchy", &["main"], &["main"], "action");
    branchy.output_count = 2;
    branchy.output_names = vec!["weird".to_string(), "normal".to_string()];

    let catalog = NodeCatalog::new(vec![branchy]);
    let analyzer = Analyzer::builder(catalog).build();
    let matrix = analyzer.build_matrix();

    let branchy = analyzer.catalog().find("custom.branchy").unwrap();
    let guide = node_connection_guide(branchy, &matrix, analyzer.catalog(), 10);

    assert!(guide.contains("  - `weird`\n"));
    assert!(!guide.contains("`weird`:"));
}

#[test]
fn test_guide_special_input_requirements() {
    let catalog = create_ai_catalog();
    let analyzer = Analyzer::builder(catalog).build();
    let matrix = analyzer.build_matrix();

    let agent = analyzer.catalog().find("langchain.agent").unwrap();
    let guide = node_connection_guide(agent, &matrix, analyzer.catalog(), 10);

    assert!(guide.contains("### Special input requirements"));
    assert!(guide.contains("- Language Model (required)"));
    assert!(guide.contains("- Tool (optional, multiple allowed)"));
    assert!(guide.contains("- Memory (optional, multiple allowed)"));
}

#[test]
fn test_guide_unlisted_ai_channel_is_optional() {
    let catalog = NodeCatalog::new(vec![node(
        "custom.parserConsumer",
        "Parser Consumer",
        &["main", "ai_outputParser"],
        &["main"],
        "ai",
    )]);
    let analyzer = Analyzer::builder(catalog).build();
    let matrix = analyzer.build_matrix();

    let consumer = analyzer.catalog().find("custom.parserConsumer").unwrap();
    let guide = node_connection_guide(consumer, &matrix, analyzer.catalog(), 10);

    assert!(guide.contains("- Output Parser (optional)"));
}

#[test]
fn test_guide_special_flag_without_ai_inputs_renders_nothing() {
    let mut inconsistent = node("custom.odd", "Odd", &["main"], &["main"], "action");
    // Producer inconsistency: flag set, but no ai_ input declared.
    inconsistent.requires_special_inputs = true;

    let catalog = NodeCatalog::new(vec![inconsistent]);
    let analyzer = Analyzer::builder(catalog).build();
    let matrix = analyzer.build_matrix();

    let odd = analyzer.catalog().find("custom.odd").unwrap();
    let guide = node_connection_guide(odd, &matrix, analyzer.catalog(), 10);

    assert!(!guide.contains("### Special input requirements"));
}

#[test]
fn test_matrix_table_symbols() {
    let catalog = create_basic_catalog();
    let analyzer = Analyzer::builder(catalog).build();
    let matrix = analyzer.build_matrix();

    let table = compatibility_matrix_table(&matrix, analyzer.catalog(), 30);

    assert!(table.contains("| From \\ To | Webhook | HTTP Request | Slack |"));
    // Trigger rows score 70 into both actions.
    assert!(table.contains("| Webhook | - | ++ | ++ |"));
    // Actions cannot feed the webhook (X) and score 50 into each other (+).
    assert!(table.contains("| HTTP Request | X | - | + |"));
    assert!(table.contains("| Slack | X | + | - |"));
    assert!(table.contains("- `X`: no compatible connection"));
}

#[test]
fn test_matrix_table_weak_bucket() {
    let catalog = NodeCatalog::new(vec![
        node("src", "Source", &[], &["binary"], "action"),
        node("dst", "Destination", &["binary"], &[], "action"),
    ]);
    let weights = ScoringWeights {
        other: 49,
        ..ScoringWeights::default()
    };
    let analyzer = Analyzer::builder(catalog).with_weights(weights).build();
    let matrix = analyzer.build_matrix();

    let table = compatibility_matrix_table(&matrix, analyzer.catalog(), 30);
    assert!(table.contains("| Source | - | ~ |"));
}

#[test]
fn test_matrix_table_respects_top_n() {
    let catalog = create_basic_catalog();
    let analyzer = Analyzer::builder(catalog).build();
    let matrix = analyzer.build_matrix();

    let table = compatibility_matrix_table(&matrix, analyzer.catalog(), 2);
    assert!(table.contains("| From \\ To | Webhook | HTTP Request |"));
    assert!(!table.contains("Slack"));
}

#[test]
fn test_matrix_table_truncates_names() {
    let catalog = NodeCatalog::new(vec![
        // 13 characters: header cell keeps 10 and appends the 2-char marker.
        node("long", "ABCDEFGHIJKLM", &["main"], &["main"], "action"),
        // 21 characters: row label keeps 18 and appends the marker.
        node("longer", "ABCDEFGHIJKLMNOPQRSTU", &["main"], &["main"], "action"),
    ]);
    let analyzer = Analyzer::builder(catalog).build();
    let matrix = analyzer.build_matrix();

    let table = compatibility_matrix_table(&matrix, analyzer.catalog(), 30);

    // Both header cells truncate to 12 characters total.
    assert!(table.contains("| From \\ To | ABCDEFGHIJ.. | ABCDEFGHIJ.. |"));
    // The 13-char name fits the 20-char row label untruncated; the 21-char
    // name keeps 18 characters plus the marker.
    assert!(table.contains("| ABCDEFGHIJKLM |"));
    assert!(table.contains("| ABCDEFGHIJKLMNOPQR.. |"));
}

#[test]
fn test_matrix_table_over_empty_catalog() {
    let matrix = Analyzer::builder(NodeCatalog::default()).build().build_matrix();
    let table = compatibility_matrix_table(&matrix, &NodeCatalog::default(), 30);

    assert!(table.contains("## Node Compatibility Matrix"));
    assert!(table.contains("| From \\ To |\n|---|\n"));
    assert!(table.contains("Legend:"));
    // No data rows at all.
    assert!(!table.contains("| - |"));
}
