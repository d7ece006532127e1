use crate::catalog::NodeCatalog;
use crate::matrix::CompatibilityMatrix;
use std::fmt::Write;

/// Column width for target node names in the table header.
const TARGET_NAME_WIDTH: usize = 12;

/// Width for source node names in the leading column.
const SOURCE_NAME_WIDTH: usize = 20;

/// Two-character marker appended to truncated names.
const ELLIPSIS: &str = "..";

/// Renders the pairwise compatibility matrix as a Markdown table.
///
/// The first `top_n` catalog nodes become both the rows and the columns, in
/// catalog order; callers that want the most important nodes first pre-sort
/// the catalog before calling. Each cell summarizes one ordered pair with a
/// legend symbol.
pub fn compatibility_matrix_table(
    matrix: &CompatibilityMatrix,
    catalog: &NodeCatalog,
    top_n: usize,
) -> String {
    let selected = &catalog.nodes[..catalog.nodes.len().min(top_n)];

    let mut output = String::new();
    writeln!(&mut output, "## Node Compatibility Matrix\n").unwrap();

    let mut header = String::from("| From \\ To |");
    let mut separator = String::from("|---|");
    for target in selected {
        write!(
            &mut header,
            " {} |",
            truncate_name(&target.display_name, TARGET_NAME_WIDTH)
        )
        .unwrap();
        separator.push_str("---|");
    }
    writeln!(&mut output, "{}", header).unwrap();
    writeln!(&mut output, "{}", separator).unwrap();

    for source in selected {
        write!(
            &mut output,
            "| {} |",
            truncate_name(&source.display_name, SOURCE_NAME_WIDTH)
        )
        .unwrap();
        for target in selected {
            let symbol = if source.node_type == target.node_type {
                "-"
            } else {
                let score = matrix.compatibility_score(&source.node_type, &target.node_type);
                if score == 0 { "X" } else { score_symbol(score) }
            };
            write!(&mut output, " {} |", symbol).unwrap();
        }
        writeln!(&mut output).unwrap();
    }

    writeln!(&mut output, "\nLegend:\n").unwrap();
    writeln!(&mut output, "- `++`: strong match (score 70 or higher)").unwrap();
    writeln!(&mut output, "- `+`: standard match (score 50 to 69)").unwrap();
    writeln!(&mut output, "- `~`: weak match (score below 50)").unwrap();
    writeln!(&mut output, "- `X`: no compatible connection").unwrap();
    writeln!(&mut output, "- `-`: same node").unwrap();

    output
}

/// Buckets a nonzero compatibility score into its legend symbol.
fn score_symbol(score: u32) -> &'static str {
    if score >= 70 {
        "++"
    } else if score >= 50 {
        "+"
    } else {
        "~"
    }
}

/// Truncates a display name to `max_length` characters, replacing the tail
/// with a two-character marker. Names that already fit are returned unchanged.
fn truncate_name(name: &str, max_length: usize) -> String {
    if name.chars().count() <= max_length {
        return name.to_string();
    }
    let kept: String = name.chars().take(max_length - ELLIPSIS.len()).collect();
    format!("{}{}", kept, ELLIPSIS)
}
