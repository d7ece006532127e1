use clap::Parser;
use haisen::prelude::*;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::time::Instant;

// --- JSON Deserialization Structs (Input Format Specific) ---
// These structs match the catalog dump produced by the node introspection
// pipeline and are only used here for conversion.

#[derive(Deserialize)]
struct RawCatalog {
    nodes: Vec<RawNode>,
}

#[derive(Deserialize)]
struct RawNode {
    #[serde(alias = "nodeType")]
    node_type: String,
    #[serde(alias = "displayName")]
    display_name: String,
    #[serde(default)]
    inputs: Vec<String>,
    #[serde(default)]
    outputs: Vec<String>,
    #[serde(default)]
    category: Option<String>,
    #[serde(default, alias = "outputCount")]
    output_count: Option<usize>,
    #[serde(default, alias = "outputNames")]
    output_names: Vec<String>,
    #[serde(default, alias = "isDynamicOutput")]
    is_dynamic_output: bool,
}

// --- Converter Implementation ---
// This implements the conversion from the raw JSON model to Haisen's
// canonical NodeCatalog.

impl IntoCatalog for RawCatalog {
    fn into_catalog(self) -> Result<NodeCatalog, CatalogConversionError> {
        let mut nodes = Vec::with_capacity(self.nodes.len());
        for raw_node in self.nodes {
            if raw_node.node_type.is_empty() {
                return Err(CatalogConversionError::ValidationError(
                    "catalog contains a node with an empty nodeType".to_string(),
                ));
            }

            let output_count = raw_node
                .output_count
                .unwrap_or_else(|| raw_node.outputs.len().max(raw_node.output_names.len()));

            nodes.push(NodeConnectionInfo {
                requires_special_inputs: raw_node.inputs.iter().any(|t| is_ai_type(t)),
                is_multi_input: raw_node.inputs.len() > 1,
                is_multi_output: output_count > 1,
                node_type: raw_node.node_type,
                display_name: raw_node.display_name,
                input_types: raw_node.inputs,
                output_types: raw_node.outputs,
                category: raw_node.category.unwrap_or_default(),
                output_count,
                output_names: raw_node.output_names,
                is_dynamic_output: raw_node.is_dynamic_output,
            });
        }

        Ok(NodeCatalog::new(nodes))
    }
}

/// A node connection compatibility analysis and documentation CLI
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the node catalog JSON file
    catalog_path: String,

    /// Directory to write the generated Markdown files to
    #[arg(short, long, default_value = "docs/connections")]
    output_dir: String,

    /// Maximum recommendations per section in each node guide
    #[arg(long, default_value_t = 10)]
    limit: usize,

    /// Number of catalog nodes included in the matrix table
    #[arg(long, default_value_t = 30)]
    top: usize,

    /// Optional path to persist the compiled catalog artifact
    #[arg(long)]
    artifact: Option<String>,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let total_start = Instant::now();

    // --- 1. File Loading and Conversion ---
    let catalog_json = fs::read_to_string(&cli.catalog_path).unwrap_or_else(|e| {
        exit_with_error(&format!(
            "Failed to read catalog file '{}': {}",
            &cli.catalog_path, e
        ))
    });
    let raw_catalog: RawCatalog = serde_json::from_str(&catalog_json)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to parse catalog JSON: {}", e)));
    let catalog = raw_catalog
        .into_catalog()
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to convert catalog: {}", e)));

    println!("Loaded catalog with {} node types.", catalog.len());

    // --- 2. Compatibility Analysis ---
    let analysis_start = Instant::now();
    let analyzer = Analyzer::builder(catalog).build();
    let matrix = analyzer.build_matrix();
    let analysis_duration = analysis_start.elapsed();

    println!(
        "Compatibility matrix built for {} nodes in {:?}",
        matrix.len(),
        analysis_duration
    );

    // --- 3. Markdown Rendering ---
    let out_dir = Path::new(&cli.output_dir);
    fs::create_dir_all(out_dir).unwrap_or_else(|e| {
        exit_with_error(&format!(
            "Failed to create output directory '{}': {}",
            &cli.output_dir, e
        ))
    });

    for node in analyzer.catalog().iter() {
        let guide = node_connection_guide(node, &matrix, analyzer.catalog(), cli.limit);
        let file_path = out_dir.join(format!("{}.md", sanitize_filename(&node.node_type)));
        fs::write(&file_path, guide).unwrap_or_else(|e| {
            exit_with_error(&format!(
                "Failed to write guide '{}': {}",
                file_path.display(),
                e
            ))
        });
    }

    let table = compatibility_matrix_table(&matrix, analyzer.catalog(), cli.top);
    let table_path = out_dir.join("compatibility-matrix.md");
    fs::write(&table_path, table).unwrap_or_else(|e| {
        exit_with_error(&format!(
            "Failed to write matrix table '{}': {}",
            table_path.display(),
            e
        ))
    });

    // --- 4. Optional Artifact Persistence ---
    if let Some(artifact_path) = &cli.artifact {
        let node_count = analyzer.catalog().len();
        let compiled = CompiledCatalog::new(analyzer.catalog().clone(), matrix);
        compiled.save(artifact_path).unwrap_or_else(|e| {
            exit_with_error(&format!(
                "Failed to save artifact '{}': {}",
                artifact_path, e
            ))
        });
        println!("Saved compiled catalog ({} nodes) to '{}'", node_count, artifact_path);
    }

    println!(
        "Done. Wrote {} node guides and the matrix table to '{}' in {:?}",
        analyzer.catalog().len(),
        &cli.output_dir,
        total_start.elapsed()
    );
}

/// Maps a node type identifier to a safe file name.
fn sanitize_filename(node_type: &str) -> String {
    node_type
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '_' })
        .collect()
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("Error: {}", message);
    std::process::exit(1);
}
