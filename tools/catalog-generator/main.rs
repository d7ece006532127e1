use clap::Parser;
use haisen::prelude::*;
use rand::Rng;
use rand::rngs::ThreadRng;
use std::fs;

/// A CLI tool to generate sample node catalogs for the Haisen analyzer
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The path to write the generated JSON file to
    #[arg(short, long, default_value = "generated_catalog.json")]
    output: String,

    /// The number of node types to generate
    #[arg(long, default_value_t = 50)]
    count: usize,

    /// Fraction of generated nodes that are triggers, in percent
    #[arg(long, default_value_t = 20)]
    trigger_percent: u32,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut rng = rand::rng();

    if cli.trigger_percent > 100 {
        eprintln!(
            "Error: --trigger-percent ({}) cannot exceed 100",
            cli.trigger_percent
        );
        std::process::exit(1);
    }

    println!(
        "Generating a catalog of {} node types ({}% triggers)...",
        cli.count, cli.trigger_percent
    );

    let nodes: Vec<NodeConnectionInfo> = (0..cli.count)
        .map(|i| generate_node(&mut rng, i, cli.trigger_percent))
        .collect();
    let catalog = NodeCatalog::new(nodes);

    let json_output = serde_json::to_string_pretty(&catalog)?;
    fs::write(&cli.output, json_output)?;

    println!(
        "Successfully generated and saved the catalog to '{}'",
        cli.output
    );

    Ok(())
}

/// Generates one synthetic node descriptor.
fn generate_node(rng: &mut ThreadRng, index: usize, trigger_percent: u32) -> NodeConnectionInfo {
    let is_trigger = rng.random_range(0..100) < trigger_percent;
    let is_ai = !is_trigger && rng.random_range(0..100) < 15;

    let (category, input_types, output_types): (&str, Vec<String>, Vec<String>) = if is_trigger {
        ("trigger", vec![], vec!["main".to_string()])
    } else if is_ai {
        (
            "ai",
            vec![
                "main".to_string(),
                "ai_languageModel".to_string(),
                "ai_tool".to_string(),
            ],
            vec!["main".to_string()],
        )
    } else {
        ("action", vec!["main".to_string()], vec!["main".to_string()])
    };

    let output_count = if !is_trigger && rng.random_range(0..100) < 10 {
        2
    } else {
        1
    };

    NodeConnectionInfo {
        node_type: format!("haisen-generated.node{:04}", index),
        display_name: format!("Generated Node {}", index),
        is_multi_input: input_types.len() > 1,
        is_multi_output: output_count > 1,
        requires_special_inputs: input_types.iter().any(|t| is_ai_type(t)),
        input_types,
        output_types,
        category: category.to_string(),
        output_count,
        output_names: if output_count > 1 {
            vec!["true".to_string(), "false".to_string()]
        } else {
            vec![]
        },
        is_dynamic_output: false,
    }
}
