//! # Haisen - Node Connection Compatibility Engine
//!
//! **Haisen** analyzes a catalog of workflow node descriptors and computes, for
//! every ordered pair of node types, whether and how well they can be wired
//! together. The result is a precomputed compatibility matrix plus Markdown
//! renderers that turn it into navigable documentation: a per-node connection
//! guide and a pairwise compatibility overview.
//!
//! The analysis is purely static. Haisen never executes a workflow; it reasons
//! only about the connection types each node declares on its input and output
//! ports (`main` for ordinary data flow, `ai_*` for specialized capability
//! channels such as language models, tools, and memory).
//!
//! ## Core Workflow
//!
//! The engine is designed to be format-agnostic. It operates on a canonical
//! catalog of node descriptors. The primary workflow is:
//!
//! 1.  **Load Your Data**: Parse your node descriptions (e.g. a package
//!     introspection dump) into your own Rust structs, or deserialize a
//!     [`catalog::NodeCatalog`] directly from JSON.
//! 2.  **Convert to Haisen's Model**: Implement the `IntoCatalog` trait for
//!     your structs to provide a translation layer into [`catalog::NodeCatalog`].
//! 3.  **Analyze**: Use `Analyzer::builder` to build the analyzer and compute
//!     the [`matrix::CompatibilityMatrix`] once per catalog.
//! 4.  **Query and Render**: Query the matrix directly, or render connection
//!     guides and the matrix table with the functions in [`render`].
//!
//! ## Quick Start
//!
//! ```rust
//! use haisen::prelude::*;
//!
//! let catalog = NodeCatalog::new(vec![
//!     NodeConnectionInfo {
//!         node_type: "n8n-nodes-base.webhook".to_string(),
//!         display_name: "Webhook".to_string(),
//!         input_types: vec![],
//!         output_types: vec!["main".to_string()],
//!         category: "trigger".to_string(),
//!         output_count: 1,
//!         ..Default::default()
//!     },
//!     NodeConnectionInfo {
//!         node_type: "n8n-nodes-base.httpRequest".to_string(),
//!         display_name: "HTTP Request".to_string(),
//!         input_types: vec!["main".to_string()],
//!         output_types: vec!["main".to_string()],
//!         category: "action".to_string(),
//!         output_count: 1,
//!         ..Default::default()
//!     },
//! ]);
//!
//! // Build the matrix once; it is read-only afterwards.
//! let analyzer = Analyzer::builder(catalog).build();
//! let matrix = analyzer.build_matrix();
//!
//! // A trigger feeding `main` into a processing node scores 50 + 20.
//! assert_eq!(
//!     matrix.compatibility_score("n8n-nodes-base.webhook", "n8n-nodes-base.httpRequest"),
//!     70
//! );
//! // Compatibility is directional: nothing feeds into a node without inputs.
//! assert!(!matrix.is_compatible("n8n-nodes-base.httpRequest", "n8n-nodes-base.webhook"));
//!
//! // Render the per-node guide.
//! let node = analyzer.catalog().find("n8n-nodes-base.httpRequest").unwrap();
//! let guide = node_connection_guide(node, &matrix, analyzer.catalog(), 5);
//! assert!(guide.contains("Webhook"));
//! ```

pub mod analyzer;
pub mod catalog;
pub mod error;
pub mod matrix;
pub mod prelude;
pub mod render;
