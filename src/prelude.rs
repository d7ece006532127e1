//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and functions from the
//! haisen crate. Import this module to get access to the core functionality
//! without having to import each type individually.
//!
//! # Example
//!
//! ```rust,no_run
//! // Use the prelude to get easy access to all the core types.
//! use haisen::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! // Load a node catalog and build its compatibility matrix
//! let catalog_json = std::fs::read_to_string("path/to/catalog.json")?;
//! let catalog: NodeCatalog = serde_json::from_str(&catalog_json)?;
//!
//! let analyzer = Analyzer::builder(catalog).build();
//! let matrix = analyzer.build_matrix();
//!
//! // Render the matrix overview
//! let table = compatibility_matrix_table(&matrix, analyzer.catalog(), 30);
//! println!("{}", table);
//! # Ok(())
//! # }
//! ```

// Core analysis
pub use crate::analyzer::{Analyzer, AnalyzerBuilder, ScoringWeights};

// Matrix and entry types
pub use crate::matrix::{CompatibilityEntry, CompatibilityMatrix, NodeCompatibility};

// Catalog data structures
pub use crate::catalog::{
    CompiledCatalog, ConnectionType, IntoCatalog, NodeCatalog, NodeConnectionInfo, is_ai_type,
};

// Error types
pub use crate::error::{ArtifactError, CatalogConversionError};

// Markdown rendering
pub use crate::render::{compatibility_matrix_table, node_connection_guide, output_description};

// Result type alias for convenience. The error parameter defaults to a boxed
// error but can be overridden, so the alias also covers the crate's own error
// types when the prelude is glob-imported.
pub type Result<T, E = Box<dyn std::error::Error>> = std::result::Result<T, E>;
