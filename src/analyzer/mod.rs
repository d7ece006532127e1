//! The compatibility analyzer: builds a [`CompatibilityMatrix`] over a node
//! catalog by scoring every ordered pair of nodes.

use crate::catalog::NodeCatalog;
use crate::matrix::{CompatibilityMatrix, NodeCompatibility};
use ahash::AHashSet;
use log::{debug, warn};

mod scoring;

pub use scoring::ScoringWeights;

use scoring::score_pair;

/// Computes node-pair compatibility over a catalog.
///
/// The analysis is a pure, single-threaded transform: identical catalogs (same
/// nodes, same field values, same order) always produce identical matrices.
/// There is no shared state between builds; callers own any caching of the
/// result.
pub struct Analyzer {
    catalog: NodeCatalog,
    weights: ScoringWeights,
}

pub struct AnalyzerBuilder {
    catalog: NodeCatalog,
    weights: ScoringWeights,
}

impl AnalyzerBuilder {
    pub fn new(catalog: NodeCatalog) -> Self {
        Self {
            catalog,
            weights: ScoringWeights::default(),
        }
    }

    /// Overrides the default scoring weights.
    pub fn with_weights(mut self, weights: ScoringWeights) -> Self {
        self.weights = weights;
        self
    }

    pub fn build(self) -> Analyzer {
        Analyzer {
            catalog: self.catalog,
            weights: self.weights,
        }
    }
}

impl Analyzer {
    pub fn builder(catalog: NodeCatalog) -> AnalyzerBuilder {
        AnalyzerBuilder::new(catalog)
    }

    pub fn catalog(&self) -> &NodeCatalog {
        &self.catalog
    }

    /// Builds the full compatibility matrix for the catalog.
    ///
    /// Every ordered pair of distinct node types is scored; per source, the
    /// results are split into compatible (score above zero, sorted descending
    /// by score, ties keeping catalog order) and incompatible (score zero).
    /// Quadratic in catalog size, which is fine for the few hundred node
    /// types this runs over at documentation build time.
    pub fn build_matrix(&self) -> CompatibilityMatrix {
        let mut seen = AHashSet::with_capacity(self.catalog.len());
        for node in self.catalog.iter() {
            if !seen.insert(node.node_type.as_str()) {
                // Caller contract violation: the catalog must be deduplicated
                // by node type. The last entry wins in the index.
                warn!("duplicate node type '{}' in catalog", node.node_type);
            }
        }

        let mut matrix = CompatibilityMatrix::default();
        let mut pairs = 0usize;

        for source in self.catalog.iter() {
            let mut compatibility = NodeCompatibility::default();
            for target in self.catalog.iter() {
                if source.node_type == target.node_type {
                    continue;
                }
                pairs += 1;
                let entry = score_pair(source, target, &self.weights);
                if entry.score > 0 {
                    compatibility.compatible.push(entry);
                } else {
                    compatibility.incompatible.push(entry);
                }
            }
            // Stable sort: equal scores keep the catalog's target order.
            compatibility
                .compatible
                .sort_by(|a, b| b.score.cmp(&a.score));
            matrix.insert(source.node_type.clone(), compatibility);
        }

        debug!(
            "built compatibility matrix: {} nodes, {} ordered pairs scored",
            self.catalog.len(),
            pairs
        );
        matrix
    }
}
