//! The compatibility matrix: the precomputed, queryable index of every
//! ordered node-pair's compatibility.

use crate::catalog::ConnectionType;
use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// The result of evaluating one ordered (source, target) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompatibilityEntry {
    /// The target's node type identifier.
    pub target_node: String,
    /// Connection quality. `0` means incompatible.
    pub score: u32,
    /// Human-readable justification for the score.
    pub reason: String,
    /// The connection types shared by the source's outputs and the target's
    /// inputs, in source-output declaration order.
    pub connection_types: Vec<ConnectionType>,
}

/// Both halves of one source node's pairing results.
///
/// `compatible` is sorted descending by score; equal scores keep the target
/// iteration order of the catalog the matrix was built from. `Vec` keeps that
/// ordering stable, which a hash-keyed container would not.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NodeCompatibility {
    /// Entries with a score above zero, best first.
    pub compatible: Vec<CompatibilityEntry>,
    /// Entries with a score of zero.
    pub incompatible: Vec<CompatibilityEntry>,
}

/// Maps every analyzed node type to its pairing results.
///
/// Built once per catalog by the analyzer and read-only afterwards. Lookups
/// for node types absent from the catalog return "no data" rather than an
/// error. Rendering always iterates the caller's catalog order, so the map's
/// own iteration order is never observable in output.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompatibilityMatrix {
    entries: AHashMap<String, NodeCompatibility>,
}

impl CompatibilityMatrix {
    pub(crate) fn insert(&mut self, node_type: String, compatibility: NodeCompatibility) {
        self.entries.insert(node_type, compatibility);
    }

    /// Returns the full pairing results for a node type, if it was analyzed.
    pub fn get(&self, node_type: &str) -> Option<&NodeCompatibility> {
        self.entries.get(node_type)
    }

    /// Returns the best `limit` compatible targets for a node type.
    ///
    /// The returned slice is already sorted descending by score. Unknown node
    /// types yield an empty slice.
    pub fn recommended_connections(&self, node_type: &str, limit: usize) -> &[CompatibilityEntry] {
        match self.entries.get(node_type) {
            Some(compatibility) => {
                let end = compatibility.compatible.len().min(limit);
                &compatibility.compatible[..end]
            }
            None => &[],
        }
    }

    /// Returns `true` if `target_type` appears among `source_type`'s
    /// compatible targets. Unknown sources are not an error; they are simply
    /// never compatible.
    pub fn is_compatible(&self, source_type: &str, target_type: &str) -> bool {
        self.entries
            .get(source_type)
            .is_some_and(|c| c.compatible.iter().any(|e| e.target_node == target_type))
    }

    /// Returns the score for wiring `source_type` into `target_type`, or `0`
    /// when the pair is incompatible or the source was never analyzed.
    pub fn compatibility_score(&self, source_type: &str, target_type: &str) -> u32 {
        self.entries
            .get(source_type)
            .and_then(|c| c.compatible.iter().find(|e| e.target_node == target_type))
            .map_or(0, |e| e.score)
    }

    /// Number of analyzed node types.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
