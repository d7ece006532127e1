use crate::catalog::{CONNECTION_MAIN, NodeConnectionInfo, is_ai_type};
use crate::matrix::CompatibilityEntry;
use itertools::Itertools;

/// Reason reported for pairs that share no connection type.
pub(super) const NO_MATCH_REASON: &str = "no matching connection type";

/// Reason fragment appended when the trigger bonus applies.
pub(super) const TRIGGER_BONUS_REASON: &str = "trigger → processing node";

/// Score contribution of each matched connection type, plus pairing bonuses.
///
/// The defaults are the scores used by the documentation pipeline; overriding
/// them is mostly useful for experiments and for exercising every render
/// bucket in tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoringWeights {
    /// Points for a matched `main` connection.
    pub main: u32,
    /// Points for a matched `ai_*` capability channel.
    pub ai: u32,
    /// Points for any other matched connection type.
    pub other: u32,
    /// Extra points when a trigger feeds `main` into a non-trigger node.
    pub trigger_bonus: u32,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            main: 50,
            ai: 70,
            other: 60,
            trigger_bonus: 20,
        }
    }
}

impl ScoringWeights {
    fn weight_for(&self, connection_type: &str) -> u32 {
        if connection_type == CONNECTION_MAIN {
            self.main
        } else if is_ai_type(connection_type) {
            self.ai
        } else {
            self.other
        }
    }
}

/// Evaluates a single ordered (source, target) pair.
///
/// Matching is purely type-level: a connection type counts once when it
/// appears in both the source's outputs and the target's inputs, in
/// source-output declaration order. Empty or malformed port lists simply
/// produce no matches.
pub(super) fn score_pair(
    source: &NodeConnectionInfo,
    target: &NodeConnectionInfo,
    weights: &ScoringWeights,
) -> CompatibilityEntry {
    let matching_types: Vec<String> = source
        .output_types
        .iter()
        .filter(|t| target.input_types.contains(t))
        .cloned()
        .collect();

    if matching_types.is_empty() {
        return CompatibilityEntry {
            target_node: target.node_type.clone(),
            score: 0,
            reason: NO_MATCH_REASON.to_string(),
            connection_types: Vec::new(),
        };
    }

    let mut score = 0;
    let mut fragments = Vec::with_capacity(matching_types.len() + 1);
    for connection_type in &matching_types {
        score += weights.weight_for(connection_type);
        // The matched type is restated on both sides on purpose; downstream
        // rendered docs depend on this exact phrasing.
        fragments.push(format!("{} → {}", connection_type, connection_type));
    }

    let main_matched = matching_types.iter().any(|t| t == CONNECTION_MAIN);
    if main_matched && source.is_trigger() && !target.is_trigger() {
        score += weights.trigger_bonus;
        fragments.push(TRIGGER_BONUS_REASON.to_string());
    }

    CompatibilityEntry {
        target_node: target.node_type.clone(),
        score,
        reason: fragments.iter().join(", "),
        connection_types: matching_types,
    }
}
