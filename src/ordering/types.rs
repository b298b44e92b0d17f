//! Query results and the unsatisfiable-order error.

use crate::rules::{NodeId, Rule};

/// A rule broken by an update, with the first-occurrence positions of
/// both endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Violation {
    /// The broken rule.
    pub rule: Rule,
    /// Position of `rule.before` in the update.
    pub before_pos: usize,
    /// Position of `rule.after` in the update. Always less than `before_pos`.
    pub after_pos: usize,
}

/// No total order over the update satisfies every applicable rule.
///
/// The rules restricted to the update's nodes contain a cycle. This is a
/// property of the input and is never retried.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[error("applicable rules contain a cycle: ordered {ordered} of {total} nodes, blocked {blocked:?}")]
pub struct Unsatisfiable {
    /// Nodes placed before the ready queue ran dry.
    pub ordered: usize,
    /// Distinct nodes in the update.
    pub total: usize,
    /// Nodes whose in-degree never reached zero, ascending.
    pub blocked: Vec<NodeId>,
}

/// Result of evaluating one update.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    /// The update already satisfies every applicable rule.
    Valid,
    /// The update broke a rule; this is a rule-consistent reordering.
    Corrected(Vec<NodeId>),
    /// The update broke a rule and cannot be reordered.
    Unsatisfiable(Unsatisfiable),
}

impl Outcome {
    /// Whether the update was valid as given.
    pub fn is_valid(&self) -> bool {
        matches!(self, Outcome::Valid)
    }

    /// The rule-consistent sequence for this update, if one exists.
    ///
    /// For [`Outcome::Valid`] that is `original` itself.
    pub fn ordered<'a>(&'a self, original: &'a [NodeId]) -> Option<&'a [NodeId]> {
        match self {
            Outcome::Valid => Some(original),
            Outcome::Corrected(order) => Some(order),
            Outcome::Unsatisfiable(_) => None,
        }
    }
}
