//! Middle-element aggregation over a batch of outcomes.

use crate::ordering::Outcome;
use crate::rules::NodeId;

/// Returns the middle element of `seq` (index `len / 2`), or `None` if empty.
///
/// For even lengths this is the upper of the two middle elements.
pub fn middle(seq: &[NodeId]) -> Option<NodeId> {
    seq.get(seq.len() / 2).copied()
}

/// Aggregate of one batch evaluation.
///
/// Updates that could not be reordered are counted but contribute to
/// neither sum.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Summary {
    /// Updates that were valid as given.
    pub valid_count: usize,
    /// Invalid updates that were reordered.
    pub corrected_count: usize,
    /// Invalid updates whose applicable rules contain a cycle.
    pub unsatisfiable_count: usize,
    /// Sum of middle elements of the valid updates.
    pub valid_middle_sum: u64,
    /// Sum of middle elements of the reordered updates.
    pub corrected_middle_sum: u64,
}

impl Summary {
    /// Builds a summary from updates and their outcomes (same order).
    pub fn from_outcomes<U>(updates: &[U], outcomes: &[Outcome]) -> Self
    where
        U: AsRef<[NodeId]>,
    {
        debug_assert_eq!(updates.len(), outcomes.len());

        let mut summary = Summary::default();
        for (update, outcome) in updates.iter().zip(outcomes) {
            summary.record(update.as_ref(), outcome);
        }
        summary
    }

    /// Adds one update's outcome.
    pub fn record(&mut self, update: &[NodeId], outcome: &Outcome) {
        let mid = outcome.ordered(update).and_then(middle).map_or(0, u64::from);
        match outcome {
            Outcome::Valid => {
                self.valid_count += 1;
                self.valid_middle_sum += mid;
            }
            Outcome::Corrected(_) => {
                self.corrected_count += 1;
                self.corrected_middle_sum += mid;
            }
            Outcome::Unsatisfiable(_) => self.unsatisfiable_count += 1,
        }
    }

    /// Total number of updates recorded.
    pub fn total(&self) -> usize {
        self.valid_count + self.corrected_count + self.unsatisfiable_count
    }
}
