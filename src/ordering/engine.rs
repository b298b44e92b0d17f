//! Validation and constrained topological sort.

use super::config::{EngineConfig, PositionLookup, TieBreak};
use super::types::{Outcome, Unsatisfiable, Violation};
use crate::rules::{NodeId, Rule, RuleSet};
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use std::collections::{BTreeSet, HashMap, VecDeque};
use tracing::{debug, trace, warn};

/// Validates updates against a [`RuleSet`] and reorders the invalid ones.
///
/// The engine only borrows the rules; every query builds its own scratch
/// state, so one engine can serve many threads at once.
///
/// # Examples
///
/// ```
/// use u_precedence::ordering::OrderingEngine;
/// use u_precedence::rules::RuleSet;
///
/// let rules = RuleSet::from_pairs([(97, 75), (75, 47), (47, 61)]);
/// let engine = OrderingEngine::new(&rules);
///
/// assert!(!engine.is_valid(&[75, 97, 47, 61]));
/// assert_eq!(engine.canonical_order(&[75, 97, 47, 61]).unwrap(), vec![97, 75, 47, 61]);
/// ```
#[derive(Debug, Clone)]
pub struct OrderingEngine<'r> {
    rules: &'r RuleSet,
    config: EngineConfig,
}

impl<'r> OrderingEngine<'r> {
    /// Creates an engine with the default configuration.
    pub fn new(rules: &'r RuleSet) -> Self {
        Self {
            rules,
            config: EngineConfig::default(),
        }
    }

    /// Replaces the configuration.
    ///
    /// # Panics
    /// Panics if the configuration is invalid (call [`EngineConfig::validate`]
    /// first to get a descriptive error).
    pub fn with_config(mut self, config: EngineConfig) -> Self {
        config.validate().expect("invalid EngineConfig");
        self.config = config;
        self
    }

    /// The rules this engine checks against.
    pub fn rules(&self) -> &'r RuleSet {
        self.rules
    }

    /// The active configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns the first rule, in rule order, that `update` breaks.
    ///
    /// A rule `b|a` is broken when both endpoints occur in `update` and the
    /// first occurrence of `b` lies after the first occurrence of `a`. Rules
    /// with an endpoint missing from the update are skipped.
    pub fn first_violation(&self, update: &[NodeId]) -> Option<Violation> {
        match self.config.position_lookup {
            PositionLookup::Indexed => {
                let mut index: HashMap<NodeId, usize> = HashMap::with_capacity(update.len());
                for (pos, &node) in update.iter().enumerate() {
                    index.entry(node).or_insert(pos);
                }
                self.scan_rules(|n| index.get(&n).copied())
            }
            PositionLookup::LinearScan => {
                self.scan_rules(|n| update.iter().position(|&x| x == n))
            }
        }
    }

    fn scan_rules(&self, position: impl Fn(NodeId) -> Option<usize>) -> Option<Violation> {
        self.rules.rules().iter().find_map(|&rule: &Rule| {
            let before_pos = position(rule.before)?;
            let after_pos = position(rule.after)?;
            (before_pos > after_pos).then(|| {
                trace!(%rule, before_pos, after_pos, "rule violated");
                Violation {
                    rule,
                    before_pos,
                    after_pos,
                }
            })
        })
    }

    /// Whether `update` satisfies every applicable rule.
    ///
    /// This is a pairwise check; it does not detect cyclic rule sets.
    pub fn is_valid(&self, update: &[NodeId]) -> bool {
        self.first_violation(update).is_none()
    }

    /// Produces a total order over the distinct nodes of `update` that
    /// satisfies every rule applicable within it.
    ///
    /// Uses Kahn's algorithm on the rules restricted to the update's node
    /// set. Nodes left unconstrained relative to each other are ordered by
    /// the configured [`TieBreak`]. Valid updates may be reordered too.
    ///
    /// # Errors
    /// Returns [`Unsatisfiable`] when the restricted rules contain a cycle.
    pub fn canonical_order(&self, update: &[NodeId]) -> Result<Vec<NodeId>, Unsatisfiable> {
        let nodes: BTreeSet<NodeId> = update.iter().copied().collect();
        let graph = self.rules.restrict_to(&nodes);
        debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "sorting restricted graph"
        );

        let mut in_degree = graph.in_degrees().clone();
        let mut ready: VecDeque<NodeId> = match self.config.tie_break {
            TieBreak::Ascending => graph.sources().collect(),
            TieBreak::FirstSeen => {
                let mut seen = BTreeSet::new();
                update
                    .iter()
                    .copied()
                    .filter(|&n| seen.insert(n) && graph.in_degree(n) == Some(0))
                    .collect()
            }
        };

        let mut order = Vec::with_capacity(graph.node_count());
        while let Some(node) = ready.pop_front() {
            order.push(node);
            for succ in graph.successors(node) {
                if let Some(d) = in_degree.get_mut(&succ) {
                    *d -= 1;
                    if *d == 0 {
                        ready.push_back(succ);
                    }
                }
            }
        }

        if order.len() == graph.node_count() {
            Ok(order)
        } else {
            Err(Unsatisfiable {
                ordered: order.len(),
                total: graph.node_count(),
                blocked: in_degree
                    .into_iter()
                    .filter(|&(_, d)| d > 0)
                    .map(|(n, _)| n)
                    .collect(),
            })
        }
    }

    /// Validates `update` and reorders it if it breaks a rule.
    pub fn evaluate(&self, update: &[NodeId]) -> Outcome {
        let Some(violation) = self.first_violation(update) else {
            return Outcome::Valid;
        };
        debug!(rule = %violation.rule, len = update.len(), "reordering invalid update");
        match self.canonical_order(update) {
            Ok(order) => Outcome::Corrected(order),
            Err(err) => {
                warn!(%err, "update cannot be reordered");
                Outcome::Unsatisfiable(err)
            }
        }
    }

    /// Evaluates a batch of updates. Outcomes are returned in input order.
    ///
    /// With the `parallel` feature, batches of at least
    /// [`EngineConfig::min_parallel_batch`] updates are spread across rayon
    /// workers when [`EngineConfig::parallel`] is set.
    pub fn evaluate_all<U>(&self, updates: &[U]) -> Vec<Outcome>
    where
        U: AsRef<[NodeId]> + Sync,
    {
        #[cfg(feature = "parallel")]
        {
            if self.config.parallel && updates.len() >= self.config.min_parallel_batch {
                return updates
                    .par_iter()
                    .map(|u| self.evaluate(u.as_ref()))
                    .collect();
            }
        }

        updates.iter().map(|u| self.evaluate(u.as_ref())).collect()
    }
}

/// Whether `update` satisfies every rule of `rules` that applies to it.
///
/// Shorthand for [`OrderingEngine::is_valid`] with the default configuration.
pub fn is_valid(update: &[NodeId], rules: &RuleSet) -> bool {
    OrderingEngine::new(rules).is_valid(update)
}

/// Reorders `update` to satisfy every applicable rule of `rules`.
///
/// Shorthand for [`OrderingEngine::canonical_order`] with the default
/// configuration (ascending tie-break).
pub fn canonical_order(update: &[NodeId], rules: &RuleSet) -> Result<Vec<NodeId>, Unsatisfiable> {
    OrderingEngine::new(rules).canonical_order(update)
}
