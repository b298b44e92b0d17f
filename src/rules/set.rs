//! Immutable rule collection.

use super::graph::RestrictedGraph;
use super::types::{NodeId, Rule};
use std::collections::BTreeSet;

/// An immutable collection of ordering rules.
///
/// Rules keep the order they were supplied in; that order decides which
/// violation [`OrderingEngine::first_violation`](crate::ordering::OrderingEngine::first_violation)
/// reports. A `RuleSet` is `Send + Sync` and can be shared across threads
/// without synchronization.
///
/// # Examples
///
/// ```
/// use u_precedence::rules::RuleSet;
///
/// let rules = RuleSet::from_pairs([(47, 53), (97, 13), (97, 47)]);
/// let graph = rules.restrict_to(&[97, 47, 53].into_iter().collect());
/// assert_eq!(graph.edge_count(), 2);
/// assert!(graph.contains_edge(97, 47));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    /// Creates a rule set from a list of rules.
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    /// Creates a rule set from `(before, after)` pairs.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (NodeId, NodeId)>,
    {
        pairs.into_iter().map(Rule::from).collect()
    }

    /// Returns the rules in insertion order.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the set contains no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Every node mentioned by at least one rule, ascending.
    pub fn nodes(&self) -> BTreeSet<NodeId> {
        self.rules
            .iter()
            .flat_map(|r| [r.before, r.after])
            .collect()
    }

    /// Rules whose endpoints are both members of `nodes`.
    pub fn applicable<'a>(
        &'a self,
        nodes: &'a BTreeSet<NodeId>,
    ) -> impl Iterator<Item = &'a Rule> + 'a {
        self.rules
            .iter()
            .filter(move |r| nodes.contains(&r.before) && nodes.contains(&r.after))
    }

    /// Builds the subgraph induced by `nodes`.
    ///
    /// The graph contains every node of `nodes` and an edge `b → a` for each
    /// rule `b|a` with both endpoints in `nodes`. An empty rule set or an
    /// empty node set yields a graph without edges.
    pub fn restrict_to(&self, nodes: &BTreeSet<NodeId>) -> RestrictedGraph {
        let mut graph = RestrictedGraph::with_nodes(nodes);
        for rule in &self.rules {
            graph.add_rule(rule);
        }
        graph
    }
}

impl FromIterator<Rule> for RuleSet {
    fn from_iter<T: IntoIterator<Item = Rule>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl From<Vec<Rule>> for RuleSet {
    fn from(rules: Vec<Rule>) -> Self {
        Self::new(rules)
    }
}

impl<'a> IntoIterator for &'a RuleSet {
    type Item = &'a Rule;
    type IntoIter = std::slice::Iter<'a, Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}
