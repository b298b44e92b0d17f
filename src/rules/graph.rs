//! Per-update induced rule graph.

use super::types::{NodeId, Rule};
use std::collections::{BTreeMap, BTreeSet};

/// The subgraph of a [`RuleSet`](super::RuleSet) induced by one update's nodes.
///
/// Built by [`RuleSet::restrict_to`](super::RuleSet::restrict_to) and
/// discarded after the query that needed it.
///
/// # Invariants
///
/// - The node set equals the node set handed to `restrict_to`.
/// - Every edge `b → a` corresponds to a rule `b|a` with both endpoints in
///   the node set. Duplicate rules produce a single edge; self-rules `n|n`
///   produce none.
/// - `in_degree(a)` equals the number of distinct edges ending at `a`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RestrictedGraph {
    successors: BTreeMap<NodeId, BTreeSet<NodeId>>,
    in_degree: BTreeMap<NodeId, usize>,
    edge_count: usize,
}

impl RestrictedGraph {
    /// Creates a graph with the given nodes and no edges.
    pub(crate) fn with_nodes(nodes: &BTreeSet<NodeId>) -> Self {
        Self {
            successors: nodes.iter().map(|&n| (n, BTreeSet::new())).collect(),
            in_degree: nodes.iter().map(|&n| (n, 0)).collect(),
            edge_count: 0,
        }
    }

    /// Inserts the edge for `rule` if both endpoints are nodes of the graph.
    ///
    /// Returns `true` if a new edge was added.
    pub(crate) fn add_rule(&mut self, rule: &Rule) -> bool {
        if rule.is_self_loop() || !self.in_degree.contains_key(&rule.after) {
            return false;
        }
        let Some(succ) = self.successors.get_mut(&rule.before) else {
            return false;
        };
        if !succ.insert(rule.after) {
            return false;
        }
        if let Some(d) = self.in_degree.get_mut(&rule.after) {
            *d += 1;
        }
        self.edge_count += 1;
        true
    }

    /// Returns the nodes in ascending order.
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.in_degree.keys().copied()
    }

    /// Whether `node` belongs to the graph.
    pub fn contains_node(&self, node: NodeId) -> bool {
        self.in_degree.contains_key(&node)
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.in_degree.len()
    }

    /// Number of distinct edges.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Whether the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.in_degree.is_empty()
    }

    /// Whether the edge `before → after` exists.
    pub fn contains_edge(&self, before: NodeId, after: NodeId) -> bool {
        self.successors
            .get(&before)
            .is_some_and(|s| s.contains(&after))
    }

    /// Successors of `node` in ascending order. Empty for unknown nodes.
    pub fn successors(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.successors.get(&node).into_iter().flatten().copied()
    }

    /// In-degree of `node`, or `None` if it is not part of the graph.
    pub fn in_degree(&self, node: NodeId) -> Option<usize> {
        self.in_degree.get(&node).copied()
    }

    /// All in-degrees keyed by node.
    pub fn in_degrees(&self) -> &BTreeMap<NodeId, usize> {
        &self.in_degree
    }

    /// Nodes with in-degree zero, ascending.
    pub fn sources(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.in_degree
            .iter()
            .filter(|&(_, &d)| d == 0)
            .map(|(&n, _)| n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nodes(ids: &[NodeId]) -> BTreeSet<NodeId> {
        ids.iter().copied().collect()
    }

    #[test]
    fn test_with_nodes_has_no_edges() {
        let g = RestrictedGraph::with_nodes(&nodes(&[3, 1, 2]));
        assert_eq!(g.nodes().collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(g.edge_count(), 0);
        assert_eq!(g.sources().count(), 3);
    }

    #[test]
    fn test_add_rule_inside_and_outside() {
        let mut g = RestrictedGraph::with_nodes(&nodes(&[1, 2]));
        assert!(g.add_rule(&Rule::new(1, 2)));
        assert!(!g.add_rule(&Rule::new(1, 3)));
        assert!(!g.add_rule(&Rule::new(3, 2)));
        assert!(g.contains_edge(1, 2));
        assert!(!g.contains_edge(2, 1));
        assert_eq!(g.in_degree(2), Some(1));
        assert_eq!(g.in_degree(3), None);
    }

    #[test]
    fn test_duplicate_rule_single_edge() {
        let mut g = RestrictedGraph::with_nodes(&nodes(&[1, 2]));
        assert!(g.add_rule(&Rule::new(1, 2)));
        assert!(!g.add_rule(&Rule::new(1, 2)));
        assert_eq!(g.edge_count(), 1);
        assert_eq!(g.in_degree(2), Some(1));
    }

    #[test]
    fn test_self_rule_adds_no_edge() {
        let mut g = RestrictedGraph::with_nodes(&nodes(&[4]));
        assert!(!g.add_rule(&Rule::new(4, 4)));
        assert_eq!(g.in_degree(4), Some(0));
    }

    #[test]
    fn test_successors_sorted() {
        let mut g = RestrictedGraph::with_nodes(&nodes(&[1, 5, 9, 7]));
        g.add_rule(&Rule::new(1, 9));
        g.add_rule(&Rule::new(1, 5));
        g.add_rule(&Rule::new(1, 7));
        assert_eq!(g.successors(1).collect::<Vec<_>>(), vec![5, 7, 9]);
        assert_eq!(g.successors(42).count(), 0);
        assert_eq!(g.sources().collect::<Vec<_>>(), vec![1]);
    }
}
