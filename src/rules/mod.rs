//! Ordering rules and their per-update restriction.
//!
//! A [`Rule`] `b|a` says that whenever `b` and `a` both appear in an update,
//! `b` must come first. A [`RuleSet`] holds the full rule list and is never
//! mutated after construction; queries derive a [`RestrictedGraph`] from it,
//! containing only the rules whose endpoints are both present in the update.
//!
//! # Design
//!
//! The graph is sparse (maps keyed by [`NodeId`]), so node ids carry no
//! artificial upper bound and the cost of a restriction is proportional to
//! the rule count, not to the largest id seen.

mod graph;
mod set;
mod types;

pub use graph::RestrictedGraph;
pub use set::RuleSet;
pub use types::{NodeId, Rule, RuleParseError};
