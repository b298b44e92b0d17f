//! Rule validation and constrained topological ordering.
//!
//! The [`OrderingEngine`] answers two questions about an update (a sequence
//! of node ids) against a [`RuleSet`](crate::rules::RuleSet):
//!
//! - **Validity**: does every applicable rule `b|a` have `b` before `a`?
//! - **Canonical order**: if not, which order over the same nodes does
//!   satisfy all of them?
//!
//! # Algorithm
//!
//! Reordering runs Kahn's algorithm on the rules restricted to the update's
//! node set. Sources enter a FIFO ready queue (ascending id by default);
//! each dequeued node releases its successors. If the queue empties before
//! every node is placed, the restricted rules contain a cycle and the query
//! fails with [`Unsatisfiable`].
//!
//! # References
//!
//! Kahn (1962), "Topological sorting of large networks"

mod config;
mod engine;
mod types;

pub use config::{EngineConfig, PositionLookup, TieBreak};
pub use engine::{canonical_order, is_valid, OrderingEngine};
pub use types::{Outcome, Unsatisfiable, Violation};
