//! Domain-agnostic ordering-constraint engine.
//!
//! Given pairwise ordering rules `before|after` over integer node ids, this
//! crate checks whether a sequence of nodes (an *update*) honours every rule
//! that applies to it, and reorders the sequence when it does not.
//!
//! - **Rules**: [`rules::RuleSet`] holds the immutable rule list and derives
//!   a [`rules::RestrictedGraph`] per update.
//! - **Ordering**: [`ordering::OrderingEngine`] validates updates and
//!   produces canonical orders with Kahn's algorithm, detecting cycles.
//! - **Input**: [`input::PrintQueue`] loads the `A|B` + comma-separated
//!   update text format.
//! - **Report**: [`report::Summary`] sums middle elements of valid and
//!   corrected updates.
//!
//! # Example
//!
//! ```
//! use u_precedence::ordering::{canonical_order, is_valid};
//! use u_precedence::rules::RuleSet;
//!
//! let rules = RuleSet::from_pairs([(61, 13), (29, 13), (61, 29)]);
//! let update = [61, 13, 29];
//!
//! assert!(!is_valid(&update, &rules));
//! assert_eq!(canonical_order(&update, &rules).unwrap(), vec![61, 29, 13]);
//! ```
//!
//! # Features
//!
//! - `parallel` (default): batch evaluation on rayon.
//! - `serde`: `Serialize`/`Deserialize` for the public data types.

pub mod input;
pub mod ordering;
pub mod report;
pub mod rules;
