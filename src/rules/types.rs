//! Core rule types.

use std::fmt;
use std::str::FromStr;

/// Identifier of a node (page, task, item) that participates in ordering rules.
pub type NodeId = u32;

/// A pairwise ordering constraint.
///
/// If both `before` and `after` appear in the same update, `before` must
/// occur at an earlier position than `after`. Rules that mention a node
/// absent from the update do not apply to it.
///
/// # Examples
///
/// ```
/// use u_precedence::rules::Rule;
///
/// let rule: Rule = "47|53".parse().unwrap();
/// assert_eq!(rule, Rule::new(47, 53));
/// assert_eq!(rule.to_string(), "47|53");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rule {
    /// Node that must come first.
    pub before: NodeId,
    /// Node that must come after.
    pub after: NodeId,
}

impl Rule {
    /// Creates a new rule `before|after`.
    pub fn new(before: NodeId, after: NodeId) -> Self {
        Self { before, after }
    }

    /// Whether the rule constrains a node relative to itself.
    ///
    /// Such a rule never relates two distinct positions, so it neither
    /// invalidates an update nor adds an edge to a restricted graph.
    pub fn is_self_loop(&self) -> bool {
        self.before == self.after
    }
}

impl From<(NodeId, NodeId)> for Rule {
    fn from((before, after): (NodeId, NodeId)) -> Self {
        Self::new(before, after)
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}|{}", self.before, self.after)
    }
}

/// Error returned by [`Rule::from_str`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuleParseError {
    /// The text has no `|` between the two node ids.
    #[error("expected `before|after`, found {0:?}")]
    MissingSeparator(String),
    /// One side of the rule is not a non-negative integer.
    #[error("invalid node id {0:?}")]
    InvalidNode(String),
}

impl FromStr for Rule {
    type Err = RuleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (before, after) = s
            .split_once('|')
            .ok_or_else(|| RuleParseError::MissingSeparator(s.to_string()))?;
        let node = |t: &str| {
            t.trim()
                .parse::<NodeId>()
                .map_err(|_| RuleParseError::InvalidNode(t.trim().to_string()))
        };
        Ok(Self::new(node(before)?, node(after)?))
    }
}
