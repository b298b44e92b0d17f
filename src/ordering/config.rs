//! Engine configuration.

/// Order in which simultaneously-ready nodes leave the topological sort.
///
/// Only nodes that the applicable rules leave unconstrained relative to
/// each other are affected; every variant yields a rule-consistent order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TieBreak {
    /// Seed the ready queue with source nodes in ascending id order, then
    /// process it FIFO. Successors are released in ascending id order.
    ///
    /// The default; matches previously recorded outputs.
    #[default]
    Ascending,

    /// Seed the ready queue with source nodes in the order they first
    /// appear in the update, then process it FIFO.
    ///
    /// Keeps the input order stable for unconstrained nodes. This is a
    /// different canonical order than [`TieBreak::Ascending`].
    FirstSeen,
}

/// How rule endpoints are located inside an update during validation.
///
/// Both strategies compare first-occurrence positions and give identical
/// results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PositionLookup {
    /// Build a node → position index once per update: O(rules + len).
    #[default]
    Indexed,

    /// Scan the update for both endpoints of every rule: O(rules × len).
    LinearScan,
}

/// Configuration for [`OrderingEngine`](super::OrderingEngine).
///
/// # Examples
///
/// ```
/// use u_precedence::ordering::{EngineConfig, PositionLookup, TieBreak};
///
/// let config = EngineConfig::default()
///     .with_tie_break(TieBreak::FirstSeen)
///     .with_position_lookup(PositionLookup::LinearScan)
///     .with_parallel(false);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EngineConfig {
    /// Tie-break among simultaneously-ready nodes.
    pub tie_break: TieBreak,

    /// Position lookup strategy for validation.
    pub position_lookup: PositionLookup,

    /// Whether batch evaluation may spread updates across rayon workers.
    ///
    /// Ignored unless the `parallel` feature is enabled.
    pub parallel: bool,

    /// Smallest batch for which parallel evaluation is used.
    pub min_parallel_batch: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            tie_break: TieBreak::default(),
            position_lookup: PositionLookup::default(),
            parallel: true,
            min_parallel_batch: 64,
        }
    }
}

impl EngineConfig {
    /// Sets the tie-break strategy.
    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    /// Sets the position lookup strategy.
    pub fn with_position_lookup(mut self, lookup: PositionLookup) -> Self {
        self.position_lookup = lookup;
        self
    }

    /// Enables or disables parallel batch evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the minimum batch size for parallel evaluation.
    pub fn with_min_parallel_batch(mut self, n: usize) -> Self {
        self.min_parallel_batch = n;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.min_parallel_batch == 0 {
            return Err("min_parallel_batch must be at least 1".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EngineConfig::default();
        assert_eq!(config.tie_break, TieBreak::Ascending);
        assert_eq!(config.position_lookup, PositionLookup::Indexed);
        assert!(config.parallel);
        assert_eq!(config.min_parallel_batch, 64);
    }

    #[test]
    fn test_validate_ok() {
        assert!(EngineConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_zero_batch() {
        let config = EngineConfig::default().with_min_parallel_batch(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_builders() {
        let config = EngineConfig::default()
            .with_tie_break(TieBreak::FirstSeen)
            .with_position_lookup(PositionLookup::LinearScan)
            .with_parallel(false)
            .with_min_parallel_batch(8);
        assert_eq!(config.tie_break, TieBreak::FirstSeen);
        assert_eq!(config.position_lookup, PositionLookup::LinearScan);
        assert!(!config.parallel);
        assert_eq!(config.min_parallel_batch, 8);
    }
}
