//! Parsed rule list plus updates.

use super::error::{LoadError, ParseError};
use crate::ordering::{EngineConfig, OrderingEngine, Outcome};
use crate::report::Summary;
use crate::rules::{NodeId, Rule, RuleSet};
use std::path::Path;
use std::str::FromStr;
use tracing::debug;

/// A rule set together with the updates to check against it.
///
/// # Format
///
/// ```text
/// 47|53
/// 97|13
///
/// 75,47,61,53,29
/// 97,61,53,29,13
/// ```
///
/// Rule lines come first, one `before|after` per line. The first blank line
/// switches to updates, one comma-separated list per line. Later blank lines
/// are skipped, and whitespace around tokens is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PrintQueue {
    /// Ordering rules.
    pub rules: RuleSet,
    /// Updates in file order.
    pub updates: Vec<Vec<NodeId>>,
}

impl PrintQueue {
    /// Reads and parses a file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let text = std::fs::read_to_string(path)?;
        Ok(text.parse()?)
    }

    /// Evaluates every update and aggregates the result.
    ///
    /// # Panics
    /// Panics if `config` is invalid.
    pub fn summarize(&self, config: EngineConfig) -> Summary {
        let engine = OrderingEngine::new(&self.rules).with_config(config);
        let outcomes: Vec<Outcome> = engine.evaluate_all(&self.updates);
        Summary::from_outcomes(&self.updates, &outcomes)
    }
}

fn parse_update(line_no: usize, line: &str) -> Result<Vec<NodeId>, ParseError> {
    line.split(',')
        .enumerate()
        .map(|(index, token)| {
            let token = token.trim();
            if token.is_empty() {
                return Err(ParseError::EmptyToken {
                    line: line_no,
                    index,
                });
            }
            token.parse().map_err(|_| ParseError::InvalidNumber {
                line: line_no,
                token: token.to_string(),
            })
        })
        .collect()
}

impl FromStr for PrintQueue {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut rules = Vec::new();
        let mut updates = Vec::new();
        let mut in_updates = false;

        for (idx, line) in s.lines().enumerate() {
            let line_no = idx + 1;
            if line.trim().is_empty() {
                in_updates = true;
                continue;
            }
            if in_updates {
                updates.push(parse_update(line_no, line)?);
            } else {
                let rule = line.parse::<Rule>().map_err(|source| ParseError::Rule {
                    line: line_no,
                    source,
                })?;
                rules.push(rule);
            }
        }

        debug!(rules = rules.len(), updates = updates.len(), "parsed print queue");
        Ok(Self {
            rules: RuleSet::new(rules),
            updates,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::RuleParseError;

    #[test]
    fn test_parse_sections() {
        let q: PrintQueue = "1|2\n2|3\n\n1,2,3\n3, 2 ,1\n".parse().unwrap();
        assert_eq!(q.rules, RuleSet::from_pairs([(1, 2), (2, 3)]));
        assert_eq!(q.updates, vec![vec![1, 2, 3], vec![3, 2, 1]]);
    }

    #[test]
    fn test_parse_crlf_and_extra_blank_lines() {
        let q: PrintQueue = "1|2\r\n\r\n4,5\r\n\r\n\r\n6\r\n".parse().unwrap();
        assert_eq!(q.rules.len(), 1);
        assert_eq!(q.updates, vec![vec![4, 5], vec![6]]);
    }

    #[test]
    fn test_parse_rules_only() {
        let q: PrintQueue = "1|2\n3|4".parse().unwrap();
        assert_eq!(q.rules.len(), 2);
        assert!(q.updates.is_empty());
    }

    #[test]
    fn test_parse_empty() {
        let q: PrintQueue = "".parse().unwrap();
        assert!(q.rules.is_empty());
        assert!(q.updates.is_empty());
    }

    #[test]
    fn test_bad_rule_line() {
        let err = "1|2\n1-2\n".parse::<PrintQueue>().unwrap_err();
        assert_eq!(
            err,
            ParseError::Rule {
                line: 2,
                source: RuleParseError::MissingSeparator("1-2".into()),
            }
        );
        assert_eq!(err.to_string(), "line 2: expected `before|after`, found \"1-2\"");
    }

    #[test]
    fn test_bad_update_entries() {
        let err = "1|2\n\n1,x\n".parse::<PrintQueue>().unwrap_err();
        assert_eq!(
            err,
            ParseError::InvalidNumber {
                line: 3,
                token: "x".into(),
            }
        );

        let err = "\n1,,2\n".parse::<PrintQueue>().unwrap_err();
        assert_eq!(err, ParseError::EmptyToken { line: 2, index: 1 });

        let err = "\n1,2,\n".parse::<PrintQueue>().unwrap_err();
        assert_eq!(err, ParseError::EmptyToken { line: 2, index: 2 });
    }

    #[test]
    fn test_from_path_missing_file() {
        let err = PrintQueue::from_path("/nonexistent/u-precedence/input.txt").unwrap_err();
        assert!(matches!(err, LoadError::Io(_)));
    }
}
