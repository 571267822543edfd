//! Parsing of comma-separated workspace number lists.
//!
//! The same list syntax is accepted everywhere a set of workspaces is given
//! on the command line: the mover's workspace and `--except` lists, and the
//! allocator's `--reserved` list.
//!
//! ```text
//! "10,1, 7, 2 ,5 "  →  1,2,5,7,10
//! ""                →  (empty)
//! ```

use crate::model::WorkspaceNum;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// An ordered set of workspace numbers.
///
/// Always duplicate-free and iterated in ascending order, regardless of how
/// it was built.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorkspaceSet(BTreeSet<WorkspaceNum>);

/// A token in a workspace list that is not a base-10 integer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid workspace number {token:?}: {reason}")]
pub struct ParseError {
    /// The offending token, after trimming.
    pub token: String,
    reason: String,
}

impl WorkspaceSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn contains(&self, num: WorkspaceNum) -> bool {
        self.0.contains(&num)
    }

    /// Iterate in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = WorkspaceNum> + '_ {
        self.0.iter().copied()
    }

    pub fn to_vec(&self) -> Vec<WorkspaceNum> {
        self.iter().collect()
    }
}

impl FromStr for WorkspaceSet {
    type Err = ParseError;

    fn from_str(input: &str) -> Result<Self, ParseError> {
        if input.trim().is_empty() {
            return Ok(Self::new());
        }

        input
            .split(',')
            .map(|field| {
                let token = field.trim();
                token.parse::<WorkspaceNum>().map_err(|e| ParseError {
                    token: token.to_string(),
                    reason: e.to_string(),
                })
            })
            .collect::<Result<BTreeSet<_>, _>>()
            .map(Self)
    }
}

impl fmt::Display for WorkspaceSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, num) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{}", num)?;
        }
        Ok(())
    }
}

impl FromIterator<WorkspaceNum> for WorkspaceSet {
    fn from_iter<I: IntoIterator<Item = WorkspaceNum>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a WorkspaceSet {
    type Item = &'a WorkspaceNum;
    type IntoIter = std::collections::btree_set::Iter<'a, WorkspaceNum>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(s: &str) -> Result<Vec<WorkspaceNum>, ParseError> {
        s.parse::<WorkspaceSet>().map(|set| set.to_vec())
    }

    #[test]
    fn empty_input_is_empty_set() {
        assert_eq!(parse("").unwrap(), Vec::<WorkspaceNum>::new());
        assert_eq!(parse("   ").unwrap(), Vec::<WorkspaceNum>::new());
    }

    #[test]
    fn single_number() {
        assert_eq!(parse("3").unwrap(), vec![3]);
    }

    #[test]
    fn sorts_and_trims() {
        assert_eq!(parse("10,1, 7, 2 ,5 ").unwrap(), vec![1, 2, 5, 7, 10]);
    }

    #[test]
    fn duplicates_collapse() {
        assert_eq!(parse("4,4,2,4,2").unwrap(), vec![2, 4]);
    }

    #[test]
    fn order_and_duplication_do_not_matter() {
        let a = parse("3,1,2").unwrap();
        let b = parse("2,3,1,1,3").unwrap();
        let c = parse(" 1 , 2 , 3 ").unwrap();
        assert_eq!(a, b);
        assert_eq!(a, c);
    }

    #[test]
    fn reparsing_display_is_idempotent() {
        let set: WorkspaceSet = "9, 3,3, 12,1".parse().unwrap();
        let again: WorkspaceSet = set.to_string().parse().unwrap();
        assert_eq!(set, again);
    }

    #[test]
    fn invalid_token_is_reported() {
        let err = parse("abc").unwrap_err();
        assert_eq!(err.token, "abc");

        let err = parse("1, 2x ,3").unwrap_err();
        assert_eq!(err.token, "2x");
        assert!(err.to_string().contains("\"2x\""));
    }

    #[test]
    fn empty_token_is_an_error() {
        let err = parse("1,,2").unwrap_err();
        assert_eq!(err.token, "");
    }

    #[test]
    fn display_joins_with_commas() {
        assert_eq!(WorkspaceSet::new().to_string(), "");
        assert_eq!(WorkspaceSet::from_iter([1]).to_string(), "1");
        assert_eq!(
            WorkspaceSet::from_iter([10, 2, 5, 3, 4]).to_string(),
            "2,3,4,5,10"
        );
    }

    #[test]
    fn deserializes_from_json_array() {
        let set: WorkspaceSet = serde_json::from_str("[5, 1, 5]").unwrap();
        assert_eq!(set.to_vec(), vec![1, 5]);
    }
}
