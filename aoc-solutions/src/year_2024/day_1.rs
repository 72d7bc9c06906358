//! Day 1: Historian Hysteria
//!
//! Two columns of location IDs. Part 1 pairs them up by rank and sums the
//! gaps; part 2 weighs each left value by how often it appears on the right.

use std::collections::HashMap;
use std::str::FromStr;

use anyhow::{anyhow, bail};
use aoc_solver::{AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError};

/// Column separator used by the puzzle input
pub const DEFAULT_SEPARATOR: &str = "   ";

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2, labels = ["Total distance", "Similarity score"])]
#[aoc(year = 2024, day = 1, tags = ["2024", "lists"], title = "Historian Hysteria", input = "day_1/lists.txt")]
pub struct Solver;

/// Both columns of the input, each sorted ascending
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairedLists {
    left: Vec<i64>,
    right: Vec<i64>,
}

impl PairedLists {
    /// Build from two columns. Fails if the lengths differ.
    pub fn new(mut left: Vec<i64>, mut right: Vec<i64>) -> anyhow::Result<Self> {
        if left.len() != right.len() {
            bail!(
                "column lengths differ: {} left, {} right",
                left.len(),
                right.len()
            );
        }
        left.sort_unstable();
        right.sort_unstable();
        Ok(Self { left, right })
    }

    /// Parse lines of `<int><separator><int>`.
    ///
    /// Trailing newlines are tolerated; any other line that does not split
    /// into exactly two integers is a [`ParseError::MalformedLine`].
    pub fn parse_with_separator(input: &str, separator: &str) -> Result<Self, ParseError> {
        let mut left = Vec::new();
        let mut right = Vec::new();

        for (idx, line) in input.trim_end_matches(['\n', '\r']).lines().enumerate() {
            let (l, r) = parse_line(line, separator).map_err(|e| ParseError::MalformedLine {
                line: idx + 1,
                reason: e.to_string(),
            })?;
            left.push(l);
            right.push(r);
        }

        // Equal by construction
        Self::new(left, right).map_err(|e| ParseError::InvalidFormat(e.to_string()))
    }

    pub fn left(&self) -> &[i64] {
        &self.left
    }

    pub fn right(&self) -> &[i64] {
        &self.right
    }

    /// Sum of `|left[i] - right[i]|` over the rank-sorted columns.
    /// Fails if the sum does not fit in a `u64`.
    pub fn total_distance(&self) -> anyhow::Result<u64> {
        self.left
            .iter()
            .zip(&self.right)
            .try_fold(0u64, |total, (l, r)| {
                total
                    .checked_add(l.abs_diff(*r))
                    .ok_or_else(|| anyhow!("total distance overflowed"))
            })
    }

    /// Sum of `v * count(v in right)` for every `v` in the left column.
    /// Fails if a term or the sum does not fit in an `i64`.
    pub fn similarity_score(&self) -> anyhow::Result<i64> {
        let mut counts: HashMap<i64, i64> = HashMap::with_capacity(self.right.len());
        for &v in &self.right {
            *counts.entry(v).or_default() += 1;
        }
        self.left.iter().try_fold(0i64, |total, v| {
            let count = counts.get(v).copied().unwrap_or(0);
            v.checked_mul(count)
                .and_then(|term| total.checked_add(term))
                .ok_or_else(|| anyhow!("similarity score overflowed at {}", v))
        })
    }
}

fn parse_line(line: &str, separator: &str) -> anyhow::Result<(i64, i64)> {
    let fields: Vec<&str> = line.split(separator).collect();
    let &[l, r] = fields.as_slice() else {
        return Err(anyhow!(
            "expected 2 fields separated by {:?}, found {}",
            separator,
            fields.len()
        ));
    };
    let parse = |field: &str| {
        <i64 as FromStr>::from_str(field).map_err(|e| anyhow!("invalid integer {:?}: {}", field, e))
    };
    Ok((parse(l)?, parse(r)?))
}

impl AocParser for Solver {
    type SharedData<'a> = PairedLists;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        PairedLists::parse_with_separator(input, DEFAULT_SEPARATOR)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        shared
            .total_distance()
            .map(|d| d.to_string())
            .map_err(|e| SolveError::SolveFailed(e.into()))
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        shared
            .similarity_score()
            .map(|s| s.to_string())
            .map_err(|e| SolveError::SolveFailed(e.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;
    use proptest::prelude::*;

    const EXAMPLE: &str = "3 4\n4 3\n2 5\n1 3\n3 9\n3 3";

    #[test]
    fn test_example_columns_sorted() {
        let lists = PairedLists::parse_with_separator(EXAMPLE, " ").unwrap();
        assert_eq!(lists.left(), &[1, 2, 3, 3, 3, 4]);
        assert_eq!(lists.right(), &[3, 3, 3, 4, 5, 9]);
    }

    #[test]
    fn test_example_answers() {
        let lists = PairedLists::parse_with_separator(EXAMPLE, " ").unwrap();
        assert_eq!(lists.total_distance().unwrap(), 11);
        assert_eq!(lists.similarity_score().unwrap(), 31);
    }

    #[test]
    fn test_solver_uses_puzzle_separator() {
        let input = EXAMPLE.replace(' ', DEFAULT_SEPARATOR) + "\n";
        let mut shared = Solver::parse(&input).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "11");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "31");
    }

    #[test]
    fn test_wrong_field_count_is_malformed() {
        let err = PairedLists::parse_with_separator("1 2\n3 4 5\n", " ").unwrap_err();
        assert!(matches!(err, ParseError::MalformedLine { line: 2, .. }));

        let err = PairedLists::parse_with_separator("1 2\n7", " ").unwrap_err();
        assert!(matches!(err, ParseError::MalformedLine { line: 2, .. }));
    }

    #[test]
    fn test_separator_mismatch_is_malformed() {
        // Single space where three are expected
        let err = Solver::parse("1 2").unwrap_err();
        assert!(matches!(err, ParseError::MalformedLine { line: 1, .. }));
    }

    #[test]
    fn test_non_integer_field_is_malformed() {
        let err = PairedLists::parse_with_separator("1 x", " ").unwrap_err();
        match err {
            ParseError::MalformedLine { line, reason } => {
                assert_eq!(line, 1);
                assert!(reason.contains("invalid integer"), "{}", reason);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_interior_blank_line_is_malformed() {
        let err = PairedLists::parse_with_separator("1 2\n\n3 4", " ").unwrap_err();
        assert!(matches!(err, ParseError::MalformedLine { line: 2, .. }));
    }

    #[test]
    fn test_negative_values() {
        let lists = PairedLists::parse_with_separator("-5 5\n2 -2", " ").unwrap();
        // left [-5, 2] against right [-2, 5]
        assert_eq!(lists.total_distance().unwrap(), 3 + 3);
        assert_eq!(lists.similarity_score().unwrap(), 0);
    }

    #[test]
    fn test_distance_overflow_is_error() {
        // Each pair is u64::MAX apart
        let lists = PairedLists::new(vec![i64::MIN, i64::MIN], vec![i64::MAX, i64::MAX]).unwrap();
        assert!(lists.total_distance().is_err());

        let input = format!("{} 0\n{} 0", i64::MAX, i64::MAX);
        let lists = PairedLists::parse_with_separator(&input, " ").unwrap();
        assert_eq!(lists.total_distance().unwrap(), 2 * i64::MAX as u64);
    }

    #[test]
    fn test_similarity_overflow_is_error() {
        let big = 1i64 << 62;
        let lists = PairedLists::new(vec![big, 0], vec![big, big]).unwrap();
        assert!(lists.similarity_score().is_err());
    }

    #[test]
    fn test_overflow_reported_as_solve_failure() {
        let input = format!("{min} {max}\n{min} {max}\n", min = i64::MIN, max = i64::MAX).replace(' ', DEFAULT_SEPARATOR);
        let mut shared = Solver::parse(&input).unwrap();
        assert!(matches!(
            Solver::solve_part(&mut shared, 1),
            Err(SolveError::SolveFailed(_))
        ));
    }

    #[test]
    fn test_unequal_columns_rejected() {
        assert!(PairedLists::new(vec![1, 2], vec![1]).is_err());
    }

    proptest! {
        #[test]
        fn prop_distance_is_symmetric(pairs in prop::collection::vec((-1000i64..1000, -1000i64..1000), 0..50)) {
            let (left, right): (Vec<i64>, Vec<i64>) = pairs.into_iter().unzip();
            let forward = PairedLists::new(left.clone(), right.clone()).unwrap();
            let backward = PairedLists::new(right, left).unwrap();
            prop_assert_eq!(forward.total_distance().unwrap(), backward.total_distance().unwrap());
        }

        #[test]
        fn prop_disjoint_columns_score_zero(left in prop::collection::vec(0i64..100, 0..30)) {
            let right: Vec<i64> = left.iter().map(|v| v + 1000).collect();
            let lists = PairedLists::new(left, right).unwrap();
            prop_assert_eq!(lists.similarity_score().unwrap(), 0);
        }

        #[test]
        fn prop_similarity_matches_naive_count(pairs in prop::collection::vec((0i64..20, 0i64..20), 0..40)) {
            let (left, right): (Vec<i64>, Vec<i64>) = pairs.into_iter().unzip();
            let naive: i64 = left
                .iter()
                .map(|v| v * right.iter().filter(|r| *r == v).count() as i64)
                .sum();
            let lists = PairedLists::new(left, right).unwrap();
            prop_assert_eq!(lists.similarity_score().unwrap(), naive);
        }
    }
}
