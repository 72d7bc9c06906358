//! Day 2: Red-Nosed Reports
//!
//! A report is safe when its levels move strictly in one direction and every
//! step is 1, 2 or 3. The Problem Dampener lets a report drop one level.

use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use anyhow::anyhow;
use aoc_solver::{AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError};
use itertools::Itertools;
use log::debug;

/// Allowed absolute difference between adjacent levels
pub const SAFE_STEP: RangeInclusive<u64> = 1..=3;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2, labels = ["Number of safe reports", "Number of safe reports with Problem Dampener"])]
#[aoc(year = 2024, day = 2, tags = ["2024", "reports"], title = "Red-Nosed Reports", input = "day_2/unusual_data.txt")]
pub struct Solver;

/// Direction fixed by the first pair of levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Increasing,
    Decreasing,
}

impl Direction {
    fn of(first: i64, second: i64) -> Self {
        if second > first {
            Direction::Increasing
        } else {
            Direction::Decreasing
        }
    }

    fn allows(self, from: i64, to: i64) -> bool {
        match self {
            Direction::Increasing => to > from,
            Direction::Decreasing => to < from,
        }
    }
}

/// First rule a sequence of levels breaks. `index` is the position of the
/// left level of the offending pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    StepOutOfRange { index: usize, step: u64 },
    DirectionChange { index: usize, expected: Direction },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::StepOutOfRange { index, step } => {
                write!(f, "step of {} between levels {} and {}", step, index, index + 1)
            }
            Violation::DirectionChange { index, expected } => write!(
                f,
                "levels {} and {} break the {:?} direction",
                index,
                index + 1,
                expected
            ),
        }
    }
}

/// Check a sequence of levels, stopping at the first violation.
///
/// Fewer than two levels have no adjacent pair and pass.
pub fn check_levels(levels: impl IntoIterator<Item = i64>) -> Result<(), Violation> {
    let mut direction = None;
    for (index, (from, to)) in levels.into_iter().tuple_windows().enumerate() {
        let step = from.abs_diff(to);
        if !SAFE_STEP.contains(&step) {
            return Err(Violation::StepOutOfRange { index, step });
        }
        let expected = *direction.get_or_insert_with(|| Direction::of(from, to));
        if !expected.allows(from, to) {
            return Err(Violation::DirectionChange { index, expected });
        }
    }
    Ok(())
}

/// One line of levels, at least two long
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    levels: Vec<i64>,
}

impl Report {
    pub fn new(levels: Vec<i64>) -> anyhow::Result<Self> {
        if levels.len() < 2 {
            return Err(anyhow!(
                "a report needs at least 2 levels, found {}",
                levels.len()
            ));
        }
        Ok(Self { levels })
    }

    pub fn levels(&self) -> &[i64] {
        &self.levels
    }

    /// The first violation of the safety rules, if any
    pub fn check(&self) -> Result<(), Violation> {
        check_levels(self.levels.iter().copied())
    }

    pub fn is_safe(&self) -> bool {
        self.check().is_ok()
    }

    /// The levels with the one at `skip` left out
    pub fn without(&self, skip: usize) -> impl Iterator<Item = i64> + '_ {
        self.levels
            .iter()
            .enumerate()
            .filter(move |&(i, _)| i != skip)
            .map(|(_, &level)| level)
    }

    /// Safe once some single level is removed. Every removal is tried.
    pub fn is_safe_dampened(&self) -> bool {
        (0..self.levels.len()).any(|skip| check_levels(self.without(skip)).is_ok())
    }
}

impl FromStr for Report {
    type Err = anyhow::Error;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let levels = line
            .split_ascii_whitespace()
            .map(|level| {
                <i64 as FromStr>::from_str(level)
                    .map_err(|e| anyhow!("invalid level {:?}: {}", level, e))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Report::new(levels)
    }
}

/// Parse one report per line
pub fn parse_reports(input: &str) -> Result<Vec<Report>, ParseError> {
    input
        .trim_end()
        .lines()
        .enumerate()
        .map(|(idx, line)| {
            line.parse::<Report>().map_err(|e| ParseError::MalformedLine {
                line: idx + 1,
                reason: e.to_string(),
            })
        })
        .collect()
}

pub fn count_safe(reports: &[Report]) -> usize {
    reports
        .iter()
        .enumerate()
        .filter(|(idx, report)| match report.check() {
            Ok(()) => true,
            Err(violation) => {
                debug!("report {} unsafe: {}", idx + 1, violation);
                false
            }
        })
        .count()
}

pub fn count_safe_dampened(reports: &[Report]) -> usize {
    reports.iter().filter(|r| r.is_safe_dampened()).count()
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Report>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        parse_reports(input)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(count_safe(shared).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(count_safe_dampened(shared).to_string())
    }
}
