//! Day 3: Mull It Over
//!
//! Corrupted memory with `mul(a,b)` instructions buried in noise. Part 1 sums
//! every product; part 2 honours `do()` / `don't()` markers.

use std::borrow::Cow;

use anyhow::{Context, anyhow};
use aoc_solver::{AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError};
use log::trace;

const MUL_OPEN: &str = "mul(";
const ENABLE: &str = "do()";
const DISABLE: &str = "don't()";

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2, labels = ["Part 1 solution", "Part 2 solution"])]
#[aoc(year = 2024, day = 3, tags = ["2024", "lexer"], title = "Mull It Over", input = "day_3/corrupted_data.txt")]
pub struct Solver;

/// A token recognised in the corrupted text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction<'a> {
    /// `mul(lhs,rhs)`; operands are the raw digit runs
    Mul { lhs: &'a str, rhs: &'a str },
    /// `do()`
    Enable,
    /// `don't()`
    Disable,
}

struct Cursor<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn eat(&mut self, literal: &str) -> bool {
        if self.src.as_bytes()[self.pos..].starts_with(literal.as_bytes()) {
            self.pos += literal.len();
            true
        } else {
            false
        }
    }

    fn digits(&mut self) -> Option<&'a str> {
        let len = self.src.as_bytes()[self.pos..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count();
        if len == 0 {
            return None;
        }
        let run = &self.src[self.pos..self.pos + len];
        self.pos += len;
        Some(run)
    }

    fn mul(&mut self) -> Option<Instruction<'a>> {
        if !self.eat(MUL_OPEN) {
            return None;
        }
        let lhs = self.digits()?;
        if !self.eat(",") {
            return None;
        }
        let rhs = self.digits()?;
        self.eat(")").then_some(Instruction::Mul { lhs, rhs })
    }
}

/// Leftmost-first scanner over the text.
///
/// At each byte it tries `mul(<digits>,<digits>)`, `do()` and `don't()`; a
/// match moves past the token, anything else moves one byte on. Near misses
/// are skipped.
pub struct Lexer<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(src: &'a str) -> Self {
        Self { src, pos: 0 }
    }

    fn lex_at(&self) -> Option<(Instruction<'a>, usize)> {
        let mut cursor = Cursor {
            src: self.src,
            pos: self.pos,
        };
        if let Some(instruction) = cursor.mul() {
            return Some((instruction, cursor.pos));
        }
        let mut cursor = Cursor {
            src: self.src,
            pos: self.pos,
        };
        if cursor.eat(ENABLE) {
            return Some((Instruction::Enable, cursor.pos));
        }
        if cursor.eat(DISABLE) {
            return Some((Instruction::Disable, cursor.pos));
        }
        None
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Instruction<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.pos < self.src.len() {
            if let Some((instruction, end)) = self.lex_at() {
                self.pos = end;
                return Some(instruction);
            }
            self.pos += 1;
        }
        None
    }
}

/// Both answers, computed in one pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sums {
    /// Every `mul` counts
    pub unconditional: u128,
    /// Only `mul`s while enabled count
    pub gated: u128,
}

fn product(lhs: &str, rhs: &str) -> anyhow::Result<u128> {
    let parse = |digits: &str| {
        digits
            .parse::<u64>()
            .with_context(|| format!("operand {} does not fit in 64 bits", digits))
    };
    Ok(u128::from(parse(lhs)?) * u128::from(parse(rhs)?))
}

fn accumulate(total: u128, value: u128) -> anyhow::Result<u128> {
    total
        .checked_add(value)
        .ok_or_else(|| anyhow!("sum of products overflowed"))
}

/// Scan once, tracking the enabled flag (initially on)
pub fn sum_products(text: &str) -> anyhow::Result<Sums> {
    let mut enabled = true;
    let mut sums = Sums::default();
    for instruction in Lexer::new(text) {
        match instruction {
            Instruction::Enable => enabled = true,
            Instruction::Disable => enabled = false,
            Instruction::Mul { lhs, rhs } => {
                let value = product(lhs, rhs)?;
                trace!("mul({},{}) = {} (enabled: {})", lhs, rhs, value, enabled);
                sums.unconditional = accumulate(sums.unconditional, value)?;
                if enabled {
                    sums.gated = accumulate(sums.gated, value)?;
                }
            }
        }
    }
    Ok(sums)
}

pub fn unconditional_sum(text: &str) -> anyhow::Result<u128> {
    sum_products(text).map(|sums| sums.unconditional)
}

pub fn gated_sum(text: &str) -> anyhow::Result<u128> {
    sum_products(text).map(|sums| sums.gated)
}

/// Delete every `don't()`..`do()` span (shortest, inclusive) and any
/// trailing `don't()` span with no later `do()`.
///
/// Textual form of gating. Unlike [`gated_sum`], the splice can glue the
/// pieces around a span into a new `mul` token.
pub fn strip_disabled_spans(text: &str) -> Cow<'_, str> {
    if !text.contains(DISABLE) {
        return Cow::Borrowed(text);
    }
    let mut kept = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(start) = rest.find(DISABLE) {
        kept.push_str(&rest[..start]);
        let after = &rest[start + DISABLE.len()..];
        match after.find(ENABLE) {
            Some(end) => rest = &after[end + ENABLE.len()..],
            None => {
                rest = "";
                break;
            }
        }
    }
    kept.push_str(rest);
    Cow::Owned(kept)
}

/// Drop line separators, borrowing when there are none
pub fn join_lines(input: &str) -> Cow<'_, str> {
    if input.contains(['\n', '\r']) {
        Cow::Owned(input.chars().filter(|c| !matches!(c, '\n' | '\r')).collect())
    } else {
        Cow::Borrowed(input)
    }
}

#[derive(Debug)]
pub struct SharedData<'a> {
    text: Cow<'a, str>,
    sums: Option<Sums>,
}

impl SharedData<'_> {
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData<'a>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        Ok(SharedData {
            text: join_lines(input),
            sums: None,
        })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(solve_once_for_both(shared)?.unconditional.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(solve_once_for_both(shared)?.gated.to_string())
    }
}

fn solve_once_for_both(shared: &mut SharedData) -> Result<Sums, SolveError> {
    if let Some(sums) = shared.sums {
        return Ok(sums);
    }
    let sums = sum_products(&shared.text).map_err(|e| SolveError::SolveFailed(e.into()))?;
    shared.sums = Some(sums);
    Ok(sums)
}
