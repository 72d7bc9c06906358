use aoc_solver::{AocParser, AocSolver, ParseError, PartSolver, SolveError, Solver};
use std::borrow::Cow;

/// Borrows its input unless it has to strip carriage returns
#[derive(AocSolver)]
#[aoc_solver(max_parts = 3, labels = ["Words", "Longest word"])]
struct WordSolver;

#[derive(Debug)]
struct Text<'a> {
    body: Cow<'a, str>,
    word_count: Option<usize>,
}

impl AocParser for WordSolver {
    type SharedData<'a> = Text<'a>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let body = if input.contains('\r') {
            Cow::Owned(input.replace('\r', ""))
        } else {
            Cow::Borrowed(input)
        };
        Ok(Text {
            body,
            word_count: None,
        })
    }
}

impl PartSolver<1> for WordSolver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let count = shared.body.split_whitespace().count();
        shared.word_count = Some(count);
        Ok(count.to_string())
    }
}

impl PartSolver<2> for WordSolver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        shared
            .body
            .split_whitespace()
            .max_by_key(|w| w.len())
            .map(str::to_string)
            .ok_or_else(|| SolveError::SolveFailed("no words".into()))
    }
}

// Depends on part 1 having run
impl PartSolver<3> for WordSolver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        shared
            .word_count
            .map(|c| (c * 2).to_string())
            .ok_or_else(|| SolveError::SolveFailed("part 1 not solved yet".into()))
    }
}

#[test]
fn test_parts_and_labels_generated() {
    assert_eq!(<WordSolver as Solver>::PARTS, 3);
    assert_eq!(<WordSolver as Solver>::PART_LABELS, &["Words", "Longest word"]);
}

#[test]
fn test_dispatch_to_part_solvers() {
    let mut shared = WordSolver::parse("alpha be gammas\ndelta").unwrap();
    assert!(matches!(shared.body, Cow::Borrowed(_)));

    assert_eq!(WordSolver::solve_part(&mut shared, 1).unwrap(), "4");
    assert_eq!(WordSolver::solve_part(&mut shared, 2).unwrap(), "gammas");
    assert_eq!(WordSolver::solve_part(&mut shared, 3).unwrap(), "8");
}

#[test]
fn test_owned_when_stripping() {
    let shared = WordSolver::parse("a\r\nb").unwrap();
    assert!(matches!(shared.body, Cow::Owned(_)));
    assert_eq!(shared.body, "a\nb");
}

#[test]
fn test_dependent_part_fails_without_prerequisite() {
    let mut shared = WordSolver::parse("one two").unwrap();
    assert!(matches!(
        WordSolver::solve_part(&mut shared, 3),
        Err(SolveError::SolveFailed(_))
    ));
}

#[test]
fn test_result_error_propagates() {
    let mut shared = WordSolver::parse("   ").unwrap();
    assert!(WordSolver::solve_part(&mut shared, 2).is_err());
}

#[test]
fn test_unknown_part_not_implemented() {
    let mut shared = WordSolver::parse("x").unwrap();
    assert!(matches!(
        WordSolver::solve_part(&mut shared, 0),
        Err(SolveError::PartNotImplemented(0))
    ));
    assert!(matches!(
        WordSolver::solve_part(&mut shared, 4),
        Err(SolveError::PartNotImplemented(4))
    ));
}

/// Without labels the constant is empty
#[derive(AocSolver)]
#[aoc_solver(max_parts = 1)]
struct Unlabelled;

impl AocParser for Unlabelled {
    type SharedData<'a> = ();

    fn parse(_: &str) -> Result<Self::SharedData<'_>, ParseError> {
        Ok(())
    }
}

impl PartSolver<1> for Unlabelled {
    fn solve(_: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok("done".to_string())
    }
}

#[test]
fn test_unlabelled_solver() {
    assert!(<Unlabelled as Solver>::PART_LABELS.is_empty());
    assert_eq!(Unlabelled::solve_part(&mut (), 1).unwrap(), "done");
}
