use aoc_solver::{AocParser, AocSolver, ParseError, PartSolver, SolveError, Solver};

#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
struct TestSolver;

impl AocParser for TestSolver {
    type SharedData<'a> = Vec<i32>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        input
            .lines()
            .map(|line| {
                line.trim()
                    .parse::<i32>()
                    .map_err(|_| ParseError::InvalidFormat("Expected integer".into()))
            })
            .collect()
    }
}

impl PartSolver<1> for TestSolver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().sum::<i32>().to_string())
    }
}

impl PartSolver<2> for TestSolver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().product::<i32>().to_string())
    }
}

/// Borrows lines from the input and caches work shared between parts
#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
struct BorrowingSolver;

struct Words<'a> {
    words: Vec<&'a str>,
    longest: Option<usize>,
}

impl AocParser for BorrowingSolver {
    type SharedData<'a> = Words<'a>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        Ok(Words {
            words: input.split_whitespace().collect(),
            longest: None,
        })
    }
}

impl PartSolver<1> for BorrowingSolver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let longest = shared
            .words
            .iter()
            .map(|w| w.len())
            .max()
            .ok_or_else(|| SolveError::NoSolution("no words".into()))?;
        shared.longest = Some(longest);
        Ok(longest.to_string())
    }
}

impl PartSolver<2> for BorrowingSolver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let longest = shared.longest.unwrap_or(0);
        Ok(shared
            .words
            .iter()
            .filter(|w| w.len() == longest)
            .count()
            .to_string())
    }
}

#[test]
fn test_parts_constant_matches_attribute() {
    assert_eq!(<TestSolver as Solver>::PARTS, 2);
}

#[test]
fn test_solve_part_dispatches_to_part_solvers() {
    let mut shared = TestSolver::parse("1\n2\n3\n4").unwrap();
    assert_eq!(TestSolver::solve_part(&mut shared, 1).unwrap(), "10");
    assert_eq!(TestSolver::solve_part(&mut shared, 2).unwrap(), "24");
}

#[test]
fn test_unknown_part_is_not_implemented() {
    let mut shared = TestSolver::parse("1").unwrap();
    assert!(matches!(
        TestSolver::solve_part(&mut shared, 0),
        Err(SolveError::PartNotImplemented(0))
    ));
    assert!(matches!(
        TestSolver::solve_part(&mut shared, 3),
        Err(SolveError::PartNotImplemented(3))
    ));
}

#[test]
fn test_parts_share_mutable_state() {
    let input = String::from("to be or not to be");
    let mut shared = BorrowingSolver::parse(&input).unwrap();
    assert_eq!(BorrowingSolver::solve_part(&mut shared, 1).unwrap(), "3");
    assert_eq!(BorrowingSolver::solve_part(&mut shared, 2).unwrap(), "1");
}

#[test]
fn test_no_solution_is_propagated() {
    let mut shared = BorrowingSolver::parse("   ").unwrap();
    assert!(matches!(
        BorrowingSolver::solve_part(&mut shared, 1),
        Err(SolveError::NoSolution(_))
    ));
}
