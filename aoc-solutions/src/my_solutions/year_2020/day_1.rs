//! Day 1: Report Repair

use crate::utils::input::parse_numbers;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;

/// The sum every matching combination of expenses adds up to
pub const TARGET: u64 = 2020;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2020, day = 1, tags = ["2020", "arithmetic"])]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = Vec<u64>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        parse_numbers(input)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        product_of_combination(shared, 2, TARGET).map(|p| p.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        product_of_combination(shared, 3, TARGET).map(|p| p.to_string())
    }
}

/// First `k` entries, taken at distinct positions, that sum to `target`
pub fn find_combination(expenses: &[u64], k: usize, target: u64) -> Option<Vec<u64>> {
    expenses
        .iter()
        .copied()
        .combinations(k)
        .find(|combo| checked_sum(combo) == Some(target))
}

fn checked_sum(values: &[u64]) -> Option<u64> {
    values.iter().try_fold(0u64, |acc, &v| acc.checked_add(v))
}

fn product_of_combination(expenses: &[u64], k: usize, target: u64) -> Result<u64, SolveError> {
    let combo = find_combination(expenses, k, target).ok_or_else(|| {
        SolveError::NoSolution(format!("no {k} entries sum to {target}"))
    })?;
    log::debug!("{} = {}", combo.iter().join(" + "), target);
    Ok(combo.iter().product())
}
