//! Plugin registration and tag filtering
//!
//! Two solvers register themselves with `AutoRegisterSolver`; the registry
//! is then built once with every plugin and once with only the tagged ones.
//!
//! Run with: cargo run --example plugin_system

use aoc_solver::{
    AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError,
    SolverRegistryBuilder,
};

/// Counts the lines and words of the input
#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2020, day = 24, tags = ["example", "text"])]
pub struct WordCount;

impl AocParser for WordCount {
    type SharedData<'a> = Vec<&'a str>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        Ok(input.lines().collect())
    }
}

impl PartSolver<1> for WordCount {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.len().to_string())
    }
}

impl PartSolver<2> for WordCount {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let words: usize = shared.iter().map(|l| l.split_whitespace().count()).sum();
        Ok(words.to_string())
    }
}

/// Finds the largest number, if there is one
#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 1)]
#[aoc(year = 2020, day = 25, tags = ["example", "numbers"])]
pub struct Largest;

impl AocParser for Largest {
    type SharedData<'a> = Vec<i64>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        Ok(input.split_whitespace().filter_map(|w| w.parse().ok()).collect())
    }
}

impl PartSolver<1> for Largest {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        shared
            .iter()
            .max()
            .map(i64::to_string)
            .ok_or_else(|| SolveError::NoSolution("no numbers in input".into()))
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let input = "the 3 little pigs\nbuilt 12 houses\n";

    let registry = SolverRegistryBuilder::new().register_all_plugins()?.build();
    println!("All plugins:");
    for info in registry.iter_info() {
        let mut solver = registry.create_solver(info.year, info.day, input)?;
        for part in 1..=info.parts {
            match solver.solve(part) {
                Ok(result) => println!(
                    "  {}/{:02} part {}: {} ({})",
                    info.year,
                    info.day,
                    part,
                    result.answer,
                    result.duration()
                ),
                Err(e) => println!("  {}/{:02} part {}: {}", info.year, info.day, part, e),
            }
        }
    }

    let numbers_only = SolverRegistryBuilder::new()
        .register_solver_plugins(|plugin| plugin.tags.contains(&"numbers"))?
        .build();
    println!("Tagged \"numbers\": {} solver(s)", numbers_only.len());
    for info in numbers_only.iter_info() {
        println!("  {}/{:02} ({} part(s))", info.year, info.day, info.parts);
    }

    Ok(())
}
