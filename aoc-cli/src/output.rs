//! Output formatting for solver results

use crate::executor::SolverResult;
use aoc_solver::{SolveError, SolverError};
use chrono::{DateTime, TimeDelta, Utc};

/// Output formatter for solver results
pub struct OutputFormatter {
    quiet: bool,
    start_time: DateTime<Utc>,
}

/// Counts and total timings over a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub solved: usize,
    pub unsolved: usize,
    pub failed: usize,
    pub parse_time: TimeDelta,
    pub solve_time: TimeDelta,
}

impl Summary {
    pub fn from_results(results: &[SolverResult]) -> Self {
        let solved = results.iter().filter(|r| r.answer.is_ok()).count();
        let failed = results.iter().filter(|r| r.is_failure()).count();
        Self {
            solved,
            unsolved: results.len() - solved - failed,
            failed,
            parse_time: results.iter().filter_map(|r| r.parse_duration).sum(),
            solve_time: results.iter().map(|r| r.solve_duration).sum(),
        }
    }
}

impl OutputFormatter {
    /// Create a new output formatter
    pub fn new(quiet: bool) -> Self {
        Self {
            quiet,
            start_time: Utc::now(),
        }
    }

    /// Format and print a single result
    pub fn print_result(&self, result: &SolverResult) {
        match self.format_result(result) {
            Ok(line) => println!("{}", line),
            Err(line) => eprintln!("{}", line),
        }
    }

    /// The line to print: `Ok` for stdout, `Err` for stderr
    fn format_result(&self, result: &SolverResult) -> Result<String, String> {
        if self.quiet {
            return match &result.answer {
                Ok(answer) => Ok(answer.clone()),
                Err(e) => match no_solution_reason(e) {
                    Some(reason) => Err(format!("No solution: {}", reason)),
                    None => Err(format!("Error: {}", e)),
                },
            };
        }

        let prefix = format!("{}/{:02} Answer {}", result.year, result.day, result.part);
        match &result.answer {
            Ok(answer) => {
                let parse_timing = result
                    .parse_duration
                    .map(|d| format!("parse: {}, ", format_duration(d)))
                    .unwrap_or_default();
                Ok(format!(
                    "{}: {} ({}solve: {})",
                    prefix,
                    answer,
                    parse_timing,
                    format_duration(result.solve_duration)
                ))
            }
            Err(e) => match no_solution_reason(e) {
                Some(reason) => Ok(format!("{}: no solution ({})", prefix, reason)),
                None => Err(format!("{}: Error - {}", prefix, e)),
            },
        }
    }

    /// Print a summary after all results
    /// Shows total parse and solve time and the elapsed wall-clock time
    pub fn print_summary(&self, results: &[SolverResult]) {
        if self.quiet {
            return;
        }

        let summary = Summary::from_results(results);
        let elapsed_time = Utc::now() - self.start_time;

        println!();
        println!("--- Summary ---");
        println!(
            "Parts: {} solved, {} without solution, {} failed",
            summary.solved, summary.unsolved, summary.failed
        );
        println!("Total parse time: {}", format_duration(summary.parse_time));
        println!("Total solve time: {}", format_duration(summary.solve_time));
        println!("Elapsed wall-clock time: {}", format_duration(elapsed_time));
    }
}

fn no_solution_reason(e: &SolverError) -> Option<&str> {
    match e {
        SolverError::SolveError(SolveError::NoSolution(reason)) => Some(reason),
        _ => None,
    }
}

/// Format a TimeDelta for display
fn format_duration(d: TimeDelta) -> String {
    let Some(micros) = d.num_microseconds() else {
        return "N/A".to_string();
    };

    if micros < 0 {
        return format!("-{}", format_duration(-d));
    }

    if micros < 1000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", micros as f64 / 1_000_000.0)
    }
}
