//! Error types for the CLI

use std::path::PathBuf;
use thiserror::Error;

/// Main CLI error type
#[derive(Error, Debug)]
pub enum CliError {
    /// Inputs absent for some selected puzzles
    #[error("Missing {} input file(s): {}", .0.len(), format_missing(.0))]
    MissingInputs(Vec<(u16, u8)>),

    /// Registration error
    #[error("Registration error: {0}")]
    Registration(#[from] aoc_solver::RegistrationError),

    /// Executor error
    #[error("{0}")]
    Executor(#[from] ExecutorError),
}

fn format_missing(missing: &[(u16, u8)]) -> String {
    missing
        .iter()
        .map(|(year, day)| format!("{}/day{:02}", year, day))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Executor-specific errors
#[derive(Error, Debug)]
pub enum ExecutorError {
    /// Input could not be loaded
    #[error("Input unavailable for {year}/{day:02}: {source}")]
    Input {
        year: u16,
        day: u8,
        #[source]
        source: InputError,
    },

    /// Input could not be parsed
    #[error("Parsing failed for {year}/{day:02}: {source}")]
    Parse {
        year: u16,
        day: u8,
        #[source]
        source: aoc_solver::ParseError,
    },

    /// A part failed to solve
    #[error("Solving {year}/{day:02} part {part} failed: {message}")]
    Solve {
        year: u16,
        day: u8,
        part: u8,
        message: String,
    },

    /// Multiple errors collected during execution
    #[error("Multiple errors occurred ({} total)", .0.len())]
    Multiple(Vec<ExecutorError>),
}

impl ExecutorError {
    /// Combine two errors into one, flattening nested `Multiple`s
    pub fn combine(first: ExecutorError, second: ExecutorError) -> ExecutorError {
        let errors = match (first, second) {
            (ExecutorError::Multiple(mut v1), ExecutorError::Multiple(v2)) => {
                v1.extend(v2);
                v1
            }
            (first, ExecutorError::Multiple(v)) => {
                let mut combined = vec![first];
                combined.extend(v);
                combined
            }
            (ExecutorError::Multiple(mut v), second) => {
                v.push(second);
                v
            }
            (first, second) => vec![first, second],
        };
        ExecutorError::Multiple(errors)
    }

    /// Combine an optional error with a new error
    pub fn combine_opt(existing: Option<ExecutorError>, new: ExecutorError) -> ExecutorError {
        match existing {
            Some(e) => Self::combine(e, new),
            None => new,
        }
    }
}

/// Input loading errors
#[derive(Error, Debug)]
pub enum InputError {
    /// No file at the expected path
    #[error("input file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// File exists but could not be read
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solve_error(part: u8) -> ExecutorError {
        ExecutorError::Solve {
            year: 2020,
            day: 1,
            part,
            message: "boom".into(),
        }
    }

    #[test]
    fn test_combine_flattens() {
        let combined = ExecutorError::combine(solve_error(1), solve_error(2));
        let combined = ExecutorError::combine_opt(Some(combined), solve_error(3));
        let combined = ExecutorError::combine(solve_error(0), combined);
        match combined {
            ExecutorError::Multiple(errors) => {
                let parts: Vec<_> = errors
                    .iter()
                    .map(|e| match e {
                        ExecutorError::Solve { part, .. } => *part,
                        other => panic!("unexpected {other:?}"),
                    })
                    .collect();
                assert_eq!(parts, vec![0, 1, 2, 3]);
            }
            other => panic!("expected Multiple, got {other:?}"),
        }
    }

    #[test]
    fn test_combine_opt_without_existing() {
        assert!(matches!(
            ExecutorError::combine_opt(None, solve_error(1)),
            ExecutorError::Solve { part: 1, .. }
        ));
    }

    #[test]
    fn test_missing_inputs_message() {
        let e = CliError::MissingInputs(vec![(2020, 1), (2020, 12)]);
        assert_eq!(
            e.to_string(),
            "Missing 2 input file(s): 2020/day01, 2020/day12"
        );
    }
}
