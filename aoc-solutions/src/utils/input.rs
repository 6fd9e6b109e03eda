//! Line and group splitting shared by the puzzle parsers

use anyhow::anyhow;
use aoc_solver::ParseError;
use std::fmt::Display;
use std::str::FromStr;

/// All lines of the input, blank lines included
///
/// Accepts `\n` and `\r\n` endings; a trailing newline does not produce an
/// extra empty line.
pub fn lines(input: &str) -> Vec<&str> {
    input.lines().collect()
}

/// Blank-line-delimited groups of non-empty lines
///
/// The last group is kept whether or not the input ends with a blank line,
/// and runs of blank lines never produce empty groups.
pub fn groups(input: &str) -> Vec<Vec<&str>> {
    let mut groups = Vec::new();
    let mut current = Vec::new();

    for line in input.lines() {
        if line.trim().is_empty() {
            if !current.is_empty() {
                groups.push(std::mem::take(&mut current));
            }
        } else {
            current.push(line);
        }
    }
    if !current.is_empty() {
        groups.push(current);
    }
    groups
}

/// Parse one number per line, skipping blank lines
///
/// Any other line that fails to parse is an error naming its 1-based line
/// number.
pub fn parse_numbers<T>(input: &str) -> Result<Vec<T>, ParseError>
where
    T: FromStr,
    T::Err: Display,
{
    input
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(line_idx, line)| {
            line.trim()
                .parse::<T>()
                .map_err(|e| anyhow!("(line {}) {:?}: {}", line_idx + 1, line, e))
        })
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| ParseError::InvalidFormat(e.to_string()))
}

/// Fail with [`ParseError::InputSizeMismatch`] unless `actual == expected`
pub fn expect_len(what: impl Into<String>, expected: usize, actual: usize) -> Result<(), ParseError> {
    if expected == actual {
        Ok(())
    } else {
        Err(ParseError::InputSizeMismatch {
            what: what.into(),
            expected,
            actual,
        })
    }
}
