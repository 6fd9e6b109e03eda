//! Day 2: Password Philosophy

use anyhow::{Context, anyhow};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use regex::Regex;
use std::sync::LazyLock;

static POLICY_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)-(\d+) (\S)$").expect("policy regex is valid"));

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2020, day = 2, tags = ["2020", "parsing"])]
pub struct Solver;

/// How the two numbers of a policy are interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordPolicy {
    /// The letter occurs between `low` and `high` times, inclusive
    CountRange,
    /// Exactly one of the 1-indexed positions `low` and `high` holds the letter
    ExactlyOnePosition,
}

/// One `low-high letter: password` line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordEntry<'a> {
    pub low: usize,
    pub high: usize,
    pub letter: char,
    pub password: &'a str,
}

impl<'a> PasswordEntry<'a> {
    pub fn parse(line: &'a str) -> anyhow::Result<Self> {
        let (policy, password) = line
            .split_once(':')
            .ok_or_else(|| anyhow!("missing ':' separator"))?;

        let caps = POLICY_REGEX
            .captures(policy.trim())
            .ok_or_else(|| anyhow!("policy {:?} is not `low-high letter`", policy.trim()))?;
        let low = caps[1].parse().context("low bound")?;
        let high = caps[2].parse().context("high bound")?;
        let letter = caps[3]
            .chars()
            .next()
            .ok_or_else(|| anyhow!("missing policy letter"))?;

        let password = password.trim();
        if password.is_empty() || password.contains(char::is_whitespace) {
            return Err(anyhow!("password {:?} must be a single word", password));
        }

        Ok(Self {
            low,
            high,
            letter,
            password,
        })
    }

    pub fn is_valid(&self, policy: PasswordPolicy) -> bool {
        match policy {
            PasswordPolicy::CountRange => {
                let occurrences = self.password.chars().filter(|&c| c == self.letter).count();
                (self.low..=self.high).contains(&occurrences)
            }
            PasswordPolicy::ExactlyOnePosition => {
                self.letter_at(self.low) != self.letter_at(self.high)
            }
        }
    }

    fn letter_at(&self, position: usize) -> bool {
        position
            .checked_sub(1)
            .and_then(|idx| self.password.chars().nth(idx))
            == Some(self.letter)
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<PasswordEntry<'a>>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(line_idx, line)| {
                PasswordEntry::parse(line)
                    .map_err(|e| anyhow!("(line {}) {:#}", line_idx + 1, e))
            })
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| ParseError::InvalidFormat(e.to_string()))
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(count_valid(shared, PasswordPolicy::CountRange).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(count_valid(shared, PasswordPolicy::ExactlyOnePosition).to_string())
    }
}

fn count_valid(entries: &[PasswordEntry<'_>], policy: PasswordPolicy) -> usize {
    entries
        .iter()
        .filter(|entry| {
            let valid = entry.is_valid(policy);
            log::debug!("{:?} under {:?}: valid={}", entry, policy, valid);
            valid
        })
        .count()
}
