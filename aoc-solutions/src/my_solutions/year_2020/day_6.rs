//! Day 6: Custom Customs

use crate::utils::input::groups;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2020, day = 6, tags = ["2020", "set"])]
pub struct Solver;

/// How many members of one group answered yes to each question `a`-`z`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerTally {
    counts: [usize; 26],
    respondents: usize,
}

impl AnswerTally {
    /// Tally one group, one line per respondent
    pub fn from_group(lines: &[&str]) -> Result<Self, ParseError> {
        let mut tally = Self::default();
        for line in lines {
            tally.add_respondent(line.trim())?;
        }
        Ok(tally)
    }

    fn add_respondent(&mut self, answers: &str) -> Result<(), ParseError> {
        // a letter repeated on one line is still one answer
        let mut answered = [false; 26];
        for ch in answers.chars() {
            if !ch.is_ascii_lowercase() {
                return Err(ParseError::InvalidFormat(format!(
                    "unexpected answer {ch:?} in {answers:?}"
                )));
            }
            answered[(ch as u8 - b'a') as usize] = true;
        }
        for (count, yes) in self.counts.iter_mut().zip(answered) {
            *count += usize::from(yes);
        }
        self.respondents += 1;
        Ok(())
    }

    pub fn respondents(&self) -> usize {
        self.respondents
    }

    /// Questions answered by at least one member
    pub fn anyone(&self) -> usize {
        self.counts.iter().filter(|&&n| n > 0).count()
    }

    /// Questions answered by every member
    pub fn everyone(&self) -> usize {
        if self.respondents == 0 {
            return 0;
        }
        self.counts.iter().filter(|&&n| n == self.respondents).count()
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<AnswerTally>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let tallies = groups(input)
            .iter()
            .map(|group| AnswerTally::from_group(group))
            .collect::<Result<Vec<_>, _>>()?;
        log::debug!("tallied {} groups", tallies.len());
        Ok(tallies)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().map(AnswerTally::anyone).sum::<usize>().to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().map(AnswerTally::everyone).sum::<usize>().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    const EXAMPLE: &str = indoc! {"
        abc

        a
        b
        c

        ab
        ac

        a
        a
        a
        a

        b
    "};

    #[test]
    fn test_group_tallies() {
        let tallies = Solver::parse(EXAMPLE).unwrap();
        let anyone: Vec<_> = tallies.iter().map(AnswerTally::anyone).collect();
        let everyone: Vec<_> = tallies.iter().map(AnswerTally::everyone).collect();
        assert_eq!(anyone, vec![3, 3, 3, 1, 1]);
        assert_eq!(everyone, vec![3, 0, 1, 1, 1]);
        assert_eq!(tallies[3].respondents(), 4);
    }

    #[test]
    fn test_example() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(<Solver as PartSolver<1>>::solve(&mut shared).unwrap(), "11");
        assert_eq!(<Solver as PartSolver<2>>::solve(&mut shared).unwrap(), "6");
    }

    #[test]
    fn test_last_group_without_trailing_blank() {
        let mut shared = Solver::parse("ab\nb\n\nxy\nyz").unwrap();
        assert_eq!(shared.len(), 2);
        assert_eq!(<Solver as PartSolver<2>>::solve(&mut shared).unwrap(), "2");
    }

    #[test]
    fn test_tallies_do_not_leak_between_groups() {
        let tallies = Solver::parse("a\na\n\na\nb\n").unwrap();
        assert_eq!(tallies[1].everyone(), 0);
    }

    #[test]
    fn test_repeated_letter_counts_once_per_respondent() {
        let mut shared = Solver::parse("aa\n").unwrap();
        assert_eq!(<Solver as PartSolver<2>>::solve(&mut shared).unwrap(), "1");

        let mut shared = Solver::parse("aa\nb\n").unwrap();
        assert_eq!(<Solver as PartSolver<1>>::solve(&mut shared).unwrap(), "2");
        assert_eq!(<Solver as PartSolver<2>>::solve(&mut shared).unwrap(), "0");
    }

    #[test]
    fn test_uppercase_rejected() {
        assert!(matches!(Solver::parse("abC\n"), Err(ParseError::InvalidFormat(_))));
    }
}
