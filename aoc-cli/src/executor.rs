//! Sequential executor for running solvers

use crate::config::Config;
use crate::error::{ExecutorError, InputError};
use crate::inputs::InputStore;
use aoc_solver::{DynSolver, ParseError, SolverError, SolverRegistry};
use chrono::{TimeDelta, Utc};
use std::ops::RangeInclusive;

/// Result from a single solver execution
#[derive(Debug)]
pub struct SolverResult {
    pub year: u16,
    pub day: u8,
    pub part: u8,
    pub answer: Result<String, SolverError>,
    /// Set on the first part run against a freshly parsed input
    pub parse_duration: Option<TimeDelta>,
    pub solve_duration: TimeDelta,
}

impl SolverResult {
    /// Failed for a reason other than the input having no answer
    pub fn is_failure(&self) -> bool {
        matches!(&self.answer, Err(e) if !e.is_no_solution())
    }
}

/// Work item representing a solver to execute
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkItem {
    pub year: u16,
    pub day: u8,
    pub parts: RangeInclusive<u8>,
}

/// Runs every selected solver in `(year, day, part)` order
pub struct Executor {
    registry: SolverRegistry,
    inputs: InputStore,
    year_filter: Option<u16>,
    day_filter: Option<u8>,
    part_filter: Option<u8>,
}

impl Executor {
    /// Create a new executor from config
    pub fn new(registry: SolverRegistry, config: &Config) -> Self {
        Self {
            registry,
            inputs: InputStore::new(config.input_dir.clone()),
            year_filter: config.year_filter,
            day_filter: config.day_filter,
            part_filter: config.part_filter,
        }
    }

    pub fn inputs(&self) -> &InputStore {
        &self.inputs
    }

    /// Collect work items by filtering from registry metadata
    pub fn collect_work_items(&self) -> Vec<WorkItem> {
        self.registry
            .iter_info()
            .filter(|info| self.year_filter.is_none_or(|y| info.year == y))
            .filter(|info| self.day_filter.is_none_or(|d| info.day == d))
            .map(|info| WorkItem {
                year: info.year,
                day: info.day,
                parts: self.filter_parts(info.parts),
            })
            .filter(|w| !w.parts.is_empty())
            .collect()
    }

    /// Filter parts based on the part filter and solver's max parts
    #[allow(clippy::reversed_empty_ranges)]
    fn filter_parts(&self, max_parts: u8) -> RangeInclusive<u8> {
        match self.part_filter {
            Some(p) if p <= max_parts => p..=p,
            Some(_) => 1..=0,
            None => 1..=max_parts,
        }
    }

    /// Execute all work items, handing each result to `on_result` in order
    ///
    /// Every selected part yields exactly one result. Parts that report
    /// `NoSolution` are not errors; anything else that fails is collected
    /// and returned once all work items have run.
    pub fn execute<F>(&self, mut on_result: F) -> Result<(), ExecutorError>
    where
        F: FnMut(SolverResult),
    {
        let mut collected_error: Option<ExecutorError> = None;
        for work in self.collect_work_items() {
            if let Err(e) = self.run_work_item(&work, &mut on_result) {
                collected_error = Some(ExecutorError::combine_opt(collected_error, e));
            }
        }
        collected_error.map_or(Ok(()), Err)
    }

    fn run_work_item<F>(&self, work: &WorkItem, on_result: &mut F) -> Result<(), ExecutorError>
    where
        F: FnMut(SolverResult),
    {
        let (year, day) = (work.year, work.day);
        log::debug!("running {}/{:02} parts {:?}", year, day, work.parts);

        let input = match self.inputs.read(year, day) {
            Ok(input) => input,
            Err(e) => {
                for part in work.parts.clone() {
                    on_result(make_error_result(year, day, part, input_parse_error(&e)));
                }
                return Err(ExecutorError::Input { year, day, source: e });
            }
        };

        let mut solver = match self.registry.create_solver(year, day, &input) {
            Ok(solver) => solver,
            Err(e) => {
                let error = match e {
                    SolverError::ParseError(pe) => pe,
                    other => ParseError::Other(other.to_string()),
                };
                for part in work.parts.clone() {
                    on_result(make_error_result(year, day, part, error.clone()));
                }
                return Err(ExecutorError::Parse { year, day, source: error });
            }
        };

        let mut parse_duration = Some(solver.parse_duration());
        let mut collected_error: Option<ExecutorError> = None;
        for part in work.parts.clone() {
            let result = solve_part(year, day, part, &mut *solver, parse_duration.take());
            if let Err(e) = &result.answer {
                if e.is_no_solution() {
                    log::debug!("{}/{:02} part {}: {}", year, day, part, e);
                } else {
                    let error = ExecutorError::Solve {
                        year,
                        day,
                        part,
                        message: e.to_string(),
                    };
                    collected_error = Some(ExecutorError::combine_opt(collected_error, error));
                }
            }
            on_result(result);
        }
        collected_error.map_or(Ok(()), Err)
    }
}

fn input_parse_error(e: &InputError) -> ParseError {
    ParseError::MissingData(e.to_string())
}

/// Create an error result for a part that never got to run
fn make_error_result(year: u16, day: u8, part: u8, error: ParseError) -> SolverResult {
    SolverResult {
        year,
        day,
        part,
        answer: Err(SolverError::ParseError(error)),
        parse_duration: None,
        solve_duration: TimeDelta::zero(),
    }
}

/// Solve a single part
fn solve_part(
    year: u16,
    day: u8,
    part: u8,
    solver: &mut dyn DynSolver,
    parse_duration: Option<TimeDelta>,
) -> SolverResult {
    let start = Utc::now();
    let (answer, solve_duration) = match solver.solve(part) {
        Ok(result) => {
            let duration = result.duration();
            (Ok(result.answer), duration)
        }
        Err(e) => (Err(e.into()), Utc::now() - start),
    };

    SolverResult {
        year,
        day,
        part,
        answer,
        parse_duration,
        solve_duration,
    }
}
