//! Day 5: Binary Boarding

use crate::utils::grid::Grid;
use crate::utils::input::expect_len;
use anyhow::anyhow;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use std::fmt;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2020, day = 5, tags = ["2020", "binary"])]
pub struct Solver;

pub const ROWS: usize = 128;
pub const COLS: usize = 8;

const ROW_SYMBOLS: usize = 7;
const COL_SYMBOLS: usize = 3;
const LOCATOR_LEN: usize = ROW_SYMBOLS + COL_SYMBOLS;

/// Narrow `0..2^len` down to one value, `lower` keeping the lower half
/// and `upper` the upper half at each step
pub fn decode_partition(symbols: &str, lower: char, upper: char) -> anyhow::Result<u16> {
    let (mut lo, mut hi) = (0u16, (1u16 << symbols.len()) - 1);
    for ch in symbols.chars() {
        let mid = lo + (hi - lo) / 2;
        if ch == lower {
            hi = mid;
        } else if ch == upper {
            lo = mid + 1;
        } else {
            return Err(anyhow!("unexpected symbol {:?}, expected {:?} or {:?}", ch, lower, upper));
        }
    }
    Ok(lo)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Seat {
    pub row: u16,
    pub col: u16,
}

impl Seat {
    pub fn from_id(id: u16) -> Self {
        Self {
            row: id / COLS as u16,
            col: id % COLS as u16,
        }
    }

    pub fn id(self) -> u16 {
        self.row * COLS as u16 + self.col
    }

    /// Decode a 10-symbol locator such as `FBFBBFFRLR`
    pub fn decode(locator: &str) -> Result<Self, ParseError> {
        expect_len("seat locator", LOCATOR_LEN, locator.chars().count())?;
        if !locator.is_ascii() {
            return Err(ParseError::InvalidFormat(format!("non-ASCII seat locator {locator:?}")));
        }
        let (rows, cols) = locator.split_at(ROW_SYMBOLS);
        let seat = decode_partition(rows, 'F', 'B')
            .and_then(|row| Ok((row, decode_partition(cols, 'L', 'R')?)))
            .map(|(row, col)| Seat { row, col })
            .map_err(|e| ParseError::InvalidFormat(format!("{locator:?}: {e}")))?;
        Ok(seat)
    }
}

/// Occupancy of every seat on the plane, one grid row per plane row
pub struct SeatMap(Grid<bool>);

impl SeatMap {
    pub fn new(seats: &[Seat]) -> Self {
        let mut grid = Grid::filled(COLS, ROWS, false);
        for seat in seats {
            grid.set(seat.col as usize, seat.row as usize, true);
        }
        Self(grid)
    }

    pub fn is_occupied(&self, id: u16) -> bool {
        let seat = Seat::from_id(id);
        self.0
            .get(seat.col as usize, seat.row as usize)
            .copied()
            .unwrap_or(false)
    }

    /// Empty seat whose id neighbours are both taken
    pub fn find_gap(&self) -> Option<Seat> {
        let last = (ROWS * COLS - 1) as u16;
        (1..last)
            .find(|&id| !self.is_occupied(id) && self.is_occupied(id - 1) && self.is_occupied(id + 1))
            .map(Seat::from_id)
    }
}

impl fmt::Display for SeatMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.0.rows().enumerate() {
            for &taken in cells {
                f.write_str(if taken { "x" } else { "." })?;
            }
            writeln!(f, "  {row:03}")?;
        }
        Ok(())
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Seat>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        input
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(Seat::decode)
            .collect()
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        shared
            .iter()
            .map(|seat| seat.id())
            .max()
            .map(|id| id.to_string())
            .ok_or_else(|| SolveError::NoSolution("no boarding passes".into()))
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let map = SeatMap::new(shared);
        log::debug!("seat map:\n{}", map);
        let seat = map
            .find_gap()
            .ok_or_else(|| SolveError::NoSolution("no empty seat between two taken seats".into()))?;
        log::info!("free seat at row {} column {}", seat.row, seat.col);
        Ok(seat.id().to_string())
    }
}
