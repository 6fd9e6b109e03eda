//! Day 3: Toboggan Trajectory

use crate::utils::grid::Grid;
use crate::utils::input::lines;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2020, day = 3, tags = ["2020", "grid"])]
pub struct Solver;

/// Step vector of a descent: `right` columns and `down` rows per move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slope {
    pub right: usize,
    pub down: usize,
}

impl Slope {
    pub const fn new(right: usize, down: usize) -> Self {
        Self { right, down }
    }
}

pub const PART_1_SLOPE: Slope = Slope::new(3, 1);

pub const ALL_SLOPES: [Slope; 5] = [
    Slope::new(1, 1),
    Slope::new(3, 1),
    Slope::new(5, 1),
    Slope::new(7, 1),
    Slope::new(1, 2),
];

/// Map of open squares (`false`) and trees (`true`), repeating to the right
pub type TreeMap = Grid<bool>;

impl AocParser for Solver {
    type SharedData<'a> = TreeMap;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let rows = lines(input).into_iter().filter(|line| !line.trim().is_empty());
        Grid::from_lines(rows, |ch| match ch {
            '.' => Ok(false),
            '#' => Ok(true),
            other => Err(ParseError::InvalidFormat(format!(
                "unexpected map character {other:?}"
            ))),
        })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(count_trees(shared, PART_1_SLOPE).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let product: u64 = ALL_SLOPES
            .iter()
            .map(|&slope| {
                let trees = count_trees(shared, slope);
                log::info!("({},{}) encountered {} trees", slope.right, slope.down, trees);
                trees as u64
            })
            .product();
        Ok(product.to_string())
    }
}

/// Trees hit walking from the top-left corner until falling past the bottom row
///
/// The starting square is not counted. A slope with `down == 0` never
/// leaves the map and hits nothing.
pub fn count_trees(map: &TreeMap, slope: Slope) -> usize {
    if slope.down == 0 {
        return 0;
    }

    let (mut x, mut y) = (0, 0);
    let mut hits = 0;
    loop {
        x = (x + slope.right) % map.width();
        y += slope.down;
        match map.get_wrapping(x, y) {
            Some(true) => hits += 1,
            Some(false) => {}
            None => break,
        }
    }
    hits
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    const EXAMPLE: &str = indoc! {"
        ..##.......
        #...#...#..
        .#....#..#.
        ..#.#...#.#
        .#...##..#.
        ..#.##.....
        .#.#.#....#
        .#........#
        #.##...#...
        #...##....#
        .#..#...#.#
    "};

    #[test]
    fn test_slope_hit_counts() {
        let map = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(map.width(), 11);
        assert_eq!(map.height(), 11);

        let hits: Vec<_> = ALL_SLOPES.iter().map(|&s| count_trees(&map, s)).collect();
        assert_eq!(hits, vec![2, 7, 3, 4, 2]);
    }

    #[test]
    fn test_example() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(<Solver as PartSolver<1>>::solve(&mut shared).unwrap(), "7");
        assert_eq!(<Solver as PartSolver<2>>::solve(&mut shared).unwrap(), "336");
    }

    #[test]
    fn test_horizontal_slope_hits_nothing() {
        let map = Solver::parse("##\n##\n").unwrap();
        assert_eq!(count_trees(&map, Slope::new(1, 0)), 0);
    }

    #[test]
    fn test_blank_lines_skipped() {
        let map = Solver::parse("..#\n..#\n\n").unwrap();
        assert_eq!((map.width(), map.height()), (3, 2));

        let map = Solver::parse("\n.#\r\n#.\r\n\r\n").unwrap();
        assert_eq!((map.width(), map.height()), (2, 2));
        assert_eq!(count_trees(&map, Slope::new(1, 1)), 0);
    }

    #[test]
    fn test_bad_character_rejected() {
        assert!(matches!(Solver::parse("..#\n.X.\n"), Err(ParseError::InvalidFormat(_))));
    }

    #[test]
    fn test_ragged_map_rejected() {
        assert!(matches!(
            Solver::parse("..#\n..\n"),
            Err(ParseError::InputSizeMismatch { expected: 3, actual: 2, .. })
        ));
    }
}
