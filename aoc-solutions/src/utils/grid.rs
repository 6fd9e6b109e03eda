//! Dense two-dimensional grid

use super::input::expect_len;
use aoc_solver::ParseError;

/// Row-major grid of cells with a fixed width and height
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    width: usize,
    height: usize,
    cells: Vec<T>,
}

impl<T> Grid<T> {
    /// Build a grid from text lines, mapping every character to a cell
    ///
    /// Every row must be as wide as the first one.
    pub fn from_lines<'a, I, F>(lines: I, mut cell: F) -> Result<Self, ParseError>
    where
        I: IntoIterator<Item = &'a str>,
        F: FnMut(char) -> Result<T, ParseError>,
    {
        let mut width = None;
        let mut height = 0;
        let mut cells = Vec::new();

        for line in lines {
            let row_width = line.chars().count();
            let expected = *width.get_or_insert(row_width);
            expect_len(format!("grid row {}", height + 1), expected, row_width)?;

            for ch in line.chars() {
                cells.push(cell(ch)?);
            }
            height += 1;
        }

        let width = width
            .filter(|&w| w > 0)
            .ok_or_else(|| ParseError::MissingData("empty grid".to_string()))?;

        Ok(Self {
            width,
            height,
            cells,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Cell at column `x`, row `y`
    pub fn get(&self, x: usize, y: usize) -> Option<&T> {
        if x < self.width && y < self.height {
            self.cells.get(y * self.width + x)
        } else {
            None
        }
    }

    /// Cell at row `y`, with the column wrapped modulo the width
    pub fn get_wrapping(&self, x: usize, y: usize) -> Option<&T> {
        self.get(x.checked_rem(self.width)?, y)
    }

    /// Overwrite the cell at column `x`, row `y`; returns false when out of bounds
    pub fn set(&mut self, x: usize, y: usize, value: T) -> bool {
        if x < self.width && y < self.height {
            self.cells[y * self.width + x] = value;
            true
        } else {
            false
        }
    }

    /// Rows from top to bottom; none for a zero-width grid
    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        self.cells.chunks(self.width.max(1))
    }

    /// Cells with their `(x, y)` position, row by row
    pub fn iter(&self) -> impl Iterator<Item = ((usize, usize), &T)> {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, cell)| ((i % self.width, i / self.width), cell))
    }
}

impl<T: Clone> Grid<T> {
    /// A `width` x `height` grid with every cell set to `value`
    pub fn filled(width: usize, height: usize, value: T) -> Self {
        Self {
            width,
            height,
            cells: vec![value; width * height],
        }
    }
}
