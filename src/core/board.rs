//! The tile grid.
//!
//! `Board` is a plain row-major grid of `u64` cells where `0` is empty. It
//! knows how to walk its lines in the scan order of a direction, but holds
//! no game rules: merging, scoring and spawning live in `crate::game`.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::Direction;
use crate::error::{Error, Result};

/// Non-zero tiles of one line, in scan order.
pub type Line = SmallVec<[u64; 8]>;

/// A `width` x `height` grid of tile values, origin top-left.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    width: usize,
    height: usize,
    cells: Vec<u64>,
}

impl Board {
    /// Create an all-empty board.
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        assert!(width > 0 && height > 0, "Board dimensions must be at least 1x1");
        Self {
            width,
            height,
            cells: vec![0; width * height],
        }
    }

    /// Build a board from explicit rows.
    ///
    /// Every row must have the same non-zero length and every value must be
    /// zero or a power of two >= 2.
    pub fn from_rows<R: AsRef<[u64]>>(rows: &[R]) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.as_ref().len());
        if height == 0 || width == 0 {
            return Err(Error::InvalidBoard("board must have at least one cell".into()));
        }

        let mut cells = Vec::with_capacity(width * height);
        for (row_idx, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != width {
                return Err(Error::InvalidBoard(format!(
                    "row {} has {} cells, expected {}",
                    row_idx,
                    row.len(),
                    width
                )));
            }
            for &value in row {
                if value == 1 || (value != 0 && !value.is_power_of_two()) {
                    return Err(Error::InvalidBoard(format!("{} is not a valid tile", value)));
                }
            }
            cells.extend_from_slice(row);
        }

        Ok(Self { width, height, cells })
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Value at `(row, col)`. Panics when out of bounds.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> u64 {
        self.cells[self.index(row, col)]
    }

    pub(crate) fn set(&mut self, row: usize, col: usize, value: u64) {
        let idx = self.index(row, col);
        self.cells[idx] = value;
    }

    /// All cells, row-major.
    #[must_use]
    pub fn cells(&self) -> &[u64] {
        &self.cells
    }

    /// Iterate rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[u64]> + '_ {
        self.cells.chunks(self.width)
    }

    /// Rows as owned vectors.
    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<u64>> {
        self.rows().map(<[u64]>::to_vec).collect()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&v| v != 0)
    }

    #[must_use]
    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|&&v| v == 0).count()
    }

    #[must_use]
    pub fn tile_count(&self) -> usize {
        self.cells.len() - self.empty_count()
    }

    #[must_use]
    pub fn contains(&self, value: u64) -> bool {
        self.cells.contains(&value)
    }

    #[must_use]
    pub fn max_tile(&self) -> u64 {
        self.cells.iter().copied().max().unwrap_or(0)
    }

    /// True when some cell equals its right or lower neighbour.
    ///
    /// Checking right and down from every cell covers all four neighbours.
    #[must_use]
    pub fn has_adjacent_equal(&self) -> bool {
        for row in 0..self.height {
            for col in 0..self.width {
                let value = self.get(row, col);
                if col + 1 < self.width && value == self.get(row, col + 1) {
                    return true;
                }
                if row + 1 < self.height && value == self.get(row + 1, col) {
                    return true;
                }
            }
        }
        false
    }

    /// Number of lines a move in `dir` operates on.
    #[must_use]
    pub fn line_count(&self, dir: Direction) -> usize {
        if dir.is_vertical() {
            self.width
        } else {
            self.height
        }
    }

    /// Length of each line a move in `dir` operates on.
    #[must_use]
    pub fn line_len(&self, dir: Direction) -> usize {
        if dir.is_vertical() {
            self.height
        } else {
            self.width
        }
    }

    /// Non-zero values of line `line`, in the scan order of `dir`.
    #[must_use]
    pub fn read_line(&self, dir: Direction, line: usize) -> Line {
        (0..self.line_len(dir))
            .map(|pos| {
                let (row, col) = self.scan_position(dir, line, pos);
                self.get(row, col)
            })
            .filter(|&v| v != 0)
            .collect()
    }

    /// Write `values` into line `line` in the scan order of `dir`.
    pub(crate) fn write_line(&mut self, dir: Direction, line: usize, values: &[u64]) {
        debug_assert_eq!(values.len(), self.line_len(dir));
        for (pos, &value) in values.iter().enumerate() {
            let (row, col) = self.scan_position(dir, line, pos);
            self.set(row, col, value);
        }
    }

    /// `(row, col)` of the `pos`-th cell of line `line` when scanning for `dir`.
    ///
    /// Scans start at the wall tiles move toward.
    fn scan_position(&self, dir: Direction, line: usize, pos: usize) -> (usize, usize) {
        match dir {
            Direction::Up => (pos, line),
            Direction::Down => (self.height - 1 - pos, line),
            Direction::Left => (line, pos),
            Direction::Right => (line, self.width - 1 - pos),
        }
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> usize {
        assert!(row < self.height && col < self.width, "cell ({}, {}) out of bounds", row, col);
        row * self.width + col
    }

    fn write_border(
        &self,
        f: &mut std::fmt::Formatter<'_>,
        left: char,
        fill: &str,
        join: char,
        right: char,
    ) -> std::fmt::Result {
        write!(f, "{}", left)?;
        for col in 0..self.width {
            f.write_str(fill)?;
            write!(f, "{}", if col + 1 < self.width { join } else { right })?;
        }
        writeln!(f)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.write_border(f, '╔', "════", '╤', '╗')?;

        for (row_idx, row) in self.rows().enumerate() {
            write!(f, "║")?;
            for (col_idx, &value) in row.iter().enumerate() {
                if value > 0 {
                    write!(f, "{:4}", value)?;
                } else {
                    f.write_str("    ")?;
                }
                write!(f, "{}", if col_idx + 1 < self.width { '│' } else { '║' })?;
            }
            writeln!(f)?;

            if row_idx + 1 < self.height {
                self.write_border(f, '╟', "────", '┼', '╢')?;
            } else {
                self.write_border(f, '╚', "════", '╧', '╝')?;
            }
        }

        Ok(())
    }
}
