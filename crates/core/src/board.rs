//! Board module - owns the gem grid
//!
//! The board is an R x C grid where each cell is empty or holds a gem.
//! Uses a flat vector (row-major) sized once at construction; dimensions never change.
//! Coordinates: `Position { row, col }` with row 0 at the top (the refill row).
//!
//! Cell values are only written by swap, sweep, gravity, refill and reset.
//! See [`crate::matching`] and [`crate::gravity`] for those operations.

use crate::error::BoardError;
use crate::rng::SimpleRng;
use crate::types::{Cell, Position, DEFAULT_COLS, DEFAULT_ROWS};

/// The gem board - flat row-major storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    cols: usize,
    /// Row-major cells (row * cols + col)
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new all-empty board
    pub fn new(rows: usize, cols: usize) -> Result<Self, BoardError> {
        let invalid = BoardError::InvalidDimensions { rows, cols };
        if rows == 0 || cols == 0 {
            return Err(invalid);
        }
        let len = rows.checked_mul(cols).ok_or(invalid)?;
        Ok(Self {
            rows,
            cols,
            cells: vec![Cell::Empty; len],
        })
    }

    /// Build a board from explicit rows (top row first).
    ///
    /// Rejects empty or ragged input.
    pub fn from_rows<R: AsRef<[Cell]>>(rows: &[R]) -> Result<Self, BoardError> {
        let height = rows.len();
        let width = rows.first().map(|r| r.as_ref().len()).unwrap_or(0);
        if height == 0 || width == 0 || rows.iter().any(|r| r.as_ref().len() != width) {
            return Err(BoardError::InvalidDimensions {
                rows: height,
                cols: width,
            });
        }

        let mut cells = Vec::with_capacity(height * width);
        for row in rows {
            cells.extend_from_slice(row.as_ref());
        }
        Ok(Self {
            rows: height,
            cols: width,
            cells,
        })
    }

    #[inline(always)]
    fn index(&self, pos: Position) -> Option<usize> {
        if pos.row >= self.rows || pos.col >= self.cols {
            return None;
        }
        Some(pos.row * self.cols + pos.col)
    }

    /// Flat index for `pos`, or `InvalidPosition`.
    pub(crate) fn checked_index(&self, pos: Position) -> Result<usize, BoardError> {
        self.index(pos).ok_or(BoardError::InvalidPosition {
            row: pos.row,
            col: pos.col,
            rows: self.rows,
            cols: self.cols,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Check if position is within bounds
    pub fn contains(&self, pos: Position) -> bool {
        self.index(pos).is_some()
    }

    /// Read the cell at `pos`
    pub fn color_at(&self, pos: Position) -> Result<Cell, BoardError> {
        self.checked_index(pos).map(|idx| self.cells[idx])
    }

    /// Unchecked-by-contract read used by the scanning loops; callers stay in bounds.
    #[inline(always)]
    pub(crate) fn at(&self, row: usize, col: usize) -> Cell {
        self.cells[row * self.cols + col]
    }

    #[inline(always)]
    pub(crate) fn put(&mut self, row: usize, col: usize, cell: Cell) {
        self.cells[row * self.cols + col] = cell;
    }

    #[inline(always)]
    pub(crate) fn swap_indices(&mut self, a: usize, b: usize) {
        self.cells.swap(a, b);
    }

    /// All cells, row-major
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Cells of one row, or `None` past the bottom
    pub fn row(&self, row: usize) -> Option<&[Cell]> {
        if row >= self.rows {
            return None;
        }
        let start = row * self.cols;
        Some(&self.cells[start..start + self.cols])
    }

    /// True when no cell is empty
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Cell::is_gem)
    }

    /// Empty positions in row-major order
    pub fn empty_positions(&self) -> Vec<Position> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(idx, _)| Position::new(idx / self.cols, idx % self.cols))
            .collect()
    }

    /// Set every cell to empty. Refill ticks repopulate the board afterwards.
    pub fn reset(&mut self) {
        self.cells.fill(Cell::Empty);
    }

    /// Fill every empty cell with a random gem.
    ///
    /// The result may already contain runs; they are left for the next sweep.
    pub fn fill_random(&mut self, rng: &mut SimpleRng) {
        for cell in self.cells.iter_mut().filter(|c| c.is_empty()) {
            *cell = Cell::Gem(rng.next_color());
        }
    }

    /// Convert to nested rows (top row first)
    pub fn to_rows(&self) -> Vec<Vec<Cell>> {
        self.cells.chunks(self.cols).map(<[Cell]>::to_vec).collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            cells: vec![Cell::Empty; DEFAULT_ROWS * DEFAULT_COLS],
        }
    }
}
