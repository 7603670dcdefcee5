//! Swap legality and run clearing.
//!
//! A swap is tentatively applied, then kept only if at least one of the two
//! swapped cells sits in a horizontal or vertical run of [`MIN_RUN`] or more.
//! A kept swap triggers one full-board sweep: all rows first, then all columns
//! against the row-cleared state. Nothing cascades; runs formed later by
//! gravity or refill wait for the next legal swap.

use log::debug;

use crate::board::Board;
use crate::error::BoardError;
use crate::types::{Cell, Position, MIN_RUN};

impl Board {
    /// Length of the vertical and horizontal runs through `pos` (each includes `pos`).
    ///
    /// Runs are counted over equal cells, so an Empty cell between Empty neighbours
    /// has a run too. This only affects swap legality; the sweep never clears Empty runs.
    pub fn run_lengths(&self, pos: Position) -> Result<(usize, usize), BoardError> {
        self.checked_index(pos)?;
        let cell = self.at(pos.row, pos.col);

        let mut vertical = 1;
        let mut r = pos.row;
        while r > 0 && self.at(r - 1, pos.col) == cell {
            vertical += 1;
            r -= 1;
        }
        let mut r = pos.row + 1;
        while r < self.rows() && self.at(r, pos.col) == cell {
            vertical += 1;
            r += 1;
        }

        let mut horizontal = 1;
        let mut c = pos.col;
        while c > 0 && self.at(pos.row, c - 1) == cell {
            horizontal += 1;
            c -= 1;
        }
        let mut c = pos.col + 1;
        while c < self.cols() && self.at(pos.row, c) == cell {
            horizontal += 1;
            c += 1;
        }

        Ok((vertical, horizontal))
    }

    /// True when `pos` is part of a run of at least [`MIN_RUN`] along either axis.
    pub fn has_match_at(&self, pos: Position) -> Result<bool, BoardError> {
        let (vertical, horizontal) = self.run_lengths(pos)?;
        Ok(vertical >= MIN_RUN || horizontal >= MIN_RUN)
    }

    /// Swap two cells and keep the swap only if it forms a match.
    ///
    /// Returns `Ok(true)` when the swap was legal; matched runs have then been cleared.
    /// Returns `Ok(false)` when neither cell matched; the board is left exactly as it was.
    /// Positions need not be adjacent.
    pub fn try_swap(&mut self, a: Position, b: Position) -> Result<bool, BoardError> {
        let ia = self.checked_index(a)?;
        let ib = self.checked_index(b)?;

        self.swap_indices(ia, ib);

        if !self.has_match_at(a)? && !self.has_match_at(b)? {
            self.swap_indices(ia, ib);
            debug!("swap {} <-> {} rejected", a, b);
            return Ok(false);
        }

        let cleared = self.sweep_and_clear();
        debug!("swap {} <-> {} cleared {} cells", a, b, cleared);
        Ok(true)
    }

    /// Clear every run of [`MIN_RUN`] or more, rows first, then columns.
    ///
    /// The column pass reads the board as the row pass left it, so a cell shared by a
    /// row run and a column run is cleared by the row pass and can leave the column
    /// run too short to clear. Returns the number of cells emptied.
    pub fn sweep_and_clear(&mut self) -> usize {
        let mut cleared = 0;

        for row in 0..self.rows() {
            let mut col = 0;
            while col < self.cols() {
                let start = col;
                let cell = self.at(row, col);
                while col < self.cols() && self.at(row, col) == cell {
                    col += 1;
                }
                if cell.is_gem() && col - start >= MIN_RUN {
                    for c in start..col {
                        self.put(row, c, Cell::Empty);
                    }
                    cleared += col - start;
                }
            }
        }

        for col in 0..self.cols() {
            let mut row = 0;
            while row < self.rows() {
                let start = row;
                let cell = self.at(row, col);
                while row < self.rows() && self.at(row, col) == cell {
                    row += 1;
                }
                if cell.is_gem() && row - start >= MIN_RUN {
                    for r in start..row {
                        self.put(r, col, Cell::Empty);
                    }
                    cleared += row - start;
                }
            }
        }

        cleared
    }
}
