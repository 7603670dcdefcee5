//! Gravity and top-row refill.
//!
//! Both run once per drop tick, gravity first. Gravity is a single bottom-up
//! pass that moves each gem at most one row, so multi-row falls settle over
//! consecutive ticks.

use log::trace;

use crate::board::Board;
use crate::rng::SimpleRng;
use crate::types::Cell;

impl Board {
    /// Advance gravity by one step. Returns the number of gems moved.
    ///
    /// Rows are visited from the bottom up to row 1: an empty cell pulls the gem
    /// directly above it down, leaving that cell empty.
    pub fn apply_gravity(&mut self) -> usize {
        let mut moved = 0;
        for row in (1..self.rows()).rev() {
            for col in 0..self.cols() {
                if self.at(row, col).is_empty() {
                    let above = self.at(row - 1, col);
                    if above.is_gem() {
                        self.put(row, col, above);
                        self.put(row - 1, col, Cell::Empty);
                        moved += 1;
                    }
                }
            }
        }
        trace!("gravity moved {} gems", moved);
        moved
    }

    /// Same as [`Board::apply_gravity`].
    pub fn tick_gravity(&mut self) -> usize {
        self.apply_gravity()
    }

    /// Give every empty top-row cell a random gem. Returns the number of cells filled.
    ///
    /// A full top row is left untouched.
    pub fn populate_top_row(&mut self, rng: &mut SimpleRng) -> usize {
        let mut filled = 0;
        for col in 0..self.cols() {
            if self.at(0, col).is_empty() {
                self.put(0, col, Cell::Gem(rng.next_color()));
                filled += 1;
            }
        }
        filled
    }

    /// Same as [`Board::populate_top_row`].
    pub fn tick_refill(&mut self, rng: &mut SimpleRng) -> usize {
        self.populate_top_row(rng)
    }

    /// True when no empty cell has a gem directly above it.
    ///
    /// Further gravity steps are no-ops from here on.
    pub fn is_settled(&self) -> bool {
        (1..self.rows()).all(|row| {
            (0..self.cols())
                .all(|col| !(self.at(row, col).is_empty() && self.at(row - 1, col).is_gem()))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::GemColor;

    const R: Cell = Cell::Gem(GemColor::Red);
    const B: Cell = Cell::Gem(GemColor::Blue);
    const E: Cell = Cell::Empty;

    #[test]
    fn gem_falls_one_row_per_call() {
        let mut board = Board::from_rows(&[[R], [E], [E], [E]]).unwrap();
        assert_eq!(board.apply_gravity(), 1);
        assert_eq!(board.to_rows(), vec![vec![E], vec![R], vec![E], vec![E]]);
        board.apply_gravity();
        board.apply_gravity();
        assert_eq!(board.to_rows(), vec![vec![E], vec![E], vec![E], vec![R]]);
        assert!(board.is_settled());
        assert_eq!(board.apply_gravity(), 0);
    }

    #[test]
    fn stacked_gems_fall_together() {
        let mut board = Board::from_rows(&[[B], [R], [E]]).unwrap();
        assert_eq!(board.apply_gravity(), 2);
        assert_eq!(board.to_rows(), vec![vec![E], vec![B], vec![R]]);
    }

    #[test]
    fn top_row_only_refill() {
        let mut board = Board::new(2, 3).unwrap();
        let mut rng = SimpleRng::new(3);
        assert_eq!(board.populate_top_row(&mut rng), 3);
        assert!(board.row(0).unwrap().iter().all(Cell::is_gem));
        assert!(board.row(1).unwrap().iter().all(Cell::is_empty));
    }
}
