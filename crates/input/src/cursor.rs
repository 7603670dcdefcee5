//! Keyboard cursor over the board.
//!
//! The cursor is presentation state: it tracks the cell the player is pointing
//! at and is clamped to the board, but never touches cell values.

use crate::types::{BoardAction, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    pos: Position,
    rows: usize,
    cols: usize,
}

impl Cursor {
    /// Cursor at the top-left cell of a `rows` x `cols` board.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            pos: Position::new(0, 0),
            rows: rows.max(1),
            cols: cols.max(1),
        }
    }

    pub fn position(&self) -> Position {
        self.pos
    }

    /// Jump to `pos`, clamped to the board.
    pub fn set(&mut self, pos: Position) {
        self.pos = Position::new(pos.row.min(self.rows - 1), pos.col.min(self.cols - 1));
    }

    /// Apply a cursor action. Returns false for non-cursor actions.
    pub fn apply(&mut self, action: BoardAction) -> bool {
        let Position { row, col } = self.pos;
        match action {
            BoardAction::CursorUp => self.pos.row = row.saturating_sub(1),
            BoardAction::CursorDown => self.pos.row = (row + 1).min(self.rows - 1),
            BoardAction::CursorLeft => self.pos.col = col.saturating_sub(1),
            BoardAction::CursorRight => self.pos.col = (col + 1).min(self.cols - 1),
            BoardAction::Select | BoardAction::Cancel | BoardAction::Reset => return false,
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_clamps_to_edges() {
        let mut c = Cursor::new(3, 2);
        assert!(c.apply(BoardAction::CursorUp));
        assert!(c.apply(BoardAction::CursorLeft));
        assert_eq!(c.position(), Position::new(0, 0));

        for _ in 0..5 {
            c.apply(BoardAction::CursorDown);
            c.apply(BoardAction::CursorRight);
        }
        assert_eq!(c.position(), Position::new(2, 1));
    }

    #[test]
    fn non_cursor_actions_are_left_alone() {
        let mut c = Cursor::new(3, 3);
        assert!(!c.apply(BoardAction::Select));
        assert!(!c.apply(BoardAction::Reset));
        assert_eq!(c.position(), Position::new(0, 0));
    }

    #[test]
    fn set_clamps() {
        let mut c = Cursor::new(4, 4);
        c.set(Position::new(9, 1));
        assert_eq!(c.position(), Position::new(3, 1));
    }
}
