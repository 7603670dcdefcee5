//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no required dependencies, making them
//! usable in any context (board engine, terminal rendering, headless tooling).
//! The optional `serde` feature derives serialization for [`Position`].
//!
//! # Board Dimensions
//!
//! The default playfield is square:
//!
//! - **Rows**: 10 (indexed 0-9, top to bottom)
//! - **Columns**: 10 (indexed 0-9, left to right)
//! - **Refill row**: 0 (new gems only ever appear in the top row)
//!
//! Other dimensions can be chosen at construction time; they never change afterwards.
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DROPS_PER_SECOND` | 5 | Drop ticks (gravity + refill) per second |
//! | `REPAINTS_PER_SECOND` | 30 | Redraw ticks per second |
//! | `SPIN_FRAMES` | 30 | Frames in one idle spin cycle |
//!
//! # Examples
//!
//! ```
//! use match_gems_types::{Cell, GemColor, Position, BoardAction, DEFAULT_ROWS, DEFAULT_COLS};
//!
//! // Parse a color (case-insensitive)
//! let color = GemColor::from_str("Red").unwrap();
//! assert_eq!(color, GemColor::Red);
//!
//! // Cells are either empty or hold a gem
//! let cell = Cell::Gem(color);
//! assert!(!cell.is_empty());
//! assert_eq!(Cell::from_code(cell.code()), Some(cell));
//!
//! // Orthogonal adjacency
//! assert!(Position::new(2, 3).is_adjacent(Position::new(2, 4)));
//! assert!(!Position::new(2, 3).is_adjacent(Position::new(3, 4)));
//!
//! // Parse a board action
//! assert_eq!(BoardAction::from_str("select"), Some(BoardAction::Select));
//!
//! assert_eq!(DEFAULT_ROWS, 10);
//! assert_eq!(DEFAULT_COLS, 10);
//! ```

use std::fmt;

/// Default number of rows (10)
pub const DEFAULT_ROWS: usize = 10;

/// Default number of columns (10)
pub const DEFAULT_COLS: usize = 10;

/// Minimum run length that counts as a match (3)
pub const MIN_RUN: usize = 3;

/// Drop ticks per second; each tick applies one gravity step and refills the top row
pub const DROPS_PER_SECOND: u32 = 5;

/// Redraw ticks per second
pub const REPAINTS_PER_SECOND: u32 = 30;

/// Frames in one idle spin cycle
pub const SPIN_FRAMES: u32 = 30;

/// Gem colors.
///
/// The order is fixed and determines snapshot codes (`Blue` = 1 … `Yellow` = 6).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum GemColor {
    Blue,
    Clear,
    Green,
    Pink,
    Red,
    Yellow,
}

impl GemColor {
    /// Every color, in code order.
    pub const ALL: [GemColor; 6] = [
        GemColor::Blue,
        GemColor::Clear,
        GemColor::Green,
        GemColor::Pink,
        GemColor::Red,
        GemColor::Yellow,
    ];

    /// Number of distinct colors
    pub const COUNT: usize = Self::ALL.len();

    /// Color at `index` in [`GemColor::ALL`], if any.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Position of this color in [`GemColor::ALL`].
    pub fn index(&self) -> usize {
        match self {
            GemColor::Blue => 0,
            GemColor::Clear => 1,
            GemColor::Green => 2,
            GemColor::Pink => 3,
            GemColor::Red => 4,
            GemColor::Yellow => 5,
        }
    }

    /// Parse color from string (case-insensitive)
    ///
    /// Accepts full names or single letters: "blue" | "b", "clear" | "c", "green" | "g",
    /// "pink" | "p", "red" | "r", "yellow" | "y".
    ///
    /// # Examples
    ///
    /// ```
    /// use match_gems_types::GemColor;
    ///
    /// assert_eq!(GemColor::from_str("pink"), Some(GemColor::Pink));
    /// assert_eq!(GemColor::from_str("Y"), Some(GemColor::Yellow));
    /// assert_eq!(GemColor::from_str("purple"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "blue" | "b" => Some(GemColor::Blue),
            "clear" | "c" => Some(GemColor::Clear),
            "green" | "g" => Some(GemColor::Green),
            "pink" | "p" => Some(GemColor::Pink),
            "red" | "r" => Some(GemColor::Red),
            "yellow" | "y" => Some(GemColor::Yellow),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            GemColor::Blue => "blue",
            GemColor::Clear => "clear",
            GemColor::Green => "green",
            GemColor::Pink => "pink",
            GemColor::Red => "red",
            GemColor::Yellow => "yellow",
        }
    }
}

impl fmt::Display for GemColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A cell on the board
///
/// - `Empty`: vacated cell, waiting to be filled by gravity or refill
/// - `Gem(color)`: cell holding a gem of the given color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Gem(GemColor),
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    pub fn is_gem(&self) -> bool {
        matches!(self, Cell::Gem(_))
    }

    /// The gem color, or `None` for an empty cell.
    pub fn color(&self) -> Option<GemColor> {
        match self {
            Cell::Empty => None,
            Cell::Gem(color) => Some(*color),
        }
    }

    /// Compact code: 0 for empty, 1..=6 for colors in [`GemColor::ALL`] order.
    pub fn code(&self) -> u8 {
        match self {
            Cell::Empty => 0,
            Cell::Gem(color) => color.index() as u8 + 1,
        }
    }

    /// Inverse of [`Cell::code`].
    pub fn from_code(code: u8) -> Option<Self> {
        if code == 0 {
            return Some(Cell::Empty);
        }
        GemColor::from_index(code as usize - 1).map(Cell::Gem)
    }
}

impl From<GemColor> for Cell {
    fn from(color: GemColor) -> Self {
        Cell::Gem(color)
    }
}

/// Board coordinate, `row` from the top and `col` from the left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// True when the two positions share an edge.
    pub fn is_adjacent(&self, other: Position) -> bool {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col) == 1
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Player actions produced by the input layer.
///
/// Cursor movement stays in the presentation layer; the other actions reach the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardAction {
    /// Move cursor one row up
    CursorUp,
    /// Move cursor one row down
    CursorDown,
    /// Move cursor one column left
    CursorLeft,
    /// Move cursor one column right
    CursorRight,
    /// Click the gem under the cursor (select, or swap with the selection)
    Select,
    /// Drop the current selection
    Cancel,
    /// Empty the whole board; refill ticks repopulate it
    Reset,
}

impl BoardAction {
    /// Parse action from string
    ///
    /// # Examples
    ///
    /// ```
    /// use match_gems_types::BoardAction;
    ///
    /// assert_eq!(BoardAction::from_str("cursorLeft"), Some(BoardAction::CursorLeft));
    /// assert_eq!(BoardAction::from_str("RESET"), Some(BoardAction::Reset));
    /// assert_eq!(BoardAction::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "cursorup" => Some(BoardAction::CursorUp),
            "cursordown" => Some(BoardAction::CursorDown),
            "cursorleft" => Some(BoardAction::CursorLeft),
            "cursorright" => Some(BoardAction::CursorRight),
            "select" => Some(BoardAction::Select),
            "cancel" => Some(BoardAction::Cancel),
            "reset" => Some(BoardAction::Reset),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            BoardAction::CursorUp => "cursorUp",
            BoardAction::CursorDown => "cursorDown",
            BoardAction::CursorLeft => "cursorLeft",
            BoardAction::CursorRight => "cursorRight",
            BoardAction::Select => "select",
            BoardAction::Cancel => "cancel",
            BoardAction::Reset => "reset",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_index_roundtrips_through_all() {
        for (i, color) in GemColor::ALL.iter().enumerate() {
            assert_eq!(color.index(), i);
            assert_eq!(GemColor::from_index(i), Some(*color));
        }
        assert_eq!(GemColor::from_index(GemColor::COUNT), None);
    }

    #[test]
    fn cell_codes() {
        assert_eq!(Cell::Empty.code(), 0);
        assert_eq!(Cell::Gem(GemColor::Blue).code(), 1);
        assert_eq!(Cell::Gem(GemColor::Yellow).code(), 6);
        assert_eq!(Cell::from_code(7), None);
    }

    #[test]
    fn adjacency_excludes_self_and_diagonals() {
        let p = Position::new(1, 1);
        assert!(!p.is_adjacent(p));
        assert!(!p.is_adjacent(Position::new(0, 0)));
        assert!(p.is_adjacent(Position::new(0, 1)));
        assert!(p.is_adjacent(Position::new(1, 0)));
        assert!(!p.is_adjacent(Position::new(1, 3)));
    }
}
