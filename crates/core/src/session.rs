//! Session module - one player's board plus click selection
//!
//! A session owns the [`Board`], the RNG used for refills, and the pending
//! selection between the two clicks of a swap. Presentation layers feed it
//! clicks and drop ticks; they never write cells themselves.

use log::debug;

use crate::board::Board;
use crate::error::BoardError;
use crate::rng::SimpleRng;
use crate::snapshot::BoardSnapshot;
use crate::types::{BoardAction, Cell, Position, DEFAULT_COLS, DEFAULT_ROWS};

/// Construction options for a [`GameSession`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionOptions {
    pub rows: usize,
    pub cols: usize,
    pub seed: u32,
    /// Fill the board with random gems up front instead of letting refill ticks drop them in.
    pub prefill: bool,
    /// Only swap orthogonal neighbours. Off by default: any two cells may be swapped.
    pub require_adjacent: bool,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            seed: 1,
            prefill: false,
            require_adjacent: false,
        }
    }
}

/// Result of a click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// The clicked cell is now the pending selection.
    Selected(Position),
    /// A swap between the selection and the clicked cell was attempted.
    Swapped {
        from: Position,
        to: Position,
        legal: bool,
    },
}

/// What one drop tick changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickReport {
    /// Gems moved down by gravity
    pub moved: usize,
    /// Top-row cells given a new gem
    pub filled: usize,
}

impl TickReport {
    pub fn is_idle(&self) -> bool {
        self.moved == 0 && self.filled == 0
    }
}

#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    rng: SimpleRng,
    selected: Option<Position>,
    require_adjacent: bool,
    /// Drop ticks since creation
    ticks: u64,
    /// Legal swaps since creation
    swaps: u64,
}

impl GameSession {
    pub fn new(options: SessionOptions) -> Result<Self, BoardError> {
        let mut board = Board::new(options.rows, options.cols)?;
        let mut rng = SimpleRng::new(options.seed);
        if options.prefill {
            board.fill_random(&mut rng);
        }
        Ok(Self {
            board,
            rng,
            selected: None,
            require_adjacent: options.require_adjacent,
            ticks: 0,
            swaps: 0,
        })
    }

    /// Wrap an existing board, e.g. one built with [`Board::from_rows`].
    pub fn with_board(board: Board, seed: u32) -> Self {
        Self {
            board,
            rng: SimpleRng::new(seed),
            selected: None,
            require_adjacent: false,
            ticks: 0,
            swaps: 0,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn selected(&self) -> Option<Position> {
        self.selected
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn swaps(&self) -> u64 {
        self.swaps
    }

    pub fn set_require_adjacent(&mut self, on: bool) {
        self.require_adjacent = on;
    }

    pub fn color_at(&self, pos: Position) -> Result<Cell, BoardError> {
        self.board.color_at(pos)
    }

    /// Handle a click on `pos`.
    ///
    /// The first click selects; the second attempts a swap with the selection and clears it.
    /// With adjacency required, a second click on a non-neighbour moves the selection instead.
    pub fn click(&mut self, pos: Position) -> Result<ClickOutcome, BoardError> {
        self.board.checked_index(pos)?;

        let Some(from) = self.selected else {
            self.selected = Some(pos);
            return Ok(ClickOutcome::Selected(pos));
        };

        if self.require_adjacent && !from.is_adjacent(pos) {
            self.selected = Some(pos);
            return Ok(ClickOutcome::Selected(pos));
        }

        self.selected = None;
        let legal = self.try_swap(from, pos)?;
        Ok(ClickOutcome::Swapped {
            from,
            to: pos,
            legal,
        })
    }

    pub fn cancel_selection(&mut self) {
        self.selected = None;
    }

    /// Swap two cells directly, bypassing the selection.
    pub fn try_swap(&mut self, a: Position, b: Position) -> Result<bool, BoardError> {
        let legal = self.board.try_swap(a, b)?;
        if legal {
            self.swaps += 1;
        }
        Ok(legal)
    }

    /// One drop tick: gravity step, then top-row refill.
    pub fn drop_tick(&mut self) -> TickReport {
        let moved = self.board.apply_gravity();
        let filled = self.board.populate_top_row(&mut self.rng);
        self.ticks += 1;
        TickReport { moved, filled }
    }

    /// Run drop ticks until one changes nothing, at most `max_ticks`. Returns ticks run.
    pub fn settle(&mut self, max_ticks: usize) -> usize {
        for n in 0..max_ticks {
            if self.drop_tick().is_idle() {
                return n + 1;
            }
        }
        max_ticks
    }

    /// Empty every cell and drop the selection.
    pub fn reset(&mut self) {
        debug!("reset {}x{} board", self.board.rows(), self.board.cols());
        self.board.reset();
        self.selected = None;
    }

    /// Apply a non-cursor action with `cursor` as the target cell.
    ///
    /// Cursor movement actions are ignored here and return `Ok(None)`.
    pub fn apply_action(
        &mut self,
        action: BoardAction,
        cursor: Position,
    ) -> Result<Option<ClickOutcome>, BoardError> {
        match action {
            BoardAction::Select => self.click(cursor).map(Some),
            BoardAction::Cancel => {
                self.cancel_selection();
                Ok(None)
            }
            BoardAction::Reset => {
                self.reset();
                Ok(None)
            }
            BoardAction::CursorUp
            | BoardAction::CursorDown
            | BoardAction::CursorLeft
            | BoardAction::CursorRight => Ok(None),
        }
    }

    pub fn snapshot_into(&self, out: &mut BoardSnapshot) {
        out.rows = self.board.rows();
        out.cols = self.board.cols();
        out.cells.clear();
        out.cells.extend(self.board.cells().iter().map(Cell::code));
        out.selected = self.selected;
        out.ticks = self.ticks;
        out.swaps = self.swaps;
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        let mut s = BoardSnapshot {
            rows: 0,
            cols: 0,
            cells: Vec::with_capacity(self.board.cells().len()),
            selected: None,
            ticks: 0,
            swaps: 0,
        };
        self.snapshot_into(&mut s);
        s
    }
}
