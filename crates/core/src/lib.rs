//! Core board logic module - pure, deterministic, and testable
//!
//! This module contains the gem board and all of its rules. It has **zero
//! dependencies** on UI, timers, or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical refills
//! - **Testable**: Every rule is a plain method on [`Board`]
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`board`]: R x C grid storage, bounds checks, reset
//! - [`matching`]: run lengths, swap legality, the full-board sweep
//! - [`gravity`]: one-step gravity and top-row refill
//! - [`rng`]: seeded color generation
//! - [`session`]: click selection and the drop tick
//! - [`snapshot`]: serializable read-only copy for renderers
//!
//! # Rules
//!
//! - **Swap**: any two cells may be exchanged; the swap stands only if one of them
//!   ends up in a row or column run of 3 or more, otherwise it is undone
//! - **Sweep**: after a legal swap, every row run and then every column run of 3+
//!   is emptied, once, with no chain reaction
//! - **Gravity**: each drop tick moves gems down by at most one row
//! - **Refill**: each drop tick gives empty top-row cells a random gem
//!
//! # Example
//!
//! ```
//! use match_gems_core::{Board, GameSession, SessionOptions};
//! use match_gems_core::types::{Cell, GemColor, Position};
//!
//! let red = Cell::Gem(GemColor::Red);
//! let blue = Cell::Gem(GemColor::Blue);
//! let mut board = Board::from_rows(&[[red, blue, red, red, red]]).unwrap();
//!
//! // Moving blue out of the way lines up four reds, which clear.
//! assert!(board.try_swap(Position::new(0, 0), Position::new(0, 1)).unwrap());
//! assert_eq!(board.color_at(Position::new(0, 0)).unwrap(), blue);
//! assert_eq!(board.empty_positions().len(), 4);
//!
//! // A session starts empty and fills from the top one drop tick at a time.
//! let mut session = GameSession::new(SessionOptions::default()).unwrap();
//! session.drop_tick();
//! assert!(session.board().row(0).unwrap().iter().all(Cell::is_gem));
//! ```

pub mod board;
pub mod error;
pub mod gravity;
pub mod matching;
pub mod rng;
pub mod session;
pub mod snapshot;

pub use match_gems_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use error::BoardError;
pub use rng::SimpleRng;
pub use session::{ClickOutcome, GameSession, SessionOptions, TickReport};
pub use snapshot::BoardSnapshot;
