//! Terminal input module (board-facing).
//!
//! This module is independent of any rendering code. It maps `crossterm` key
//! events into [`crate::types::BoardAction`] and keeps the keyboard cursor, the
//! presentation-side record of which cell the player is pointing at.

pub mod cursor;
pub mod map;

pub use match_gems_types as types;

pub use cursor::Cursor;
pub use map::{handle_key_event, mouse_click, should_quit};
