//! Terminal front end for the gem board.
//!
//! Rendering goes into a plain [`FrameBuffer`] which [`TerminalRenderer`] flushes
//! to the terminal with crossterm, re-emitting only the cells that changed.
//! Gems are drawn 2 columns wide to offset the terminal glyph aspect ratio.

pub mod board_view;
pub mod fb;
pub mod glyphs;
pub mod renderer;

pub use match_gems_core as core;
pub use match_gems_types as types;

pub use board_view::{AnchorY, BoardView, Overlay, Viewport};
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use glyphs::{gem_rgb, GlyphCache};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
