//! Gem glyph cache.
//!
//! Every (cell, spin frame) pair maps to one styled terminal cell. Entries are
//! built on first use and kept for the cache's lifetime; [`GlyphCache::preload`]
//! builds all of them up front (one per color and frame plus one blank entry).
//! The cache belongs to whichever view owns it.

use std::collections::HashMap;

use crate::fb::{Cell, CellStyle, Rgb};
use crate::types::{Cell as BoardCell, GemColor, SPIN_FRAMES};

/// Spin cycle glyphs; a full cycle spans [`SPIN_FRAMES`] frames.
const SPIN_GLYPHS: [char; 4] = ['◆', '◈', '◇', '◈'];

pub const BOARD_BG: Rgb = Rgb::new(30, 30, 40);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct GlyphKey {
    cell: BoardCell,
    frame: u32,
}

#[derive(Debug, Clone)]
pub struct GlyphCache {
    frames: u32,
    entries: HashMap<GlyphKey, Cell>,
}

impl GlyphCache {
    pub fn new() -> Self {
        Self::with_frames(SPIN_FRAMES)
    }

    pub fn with_frames(frames: u32) -> Self {
        let frames = frames.max(1);
        let mut entries = HashMap::with_capacity(frames as usize * GemColor::COUNT + 1);
        let blank = GlyphKey {
            cell: BoardCell::Empty,
            frame: 0,
        };
        entries.insert(blank, build_glyph(BoardCell::Empty, 0, frames));
        Self { frames, entries }
    }

    pub fn frames(&self) -> u32 {
        self.frames
    }

    /// Build every entry now.
    pub fn preload(&mut self) {
        for frame in 0..self.frames {
            for color in GemColor::ALL {
                self.get(BoardCell::Gem(color), frame);
            }
        }
    }

    /// Glyph for `cell` at animation `frame` (wrapped to the cycle length).
    ///
    /// Empty cells share one entry regardless of frame.
    pub fn get(&mut self, cell: BoardCell, frame: u32) -> Cell {
        let frame = if cell.is_empty() { 0 } else { frame % self.frames };
        let frames = self.frames;
        *self
            .entries
            .entry(GlyphKey { cell, frame })
            .or_insert_with(|| build_glyph(cell, frame, frames))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for GlyphCache {
    fn default() -> Self {
        Self::new()
    }
}

pub fn gem_rgb(color: GemColor) -> Rgb {
    match color {
        GemColor::Blue => Rgb::new(80, 120, 230),
        GemColor::Clear => Rgb::new(235, 235, 245),
        GemColor::Green => Rgb::new(100, 220, 120),
        GemColor::Pink => Rgb::new(240, 130, 200),
        GemColor::Red => Rgb::new(225, 70, 70),
        GemColor::Yellow => Rgb::new(240, 220, 80),
    }
}

fn build_glyph(cell: BoardCell, frame: u32, frames: u32) -> Cell {
    match cell.color() {
        None => Cell::new('·', CellStyle::new(Rgb::new(90, 90, 100), BOARD_BG).dim()),
        Some(color) => {
            let step = (frame as usize * SPIN_GLYPHS.len()) / frames as usize;
            let ch = SPIN_GLYPHS[step % SPIN_GLYPHS.len()];
            Cell::new(ch, CellStyle::new(gem_rgb(color), BOARD_BG).bold())
        }
    }
}
