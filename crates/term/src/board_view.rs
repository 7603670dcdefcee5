//! BoardView: maps a [`BoardSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::BoardSnapshot;
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::glyphs::{GlyphCache, BOARD_BG};
use crate::types::Position;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Presentation-only state for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Overlay {
    pub cursor: Option<Position>,
    /// Spin animation frame
    pub frame: u32,
}

const CURSOR_BG: Rgb = Rgb::new(70, 70, 95);
const SELECTED_BG: Rgb = Rgb::new(120, 120, 120);

/// A lightweight terminal renderer for the gem board.
pub struct BoardView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
    glyphs: GlyphCache,
}

impl Default for BoardView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self::new(2, 1)
    }
}

impl BoardView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            anchor_y: AnchorY::Center,
            glyphs: GlyphCache::new(),
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    pub fn with_glyphs(mut self, glyphs: GlyphCache) -> Self {
        self.glyphs = glyphs;
        self
    }

    pub fn glyphs(&self) -> &GlyphCache {
        &self.glyphs
    }

    /// Top-left corner and size of the bordered board frame.
    fn frame_rect(&self, rows: usize, cols: usize, viewport: Viewport) -> (u16, u16, u16, u16) {
        let frame_w = (cols as u16).saturating_mul(self.cell_w).saturating_add(2);
        let frame_h = (rows as u16).saturating_mul(self.cell_h).saturating_add(2);
        let x = viewport.width.saturating_sub(frame_w) / 2;
        let y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
            AnchorY::Top => 0,
        };
        (x, y, frame_w, frame_h)
    }

    /// Board cell under terminal position (`x`, `y`), if any.
    pub fn cell_at(
        &self,
        snap: &BoardSnapshot,
        viewport: Viewport,
        x: u16,
        y: u16,
    ) -> Option<Position> {
        let (fx, fy, _, _) = self.frame_rect(snap.rows, snap.cols, viewport);
        let col = (x.checked_sub(fx + 1)? / self.cell_w) as usize;
        let row = (y.checked_sub(fy + 1)? / self.cell_h) as usize;
        (row < snap.rows && col < snap.cols).then_some(Position::new(row, col))
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(
        &mut self,
        snap: &BoardSnapshot,
        overlay: Overlay,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let (start_x, start_y, frame_w, frame_h) = self.frame_rect(snap.rows, snap.cols, viewport);
        let border = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        for row in 0..snap.rows {
            for col in 0..snap.cols {
                let pos = Position::new(row, col);
                let Some(cell) = snap.cell(pos) else {
                    continue;
                };
                let mut glyph = self.glyphs.get(cell, overlay.frame);
                let bg = if snap.selected == Some(pos) {
                    SELECTED_BG
                } else if overlay.cursor == Some(pos) {
                    CURSOR_BG
                } else {
                    BOARD_BG
                };
                glyph.style = glyph.style.on(bg);

                let px = start_x + 1 + col as u16 * self.cell_w;
                let py = start_y + 1 + row as u16 * self.cell_h;
                fb.fill_rect(px, py, self.cell_w, self.cell_h, Cell::new(' ', glyph.style));
                fb.set(px, py, glyph);
            }
        }

        self.draw_side_panel(fb, snap, viewport, start_x + frame_w + 2, start_y);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(
        &mut self,
        snap: &BoardSnapshot,
        overlay: Overlay,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, overlay, viewport, &mut fb);
        fb
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &BoardSnapshot,
        viewport: Viewport,
        panel_x: u16,
        start_y: u16,
    ) {
        if panel_x >= viewport.width || viewport.width - panel_x < 12 {
            return;
        }

        let label = CellStyle::default().bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        let hint = value.dim();

        let mut y = start_y;
        for (name, n) in [
            ("SWAPS", snap.swaps),
            ("TICKS", snap.ticks),
            ("EMPTY", snap.empty_cells().len() as u64),
        ] {
            fb.put_str(panel_x, y, name, label);
            fb.put_u64(panel_x, y.saturating_add(1), n, value);
            y = y.saturating_add(3);
        }

        for line in ["arrows move", "space select", "esc cancel", "r reset", "q quit"] {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, line, hint);
            y = y.saturating_add(1);
        }
    }
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
    if w < 2 || h < 2 {
        return;
    }

    fb.set(x, y, Cell::new('┌', style));
    fb.set(x + w - 1, y, Cell::new('┐', style));
    fb.set(x, y + h - 1, Cell::new('└', style));
    fb.set(x + w - 1, y + h - 1, Cell::new('┘', style));

    for dx in 1..w - 1 {
        fb.set(x + dx, y, Cell::new('─', style));
        fb.set(x + dx, y + h - 1, Cell::new('─', style));
    }
    for dy in 1..h - 1 {
        fb.set(x, y + dy, Cell::new('│', style));
        fb.set(x + w - 1, y + dy, Cell::new('│', style));
    }
}
