use serde::{Deserialize, Serialize};

use crate::types::{Cell, Position};

/// Read-only copy of a session for renderers and tooling.
///
/// `cells` holds [`Cell::code`] values in row-major order (0 = empty).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub rows: usize,
    pub cols: usize,
    pub cells: Vec<u8>,
    pub selected: Option<Position>,
    pub ticks: u64,
    pub swaps: u64,
}

impl BoardSnapshot {
    /// Cell at `pos`; `None` when out of range or `cells` holds no valid code there.
    pub fn cell(&self, pos: Position) -> Option<Cell> {
        if pos.row >= self.rows || pos.col >= self.cols {
            return None;
        }
        self.cells
            .get(pos.row * self.cols + pos.col)
            .copied()
            .and_then(Cell::from_code)
    }

    /// Empty positions in row-major order.
    pub fn empty_cells(&self) -> Vec<Position> {
        if self.cols == 0 {
            return Vec::new();
        }
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, code)| **code == 0)
            .map(|(idx, _)| Position::new(idx / self.cols, idx % self.cols))
            .collect()
    }

    /// Stable 64-bit FNV-1a hash of the grid and selection.
    ///
    /// `DefaultHasher` is avoided since its output is not stable across Rust versions.
    pub fn fingerprint(&self) -> u64 {
        const OFFSET_BASIS: u64 = 0xcbf29ce484222325;
        const PRIME: u64 = 0x100000001b3;

        let mut state = OFFSET_BASIS;
        let mut feed = |b: u8| {
            state ^= b as u64;
            state = state.wrapping_mul(PRIME);
        };

        for b in (self.rows as u32).to_le_bytes() {
            feed(b);
        }
        for b in (self.cols as u32).to_le_bytes() {
            feed(b);
        }
        for &code in &self.cells {
            feed(code);
        }
        match self.selected {
            Some(pos) => {
                feed(1);
                for b in (pos.row as u32).to_le_bytes() {
                    feed(b);
                }
                for b in (pos.col as u32).to_le_bytes() {
                    feed(b);
                }
            }
            None => feed(0),
        }
        state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::GemColor;

    fn sample() -> BoardSnapshot {
        BoardSnapshot {
            rows: 2,
            cols: 2,
            cells: vec![0, 1, 5, 0],
            selected: None,
            ticks: 0,
            swaps: 0,
        }
    }

    #[test]
    fn empty_cells_lists_zero_codes() {
        assert_eq!(
            sample().empty_cells(),
            vec![Position::new(0, 0), Position::new(1, 1)]
        );
    }

    #[test]
    fn cell_decodes_codes() {
        let snap = sample();
        assert_eq!(snap.cell(Position::new(1, 0)), Some(Cell::Gem(GemColor::Red)));
        assert_eq!(snap.cell(Position::new(2, 0)), None);
    }

    #[test]
    fn fingerprint_tracks_grid_and_selection_only() {
        let a = sample();
        let mut b = sample();
        b.ticks = 10;
        assert_eq!(a.fingerprint(), b.fingerprint());

        b.selected = Some(Position::new(0, 1));
        assert_ne!(a.fingerprint(), b.fingerprint());

        let mut c = sample();
        c.cells[0] = 2;
        assert_ne!(a.fingerprint(), c.fingerprint());
    }

    #[test]
    fn snapshot_serializes_to_json() {
        let json = serde_json::to_string(&sample()).unwrap();
        assert!(json.contains("\"cells\":[0,1,5,0]"));
        let back: BoardSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, sample());
    }
}
