//! Board error types.

use thiserror::Error;

/// Errors reported by board operations.
///
/// An illegal swap is not an error; [`crate::Board::try_swap`] returns `Ok(false)` for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("position ({row}, {col}) is outside the {rows}x{cols} board")]
    InvalidPosition {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("invalid board dimensions {rows}x{cols}")]
    InvalidDimensions { rows: usize, cols: usize },
}
