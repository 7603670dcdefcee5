use thiserror::Error;

use crate::core::BoardError;

#[derive(Debug, Error)]
pub enum AdapterError {
    #[error(transparent)]
    Board(#[from] BoardError),

    #[error("board driver is not running")]
    Stopped,

    #[error("failed to start tokio runtime: {0}")]
    Runtime(#[from] std::io::Error),
}
