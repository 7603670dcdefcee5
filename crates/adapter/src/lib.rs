//! Adapter module - drives a board session for a presentation layer
//!
//! A presentation layer needs two periodic actions against one board: a fast
//! repaint and a slower drop tick (gravity + refill), while clicks arrive at
//! arbitrary times. This crate runs the session inside a single tokio task so
//! that all board mutation is serialized:
//!
//! - **Commands**: clicks, swaps, actions and resets are sent over a bounded
//!   mpsc channel and answered over oneshot channels
//! - **Drop tick**: a `tokio::time::interval` in the same `select!` loop
//! - **Snapshots**: published on a watch channel after every change; the
//!   renderer polls the latest one at its own repaint rate
//!
//! The repaint tick stays with the caller, since drawing is not board state.
//!
//! # Environment Variables
//!
//! See [`AdapterConfig::from_env`]:
//!
//! - `MATCH_GEMS_ROWS` / `MATCH_GEMS_COLS`: board size (default 10x10)
//! - `MATCH_GEMS_DROPS_PER_SECOND`: drop tick rate (default 5)
//! - `MATCH_GEMS_REPAINTS_PER_SECOND`: repaint rate for the front end (default 30)
//! - `MATCH_GEMS_SEED`: refill RNG seed (default: clock)
//! - `MATCH_GEMS_PREFILL`: start with a full random board
//! - `MATCH_GEMS_REQUIRE_ADJACENT`: only swap orthogonal neighbours

pub mod config;
pub mod error;
pub mod runtime;

pub use match_gems_core as core;
pub use match_gems_types as types;

pub use config::AdapterConfig;
pub use error::AdapterError;
pub use runtime::{driver, spawn_driver, Adapter, BoardCommand, BoardDriver, DriverHandle};
