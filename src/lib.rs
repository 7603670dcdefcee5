//! Match gems (workspace facade crate).
//!
//! Re-exports the workspace crates under one roof: `match_gems::{core,adapter,term,input,types}`.

pub use match_gems_adapter as adapter;
pub use match_gems_core as core;
pub use match_gems_input as input;
pub use match_gems_term as term;
pub use match_gems_types as types;
