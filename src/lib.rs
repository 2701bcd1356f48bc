//! TUI Life (workspace facade crate).
//!
//! Re-exports the implementation crates under stable module names so tests
//! and downstream code can use `tui_life::{core,input,term,types}`.

pub use tui_life_core as core;
pub use tui_life_input as input;
pub use tui_life_term as term;
pub use tui_life_types as types;
