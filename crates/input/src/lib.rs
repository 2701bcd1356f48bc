//! Terminal input module.
//!
//! Maps `crossterm` key events into [`tui_life_types::PanAction`] values and
//! detects the quit chord. One key event is resolved per frame by the main
//! loop; an absent event is simply "no pan this frame".

pub mod map;

pub use tui_life_types as types;

pub use map::{map_key, should_quit};
