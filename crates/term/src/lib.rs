//! Terminal rendering module.
//!
//! Renders into a plain framebuffer (no widget/layout framework) and flushes
//! it to the terminal with diff-based redraws. The projection from world
//! space to the framebuffer lives in [`world_view`] and is pure, so the
//! viewport math is testable without a terminal.

pub mod fb;
pub mod renderer;
pub mod world_view;

pub use tui_life_core as core;
pub use tui_life_types as types;

pub use fb::{Cell, FrameBuffer, Style};
pub use renderer::TerminalRenderer;
pub use world_view::{Viewport, WorldView};
