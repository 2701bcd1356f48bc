//! Core module - pure simulation logic with no external dependencies
//!
//! This crate owns the sparse Game of Life engine. It has zero dependencies
//! on UI, input, or I/O, so every rule and invariant is unit-testable.

pub mod board;
pub mod patterns;

pub use board::Board;
pub use tui_life_types as types;
