//! Shared types module - plain data structures and constants
//!
//! Everything here is pure data with no external dependencies, usable from
//! the engine, the input layer, and the renderer alike.
//!
//! # Coordinates
//!
//! The world is unbounded in every direction. A [`Coord`] is a signed 64-bit
//! `(x, y)` pair; negative positions are first-class. `i64` is wide enough
//! that no interactive session can plausibly pan or grow a pattern anywhere
//! near the representable edge, so the engine treats overflow as
//! unreachable rather than as an error path.
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FRAME_MS` | 100 | Fixed delay between generations (~10 FPS) |

/// A world position: `(x, y)`, both axes unbounded.
pub type Coord = (i64, i64);

/// Milliseconds between generations.
pub const FRAME_MS: u64 = 100;

/// Glyph drawn for a live cell.
pub const LIVE_GLYPH: char = 'X';

/// The r-pentomino seeded at startup.
///
/// Chaotic for ~1100 generations from five cells, which makes it a good
/// default demo pattern. Offsets place it inside a typical 80x24 terminal
/// with a zero pan offset.
pub const R_PENTOMINO: [Coord; 5] = [(25, 15), (26, 15), (25, 16), (24, 16), (25, 17)];

/// A one-cell viewport pan in world space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanAction {
    Left,
    Right,
    Up,
    Down,
}

impl PanAction {
    /// World-offset delta applied to the viewport origin.
    pub fn delta(self) -> Coord {
        match self {
            PanAction::Left => (-1, 0),
            PanAction::Right => (1, 0),
            PanAction::Up => (0, -1),
            PanAction::Down => (0, 1),
        }
    }
}
