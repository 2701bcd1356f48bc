//! Named seed patterns.
//!
//! Constructors return cell lists translated to an arbitrary origin, so the
//! same shape can be dropped anywhere on the unbounded grid.

use tui_life_types::{Coord, R_PENTOMINO};

fn translate(cells: &[Coord], (ox, oy): Coord) -> Vec<Coord> {
    cells.iter().map(|&(x, y)| (x + ox, y + oy)).collect()
}

/// The startup seed: an r-pentomino at its reference offsets, shifted by
/// `origin`.
pub fn r_pentomino(origin: Coord) -> Vec<Coord> {
    translate(&R_PENTOMINO, origin)
}

/// A 2x2 block, the smallest still life.
pub fn block(origin: Coord) -> Vec<Coord> {
    translate(&[(0, 0), (1, 0), (0, 1), (1, 1)], origin)
}

/// A horizontal blinker, the smallest oscillator (period 2).
pub fn blinker(origin: Coord) -> Vec<Coord> {
    translate(&[(0, 0), (1, 0), (2, 0)], origin)
}
