//! Board module - the sparse Life grid
//!
//! The board is unbounded, so it never materializes an array. It stores only
//! the set of live coordinates; any coordinate not in the set reads as dead.
//! Memory is proportional to the live population, never to world extent, and
//! a generation step only visits cells adjacent to activity.

use std::collections::HashSet;

use arrayvec::ArrayVec;

use tui_life_types::Coord;

/// The 3x3 block of coordinates centered on `(x, y)`, the center included.
#[inline]
fn block(x: i64, y: i64) -> ArrayVec<Coord, 9> {
    let mut cells = ArrayVec::new();
    for dy in -1..=1 {
        for dx in -1..=1 {
            cells.push((x + dx, y + dy));
        }
    }
    cells
}

/// An unbounded Game of Life board tracking only live cells.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Board {
    live: HashSet<Coord>,
    generation: u64,
}

impl Board {
    /// Create a board seeded with the given live cells.
    pub fn new(initial: impl IntoIterator<Item = Coord>) -> Self {
        Self {
            live: initial.into_iter().collect(),
            generation: 0,
        }
    }

    /// Whether the cell at `coord` is currently alive.
    pub fn contains(&self, coord: Coord) -> bool {
        self.live.contains(&coord)
    }

    /// Liveness of `coord` as 0 or 1.
    ///
    /// Every neighbor read goes through this accessor; a missing coordinate
    /// is dead, which is what keeps the representation sparse.
    #[inline]
    pub fn cell_value(&self, coord: Coord) -> u8 {
        u8::from(self.live.contains(&coord))
    }

    /// Number of live cells.
    pub fn population(&self) -> usize {
        self.live.len()
    }

    /// Generations advanced since the seed.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// All currently-alive coordinates, in no particular order.
    pub fn live_cells(&self) -> impl Iterator<Item = Coord> + '_ {
        self.live.iter().copied()
    }

    /// Sum of liveness over the 3x3 block centered on `(x, y)`.
    ///
    /// The center cell's own state is part of the total. The transition rule
    /// below is written against this combined total, not against a
    /// neighbors-only count; the two encodings differ by one for live cells
    /// and the rule's thresholds assume this one.
    fn block_total(&self, x: i64, y: i64) -> u8 {
        block(x, y).iter().map(|&c| self.cell_value(c)).sum()
    }

    /// Decide the fate of a single cell against the current generation.
    ///
    /// With `total` the 3x3 block sum including the cell itself:
    /// - dead cell, `total == 3` (exactly 3 live neighbors): born
    /// - live cell, `total < 3` (under 2 neighbors) or `total > 4`
    ///   (over 3 neighbors): dies
    /// - anything else: unchanged
    fn check_cell(&self, x: i64, y: i64) -> Transition {
        let total = self.block_total(x, y);
        let cell = self.cell_value((x, y));

        if total == 3 && cell == 0 {
            Transition::Birth
        } else if total < 3 || (total > 4 && cell == 1) {
            // Only an already-live cell has anything to lose; a dead cell
            // in an underpopulated block stays a no-op.
            if cell == 1 {
                Transition::Death
            } else {
                Transition::None
            }
        } else {
            Transition::None
        }
    }

    /// Every coordinate that must be evaluated this generation: the live
    /// cells plus their 8-connected neighbors, deduplicated.
    ///
    /// This is the enumeration that keeps the algorithm sparse. Its size is
    /// bounded by nine times the live population.
    pub fn candidate_cells(&self) -> HashSet<Coord> {
        let mut cells = HashSet::with_capacity(self.live.len() * 9);
        for &(x, y) in &self.live {
            cells.extend(block(x, y));
        }
        cells
    }

    /// Advance the board by exactly one generation.
    ///
    /// All transitions are computed from the pre-step state and applied at
    /// the end, so no cell's fate can leak into another cell's evaluation
    /// within the same generation. Births and deaths are disjoint (a birth
    /// target was dead, a death target was alive), so application order
    /// does not matter.
    pub fn step(&mut self) {
        let mut births: Vec<Coord> = Vec::new();
        let mut deaths: Vec<Coord> = Vec::new();

        for (x, y) in self.candidate_cells() {
            match self.check_cell(x, y) {
                Transition::Birth => births.push((x, y)),
                Transition::Death => deaths.push((x, y)),
                Transition::None => {}
            }
        }

        for coord in deaths {
            self.live.remove(&coord);
        }
        for coord in births {
            self.live.insert(coord);
        }
        self.generation += 1;
    }
}

/// Outcome of evaluating one candidate cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Transition {
    Birth,
    Death,
    None,
}
