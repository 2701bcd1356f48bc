//! WorldView: projects the unbounded board onto a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use tui_life_core::Board;
use tui_life_types::{Coord, PanAction, LIVE_GLYPH};

use crate::fb::{FrameBuffer, Style};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// A scrollable window into world space.
///
/// The accumulated pan offset is the world coordinate of the viewport's
/// top-left corner. A live cell is drawn only when its world position lies
/// strictly inside the exclusive rectangle
/// `(offset.x, offset.x + width) x (offset.y, offset.y + height)`, at screen
/// position `(x - offset.x, y - offset.y)`. Screen row 0 is therefore never
/// occupied by a cell, which leaves it free for the status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WorldView {
    offset: Coord,
}

impl WorldView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn offset(&self) -> Coord {
        self.offset
    }

    /// Shift the window by one cell in world space.
    pub fn pan(&mut self, action: PanAction) {
        let (dx, dy) = action.delta();
        self.offset.0 += dx;
        self.offset.1 += dy;
    }

    /// Render the board into a fresh framebuffer sized to the viewport.
    pub fn render(&self, board: &Board, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);

        let (ox, oy) = self.offset;
        let w = i64::from(viewport.width);
        let h = i64::from(viewport.height);

        for (x, y) in board.live_cells() {
            let visible_x = ox < x && x < ox + w;
            let visible_y = oy < y && y < oy + h;
            if visible_x && visible_y {
                // In-range by the checks above; fb drops any residue anyway.
                fb.put_char((x - ox) as u16, (y - oy) as u16, LIVE_GLYPH, Style::Marker);
            }
        }

        self.draw_hud(&mut fb, board);
        fb
    }

    fn draw_hud(&self, fb: &mut FrameBuffer, board: &Board) {
        let (ox, oy) = self.offset;
        let hud = format!(
            " gen {}  pop {}  offset ({}, {})  [hjkl] pan  [q] quit",
            board.generation(),
            board.population(),
            ox,
            oy
        );
        fb.put_str(0, 0, &hud, Style::Hud);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tui_life_core::patterns;

    fn marker_positions(fb: &FrameBuffer) -> Vec<(u16, u16)> {
        let mut out = Vec::new();
        for y in 0..fb.height() {
            for x in 0..fb.width() {
                if fb.get(x, y).map(|c| c.style) == Some(Style::Marker) {
                    out.push((x, y));
                }
            }
        }
        out
    }

    #[test]
    fn test_cell_draws_at_world_minus_offset() {
        let board = Board::new([(5, 3)]);
        let view = WorldView::new();
        let fb = view.render(&board, Viewport::new(20, 10));
        assert_eq!(marker_positions(&fb), vec![(5, 3)]);
    }

    #[test]
    fn test_pan_shifts_projection() {
        let board = Board::new([(5, 3)]);
        let mut view = WorldView::new();
        view.pan(PanAction::Right);
        view.pan(PanAction::Right);
        view.pan(PanAction::Down);
        assert_eq!(view.offset(), (2, 1));

        let fb = view.render(&board, Viewport::new(20, 10));
        assert_eq!(marker_positions(&fb), vec![(3, 2)]);
    }

    #[test]
    fn test_bounds_are_exclusive() {
        // Cells exactly on the viewport edges are not drawn.
        let board = Board::new([(0, 5), (20, 5), (5, 0), (5, 10), (1, 1), (19, 9)]);
        let view = WorldView::new();
        let fb = view.render(&board, Viewport::new(20, 10));
        let mut hits = marker_positions(&fb);
        hits.sort();
        assert_eq!(hits, vec![(1, 1), (19, 9)]);
    }

    #[test]
    fn test_offscreen_cells_are_skipped() {
        let board = Board::new([(-4, -4), (1_000_000, 2), (3, -7)]);
        let view = WorldView::new();
        let fb = view.render(&board, Viewport::new(20, 10));
        assert!(marker_positions(&fb).is_empty());
    }

    #[test]
    fn test_negative_offset_reveals_negative_world() {
        let board = Board::new([(-3, -2)]);
        let mut view = WorldView::new();
        for _ in 0..5 {
            view.pan(PanAction::Left);
        }
        for _ in 0..5 {
            view.pan(PanAction::Up);
        }
        assert_eq!(view.offset(), (-5, -5));

        let fb = view.render(&board, Viewport::new(20, 10));
        assert_eq!(marker_positions(&fb), vec![(2, 3)]);
    }

    #[test]
    fn test_hud_occupies_top_row() {
        let board = Board::new(patterns::blinker((4, 4)));
        let view = WorldView::new();
        let fb = view.render(&board, Viewport::new(40, 10));
        assert_eq!(fb.get(1, 0).unwrap().style, Style::Hud);
        assert_eq!(fb.get(1, 0).unwrap().ch, 'g');
    }

    #[test]
    fn test_seed_visible_in_default_terminal() {
        let board = Board::new(patterns::r_pentomino((0, 0)));
        let view = WorldView::new();
        let fb = view.render(&board, Viewport::new(80, 24));
        assert_eq!(marker_positions(&fb).len(), 5);
    }
}
