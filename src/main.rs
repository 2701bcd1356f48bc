//! Terminal Game of Life runner.
//!
//! Single-threaded frame loop: resolve pending input, advance one
//! generation, project the board through the viewport, flush, repeat every
//! 100ms. Quit propagates up through `run` so process exit happens here,
//! after the terminal is restored.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_life::core::{patterns, Board};
use tui_life::input::{map_key, should_quit};
use tui_life::term::{TerminalRenderer, Viewport, WorldView};
use tui_life::types::FRAME_MS;

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let mut board = Board::new(patterns::r_pentomino((0, 0)));
    let mut view = WorldView::new();

    let frame_duration = Duration::from_millis(FRAME_MS);
    let mut last_frame = Instant::now();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let fb = view.render(&board, Viewport::new(w, h));
        term.draw(&fb)?;

        // Input with timeout until the next frame boundary. This doubles as
        // the inter-generation sleep; no event within the window means no
        // pan this frame.
        let timeout = frame_duration
            .checked_sub(last_frame.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(pan) = map_key(key) {
                        view.pan(pan);
                    }
                }
                Event::Resize(_, _) => {
                    term.invalidate();
                }
                _ => {}
            }
        }

        // Advance one generation per frame.
        if last_frame.elapsed() >= frame_duration {
            last_frame = Instant::now();
            board.step();
        }
    }
}
