//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! Owns the raw-mode/alternate-screen lifecycle and redraws only the cells
//! that changed since the previous frame, coalesced into horizontal runs.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal, QueueableCommand,
};

use crate::fb::{FrameBuffer, Style};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    last: Option<FrameBuffer>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            last: None,
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.stdout.queue(terminal::EnterAlternateScreen)?;
        self.stdout.queue(cursor::Hide)?;
        self.stdout.queue(terminal::DisableLineWrap)?;
        self.stdout.flush()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.stdout.queue(ResetColor)?;
        self.stdout.queue(SetAttribute(Attribute::Reset))?;
        self.stdout.queue(terminal::EnableLineWrap)?;
        self.stdout.queue(cursor::Show)?;
        self.stdout.queue(terminal::LeaveAlternateScreen)?;
        self.stdout.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Force the next draw to be a full redraw.
    ///
    /// Useful on terminal resize events.
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Flush a frame, diffing against the previous one where possible.
    pub fn draw(&mut self, fb: &FrameBuffer) -> Result<()> {
        let full = match &self.last {
            Some(prev) => prev.width() != fb.width() || prev.height() != fb.height(),
            None => true,
        };

        if full {
            self.full_redraw(fb)?;
        } else {
            let prev = self.last.take().unwrap();
            self.diff_redraw(fb, &prev)?;
        }

        self.last = Some(fb.clone());
        Ok(())
    }

    fn full_redraw(&mut self, fb: &FrameBuffer) -> Result<()> {
        self.stdout
            .queue(terminal::Clear(terminal::ClearType::All))?;

        let mut style: Option<Style> = None;
        for y in 0..fb.height() {
            self.stdout.queue(cursor::MoveTo(0, y))?;
            for x in 0..fb.width() {
                let cell = fb.get(x, y).unwrap_or_default();
                if style != Some(cell.style) {
                    self.apply_style(cell.style)?;
                    style = Some(cell.style);
                }
                self.stdout.queue(Print(cell.ch))?;
            }
        }

        self.stdout.queue(ResetColor)?;
        self.stdout.flush()?;
        Ok(())
    }

    fn diff_redraw(&mut self, next: &FrameBuffer, prev: &FrameBuffer) -> Result<()> {
        let mut style: Option<Style> = None;

        for y in 0..next.height() {
            let mut x = 0;
            while x < next.width() {
                if prev.get(x, y) == next.get(x, y) {
                    x += 1;
                    continue;
                }

                // Start of a changed run: one cursor move, then print until
                // the buffers agree again.
                self.stdout.queue(cursor::MoveTo(x, y))?;
                while x < next.width() && prev.get(x, y) != next.get(x, y) {
                    let cell = next.get(x, y).unwrap_or_default();
                    if style != Some(cell.style) {
                        self.apply_style(cell.style)?;
                        style = Some(cell.style);
                    }
                    self.stdout.queue(Print(cell.ch))?;
                    x += 1;
                }
            }
        }

        self.stdout.queue(ResetColor)?;
        self.stdout.flush()?;
        Ok(())
    }

    fn apply_style(&mut self, style: Style) -> Result<()> {
        self.stdout.queue(SetAttribute(Attribute::Reset))?;
        match style {
            Style::Plain => {
                self.stdout.queue(SetForegroundColor(Color::Reset))?;
            }
            Style::Marker => {
                self.stdout.queue(SetForegroundColor(Color::Green))?;
                self.stdout.queue(SetAttribute(Attribute::Bold))?;
            }
            Style::Hud => {
                self.stdout.queue(SetForegroundColor(Color::Grey))?;
                self.stdout.queue(SetAttribute(Attribute::Dim))?;
            }
        }
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}
