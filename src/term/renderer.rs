//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! First frame (and any frame after `invalidate`) is a full redraw; later
//! frames only emit cells that changed since the previous one.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    event::{DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture},
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::term::fb::{CellStyle, FrameBuffer, Rgb};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    last: Option<FrameBuffer>,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            last: None,
        }
    }

    /// Enter raw mode with mouse and focus reporting enabled.
    ///
    /// Mouse capture feeds the swipe recognizer and the on-screen pad;
    /// focus reporting drives the container-activity signal.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.stdout.queue(terminal::EnterAlternateScreen)?;
        self.stdout.queue(cursor::Hide)?;
        self.stdout.queue(terminal::DisableLineWrap)?;
        self.stdout.queue(EnableMouseCapture)?;
        self.stdout.queue(EnableFocusChange)?;
        self.stdout.flush()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.stdout.queue(DisableFocusChange)?;
        self.stdout.queue(DisableMouseCapture)?;
        self.stdout.queue(ResetColor)?;
        self.stdout.queue(SetAttribute(Attribute::Reset))?;
        self.stdout.queue(terminal::EnableLineWrap)?;
        self.stdout.queue(cursor::Show)?;
        self.stdout.queue(terminal::LeaveAlternateScreen)?;
        self.stdout.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Force the next draw to be a full redraw (e.g. after a resize event).
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    pub fn draw(&mut self, fb: &FrameBuffer) -> Result<()> {
        let full = match &self.last {
            Some(prev) => prev.width() != fb.width() || prev.height() != fb.height(),
            None => true,
        };

        let mut style: Option<CellStyle> = None;
        if full {
            self.stdout
                .queue(terminal::Clear(terminal::ClearType::All))?;
            for y in 0..fb.height() {
                self.stdout.queue(cursor::MoveTo(0, y))?;
                for x in 0..fb.width() {
                    let cell = fb.get(x, y).unwrap_or_default();
                    if style != Some(cell.style) {
                        apply_style(&mut self.stdout, cell.style)?;
                        style = Some(cell.style);
                    }
                    self.stdout.queue(Print(cell.ch))?;
                }
            }
        } else {
            let prev = self.last.as_ref().unwrap_or(fb);
            // Emit only the cells that changed, moving the cursor as needed.
            let mut cursor_at: Option<(u16, u16)> = None;
            for y in 0..fb.height() {
                for x in 0..fb.width() {
                    let cell = fb.get(x, y).unwrap_or_default();
                    if prev.get(x, y).unwrap_or_default() == cell {
                        continue;
                    }
                    if cursor_at != Some((x, y)) {
                        self.stdout.queue(cursor::MoveTo(x, y))?;
                    }
                    if style != Some(cell.style) {
                        apply_style(&mut self.stdout, cell.style)?;
                        style = Some(cell.style);
                    }
                    self.stdout.queue(Print(cell.ch))?;
                    cursor_at = Some((x + 1, y));
                }
            }
        }

        self.stdout.queue(ResetColor)?;
        self.stdout.queue(SetAttribute(Attribute::Reset))?;
        self.stdout.flush()?;

        match &mut self.last {
            Some(prev) => prev.clone_from(fb),
            None => self.last = Some(fb.clone()),
        }
        Ok(())
    }

}

fn apply_style(stdout: &mut io::Stdout, style: CellStyle) -> Result<()> {
    stdout.queue(SetAttribute(Attribute::Reset))?;
    stdout.queue(SetForegroundColor(rgb_to_color(style.fg)))?;
    stdout.queue(SetBackgroundColor(rgb_to_color(style.bg)))?;
    if style.bold {
        stdout.queue(SetAttribute(Attribute::Bold))?;
    }
    if style.dim {
        stdout.queue(SetAttribute(Attribute::Dim))?;
    }
    Ok(())
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}
