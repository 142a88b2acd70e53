//! GameView: maps a [`GameSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! The frame mirrors the pixel-surface contract of the game: dark blue
//! background, faint grid overlay, green food, blue snake with a visually
//! distinct head, a score/lives stats bar, a leaderboard side panel and the
//! on-screen pad. Layout is computed in [`GameView::layout`] and shared with
//! the input side so pad hit-testing can never drift from what is drawn.

use crate::core::snapshot::GameSnapshot;
use crate::input::pad::{PadButton, PadLayout, BUTTON_H, BUTTON_W};
use crate::store::LeaderboardEntry;
use crate::term::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{GamePhase, Point};

const BACKGROUND: Rgb = Rgb::new(10, 15, 31);
const GRID_DOT: Rgb = Rgb::new(96, 165, 250);
const FOOD: Rgb = Rgb::new(34, 197, 94);
const SNAKE_BODY: Rgb = Rgb::new(96, 165, 250);
const SNAKE_HEAD: Rgb = Rgb::new(147, 197, 253);
const TEXT: Rgb = Rgb::new(220, 220, 220);
const PANEL_BG: Rgb = Rgb::new(0, 0, 0);

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

/// What to draw over the board, decided by the run loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay<'a> {
    None,
    Start,
    Paused,
    /// Game-over name prompt with the score being recorded
    NameEntry {
        score: u32,
        buffer: &'a str,
    },
}

impl<'a> Overlay<'a> {
    /// Overlay implied by the simulation state alone
    pub fn for_snapshot(snap: &GameSnapshot) -> Self {
        if snap.phase == GamePhase::NotStarted || !snap.active {
            Overlay::Start
        } else if snap.phase == GamePhase::Paused {
            Overlay::Paused
        } else {
            Overlay::None
        }
    }
}

/// Computed frame geometry, shared by drawing and mouse hit-testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewLayout {
    /// Top-left of the board frame (border included)
    pub frame_x: u16,
    pub frame_y: u16,
    pub frame_w: u16,
    pub frame_h: u16,
    /// On-screen pad, when the viewport has room below the board
    pub pad: Option<PadLayout>,
}

/// A lightweight terminal renderer for the snake game.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 compensates for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    /// Compute where everything goes for this grid size and viewport.
    pub fn layout(&self, grid_size: i8, viewport: Viewport) -> ViewLayout {
        let board_w = (grid_size as u16) * self.cell_w;
        let board_h = (grid_size as u16) * self.cell_h;
        let frame_w = board_w + 2;
        // One extra row above the board for the stats bar
        let frame_h = board_h + 3;

        let frame_x = viewport.width.saturating_sub(frame_w) / 2;
        let frame_y = viewport.height.saturating_sub(frame_h) / 2;

        let (pad_w, pad_h) = (3 * BUTTON_W, 3 * BUTTON_H);
        let pad_y = frame_y + frame_h + 1;
        let pad = if pad_y + pad_h < viewport.height && pad_w <= viewport.width {
            let pad_x = frame_x + (frame_w.saturating_sub(pad_w)) / 2;
            Some(PadLayout::new(pad_x, pad_y))
        } else {
            None
        };

        ViewLayout {
            frame_x,
            frame_y,
            frame_w,
            frame_h,
            pad,
        }
    }

    /// Render one frame.
    pub fn render(
        &self,
        snap: &GameSnapshot,
        scores: &[LeaderboardEntry],
        overlay: Overlay<'_>,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        fb.clear(CellStyle::on(TEXT, PANEL_BG));

        let vl = self.layout(snap.grid_size, viewport);
        let board_x = vl.frame_x + 1;
        let board_y = vl.frame_y + 2;

        self.draw_frame(&mut fb, &vl);
        self.draw_stats(&mut fb, snap, &vl);
        self.draw_board(&mut fb, snap, board_x, board_y);
        self.draw_side_panel(&mut fb, scores, &vl, viewport);

        if let Some(pad) = vl.pad {
            draw_pad(&mut fb, pad, snap.phase == GamePhase::Running);
        }

        self.draw_overlay(&mut fb, overlay, &vl);
        self.draw_footer(&mut fb, viewport);

        fb
    }

    fn draw_frame(&self, fb: &mut FrameBuffer, vl: &ViewLayout) {
        let style = CellStyle::on(Rgb::new(200, 200, 200), PANEL_BG);
        let (x, y, w, h) = (vl.frame_x, vl.frame_y, vl.frame_w, vl.frame_h);
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);
        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_stats(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, vl: &ViewLayout) {
        let y = vl.frame_y + 1;
        let label = CellStyle::on(TEXT, BACKGROUND).bold();
        let inner_w = vl.frame_w.saturating_sub(2);
        fb.fill_rect(vl.frame_x + 1, y, inner_w, 1, ' ', CellStyle::on(TEXT, BACKGROUND));

        fb.put_str(vl.frame_x + 2, y, &format!("SCORE {}", snap.score), label);

        let lives = if snap.lives == 0 {
            "—".to_string()
        } else {
            vec!["●"; snap.lives as usize].join(" ")
        };
        let right = format!("LIVES {lives}");
        let rx = vl.frame_x + 1 + inner_w.saturating_sub(right.chars().count() as u16 + 1);
        fb.put_str(rx, y, &right, label);
    }

    fn draw_board(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, bx: u16, by: u16) {
        let dot = CellStyle::on(GRID_DOT, BACKGROUND).dim();
        for cy in 0..snap.grid_size as u16 {
            for cx in 0..snap.grid_size as u16 {
                // Faint grid overlay: one dot per cell on the dark backdrop
                self.fill_cell(fb, bx, by, cx, cy, ' ', CellStyle::on(TEXT, BACKGROUND));
                self.put_in_cell(fb, bx, by, cx, cy, '·', dot);
            }
        }

        self.draw_cell_at(fb, bx, by, snap.food, '●', CellStyle::on(FOOD, BACKGROUND));

        for (i, seg) in snap.body.iter().enumerate() {
            let style = if i == 0 {
                CellStyle::on(SNAKE_HEAD, BACKGROUND).bold()
            } else {
                CellStyle::on(SNAKE_BODY, BACKGROUND)
            };
            let ch = if i == 0 { '█' } else { '▓' };
            self.draw_cell_at(fb, bx, by, *seg, ch, style);
        }
    }

    fn draw_cell_at(
        &self,
        fb: &mut FrameBuffer,
        bx: u16,
        by: u16,
        p: Point,
        ch: char,
        style: CellStyle,
    ) {
        if p.x < 0 || p.y < 0 {
            return;
        }
        self.fill_cell(fb, bx, by, p.x as u16, p.y as u16, ch, style);
    }

    fn fill_cell(
        &self,
        fb: &mut FrameBuffer,
        bx: u16,
        by: u16,
        cx: u16,
        cy: u16,
        ch: char,
        style: CellStyle,
    ) {
        fb.fill_rect(
            bx + cx * self.cell_w,
            by + cy * self.cell_h,
            self.cell_w,
            self.cell_h,
            ch,
            style,
        );
    }

    /// Single glyph centered-ish in a board cell
    fn put_in_cell(
        &self,
        fb: &mut FrameBuffer,
        bx: u16,
        by: u16,
        cx: u16,
        cy: u16,
        ch: char,
        style: CellStyle,
    ) {
        fb.put_char(bx + cx * self.cell_w, by + cy * self.cell_h, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        scores: &[LeaderboardEntry],
        vl: &ViewLayout,
        viewport: Viewport,
    ) {
        let panel_x = vl.frame_x.saturating_add(vl.frame_w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 14 {
            return;
        }

        let title = CellStyle::on(TEXT, PANEL_BG).bold();
        let row = CellStyle::on(Rgb::new(200, 200, 200), PANEL_BG);
        let faded = row.dim();

        let mut y = vl.frame_y;
        fb.put_str(panel_x, y, "LEADERBOARD", title);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, "top 10", faded);
        y = y.saturating_add(2);

        if scores.is_empty() {
            fb.put_str(panel_x, y, "No scores yet.", faded);
            fb.put_str(panel_x, y + 1, "Be the first!", faded);
            return;
        }

        for (i, entry) in scores.iter().enumerate() {
            if y >= viewport.height {
                break;
            }
            let line = format!("{:>2}. {:<12} {:>6}", i + 1, clip(&entry.name, 12), entry.score);
            fb.put_str(panel_x, y, &line, if i == 0 { row.bold() } else { row });
            y = y.saturating_add(1);
        }
    }

    fn draw_overlay(&self, fb: &mut FrameBuffer, overlay: Overlay<'_>, vl: &ViewLayout) {
        let lines: Vec<String> = match overlay {
            Overlay::None => return,
            Overlay::Start => vec!["TAP OR PRESS ENTER TO START".to_string()],
            Overlay::Paused => vec!["PAUSED".to_string()],
            Overlay::NameEntry { score, buffer } => vec![
                format!("GAME OVER · {score} points"),
                format!("name: {buffer}_"),
                "press enter to save".to_string(),
            ],
        };

        let style = CellStyle::on(Rgb::new(255, 255, 255), PANEL_BG).bold();
        let mid_y = vl.frame_y + vl.frame_h / 2;
        let base_y = mid_y.saturating_sub(lines.len() as u16 / 2);
        for (i, line) in lines.iter().enumerate() {
            let w = line.chars().count() as u16;
            let x = vl.frame_x + vl.frame_w.saturating_sub(w) / 2;
            fb.put_str(x, base_y + i as u16, line, style);
        }
    }

    fn draw_footer(&self, fb: &mut FrameBuffer, viewport: Viewport) {
        if viewport.height < 2 {
            return;
        }
        let hint = "arrows/wasd steer · swipe or pad · space pauses · r resets · q quits";
        let style = CellStyle::on(TEXT, PANEL_BG).dim();
        let x = viewport.width.saturating_sub(hint.chars().count() as u16) / 2;
        fb.put_str(x, viewport.height - 1, hint, style);
    }
}

fn draw_pad(fb: &mut FrameBuffer, pad: PadLayout, running: bool) {
    let style = CellStyle::on(TEXT, Rgb::new(30, 41, 59));
    for (button, sx, sy) in PadButton::SLOTS {
        let (bx, by) = pad.button_origin(sx, sy);
        fb.fill_rect(bx, by, BUTTON_W, BUTTON_H, ' ', style);
        fb.put_char(bx + BUTTON_W / 2, by + BUTTON_H / 2, button.glyph(running), style.bold());
    }
}

fn clip(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((i, _)) => &s[..i],
        None => s,
    }
}
