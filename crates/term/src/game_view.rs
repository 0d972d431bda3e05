//! GameView: maps `core::GameState` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{GameState, StatusText};
use crate::fb::{FrameBuffer, Rgb, Style};
use crate::types::{Cell, Status, GRID_SIZE};

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

const BOARD_BG: Rgb = Rgb::new(24, 28, 24);
const BLACK: Rgb = Rgb::new(0, 0, 0);

const FOOD_CH: char = '█';
const HEAD_CH: char = '█';
const BODY_CH: char = '▓';
const EMPTY_CH: char = '·';

/// Minimum side panel width worth drawing.
const PANEL_MIN_W: u16 = 12;

/// Board frame origin inside a viewport.
#[derive(Debug, Clone, Copy)]
struct Frame {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
}

/// A lightweight terminal renderer for the snake board.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
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

    /// Frame size (board plus border) in terminal cells.
    pub fn frame_size(&self) -> (u16, u16) {
        (
            GRID_SIZE as u16 * self.cell_w + 2,
            GRID_SIZE as u16 * self.cell_h + 2,
        )
    }

    /// Render into a fresh framebuffer.
    pub fn render(&self, state: &GameState, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(state, viewport, &mut fb);
        fb
    }

    /// Render the current game state, reusing `fb`.
    pub fn render_into(&self, state: &GameState, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Style::default().glyph(' '));

        let (frame_w, frame_h) = self.frame_size();
        let frame = Frame {
            x: viewport.width.saturating_sub(frame_w) / 2,
            y: viewport.height.saturating_sub(frame_h) / 2,
            w: frame_w,
            h: frame_h,
        };

        self.draw_border(fb, frame);

        let empty = Style::new(Rgb::new(70, 80, 70), BOARD_BG).dim();
        for y in 0..GRID_SIZE as i8 {
            for x in 0..GRID_SIZE as i8 {
                self.fill_cell(fb, frame, Cell::new(x, y), EMPTY_CH, empty);
            }
        }

        if let Some(food) = state.food {
            let style = Style::new(Rgb::new(192, 57, 43), BOARD_BG);
            self.fill_cell(fb, frame, food, FOOD_CH, style);
        }

        // Tail first so the head wins if anything overlaps.
        let body = Style::new(Rgb::new(46, 125, 50), BOARD_BG);
        let head = Style::new(Rgb::new(102, 187, 106), BOARD_BG).bold();
        for (i, &cell) in state.snake.iter().enumerate().rev() {
            if i == 0 {
                self.fill_cell(fb, frame, cell, HEAD_CH, head);
            } else {
                self.fill_cell(fb, frame, cell, BODY_CH, body);
            }
        }

        self.draw_side_panel(fb, state, viewport, frame);

        match state.status() {
            Status::GameOver => self.draw_overlay_text(fb, frame, "GAME OVER"),
            Status::Paused => self.draw_overlay_text(fb, frame, "PAUSED"),
            Status::Running => {}
        }
    }

    /// Terminal position of the top-left corner of a board cell.
    fn cell_origin(&self, frame: Frame, cell: Cell) -> Option<(u16, u16)> {
        if !cell.in_bounds() {
            return None;
        }
        let px = frame.x + 1 + cell.x as u16 * self.cell_w;
        let py = frame.y + 1 + cell.y as u16 * self.cell_h;
        Some((px, py))
    }

    fn fill_cell(&self, fb: &mut FrameBuffer, frame: Frame, cell: Cell, ch: char, style: Style) {
        if let Some((px, py)) = self.cell_origin(frame, cell) {
            fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
        }
    }

    fn draw_border(&self, fb: &mut FrameBuffer, frame: Frame) {
        let Frame { x, y, w, h } = frame;
        let style = Style::new(Rgb::new(200, 200, 200), BLACK);

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

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        state: &GameState,
        viewport: Viewport,
        frame: Frame,
    ) {
        let panel_x = frame.x.saturating_add(frame.w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < PANEL_MIN_W {
            return;
        }

        let label = Style::new(Rgb::new(220, 220, 220), BLACK).bold();
        let value = Style::new(Rgb::new(200, 200, 200), BLACK);
        let hint = value.dim();
        let text = StatusText::from_state(state);

        let mut y = frame.y;
        let mut line = |fb: &mut FrameBuffer, s: &str, style: Style, gap: u16| {
            fb.put_str(panel_x, y, s, style);
            y = y.saturating_add(1 + gap);
        };

        line(fb, "SCORE", label, 0);
        line(fb, &text.score, value, 1);
        line(fb, "STATUS", label, 0);
        line(fb, text.status, value, 1);
        line(fb, &format!("P  {}", text.pause_label), hint, 0);
        line(fb, "R  Restart", hint, 0);
        line(fb, "Q  Quit", hint, 0);
    }

    fn draw_overlay_text(&self, fb: &mut FrameBuffer, frame: Frame, text: &str) {
        let mid_y = frame.y.saturating_add(frame.h / 2);
        let text_w = text.chars().count() as u16;
        let x = frame.x.saturating_add(frame.w.saturating_sub(text_w) / 2);
        let style = Style::new(Rgb::new(255, 255, 255), BLACK).bold();
        fb.put_str(x, mid_y, text, style);
    }
}
