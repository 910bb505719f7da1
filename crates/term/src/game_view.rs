//! GameView: maps a [`GameSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{FrameBuffer, Rgb, Style};
use crate::palette::piece_color;
use crate::types::{GRID_HEIGHT, GRID_WIDTH};

/// Text drawn across the field once the game has ended
pub const GAME_OVER_TEXT: &str = "GAME OVER!";

const FIELD_BG: Rgb = Rgb::new(0, 0, 0);

/// Widest cell that still keeps the framed field within `u16` columns.
pub const MAX_CELL_W: u16 = (u16::MAX - 2) / GRID_WIDTH as u16;

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

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Draws the visible field, framed, with the active piece on top.
///
/// Only rows 0..20 are drawn; the hidden buffer never appears on screen.
#[derive(Debug, Clone, Copy)]
pub struct GameView {
    /// Terminal columns per grid cell.
    cell_w: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // Two columns per cell keeps cells roughly square in most fonts.
        Self {
            cell_w: 2,
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16) -> Self {
        Self {
            cell_w: cell_w.clamp(1, MAX_CELL_W),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Outer size of the framed field in terminal cells
    pub fn frame_size(&self) -> (u16, u16) {
        (
            GRID_WIDTH as u16 * self.cell_w + 2,
            GRID_HEIGHT as u16 + 2,
        )
    }

    /// Top-left corner of the frame within `viewport`
    pub fn origin(&self, viewport: Viewport) -> (u16, u16) {
        let (frame_w, frame_h) = self.frame_size();
        let x = viewport.width.saturating_sub(frame_w) / 2;
        let y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
            AnchorY::Top => 0,
        };
        (x, y)
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.fill(' ', Style::default());

        let (frame_w, frame_h) = self.frame_size();
        let (start_x, start_y) = self.origin(viewport);

        self.draw_border(fb, start_x, start_y, frame_w, frame_h);

        let empty = Style::new(Rgb::new(60, 60, 60), FIELD_BG);
        for row in 0..GRID_HEIGHT as i8 {
            for col in 0..GRID_WIDTH as i8 {
                let x = start_x + 1 + col as u16 * self.cell_w;
                let y = start_y + 1 + row as u16;
                match snap.cell(row, col) {
                    Some(kind) => {
                        let style = Style::new(piece_color(kind), FIELD_BG);
                        fb.fill_rect(x, y, self.cell_w, 1, '█', style);
                    }
                    None => {
                        fb.fill_rect(x, y, self.cell_w, 1, ' ', empty);
                        fb.put(x, y, '·', empty);
                    }
                }
            }
        }

        if snap.game_over {
            self.draw_game_over(fb, start_x, start_y, frame_w, frame_h);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
        let style = Style::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));

        fb.put(x, y, '┌', style);
        fb.put(x + w - 1, y, '┐', style);
        fb.put(x, y + h - 1, '└', style);
        fb.put(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put(x + dx, y, '─', style);
            fb.put(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put(x, y + dy, '│', style);
            fb.put(x + w - 1, y + dy, '│', style);
        }
    }

    /// Black band across the middle of the field with the game-over text.
    fn draw_game_over(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
    ) {
        let band = Style::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();
        let mid_y = start_y + frame_h / 2;
        fb.fill_rect(start_x + 1, mid_y - 1, frame_w - 2, 3, ' ', band);

        let text_w = GAME_OVER_TEXT.chars().count() as u16;
        let x = start_x + frame_w.saturating_sub(text_w) / 2;
        fb.put_str(x, mid_y, GAME_OVER_TEXT, band);
    }
}
