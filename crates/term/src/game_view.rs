//! GameView: maps a session snapshot into a terminal canvas.
//!
//! This module is pure (no I/O). It can be unit-tested.

use std::fmt::Write as _;

use arrayvec::ArrayString;

use crate::core::GameSnapshot;
use crate::fb::{Canvas, Glyph, Rgb, Style};
use crate::types::{color_of_cell, ColorIndex, SessionState, PALETTE_SIZE};

/// Block colors, indexed by [`ColorIndex`].
pub const PALETTE: [Rgb; PALETTE_SIZE as usize] = [
    Rgb::new(200, 200, 200),
    Rgb::new(150, 150, 150),
    Rgb::new(100, 100, 100),
    Rgb::new(200, 150, 150),
    Rgb::new(150, 200, 150),
    Rgb::new(150, 150, 200),
    Rgb::new(200, 200, 150),
];

const WELL_BG: Rgb = Rgb::new(30, 30, 40);
const BLOCK: char = '█';

/// Palette entry for a color index; out-of-range indices wrap.
pub fn palette_rgb(color: ColorIndex) -> Rgb {
    PALETTE[color as usize % PALETTE.len()]
}

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

/// Where the well's frame landed on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Frame {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
}

/// Draws the well, the side panel and the title and game-over overlays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameView {
    /// Terminal columns per grid cell.
    cell_w: u16,
    /// Terminal rows per grid cell.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // Two columns per cell keeps blocks roughly square in most fonts.
        Self { cell_w: 2, cell_h: 1 }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    /// Render into an existing canvas, resizing it to the viewport.
    pub fn render_into(&self, snap: &GameSnapshot<'_>, viewport: Viewport, canvas: &mut Canvas) {
        canvas.resize(viewport.width, viewport.height);
        canvas.clear(Glyph::default());

        let frame = self.frame_for(snap, viewport);
        self.draw_well(canvas, frame);

        for (y, row) in snap.board.rows().enumerate() {
            for (x, &cell) in row.iter().enumerate() {
                if let Some(color) = color_of_cell(cell) {
                    self.draw_block(canvas, frame, x as i32, y as i32, color);
                }
            }
        }

        // The replacement piece on a lost board overlaps the stack; hide it.
        if snap.playable() {
            for (x, y) in snap.active.cells() {
                self.draw_block(canvas, frame, x, y, snap.active.color);
            }
        }

        self.draw_panel(canvas, snap, frame);

        match snap.state {
            SessionState::AwaitingStart => {
                self.draw_overlay(canvas, frame, &["BLOCKFALL", "", "press SPACE to start", "Q to quit"]);
            }
            SessionState::GameOver => {
                let mut score = ArrayString::<32>::new();
                let _ = write!(score, "final score {}", snap.score);
                self.draw_overlay(canvas, frame, &["GAME OVER", "", score.as_str(), "Q to quit"]);
            }
            SessionState::Running => {}
        }
    }

    /// Convenience helper that allocates a new canvas.
    pub fn render(&self, snap: &GameSnapshot<'_>, viewport: Viewport) -> Canvas {
        let mut canvas = Canvas::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut canvas);
        canvas
    }

    fn frame_for(&self, snap: &GameSnapshot<'_>, viewport: Viewport) -> Frame {
        let w = snap.board.width() as u16 * self.cell_w + 2;
        let h = snap.board.height() as u16 * self.cell_h + 2;
        Frame {
            x: viewport.width.saturating_sub(w) / 2,
            y: viewport.height.saturating_sub(h) / 2,
            w,
            h,
        }
    }

    fn draw_well(&self, canvas: &mut Canvas, f: Frame) {
        let border = Style::new(Rgb::gray(200), Rgb::gray(0));
        let bg = Style::new(Rgb::new(80, 80, 90), WELL_BG);

        canvas.fill(f.x + 1, f.y + 1, f.w - 2, f.h - 2, bg.glyph(' '));

        let right = f.x + f.w - 1;
        let bottom = f.y + f.h - 1;
        canvas.set(f.x, f.y, border.glyph('┌'));
        canvas.set(right, f.y, border.glyph('┐'));
        canvas.set(f.x, bottom, border.glyph('└'));
        canvas.set(right, bottom, border.glyph('┘'));
        for x in f.x + 1..right {
            canvas.set(x, f.y, border.glyph('─'));
            canvas.set(x, bottom, border.glyph('─'));
        }
        for y in f.y + 1..bottom {
            canvas.set(f.x, y, border.glyph('│'));
            canvas.set(right, y, border.glyph('│'));
        }
    }

    /// Paint one grid cell. Cells above the well (negative rows) are skipped.
    fn draw_block(&self, canvas: &mut Canvas, f: Frame, x: i32, y: i32, color: ColorIndex) {
        if x < 0 || y < 0 {
            return;
        }
        let style = Style::new(palette_rgb(color), WELL_BG);
        let px = f.x + 1 + x as u16 * self.cell_w;
        let py = f.y + 1 + y as u16 * self.cell_h;
        canvas.fill(px, py, self.cell_w, self.cell_h, style.glyph(BLOCK));
    }

    fn draw_panel(&self, canvas: &mut Canvas, snap: &GameSnapshot<'_>, f: Frame) {
        let x = f.x + f.w + 2;
        if x >= canvas.width() {
            return;
        }
        let label = Style::default().bold();
        let value = Style::new(Rgb::gray(200), Rgb::gray(0));

        canvas.text(x, f.y, "SCORE", label);
        canvas.number(x, f.y + 1, snap.score, value);
        canvas.text(x, f.y + 3, "LINES", label);
        canvas.number(x, f.y + 4, snap.lines, value);
    }

    fn draw_overlay(&self, canvas: &mut Canvas, f: Frame, lines: &[&str]) {
        let style = Style::new(Rgb::gray(255), Rgb::gray(0)).bold();
        let top = (f.y + f.h / 2).saturating_sub(lines.len() as u16 / 2);
        for (i, line) in lines.iter().enumerate() {
            if line.is_empty() {
                continue;
            }
            let w = line.chars().count() as u16;
            let x = f.x + f.w.saturating_sub(w) / 2;
            canvas.text(x, top + i as u16, line, style);
        }
    }
}
