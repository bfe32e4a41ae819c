//! GameView: maps a `GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{canonical_shape, GameSnapshot};
use crate::fb::{FrameBuffer, Glyph, Style};
use crate::types::{Phase, PieceKind, Rgb, BOARD_HEIGHT, BOARD_WIDTH};

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

/// Columns reserved right of the board for counters and the preview
pub const PANEL_WIDTH: u16 = 12;
const PANEL_GAP: u16 = 2;

const SCREEN_BG: Rgb = Rgb::new(0, 0, 0);
const WELL_BG: Rgb = Rgb::new(30, 30, 40);

const BORDER: Style = Style::new(Rgb::new(200, 200, 200), SCREEN_BG);
const GRID_DOT: Style = Style::new(Rgb::new(90, 90, 100), WELL_BG).dim();
const LABEL: Style = Style::new(Rgb::new(220, 220, 220), SCREEN_BG).bold();
const VALUE: Style = Style::new(Rgb::new(200, 200, 200), SCREEN_BG);
const TITLE: Style = Style::new(Rgb::new(255, 255, 255), SCREEN_BG).bold();
const HINT: Style = Style::new(Rgb::new(180, 180, 180), SCREEN_BG);

const BLOCK: char = '█';

/// Top-left corners of the board frame and side panel for one viewport
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Layout {
    frame_x: u16,
    frame_y: u16,
    frame_w: u16,
    frame_h: u16,
    panel_x: u16,
}

/// Draws the well, the falling piece, the side panel and phase overlays.
#[derive(Debug, Clone, Copy)]
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self::new(2, 1)
    }
}

/// Largest cell size accepted by [`GameView::new`]
pub const MAX_CELL_SIZE: u16 = 8;

impl GameView {
    /// Cell sizes are clamped to `1..=MAX_CELL_SIZE`.
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.clamp(1, MAX_CELL_SIZE),
            cell_h: cell_h.clamp(1, MAX_CELL_SIZE),
        }
    }

    /// Smallest viewport that shows the board and the side panel unclipped
    pub fn min_viewport(&self) -> Viewport {
        let frame_w = BOARD_WIDTH as u16 * self.cell_w + 2;
        let frame_h = BOARD_HEIGHT as u16 * self.cell_h + 2;
        Viewport::new(frame_w + PANEL_GAP + PANEL_WIDTH, frame_h)
    }

    fn layout(&self, viewport: Viewport) -> Layout {
        let min = self.min_viewport();
        let frame_w = BOARD_WIDTH as u16 * self.cell_w + 2;
        let frame_h = min.height;
        let frame_x = viewport.width.saturating_sub(min.width) / 2;
        let frame_y = viewport.height.saturating_sub(frame_h) / 2;
        Layout {
            frame_x,
            frame_y,
            frame_w,
            frame_h,
            panel_x: frame_x + frame_w + PANEL_GAP,
        }
    }

    /// Render the snapshot into an existing framebuffer.
    ///
    /// This is the allocation-free hot path. Callers can reuse a framebuffer
    /// across frames and only resize when the terminal size changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Glyph::new(' ', Style::default()));

        let layout = self.layout(viewport);

        draw_border(
            fb,
            layout.frame_x,
            layout.frame_y,
            layout.frame_w,
            layout.frame_h,
        );

        for (y, row) in snap.board.iter().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                match cell {
                    Some(color) => {
                        let style = block_style(*color);
                        self.fill_cell(fb, layout, x as u16, y as u16, BLOCK, style)
                    }
                    None => self.fill_cell(fb, layout, x as u16, y as u16, '·', GRID_DOT),
                }
            }
        }

        // The piece that failed to spawn is not shown once the game is over.
        if snap.phase != Phase::GameOver {
            if let Some(active) = snap.active {
                let style = block_style(active.color());
                for (x, y) in active.cells() {
                    if (0..BOARD_WIDTH as i8).contains(&x) && (0..BOARD_HEIGHT as i8).contains(&y) {
                        self.fill_cell(fb, layout, x as u16, y as u16, BLOCK, style);
                    }
                }
            }
        }

        self.draw_side_panel(fb, snap, layout);
        draw_overlay(fb, snap, layout);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    /// Terminal position of board cell `(x, y)`
    pub fn cell_origin(&self, viewport: Viewport, x: u16, y: u16) -> (u16, u16) {
        let layout = self.layout(viewport);
        (
            layout.frame_x + 1 + x * self.cell_w,
            layout.frame_y + 1 + y * self.cell_h,
        )
    }

    fn fill_cell(
        &self,
        fb: &mut FrameBuffer,
        layout: Layout,
        x: u16,
        y: u16,
        ch: char,
        style: Style,
    ) {
        let px = layout.frame_x + 1 + x * self.cell_w;
        let py = layout.frame_y + 1 + y * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, layout: Layout) {
        let x = layout.panel_x;
        if x >= fb.width() {
            return;
        }

        let mut y = layout.frame_y;
        for (label, value) in [
            ("SCORE", snap.score),
            ("LEVEL", snap.level),
            ("LINES", snap.lines),
            ("HIGH", snap.high_score),
        ] {
            fb.put_str(x, y, label, LABEL);
            fb.put_u32(x, y + 1, value, VALUE);
            y += 3;
        }

        fb.put_str(x, y, "NEXT", LABEL);
        if let Some(kind) = snap.next {
            self.draw_preview(fb, kind, x, y + 1);
        }
    }

    /// Canonical matrix of `kind`, one row per matrix row, empty rows skipped
    fn draw_preview(&self, fb: &mut FrameBuffer, kind: PieceKind, x: u16, y: u16) {
        let shape = canonical_shape(kind);
        let style = block_style(kind.color());
        let mut py = y;
        for row in 0..shape.height() as usize {
            if !(0..shape.width() as usize).any(|col| shape.is_filled(row, col)) {
                continue;
            }
            for col in 0..shape.width() as usize {
                if shape.is_filled(row, col) {
                    fb.fill_rect(x + col as u16 * self.cell_w, py, self.cell_w, 1, BLOCK, style);
                }
            }
            py += 1;
        }
    }
}

fn block_style(color: Rgb) -> Style {
    Style::new(color, WELL_BG)
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
    if w < 2 || h < 2 {
        return;
    }
    fb.put_char(x, y, '┌', BORDER);
    fb.put_char(x + w - 1, y, '┐', BORDER);
    fb.put_char(x, y + h - 1, '└', BORDER);
    fb.put_char(x + w - 1, y + h - 1, '┘', BORDER);

    for dx in 1..w - 1 {
        fb.put_char(x + dx, y, '─', BORDER);
        fb.put_char(x + dx, y + h - 1, '─', BORDER);
    }
    for dy in 1..h - 1 {
        fb.put_char(x, y + dy, '│', BORDER);
        fb.put_char(x + w - 1, y + dy, '│', BORDER);
    }
}

/// Title plus hint, centered on the well. Lines wider than the well spill
/// evenly to both sides.
fn draw_overlay(fb: &mut FrameBuffer, snap: &GameSnapshot, layout: Layout) {
    let (title, hint) = match snap.phase {
        Phase::Playing => return,
        Phase::Idle => ("TETRIS", "Press SPACE to start"),
        Phase::Paused => ("PAUSED", "Press SPACE to resume"),
        Phase::GameOver => ("GAME OVER", " - SPACE to restart"),
    };

    let center_x = layout.frame_x + layout.frame_w / 2;
    let mid_y = layout.frame_y + layout.frame_h / 2;
    let centered = |len: u16| center_x.saturating_sub(len / 2);

    let title_len = title.chars().count() as u16;
    fb.put_str(centered(title_len), mid_y.saturating_sub(1), title, TITLE);

    if snap.phase == Phase::GameOver {
        let len = 6 + digit_count(snap.score) + hint.len() as u16;
        let x = fb.put_str(centered(len), mid_y + 1, "Score ", HINT);
        let x = fb.put_u32(x, mid_y + 1, snap.score, HINT);
        fb.put_str(x, mid_y + 1, hint, HINT);
    } else {
        fb.put_str(centered(hint.len() as u16), mid_y + 1, hint, HINT);
    }
}

fn digit_count(mut n: u32) -> u16 {
    let mut count = 1;
    while n >= 10 {
        n /= 10;
        count += 1;
    }
    count
}
