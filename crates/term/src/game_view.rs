//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{PieceKind, QUEUE_LEN};

const BOARD_BG: Rgb = Rgb::new(20, 20, 28);
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

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Screen-space placement of the board for one frame.
#[derive(Debug, Clone, Copy)]
struct Layout {
    /// Left edge of the board frame.
    x: u16,
    /// Row holding the shooter marker; the frame starts one row below.
    shooter_y: u16,
    frame_w: u16,
    frame_h: u16,
}

impl Layout {
    fn frame_y(&self) -> u16 {
        self.shooter_y + 1
    }
}

/// A lightweight terminal renderer for the shooter game.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self::new(2, 1)
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Terminal size needed to show the board, border and shooter row.
    pub fn board_extent(&self, snap: &GameSnapshot) -> (u16, u16) {
        let cols = u16::try_from(snap.width).unwrap_or(u16::MAX);
        let rows = u16::try_from(snap.height).unwrap_or(u16::MAX);
        let frame_w = cols.saturating_mul(self.cell_w).saturating_add(2);
        let frame_h = rows.saturating_mul(self.cell_h).saturating_add(2);
        (frame_w, frame_h.saturating_add(1))
    }

    /// Render the current game state into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when the
    /// terminal size changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().with_char(' '));

        let (frame_w, total_h) = self.board_extent(snap);
        let layout = Layout {
            x: viewport.width.saturating_sub(frame_w) / 2,
            shooter_y: match self.anchor_y {
                AnchorY::Center => viewport.height.saturating_sub(total_h) / 2,
                AnchorY::Top => 0,
            },
            frame_w,
            frame_h: total_h - 1,
        };

        let bg = CellStyle::new(Rgb::new(70, 70, 80), BOARD_BG);
        fb.fill_rect(
            layout.x + 1,
            layout.frame_y() + 1,
            frame_w - 2,
            layout.frame_h - 2,
            ' ',
            bg,
        );
        self.draw_border(fb, &layout);

        for y in 0..snap.height as i32 {
            for x in 0..snap.width as i32 {
                match snap.cell(x, y).and_then(PieceKind::from_color) {
                    Some(kind) => self.draw_block(fb, &layout, x, y, kind),
                    None => self.fill_cell_rect(fb, &layout, x, y, '·', bg.dim()),
                }
            }
        }

        for (x, y) in snap.active.cells() {
            if snap.cell(x, y).is_some() {
                self.draw_block(fb, &layout, x, y, snap.active.kind);
            }
        }

        let bullet = CellStyle::new(Rgb::new(255, 255, 255), BOARD_BG).bold();
        for b in &snap.bullets {
            if snap.cell(b.x, b.y).is_some() {
                let (px, py) = self.cell_origin(&layout, b.x, b.y);
                fb.put_char(px, py, '•', bullet);
            }
        }

        self.draw_shooter(fb, &layout, snap.shooter_x);
        self.draw_side_panel(fb, snap, viewport, &layout);

        if snap.paused {
            self.draw_overlay_text(fb, &layout, "PAUSED");
        } else if snap.game_over() {
            self.draw_overlay_text(fb, &layout, "GAME OVER");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, layout: &Layout) {
        let style = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);
        let (x, y, w, h) = (layout.x, layout.frame_y(), layout.frame_w, layout.frame_h);

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

    fn draw_shooter(&self, fb: &mut FrameBuffer, layout: &Layout, shooter_x: i32) {
        if shooter_x < 0 {
            return;
        }
        let style = CellStyle::new(Rgb::new(255, 80, 80), PANEL_BG).bold();
        let col = u16::try_from(shooter_x).unwrap_or(u16::MAX);
        let px = (layout.x + 1).saturating_add(col.saturating_mul(self.cell_w));
        fb.fill_rect(px, layout.shooter_y, self.cell_w, 1, '▼', style);
    }

    fn draw_block(&self, fb: &mut FrameBuffer, layout: &Layout, x: i32, y: i32, kind: PieceKind) {
        let style = CellStyle::new(piece_color(kind), BOARD_BG).bold();
        self.fill_cell_rect(fb, layout, x, y, '█', style);
    }

    fn cell_origin(&self, layout: &Layout, x: i32, y: i32) -> (u16, u16) {
        let col = u16::try_from(x).unwrap_or(u16::MAX);
        let row = u16::try_from(y).unwrap_or(u16::MAX);
        (
            (layout.x + 1).saturating_add(col.saturating_mul(self.cell_w)),
            (layout.frame_y() + 1).saturating_add(row.saturating_mul(self.cell_h)),
        )
    }

    fn fill_cell_rect(
        &self,
        fb: &mut FrameBuffer,
        layout: &Layout,
        x: i32,
        y: i32,
        ch: char,
        style: CellStyle,
    ) {
        let (px, py) = self.cell_origin(layout, x, y);
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        layout: &Layout,
    ) {
        let panel_x = layout.x.saturating_add(layout.frame_w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 8 {
            return;
        }

        let label = CellStyle::new(Rgb::new(220, 220, 220), PANEL_BG).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);

        let mut y = layout.frame_y();
        fb.put_str(panel_x, y, "SCORE", label);
        fb.put_u32(panel_x, y + 1, snap.score, value);
        y += 3;

        fb.put_str(panel_x, y, "LEVEL", label);
        fb.put_u32(panel_x, y + 1, snap.level, value);
        y += 3;

        fb.put_str(panel_x, y, "HOLD", label);
        match snap.hold {
            Some(held) => {
                let style = CellStyle {
                    fg: piece_color(held.kind),
                    dim: snap.hold_used,
                    ..value
                };
                fb.put_str(panel_x, y + 1, held.kind.letter(), style);
            }
            None => fb.put_str(panel_x, y + 1, "-", value),
        }
        y += 3;

        fb.put_str(panel_x, y, "NEXT", label);
        for figure in snap.next_queue.iter().take(QUEUE_LEN) {
            y += 1;
            if y >= viewport.height {
                break;
            }
            let style = CellStyle {
                fg: piece_color(figure.kind),
                ..value
            };
            fb.put_str(panel_x, y, figure.kind.letter(), style);
        }
    }

    fn draw_overlay_text(&self, fb: &mut FrameBuffer, layout: &Layout, text: &str) {
        let mid_y = layout.frame_y().saturating_add(layout.frame_h / 2);
        let text_w = text.chars().count() as u16;
        let x = layout.x.saturating_add(layout.frame_w.saturating_sub(text_w) / 2);
        let style = CellStyle::new(Rgb::new(255, 255, 255), PANEL_BG).bold();
        fb.put_str(x, mid_y, text, style);
    }
}

fn piece_color(kind: PieceKind) -> Rgb {
    match kind {
        PieceKind::I => Rgb::new(0, 255, 255),
        PieceKind::J => Rgb::new(0, 0, 255),
        PieceKind::L => Rgb::new(255, 165, 0),
        PieceKind::O => Rgb::new(255, 255, 0),
        PieceKind::S => Rgb::new(0, 255, 0),
        PieceKind::T => Rgb::new(128, 0, 128),
        PieceKind::Z => Rgb::new(255, 0, 0),
    }
}
