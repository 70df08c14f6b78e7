//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{get_shape, ActiveSnapshot, GameSnapshot};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{GamePhase, PieceKind, BOARD_HEIGHT, BOARD_WIDTH, MAX_LEVEL};

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

const PLAY_BG: Rgb = Rgb::new(30, 30, 40);
const PANEL_BG: Rgb = Rgb::new(0, 0, 0);
/// Column offset of values within the side panel
const VALUE_COL: u16 = 9;

/// Display color of a shape.
pub fn piece_color(kind: PieceKind) -> Rgb {
    match kind {
        PieceKind::I => Rgb::new(80, 220, 220),
        PieceKind::J => Rgb::new(80, 120, 220),
        PieceKind::L => Rgb::new(255, 165, 0),
        PieceKind::O => Rgb::new(240, 220, 80),
        PieceKind::S => Rgb::new(100, 220, 120),
        PieceKind::T => Rgb::new(200, 120, 220),
        PieceKind::Z => Rgb::new(220, 80, 80),
    }
}

/// A lightweight terminal renderer for the game.
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
        Self {
            cell_w: 2,
            cell_h: 1,
            anchor_y: AnchorY::Center,
        }
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

    /// Render the snapshot into an existing framebuffer.
    ///
    /// This is the allocation-free hot path. Callers can reuse a framebuffer
    /// across frames and only resize when the terminal size changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let board_px_w = (BOARD_WIDTH as u16) * self.cell_w;
        let board_px_h = (BOARD_HEIGHT as u16) * self.cell_h;
        let frame_w = board_px_w + 2;
        let frame_h = board_px_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
            AnchorY::Top => 0,
        };

        let bg = CellStyle::new(Rgb::new(80, 80, 90), PLAY_BG);
        let border = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);

        // Background for play area.
        fb.fill_rect(start_x + 1, start_y + 1, board_px_w, board_px_h, ' ', bg);

        // Border.
        self.draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        // Locked board cells. The last game's board stays visible on LevelSelect.
        for y in 0..BOARD_HEIGHT as u16 {
            for x in 0..BOARD_WIDTH as u16 {
                let cell = snap.board[y as usize][x as usize];
                if let Some(kind) = PieceKind::from_cell(cell) {
                    self.draw_board_cell(fb, start_x, start_y, x, y, kind);
                } else {
                    self.draw_empty_cell(fb, start_x, start_y, x, y);
                }
            }
        }

        // Ghost outline, then the falling piece over it.
        if let Some(active) = snap.active {
            if snap.phase == GamePhase::Playing {
                if let Some(ghost_y) = snap.ghost_y {
                    let ghost_style = CellStyle::new(piece_color(active.kind), PLAY_BG).dim();
                    self.draw_piece(fb, start_x, start_y, active, ghost_y, '░', ghost_style);
                }
            }

            let style = CellStyle::new(piece_color(active.kind), PLAY_BG).bold();
            self.draw_piece(fb, start_x, start_y, active, active.y, '█', style);
        }

        self.draw_side_panel(fb, snap, viewport, start_x, start_y, frame_w);

        // Overlays.
        match snap.phase {
            GamePhase::Paused => {
                self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, 0, "PAUSED");
                self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, 2, "R: restart");
            }
            GamePhase::GameOver => {
                self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, 0, "GAME OVER");
                self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, 2, "R: restart");
            }
            GamePhase::LevelSelect | GamePhase::Playing => {}
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
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

    fn draw_empty_cell(&self, fb: &mut FrameBuffer, start_x: u16, start_y: u16, x: u16, y: u16) {
        let style = CellStyle::new(Rgb::new(90, 90, 100), PLAY_BG).dim();
        self.fill_cell_rect(fb, start_x, start_y, x, y, '·', style);
    }

    fn draw_board_cell(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        x: u16,
        y: u16,
        kind: PieceKind,
    ) {
        let style = CellStyle::new(piece_color(kind), PLAY_BG).bold();
        self.fill_cell_rect(fb, start_x, start_y, x, y, '█', style);
    }

    /// Draw the active piece's cells with its box at row `box_y`, skipping
    /// cells outside the visible grid.
    #[allow(clippy::too_many_arguments)]
    fn draw_piece(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        active: ActiveSnapshot,
        box_y: i8,
        ch: char,
        style: CellStyle,
    ) {
        for &(dx, dy) in get_shape(active.kind, active.rotation).iter() {
            let x = active.x.saturating_add(dx);
            let y = box_y.saturating_add(dy);
            if x >= 0 && x < BOARD_WIDTH as i8 && y >= 0 && y < BOARD_HEIGHT as i8 {
                self.fill_cell_rect(fb, start_x, start_y, x as u16, y as u16, ch, style);
            }
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn fill_cell_rect(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        cell_x: u16,
        cell_y: u16,
        ch: char,
        style: CellStyle,
    ) {
        let px = start_x + 1 + cell_x * self.cell_w;
        let py = start_y + 1 + cell_y * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width {
            return;
        }
        let panel_w = viewport.width - panel_x;
        if panel_w < 12 {
            return;
        }

        let label = CellStyle::new(Rgb::new(220, 220, 220), PANEL_BG).bold();
        let value = CellStyle::new(Rgb::new(240, 220, 80), PANEL_BG);
        let hint = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG).dim();
        let value_x = panel_x + VALUE_COL;

        let mut y = start_y;
        fb.put_str(panel_x, y, "SCORE", label);
        fb.put_u32(value_x, y, snap.score, value);
        y += 1;

        fb.put_str(panel_x, y, "LEVEL", label);
        fb.put_u32(value_x, y, snap.level, value);
        y += 1;

        fb.put_str(panel_x, y, "LINES", label);
        fb.put_u32(value_x, y, snap.lines, value);
        y += 1;

        fb.put_str(panel_x, y, "TIME", label);
        let end = fb.put_u64(value_x, y, snap.elapsed_secs(), value);
        fb.put_char(end, y, 's', value);
        y += 1;

        fb.put_str(panel_x, y, "HIGHEST", label);
        fb.put_u32(value_x, y, snap.high_score, value);
        y += 2;

        match snap.phase {
            GamePhase::LevelSelect => {
                fb.put_str(panel_x, y, "SELECT LEVEL", label);
                y += 1;
                let selected = CellStyle::new(Rgb::new(80, 220, 220), PANEL_BG).bold();
                for level in 1..=MAX_LEVEL {
                    let is_selected = level == snap.selected_level;
                    let style = if is_selected { selected } else { value };
                    fb.put_str(panel_x, y, if is_selected { ">" } else { " " }, style);
                    let end = fb.put_str(panel_x + 2, y, "Level ", style);
                    fb.put_u32(end, y, level, style);
                    y += 1;
                }
                y += 1;
                fb.put_str(panel_x, y, "1-5   choose", hint);
                y += 1;
                fb.put_str(panel_x, y, "ENTER start", hint);
                y += 1;
                fb.put_str(panel_x, y, "Q     quit", hint);
            }
            GamePhase::Playing => {
                fb.put_str(panel_x, y, "KEYS", label);
                y += 1;
                for line in [
                    "←/→   move",
                    "↑     rotate",
                    "↓     soft drop",
                    "SPACE hard drop",
                    "ESC   pause",
                    "Q     quit",
                ] {
                    fb.put_str(panel_x, y, line, hint);
                    y += 1;
                }
            }
            GamePhase::Paused => {
                fb.put_str(panel_x, y, "ESC   resume", hint);
                y += 1;
                fb.put_str(panel_x, y, "R     restart", hint);
                y += 1;
                fb.put_str(panel_x, y, "Q     quit", hint);
            }
            GamePhase::GameOver => {
                fb.put_str(panel_x, y, "R     restart", hint);
                y += 1;
                fb.put_str(panel_x, y, "Q     quit", hint);
            }
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_overlay_text(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        row_offset: u16,
        text: &str,
    ) {
        let y = start_y
            .saturating_add(frame_h / 2)
            .saturating_add(row_offset);
        let text_w = text.chars().count() as u16;
        let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
        let style = CellStyle::new(Rgb::new(255, 255, 255), PANEL_BG).bold();
        fb.put_str(x, y, text, style);
    }
}
