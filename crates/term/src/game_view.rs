//! GameView: maps a `GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use autotris_storage::Theme;

use crate::core::{get_shape, GameSnapshot, GridCell};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::theme::{palette, Palette};
use crate::types::{PieceKind, Rotation, BOARD_HEIGHT, BOARD_WIDTH};

const BLOCK: char = '█';
const GHOST: char = '░';
const DOT: char = '·';
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

/// Presentation choices that are not part of the game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewOptions {
    pub theme: Theme,
    /// Settled blocks drawn with a shaded background.
    pub shadow: bool,
    pub ai_enabled: bool,
    /// Best recorded score, shown in the side panel.
    pub best_score: Option<u32>,
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self {
            theme: Theme::Space,
            shadow: true,
            ai_enabled: false,
            best_score: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// A lightweight terminal renderer for the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
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

/// Board origin and frame size in terminal cells.
#[derive(Debug, Clone, Copy)]
struct Frame {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
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

    /// Render into an existing framebuffer, reused across frames.
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        options: &ViewOptions,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        let colors = palette(options.theme);

        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::new(colors.text, PANEL_BG).cell(' '));

        let board_w = (BOARD_WIDTH as u16) * self.cell_w;
        let board_h = (BOARD_HEIGHT as u16) * self.cell_h;
        let w = board_w + 2;
        let h = board_h + 2;
        let frame = Frame {
            x: viewport.width.saturating_sub(w) / 2,
            y: match self.anchor_y {
                AnchorY::Center => viewport.height.saturating_sub(h) / 2,
                AnchorY::Top => 0,
            },
            w,
            h,
        };

        let board_style = CellStyle::new(colors.grid_dot, colors.board_bg);
        fb.fill_rect(frame.x + 1, frame.y + 1, board_w, board_h, ' ', board_style);
        draw_border(fb, frame, CellStyle::new(colors.border, PANEL_BG));

        for (y, row) in snap.grid.iter().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                let (ch, style) = cell_look(*cell, colors, options.shadow);
                self.fill_cell(fb, frame, x as u16, y as u16, ch, style);
            }
        }

        self.draw_side_panel(fb, snap, options, colors, viewport, frame);

        let overlay = CellStyle::new(Rgb::new(255, 255, 255), PANEL_BG).bold();
        let mid_y = frame.y.saturating_add(frame.h / 2);
        if snap.paused {
            fb.put_str_centered(frame.x, frame.w, mid_y, " PAUSED ", overlay);
        } else if snap.game_over {
            fb.put_str_centered(frame.x, frame.w, mid_y, " GAME OVER ", overlay);
            fb.put_str_centered(frame.x, frame.w, mid_y + 1, " r: restart ", overlay.dim());
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, options: &ViewOptions, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, options, viewport, &mut fb);
        fb
    }

    fn fill_cell(&self, fb: &mut FrameBuffer, frame: Frame, x: u16, y: u16, ch: char, style: CellStyle) {
        let px = frame.x + 1 + x * self.cell_w;
        let py = frame.y + 1 + y * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        options: &ViewOptions,
        colors: &Palette,
        viewport: Viewport,
        frame: Frame,
    ) {
        let panel_x = frame.x.saturating_add(frame.w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 12 {
            return;
        }

        let label = CellStyle::new(colors.label, PANEL_BG).bold();
        let value = CellStyle::new(colors.text, PANEL_BG);

        let mut y = frame.y;
        let stat = |fb: &mut FrameBuffer, y: &mut u16, name: &str, v: u32| {
            fb.put_str(panel_x, *y, name, label);
            fb.put_u32(panel_x, *y + 1, v, value);
            *y = y.saturating_add(3);
        };
        stat(fb, &mut y, "SCORE", snap.score);
        stat(fb, &mut y, "LEVEL", snap.level);
        stat(fb, &mut y, "LINES", snap.lines);
        if let Some(best) = options.best_score {
            stat(fb, &mut y, "BEST", best.max(snap.score));
        }

        fb.put_str(panel_x, y, "NEXT", label);
        y = y.saturating_add(1);
        if let Some(kind) = snap.next {
            self.draw_preview(fb, panel_x, y, kind, colors);
        }
        y = y.saturating_add(5);

        fb.put_str(panel_x, y, "AI", label);
        fb.put_str(panel_x + 4, y, if options.ai_enabled { "ON" } else { "OFF" }, value);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, "THEME", label);
        fb.put_str(panel_x + 6, y, options.theme.as_str(), value);
    }

    /// Spawn orientation of `kind`, trimmed to its filled rows.
    fn draw_preview(&self, fb: &mut FrameBuffer, x: u16, y: u16, kind: PieceKind, colors: &Palette) {
        let style = CellStyle::new(colors.piece(kind), PANEL_BG).bold();
        let shape = get_shape(kind, Rotation::North);
        let filled_rows = shape.rows().filter(|row| row.iter().any(|c| *c != 0));
        for (dy, row) in filled_rows.enumerate() {
            for (dx, c) in row.iter().enumerate() {
                if *c != 0 {
                    let px = x + (dx as u16) * self.cell_w;
                    fb.fill_rect(px, y + dy as u16, self.cell_w, 1, BLOCK, style);
                }
            }
        }
    }
}

fn cell_look(cell: Option<GridCell>, colors: &Palette, shadow: bool) -> (char, CellStyle) {
    match cell {
        None => (DOT, CellStyle::new(colors.grid_dot, colors.board_bg).dim()),
        Some(GridCell { ghost: true, .. }) => {
            (GHOST, CellStyle::new(colors.ghost, colors.board_bg).dim())
        }
        Some(GridCell {
            kind, active: true, ..
        }) => (BLOCK, CellStyle::new(colors.piece(kind), colors.board_bg).bold()),
        Some(GridCell { kind, .. }) => {
            let fg = colors.piece(kind);
            if shadow {
                (BLOCK, CellStyle::new(fg, fg.shade(45)).bold())
            } else {
                (BLOCK, CellStyle::new(fg, colors.board_bg))
            }
        }
    }
}

fn draw_border(fb: &mut FrameBuffer, frame: Frame, style: CellStyle) {
    let Frame { x, y, w, h } = frame;
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Board, GameState, Tetromino};

    const VIEWPORT: Viewport = Viewport {
        width: 60,
        height: 24,
    };

    fn render(state: &GameState, options: &ViewOptions) -> FrameBuffer {
        GameView::default()
            .with_anchor_y(AnchorY::Top)
            .render(&state.snapshot(true), options, VIEWPORT)
    }

    fn board_x() -> u16 {
        (VIEWPORT.width - 22) / 2
    }

    #[test]
    fn test_border_and_panel() {
        let state = GameState::with_seed(1, 3);
        let fb = render(&state, &ViewOptions::default());

        assert_eq!(fb.get(board_x(), 0).map(|c| c.ch), Some('┌'));
        assert_eq!(fb.get(board_x() + 21, 21).map(|c| c.ch), Some('┘'));
        let text: String = (0..VIEWPORT.height).map(|y| fb.row_text(y)).collect();
        assert!(text.contains("SCORE"));
        assert!(text.contains("NEXT"));
        assert!(text.contains("OFF"));
        assert!(text.contains("space"));
    }

    #[test]
    fn test_piece_and_ghost_cells() {
        let state = GameState::with_seed(1, 3).with_current(Tetromino::new(PieceKind::T));
        let fb = render(&state, &ViewOptions::default());

        // T at spawn fills board cell (4, 0); its ghost fills (4, 18).
        let col = board_x() + 1 + 4 * 2;
        assert_eq!(fb.get(col, 1).map(|c| c.ch), Some(BLOCK));
        assert_eq!(fb.get(col + 1, 1).map(|c| c.ch), Some(BLOCK));
        assert_eq!(fb.get(col, 19).map(|c| c.ch), Some(GHOST));
        assert_eq!(fb.get(col, 10).map(|c| c.ch), Some(DOT));
    }

    #[test]
    fn test_shadow_emphasizes_settled_cells() {
        let board = Board::from_rows(&["Z........."]);
        let state = GameState::with_seed(1, 3).with_board(board);
        let col = board_x() + 1;

        let shaded = render(&state, &ViewOptions::default());
        let flat = render(
            &state,
            &ViewOptions {
                shadow: false,
                ..ViewOptions::default()
            },
        );

        let a = shaded.get(col, 20).unwrap();
        let b = flat.get(col, 20).unwrap();
        assert_eq!(a.ch, BLOCK);
        assert!(a.style.bold);
        assert!(!b.style.bold);
        assert_ne!(a.style.bg, b.style.bg);
    }

    #[test]
    fn test_theme_changes_colors() {
        let state = GameState::with_seed(1, 3);
        let space = render(&state, &ViewOptions::default());
        let sea = render(
            &state,
            &ViewOptions {
                theme: Theme::Sea,
                ..ViewOptions::default()
            },
        );
        let cell = |fb: &FrameBuffer| fb.get(board_x() + 1, 10).unwrap().style.bg;
        assert_ne!(cell(&space), cell(&sea));
    }

    #[test]
    fn test_pause_overlay() {
        let state = GameState::with_seed(1, 3).pause();
        let fb = render(&state, &ViewOptions::default());
        assert!(fb.row_text(11).contains("PAUSED"));
    }
}
