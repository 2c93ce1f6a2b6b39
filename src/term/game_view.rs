//! GameView: maps a core `GameState` snapshot into a terminal framebuffer.
//!
//! Pure (no I/O), so it can be unit-tested against snapshots.

use crate::core::{shape_offsets, GameState, Piece};
use crate::settings::Settings;
use crate::term::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{PieceKind, Rotation, Status};

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

/// Per-shape tile colors plus chrome colors; selected by skin name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub tiles: [Rgb; 7],
    pub well_bg: Rgb,
    pub border: Rgb,
    pub text: Rgb,
}

const DEFAULT_PALETTE: Palette = Palette {
    tiles: [
        Rgb::new(0, 200, 220),  // I
        Rgb::new(230, 200, 0),  // O
        Rgb::new(170, 60, 220), // T
        Rgb::new(60, 200, 80),  // S
        Rgb::new(220, 60, 60),  // Z
        Rgb::new(60, 90, 230),  // J
        Rgb::new(235, 140, 30), // L
    ],
    well_bg: Rgb::new(25, 25, 35),
    border: Rgb::new(190, 190, 190),
    text: Rgb::new(220, 220, 220),
};

const MONO_PALETTE: Palette = Palette {
    tiles: [Rgb::new(200, 200, 200); 7],
    well_bg: Rgb::new(20, 20, 20),
    border: Rgb::new(160, 160, 160),
    text: Rgb::new(220, 220, 220),
};

/// Resolve a cosmetic skin name. Unknown names fall back to the default;
/// the skin never affects core logic.
pub fn palette_for_skin(name: &str) -> Palette {
    match name {
        "mono" => MONO_PALETTE,
        _ => DEFAULT_PALETTE,
    }
}

fn tile_color(palette: &Palette, kind: PieceKind) -> Rgb {
    let idx = PieceKind::ALL.iter().position(|&k| k == kind).unwrap_or(0);
    palette.tiles[idx]
}

/// Renders the board, falling piece, ghost, side panels, and status
/// overlays into a framebuffer.
pub struct GameView {
    /// Board cell width in terminal columns (2 compensates glyph aspect).
    cell_w: u16,
    cell_h: u16,
    show_ghost: bool,
    palette: Palette,
}

impl GameView {
    pub fn new(settings: &Settings) -> Self {
        Self {
            cell_w: 2,
            cell_h: 1,
            show_ghost: settings.show_ghost_piece,
            palette: palette_for_skin(&settings.skin),
        }
    }

    pub fn render(&self, state: &GameState, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(state, viewport, &mut fb);
        fb
    }

    /// Render into an existing framebuffer (reusable across frames).
    pub fn render_into(&self, state: &GameState, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear();

        let board_w = state.board().width() as u16 * self.cell_w;
        let board_h = state.board().height() as u16 * self.cell_h;
        let frame_w = board_w + 2;
        let frame_h = board_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        let well = CellStyle::new(Rgb::new(70, 70, 85), self.palette.well_bg);
        let border = CellStyle::new(self.palette.border, Rgb::BLACK);

        fb.fill_rect(start_x + 1, start_y + 1, board_w, board_h, ' ', well);
        self.draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        // Locked cells.
        for y in 0..i16::from(state.board().height()) {
            for x in 0..i16::from(state.board().width()) {
                if let Some(Some(kind)) = state.board().get(x, y) {
                    self.draw_board_cell(fb, start_x, start_y, x, y, kind, false);
                }
            }
        }

        // Ghost under the falling piece.
        if self.show_ghost && state.status() == Status::Playing {
            if let Some(ghost) = state.ghost() {
                self.draw_piece(fb, start_x, start_y, &ghost, true);
            }
        }

        // Falling piece on top.
        if let Some(piece) = state.current() {
            if state.status() != Status::Menu {
                self.draw_piece(fb, start_x, start_y, &piece, false);
            }
        }

        self.draw_side_panels(fb, state, start_x, start_y, frame_w);
        self.draw_overlay(fb, state, viewport);
    }

    fn draw_piece(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        piece: &Piece,
        ghost: bool,
    ) {
        for (x, y) in piece.tiles() {
            if y >= 0 {
                self.draw_board_cell(fb, start_x, start_y, x, y, piece.kind, ghost);
            }
        }
    }

    fn draw_board_cell(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        x: i16,
        y: i16,
        kind: PieceKind,
        ghost: bool,
    ) {
        let color = tile_color(&self.palette, kind);
        let (ch, style) = if ghost {
            ('░', CellStyle::new(color, self.palette.well_bg))
        } else {
            (' ', CellStyle::new(Rgb::BLACK, color))
        };

        let px = start_x + 1 + x as u16 * self.cell_w;
        let py = start_y + 1 + y as u16 * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_border(
        &self,
        fb: &mut FrameBuffer,
        x: u16,
        y: u16,
        w: u16,
        h: u16,
        style: CellStyle,
    ) {
        for dx in 0..w {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 0..h {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);
    }

    fn draw_side_panels(
        &self,
        fb: &mut FrameBuffer,
        state: &GameState,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let text = CellStyle::new(self.palette.text, Rgb::BLACK);
        let label = text.bold();

        // Left panel: score counters.
        let left_w: u16 = 14;
        let lx = start_x.saturating_sub(left_w);
        fb.put_str(lx, start_y + 1, "SCORE", label);
        fb.put_str(lx, start_y + 2, &format!("{:>8}", state.score()), text);
        fb.put_str(lx, start_y + 4, "LEVEL", label);
        fb.put_str(lx, start_y + 5, &format!("{:>8}", state.level()), text);
        fb.put_str(lx, start_y + 7, "LINES", label);
        fb.put_str(lx, start_y + 8, &format!("{:>8}", state.lines_cleared()), text);

        fb.put_str(lx, start_y + 10, "HOLD", label);
        match state.held() {
            Some(kind) => {
                fb.put_str(lx + 5, start_y + 10, kind.as_str(), text);
                self.draw_mini_piece(fb, lx, start_y + 11, kind);
            }
            None => fb.put_str(lx, start_y + 11, "-", text),
        }

        // Right panel: next queue.
        let rx = start_x + frame_w + 2;
        fb.put_str(rx, start_y + 1, "NEXT", label);
        for (i, &kind) in state.next_queue().iter().enumerate() {
            self.draw_mini_piece(fb, rx, start_y + 2 + i as u16 * 3, kind);
        }
    }

    /// Draw a piece kind as its spawn-orientation silhouette in a 4x2 box.
    fn draw_mini_piece(&self, fb: &mut FrameBuffer, x: u16, y: u16, kind: PieceKind) {
        let style = CellStyle::new(tile_color(&self.palette, kind), Rgb::BLACK);
        for (dx, dy) in shape_offsets(kind, Rotation::R0) {
            fb.put_char(x + dx as u16 * 2, y + dy as u16, '█', style);
            fb.put_char(x + dx as u16 * 2 + 1, y + dy as u16, '█', style);
        }
    }

    fn draw_overlay(&self, fb: &mut FrameBuffer, state: &GameState, viewport: Viewport) {
        let message: Option<(&str, &str)> = match state.status() {
            Status::Menu => Some(("BLOCKFALL", "press Enter to start")),
            Status::Paused => Some(("PAUSED", "press p to resume")),
            Status::GameOver => Some(("GAME OVER", "press r to restart, q to quit")),
            Status::Playing => None,
        };
        let Some((title, hint)) = message else {
            return;
        };

        let hint_style = CellStyle::new(Rgb::new(255, 255, 255), Rgb::BLACK);
        let cy = viewport.height / 2;
        let title_x = viewport.width.saturating_sub(title.len() as u16) / 2;
        let hint_x = viewport.width.saturating_sub(hint.len() as u16) / 2;
        fb.put_str(title_x, cy.saturating_sub(1), title, hint_style.bold());
        fb.put_str(hint_x, cy + 1, hint, hint_style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::GameAction;

    fn view() -> GameView {
        GameView::new(&Settings::default())
    }

    fn count_bg(fb: &FrameBuffer, bg: Rgb) -> usize {
        (0..fb.height())
            .flat_map(|y| (0..fb.width()).map(move |x| (x, y)))
            .filter(|&(x, y)| fb.get(x, y).unwrap().style.bg == bg)
            .count()
    }

    #[test]
    fn test_render_fits_viewport() {
        let state = GameState::new(10, 20, 1);
        let fb = view().render(&state, Viewport::new(80, 24));
        assert_eq!(fb.width(), 80);
        assert_eq!(fb.height(), 24);
    }

    #[test]
    fn test_playing_piece_is_drawn() {
        let state = GameState::new(10, 20, 1).apply(GameAction::Start);
        let kind = state.current().unwrap().kind;
        let fb = view().render(&state, Viewport::new(80, 30));

        let color = tile_color(&DEFAULT_PALETTE, kind);
        // Four tiles, two columns each, plus the same-colored ghost cells in
        // foreground; at least the piece's 8 background cells are present.
        assert!(count_bg(&fb, color) >= 8);
    }

    #[test]
    fn test_menu_overlay_hides_piece() {
        let state = GameState::new(10, 20, 1);
        let fb = view().render(&state, Viewport::new(80, 30));
        let kind = state.current().unwrap().kind;
        assert_eq!(count_bg(&fb, tile_color(&DEFAULT_PALETTE, kind)), 0);
    }

    #[test]
    fn test_skin_selection_falls_back_to_default() {
        assert_eq!(palette_for_skin("mono"), MONO_PALETTE);
        assert_eq!(palette_for_skin("default"), DEFAULT_PALETTE);
        assert_eq!(palette_for_skin("no-such-skin"), DEFAULT_PALETTE);
    }

    #[test]
    fn test_ghost_disabled_by_settings() {
        let mut settings = Settings::default();
        settings.show_ghost_piece = false;
        let state = GameState::new(10, 20, 1).apply(GameAction::Start);
        let fb = GameView::new(&settings).render(&state, Viewport::new(80, 30));

        // No ghost glyphs anywhere.
        let ghosts = (0..fb.height())
            .flat_map(|y| (0..fb.width()).map(move |x| (x, y)))
            .filter(|&(x, y)| fb.get(x, y).unwrap().ch == '░')
            .count();
        assert_eq!(ghosts, 0);
    }
}
