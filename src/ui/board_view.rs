//! Board rendering and pointer input for the Cram GUI
//!
//! A move is entered by pressing on one cell and releasing on a neighbour,
//! or by clicking the two cells one after the other.

use egui::{CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use crate::board::{Board, Cell, Domino, Player, Pos};

use super::theme::*;

/// Pointer event translated to board coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardInput {
    /// First cell of a domino
    Pick(Pos),
    /// Second cell of a domino
    Release(Pos),
}

/// What the view needs to draw one frame
pub struct BoardFrame<'a> {
    pub board: &'a Board,
    pub to_move: Option<Player>,
    pub last_move: Option<Domino>,
    pub pending_pick: Option<Pos>,
    /// False while the computer is moving or the game is over
    pub accepts_input: bool,
}

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Board drawing area
    board_rect: Rect,
    size: usize,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 60.0,
            board_rect: Rect::NOTHING,
            size: 0,
        }
    }
}

impl BoardView {
    /// Render the board and return pointer input, if any
    pub fn show(&mut self, ui: &mut egui::Ui, frame: &BoardFrame<'_>) -> Option<BoardInput> {
        let available = ui.available_size();
        let side = available.x.min(available.y) - 20.0;
        let (response, painter) =
            ui.allocate_painter(Vec2::splat(side.max(80.0)), Sense::click_and_drag());
        self.layout(response.rect, frame.board.size());

        painter.rect_filled(self.board_rect, CornerRadius::same(4), BOARD_BG);
        self.draw_cells(&painter, frame.board);
        self.draw_dominoes(&painter, frame.board);
        if let Some(domino) = frame.last_move {
            self.draw_last_move(&painter, domino);
        }
        if let Some(pos) = frame.pending_pick {
            self.draw_pick(&painter, pos);
        }

        if !frame.accepts_input {
            return None;
        }

        if let (Some(pointer), Some(player)) = (response.hover_pos(), frame.to_move) {
            if let Some(pos) = self.screen_to_board(pointer) {
                self.draw_hover(&painter, frame, pos, player);
            }
        }

        if response.drag_started() {
            let origin = ui.input(|i| i.pointer.press_origin());
            return origin
                .and_then(|p| self.screen_to_board(p))
                .map(BoardInput::Pick);
        }
        if response.drag_stopped() {
            return response
                .interact_pointer_pos()
                .and_then(|p| self.screen_to_board(p))
                .map(BoardInput::Release);
        }
        if response.clicked() {
            let pos = response.interact_pointer_pos().and_then(|p| self.screen_to_board(p))?;
            return Some(match frame.pending_pick {
                Some(_) => BoardInput::Release(pos),
                None => BoardInput::Pick(pos),
            });
        }
        None
    }

    /// Fit a `size`×`size` grid into `rect`.
    pub fn layout(&mut self, rect: Rect, size: usize) {
        self.board_rect = rect;
        self.size = size;
        let inner = rect.width().min(rect.height()) - 2.0 * BOARD_MARGIN;
        self.cell_size = inner / size.max(1) as f32;
    }

    fn draw_cells(&self, painter: &Painter, board: &Board) {
        let stroke = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);
        for row in 0..board.size() {
            for col in 0..board.size() {
                let rect = self.cell_rect(Pos::new(row as u8, col as u8));
                painter.rect_filled(rect, CornerRadius::ZERO, CELL_EMPTY);
                painter.rect_stroke(rect, CornerRadius::ZERO, stroke, egui::StrokeKind::Inside);
            }
        }
    }

    /// Each covered cell is an inset tile in its owner's colour. Tiles of
    /// one domino are not joined; the last-move outline marks its pair.
    fn draw_dominoes(&self, painter: &Painter, board: &Board) {
        let inset = self.cell_size * DOMINO_INSET_RATIO;
        for row in 0..board.size() {
            for col in 0..board.size() {
                let pos = Pos::new(row as u8, col as u8);
                let Some(player) = board.get(pos).and_then(Cell::owner) else {
                    continue;
                };
                let (fill, highlight) = player_colors(player);
                let rect = self.cell_rect(pos).shrink(inset);
                painter.rect_filled(rect, CornerRadius::same(6), fill);
                painter.rect_stroke(
                    rect.shrink(2.0),
                    CornerRadius::same(5),
                    Stroke::new(1.5, highlight),
                    egui::StrokeKind::Inside,
                );
            }
        }
    }

    fn draw_last_move(&self, painter: &Painter, domino: Domino) {
        let [a, b] = domino.cells();
        let rect = self.cell_rect(a).union(self.cell_rect(b));
        painter.rect_stroke(
            rect.shrink(2.0),
            CornerRadius::same(6),
            Stroke::new(LAST_MOVE_MARKER_WIDTH, LAST_MOVE_MARKER),
            egui::StrokeKind::Inside,
        );
    }

    fn draw_pick(&self, painter: &Painter, pos: Pos) {
        let center = self.cell_rect(pos).center();
        painter.circle_filled(center, self.cell_size * 0.12, PICK_MARKER);
    }

    /// Preview the domino that releasing here would place
    fn draw_hover(&self, painter: &Painter, frame: &BoardFrame<'_>, pos: Pos, player: Player) {
        let board = frame.board;
        match frame.pending_pick {
            Some(first) if first != pos => {
                let valid = Domino::new(first, pos).is_ok_and(|d| {
                    d.cells().iter().all(|&c| board.is_empty(c))
                });
                let color = if valid {
                    player_colors(player).0.gamma_multiply(0.45)
                } else {
                    hover_invalid()
                };
                let rect = self.cell_rect(first).union(self.cell_rect(pos));
                painter.rect_filled(rect.shrink(4.0), CornerRadius::same(6), color);
            }
            _ => {
                let color = if board.is_empty(pos) {
                    hover_valid()
                } else {
                    hover_invalid()
                };
                painter.rect_filled(self.cell_rect(pos).shrink(4.0), CornerRadius::same(4), color);
            }
        }
    }

    fn cell_rect(&self, pos: Pos) -> Rect {
        let min = self.board_rect.min
            + Vec2::new(
                BOARD_MARGIN + f32::from(pos.col) * self.cell_size,
                BOARD_MARGIN + f32::from(pos.row) * self.cell_size,
            );
        Rect::from_min_size(min, Vec2::splat(self.cell_size))
    }

    /// Convert screen coordinates to board position
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Pos> {
        let relative = screen_pos - self.board_rect.min;
        let x = (relative.x - BOARD_MARGIN) / self.cell_size;
        let y = (relative.y - BOARD_MARGIN) / self.cell_size;
        if x < 0.0 || y < 0.0 {
            return None;
        }
        let (col, row) = (x.floor() as usize, y.floor() as usize);
        (col < self.size && row < self.size).then(|| Pos::new(row as u8, col as u8))
    }

    /// Centre of a cell in screen coordinates
    pub fn board_to_screen(&self, pos: Pos) -> Pos2 {
        self.cell_rect(pos).center()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view() -> BoardView {
        let mut view = BoardView::default();
        // 4 cells of 50px inside the margin
        let side = 4.0 * 50.0 + 2.0 * BOARD_MARGIN;
        view.layout(Rect::from_min_size(Pos2::new(10.0, 10.0), Vec2::splat(side)), 4);
        view
    }

    #[test]
    fn test_screen_to_board_roundtrip() {
        let view = view();
        for idx in 0..16 {
            let pos = Pos::from_index(idx, 4);
            assert_eq!(view.screen_to_board(view.board_to_screen(pos)), Some(pos));
        }
    }

    #[test]
    fn test_screen_outside_board() {
        let view = view();
        assert_eq!(view.screen_to_board(Pos2::new(0.0, 0.0)), None);
        assert_eq!(view.screen_to_board(Pos2::new(15.0, 100.0)), None);
        let far = 10.0 + BOARD_MARGIN + 4.0 * 50.0 + 1.0;
        assert_eq!(view.screen_to_board(Pos2::new(far, 100.0)), None);
    }
}
