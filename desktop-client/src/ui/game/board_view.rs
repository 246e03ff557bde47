use common::games::tictactoe::{Board, GRID_SIZE, Mark, Position};

use super::BoardViewState;

#[derive(Default)]
pub struct BoardView;

impl BoardView {
    const MIN_CELL_SIZE: f32 = 40.0;
    const MAX_CELL_SIZE: f32 = 160.0;
    const CONTROLS_HEIGHT: f32 = 120.0;
    const LINE_WIDTH: f32 = 2.0;
    const MARK_WIDTH: f32 = 4.0;

    pub fn new() -> Self {
        Self
    }

    fn calculate_cell_size(available_width: f32, available_height: f32) -> f32 {
        let available_board = available_width.min(available_height - Self::CONTROLS_HEIGHT);
        let cell_size = available_board / GRID_SIZE as f32;
        cell_size.clamp(Self::MIN_CELL_SIZE, Self::MAX_CELL_SIZE)
    }

    fn cell_rect(board_rect: egui::Rect, position: Position, cell_size: f32) -> egui::Rect {
        egui::Rect::from_min_size(
            egui::pos2(
                board_rect.left() + position.col as f32 * cell_size,
                board_rect.top() + position.row as f32 * cell_size,
            ),
            egui::vec2(cell_size, cell_size),
        )
    }

    fn position_at(board_rect: egui::Rect, cell_size: f32, point: egui::Pos2) -> Option<Position> {
        if !board_rect.contains(point) {
            return None;
        }
        let col = ((point.x - board_rect.left()) / cell_size) as usize;
        let row = ((point.y - board_rect.top()) / cell_size) as usize;
        let position = Position::new(row.min(GRID_SIZE - 1), col.min(GRID_SIZE - 1));
        Some(position)
    }

    /// Empty cell under the pointer while the game is still running.
    fn hover_target(view: &BoardViewState, pointer: Option<Position>) -> Option<Position> {
        if view.is_locked() {
            return None;
        }
        pointer.filter(|&position| view.cell(position) == Mark::Empty)
    }

    /// Paints the grid and returns the cell clicked this frame, if any.
    /// Occupied cells are reported too; the controller ignores them.
    pub fn render(&self, ui: &mut egui::Ui, view: &BoardViewState) -> Option<Position> {
        let cell_size = Self::calculate_cell_size(ui.available_width(), ui.available_height());
        let board_size = cell_size * GRID_SIZE as f32;

        let (rect, response) =
            ui.allocate_exact_size(egui::vec2(board_size, board_size), egui::Sense::click());

        let painter = ui.painter();
        painter.rect_filled(rect, 0.0, egui::Color32::from_rgb(240, 240, 240));

        for i in 0..=GRID_SIZE {
            let offset = i as f32 * cell_size;
            let stroke = egui::Stroke::new(Self::LINE_WIDTH, egui::Color32::BLACK);
            let x = rect.left() + offset;
            let y = rect.top() + offset;
            painter.line_segment([egui::pos2(x, rect.top()), egui::pos2(x, rect.bottom())], stroke);
            painter.line_segment([egui::pos2(rect.left(), y), egui::pos2(rect.right(), y)], stroke);
        }

        let pointer = response
            .hover_pos()
            .and_then(|point| Self::position_at(rect, cell_size, point));

        if let Some(hovered) = Self::hover_target(view, pointer) {
            painter.rect_filled(
                Self::cell_rect(rect, hovered, cell_size),
                0.0,
                egui::Color32::from_rgba_unmultiplied(100, 150, 255, 50),
            );
        }

        for position in Board::positions() {
            let cell_rect = Self::cell_rect(rect, position, cell_size);
            match view.cell(position) {
                Mark::X => Self::draw_x(painter, cell_rect),
                Mark::O => Self::draw_o(painter, cell_rect),
                Mark::Empty => {}
            }
        }

        if let Some(line) = view.winning_line() {
            let start = Self::cell_rect(rect, line.start(), cell_size).center();
            let end = Self::cell_rect(rect, line.end(), cell_size).center();
            painter.line_segment(
                [start, end],
                egui::Stroke::new(6.0, egui::Color32::from_rgba_unmultiplied(50, 200, 50, 200)),
            );
        }

        if response.clicked() && !view.is_locked() {
            return pointer;
        }
        None
    }

    fn draw_x(painter: &egui::Painter, rect: egui::Rect) {
        let padding = rect.width() * 0.2;
        let stroke = egui::Stroke::new(Self::MARK_WIDTH, egui::Color32::from_rgb(220, 50, 50));

        painter.line_segment(
            [
                egui::pos2(rect.left() + padding, rect.top() + padding),
                egui::pos2(rect.right() - padding, rect.bottom() - padding),
            ],
            stroke,
        );
        painter.line_segment(
            [
                egui::pos2(rect.right() - padding, rect.top() + padding),
                egui::pos2(rect.left() + padding, rect.bottom() - padding),
            ],
            stroke,
        );
    }

    fn draw_o(painter: &egui::Painter, rect: egui::Rect) {
        let padding = rect.width() * 0.2;
        let radius = (rect.width() / 2.0) - padding;
        let stroke = egui::Stroke::new(Self::MARK_WIDTH, egui::Color32::from_rgb(50, 50, 220));
        painter.circle_stroke(rect.center(), radius, stroke);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::games::SessionRng;
    use common::games::tictactoe::{GameMode, TurnController};

    fn board_rect() -> egui::Rect {
        egui::Rect::from_min_size(egui::pos2(10.0, 20.0), egui::vec2(300.0, 300.0))
    }

    #[test]
    fn test_position_at_maps_points_to_cells() {
        let rect = board_rect();
        assert_eq!(
            BoardView::position_at(rect, 100.0, egui::pos2(15.0, 25.0)),
            Some(Position::new(0, 0))
        );
        assert_eq!(
            BoardView::position_at(rect, 100.0, egui::pos2(250.0, 130.0)),
            Some(Position::new(1, 2))
        );
        assert_eq!(
            BoardView::position_at(rect, 100.0, egui::pos2(310.0, 320.0)),
            Some(Position::new(2, 2))
        );
    }

    #[test]
    fn test_position_at_outside_board() {
        let rect = board_rect();
        assert_eq!(BoardView::position_at(rect, 100.0, egui::pos2(5.0, 50.0)), None);
        assert_eq!(BoardView::position_at(rect, 100.0, egui::pos2(50.0, 400.0)), None);
    }

    #[test]
    fn test_cell_rect_round_trips_through_position_at() {
        let rect = board_rect();
        for position in Board::positions() {
            let center = BoardView::cell_rect(rect, position, 100.0).center();
            assert_eq!(BoardView::position_at(rect, 100.0, center), Some(position));
        }
    }

    #[test]
    fn test_hover_target_only_on_empty_cells() {
        let mut controller = TurnController::new(GameMode::HumanVsHuman, SessionRng::new(3));
        let mut view = BoardViewState::new(GameMode::HumanVsHuman);
        controller.on_cell_clicked(1, 1, &mut view);

        assert_eq!(BoardView::hover_target(&view, None), None);
        assert_eq!(BoardView::hover_target(&view, Some(Position::new(1, 1))), None);
        assert_eq!(
            BoardView::hover_target(&view, Some(Position::new(0, 2))),
            Some(Position::new(0, 2))
        );
    }

    #[test]
    fn test_hover_target_none_after_game_over() {
        let mut controller = TurnController::new(GameMode::HumanVsHuman, SessionRng::new(3));
        let mut view = BoardViewState::new(GameMode::HumanVsHuman);
        for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
            controller.on_cell_clicked(row, col, &mut view);
        }
        assert_eq!(BoardView::hover_target(&view, Some(Position::new(2, 2))), None);
    }

    #[test]
    fn test_cell_size_is_clamped() {
        assert_eq!(BoardView::calculate_cell_size(30.0, 30.0), BoardView::MIN_CELL_SIZE);
        assert_eq!(BoardView::calculate_cell_size(5000.0, 5000.0), BoardView::MAX_CELL_SIZE);
        assert_eq!(BoardView::calculate_cell_size(300.0, 420.0), 100.0);
    }
}
