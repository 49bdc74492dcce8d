use common::games::tictactoe::{BOARD_SIZE, GameView, Mark, Position, WinningLine};
use eframe::egui;
use tokio::sync::mpsc;

use crate::config::BoardConfig;
use crate::state::ClientCommand;

/// Painted 3x3 grid plus the status text and play-again visibility it shows.
/// Cells are only changed through `GameView`.
pub struct BoardView {
    cells: [[Mark; BOARD_SIZE]; BOARD_SIZE],
    status_text: String,
    play_again_visible: bool,
    last_hover: Option<Position>,
}

impl BoardView {
    const MIN_CELL_SIZE: f32 = 60.0;
    const MAX_CELL_SIZE: f32 = 160.0;
    const RESERVED_HEIGHT: f32 = 140.0;
    const LINE_WIDTH: f32 = 2.0;
    const MARK_WIDTH: f32 = 6.0;

    pub fn new() -> Self {
        Self {
            cells: [[Mark::Empty; BOARD_SIZE]; BOARD_SIZE],
            status_text: String::new(),
            play_again_visible: false,
            last_hover: None,
        }
    }

    pub fn status_text(&self) -> &str {
        &self.status_text
    }

    pub fn is_play_again_visible(&self) -> bool {
        self.play_again_visible
    }

    pub fn mark_at(&self, position: Position) -> Mark {
        self.cells[position.row][position.col]
    }

    fn calculate_cell_size(available_width: f32, available_height: f32) -> f32 {
        let side = available_width.min(available_height - Self::RESERVED_HEIGHT);
        (side / BOARD_SIZE as f32).clamp(Self::MIN_CELL_SIZE, Self::MAX_CELL_SIZE)
    }

    fn cell_at(rect: egui::Rect, cell_size: f32, pos: egui::Pos2) -> Option<Position> {
        if !rect.contains(pos) {
            return None;
        }
        let col = ((pos.x - rect.left()) / cell_size) as usize;
        let row = ((pos.y - rect.top()) / cell_size) as usize;
        let position = Position::new(row, col);
        position.is_on_board().then_some(position)
    }

    /// The cell to mark as most recently played, if the view shows a mark there.
    fn last_move_highlight(&self, last_move: Option<Position>, settings: &BoardConfig) -> Option<Position> {
        last_move
            .filter(|&position| settings.highlight_last_move && position.is_on_board())
            .filter(|&position| !self.mark_at(position).is_empty())
    }

    fn cell_rect(rect: egui::Rect, cell_size: f32, position: Position) -> egui::Rect {
        egui::Rect::from_min_size(
            egui::pos2(
                rect.left() + position.col as f32 * cell_size,
                rect.top() + position.row as f32 * cell_size,
            ),
            egui::vec2(cell_size, cell_size),
        )
    }

    pub fn render(
        &mut self,
        ui: &mut egui::Ui,
        winning_line: Option<&WinningLine>,
        last_move: Option<Position>,
        settings: &BoardConfig,
        command_tx: &mpsc::UnboundedSender<ClientCommand>,
    ) {
        let cell_size = Self::calculate_cell_size(ui.available_width(), ui.available_height());
        let board_side = cell_size * BOARD_SIZE as f32;

        let (rect, response) = ui.allocate_exact_size(
            egui::vec2(board_side, board_side),
            egui::Sense::click(),
        );

        let accepting_moves = !self.play_again_visible;
        self.last_hover = response
            .hover_pos()
            .and_then(|pos| Self::cell_at(rect, cell_size, pos))
            .filter(|&position| accepting_moves && self.mark_at(position).is_empty());

        if response.clicked()
            && let Some(position) = response
                .interact_pointer_pos()
                .and_then(|pos| Self::cell_at(rect, cell_size, pos))
        {
            let _ = command_tx.send(ClientCommand::PlaceMark {
                row: position.row,
                col: position.col,
            });
        }

        let painter = ui.painter();
        painter.rect_filled(rect, 0.0, egui::Color32::from_rgb(240, 240, 240));

        if settings.highlight_hover
            && let Some(hover) = self.last_hover
        {
            painter.rect_filled(
                Self::cell_rect(rect, cell_size, hover),
                0.0,
                egui::Color32::from_rgba_unmultiplied(100, 150, 255, 50),
            );
        }

        if let Some(position) = self.last_move_highlight(last_move, settings) {
            painter.rect_filled(
                Self::cell_rect(rect, cell_size, position),
                0.0,
                egui::Color32::from_rgb(255, 236, 170),
            );
        }

        for i in 0..=BOARD_SIZE {
            let offset = i as f32 * cell_size;
            let stroke = egui::Stroke::new(Self::LINE_WIDTH, egui::Color32::BLACK);
            painter.line_segment(
                [egui::pos2(rect.left() + offset, rect.top()), egui::pos2(rect.left() + offset, rect.bottom())],
                stroke,
            );
            painter.line_segment(
                [egui::pos2(rect.left(), rect.top() + offset), egui::pos2(rect.right(), rect.top() + offset)],
                stroke,
            );
        }

        for position in Position::all() {
            let cell_rect = Self::cell_rect(rect, cell_size, position);
            match self.mark_at(position) {
                Mark::X => Self::draw_x(painter, cell_rect),
                Mark::O => Self::draw_o(painter, cell_rect),
                Mark::Empty => {}
            }
        }

        if settings.highlight_winning_line
            && let Some(line) = winning_line
        {
            let start = Self::cell_rect(rect, cell_size, line.start()).center();
            let end = Self::cell_rect(rect, cell_size, line.end()).center();
            painter.line_segment(
                [start, end],
                egui::Stroke::new(Self::MARK_WIDTH, egui::Color32::from_rgba_unmultiplied(50, 200, 50, 200)),
            );
        }
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

impl GameView for BoardView {
    fn set_cell(&mut self, position: Position, mark: Mark) {
        if position.is_on_board() {
            self.cells[position.row][position.col] = mark;
        }
    }

    fn clear_cells(&mut self) {
        self.cells = [[Mark::Empty; BOARD_SIZE]; BOARD_SIZE];
        self.last_hover = None;
    }

    fn set_status_text(&mut self, text: &str) {
        self.status_text = text.to_string();
    }

    fn set_play_again_visible(&mut self, visible: bool) {
        self.play_again_visible = visible;
    }
}
