use super::types::{BOARD_SIZE, Mark, Position};
use super::view::GameView;

#[derive(Debug, Clone, PartialEq)]
pub enum ViewCall {
    SetCell(Position, Mark),
    ClearCells,
    SetStatusText(String),
    SetPlayAgainVisible(bool),
}

/// Test double that records every call and keeps the resulting picture.
#[derive(Debug, Default)]
pub struct RecordingView {
    pub calls: Vec<ViewCall>,
    pub cells: [[Mark; BOARD_SIZE]; BOARD_SIZE],
    pub status_text: String,
    pub play_again_visible: bool,
}

impl RecordingView {
    pub fn take_calls(&mut self) -> Vec<ViewCall> {
        std::mem::take(&mut self.calls)
    }
}

impl GameView for RecordingView {
    fn set_cell(&mut self, position: Position, mark: Mark) {
        self.cells[position.row][position.col] = mark;
        self.calls.push(ViewCall::SetCell(position, mark));
    }

    fn clear_cells(&mut self) {
        self.cells = [[Mark::Empty; BOARD_SIZE]; BOARD_SIZE];
        self.calls.push(ViewCall::ClearCells);
    }

    fn set_status_text(&mut self, text: &str) {
        self.status_text = text.to_string();
        self.calls.push(ViewCall::SetStatusText(text.to_string()));
    }

    fn set_play_again_visible(&mut self, visible: bool) {
        self.play_again_visible = visible;
        self.calls.push(ViewCall::SetPlayAgainVisible(visible));
    }
}
