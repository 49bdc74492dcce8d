use super::types::{Mark, Position};

/// The visual surface of a game: nine cells, a status line and the
/// play-again control. Holds no game rules; it only mirrors what the
/// controller decided.
pub trait GameView {
    fn set_cell(&mut self, position: Position, mark: Mark);
    fn clear_cells(&mut self);
    fn set_status_text(&mut self, text: &str);
    fn set_play_again_visible(&mut self, visible: bool);
}
