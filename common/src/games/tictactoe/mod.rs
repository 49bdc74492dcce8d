mod board;
mod game_controller;
mod local_game;
mod messages;
mod reset_coordinator;
mod types;
mod view;
mod win_detector;

#[cfg(test)]
mod recording_view;

pub use board::Board;
pub use game_controller::GameController;
pub use local_game::{GameEvent, LocalGame};
pub use messages::StatusMessages;
pub use reset_coordinator::ResetCoordinator;
pub use types::{BOARD_SIZE, GameStatus, Mark, Player, Position, WinningLine};
pub use view::GameView;
pub use win_detector::check_win_with_line;
