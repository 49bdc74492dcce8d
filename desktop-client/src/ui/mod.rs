mod app;
mod board_view;

pub use app::TicTacToeApp;
