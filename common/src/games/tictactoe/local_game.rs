use crate::log;

use super::game_controller::GameController;
use super::messages::StatusMessages;
use super::reset_coordinator::ResetCoordinator;
use super::types::{GameStatus, Position};
use super::view::GameView;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    CellTapped { row: usize, col: usize },
    PlayAgainTapped,
}

/// Hot-seat game on a single machine. Every UI event is handled to
/// completion before the next one is looked at.
pub struct LocalGame {
    controller: GameController,
    reset_coordinator: ResetCoordinator,
}

impl LocalGame {
    pub fn new(messages: StatusMessages) -> Self {
        Self {
            controller: GameController::new(),
            reset_coordinator: ResetCoordinator::new(messages),
        }
    }

    pub fn controller(&self) -> &GameController {
        &self.controller
    }

    pub fn messages(&self) -> &StatusMessages {
        self.reset_coordinator.messages()
    }

    pub fn status_text(&self) -> String {
        self.controller.status_message(self.messages())
    }

    /// Paints the current state onto a freshly created view.
    pub fn initialize_view<V: GameView + ?Sized>(&self, view: &mut V) {
        view.clear_cells();
        for position in Position::all() {
            if let Some(mark) = self.controller.board().get(position).filter(|mark| !mark.is_empty()) {
                view.set_cell(position, mark);
            }
        }
        view.set_play_again_visible(self.controller.is_finished());
        view.set_status_text(&self.status_text());
    }

    /// Returns whether the event changed the game.
    pub fn handle_event<V: GameView + ?Sized>(&mut self, event: GameEvent, view: &mut V) -> bool {
        match event {
            GameEvent::CellTapped { row, col } => self.handle_cell_tapped(row, col, view),
            GameEvent::PlayAgainTapped => self.handle_play_again(view),
        }
    }

    fn handle_cell_tapped<V: GameView + ?Sized>(&mut self, row: usize, col: usize, view: &mut V) -> bool {
        let player = self.controller.active_player();
        if !self.controller.apply_move(row, col) {
            log!("Ignoring tap on ({}, {}): {}", row, col, self.rejection_reason(row, col));
            return false;
        }

        log!("Player {} marked ({}, {})", player, row, col);
        view.set_cell(Position::new(row, col), player.mark());
        view.set_status_text(&self.status_text());
        self.reset_coordinator.on_move_applied(&self.controller, view);

        match self.controller.status() {
            GameStatus::Won(winner) => log!("Player {} wins after {} moves", winner, self.controller.move_count()),
            GameStatus::Drawn => log!("Game ended in a draw"),
            GameStatus::InProgress => {}
        }
        true
    }

    fn handle_play_again<V: GameView + ?Sized>(&mut self, view: &mut V) -> bool {
        if !self.controller.is_finished() {
            log!("Ignoring play again while the game is in progress");
            return false;
        }

        self.reset_coordinator.perform_reset(&mut self.controller, view);
        log!("Board reset, new game started");
        true
    }

    fn rejection_reason(&self, row: usize, col: usize) -> &'static str {
        if self.controller.is_finished() {
            "game is already over"
        } else if self.controller.cell(row, col).is_none() {
            "position out of bounds"
        } else {
            "cell is already marked"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::recording_view::{RecordingView, ViewCall};
    use crate::games::tictactoe::{Mark, Player};

    fn tap(game: &mut LocalGame, view: &mut RecordingView, row: usize, col: usize) -> bool {
        game.handle_event(GameEvent::CellTapped { row, col }, view)
    }

    fn new_game() -> (LocalGame, RecordingView) {
        let game = LocalGame::new(StatusMessages::default());
        let mut view = RecordingView::default();
        game.initialize_view(&mut view);
        view.take_calls();
        (game, view)
    }

    #[test]
    fn test_initialize_view_shows_fresh_game() {
        let game = LocalGame::new(StatusMessages::default());
        let mut view = RecordingView::default();
        game.initialize_view(&mut view);

        assert_eq!(
            view.take_calls(),
            vec![
                ViewCall::ClearCells,
                ViewCall::SetPlayAgainVisible(false),
                ViewCall::SetStatusText("Player X's turn".to_string()),
            ]
        );
    }

    #[test]
    fn test_cell_tap_updates_cell_and_status() {
        let (mut game, mut view) = new_game();

        assert!(tap(&mut game, &mut view, 1, 1));
        assert_eq!(
            view.take_calls(),
            vec![
                ViewCall::SetCell(Position::new(1, 1), Mark::X),
                ViewCall::SetStatusText("Player O's turn".to_string()),
            ]
        );
    }

    #[test]
    fn test_ignored_tap_leaves_view_untouched() {
        let (mut game, mut view) = new_game();
        tap(&mut game, &mut view, 1, 1);
        view.take_calls();

        assert!(!tap(&mut game, &mut view, 1, 1));
        assert!(!tap(&mut game, &mut view, 5, 5));
        assert!(view.calls.is_empty());
        assert_eq!(game.controller().active_player(), Player::O);
    }

    #[test]
    fn test_winning_tap_shows_play_again() {
        let (mut game, mut view) = new_game();
        for (row, col) in [(0, 0), (1, 1), (0, 1), (2, 2)] {
            tap(&mut game, &mut view, row, col);
        }
        view.take_calls();

        assert!(tap(&mut game, &mut view, 0, 2));
        assert_eq!(
            view.take_calls(),
            vec![
                ViewCall::SetCell(Position::new(0, 2), Mark::X),
                ViewCall::SetStatusText("Player X wins!".to_string()),
                ViewCall::SetPlayAgainVisible(true),
            ]
        );

        assert!(!tap(&mut game, &mut view, 2, 0));
        assert!(view.calls.is_empty());
    }

    #[test]
    fn test_draw_shows_play_again() {
        let (mut game, mut view) = new_game();
        for (row, col) in [(0, 0), (0, 1), (0, 2), (1, 1), (1, 0), (2, 0), (2, 1), (1, 2), (2, 2)] {
            assert!(tap(&mut game, &mut view, row, col));
        }
        assert_eq!(view.status_text, "It's a draw!");
        assert!(view.play_again_visible);
    }

    #[test]
    fn test_play_again_ignored_while_in_progress() {
        let (mut game, mut view) = new_game();
        tap(&mut game, &mut view, 0, 0);
        view.take_calls();

        assert!(!game.handle_event(GameEvent::PlayAgainTapped, &mut view));
        assert!(view.calls.is_empty());
        assert_eq!(game.controller().move_count(), 1);
    }

    #[test]
    fn test_play_again_resets_board_and_view() {
        let (mut game, mut view) = new_game();
        for (row, col) in [(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)] {
            tap(&mut game, &mut view, row, col);
        }

        assert!(game.handle_event(GameEvent::PlayAgainTapped, &mut view));
        assert!(!view.play_again_visible);
        assert_eq!(view.status_text, "Player X's turn");
        assert!(view.cells.iter().flatten().all(|mark| mark.is_empty()));
        assert_eq!(game.controller().status(), GameStatus::InProgress);

        assert!(tap(&mut game, &mut view, 2, 2));
        assert_eq!(view.cells[2][2], Mark::X);
    }
}
