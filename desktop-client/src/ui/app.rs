use common::games::tictactoe::LocalGame;
use eframe::egui;
use tokio::sync::mpsc;

use crate::config::{BoardConfig, Config};
use crate::state::ClientCommand;
use super::board_view::BoardView;

pub struct TicTacToeApp {
    game: LocalGame,
    board_view: BoardView,
    board_config: BoardConfig,
    command_tx: mpsc::UnboundedSender<ClientCommand>,
    command_rx: mpsc::UnboundedReceiver<ClientCommand>,
}

impl TicTacToeApp {
    pub fn new(config: Config) -> Self {
        let (command_tx, command_rx) = mpsc::unbounded_channel();
        let game = LocalGame::new(config.messages);
        let mut board_view = BoardView::new();
        game.initialize_view(&mut board_view);

        Self {
            game,
            board_view,
            board_config: config.board,
            command_tx,
            command_rx,
        }
    }

    /// Applies every command queued by the previous frame's widgets, in order.
    fn process_commands(&mut self) {
        while let Ok(command) = self.command_rx.try_recv() {
            self.game.handle_event(command.into(), &mut self.board_view);
        }
    }
}

impl eframe::App for TicTacToeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_commands();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(10.0);
                ui.heading("Tic-Tac-Toe");
                ui.add_space(10.0);
                ui.label(egui::RichText::new(self.board_view.status_text()).size(20.0).strong());
                ui.add_space(10.0);

                self.board_view.render(
                    ui,
                    self.game.controller().winning_line(),
                    self.game.controller().last_move(),
                    &self.board_config,
                    &self.command_tx,
                );

                ui.add_space(10.0);
                if self.board_view.is_play_again_visible()
                    && ui.button(self.game.messages().play_again.as_str()).clicked()
                {
                    let _ = self.command_tx.send(ClientCommand::PlayAgain);
                }
            });
        });

        if !self.command_rx.is_empty() {
            ctx.request_repaint();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::games::tictactoe::{GameStatus, Mark, Player, Position};

    fn send_all(app: &mut TicTacToeApp, commands: &[ClientCommand]) {
        for &command in commands {
            app.command_tx.send(command).unwrap();
        }
        app.process_commands();
    }

    fn place(row: usize, col: usize) -> ClientCommand {
        ClientCommand::PlaceMark { row, col }
    }

    #[test]
    fn test_new_app_shows_initial_status() {
        let app = TicTacToeApp::new(Config::default());
        assert_eq!(app.board_view.status_text(), "Player X's turn");
        assert!(!app.board_view.is_play_again_visible());
    }

    #[test]
    fn test_queued_commands_are_applied_in_order() {
        let mut app = TicTacToeApp::new(Config::default());
        send_all(&mut app, &[place(0, 0), place(0, 0), place(1, 1)]);

        assert_eq!(app.board_view.mark_at(Position::new(0, 0)), Mark::X);
        assert_eq!(app.board_view.mark_at(Position::new(1, 1)), Mark::O);
        assert_eq!(app.board_view.status_text(), "Player X's turn");
        assert_eq!(app.game.controller().last_move(), Some(Position::new(1, 1)));
        assert!(app.command_rx.is_empty());
    }

    #[test]
    fn test_win_then_play_again() {
        let mut app = TicTacToeApp::new(Config::default());
        send_all(&mut app, &[place(0, 0), place(1, 1), place(0, 1), place(2, 2), place(0, 2)]);

        assert_eq!(app.game.controller().status(), GameStatus::Won(Player::X));
        assert_eq!(app.board_view.status_text(), "Player X wins!");
        assert!(app.board_view.is_play_again_visible());

        send_all(&mut app, &[ClientCommand::PlayAgain]);
        assert_eq!(app.game.controller().status(), GameStatus::InProgress);
        assert_eq!(app.board_view.status_text(), "Player X's turn");
        assert!(!app.board_view.is_play_again_visible());
        assert_eq!(app.game.controller().last_move(), None);
        assert!(Position::all().all(|position| app.board_view.mark_at(position).is_empty()));
    }

    #[test]
    fn test_play_again_before_game_end_is_ignored() {
        let mut app = TicTacToeApp::new(Config::default());
        send_all(&mut app, &[place(2, 2), ClientCommand::PlayAgain]);

        assert_eq!(app.board_view.mark_at(Position::new(2, 2)), Mark::X);
        assert_eq!(app.game.controller().move_count(), 1);
    }
}
