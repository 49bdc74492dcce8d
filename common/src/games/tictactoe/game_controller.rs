use super::board::Board;
use super::messages::StatusMessages;
use super::types::{CELL_COUNT, GameStatus, Mark, Player, Position, WinningLine};
use super::win_detector::check_win_with_line;

/// Owns all logical game state: the board, whose turn it is, the move count
/// and the cached outcome.
#[derive(Debug, Clone)]
pub struct GameController {
    board: Board,
    active_player: Player,
    move_count: usize,
    status: GameStatus,
    winning_line: Option<WinningLine>,
    last_move: Option<Position>,
}

impl Default for GameController {
    fn default() -> Self {
        Self::new()
    }
}

impl GameController {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            active_player: Player::X,
            move_count: 0,
            status: GameStatus::InProgress,
            winning_line: None,
            last_move: None,
        }
    }

    /// Places the active player's mark at `(row, col)`.
    ///
    /// Returns `false` without touching any state when the game is over, the
    /// position is off the board or the cell is already marked.
    pub fn apply_move(&mut self, row: usize, col: usize) -> bool {
        let position = Position::new(row, col);
        if self.status.is_terminal() {
            return false;
        }
        if !self.board.place(position, self.active_player.mark()) {
            return false;
        }

        self.move_count += 1;
        self.last_move = Some(position);
        self.update_status();
        true
    }

    fn update_status(&mut self) {
        if let Some(line) = check_win_with_line(&self.board) {
            self.status = GameStatus::Won(self.active_player);
            self.winning_line = Some(line);
        } else if self.move_count == CELL_COUNT {
            self.status = GameStatus::Drawn;
        } else {
            self.active_player = self.active_player.opponent();
        }
    }

    pub fn current_status_message(&self) -> String {
        self.status_message(&StatusMessages::default())
    }

    pub fn status_message(&self, messages: &StatusMessages) -> String {
        match self.status {
            GameStatus::InProgress => messages.turn_message(self.active_player),
            GameStatus::Won(player) => messages.win_message(player),
            GameStatus::Drawn => messages.draw_message(),
        }
    }

    pub fn reset(&mut self) {
        self.board.clear();
        self.active_player = Player::X;
        self.move_count = 0;
        self.status = GameStatus::InProgress;
        self.winning_line = None;
        self.last_move = None;
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<Mark> {
        self.board.get(Position::new(row, col))
    }

    pub fn active_player(&self) -> Player {
        self.active_player
    }

    pub fn move_count(&self) -> usize {
        self.move_count
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_finished(&self) -> bool {
        self.status.is_terminal()
    }

    pub fn winning_line(&self) -> Option<&WinningLine> {
        self.winning_line.as_ref()
    }

    pub fn last_move(&self) -> Option<Position> {
        self.last_move
    }
}
