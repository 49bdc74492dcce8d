use common::games::tictactoe::GameEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCommand {
    PlaceMark { row: usize, col: usize },
    PlayAgain,
}

impl From<ClientCommand> for GameEvent {
    fn from(command: ClientCommand) -> Self {
        match command {
            ClientCommand::PlaceMark { row, col } => GameEvent::CellTapped { row, col },
            ClientCommand::PlayAgain => GameEvent::PlayAgainTapped,
        }
    }
}
