use serde::{Deserialize, Serialize};

use crate::config::Validate;
use super::types::Player;

const PLAYER_PLACEHOLDER: &str = "{player}";

/// Display strings for the status line and the play-again control.
///
/// `turn` and `win` are templates where `{player}` is replaced by the mark
/// of the relevant player, so the whole set can be swapped for another
/// language through the client config.
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct StatusMessages {
    pub turn: String,
    pub win: String,
    pub draw: String,
    pub play_again: String,
}

impl StatusMessages {
    pub fn turn_message(&self, player: Player) -> String {
        self.turn.replace(PLAYER_PLACEHOLDER, &player.to_string())
    }

    pub fn win_message(&self, player: Player) -> String {
        self.win.replace(PLAYER_PLACEHOLDER, &player.to_string())
    }

    pub fn draw_message(&self) -> String {
        self.draw.clone()
    }
}

impl Default for StatusMessages {
    fn default() -> Self {
        Self {
            turn: "Player {player}'s turn".to_string(),
            win: "Player {player} wins!".to_string(),
            draw: "It's a draw!".to_string(),
            play_again: "Play Again".to_string(),
        }
    }
}

impl Validate for StatusMessages {
    fn validate(&self) -> Result<(), String> {
        if !self.turn.contains(PLAYER_PLACEHOLDER) {
            return Err(format!("turn message must contain {}", PLAYER_PLACEHOLDER));
        }
        if !self.win.contains(PLAYER_PLACEHOLDER) {
            return Err(format!("win message must contain {}", PLAYER_PLACEHOLDER));
        }
        if self.draw.trim().is_empty() {
            return Err("draw message must not be empty".to_string());
        }
        if self.play_again.trim().is_empty() {
            return Err("play_again label must not be empty".to_string());
        }
        Ok(())
    }
}
