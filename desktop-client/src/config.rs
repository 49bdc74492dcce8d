pub(crate) use common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use common::games::tictactoe::StatusMessages;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE: &str = "tictactoe_client_config.yaml";

const MIN_WINDOW_SIZE: u32 = 300;
const MAX_WINDOW_SIZE: u32 = 2000;

pub fn get_config_manager(file_path: &str) -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(file_path)
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Config {
    pub window: WindowConfig,
    pub board: BoardConfig,
    pub messages: StatusMessages,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.window.validate()?;
        self.messages.validate()?;
        Ok(())
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
}

impl Validate for WindowConfig {
    fn validate(&self) -> Result<(), String> {
        if self.width < MIN_WINDOW_SIZE || self.height < MIN_WINDOW_SIZE {
            return Err(format!("window dimensions must be at least {}x{}", MIN_WINDOW_SIZE, MIN_WINDOW_SIZE));
        }
        if self.width > MAX_WINDOW_SIZE || self.height > MAX_WINDOW_SIZE {
            return Err(format!("window dimensions must not exceed {}x{}", MAX_WINDOW_SIZE, MAX_WINDOW_SIZE));
        }
        Ok(())
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct BoardConfig {
    pub highlight_winning_line: bool,
    pub highlight_hover: bool,
    pub highlight_last_move: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            window: WindowConfig {
                width: 480,
                height: 600,
            },
            board: BoardConfig {
                highlight_winning_line: true,
                highlight_hover: true,
                highlight_last_move: true,
            },
            messages: StatusMessages::default(),
        }
    }
}
