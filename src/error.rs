use std::path::PathBuf;

use crate::game::COLS;

/// Reasons a disc drop is rejected. The game state is left unchanged in
/// every case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {0} is out of range (0..{max})", max = COLS)]
    InvalidColumn(usize),

    #[error("column {0} is full")]
    ColumnFull(usize),

    #[error("the game is already over")]
    GameOver,
}

impl MoveError {
    /// Moves after the game has ended are ignored rather than reported.
    pub fn is_silent(&self) -> bool {
        matches!(self, MoveError::GameOver)
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
