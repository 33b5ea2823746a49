//! Error types
//!
//! Two classes are kept apart: [`MoveError`] is a player's rule violation and
//! carries the reason shown back to them, [`EngineError`] is integration misuse
//! by the calling layer.

use std::path::PathBuf;

/// Rejected player input. The board is unchanged whenever one is returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("this game has already finished")]
    GameFinished,

    #[error("it is not your turn")]
    NotYourTurn,

    #[error("you are not playing in this game")]
    NotAParticipant,

    #[error("out of range: use coordinates from 1 to {size}")]
    OutOfRange { size: usize },

    #[error("there is already a stone there")]
    Occupied,

    #[error("forbidden move: overline (six or more in a row)")]
    Overline,

    #[error("forbidden move: double four (two or more fours at once)")]
    DoubleFour,

    #[error("forbidden move: double three (two or more open threes at once)")]
    DoubleThree,
}

impl MoveError {
    /// True for the three Renju restrictions on Black
    pub fn is_forbidden_pattern(&self) -> bool {
        matches!(
            self,
            MoveError::Overline | MoveError::DoubleFour | MoveError::DoubleThree
        )
    }
}

/// Caller or programmer error: the integrating layer used the API wrongly.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("AI move requested but it is not the AI's turn")]
    NotAiTurn,

    #[error("board size {0} is not supported")]
    InvalidBoardSize(usize),

    #[error("invalid seats: {0}")]
    InvalidSeats(&'static str),

    #[error("raw move rejected: {reason}")]
    RawMoveRejected { reason: &'static str },

    #[error("no legal move available for {0}")]
    NoLegalMove(crate::Stone),
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

    #[error("unknown AI tier '{0}' (expected easy, normal or hard)")]
    UnknownTier(String),
}
