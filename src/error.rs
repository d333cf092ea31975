//! Error types for the engine

use thiserror::Error;

use crate::board::{Mark, Pos};

/// Main error type for the crate
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid board size {size} (must be between 1 and {max})", max = crate::board::MAX_BOARD_SIZE)]
    InvalidBoardSize { size: usize },

    #[error("invalid win length {win_length} for a {size}x{size} board (must be between 1 and {size})")]
    InvalidWinLength { win_length: usize, size: usize },

    #[error("engine side must be X or O")]
    InvalidSide,

    #[error("depth limit {depth} must be odd so the horizon falls after the engine's own move")]
    DepthParity { depth: u8 },

    #[error("engine is already playing; configure before the first move")]
    AlreadyConfigured,

    #[error("position {pos} is outside the {size}x{size} board")]
    OutOfBounds { pos: Pos, size: usize },

    #[error("invalid move: position {pos} is already occupied")]
    Occupied { pos: Pos },

    #[error("no moves available: the board is full")]
    NoMovesAvailable,

    #[error("game already over: {winner} has won")]
    GameOver { winner: Mark },
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;
