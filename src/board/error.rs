//! Error types for chess board operations.

use std::fmt;

use super::Color;

/// Error type for board state transitions and invariant checks
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// `undo_move` was called with no move left to take back
    NoHistory,
    /// The board has no king of the given color
    MissingKing { color: Color },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::NoHistory => write!(f, "No move to undo: history is empty"),
            BoardError::MissingKing { color } => {
                write!(f, "No {color} king on the board")
            }
        }
    }
}

impl std::error::Error for BoardError {}

/// Error type for square parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Mailbox index outside 0-63
    IndexOutOfRange { index: usize },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::IndexOutOfRange { index } => {
                write!(f, "Square index {index} out of range (must be 0-63)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}
