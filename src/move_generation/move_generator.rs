use std::error::Error;
use std::fmt;

use crate::game_state::chess_types::Location;

pub type MoveGenResult<T> = Result<T, MoveGenerationError>;

/// Precondition violations reported by the engine instead of corrupting state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveGenerationError {
    /// A coordinate outside `[0, 7]` on either axis.
    OutOfBounds(Location),
    /// No piece stands on the start square.
    EmptyStartSquare(Location),
    /// The move was built from a different board than the current one.
    StaleMove(String),
    /// The piece belongs to the side that is not on move.
    WrongSideToMove(Location),
    InvalidState(String),
}

impl fmt::Display for MoveGenerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveGenerationError::OutOfBounds((row, col)) => {
                write!(f, "square ({row}, {col}) is off the board")
            }
            MoveGenerationError::EmptyStartSquare((row, col)) => {
                write!(f, "no piece on start square ({row}, {col})")
            }
            MoveGenerationError::StaleMove(msg) => write!(f, "stale move: {msg}"),
            MoveGenerationError::WrongSideToMove((row, col)) => {
                write!(f, "piece on ({row}, {col}) does not belong to the side to move")
            }
            MoveGenerationError::InvalidState(msg) => write!(f, "invalid game state: {msg}"),
        }
    }
}

impl Error for MoveGenerationError {}
