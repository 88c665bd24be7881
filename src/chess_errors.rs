//! Errors surfaced by the position model.
//!
//! Recoverable, expected failure modes only: illegal operations are
//! rejected before any state mutation, so callers can match and recover
//! without repairing the board.

use std::error::Error;
use std::fmt;

use crate::game_state::chess_types::Square;

pub type ChessResult<T> = Result<T, ChessError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChessError {
    /// The caller tried to apply a move that is not in the current legal
    /// move set. The state is untouched.
    IllegalMove { from: Square, to: Square },
    /// An engine was asked for a move in a position that has none
    /// (checkmate or stalemate).
    NoLegalMoves,
}

impl fmt::Display for ChessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChessError::IllegalMove { from, to } => {
                write!(f, "illegal move from square {from} to square {to}")
            }
            ChessError::NoLegalMoves => write!(f, "no legal moves in this position"),
        }
    }
}

impl Error for ChessError {}
