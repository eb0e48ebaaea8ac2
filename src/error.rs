//! Error types returned by the fallible parts of the public API: FEN parsing, move-string
//! parsing, and applying a move by name.
//!
//! Internal invariant violations (an out-of-range ply passed to an internal-only helper, a
//! checked move that turns out to be unplayable) stay as `debug_assert!`/`panic!` — those
//! indicate a bug in the core itself, not bad caller input, and are never reachable through
//! the public API given valid input.

use board::FenBuildError;

/// Errors produced while building or mutating a [`Board`](../board/struct.Board.html) from
/// user-supplied strings.
#[derive(thiserror::Error, Debug)]
pub enum PositionError {
    /// A FEN string or move string could not be parsed at all.
    #[error("malformed input: {0}")]
    MalformedInput(String),

    /// A FEN string parsed but violates one of the position invariants (checker count,
    /// pawn placement, side-to-move consistency).
    #[error("invalid position: {0}")]
    InvalidPosition(String),

    /// `make` was called with a move that is not a member of the current `legal_moves()`.
    #[error("illegal move: {mov} is not legal in the current position")]
    IllegalMove { mov: String },

    /// The undo stack was asked to grow past its configured hard maximum.
    #[error("undo stack capacity exceeded: requested {requested}, hard maximum is {max}")]
    CapacityExceeded { requested: usize, max: usize },
}

impl From<FenBuildError> for PositionError {
    fn from(err: FenBuildError) -> PositionError {
        match err {
            FenBuildError::NotEnoughSections { .. }
            | FenBuildError::IncorrectRankAmounts { .. }
            | FenBuildError::UnrecognizedTurn { .. }
            | FenBuildError::EPSquareUnreadable { .. }
            | FenBuildError::SquareSmallerRank { .. }
            | FenBuildError::SquareLargerRank { .. }
            | FenBuildError::UnrecognizedPiece { .. }
            | FenBuildError::UnreadableMoves(_) => {
                PositionError::MalformedInput(err.to_string())
            }
            FenBuildError::IllegalNumCheckingPieces { .. }
            | FenBuildError::IllegalCheckState { .. }
            | FenBuildError::TooManyPawns { .. }
            | FenBuildError::PawnOnLastRow
            | FenBuildError::EPSquareInvalid { .. } => {
                PositionError::InvalidPosition(err.to_string())
            }
        }
    }
}

impl PositionError {
    /// Convenience constructor for a rejected move string.
    pub fn illegal_move(mov: &str) -> PositionError {
        PositionError::IllegalMove { mov: mov.to_string() }
    }
}
