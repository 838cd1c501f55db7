//! Errors for rejected requests.
//!
//! Every variant except [`MoveError::InvariantViolation`] describes a normal
//! user mistake: the request is refused and the engine is left exactly as it
//! was. Callers driving a UI are expected to ignore them.

use super::Position;

/// Error returned when a move or history jump is refused.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The game at the current move already has a winner.
    #[display("Game is already over")]
    GameOver,

    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The cell index is not on the board.
    #[display("Position {} out of bounds (must be 0-8)", _0)]
    OutOfBounds(usize),

    /// The requested history index does not exist.
    #[display("Move #{} is not in the history (length {})", requested, len)]
    HistoryOutOfRange {
        /// Index that was asked for.
        requested: usize,
        /// Length of the history at the time.
        len: usize,
    },

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}
