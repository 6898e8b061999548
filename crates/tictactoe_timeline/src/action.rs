//! Actions accepted by the timeline and the errors they can raise.
//!
//! Both error kinds are expected in normal play. A rejected move or an
//! out-of-range jump leaves the timeline exactly as it was.

use super::descriptor::SortOrder;
use super::position::Position;
use derive_more::{Display, Error, From};
use serde::{Deserialize, Serialize};

/// A single user intent against a [`Timeline`](super::Timeline).
///
/// Each action maps to exactly one atomic call into the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Action {
    /// Place the current player's mark at a cell index (0-8).
    #[display("place at {_0}")]
    Place(usize),
    /// Move the view pointer to a history index.
    #[display("jump to {_0}")]
    JumpTo(usize),
    /// Flip the move-list ordering.
    #[display("toggle sort")]
    ToggleSort,
    /// Set the move-list ordering.
    #[display("sort {_0:?}")]
    SetSort(SortOrder),
}

/// A move was rejected by the rules.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// The cell index is not on the board.
    #[display("Cell index {} is out of bounds (must be 0-8)", _0)]
    OutOfBounds(#[error(not(source))] usize),

    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(#[error(not(source))] Position),

    /// The viewed board already has a winning line.
    #[display("Game is already over")]
    GameOver,

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(#[error(not(source))] String),
}

/// A history index outside the current timeline was requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("History index {} is out of range (history has {} entries)", index, len)]
pub struct OutOfRangeError {
    /// Requested index.
    pub index: usize,
    /// History length at the time of the request.
    pub len: usize,
}

/// Any failure raised while dispatching an [`Action`].
#[derive(Debug, Clone, PartialEq, Eq, Display, Error, From)]
pub enum ActionError {
    /// The move was illegal.
    #[display("{_0}")]
    IllegalMove(MoveError),
    /// The jump target was out of range.
    #[display("{_0}")]
    OutOfRange(OutOfRangeError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            MoveError::SquareOccupied(Position::Center).to_string(),
            "Square Center is already occupied"
        );
        assert_eq!(
            OutOfRangeError { index: 4, len: 2 }.to_string(),
            "History index 4 is out of range (history has 2 entries)"
        );
    }

    #[test]
    fn test_action_error_from() {
        let err: ActionError = MoveError::GameOver.into();
        assert_eq!(err, ActionError::IllegalMove(MoveError::GameOver));
        assert_eq!(err.to_string(), "Game is already over");
    }
}
