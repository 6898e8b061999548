//! Move legality for tic-tac-toe.

use super::super::action::MoveError;
use super::super::{Board, Position};
use super::win::evaluate_winner;
use tracing::instrument;

/// Validates a move against a board, reporting why it is illegal.
///
/// Checks, in order: the board already has a winner, the index is on
/// the board, the target square is empty.
#[instrument(skip(board))]
pub fn check_move(board: &Board, index: usize) -> Result<Position, MoveError> {
    if evaluate_winner(board).is_some() {
        return Err(MoveError::GameOver);
    }

    let pos = Position::from_index(index).ok_or(MoveError::OutOfBounds(index))?;

    if !board.is_empty(pos) {
        return Err(MoveError::SquareOccupied(pos));
    }

    Ok(pos)
}

/// True iff `index` is on the board, the square is empty and nobody has won.
pub fn is_move_legal(board: &Board, index: usize) -> bool {
    check_move(board, index).is_ok()
}
