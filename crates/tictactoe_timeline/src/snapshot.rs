//! Immutable board snapshots stored in the timeline.

use super::{Board, Player, Position};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Board state immediately after one move, or the empty starting board.
///
/// Snapshots are never modified once built; a move produces a new one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Getters)]
pub struct Snapshot {
    /// The board after the move.
    board: Board,
    /// Cell filled by the move, `None` for the initial snapshot.
    last_move: Option<Position>,
}

impl Snapshot {
    /// The empty starting snapshot.
    pub fn initial() -> Self {
        Self {
            board: Board::new(),
            last_move: None,
        }
    }

    /// Snapshot that follows `self` once `player` marks `pos`.
    pub fn after(&self, pos: Position, player: Player) -> Self {
        Self {
            board: self.board.with_mark(pos, player),
            last_move: Some(pos),
        }
    }

    /// True for the starting snapshot.
    pub fn is_initial(&self) -> bool {
        self.last_move.is_none()
    }
}

impl Default for Snapshot {
    fn default() -> Self {
        Self::initial()
    }
}
