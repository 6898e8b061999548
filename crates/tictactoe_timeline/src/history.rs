//! Move history with a movable view pointer.
//!
//! The [`Timeline`] owns every snapshot reached in the current game, the
//! index of the snapshot on display, and the move-list sort order. Turn is
//! not stored: the player to move is derived from the view pointer's parity.
//!
//! Moving the view pointer back and then playing a move discards every
//! snapshot after the pointer before appending, so the new move starts a
//! fresh branch from the viewed position.

use super::action::{Action, ActionError, MoveError, OutOfRangeError};
use super::contracts::{Contract, JumpContract, MoveContract};
use super::descriptor::{CellCoord, MoveDescriptor, SortOrder};
use super::snapshot::Snapshot;
use super::status::GameStatus;
use super::{Player, Position};
use serde::Serialize;
use tracing::{debug, instrument};

/// Ordered history of snapshots and the pointer into it.
///
/// Invariants (see [`crate::invariants`]):
/// - history is never empty and starts with the empty board
/// - each snapshot adds exactly one mark to its predecessor
/// - the view pointer always indexes an existing snapshot
/// - no snapshot follows a won position
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Timeline {
    pub(crate) snapshots: Vec<Snapshot>,
    pub(crate) view: usize,
    pub(crate) sort_order: SortOrder,
}

impl Timeline {
    /// Creates a timeline holding only the empty starting board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            snapshots: vec![Snapshot::initial()],
            view: 0,
            sort_order: SortOrder::default(),
        }
    }

    /// Creates an empty timeline with the given move-list ordering.
    #[instrument]
    pub fn with_sort_order(sort_order: SortOrder) -> Self {
        Self {
            sort_order,
            ..Self::new()
        }
    }

    /// Replays cell indices from the starting board, failing on the first illegal one.
    #[instrument]
    pub fn replay(moves: &[usize]) -> Result<Self, MoveError> {
        let mut timeline = Self::new();
        for &index in moves {
            timeline.apply_move(index)?;
        }
        Ok(timeline)
    }

    // ─────────────────────────────────────────────────────────────
    //  Queries
    // ─────────────────────────────────────────────────────────────

    /// The snapshot currently on display.
    pub fn current_snapshot(&self) -> &Snapshot {
        &self.snapshots[self.view]
    }

    /// Mark of the player to move at the viewed snapshot.
    ///
    /// X on even view indices, O on odd ones.
    pub fn current_turn_mark(&self) -> Player {
        Player::for_ply(self.view)
    }

    /// Status at the viewed snapshot.
    #[instrument(skip(self), fields(view = self.view))]
    pub fn game_status(&self) -> GameStatus {
        GameStatus::evaluate(self.current_snapshot().board(), self.current_turn_mark())
    }

    /// All snapshots, oldest first.
    pub fn snapshots(&self) -> &[Snapshot] {
        &self.snapshots
    }

    /// Snapshot at a history index.
    pub fn snapshot(&self, index: usize) -> Option<&Snapshot> {
        self.snapshots.get(index)
    }

    /// Number of snapshots, including the starting board.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Always false: the starting board is never removed.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Index of the snapshot on display.
    pub fn view_pointer(&self) -> usize {
        self.view
    }

    /// True when the view is on the newest snapshot.
    pub fn is_at_latest(&self) -> bool {
        self.view + 1 == self.snapshots.len()
    }

    /// Current move-list ordering.
    pub fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    /// Describes the history entry at `index` for a move list.
    #[instrument(skip(self))]
    pub fn move_descriptor(&self, index: usize) -> Result<MoveDescriptor, OutOfRangeError> {
        let snapshot = self.snapshot(index).ok_or(OutOfRangeError {
            index,
            len: self.len(),
        })?;
        Ok(self.describe(index, snapshot))
    }

    /// Descriptors for every history entry, arranged by the sort order.
    #[instrument(skip(self), fields(len = self.len(), sort = %self.sort_order))]
    pub fn move_list(&self) -> Vec<MoveDescriptor> {
        let descriptors = self
            .snapshots
            .iter()
            .enumerate()
            .map(|(index, snapshot)| self.describe(index, snapshot))
            .collect();
        self.sort_order.arrange(descriptors)
    }

    fn describe(&self, index: usize, snapshot: &Snapshot) -> MoveDescriptor {
        let last_cell = (*snapshot.last_move()).map(|pos| CellCoord::new(pos.row(), pos.col()));
        MoveDescriptor::new(index, index == 0, last_cell, index == self.view)
    }

    // ─────────────────────────────────────────────────────────────
    //  Transitions
    // ─────────────────────────────────────────────────────────────

    /// Places the current player's mark at `index` on the viewed board.
    ///
    /// Snapshots after the view pointer are discarded first, then the new
    /// snapshot is appended and viewed. A rejected move changes nothing.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError`] if the game is already won on the viewed board,
    /// the index is off the board, or the square is occupied.
    #[instrument(skip(self), fields(view = self.view, len = self.snapshots.len()))]
    pub fn apply_move(&mut self, index: usize) -> Result<(), MoveError> {
        if let Err(e) = MoveContract::pre(self, &index) {
            debug!(error = %e, "Move rejected");
            return Err(e);
        }
        let pos = Position::from_index(index).ok_or(MoveError::OutOfBounds(index))?;
        let mark = self.current_turn_mark();

        #[cfg(debug_assertions)]
        let before = self.clone();

        let next = self.current_snapshot().after(pos, mark);
        let discarded = self.snapshots.len() - (self.view + 1);
        self.snapshots.truncate(self.view + 1);
        self.snapshots.push(next);
        self.view = self.snapshots.len() - 1;

        #[cfg(debug_assertions)]
        {
            if let Err(e) = MoveContract::post(&before, self) {
                *self = before;
                return Err(e);
            }
        }

        debug!(%pos, %mark, discarded, view = self.view, "Move applied");
        Ok(())
    }

    /// Moves the view pointer to `index` without touching history.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRangeError`] if `index` is not a history index.
    #[instrument(skip(self), fields(view = self.view, len = self.snapshots.len()))]
    pub fn jump_to(&mut self, index: usize) -> Result<(), OutOfRangeError> {
        JumpContract::pre(self, &index)?;

        #[cfg(debug_assertions)]
        let before = self.clone();

        self.view = index;

        #[cfg(debug_assertions)]
        {
            if let Err(e) = JumpContract::post(&before, self) {
                *self = before;
                return Err(e);
            }
        }

        debug!(view = self.view, "View moved");
        Ok(())
    }

    /// Flips the move-list ordering.
    #[instrument(skip(self))]
    pub fn toggle_sort(&mut self) {
        self.sort_order = self.sort_order.toggle();
        debug!(sort = %self.sort_order, "Sort order toggled");
    }

    /// Sets the move-list ordering.
    pub fn set_sort_order(&mut self, sort_order: SortOrder) {
        self.sort_order = sort_order;
    }

    /// Applies an action in place.
    ///
    /// Each call is one atomic step; on error the timeline is unchanged.
    #[instrument(skip(self, action), fields(%action))]
    pub fn dispatch(&mut self, action: Action) -> Result<(), ActionError> {
        match action {
            Action::Place(index) => self.apply_move(index)?,
            Action::JumpTo(index) => self.jump_to(index)?,
            Action::ToggleSort => self.toggle_sort(),
            Action::SetSort(order) => self.set_sort_order(order),
        }
        Ok(())
    }

    /// Reducer form of [`Timeline::dispatch`]: returns the next state and
    /// leaves `self` untouched.
    pub fn reduce(&self, action: Action) -> Result<Self, ActionError> {
        let mut next = self.clone();
        next.dispatch(action)?;
        Ok(next)
    }
}

impl Default for Timeline {
    fn default() -> Self {
        Self::new()
    }
}
