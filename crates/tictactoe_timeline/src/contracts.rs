//! Contract-based validation for timeline operations.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use super::action::{MoveError, OutOfRangeError};
use super::history::Timeline;
use super::invariants::{InvariantSet, TimelineInvariants};
use super::rules;
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
///
/// Contracts formalize Hoare-style reasoning:
/// - Precondition: {P(state, action)} - must hold before applying action
/// - Postcondition: {Q(before, after)} - must hold after applying action
pub trait Contract<S, A> {
    /// Error reported when either side of the contract fails.
    type Error;

    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), Self::Error>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), Self::Error>;
}

// ─────────────────────────────────────────────────────────────
//  Move Contract
// ─────────────────────────────────────────────────────────────

/// Contract for placing a mark at a cell index.
///
/// Preconditions:
/// - Viewed board has no winner
/// - Index is on the board
/// - Square is empty
///
/// Postconditions:
/// - History holds exactly the kept prefix plus one new snapshot
/// - View points at the new snapshot
/// - All timeline invariants hold
pub struct MoveContract;

impl Contract<Timeline, usize> for MoveContract {
    type Error = MoveError;

    #[instrument(skip(timeline))]
    fn pre(timeline: &Timeline, index: &usize) -> Result<(), MoveError> {
        rules::check_move(timeline.current_snapshot().board(), *index).map(|_| ())
    }

    #[instrument(skip_all)]
    fn post(before: &Timeline, after: &Timeline) -> Result<(), MoveError> {
        let expected_len = before.view_pointer() + 2;
        if after.len() != expected_len || !after.is_at_latest() {
            warn!(
                expected_len,
                actual_len = after.len(),
                view = after.view_pointer(),
                "Move did not append exactly one snapshot"
            );
            return Err(MoveError::InvariantViolation(format!(
                "Postcondition failed: expected {} snapshots viewing the last, found {} viewing {}",
                expected_len,
                after.len(),
                after.view_pointer()
            )));
        }

        if before.snapshots()[..=before.view_pointer()] != after.snapshots()[..=before.view_pointer()] {
            return Err(MoveError::InvariantViolation(
                "Postcondition failed: kept history prefix changed".to_string(),
            ));
        }

        TimelineInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}

// ─────────────────────────────────────────────────────────────
//  Jump Contract
// ─────────────────────────────────────────────────────────────

/// Contract for moving the view pointer.
///
/// Precondition: target index exists in history.
/// Postcondition: history itself is untouched.
pub struct JumpContract;

impl Contract<Timeline, usize> for JumpContract {
    type Error = OutOfRangeError;

    #[instrument(skip(timeline))]
    fn pre(timeline: &Timeline, index: &usize) -> Result<(), OutOfRangeError> {
        if *index < timeline.len() {
            Ok(())
        } else {
            Err(OutOfRangeError {
                index: *index,
                len: timeline.len(),
            })
        }
    }

    #[instrument(skip_all)]
    fn post(before: &Timeline, after: &Timeline) -> Result<(), OutOfRangeError> {
        if before.snapshots() == after.snapshots() && after.view_pointer() < after.len() {
            Ok(())
        } else {
            warn!("Jump altered history");
            Err(OutOfRangeError {
                index: after.view_pointer(),
                len: after.len(),
            })
        }
    }
}
