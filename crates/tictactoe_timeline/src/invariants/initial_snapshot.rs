//! Initial snapshot invariant: history starts from the empty board.

use super::super::{Snapshot, Timeline};
use super::Invariant;

/// Invariant: History is never empty and begins with the empty board.
pub struct InitialSnapshotInvariant;

impl Invariant<Timeline> for InitialSnapshotInvariant {
    fn holds(timeline: &Timeline) -> bool {
        timeline
            .snapshots()
            .first()
            .is_some_and(|first| *first == Snapshot::initial())
    }

    fn description() -> &'static str {
        "History starts with the empty initial snapshot"
    }
}
