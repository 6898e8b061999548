//! Frozen-after-win invariant: nothing follows a winning snapshot.

use super::super::Timeline;
use super::super::rules::evaluate_winner;
use super::Invariant;

/// Invariant: Only the last snapshot of a history may contain a winning line.
pub struct FrozenAfterWinInvariant;

impl Invariant<Timeline> for FrozenAfterWinInvariant {
    fn holds(timeline: &Timeline) -> bool {
        let snapshots = timeline.snapshots();
        let Some((_, earlier)) = snapshots.split_last() else {
            return true;
        };
        earlier
            .iter()
            .all(|snapshot| evaluate_winner(snapshot.board()).is_none())
    }

    fn description() -> &'static str {
        "No snapshot follows a won position"
    }
}
