//! Single cell delta invariant: each move fills exactly one empty square.

use super::super::{Player, Position, Square, Timeline};
use super::Invariant;

/// Invariant: Consecutive snapshots differ in exactly the `last_move` cell.
///
/// That cell goes from Empty to the mark of the player whose turn it was,
/// so marks alternate X, O, X, ... by construction.
pub struct SingleCellDeltaInvariant;

impl Invariant<Timeline> for SingleCellDeltaInvariant {
    fn holds(timeline: &Timeline) -> bool {
        timeline
            .snapshots()
            .windows(2)
            .enumerate()
            .all(|(ply, pair)| {
                let [prev, next] = pair else {
                    return false;
                };
                let Some(moved) = *next.last_move() else {
                    return false;
                };
                let mover = Player::for_ply(ply);

                Position::ALL.iter().all(|&pos| {
                    let before = prev.board().get(pos);
                    let after = next.board().get(pos);
                    if pos == moved {
                        before == Square::Empty && after == Square::Occupied(mover)
                    } else {
                        before == after
                    }
                })
            })
    }

    fn description() -> &'static str {
        "Each snapshot fills exactly one empty square with the mover's mark"
    }
}
