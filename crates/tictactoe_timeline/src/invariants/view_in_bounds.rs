//! View pointer invariant: the viewed snapshot exists.

use super::super::Timeline;
use super::Invariant;

/// Invariant: `0 <= view < len(history)`.
pub struct ViewInBoundsInvariant;

impl Invariant<Timeline> for ViewInBoundsInvariant {
    fn holds(timeline: &Timeline) -> bool {
        timeline.view_pointer() < timeline.len()
    }

    fn description() -> &'static str {
        "View pointer indexes an existing snapshot"
    }
}
