//! Structured move-list entries for history views.
//!
//! Descriptors carry numbers, never text. Wording belongs to whoever renders them.

use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Display ordering of the move list.
///
/// Purely presentational: it never reorders the underlying history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Oldest entry first.
    #[default]
    Ascending,
    /// Newest entry first.
    Descending,
}

impl SortOrder {
    /// Returns the opposite ordering.
    pub fn toggle(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Arranges descriptors (given in history order) for display.
    #[instrument(skip(descriptors), fields(count = descriptors.len()))]
    pub fn arrange(self, mut descriptors: Vec<MoveDescriptor>) -> Vec<MoveDescriptor> {
        if self == Self::Descending {
            descriptors.reverse();
        }
        descriptors
    }
}

/// A 1-based board coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
pub struct CellCoord {
    /// Row, 1 to 3.
    pub row: usize,
    /// Column, 1 to 3.
    pub col: usize,
}

/// One entry of the rendered move history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Getters, new)]
pub struct MoveDescriptor {
    /// History index this entry selects (0 is the game start).
    move_number: usize,
    /// True for the initial, empty-board entry.
    is_initial: bool,
    /// Cell filled by this move; `None` for the initial entry.
    last_cell: Option<CellCoord>,
    /// True when this entry is the one currently viewed.
    is_current: bool,
}
