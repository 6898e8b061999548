//! Tic-tac-toe with full move history and time-travel replay.
//!
//! # Architecture
//!
//! - **Rules**: pure functions over a [`Board`] value - win detection,
//!   draw detection and move legality. No state of their own.
//! - **Timeline**: owns the ordered [`Snapshot`] history, the view pointer
//!   selecting the displayed snapshot, and the move-list [`SortOrder`].
//!   Validates moves through the rules and the [`contracts`] layer.
//!
//! Front ends consume structured values ([`GameStatus`], [`MoveDescriptor`])
//! and do their own wording.
//!
//! # Example
//!
//! ```
//! use tictactoe_timeline::{GameStatus, Player, Timeline};
//!
//! let mut timeline = Timeline::new();
//! for cell in [0, 3, 1, 4, 2] {
//!     timeline.apply_move(cell).unwrap();
//! }
//! assert_eq!(timeline.game_status().winner(), Some(Player::X));
//!
//! // Rewind and branch: later snapshots are discarded.
//! timeline.jump_to(1).unwrap();
//! timeline.apply_move(5).unwrap();
//! assert_eq!(timeline.len(), 3);
//! assert!(matches!(timeline.game_status(), GameStatus::InProgress { next: Player::X }));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod descriptor;
mod history;
mod position;
mod snapshot;
mod status;
mod types;

pub mod contracts;
pub mod invariants;
pub mod rules;

pub use action::{Action, ActionError, MoveError, OutOfRangeError};
pub use descriptor::{CellCoord, MoveDescriptor, SortOrder};
pub use history::Timeline;
pub use position::Position;
pub use rules::WinResult;
pub use snapshot::Snapshot;
pub use status::GameStatus;
pub use types::{Board, Player, Square};
