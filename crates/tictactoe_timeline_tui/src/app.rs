//! Application state and logic.

use crate::input::{self, Command, Focus};
use derive_getters::Getters;
use tictactoe_timeline::{Action, MoveDescriptor, OutOfRangeError, Position, SortOrder, Timeline};
use tracing::{debug, instrument, warn};

/// Main application state.
///
/// Owns the game timeline plus view-only state: the board cursor, the
/// focused pane, and the highlighted move-list row.
#[derive(Debug, Getters)]
pub struct App {
    timeline: Timeline,
    cursor: Position,
    focus: Focus,
    /// Row in the displayed (sorted) move list.
    selected: usize,
    should_quit: bool,
}

impl App {
    /// Creates a new application around a timeline.
    #[instrument(skip(timeline))]
    pub fn new(timeline: Timeline) -> Self {
        let mut app = Self {
            timeline,
            cursor: Position::Center,
            focus: Focus::default(),
            selected: 0,
            should_quit: false,
        };
        app.sync_selection();
        app
    }

    /// The move list as it should be displayed.
    pub fn move_list(&self) -> Vec<MoveDescriptor> {
        self.timeline.move_list()
    }

    /// Handles a decoded key command.
    #[instrument(skip(self))]
    pub fn handle(&mut self, command: Command) {
        match command {
            Command::Quit => self.should_quit = true,
            Command::SwitchFocus => self.focus = self.focus.toggle(),
            Command::MoveCursor(key) => self.cursor = input::move_cursor(self.cursor, key),
            Command::PlaceAtCursor => self.dispatch(Action::Place(self.cursor.to_index())),
            Command::PlaceAt(pos) => {
                self.cursor = pos;
                self.dispatch(Action::Place(pos.to_index()));
            }
            Command::ToggleSort => self.dispatch(Action::ToggleSort),
            Command::StepBack => {
                if let Some(index) = self.timeline.view_pointer().checked_sub(1) {
                    self.dispatch(Action::JumpTo(index));
                }
            }
            Command::StepForward => {
                self.dispatch(Action::JumpTo(self.timeline.view_pointer() + 1));
            }
            Command::SelectPrevious => {
                self.selected = self.selected.saturating_sub(1);
            }
            Command::SelectNext => {
                self.selected = (self.selected + 1).min(self.timeline.len() - 1);
            }
            Command::JumpToSelected => {
                if let Some(descriptor) = self.move_list().get(self.selected) {
                    self.dispatch(Action::JumpTo(*descriptor.move_number()));
                }
            }
        }
    }

    /// Sends one action to the timeline.
    ///
    /// Rejected actions are expected during play (clicking an occupied
    /// square, stepping past the end) and are dropped silently.
    fn dispatch(&mut self, action: Action) {
        match self.timeline.dispatch(action) {
            Ok(()) => {
                debug!(%action, view = self.timeline.view_pointer(), "Action applied");
                self.sync_selection();
            }
            Err(e) => debug!(%action, error = %e, "Action ignored"),
        }
    }

    /// Points the move-list selection at the viewed entry.
    fn sync_selection(&mut self) {
        if let Some(row) = self.move_list().iter().position(|d| *d.is_current()) {
            self.selected = row;
        }
    }
}

/// Builds a timeline from `moves`, skipping illegal ones, then views `jump`.
///
/// Illegal moves are logged and dropped the same way the interactive UI
/// ignores them. Only an out-of-range `jump` is an error.
#[instrument]
pub fn replay_lenient(
    moves: &[usize],
    jump: Option<usize>,
    sort: SortOrder,
) -> Result<Timeline, OutOfRangeError> {
    let mut timeline = Timeline::with_sort_order(sort);
    for &index in moves {
        if let Err(e) = timeline.apply_move(index) {
            warn!(index, error = %e, "Skipping illegal move");
        }
    }
    if let Some(index) = jump {
        timeline.jump_to(index)?;
    }
    Ok(timeline)
}
