//! Keyboard handling: cursor movement and key-to-command mapping.

use crossterm::event::KeyCode;
use tictactoe_timeline::Position;

/// Which pane receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Arrow keys move the board cursor.
    #[default]
    Board,
    /// Arrow keys move the move-list selection.
    History,
}

impl Focus {
    /// Switches to the other pane.
    pub fn toggle(self) -> Self {
        match self {
            Self::Board => Self::History,
            Self::History => Self::Board,
        }
    }
}

/// A UI intent decoded from a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Move the board cursor.
    MoveCursor(KeyCode),
    /// Place a mark under the cursor.
    PlaceAtCursor,
    /// Place a mark at a specific cell.
    PlaceAt(Position),
    /// Move the move-list selection up.
    SelectPrevious,
    /// Move the move-list selection down.
    SelectNext,
    /// View the selected move-list entry.
    JumpToSelected,
    /// View the previous snapshot.
    StepBack,
    /// View the next snapshot.
    StepForward,
    /// Flip the move-list ordering.
    ToggleSort,
    /// Switch focus between board and move list.
    SwitchFocus,
    /// Leave the application.
    Quit,
}

/// Moves cursor based on arrow keys.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let index = cursor.to_index();
    let (row, col) = (index / 3, index % 3);

    let (row, col) = match key {
        KeyCode::Right if col < 2 => (row, col + 1),
        KeyCode::Left if col > 0 => (row, col - 1),
        KeyCode::Down if row < 2 => (row + 1, col),
        KeyCode::Up if row > 0 => (row - 1, col),
        // No change for other keys or edge cases
        _ => (row, col),
    };

    Position::from_index(row * 3 + col).unwrap_or(cursor)
}

/// Decodes a key press for the focused pane.
pub fn command_for(key: KeyCode, focus: Focus) -> Option<Command> {
    match (key, focus) {
        (KeyCode::Char('q') | KeyCode::Esc, _) => Some(Command::Quit),
        (KeyCode::Tab, _) => Some(Command::SwitchFocus),
        (KeyCode::Char('s'), _) => Some(Command::ToggleSort),
        (KeyCode::Char('<') | KeyCode::Char(','), _) => Some(Command::StepBack),
        (KeyCode::Char('>') | KeyCode::Char('.'), _) => Some(Command::StepForward),
        (KeyCode::Char(c @ '1'..='9'), _) => c
            .to_digit(10)
            .and_then(|d| Position::from_index(d as usize - 1))
            .map(Command::PlaceAt),

        (KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right, Focus::Board) => {
            Some(Command::MoveCursor(key))
        }
        (KeyCode::Enter | KeyCode::Char(' '), Focus::Board) => Some(Command::PlaceAtCursor),

        (KeyCode::Up, Focus::History) => Some(Command::SelectPrevious),
        (KeyCode::Down, Focus::History) => Some(Command::SelectNext),
        (KeyCode::Enter | KeyCode::Char(' '), Focus::History) => Some(Command::JumpToSelected),

        _ => None,
    }
}
