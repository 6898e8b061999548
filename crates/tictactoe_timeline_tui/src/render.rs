//! Plain-text rendering of game values.
//!
//! All user-facing wording lives here; the game library only hands out
//! structured values.

use tictactoe_timeline::{
    GameStatus, MoveDescriptor, Player, Position, Snapshot, SortOrder, Square, Timeline,
};

/// Status line for the viewed position.
pub fn status_text(status: &GameStatus) -> String {
    match (status.winner(), status.next_player()) {
        (Some(mark), _) => format!("Winner: {}", mark),
        (None, Some(next)) => format!("Next player: {}", next),
        (None, None) => "Draw".to_string(),
    }
}

/// Label for one move-list entry.
pub fn move_text(descriptor: &MoveDescriptor) -> String {
    match descriptor.last_cell() {
        Some(cell) if !*descriptor.is_initial() => format!(
            "Go to move #{} ({}, {})",
            descriptor.move_number(),
            cell.row,
            cell.col
        ),
        _ => "Go to game start".to_string(),
    }
}

/// Label for the sort toggle.
pub fn sort_button_text(order: SortOrder) -> &'static str {
    match order {
        SortOrder::Ascending => "Sort: ascending",
        SortOrder::Descending => "Sort: descending",
    }
}

/// Symbol for a square.
pub fn square_symbol(square: Square) -> &'static str {
    match square {
        Square::Empty => ".",
        Square::Occupied(Player::X) => "X",
        Square::Occupied(Player::O) => "O",
    }
}

/// Text grid of a snapshot; squares on a winning line are bracketed.
pub fn board_text(snapshot: &Snapshot, status: &GameStatus) -> String {
    Position::ALL
        .chunks(3)
        .map(|row| {
            row.iter()
                .map(|&pos| {
                    let symbol = square_symbol(snapshot.board().get(pos));
                    if status.on_winning_line(pos) {
                        format!("[{}]", symbol)
                    } else {
                        format!(" {} ", symbol)
                    }
                })
                .collect::<Vec<_>>()
                .join("|")
        })
        .collect::<Vec<_>>()
        .join("\n---+---+---\n")
}

/// Full text view of a timeline: board, status, and move list.
///
/// The viewed entry in the move list is marked with `>`.
pub fn transcript(timeline: &Timeline) -> String {
    let status = timeline.game_status();
    let mut out = String::new();
    out.push_str(&board_text(timeline.current_snapshot(), &status));
    out.push_str("\n\n");
    out.push_str(&status_text(&status));
    out.push('\n');
    out.push_str(sort_button_text(timeline.sort_order()));
    out.push('\n');
    for descriptor in timeline.move_list() {
        let marker = if *descriptor.is_current() { '>' } else { ' ' };
        out.push_str(&format!(
            "{} {:>2}. {}\n",
            marker,
            descriptor.move_number() + 1,
            move_text(&descriptor)
        ));
    }
    out
}
