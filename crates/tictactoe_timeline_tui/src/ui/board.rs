//! Tic-tac-toe board rendering.

use crate::render::square_symbol;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::Paragraph,
};
use tictactoe_timeline::{GameStatus, Player, Position, Snapshot, Square};

/// Per-square highlighting inputs.
#[derive(Debug, Clone, Copy)]
pub struct BoardView<'a> {
    /// Snapshot to draw.
    pub snapshot: &'a Snapshot,
    /// Status of that snapshot, for the winning line.
    pub status: &'a GameStatus,
    /// Cursor position, if the board has focus.
    pub cursor: Option<Position>,
}

/// Renders the tic-tac-toe board.
pub fn render_board(f: &mut Frame, area: Rect, view: BoardView<'_>) {
    let board_area = center_rect(area, 23, 11);
    let rows = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Length(3),
    ])
    .split(board_area);

    render_row(f, rows[0], view, 0);
    render_separator(f, rows[1]);
    render_row(f, rows[2], view, 3);
    render_separator(f, rows[3]);
    render_row(f, rows[4], view, 6);
}

fn render_row(f: &mut Frame, area: Rect, view: BoardView<'_>, start: usize) {
    let cols = Layout::horizontal([
        Constraint::Length(7),
        Constraint::Length(1),
        Constraint::Length(7),
        Constraint::Length(1),
        Constraint::Length(7),
    ])
    .split(area);

    for (offset, col) in [0, 2, 4].into_iter().enumerate() {
        if let Some(pos) = Position::from_index(start + offset) {
            render_square(f, cols[col], view, pos);
        }
    }
    render_vertical_sep(f, cols[1]);
    render_vertical_sep(f, cols[3]);
}

fn render_square(f: &mut Frame, area: Rect, view: BoardView<'_>, pos: Position) {
    let square = view.snapshot.board().get(pos);
    let mut style = match square {
        Square::Empty => Style::default().fg(Color::DarkGray),
        Square::Occupied(Player::X) => Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        Square::Occupied(Player::O) => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
    };
    if view.status.on_winning_line(pos) {
        style = style.bg(Color::Yellow);
    }
    if *view.snapshot.last_move() == Some(pos) {
        style = style.add_modifier(Modifier::UNDERLINED);
    }
    if view.cursor == Some(pos) {
        style = style.add_modifier(Modifier::REVERSED);
    }

    let text = match square {
        Square::Empty => format!("\n{}", pos.to_index() + 1),
        _ => format!("\n{}", square_symbol(square)),
    };
    let paragraph = Paragraph::new(text).style(style).alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

fn render_separator(f: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(sep, area);
}

fn render_vertical_sep(f: &mut Frame, area: Rect) {
    let sep = Paragraph::new("│\n│\n│").style(Style::default().fg(Color::DarkGray));
    f.render_widget(sep, area);
}

/// Centers a fixed-size rectangle inside `area`, shrinking it if needed.
pub fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_rect() {
        let area = Rect::new(0, 0, 40, 20);
        assert_eq!(center_rect(area, 20, 10), Rect::new(10, 5, 20, 10));
    }

    #[test]
    fn test_center_rect_clamps() {
        let area = Rect::new(2, 3, 10, 4);
        assert_eq!(center_rect(area, 20, 10), area);
    }
}
