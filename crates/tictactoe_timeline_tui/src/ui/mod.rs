//! Terminal UI frame layout.

mod board;
mod history;

use crate::app::App;
use crate::input::Focus;
use crate::render::status_text;
use board::{BoardView, render_board};
use history::render_history;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};

const HELP: &str =
    "arrows: move  enter: select  1-9: place  </>: step  s: sort  tab: switch pane  q: quit";

/// Draws one frame for the current application state.
pub fn draw(f: &mut Frame, app: &App) {
    let [main, status_area, help_area] = Layout::vertical([
        Constraint::Min(13),
        Constraint::Length(3),
        Constraint::Length(1),
    ])
    .areas(f.area());

    let [board_area, history_area] =
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).areas(main);

    let timeline = app.timeline();
    let status = timeline.game_status();
    let focused = *app.focus() == Focus::Board;

    let board_block = Block::default()
        .borders(Borders::ALL)
        .border_style(if focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        })
        .title(format!(
            " Move {} of {} ",
            timeline.view_pointer(),
            timeline.len() - 1
        ));
    let inner = board_block.inner(board_area);
    f.render_widget(board_block, board_area);
    render_board(
        f,
        inner,
        BoardView {
            snapshot: timeline.current_snapshot(),
            status: &status,
            cursor: focused.then_some(*app.cursor()),
        },
    );

    render_history(f, history_area, app);

    let status_color = match status.winner() {
        Some(_) => Color::Green,
        None if status.is_over() => Color::Yellow,
        None => Color::White,
    };
    let status_line = Paragraph::new(status_text(&status))
        .style(Style::default().fg(status_color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(" Status "));
    f.render_widget(status_line, status_area);

    let help = Paragraph::new(HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(help, help_area);
}
