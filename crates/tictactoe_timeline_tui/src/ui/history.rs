//! Move-list panel.

use crate::app::App;
use crate::input::Focus;
use crate::render::{move_text, sort_button_text};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState},
};

/// Renders the move history, current entry bold, selection highlighted.
pub fn render_history(f: &mut Frame, area: Rect, app: &App) {
    let items: Vec<ListItem> = app
        .move_list()
        .iter()
        .map(|descriptor| {
            let style = if *descriptor.is_current() {
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(move_text(descriptor)).style(style)
        })
        .collect();

    let focused = *app.focus() == Focus::History;
    let border_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(format!(" History - {} ", sort_button_text(app.timeline().sort_order()))),
        )
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");

    let mut state = ListState::default();
    if focused {
        state.select(Some(*app.selected()));
    }
    f.render_stateful_widget(list, area, &mut state);
}
