//! Main menu listing the chapter's forms and tools

use crate::state::{AppState, MenuEntry};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(4)])
        .split(area);

    let items: Vec<ListItem> = state
        .menu
        .iter()
        .map(|entry| {
            let color = match entry {
                MenuEntry::Form(_) => Color::White,
                MenuEntry::Checklist | MenuEntry::CityInfo => Color::Magenta,
            };
            ListItem::new(Line::from(Span::styled(
                format!(" {} ", entry.label()),
                Style::default().fg(color),
            )))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .title(format!(" {} ", state.city.org_name_short))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .highlight_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("› ");

    let mut list_state = ListState::default().with_selected(Some(state.menu_selected));
    frame.render_stateful_widget(list, chunks[0], &mut list_state);

    let description = state
        .selected_entry()
        .map(|entry| entry.description())
        .unwrap_or_default();
    frame.render_widget(
        Paragraph::new(description)
            .style(Style::default().fg(Color::Gray))
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray)),
            ),
        chunks[1],
    );
}
