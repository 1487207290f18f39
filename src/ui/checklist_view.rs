//! New pet checklist screen

use crate::checklist;
use crate::state::AppState;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, state: &AppState) {
    let view = &state.checklist;
    let progress = &view.progress;
    let pet = view.pet();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Progress
            Constraint::Min(5),    // Items
            Constraint::Length(4), // Details
        ])
        .split(area);

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(format!(" New {} Checklist ", pet.label()))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .gauge_style(Style::default().fg(Color::Green))
        .percent(progress.percent().min(100))
        .label(format!(
            "{} of {} done",
            progress.checked_count(),
            progress.total()
        ));
    frame.render_widget(gauge, chunks[0]);

    // Category headings are not selectable, so the list position of the
    // selected item is offset by the headings above it.
    let mut items = Vec::new();
    let mut selected_row = None;
    let mut index = 0;
    for category in checklist::categories(pet) {
        items.push(ListItem::new(Line::from(Span::styled(
            category.title,
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        ))));
        for item in category.items {
            if index == view.selected {
                selected_row = Some(items.len());
            }
            let done = progress.is_checked(item.id);
            let mark = if done { "[x]" } else { "[ ]" };
            let style = if done {
                Style::default().fg(Color::DarkGray)
            } else {
                Style::default()
            };
            items.push(ListItem::new(Line::from(vec![
                Span::styled(format!("  {mark} {}", item.label), style),
                Span::styled(format!("  {}", item.cost), Style::default().fg(Color::Gray)),
            ])));
            index += 1;
        }
    }

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .highlight_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));
    let mut list_state = ListState::default().with_selected(selected_row);
    frame.render_stateful_widget(list, chunks[1], &mut list_state);

    let details = view
        .selected_item()
        .map(|item| item.description)
        .unwrap_or_default();
    frame.render_widget(
        Paragraph::new(details)
            .style(Style::default().fg(Color::Gray))
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray)),
            ),
        chunks[2],
    );
}
