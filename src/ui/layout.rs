//! Layout components (chapter sidebar, status bar)

use crate::platform::{BACK_SHORTCUT, RESET_SHORTCUT, SUBMIT_SHORTCUT};
use crate::state::{AppState, FormSession, View};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

const SIDEBAR_WIDTH: u16 = 28;
const QUIT_HINT: &str = " ^C:quit ";

/// Create the main layout with sidebar. The last row is left for the status bar.
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)])
        .split(rows[0]);

    (chunks[0], chunks[1])
}

/// Field progress marker: `!` for a shown error, `✓` for a filled field
fn field_marker(session: &FormSession, name: &str) -> Span<'static> {
    let controller = &session.controller;
    if controller.field_error(name).is_some() {
        Span::styled("! ", Style::default().fg(Color::Red))
    } else if controller.value(name).is_some_and(|v| !v.is_blank()) {
        Span::styled("✓ ", Style::default().fg(Color::Green))
    } else {
        Span::styled("· ", Style::default().fg(Color::DarkGray))
    }
}

/// Draw the chapter sidebar. While a form is open it lists the form's fields.
pub fn draw_sidebar(frame: &mut Frame, area: Rect, state: &AppState) {
    let city = state.city;
    let mut lines = vec![
        Line::from(Span::styled(
            city.org_name,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            city.location(),
            Style::default().fg(Color::Gray),
        )),
        Line::from(Span::styled(
            city.tagline,
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
    ];

    match (&state.current_view, &state.form) {
        (View::Form, Some(session)) => {
            lines.push(Line::from(Span::styled(
                "Fields",
                Style::default().add_modifier(Modifier::BOLD),
            )));
            let schema = session.controller.schema();
            for (i, name) in session.visible_fields().iter().enumerate() {
                let label = schema.get_field(name).map_or(*name, |f| f.label);
                let style = if i == session.active_field {
                    Style::default().fg(Color::Cyan)
                } else {
                    Style::default()
                };
                lines.push(Line::from(vec![
                    field_marker(session, name),
                    Span::styled(label.to_string(), style),
                ]));
            }
        }
        _ => {
            lines.push(Line::from(Span::styled(
                city.email,
                Style::default().fg(Color::Gray),
            )));
            if let Some(phone) = city.phone {
                lines.push(Line::from(Span::styled(
                    phone,
                    Style::default().fg(Color::Gray),
                )));
            }
        }
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(block),
        area,
    );
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let status_area = Rect {
        x: 0,
        y: area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    let mut spans = vec![
        Span::styled(
            format!(" {} ", state.city.slug),
            Style::default().fg(Color::Black).bg(Color::Green),
        ),
        Span::raw(" "),
        Span::styled(view_hints(state), Style::default().fg(Color::Gray)),
    ];

    if let Some(msg) = &state.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg.as_str(), Style::default().fg(Color::Yellow)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, status_area);

    let quit_area = Rect {
        x: area.width.saturating_sub(QUIT_HINT.len() as u16),
        y: area.height.saturating_sub(1),
        width: (QUIT_HINT.len() as u16).min(area.width),
        height: 1,
    };
    let quit_widget =
        Paragraph::new(QUIT_HINT).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Keyboard hints for the current view
fn view_hints(state: &AppState) -> String {
    match state.current_view {
        View::Menu => "j/k:nav  Enter:open  q:quit".to_string(),
        View::Form => {
            let wizard = state.form.as_ref().is_some_and(|f| f.wizard.is_some());
            let back = if wizard {
                format!("  {BACK_SHORTCUT}:back")
            } else {
                String::new()
            };
            format!(
                "Tab:next  ←/→:choose  Space:toggle  {SUBMIT_SHORTCUT}:submit  {RESET_SHORTCUT}:clear{back}  Esc:cancel"
            )
        }
        View::Success => "Enter:menu  n:submit another".to_string(),
        View::Checklist => "j/k:nav  Space:check  Tab:cat/dog  Esc:back".to_string(),
        View::CityInfo => "Esc:back".to_string(),
    }
}
