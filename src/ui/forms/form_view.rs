//! The form screen: fields, step indicator and submit button

use super::field_renderer::{draw_field, field_height, FieldView};
use super::wizard_view::draw_steps;
use crate::platform::{BACK_SHORTCUT, SUBMIT_SHORTCUT};
use crate::state::{AppState, FormSession};
use crate::ui::components::{render_button, render_notice_dialog, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Index of the first field to draw so the active one fits in `available` rows
pub fn first_visible(heights: &[u16], active: usize, available: u16) -> usize {
    let active = active.min(heights.len().saturating_sub(1));
    let mut first = 0;
    while first < active {
        let used: u16 = heights[first..=active].iter().sum();
        if used <= available {
            break;
        }
        first += 1;
    }
    first
}

fn submit_label(session: &FormSession) -> String {
    if session.controller.is_submitting() {
        "Submitting...".to_string()
    } else if session.is_final_step() {
        format!("Submit ({SUBMIT_SHORTCUT})")
    } else {
        format!("Continue ({SUBMIT_SHORTCUT})")
    }
}

pub fn draw_form(frame: &mut Frame, area: Rect, state: &AppState) {
    let Some(session) = state.form.as_ref() else {
        return;
    };

    let block = Block::default()
        .title(format!(" {} ", session.kind.title()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),             // Description or steps
            Constraint::Min(3),                // Fields
            Constraint::Length(BUTTON_HEIGHT), // Buttons
        ])
        .split(inner);

    match &session.wizard {
        Some(wizard) => draw_steps(frame, chunks[0], wizard),
        None => frame.render_widget(
            Paragraph::new(Line::from(session.kind.description()))
                .style(Style::default().fg(Color::Gray)),
            chunks[0],
        ),
    }

    draw_fields(frame, chunks[1], session);
    draw_buttons(frame, chunks[2], session);

    if let Some(message) = session.controller.submit_error() {
        render_notice_dialog(frame, "Submission failed", message);
    }
}

fn draw_fields(frame: &mut Frame, area: Rect, session: &FormSession) {
    let views: Vec<FieldView> = session
        .visible_fields()
        .iter()
        .enumerate()
        .filter_map(|(i, name)| FieldView::from_session(session, name, i == session.active_field))
        .collect();
    let heights: Vec<u16> = views.iter().map(field_height).collect();
    let first = first_visible(&heights, session.active_field, area.height);

    let mut y = area.y;
    let bottom = area.y + area.height;
    for (view, height) in views.iter().zip(&heights).skip(first) {
        if y >= bottom {
            break;
        }
        let field_area = Rect {
            x: area.x,
            y,
            width: area.width,
            height: (*height).min(bottom - y),
        };
        draw_field(frame, field_area, view);
        y += height;
    }
}

fn draw_buttons(frame: &mut Frame, area: Rect, session: &FormSession) {
    let show_back = session.wizard.is_some_and(|w| !w.is_first());
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(if show_back { 16 } else { 0 }),
            Constraint::Length(24),
        ])
        .split(area);

    if show_back {
        render_button(
            frame,
            chunks[1],
            &format!("Back ({BACK_SHORTCUT})"),
            !session.controller.is_submitting(),
            Color::Gray,
        );
    }

    let enabled = !session.controller.is_submitting()
        && (!session.is_final_step() || session.can_submit());
    render_button(frame, chunks[2], &submit_label(session), enabled, Color::Green);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::FormKind;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_first_visible_keeps_top_when_everything_fits() {
        assert_eq!(first_visible(&[3, 3, 6], 2, 20), 0);
    }

    #[test]
    fn test_first_visible_scrolls_to_active() {
        // 3 + 3 + 6 + 3 = 15 rows, only 10 available
        assert_eq!(first_visible(&[3, 3, 6, 3], 3, 10), 2);
        assert_eq!(first_visible(&[3, 3, 6, 3], 0, 10), 0);
    }

    #[test]
    fn test_first_visible_handles_oversized_field() {
        assert_eq!(first_visible(&[3, 12], 1, 10), 1);
        assert_eq!(first_visible(&[], 0, 10), 0);
    }

    #[test]
    fn test_submit_label_per_step() {
        let session = FormSession::new(FormKind::VetFund);
        assert_eq!(submit_label(&session), "Continue (Ctrl+S)");
        let session = FormSession::new(FormKind::Contact);
        assert_eq!(submit_label(&session), "Submit (Ctrl+S)");
    }

    #[test]
    fn test_submit_label_while_in_flight() {
        let mut session = FormSession::new(FormKind::Contact);
        session.controller.set_value("name", "Jane Doe");
        session.controller.set_value("email", "jane@example.com");
        session
            .controller
            .set_value("message", "Is there a colony near Zilker Park?");
        assert!(session.controller.begin_submit().is_ok());
        assert_eq!(submit_label(&session), "Submitting...");
    }
}
