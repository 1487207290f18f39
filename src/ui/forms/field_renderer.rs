//! Field rendering for the intake forms
//!
//! Every input kind is drawn as a bordered box titled with the field label.
//! Inline errors appear only once a field has been touched.

use crate::state::FormSession;
use crate::validation::{Choice, FieldValue, InputKind};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

const CURSOR: &str = "▌";
const TEXTAREA_ROWS: u16 = 4;

/// Everything needed to draw one field
#[derive(Debug, Clone, PartialEq)]
pub struct FieldView<'a> {
    pub label: &'a str,
    pub input: InputKind,
    /// What the user typed, for text-like inputs
    pub text: String,
    pub value: Option<&'a FieldValue>,
    pub is_active: bool,
    pub required: bool,
    pub touched: bool,
    pub error: Option<&'a str>,
    /// Highlighted option of a multi-select
    pub option_cursor: usize,
}

impl<'a> FieldView<'a> {
    /// Build the view of a declared field. `None` for unknown names.
    pub fn from_session(session: &'a FormSession, name: &str, is_active: bool) -> Option<Self> {
        let field = session.controller.schema().get_field(name)?;
        let controller = &session.controller;
        Some(Self {
            label: field.label,
            input: field.input,
            text: controller.input_text(name),
            value: controller.value(name),
            is_active,
            required: field.is_required(),
            touched: controller.is_touched(name),
            error: controller.errors().get(name),
            option_cursor: session.option_cursor,
        })
    }

    pub fn visible_error(&self) -> Option<&'a str> {
        visible_error(self.touched, self.error)
    }
}

/// Inline error text is shown iff the field was touched and has an error
pub fn visible_error(touched: bool, error: Option<&str>) -> Option<&str> {
    if touched {
        error
    } else {
        None
    }
}

/// Rows a field needs, borders and error line included
pub fn field_height(view: &FieldView) -> u16 {
    let body = match view.input {
        InputKind::TextArea => TEXTAREA_ROWS,
        InputKind::MultiSelect(choices) => choices.len().max(1) as u16,
        _ => 1,
    };
    let error = u16::from(view.visible_error().is_some());
    body + error + 2
}

pub fn field_title(label: &str, required: bool) -> String {
    if required {
        format!(" {label} * ")
    } else {
        format!(" {label} ")
    }
}

pub fn choice_label(choices: &[Choice], value: &str) -> Option<&'static str> {
    choices
        .iter()
        .find(|(v, _)| *v == value)
        .map(|(_, label)| *label)
}

fn cursor_span(is_active: bool) -> Span<'static> {
    if is_active {
        Span::styled(CURSOR, Style::default().fg(Color::Cyan))
    } else {
        Span::raw("")
    }
}

fn placeholder(is_active: bool) -> Span<'static> {
    if is_active {
        Span::raw("")
    } else {
        Span::styled("(empty)", Style::default().fg(Color::DarkGray))
    }
}

fn body_lines(view: &FieldView) -> Vec<Line<'static>> {
    let value_style = if view.is_active {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::Gray)
    };

    match view.input {
        InputKind::Text | InputKind::Email | InputKind::Phone | InputKind::Number => {
            let value = if view.text.is_empty() {
                placeholder(view.is_active)
            } else {
                Span::styled(view.text.clone(), value_style)
            };
            vec![Line::from(vec![value, cursor_span(view.is_active)])]
        }
        InputKind::TextArea => {
            if view.text.is_empty() {
                return vec![Line::from(vec![
                    placeholder(view.is_active),
                    cursor_span(view.is_active),
                ])];
            }
            let mut lines: Vec<Line> = view
                .text
                .split('\n')
                .map(|l| Line::from(Span::styled(l.to_string(), value_style)))
                .collect();
            if let Some(last) = lines.last_mut() {
                last.spans.push(cursor_span(view.is_active));
            }
            lines
        }
        InputKind::Checkbox => {
            let checked = view.value.and_then(FieldValue::as_bool).unwrap_or(false);
            let mark = if checked { "[x]" } else { "[ ]" };
            let mut spans = vec![Span::styled(mark, value_style)];
            if view.is_active {
                spans.push(Span::styled(
                    "  Space to toggle",
                    Style::default().fg(Color::DarkGray),
                ));
            }
            vec![Line::from(spans)]
        }
        InputKind::Select(choices) | InputKind::Radio(choices) => {
            let current = view.value.and_then(FieldValue::as_text).unwrap_or("");
            let shown = choice_label(choices, current).unwrap_or("choose");
            let mut spans = vec![Span::styled(format!("‹ {shown} ›"), value_style)];
            if view.is_active {
                spans.push(Span::styled(
                    "  ←/→ to change",
                    Style::default().fg(Color::DarkGray),
                ));
            }
            vec![Line::from(spans)]
        }
        InputKind::MultiSelect(choices) => {
            let selected = view.value.and_then(FieldValue::as_list).unwrap_or(&[]);
            choices
                .iter()
                .enumerate()
                .map(|(i, (value, label))| {
                    let checked = selected.iter().any(|s| s.as_str() == *value);
                    let highlighted = view.is_active && i == view.option_cursor;
                    let pointer = if highlighted { "› " } else { "  " };
                    let mark = if checked { "[x]" } else { "[ ]" };
                    let style = if highlighted {
                        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
                    } else {
                        value_style
                    };
                    Line::from(Span::styled(format!("{pointer}{mark} {label}"), style))
                })
                .collect()
        }
    }
}

/// Draw a form field
pub fn draw_field(frame: &mut Frame, area: Rect, view: &FieldView) {
    let error = view.visible_error();
    let border_style = match (view.is_active, error.is_some()) {
        (_, true) => Style::default().fg(Color::Red),
        (true, false) => Style::default().fg(Color::Cyan),
        (false, false) => Style::default().fg(Color::DarkGray),
    };

    let mut lines = body_lines(view);
    if let Some(message) = error {
        lines.push(Line::from(Span::styled(
            message.to_string(),
            Style::default().fg(Color::Red),
        )));
    }

    let block = Block::default()
        .title(field_title(view.label, view.required))
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(block),
        area,
    );
}
