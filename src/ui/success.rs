//! Confirmation shown after a successful submit

use crate::state::AppState;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, state: &AppState) {
    let Some(receipt) = &state.receipt else {
        return;
    };

    let mut lines = vec![
        Line::from(Span::styled(
            "✓ Submitted",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(receipt.message.as_str()),
    ];

    if let Some(reference) = &receipt.reference {
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled("Reference: ", Style::default().fg(Color::Gray)),
            Span::raw(reference.as_str()),
        ]));
    }

    if let Some(url) = &receipt.checkout_url {
        lines.push(Line::from(""));
        lines.push(Line::from("Complete your gift on the secure payment page:"));
        lines.push(Line::from(Span::styled(
            url.as_str(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::UNDERLINED),
        )));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!("Questions? Contact {}", state.city.email),
        Style::default().fg(Color::DarkGray),
    )));

    let block = Block::default()
        .title(format!(" {} ", receipt.title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));

    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: false }).block(block),
        area,
    );
}
