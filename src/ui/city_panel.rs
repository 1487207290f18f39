//! Chapter contact details, local resources and programs

use crate::city::CityConfig;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

fn heading(text: &str) -> Line<'_> {
    Line::from(Span::styled(
        text,
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    ))
}

fn row<'a>(label: &'a str, value: &'a str) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("{label:<16}"), Style::default().fg(Color::Gray)),
        Span::raw(value),
    ])
}

fn contact_lines(city: &'static CityConfig) -> Vec<Line<'static>> {
    let mut lines = vec![
        heading("Contact"),
        row("Email", city.email),
        row("Website", city.site_url),
    ];
    if let Some(phone) = city.phone {
        lines.push(row("Phone", phone));
    }
    lines.push(row("Region", city.region));

    let resources = &city.resources;
    lines.push(Line::from(""));
    lines.push(heading("Local resources"));
    lines.push(row("Shelter", resources.shelter_name));
    if let Some(url) = resources.shelter_url {
        lines.push(row("", url));
    }
    if let Some(tnr) = resources.tnr_program {
        lines.push(row("TNR program", tnr));
    }
    if let Some(url) = resources.tnr_url {
        lines.push(row("", url));
    }
    if let Some(vet) = resources.emergency_vet {
        lines.push(row("Emergency vet", vet));
    }
    if let Some(phone) = resources.emergency_vet_phone {
        lines.push(row("", phone));
    }
    lines
}

pub fn draw(frame: &mut Frame, area: Rect, city: &'static CityConfig) {
    let block = Block::default()
        .title(format!(" {} ", city.org_name))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .margin(1)
        .split(inner);

    frame.render_widget(
        Paragraph::new(contact_lines(city)).wrap(Wrap { trim: true }),
        chunks[0],
    );

    let mut programs = vec![heading("Programs")];
    programs.extend(city.features.entries().into_iter().map(|(label, enabled)| {
        let (mark, color) = if enabled {
            ("✓", Color::Green)
        } else {
            ("✗", Color::DarkGray)
        };
        Line::from(vec![
            Span::styled(format!("{mark} "), Style::default().fg(color)),
            Span::styled(label, Style::default().fg(color)),
        ])
    }));
    frame.render_widget(Paragraph::new(programs), chunks[1]);
}
