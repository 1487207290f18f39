//! Step indicator for multi-step forms

use crate::forms::{Wizard, WizardStep};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    Done,
    Current,
    Upcoming,
}

/// Every step in order with its status relative to `current`
pub fn step_statuses<S: WizardStep>(current: S) -> Vec<(S, StepStatus)> {
    let mut steps = Vec::with_capacity(S::count());
    let mut step = Some(S::first());
    while let Some(s) = step {
        let status = match s.position().cmp(&current.position()) {
            std::cmp::Ordering::Less => StepStatus::Done,
            std::cmp::Ordering::Equal => StepStatus::Current,
            std::cmp::Ordering::Greater => StepStatus::Upcoming,
        };
        steps.push((s, status));
        step = s.next();
    }
    steps
}

pub fn draw_steps<S: WizardStep>(frame: &mut Frame, area: Rect, wizard: &Wizard<S>) {
    let current = wizard.current();
    let mut spans = vec![Span::styled(
        format!("Step {} of {}  ", current.position(), S::count()),
        Style::default().fg(Color::Gray),
    )];

    for (i, (step, status)) in step_statuses(current).into_iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" › ", Style::default().fg(Color::DarkGray)));
        }
        let style = match status {
            StepStatus::Done => Style::default().fg(Color::Green),
            StepStatus::Current => Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            StepStatus::Upcoming => Style::default().fg(Color::DarkGray),
        };
        let mark = if status == StepStatus::Done { "✓ " } else { "" };
        spans.push(Span::styled(format!("{mark}{}", step.title()), style));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
