//! Pure view/render functions for the TUI.
//!
//! This module contains all rendering logic. Functions here:
//! - Take `&AppState` by immutable reference
//! - Draw to a ratatui Frame
//! - Never mutate state or return effects

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::alert::render_alert_line;
use crate::form::render_form_lines;
use crate::state::AppState;

/// Width of the centered auth card.
const CARD_WIDTH: u16 = 56;

/// Renders the entire TUI to the frame.
pub fn render(state: &AppState, frame: &mut Frame) {
    let area = frame.area();

    let submitting = state.tasks.is_any_running();
    let mut body = render_form_lines(&state.form, submitting);

    // Alert banner sits above the tabs, replacing any prior one.
    let alert_line = state.alert.current().map(render_alert_line);
    let mut lines = Vec::with_capacity(body.len() + 2);
    lines.push(alert_line.unwrap_or_default());
    lines.push(Line::from(""));
    lines.append(&mut body);

    // +2 for the border, +1 for the footer hints.
    let card_height = (lines.len() as u16) + 3;
    let card = centered_area(area, CARD_WIDTH, card_height);

    frame.render_widget(Clear, card);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(" Portico ")
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));
    frame.render_widget(block, card);

    let inner = Rect::new(
        card.x + 2,
        card.y + 1,
        card.width.saturating_sub(4),
        card.height.saturating_sub(2),
    );
    frame.render_widget(Paragraph::new(lines), inner);

    render_hints(frame, inner);
}

/// Renders the keyboard hints on the last line of the card.
fn render_hints(frame: &mut Frame, inner: Rect) {
    let hints = [
        ("Tab", "next field"),
        ("←/→", "switch form"),
        ("Enter", "submit"),
        ("Esc", "quit"),
    ];

    let mut spans = Vec::new();
    for (i, (key, action)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" • ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(*key, Style::default().fg(Color::Cyan)));
        spans.push(Span::styled(
            format!(" {action}"),
            Style::default().fg(Color::DarkGray),
        ));
    }

    let hints_area = Rect::new(
        inner.x,
        inner.y + inner.height.saturating_sub(1),
        inner.width,
        1,
    );
    frame.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
        hints_area,
    );
}

/// Calculates the centered card area within the terminal.
fn centered_area(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width.saturating_sub(2));
    let height = height.min(area.height);

    let x = (area.width.saturating_sub(width)) / 2;
    let y = (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}
