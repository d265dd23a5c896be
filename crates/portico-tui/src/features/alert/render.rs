//! Alert feature view.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use super::state::{Alert, AlertKind};

/// Renders the alert banner line.
pub fn render_alert_line(alert: &Alert) -> Line<'static> {
    let (symbol, color) = match alert.kind {
        AlertKind::Success => ("✓", Color::Green),
        AlertKind::Error => ("✗", Color::Red),
    };

    Line::from(vec![
        Span::styled(
            format!("{symbol} "),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
        Span::styled(alert.message.clone(), Style::default().fg(color)),
        Span::styled("  (Esc to dismiss)", Style::default().fg(Color::DarkGray)),
    ])
}
