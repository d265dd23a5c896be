//! Form feature view.
//!
//! Produces the lines for the auth card body: mode tabs, one input line per
//! field of the presented form, and the inline validation error if set.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use super::state::{Field, FormMode, FormState};

/// Renders the form body as a list of lines.
pub fn render_form_lines(form: &FormState, submitting: bool) -> Vec<Line<'static>> {
    let mut lines = vec![render_tabs_line(form.mode), Line::from("")];

    let label_width = form
        .mode
        .fields()
        .iter()
        .map(|field| field.label().width())
        .max()
        .unwrap_or(0);

    for (idx, &field) in form.mode.fields().iter().enumerate() {
        let focused = idx == form.focus;
        let value = form.field(form.mode, field).unwrap_or_default();
        lines.push(render_field_line(field, value, label_width, focused));
    }

    lines.push(Line::from(""));
    if let Some(error) = &form.error {
        lines.push(Line::from(Span::styled(
            error.clone(),
            Style::default().fg(Color::Red),
        )));
    } else if submitting {
        lines.push(Line::from(Span::styled(
            "Submitting...",
            Style::default().fg(Color::Yellow),
        )));
    } else {
        lines.push(Line::from(""));
    }

    lines
}

fn render_tabs_line(mode: FormMode) -> Line<'static> {
    let tab = |m: FormMode| {
        let style = if m == mode {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        Span::styled(format!(" {} ", m.title()), style)
    };

    Line::from(vec![
        tab(FormMode::Login),
        Span::styled("│", Style::default().fg(Color::DarkGray)),
        tab(FormMode::Signup),
    ])
}

fn render_field_line(
    field: Field,
    value: &str,
    label_width: usize,
    focused: bool,
) -> Line<'static> {
    let display = if field.is_secret() {
        "•".repeat(value.chars().count())
    } else {
        value.to_string()
    };

    let label_style = if focused {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let padding = " ".repeat(label_width.saturating_sub(field.label().width()));

    let mut spans = vec![
        Span::styled(format!("{}{}  ", field.label(), padding), label_style),
        Span::styled(
            "> ",
            Style::default().fg(if focused { Color::Cyan } else { Color::DarkGray }),
        ),
        Span::styled(display, Style::default().fg(Color::White)),
    ];
    if focused {
        spans.push(Span::styled("█", Style::default().fg(Color::Cyan)));
    }

    Line::from(spans)
}
