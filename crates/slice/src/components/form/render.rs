//! Draws a [`FormView`] into a frame. Pure presentation; every piece of
//! interaction state (focus, edit buffer, errors) comes from the view.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::tui::Frame;

use super::{FieldKind, FormField, FormView};

pub fn render_form(view: &FormView, f: &mut Frame<'_>, area: Rect) {
    let mut lines: Vec<Line> = Vec::new();

    for (idx, field) in view.schema().fields.iter().enumerate() {
        let focused = idx == view.focused_index();
        push_field_lines(&mut lines, view, field, focused);
        lines.push(Line::default());
    }

    lines.push(submit_line(view));
    lines.push(Line::default());
    lines.push(hint_line(view));

    let block = Block::default()
        .title(format!(" {} ", view.schema().title))
        .borders(Borders::ALL)
        .padding(Padding::horizontal(1));

    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn push_field_lines(lines: &mut Vec<Line>, view: &FormView, field: &FormField, focused: bool) {
    let label_style = if focused {
        Style::default().add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    let marker = if focused { "› " } else { "  " };

    match &field.kind {
        FieldKind::Text => {
            let mut spans = vec![
                Span::raw(marker),
                Span::styled(format!("{}: ", field.label), label_style),
            ];
            if focused && view.is_editing() {
                spans.push(Span::styled(
                    view.input_value().to_string(),
                    Style::default().fg(Color::Yellow),
                ));
                spans.push(Span::styled("▌", Style::default().fg(Color::Yellow)));
            } else {
                let value = view.state().get_value(&field.key).unwrap_or("");
                if value.is_empty() {
                    let placeholder = field.placeholder.as_deref().unwrap_or("");
                    spans.push(Span::styled(
                        placeholder.to_string(),
                        Style::default().fg(Color::DarkGray),
                    ));
                } else {
                    spans.push(Span::styled(
                        value.to_string(),
                        value_style(focused),
                    ));
                }
            }
            lines.push(Line::from(spans));
        }
        FieldKind::Select { options } => {
            let value = view.state().get_value(&field.key).unwrap_or("");
            let shown = options
                .iter()
                .find(|o| o.value == value)
                .map(|o| o.label.as_str())
                .unwrap_or(value);
            let arrows = if focused { ("‹ ", " ›") } else { ("  ", "  ") };
            lines.push(Line::from(vec![
                Span::raw(marker),
                Span::styled(format!("{}: ", field.label), label_style),
                Span::raw(arrows.0),
                Span::styled(shown.to_string(), value_style(focused)),
                Span::raw(arrows.1),
            ]));
        }
        FieldKind::Checkbox { options } => {
            lines.push(Line::from(vec![
                Span::raw(marker),
                Span::styled(format!("{}:", field.label), label_style),
            ]));
            let cursor = view.check_cursor(&field.key);
            for (opt_idx, choice) in options.iter().enumerate() {
                let checked = view.state().is_checked(&field.key, &choice.value);
                let tick = if checked { "[x]" } else { "[ ]" };
                let style = if focused && opt_idx == cursor {
                    Style::default().add_modifier(Modifier::REVERSED)
                } else if checked {
                    Style::default().fg(Color::Cyan)
                } else {
                    Style::default()
                };
                lines.push(Line::from(vec![
                    Span::raw("      "),
                    Span::styled(format!("{tick} {}", choice.label), style),
                ]));
            }
        }
    }

    if let Some(error) = view.state().error(&field.key) {
        lines.push(Line::from(vec![
            Span::raw("    "),
            Span::styled(error.to_string(), Style::default().fg(Color::Red)),
        ]));
    } else if let Some(help) = &field.help {
        lines.push(Line::from(vec![
            Span::raw("    "),
            Span::styled(help.clone(), Style::default().fg(Color::DarkGray)),
        ]));
    }
}

fn value_style(focused: bool) -> Style {
    if focused {
        Style::default().add_modifier(Modifier::REVERSED)
    } else {
        Style::default().fg(Color::Cyan)
    }
}

fn submit_line(view: &FormView) -> Line<'static> {
    let focused = view.is_submit_focused();
    let marker = if focused { "› " } else { "  " };
    let style = if !view.submit_enabled() {
        Style::default().fg(Color::DarkGray).dim()
    } else if focused {
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD | Modifier::REVERSED)
    } else {
        Style::default().fg(Color::Green)
    };
    Line::from(vec![
        Span::raw(marker),
        Span::styled("[ Place Order ]", style),
    ])
}

fn hint_line(view: &FormView) -> Line<'static> {
    let hint = if view.is_editing() {
        "type to edit  Enter done  Esc cancel"
    } else if view.is_submit_focused() {
        "Enter place order  ↑/↓ move"
    } else {
        match view
            .schema()
            .fields
            .get(view.focused_index())
            .map(|f| &f.kind)
        {
            Some(FieldKind::Text) => "Enter edit  ↑/↓ move",
            Some(FieldKind::Select { .. }) => "←/→ choose  ↑/↓ move",
            Some(FieldKind::Checkbox { .. }) => "←/→ move  Space toggle  ↑/↓ next",
            None => "↑/↓ move",
        }
    };
    Line::from(Span::styled(hint, Style::default().fg(Color::DarkGray)))
}
