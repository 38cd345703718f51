//! Status bar widget

use ratatui::{Frame, prelude::*, text::Line, widgets::Paragraph};

use crate::keys::{self, HintContext, KeyHint};

/// Prefix spans followed by one badge per key hint
fn build_status_line(prefix: Vec<Span<'static>>, hints: &[KeyHint]) -> Line<'static> {
    let mut spans = prefix;

    for hint in hints {
        if !spans.is_empty() {
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(
            format!(" [{}] {} ", hint.key, hint.label),
            Style::default().fg(Color::Black).bg(hint.color),
        ));
    }

    Line::from(spans)
}

/// Render the status bar: visible commit count, then key hints
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    ctx: &HintContext,
    active: usize,
    total: usize,
) {
    let prefix = vec![Span::styled(
        format!(" {active}/{total} commits "),
        Style::default().fg(Color::Black).bg(Color::Yellow),
    )];
    let status = build_status_line(prefix, &keys::current_hints(ctx));
    frame.render_widget(Paragraph::new(status), area);
}
