//! Help panel widget
//!
//! Key bindings grouped by section, drawn as an overlay in the middle of the
//! screen.

use ratatui::{
    layout::{Constraint, Flex, Layout},
    prelude::*,
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::keys;

const PANEL_WIDTH: u16 = 52;

/// Build all help panel lines
pub fn build_help_lines() -> Vec<Line<'static>> {
    let mut lines = vec![Line::from("Key bindings:".bold()), Line::from("")];

    push_section(&mut lines, "Global", keys::GLOBAL_KEYS);
    push_section(&mut lines, "Time", keys::TIME_KEYS);
    push_section(&mut lines, "Story", keys::NARRATIVE_KEYS);
    push_section(&mut lines, "Plot", keys::PLOT_KEYS);

    lines
}

fn push_section(lines: &mut Vec<Line<'static>>, title: &str, entries: &[keys::KeyBindEntry]) {
    lines.push(Line::from(format!("{title}:")).underlined());

    for entry in entries {
        lines.push(Line::from(vec![
            Span::styled(format!("  {:10}", entry.key), Style::default().fg(Color::Yellow)),
            Span::raw(entry.description.to_string()),
        ]));
    }

    // Blank separator
    lines.push(Line::from(""));
}

/// Centered overlay area sized to the help content
pub fn help_area(area: Rect, content_height: u16) -> Rect {
    let [vertical] = Layout::vertical([Constraint::Length(content_height.saturating_add(2))])
        .flex(Flex::Center)
        .areas(area);
    let [centered] = Layout::horizontal([Constraint::Length(PANEL_WIDTH)])
        .flex(Flex::Center)
        .areas(vertical);
    centered
}

/// Render help content showing key bindings over `area`
pub fn render_help_panel(frame: &mut Frame, area: Rect) {
    let title = Line::from(" locscope - Help ").bold().white().centered();
    let lines = build_help_lines();
    let panel = help_area(area, lines.len() as u16);

    frame.render_widget(Clear, panel);
    frame.render_widget(
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(title)),
        panel,
    );
}
