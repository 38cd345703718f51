//! Rendering tests for the help overlay

use ratatui::{Terminal, backend::TestBackend};

use locscope::ui::widgets::render_help_panel;

use super::common::buffer_lines;

#[test]
fn test_help_panel_full() {
    let mut terminal = Terminal::new(TestBackend::new(80, 40)).unwrap();
    terminal
        .draw(|frame| {
            render_help_panel(frame, frame.area());
        })
        .unwrap();

    let lines = buffer_lines(terminal.backend());
    let text = lines.join("\n");
    for section in ["Global:", "Time:", "Story:", "Plot:"] {
        assert!(text.contains(section), "missing {section}\n{text}");
    }
    assert!(text.contains("Toggle help"), "{text}");
    assert!(text.contains("Clear selection"), "{text}");

    // Centered: the panel leaves the outer columns blank
    assert!(lines.iter().all(|line| !line.starts_with('│')));
}

#[test]
fn test_help_panel_narrow() {
    // Narrower than the panel: clipped, never panics
    let mut terminal = Terminal::new(TestBackend::new(30, 12)).unwrap();
    terminal
        .draw(|frame| {
            render_help_panel(frame, frame.area());
        })
        .unwrap();

    let text = buffer_lines(terminal.backend()).join("\n");
    assert!(text.contains("Key bindings:"), "{text}");
}
