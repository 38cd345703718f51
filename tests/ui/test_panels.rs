//! Rendering tests for the summary, files, selection and time panes

use insta::assert_snapshot;
use ratatui::{Frame, Terminal, backend::TestBackend, layout::Rect};

use locscope::model::CommitLog;
use locscope::timeline::{BrushRegion, ViewController};

use super::common::{buffer_lines, four_commit_log};

/// Draw into a fresh terminal and return its rows
fn draw_with(width: u16, height: u16, render: impl FnOnce(&mut Frame, Rect)) -> Vec<String> {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal
        .draw(|frame| render(frame, frame.area()))
        .unwrap();
    buffer_lines(terminal.backend())
}

#[test]
fn test_stats_panel() {
    let controller = ViewController::new(four_commit_log(), 1);
    let lines = draw_with(80, 3, |frame, area| {
        controller.views().stats.render(frame, area);
    });

    assert_snapshot!(lines.join("\n"), @r"
    ┌ Summary ─────────────────────────────────────────────────────────────────────┐
    │COMMITS 4  FILES 4  TOTAL LOC 21  MAX DEPTH 3  LONGEST LINE 37  MAX LINES 9   │
    └──────────────────────────────────────────────────────────────────────────────┘
    ");
}

#[test]
fn test_stats_panel_follows_time_bound() {
    let mut controller = ViewController::new(four_commit_log(), 1);
    controller.advance_to_step(1).unwrap();
    let lines = draw_with(80, 3, |frame, area| {
        controller.views().stats.render(frame, area);
    });

    let text = lines.join("\n");
    assert!(text.contains("COMMITS 2  FILES 3  TOTAL LOC 15"), "{text}");
}

#[test]
fn test_files_panel_rows() {
    let controller = ViewController::new(four_commit_log(), 1);
    let lines = draw_with(30, 8, |frame, area| {
        controller.views().files.render(frame, area);
    });

    assert!(lines[0].starts_with("┌ Files "), "{lines:?}");
    assert_eq!(lines[1], "│app.js 12 lines             │");
    assert_eq!(lines[2], "│●●●●●●●●●●●●                │");
    assert_eq!(lines[3], "│index.html 5 lines          │");
    assert_eq!(lines[4], "│●●●●●                       │");
    assert_eq!(lines[5], "│style.css 2 lines           │");
}

#[test]
fn test_files_panel_wraps_units() {
    let controller = ViewController::new(four_commit_log(), 1);
    let lines = draw_with(10, 6, |frame, area| {
        controller.views().files.render(frame, area);
    });

    // 12 units over 8 columns
    assert_eq!(lines[2], "│●●●●●●●●│");
    assert_eq!(lines[3], "│●●●●    │");
}

#[test]
fn test_files_panel_empty() {
    let controller = ViewController::new(CommitLog::default(), 1);
    let lines = draw_with(60, 8, |frame, area| {
        controller.views().files.render(frame, area);
    });

    let text = lines.join("\n");
    assert!(text.contains("No files edited yet."), "{text}");
}

#[test]
fn test_selection_panel_breakdown() {
    let mut controller = ViewController::new(four_commit_log(), 1);
    controller.set_brush_region(Some(BrushRegion::from_corners((0.0, 0.0), (1000.0, 600.0))));

    let views = controller.views();
    let lines = draw_with(40, 7, |frame, area| {
        views.selection.render(frame, area, views.files.colors());
    });

    assert!(lines[0].starts_with("┌ Selection "), "{lines:?}");
    assert!(lines[1].contains("4 commits selected"), "{lines:?}");
    assert!(lines[2].contains("html") && lines[2].contains("5 lines (23.8%)"), "{lines:?}");
    assert!(lines[3].contains("css") && lines[3].contains("2 lines (9.5%)"), "{lines:?}");
    assert!(lines[4].contains("js") && lines[4].contains("12 lines (57.1%)"), "{lines:?}");
    assert!(lines[5].contains("md") && lines[5].contains("2 lines (9.5%)"), "{lines:?}");
}

#[test]
fn test_selection_panel_empty_without_brush() {
    let controller = ViewController::new(four_commit_log(), 1);
    let views = controller.views();
    let lines = draw_with(40, 5, |frame, area| {
        views.selection.render(frame, area, views.files.colors());
    });

    assert_eq!(lines[1], "│                                      │");
    assert_eq!(lines[2], "│                                      │");
}

#[test]
fn test_time_control_label() {
    let mut controller = ViewController::new(four_commit_log(), 1);
    controller.advance_to_step(0).unwrap();
    let lines = draw_with(60, 3, |frame, area| {
        controller.views().time_control.render(frame, area);
    });

    assert!(lines[0].starts_with("┌ Time "), "{lines:?}");
    assert!(lines[1].contains("October 1, 2024 at 8:00 AM"), "{lines:?}");
}
