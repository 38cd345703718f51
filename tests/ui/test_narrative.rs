//! Rendering and scroll tests for the story pane

use crossterm::event::{KeyModifiers, MouseEvent, MouseEventKind};
use ratatui::{Terminal, backend::TestBackend};

use locscope::timeline::ViewController;
use locscope::ui::views::{NarrativeAction, NarrativeView};

use super::common::{buffer_text, four_commit_log};

fn wheel(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

fn draw(view: &NarrativeView, pinned: Option<usize>) -> String {
    let mut terminal = Terminal::new(TestBackend::new(50, 12)).unwrap();
    terminal
        .draw(|frame| view.render(frame, frame.area(), pinned))
        .unwrap();
    buffer_text(terminal.backend())
}

#[test]
fn test_narrative_blocks_follow_commit_order() {
    let view = NarrativeView::new(&four_commit_log());
    let blocks = view.blocks();

    assert_eq!(blocks.len(), 4);
    assert!(
        blocks[0]
            .text
            .starts_with("On Tuesday, October 1, 2024 at 8:00 AM, I made my first commit.")
    );
    assert!(blocks[0].text.ends_with("I edited 6 lines across 2 files."));
    assert!(blocks[3].text.contains("I made another commit"));
    assert_eq!(blocks[3].url, "https://github.com/me/site/commit/c4");
}

#[test]
fn test_narrative_wheel_pins_step() {
    let log = four_commit_log();
    let mut view = NarrativeView::new(&log);
    let mut controller = ViewController::new(log, 1);

    let text = draw(&view, None);
    assert!(text.starts_with("┌ Story "), "{text}");

    // Outside the pane: ignored
    assert_eq!(
        view.handle_mouse(wheel(MouseEventKind::ScrollDown, 60, 3)),
        NarrativeAction::None
    );

    let action = view.handle_mouse(wheel(MouseEventKind::ScrollDown, 10, 5));
    assert_eq!(action, NarrativeAction::AdvanceToStep(0));
    controller.advance_to_step(0).unwrap();

    let pinned = controller.timeline().state().step();
    let text = draw(&view, pinned);
    assert!(text.starts_with("┌ Story [1/4] "), "{text}");
    assert!(text.contains("▌ On Tuesday,"), "{text}");
    assert!(text.contains("https://github.com/me/site/commit/c1"), "{text}");
}

#[test]
fn test_narrative_scroll_back_to_start() {
    let log = four_commit_log();
    let mut view = NarrativeView::new(&log);
    draw(&view, None);

    assert_eq!(view.scroll_by(1_000), NarrativeAction::AdvanceToStep(3));
    assert_eq!(
        view.handle_mouse(wheel(MouseEventKind::ScrollUp, 10, 5)),
        NarrativeAction::None
    );
    assert_eq!(view.scroll_by(-1_000), NarrativeAction::AdvanceToStep(0));
    assert_eq!(view.scroll(), 0);
}
