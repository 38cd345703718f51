//! Rendering and pointer tests for the scatter plot

use crossterm::event::{KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{Terminal, backend::TestBackend};

use locscope::model::CommitLog;
use locscope::timeline::ViewController;
use locscope::ui::views::ScatterAction;

use super::common::{buffer_text, four_commit_log};

fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

/// Draw the plot over a 52 × 22 terminal; the canvas is the inner 50 × 20
fn draw(controller: &ViewController) -> String {
    let mut terminal = Terminal::new(TestBackend::new(52, 22)).unwrap();
    terminal
        .draw(|frame| controller.views().scatter.render(frame, frame.area(), None))
        .unwrap();
    buffer_text(terminal.backend())
}

/// Feed a pointer event to the plot and apply any brush change
fn pointer(controller: &mut ViewController, event: MouseEvent) -> ScatterAction {
    let action = controller.views_mut().scatter.handle_mouse(event);
    if let ScatterAction::Brush(region) = action {
        controller.set_brush_region(region);
    }
    action
}

#[test]
fn test_scatter_title_and_marks() {
    let controller = ViewController::new(four_commit_log(), 1);
    let text = draw(&controller);

    assert!(text.starts_with("┌ Commits by time of day "), "{text}");
    assert!(!text.contains("selected"), "{text}");
    assert_eq!(controller.views().scatter.marks().count(), 4);
}

#[test]
fn test_scatter_empty_log() {
    let controller = ViewController::new(CommitLog::default(), 1);
    let text = draw(&controller);

    assert!(text.contains("No commits before this time."), "{text}");
    assert_eq!(controller.views().scatter.marks().count(), 0);
}

#[test]
fn test_scatter_drag_selects_commits() {
    let mut controller = ViewController::new(four_commit_log(), 1);
    draw(&controller);

    let action = pointer(&mut controller, mouse(MouseEventKind::Down(MouseButton::Left), 1, 1));
    assert_eq!(action, ScatterAction::Brush(None));

    pointer(&mut controller, mouse(MouseEventKind::Drag(MouseButton::Left), 30, 10));
    assert!(controller.timeline().state().brush().is_some());

    // Released past the bottom-right border: pinned to the plot edge
    pointer(&mut controller, mouse(MouseEventKind::Up(MouseButton::Left), 51, 21));
    assert_eq!(controller.selection_set().len(), 4);
    assert_eq!(controller.views().selection.selected(), 4);
    assert!(draw(&controller).contains("[4 selected]"));

    // A click without a drag clears the brush
    pointer(&mut controller, mouse(MouseEventKind::Down(MouseButton::Left), 10, 10));
    let action = pointer(&mut controller, mouse(MouseEventKind::Up(MouseButton::Left), 10, 10));
    assert_eq!(action, ScatterAction::Brush(None));
    assert!(controller.selection_set().is_empty());
}

#[test]
fn test_scatter_hover_tooltip() {
    let mut controller = ViewController::new(four_commit_log(), 1);
    draw(&controller);

    // c2 sits at plot (361, 255): canvas cell (18, 8)
    pointer(&mut controller, mouse(MouseEventKind::Moved, 19, 9));
    assert_eq!(controller.views().scatter.hovered(), Some("c2"));

    let text = draw(&controller);
    assert!(text.contains("COMMIT  c2"), "{text}");
    assert!(text.contains("https://github.com/me/site/commit/c2"), "{text}");
    assert!(text.contains("9 lines"), "{text}");

    // Hiding the commit removes the tooltip
    controller.advance_to_step(0).unwrap();
    assert_eq!(controller.views().scatter.hovered(), None);
    assert!(controller.views().scatter.tooltip().is_none());
}
