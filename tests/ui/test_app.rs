//! Rendering and input tests for the whole application screen

use crossterm::event::{
    KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::{Terminal, backend::TestBackend};

use locscope::app::App;
use locscope::config::Config;
use locscope::loc::{Dataset, Ingestor, aggregate_commits};
use locscope::model::NotificationKind;
use locscope::timeline::BrushRegion;

use super::common::{HEADER, buffer_text, four_commit_builder};

fn app() -> App {
    App::new(four_commit_builder().dataset(), &Config::default())
}

fn draw(app: &App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
    terminal.draw(|frame| app.render(frame)).unwrap();
    buffer_text(terminal.backend())
}

fn press(app: &mut App, code: KeyCode) {
    app.on_key_event(KeyEvent::new(code, KeyModifiers::NONE));
}

#[test]
fn test_app_initial_screen() {
    let app = app();
    let text = draw(&app);

    assert!(text.contains("Summary"), "{text}");
    assert!(text.contains("COMMITS 4"), "{text}");
    assert!(text.contains("TOTAL LOC 21"), "{text}");
    assert!(text.contains("MAX LINES 9"), "{text}");
    assert!(text.contains("Commits by time of day"), "{text}");
    assert!(text.contains("Story"), "{text}");
    assert!(text.contains("Files"), "{text}");
    assert!(text.contains("app.js 12 lines"), "{text}");
    assert!(text.contains("October 4, 2024 at 11:15 PM"), "{text}");
    assert!(text.contains("4/4 commits"), "{text}");
    assert!(!text.contains("Key bindings:"), "{text}");
}

#[test]
fn test_app_time_keys_filter_every_pane() {
    let mut app = app();
    press(&mut app, KeyCode::Home);
    assert_eq!(app.controller.active_set().len(), 1);

    let text = draw(&app);
    assert!(text.contains("1/4 commits"), "{text}");
    assert!(text.contains("COMMITS 1"), "{text}");
    assert!(text.contains("TOTAL LOC 6"), "{text}");
    assert!(text.contains("October 1, 2024 at 8:00 AM"), "{text}");
    assert!(!text.contains("app.js"), "{text}");

    press(&mut app, KeyCode::End);
    assert_eq!(app.controller.active_set().len(), 4);

    // One step back drops the last commit, 52 minutes after the new bound
    press(&mut app, KeyCode::Left);
    assert_eq!(app.controller.active_set().len(), 3);
    let progress = app.controller.views().time_control.progress();
    assert!((progress - 99.0).abs() < 1e-6, "progress = {progress}");

    press(&mut app, KeyCode::Right);
    assert_eq!(app.controller.active_set().len(), 4);
}

#[test]
fn test_app_story_scroll_pins_step() {
    let mut app = app();
    press(&mut app, KeyCode::Char('j'));

    assert_eq!(app.controller.timeline().state().step(), Some(0));
    assert_eq!(app.controller.active_set().len(), 1);
    let text = draw(&app);
    assert!(text.contains("Story [1/4]"), "{text}");
    assert!(text.contains("▌"), "{text}");

    // A manual change releases the pin
    press(&mut app, KeyCode::End);
    assert_eq!(app.controller.timeline().state().step(), None);
    assert!(!draw(&app).contains("Story [1/4]"));
}

#[test]
fn test_app_brush_and_escape() {
    let mut app = app();
    app.controller
        .set_brush_region(Some(BrushRegion::from_corners((0.0, 0.0), (1000.0, 600.0))));

    let text = draw(&app);
    assert!(text.contains("[4 selected]"), "{text}");
    assert!(text.contains("4 commits selected"), "{text}");
    assert!(text.contains("Clear"), "{text}");

    press(&mut app, KeyCode::Esc);
    assert!(app.controller.selection_set().is_empty());
    assert!(app.controller.timeline().state().brush().is_none());
    assert!(!draw(&app).contains("selected"));
}

fn click(app: &mut App, kind: MouseEventKind, column: u16, row: u16) {
    app.on_mouse_event(MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    });
}

#[test]
fn test_app_mouse_brush_reports_selection() {
    let mut app = app();
    // Rendering records the plot area; its canvas starts at (1, 4)
    draw(&app);

    click(&mut app, MouseEventKind::Down(MouseButton::Left), 1, 4);
    assert!(app.notification.is_none());
    click(&mut app, MouseEventKind::Up(MouseButton::Left), 119, 39);

    assert_eq!(app.controller.selection_set().len(), 4);
    let notification = app.notification.as_ref().unwrap();
    assert_eq!(notification.kind, NotificationKind::Info);
    assert_eq!(notification.message, "4 commits selected");
    assert!(draw(&app).contains("Info: 4 commits selected"));

    // Clearing the brush drops the selection notice
    press(&mut app, KeyCode::Esc);
    assert!(app.notification.is_none());
    assert!(app.controller.selection_set().is_empty());
}

#[test]
fn test_app_help_overlay() {
    let mut app = app();
    press(&mut app, KeyCode::Char('?'));
    assert!(app.show_help);
    assert!(draw(&app).contains("Key bindings:"));

    // Keys go to the overlay while it is open
    press(&mut app, KeyCode::Home);
    assert_eq!(app.controller.active_set().len(), 4);

    press(&mut app, KeyCode::Esc);
    assert!(!app.show_help);
    assert!(app.running);
}

#[test]
fn test_app_quit_keys() {
    let mut app = app();
    press(&mut app, KeyCode::Char('q'));
    assert!(!app.running);

    let mut app = self::app();
    assert!(app.running);
    app.on_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
    assert!(!app.running);
}

#[test]
fn test_app_date_mismatch_warning() {
    let text = [
        HEADER,
        "c1,index.html,1,0,10,html,me,2024-10-02,08:00,+00:00,2024-10-01T08:00:00Z",
        "c2,index.html,2,0,10,html,me,2024-10-03,08:00,+00:00,2024-10-02T08:00:00Z",
        "c3,index.html,3,0,10,html,me,2024-10-03,08:00,+00:00,2024-10-03T08:00:00Z",
    ]
    .join("\n");
    let ingested = Ingestor::parse_str(&text).unwrap();
    assert_eq!(ingested.warnings.len(), 2);

    let dataset = Dataset {
        log: aggregate_commits(ingested.records, None).unwrap(),
        warnings: ingested.warnings,
    };
    let app = App::new(dataset, &Config::default());

    let notification = app.notification.as_ref().unwrap();
    assert_eq!(notification.kind, NotificationKind::Warning);
    assert!(notification.message.starts_with("commit c1 (row 2)"));
    assert!(notification.message.ends_with("(+1 more)"));
    assert!(draw(&app).contains("Warning:"));
}

#[test]
fn test_app_empty_log() {
    let app = App::new(Dataset::default(), &Config::default());
    let text = draw(&app);

    assert!(text.contains("COMMITS 0"), "{text}");
    assert!(text.contains("No commits before this time."), "{text}");
    assert!(text.contains("Nothing to tell yet."), "{text}");
    assert!(text.contains("0/0 commits"), "{text}");
}
