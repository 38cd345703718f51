//! Rendering logic for the application

use ratatui::{Frame, prelude::*};

use super::state::App;
use crate::keys::HintContext;
use crate::ui::widgets::{render_help_panel, render_status_bar};

/// Height of the one-line panels including borders
const BAR_HEIGHT: u16 = 3;

/// Screen areas of every pane
pub(crate) struct Panes {
    pub stats: Rect,
    pub scatter: Rect,
    pub selection: Rect,
    pub narrative: Rect,
    pub files: Rect,
    pub time: Rect,
    pub status: Rect,
}

/// Split the screen: stats on top, plot and selection on the left, story
/// and files on the right, time control and status bar at the bottom
pub(crate) fn layout(area: Rect, selection_height: u16) -> Panes {
    let [stats, main, time, status] = Layout::vertical([
        Constraint::Length(BAR_HEIGHT),
        Constraint::Min(8),
        Constraint::Length(BAR_HEIGHT),
        Constraint::Length(1),
    ])
    .areas(area);

    let [left, right] =
        Layout::horizontal([Constraint::Percentage(62), Constraint::Percentage(38)]).areas(main);
    let [scatter, selection] =
        Layout::vertical([Constraint::Min(6), Constraint::Length(selection_height)]).areas(left);
    let [narrative, files] =
        Layout::vertical([Constraint::Percentage(50), Constraint::Percentage(50)]).areas(right);

    Panes {
        stats,
        scatter,
        selection,
        narrative,
        files,
        time,
        status,
    }
}

impl App {
    /// Render the UI
    pub fn render(&self, frame: &mut Frame) {
        let notification = self.notification.as_ref().filter(|n| !n.is_expired());
        let views = self.controller.views();

        // Title row, one row per file type, bottom border
        let selection_height = (views.selection.shares().len() as u16 + 3).max(BAR_HEIGHT);
        let panes = layout(frame.area(), selection_height);

        views.stats.render(frame, panes.stats);
        views.scatter.render(frame, panes.scatter, notification);
        views
            .selection
            .render(frame, panes.selection, views.files.colors());
        self.narrative.render(
            frame,
            panes.narrative,
            self.controller.timeline().state().step(),
        );
        views.files.render(frame, panes.files);
        views.time_control.render(frame, panes.time);

        let ctx = HintContext {
            has_brush: self.controller.timeline().state().brush().is_some(),
            help_visible: self.show_help,
        };
        render_status_bar(
            frame,
            panes.status,
            &ctx,
            self.controller.active_set().len(),
            self.controller.timeline().log().len(),
        );

        if self.show_help {
            render_help_panel(frame, frame.area());
        }
    }
}
