//! View-state controller and linked-view notification
//!
//! Every mutation writes the [`ViewState`](super::ViewState) first, then
//! notifies the views synchronously in a fixed order, so no view ever reads a
//! half-updated state.

use crate::loc::LocError;
use crate::model::{CommitLog, Timestamp};
use crate::ui::views::{FileUnitView, ScatterView, SelectionPanel, StatsPanel, TimeControl};

use super::scale::PROGRESS_RANGE;
use super::{ActiveSet, BrushRegion, LinkedView, SelectionSet, Timeline, ViewUpdate};

/// The views kept in sync with the view state
///
/// Notified in field order: stats, scatter, files, selection, time control,
/// then any registered observers in registration order.
pub struct LinkedViews {
    pub stats: StatsPanel,
    pub scatter: ScatterView,
    pub files: FileUnitView,
    pub selection: SelectionPanel,
    pub time_control: TimeControl,
    observers: Vec<Box<dyn LinkedView>>,
}

impl LinkedViews {
    pub fn new(time_step: u8) -> Self {
        Self {
            stats: StatsPanel::new(),
            scatter: ScatterView::new(),
            files: FileUnitView::new(),
            selection: SelectionPanel::new(),
            time_control: TimeControl::new(time_step),
            observers: Vec::new(),
        }
    }

    fn refresh_all(&mut self, timeline: &Timeline) {
        let selection = timeline.selection_set();
        let update = timeline.view_update(&selection);

        let views: [&mut dyn LinkedView; 5] = [
            &mut self.stats,
            &mut self.scatter,
            &mut self.files,
            &mut self.selection,
            &mut self.time_control,
        ];
        for view in views {
            refresh_one(view, &update);
        }
        for view in &mut self.observers {
            refresh_one(view.as_mut(), &update);
        }
    }
}

fn refresh_one(view: &mut dyn LinkedView, update: &ViewUpdate<'_>) {
    tracing::trace!(
        view = view.name(),
        active = update.active.len(),
        selected = update.selection.len(),
        "refresh"
    );
    view.refresh(update);
}

impl std::fmt::Debug for LinkedViews {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LinkedViews")
            .field("stats", &self.stats)
            .field("scatter", &self.scatter)
            .field("files", &self.files)
            .field("selection", &self.selection)
            .field("time_control", &self.time_control)
            .field("observers", &self.observers.len())
            .finish()
    }
}

/// Owner of the view state; the only way to change it
#[derive(Debug)]
pub struct ViewController {
    timeline: Timeline,
    views: LinkedViews,
}

impl ViewController {
    /// Take ownership of the aggregated log and draw the initial state
    pub fn new(log: CommitLog, time_step: u8) -> Self {
        let mut controller = Self {
            timeline: Timeline::new(log),
            views: LinkedViews::new(time_step),
        };
        controller.notify();
        controller
    }

    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    pub fn views(&self) -> &LinkedViews {
        &self.views
    }

    pub fn views_mut(&mut self) -> &mut LinkedViews {
        &mut self.views
    }

    /// Add a view notified after the built-in ones; it is refreshed at once
    pub fn register(&mut self, mut view: Box<dyn LinkedView>) {
        let selection = self.timeline.selection_set();
        view.refresh(&self.timeline.view_update(&selection));
        self.views.observers.push(view);
    }

    /// Set the time bound directly, dropping any narrative step linkage
    pub fn set_time_bound(&mut self, bound: Timestamp) {
        tracing::debug!(%bound, "set time bound");
        self.timeline.set_time_bound(bound);
        self.notify();
    }

    /// Set the time bound from the manual control (clamped to 0..=100)
    pub fn set_progress(&mut self, progress: f64) {
        let progress = progress.clamp(PROGRESS_RANGE.0, PROGRESS_RANGE.1);
        if self.timeline.log().is_empty() {
            return;
        }
        let bound = self.timeline.scales().progress.invert(progress);
        tracing::debug!(progress, "set progress");
        self.set_time_bound(bound);
    }

    /// Pin the time bound to the commit at narrative step `step`
    pub fn advance_to_step(&mut self, step: usize) -> Result<(), LocError> {
        self.timeline.advance_to_step(step)?;
        tracing::debug!(step, "advance to step");
        self.notify();
        Ok(())
    }

    /// Replace the brush region; `None` clears the selection
    pub fn set_brush_region(&mut self, region: Option<BrushRegion>) {
        tracing::debug!(?region, "set brush region");
        self.timeline.set_brush_region(region);
        self.notify();
    }

    pub fn active_set(&self) -> ActiveSet<'_> {
        self.timeline.active_set()
    }

    pub fn selection_set(&self) -> SelectionSet<'_> {
        self.timeline.selection_set()
    }

    fn notify(&mut self) {
        let Self { timeline, views } = self;
        views.refresh_all(timeline);
    }
}
