//! View state and linked-view synchronization
//!
//! [`Timeline`] holds the immutable commit log, the shared plot scales and the
//! single [`ViewState`]. Everything visible is derived from it on demand:
//! the [`ActiveSet`] (commits at or before the time bound) and the
//! [`SelectionSet`] (active commits inside the brush region).

mod controller;
pub mod narrative;
pub mod scale;

pub use controller::{LinkedViews, ViewController};
pub use narrative::{NarrativeController, StepEvent};
pub use scale::{LinearScale, PlotArea, PlotScales, SqrtScale, TimeScale};

use crate::loc::LocError;
use crate::model::{Commit, CommitLog, Timestamp};

/// Axis-aligned rectangle in plot coordinates (`x0 <= x1`, `y0 <= y1`)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BrushRegion {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
}

impl BrushRegion {
    /// Rectangle spanned by two opposite corners, in any order
    pub fn from_corners(a: (f64, f64), b: (f64, f64)) -> Self {
        Self {
            x0: a.0.min(b.0),
            y0: a.1.min(b.1),
            x1: a.0.max(b.0),
            y1: a.1.max(b.1),
        }
    }

    /// Closed-interval containment: points on the edges are inside
    pub fn contains(&self, x: f64, y: f64) -> bool {
        self.x0 <= x && x <= self.x1 && self.y0 <= y && y <= self.y1
    }

    /// Whether the rectangle encloses any area
    pub fn has_area(&self) -> bool {
        self.x1 > self.x0 && self.y1 > self.y0
    }
}

/// Current filter parameters
///
/// Lives for the whole session. Mutated only through [`ViewController`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    time_bound: Option<Timestamp>,
    step: Option<usize>,
    brush: Option<BrushRegion>,
}

impl ViewState {
    /// Commits with a timestamp at or before this bound are active
    ///
    /// `None` only for an empty log.
    pub fn time_bound(&self) -> Option<Timestamp> {
        self.time_bound
    }

    /// Narrative step that pinned the current bound, until the next manual change
    pub fn step(&self) -> Option<usize> {
        self.step
    }

    pub fn brush(&self) -> Option<BrushRegion> {
        self.brush
    }
}

/// Commits with timestamp at or before the time bound, in timestamp order
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActiveSet<'a> {
    commits: &'a [Commit],
}

impl<'a> ActiveSet<'a> {
    pub fn as_slice(&self) -> &'a [Commit] {
        self.commits
    }

    pub fn iter(&self) -> std::slice::Iter<'a, Commit> {
        self.commits.iter()
    }

    pub fn len(&self) -> usize {
        self.commits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commits.is_empty()
    }
}

/// Active commits whose mark lies inside the brush region
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionSet<'a> {
    commits: Vec<&'a Commit>,
}

impl<'a> SelectionSet<'a> {
    pub fn iter(&self) -> impl Iterator<Item = &'a Commit> + '_ {
        self.commits.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.commits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commits.is_empty()
    }

    /// Whether a commit (by id) is selected
    pub fn contains(&self, commit: &Commit) -> bool {
        self.commits.iter().any(|c| c.id == commit.id)
    }
}

/// Everything a linked view needs to redraw, taken after the state change
#[derive(Debug)]
pub struct ViewUpdate<'a> {
    pub log: &'a CommitLog,
    pub scales: &'a PlotScales,
    pub state: &'a ViewState,
    pub active: ActiveSet<'a>,
    pub selection: &'a SelectionSet<'a>,
}

/// A view redrawn from the current active and selection sets
///
/// Implementations keep no memory of earlier updates beyond presentation
/// details (colour assignment, hover), so refreshing twice with the same
/// update yields the same output.
pub trait LinkedView {
    /// Short name used in logs
    fn name(&self) -> &'static str;

    /// Recompute derived content from `update`
    fn refresh(&mut self, update: &ViewUpdate<'_>);
}

/// Commit log, shared scales and the view state
#[derive(Debug, Clone)]
pub struct Timeline {
    log: CommitLog,
    scales: PlotScales,
    state: ViewState,
}

impl Timeline {
    /// Start with the full history visible
    pub fn new(log: CommitLog) -> Self {
        let scales = PlotScales::from_log(&log);
        let state = ViewState {
            time_bound: log.time_extent().map(|(_, latest)| latest),
            step: None,
            brush: None,
        };
        Self { log, scales, state }
    }

    pub fn log(&self) -> &CommitLog {
        &self.log
    }

    pub fn scales(&self) -> &PlotScales {
        &self.scales
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Commits with timestamp <= the time bound
    ///
    /// The log is sorted by timestamp, so the active set is always a prefix.
    pub fn active_set(&self) -> ActiveSet<'_> {
        let commits = self.log.commits();
        let end = match self.state.time_bound {
            Some(bound) => commits.partition_point(|c| c.datetime <= bound),
            None => 0,
        };
        ActiveSet {
            commits: &commits[..end],
        }
    }

    /// Active commits inside the brush region (empty without a region)
    pub fn selection_set(&self) -> SelectionSet<'_> {
        let Some(region) = self.state.brush else {
            return SelectionSet::default();
        };
        let commits = self
            .active_set()
            .iter()
            .filter(|commit| {
                let (x, y) = self.scales.position(commit);
                region.contains(x, y)
            })
            .collect();
        SelectionSet { commits }
    }

    /// Snapshot handed to linked views, sharing `selection` computed by the caller
    pub fn view_update<'a>(&'a self, selection: &'a SelectionSet<'a>) -> ViewUpdate<'a> {
        ViewUpdate {
            log: &self.log,
            scales: &self.scales,
            state: &self.state,
            active: self.active_set(),
            selection,
        }
    }

    pub(crate) fn set_time_bound(&mut self, bound: Timestamp) {
        self.state.time_bound = Some(bound);
        self.state.step = None;
    }

    pub(crate) fn advance_to_step(&mut self, step: usize) -> Result<(), LocError> {
        let commit = self.log.get(step).ok_or(LocError::StepOutOfRange {
            step,
            len: self.log.len(),
        })?;
        self.state.time_bound = Some(commit.datetime);
        self.state.step = Some(step);
        Ok(())
    }

    pub(crate) fn set_brush_region(&mut self, region: Option<BrushRegion>) {
        self.state.brush = region;
    }
}
