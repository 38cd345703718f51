//! Scatter View - commits by date and time of day
//!
//! One circular mark per active commit: x is the commit timestamp, y the
//! hour of day, and the mark's area grows with the number of changed lines.
//! Hovering shows commit details; dragging draws a brush rectangle that
//! selects commits for the selection panel.

mod input;
mod render;

use std::cell::Cell;

use ratatui::layout::Rect;

use crate::model::Commit;
use crate::timeline::scale::{HOUR_DOMAIN, PLOT_HEIGHT, PLOT_WIDTH};
use crate::timeline::{BrushRegion, LinkedView, PlotScales, ViewUpdate};
use crate::ui::surface::{Axis, AxisSide, Mark, Surface, Tick};
use crate::ui::theme;

/// Actions that ScatterView can request from App
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScatterAction {
    /// No action needed
    None,
    /// Replace the brush region (`None` clears the selection)
    Brush(Option<BrushRegion>),
}

/// Tooltip date format: "Monday, October 7, 2024"
pub const DATE_FORMAT: &str = "%A, %B %-d, %Y";
/// Tooltip time format: "9:15 AM"
pub const TIME_FORMAT: &str = "%-I:%M %p";
/// X axis tick format
pub const TICK_FORMAT: &str = "%b %d";

const X_TICKS: usize = 5;
const HOURS_PER_TICK: u32 = 6;

/// Details shown in the tooltip of a hovered commit
#[derive(Debug, Clone, PartialEq)]
pub struct CommitDetail {
    pub id: String,
    pub url: String,
    pub date: String,
    pub time: String,
    pub author: String,
    pub lines: usize,
}

impl CommitDetail {
    fn from_commit(commit: &Commit) -> Self {
        Self {
            id: commit.short_id().to_string(),
            url: commit.url.clone(),
            date: commit.datetime.format(DATE_FORMAT).to_string(),
            time: commit.datetime.format(TIME_FORMAT).to_string(),
            author: commit.author.clone(),
            lines: commit.total_lines,
        }
    }
}

/// Tooltip anchored at the pointer cell
#[derive(Debug, Clone, PartialEq)]
pub struct Tooltip {
    pub detail: CommitDetail,
    pub column: u16,
    pub row: u16,
}

/// A drawn mark with what the panels need to know about its commit
#[derive(Debug, Clone)]
struct PlottedCommit {
    mark: Mark,
    detail: CommitDetail,
    selected: bool,
}

/// Scatter View state
#[derive(Debug, Default)]
pub struct ScatterView {
    /// Marks in draw order (largest first)
    plotted: Vec<PlottedCommit>,
    x_axis: Option<Axis>,
    y_axis: Option<Axis>,
    brush: Option<BrushRegion>,
    /// Commit id under the pointer
    hovered: Option<String>,
    tooltip: Option<Tooltip>,
    /// Plot position where the current drag started
    drag_origin: Option<(f64, f64)>,
    /// Canvas area from the last render, for mapping pointer cells
    canvas_area: Cell<Rect>,
}

pub mod empty_text {
    pub const TITLE: &str = "No commits before this time.";
    pub const HINT: &str = "Move the time control forward";
}

impl ScatterView {
    /// Create a new ScatterView
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks in draw order
    pub fn marks(&self) -> impl Iterator<Item = &Mark> {
        self.plotted.iter().map(|p| &p.mark)
    }

    pub fn hovered(&self) -> Option<&str> {
        self.hovered.as_deref()
    }

    pub fn tooltip(&self) -> Option<&Tooltip> {
        self.tooltip.as_ref()
    }

    pub fn brush(&self) -> Option<BrushRegion> {
        self.brush
    }

    /// Draw gridlines, axes, marks and the brush rectangle
    pub fn draw<S: Surface>(&self, surface: &mut S) {
        if let Some(y_axis) = &self.y_axis {
            let right = self.x_axis.as_ref().map_or(PLOT_WIDTH, |axis| axis.span.1);
            for tick in &y_axis.ticks {
                surface.draw_line(
                    (y_axis.at, tick.position),
                    (right, tick.position),
                    theme::scatter::GRIDLINE,
                );
            }
            surface.draw_axis(y_axis);
        }
        if let Some(x_axis) = &self.x_axis {
            surface.draw_axis(x_axis);
        }

        for plotted in &self.plotted {
            surface.draw_mark(&plotted.mark);
        }

        if let Some(region) = self.brush {
            let color = theme::scatter::BRUSH;
            let corners = [
                (region.x0, region.y0),
                (region.x1, region.y0),
                (region.x1, region.y1),
                (region.x0, region.y1),
            ];
            for (i, from) in corners.iter().enumerate() {
                surface.draw_line(*from, corners[(i + 1) % corners.len()], color);
            }
        }
    }

    /// Set the hovered commit and restyle marks
    ///
    /// Returns whether the hovered commit changed.
    fn set_hovered(&mut self, id: Option<String>) -> bool {
        if self.hovered == id {
            return false;
        }
        self.hovered = id;
        self.restyle();
        true
    }

    fn restyle(&mut self) {
        for plotted in &mut self.plotted {
            let hovered = self.hovered.as_deref() == Some(plotted.mark.commit_id.as_str());
            plotted.mark.color = match (plotted.selected, hovered) {
                (true, _) => theme::scatter::MARK_SELECTED,
                (false, true) => theme::scatter::MARK_HOVER,
                (false, false) => theme::scatter::MARK,
            };
            plotted.mark.opacity = if hovered {
                1.0
            } else {
                theme::scatter::RESTING_OPACITY
            };
        }
    }
}

/// Date axis with evenly spaced ticks over the whole history
fn build_x_axis(scales: &PlotScales, has_commits: bool) -> Axis {
    let area = scales.area;
    let ticks = if !has_commits {
        Vec::new()
    } else {
        let (start, end) = scales.x.domain_millis();
        let count = if start == end { 1 } else { X_TICKS };
        (0..count)
            .map(|i| {
                let position = if count == 1 {
                    (area.left + area.right) / 2.0
                } else {
                    area.left + area.width() * i as f64 / (count - 1) as f64
                };
                Tick {
                    position,
                    label: scales.x.invert(position).format(TICK_FORMAT).to_string(),
                }
            })
            .collect()
    };
    Axis {
        side: AxisSide::Bottom,
        at: area.bottom,
        span: (area.left, area.right),
        ticks,
        color: theme::scatter::AXIS,
    }
}

/// Hour axis with a tick every six hours
fn build_y_axis(scales: &PlotScales) -> Axis {
    let area = scales.area;
    let ticks = (HOUR_DOMAIN.0 as u32..=HOUR_DOMAIN.1 as u32)
        .step_by(HOURS_PER_TICK as usize)
        .map(|hour| Tick {
            position: scales.y.apply(f64::from(hour)),
            label: format!("{:02}:00", hour % 24),
        })
        .collect();
    Axis {
        side: AxisSide::Left,
        at: area.left,
        span: (area.top, area.bottom),
        ticks,
        color: theme::scatter::AXIS,
    }
}

impl LinkedView for ScatterView {
    fn name(&self) -> &'static str {
        "scatter"
    }

    fn refresh(&mut self, update: &ViewUpdate<'_>) {
        let scales = update.scales;

        let mut plotted: Vec<PlottedCommit> = update
            .active
            .iter()
            .map(|commit| {
                let (x, y) = scales.position(commit);
                PlottedCommit {
                    mark: Mark {
                        commit_id: commit.id.clone(),
                        x,
                        y,
                        radius: scales.radius(commit),
                        color: theme::scatter::MARK,
                        opacity: theme::scatter::RESTING_OPACITY,
                    },
                    detail: CommitDetail::from_commit(commit),
                    selected: update.selection.contains(commit),
                }
            })
            .collect();
        // Largest first so small marks stay on top; stable for equal radii
        plotted.sort_by(|a, b| b.mark.radius.total_cmp(&a.mark.radius));
        self.plotted = plotted;

        let hovered_gone = self
            .hovered
            .as_ref()
            .is_some_and(|id| !self.plotted.iter().any(|p| &p.mark.commit_id == id));
        if hovered_gone {
            self.hovered = None;
            self.tooltip = None;
        }
        self.restyle();

        self.brush = update.state.brush();
        self.x_axis = Some(build_x_axis(scales, !update.log.is_empty()));
        self.y_axis = Some(build_y_axis(scales));
    }
}

/// Plot units covered by one terminal cell
fn cell_size(area: Rect) -> (f64, f64) {
    (
        PLOT_WIDTH / f64::from(area.width.max(1)),
        PLOT_HEIGHT / f64::from(area.height.max(1)),
    )
}
