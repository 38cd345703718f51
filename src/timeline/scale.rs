//! Domain-to-range scales and the fixed plot geometry
//!
//! All scales are built once from the complete commit log, so positions do
//! not move while the time bound changes. A degenerate domain (empty, or a
//! single distinct value) maps every input to the middle of the range.

use chrono::{DateTime, FixedOffset, Offset, Utc};

use crate::model::{Commit, CommitLog, Timestamp};

/// Plot width in plot units
pub const PLOT_WIDTH: f64 = 1000.0;
/// Plot height in plot units
pub const PLOT_HEIGHT: f64 = 600.0;

/// Mark radius range in plot units
pub const RADIUS_RANGE: (f64, f64) = (2.0, 30.0);

/// Manual time control range
pub const PROGRESS_RANGE: (f64, f64) = (0.0, 100.0);

/// Hours shown on the vertical axis
pub const HOUR_DOMAIN: (f64, f64) = (0.0, 24.0);

/// Margins around the usable plot area
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

/// Usable plot area inside the margins (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotArea {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl PlotArea {
    /// Area of a `width` × `height` plot after removing `margin`
    pub fn new(width: f64, height: f64, margin: Margin) -> Self {
        Self {
            top: margin.top,
            right: width - margin.right,
            bottom: height - margin.bottom,
            left: margin.left,
        }
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }
}

impl Default for PlotArea {
    fn default() -> Self {
        Self::new(
            PLOT_WIDTH,
            PLOT_HEIGHT,
            Margin {
                top: 10.0,
                right: 10.0,
                bottom: 30.0,
                left: 40.0,
            },
        )
    }
}

/// Linear mapping from a numeric domain onto a range
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    fn is_degenerate(&self) -> bool {
        let span = self.domain.1 - self.domain.0;
        span == 0.0 || !span.is_finite()
    }

    /// Map a domain value onto the range
    pub fn apply(&self, value: f64) -> f64 {
        let (r0, r1) = self.range;
        if self.is_degenerate() {
            return (r0 + r1) / 2.0;
        }
        let t = (value - self.domain.0) / (self.domain.1 - self.domain.0);
        r0 + t * (r1 - r0)
    }

    /// Map a range value back onto the domain
    pub fn invert(&self, value: f64) -> f64 {
        let (r0, r1) = self.range;
        if self.is_degenerate() || r0 == r1 {
            return self.domain.0;
        }
        let t = (value - r0) / (r1 - r0);
        self.domain.0 + t * (self.domain.1 - self.domain.0)
    }
}

/// Square-root scale: output area, not length, is linear in the input
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SqrtScale {
    inner: LinearScale,
}

impl SqrtScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self {
            inner: LinearScale::new((domain.0.max(0.0).sqrt(), domain.1.max(0.0).sqrt()), range),
        }
    }

    pub fn apply(&self, value: f64) -> f64 {
        self.inner.apply(value.max(0.0).sqrt())
    }
}

/// Linear scale over timestamps (millisecond resolution)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeScale {
    inner: LinearScale,
    offset: FixedOffset,
}

impl TimeScale {
    /// Scale over `extent`; `None` yields a constant mapping
    pub fn new(extent: Option<(Timestamp, Timestamp)>, range: (f64, f64)) -> Self {
        match extent {
            Some((start, end)) => Self {
                inner: LinearScale::new(
                    (start.timestamp_millis() as f64, end.timestamp_millis() as f64),
                    range,
                ),
                offset: *end.offset(),
            },
            None => Self {
                inner: LinearScale::new((0.0, 0.0), range),
                offset: Utc.fix(),
            },
        }
    }

    pub fn apply(&self, timestamp: &Timestamp) -> f64 {
        self.inner.apply(timestamp.timestamp_millis() as f64)
    }

    /// Timestamp at a range position, expressed in the latest commit's offset
    pub fn invert(&self, value: f64) -> Timestamp {
        let millis = self.inner.invert(value).round() as i64;
        DateTime::from_timestamp_millis(millis)
            .unwrap_or_default()
            .with_timezone(&self.offset)
    }

    pub fn domain_millis(&self) -> (f64, f64) {
        self.inner.domain()
    }
}

/// Scales shared by the scatter plot, the selection test and the time control
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotScales {
    pub area: PlotArea,
    /// Timestamp → horizontal position
    pub x: TimeScale,
    /// Hour of day → vertical position
    pub y: LinearScale,
    /// Line count → mark radius
    pub r: SqrtScale,
    /// Timestamp → manual time control value
    pub progress: TimeScale,
}

impl PlotScales {
    /// Build scales over the whole log
    pub fn from_log(log: &CommitLog) -> Self {
        Self::with_area(log, PlotArea::default())
    }

    pub fn with_area(log: &CommitLog, area: PlotArea) -> Self {
        let extent = log.time_extent();
        let (min_lines, max_lines) = log.lines_extent().unwrap_or((0, 0));
        Self {
            area,
            x: TimeScale::new(extent, (area.left, area.right)),
            y: LinearScale::new(HOUR_DOMAIN, (area.bottom, area.top)),
            r: SqrtScale::new((min_lines as f64, max_lines as f64), RADIUS_RANGE),
            progress: TimeScale::new(extent, PROGRESS_RANGE),
        }
    }

    /// Plot position of a commit's mark
    pub fn position(&self, commit: &Commit) -> (f64, f64) {
        (self.x.apply(&commit.datetime), self.y.apply(commit.hour_frac))
    }

    /// Mark radius of a commit
    pub fn radius(&self, commit: &Commit) -> f64 {
        self.r.apply(commit.total_lines as f64)
    }
}
