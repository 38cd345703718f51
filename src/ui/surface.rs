//! Drawing surface for plot-space graphics
//!
//! Views draw in plot coordinates (1000 × 600, y growing downward) through
//! the [`Surface`] trait. [`CanvasSurface`] puts the drawing on a ratatui
//! canvas; [`RecordingSurface`] keeps the operations in memory.

use ratatui::{
    style::{Color, Style},
    text::{Line, Span},
    widgets::canvas::{Circle, Context, Line as CanvasLine},
};

use crate::timeline::scale::{PLOT_HEIGHT, PLOT_WIDTH};

/// A circular mark for one commit
#[derive(Debug, Clone, PartialEq)]
pub struct Mark {
    pub commit_id: String,
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub color: Color,
    pub opacity: f32,
}

impl Mark {
    /// Whether a point lies within the mark, widened by `tolerance`
    pub fn hit(&self, x: f64, y: f64, tolerance: f64) -> bool {
        let reach = self.radius + tolerance;
        (x - self.x).powi(2) + (y - self.y).powi(2) <= reach * reach
    }
}

/// Where an axis sits relative to the plot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisSide {
    Bottom,
    Left,
}

/// A labelled tick on an axis
#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    /// Position along the axis in plot units
    pub position: f64,
    pub label: String,
}

/// An axis line with ticks
#[derive(Debug, Clone, PartialEq)]
pub struct Axis {
    pub side: AxisSide,
    /// y of a bottom axis, x of a left axis
    pub at: f64,
    /// Extent along the axis
    pub span: (f64, f64),
    pub ticks: Vec<Tick>,
    pub color: Color,
}

/// Offset of tick labels from the axis line, in plot units
const LABEL_GAP: f64 = 15.0;

/// `color` faded toward the dark terminal background by `opacity`
///
/// Terminal cells have no alpha, so only RGB colours are faded; named
/// colours pass through unchanged.
pub fn shade(color: Color, opacity: f32) -> Color {
    let alpha = opacity.clamp(0.0, 1.0);
    match color {
        Color::Rgb(r, g, b) => {
            let fade = |channel: u8| (f32::from(channel) * alpha).round() as u8;
            Color::Rgb(fade(r), fade(g), fade(b))
        }
        other => other,
    }
}

/// Target of plot drawing
pub trait Surface {
    /// Draw a filled-looking circular mark
    fn draw_mark(&mut self, mark: &Mark);

    fn draw_line(&mut self, from: (f64, f64), to: (f64, f64), color: Color);

    fn draw_text(&mut self, x: f64, y: f64, text: &str, color: Color);

    /// Draw an axis line and its tick labels
    fn draw_axis(&mut self, axis: &Axis) {
        match axis.side {
            AxisSide::Bottom => {
                self.draw_line((axis.span.0, axis.at), (axis.span.1, axis.at), axis.color);
                for tick in &axis.ticks {
                    self.draw_text(tick.position, axis.at + LABEL_GAP, &tick.label, axis.color);
                }
            }
            AxisSide::Left => {
                self.draw_line((axis.at, axis.span.0), (axis.at, axis.span.1), axis.color);
                for tick in &axis.ticks {
                    self.draw_text(0.0, tick.position, &tick.label, axis.color);
                }
            }
        }
    }
}

/// [`Surface`] backed by a ratatui canvas context
///
/// The canvas must use x bounds `[0, PLOT_WIDTH]` and y bounds
/// `[0, PLOT_HEIGHT]`; y is flipped since canvas y grows upward.
pub struct CanvasSurface<'a, 'b> {
    ctx: &'a mut Context<'b>,
}

impl<'a, 'b> CanvasSurface<'a, 'b> {
    pub fn new(ctx: &'a mut Context<'b>) -> Self {
        Self { ctx }
    }

    /// Canvas bounds matching plot coordinates
    pub fn bounds() -> ([f64; 2], [f64; 2]) {
        ([0.0, PLOT_WIDTH], [0.0, PLOT_HEIGHT])
    }

    fn flip(y: f64) -> f64 {
        PLOT_HEIGHT - y
    }
}

impl Surface for CanvasSurface<'_, '_> {
    fn draw_mark(&mut self, mark: &Mark) {
        self.ctx.draw(&Circle {
            x: mark.x,
            y: Self::flip(mark.y),
            radius: mark.radius,
            color: shade(mark.color, mark.opacity),
        });
    }

    fn draw_line(&mut self, from: (f64, f64), to: (f64, f64), color: Color) {
        self.ctx.draw(&CanvasLine::new(
            from.0,
            Self::flip(from.1),
            to.0,
            Self::flip(to.1),
            color,
        ));
    }

    fn draw_text(&mut self, x: f64, y: f64, text: &str, color: Color) {
        self.ctx.print(
            x,
            Self::flip(y),
            Line::from(Span::styled(text.to_string(), Style::default().fg(color))),
        );
    }
}

/// One recorded drawing operation
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Mark(Mark),
    Line {
        from: (f64, f64),
        to: (f64, f64),
        color: Color,
    },
    Text {
        x: f64,
        y: f64,
        text: String,
        color: Color,
    },
    Axis(Axis),
}

/// In-memory [`Surface`] keeping every operation in call order
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    pub ops: Vec<DrawOp>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded marks, in draw order
    pub fn marks(&self) -> Vec<&Mark> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Mark(mark) => Some(mark),
                _ => None,
            })
            .collect()
    }

    /// Recorded axes, in draw order
    pub fn axes(&self) -> Vec<&Axis> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Axis(axis) => Some(axis),
                _ => None,
            })
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn draw_mark(&mut self, mark: &Mark) {
        self.ops.push(DrawOp::Mark(mark.clone()));
    }

    fn draw_line(&mut self, from: (f64, f64), to: (f64, f64), color: Color) {
        self.ops.push(DrawOp::Line { from, to, color });
    }

    fn draw_text(&mut self, x: f64, y: f64, text: &str, color: Color) {
        self.ops.push(DrawOp::Text {
            x,
            y,
            text: text.to_string(),
            color,
        });
    }

    fn draw_axis(&mut self, axis: &Axis) {
        self.ops.push(DrawOp::Axis(axis.clone()));
    }
}
