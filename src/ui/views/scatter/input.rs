//! Pointer and brush handling for ScatterView

use crossterm::event::{KeyEvent, MouseButton, MouseEvent, MouseEventKind};

use crate::keys;
use crate::timeline::BrushRegion;
use crate::timeline::scale::{PLOT_HEIGHT, PLOT_WIDTH};

use super::{ScatterAction, ScatterView, Tooltip, cell_size};

impl ScatterView {
    /// Handle key event and return action
    pub fn handle_key(&mut self, key: KeyEvent) -> ScatterAction {
        match key.code {
            keys::ESC if self.brush.is_some() => {
                self.drag_origin = None;
                ScatterAction::Brush(None)
            }
            _ => ScatterAction::None,
        }
    }

    /// Handle mouse event and return action
    pub fn handle_mouse(&mut self, event: MouseEvent) -> ScatterAction {
        match event.kind {
            MouseEventKind::Moved => {
                self.pointer_move(event.column, event.row);
                ScatterAction::None
            }
            MouseEventKind::Down(MouseButton::Left) => {
                let Some(point) = self.to_plot(event.column, event.row) else {
                    return ScatterAction::None;
                };
                self.drag_origin = Some(point);
                // Starting a new brush drops the previous rectangle
                ScatterAction::Brush(None)
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                let Some(origin) = self.drag_origin else {
                    return ScatterAction::None;
                };
                let point = self.to_plot_clamped(event.column, event.row);
                ScatterAction::Brush(brush_between(origin, point))
            }
            MouseEventKind::Up(MouseButton::Left) => {
                let Some(origin) = self.drag_origin.take() else {
                    return ScatterAction::None;
                };
                let point = self.to_plot_clamped(event.column, event.row);
                ScatterAction::Brush(brush_between(origin, point))
            }
            _ => ScatterAction::None,
        }
    }

    /// Pointer enter/move/leave over the marks
    ///
    /// The topmost (last drawn) mark under the pointer wins. The tooltip
    /// follows the pointer while it stays on the same mark.
    fn pointer_move(&mut self, column: u16, row: u16) {
        let hit = self.to_plot(column, row).and_then(|(x, y)| {
            let (cell_w, cell_h) = cell_size(self.canvas_area.get());
            let tolerance = cell_w.max(cell_h) / 2.0;
            self.plotted
                .iter()
                .rev()
                .find(|p| p.mark.hit(x, y, tolerance))
                .map(|p| (p.mark.commit_id.clone(), p.detail.clone()))
        });

        match hit {
            Some((id, detail)) => {
                self.set_hovered(Some(id));
                self.tooltip = Some(Tooltip {
                    detail,
                    column,
                    row,
                });
            }
            None => {
                self.set_hovered(None);
                self.tooltip = None;
            }
        }
    }

    /// Plot coordinates at the centre of a terminal cell inside the canvas
    pub(crate) fn to_plot(&self, column: u16, row: u16) -> Option<(f64, f64)> {
        let area = self.canvas_area.get();
        if area.is_empty() || !area.contains((column, row).into()) {
            return None;
        }
        let (cell_w, cell_h) = cell_size(area);
        Some((
            (f64::from(column - area.x) + 0.5) * cell_w,
            (f64::from(row - area.y) + 0.5) * cell_h,
        ))
    }

    /// Like [`Self::to_plot`], with cells outside the canvas pinned to its edge
    fn to_plot_clamped(&self, column: u16, row: u16) -> (f64, f64) {
        let area = self.canvas_area.get();
        let (cell_w, cell_h) = cell_size(area);
        let x = (f64::from(column) - f64::from(area.x) + 0.5) * cell_w;
        let y = (f64::from(row) - f64::from(area.y) + 0.5) * cell_h;
        (x.clamp(0.0, PLOT_WIDTH), y.clamp(0.0, PLOT_HEIGHT))
    }
}

/// Brush rectangle between two drag points; `None` when it has no area
fn brush_between(origin: (f64, f64), point: (f64, f64)) -> Option<BrushRegion> {
    let region = BrushRegion::from_corners(origin, point);
    region.has_area().then_some(region)
}
