//! Rendering for ScatterView

use ratatui::{
    Frame,
    layout::Rect,
    style::{Style, Stylize},
    symbols::Marker,
    text::{Line, Span},
    widgets::{Clear, Paragraph, canvas::Canvas},
};

use crate::model::Notification;
use crate::ui::surface::CanvasSurface;
use crate::ui::{components, symbols, theme};

use super::{ScatterView, Tooltip, empty_text};

/// Tooltip box size, borders included
const TOOLTIP_WIDTH: u16 = 44;
const TOOLTIP_HEIGHT: u16 = 7;

impl ScatterView {
    /// Render the plot with optional notification in title bar
    pub fn render(&self, frame: &mut Frame, area: Rect, notification: Option<&Notification>) {
        let title = self.build_title();

        let title_width = title.width();
        let available_for_notif = area.width.saturating_sub(title_width as u16 + 4) as usize;
        let notif_line = notification
            .filter(|n| !n.is_expired())
            .map(|n| components::build_notification_title(n, Some(available_for_notif)))
            .filter(|line| !line.spans.is_empty());

        let block = components::bordered_block_with_notification(title, notif_line);
        let inner = block.inner(area);
        self.canvas_area.set(inner);

        let has_axes = self.x_axis.as_ref().is_some_and(|axis| !axis.ticks.is_empty());
        if !has_axes {
            let empty = components::empty_state(empty_text::TITLE, Some(empty_text::HINT));
            frame.render_widget(empty.block(block), area);
            return;
        }

        let (x_bounds, y_bounds) = CanvasSurface::bounds();
        let canvas = Canvas::default()
            .block(block)
            .marker(Marker::Braille)
            .x_bounds(x_bounds)
            .y_bounds(y_bounds)
            .paint(|ctx| {
                let mut surface = CanvasSurface::new(ctx);
                self.draw(&mut surface);
            });
        frame.render_widget(canvas, area);

        if let Some(tooltip) = &self.tooltip {
            render_tooltip(frame, frame.area(), tooltip);
        }
    }

    fn build_title(&self) -> Line<'static> {
        let mut spans = vec![Span::raw(" Commits by time of day ").bold()];
        if self.brush.is_some() {
            let selected = self.plotted.iter().filter(|p| p.selected).count();
            spans.push(
                Span::raw(format!("[{selected} selected] "))
                    .fg(theme::scatter::MARK_SELECTED),
            );
        }
        Line::from(spans)
    }
}

/// Tooltip lines: id, link, date, time, author, line count
pub(crate) fn tooltip_lines(tooltip: &Tooltip) -> Vec<Line<'static>> {
    let detail = &tooltip.detail;
    let label = |text: &'static str| Span::raw(format!("{text:<8}")).dark_gray();
    vec![
        Line::from(vec![label("COMMIT"), Span::raw(detail.id.clone()).bold()]),
        Line::from(vec![
            Span::raw(symbols::LINK),
            Span::raw(detail.url.clone()).fg(theme::narrative::LINK).underlined(),
        ]),
        Line::from(vec![label("DATE"), Span::raw(detail.date.clone())]),
        Line::from(vec![
            label("TIME"),
            Span::raw(detail.time.clone()),
            Span::raw(format!("  {} lines", detail.lines)).dark_gray(),
        ]),
        Line::from(vec![label("AUTHOR"), Span::raw(detail.author.clone())]),
    ]
}

/// Place the tooltip just below-right of the pointer, kept inside `bounds`
pub(crate) fn tooltip_area(bounds: Rect, column: u16, row: u16) -> Rect {
    let width = TOOLTIP_WIDTH.min(bounds.width);
    let height = TOOLTIP_HEIGHT.min(bounds.height);
    let max_x = bounds.right().saturating_sub(width);
    let max_y = bounds.bottom().saturating_sub(height);
    Rect::new(
        column.saturating_add(1).min(max_x).max(bounds.x),
        row.saturating_add(1).min(max_y).max(bounds.y),
        width,
        height,
    )
}

fn render_tooltip(frame: &mut Frame, bounds: Rect, tooltip: &Tooltip) {
    let area = tooltip_area(bounds, tooltip.column, tooltip.row);
    let block = components::bordered_block(Line::from(""))
        .border_style(Style::default().fg(theme::scatter::MARK_HOVER));
    frame.render_widget(Clear, area);
    frame.render_widget(Paragraph::new(tooltip_lines(tooltip)).block(block), area);
}
