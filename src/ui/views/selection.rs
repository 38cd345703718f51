//! Selection breakdown panel
//!
//! Counts the lines of the brushed commits per file type. Shows nothing
//! while the selection is empty.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::model::{Commit, CommitLog};
use crate::timeline::{LinkedView, ViewUpdate};
use crate::ui::{components, symbols};

use super::files::TypeColors;

/// Share of selected lines belonging to one file type
#[derive(Debug, Clone, PartialEq)]
pub struct TypeShare {
    pub kind: String,
    pub count: usize,
    /// Percentage of all selected lines, 0..=100
    pub percent: f64,
}

/// Per-type line counts over `commits`, in first-seen type order
pub fn breakdown<'a>(
    log: &CommitLog,
    commits: impl IntoIterator<Item = &'a Commit>,
) -> Vec<TypeShare> {
    let mut shares: Vec<TypeShare> = Vec::new();
    let mut total = 0usize;

    for commit in commits {
        for record in log.lines(commit) {
            total += 1;
            match shares.iter_mut().find(|share| share.kind == record.kind) {
                Some(share) => share.count += 1,
                None => shares.push(TypeShare {
                    kind: record.kind.clone(),
                    count: 1,
                    percent: 0.0,
                }),
            }
        }
    }

    for share in &mut shares {
        share.percent = share.count as f64 / total as f64 * 100.0;
    }
    shares
}

/// Format a percentage with one decimal, dropping a trailing `.0`
pub fn format_percent(percent: f64) -> String {
    let text = format!("{percent:.1}");
    match text.strip_suffix(".0") {
        Some(whole) => format!("{whole}%"),
        None => format!("{text}%"),
    }
}

/// Selection panel state
#[derive(Debug, Default)]
pub struct SelectionPanel {
    selected: usize,
    shares: Vec<TypeShare>,
}

impl SelectionPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of selected commits
    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn shares(&self) -> &[TypeShare] {
        &self.shares
    }

    /// Display lines; empty when nothing is selected
    pub(crate) fn build_lines(&self, colors: &TypeColors) -> Vec<Line<'static>> {
        if self.selected == 0 {
            return Vec::new();
        }

        let noun = if self.selected == 1 { "commit" } else { "commits" };
        let mut lines = vec![Line::from(format!("{} {noun} selected", self.selected)).bold()];

        for share in &self.shares {
            let color = colors.get(&share.kind).unwrap_or(Color::Reset);
            lines.push(Line::from(vec![
                Span::styled(symbols::UNIT, Style::default().fg(color)),
                Span::raw(format!(" {:<8}", share.kind)),
                Span::raw(format!("{:>6} lines ", share.count)),
                Span::raw(format!("({})", format_percent(share.percent))).dark_gray(),
            ]));
        }
        lines
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, colors: &TypeColors) {
        let block = components::bordered_block(Line::from(" Selection "));
        frame.render_widget(Paragraph::new(self.build_lines(colors)).block(block), area);
    }
}

impl LinkedView for SelectionPanel {
    fn name(&self) -> &'static str {
        "selection"
    }

    fn refresh(&mut self, update: &ViewUpdate<'_>) {
        self.selected = update.selection.len();
        self.shares = if update.selection.is_empty() {
            Vec::new()
        } else {
            breakdown(update.log, update.selection.iter())
        };
    }
}
