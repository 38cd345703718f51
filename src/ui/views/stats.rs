//! Summary statistics panel

use std::collections::HashSet;

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::model::{Commit, CommitLog};
use crate::timeline::{LinkedView, ViewUpdate};
use crate::ui::{components, theme};

/// Summary of a set of commits
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    /// Number of commits
    pub commits: usize,
    /// Distinct files over all change records
    pub files: usize,
    /// Total changed lines
    pub total_loc: usize,
    /// Deepest nesting of any changed line
    pub max_depth: u32,
    /// Longest changed line
    pub longest_line: u32,
    /// Most lines changed by a single commit
    pub max_lines: usize,
}

impl Stats {
    /// Compute statistics over `commits`; all zero when empty
    pub fn compute<'a>(log: &CommitLog, commits: impl IntoIterator<Item = &'a Commit>) -> Self {
        let mut stats = Stats::default();
        let mut files: HashSet<&str> = HashSet::new();

        for commit in commits {
            stats.commits += 1;
            stats.max_lines = stats.max_lines.max(commit.total_lines);
            for record in log.lines(commit) {
                files.insert(&record.file);
                stats.total_loc += 1;
                stats.max_depth = stats.max_depth.max(record.depth);
                stats.longest_line = stats.longest_line.max(record.length);
            }
        }

        stats.files = files.len();
        stats
    }

    /// Label/value pairs in display order
    pub fn entries(&self) -> [(&'static str, String); 6] {
        [
            ("COMMITS", self.commits.to_string()),
            ("FILES", self.files.to_string()),
            ("TOTAL LOC", self.total_loc.to_string()),
            ("MAX DEPTH", self.max_depth.to_string()),
            ("LONGEST LINE", self.longest_line.to_string()),
            ("MAX LINES", self.max_lines.to_string()),
        ]
    }
}

/// Stats panel state
#[derive(Debug, Default)]
pub struct StatsPanel {
    stats: Stats,
}

impl StatsPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    pub(crate) fn build_line(&self) -> Line<'static> {
        let mut spans = Vec::new();
        for (i, (label, value)) in self.stats.entries().into_iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled(
                format!("{label} "),
                Style::default().fg(theme::stats::LABEL),
            ));
            spans.push(Span::styled(
                value,
                Style::default()
                    .fg(theme::stats::VALUE)
                    .add_modifier(Modifier::BOLD),
            ));
        }
        Line::from(spans)
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let block = components::bordered_block(Line::from(" Summary "));
        frame.render_widget(Paragraph::new(self.build_line()).block(block), area);
    }
}

impl LinkedView for StatsPanel {
    fn name(&self) -> &'static str {
        "stats"
    }

    fn refresh(&mut self, update: &ViewUpdate<'_>) {
        self.stats = Stats::compute(update.log, update.active.iter());
    }
}
