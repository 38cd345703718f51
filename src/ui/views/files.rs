//! File unit view
//!
//! One row per file touched by the active commits, most-edited first, with
//! one dot per edited line coloured by file type.

use std::collections::HashMap;

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::model::{Commit, CommitLog};
use crate::timeline::{LinkedView, ViewUpdate};
use crate::ui::{components, symbols, theme};

/// Edited lines of one file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileUnits {
    /// File path
    pub name: String,
    /// File type of each edited line, in record order
    pub kinds: Vec<String>,
}

impl FileUnits {
    pub fn line_count(&self) -> usize {
        self.kinds.len()
    }
}

/// Group the records of `commits` by file, most-edited first
///
/// Files with equal counts keep first-seen order.
pub fn group_files<'a>(
    log: &CommitLog,
    commits: impl IntoIterator<Item = &'a Commit>,
) -> Vec<FileUnits> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut files: Vec<FileUnits> = Vec::new();

    for commit in commits {
        for record in log.lines(commit) {
            let slot = *index.entry(record.file.as_str()).or_insert_with(|| {
                files.push(FileUnits {
                    name: record.file.clone(),
                    kinds: Vec::new(),
                });
                files.len() - 1
            });
            files[slot].kinds.push(record.kind.clone());
        }
    }

    // Stable sort keeps first-seen order among ties
    files.sort_by(|a, b| b.line_count().cmp(&a.line_count()));
    files
}

/// Colour per file type, assigned from the palette in first-seen order
///
/// Assignments are never forgotten, so a type keeps its colour across
/// redraws even after it drops out of view.
#[derive(Debug, Clone, Default)]
pub struct TypeColors {
    assigned: Vec<String>,
}

impl TypeColors {
    /// Colour of `kind`, assigning the next palette entry on first sight
    pub fn color(&mut self, kind: &str) -> Color {
        let position = match self.assigned.iter().position(|k| k == kind) {
            Some(position) => position,
            None => {
                self.assigned.push(kind.to_string());
                self.assigned.len() - 1
            }
        };
        theme::TYPE_PALETTE[position % theme::TYPE_PALETTE.len()]
    }

    /// Colour of an already seen type
    pub fn get(&self, kind: &str) -> Option<Color> {
        self.assigned
            .iter()
            .position(|k| k == kind)
            .map(|position| theme::TYPE_PALETTE[position % theme::TYPE_PALETTE.len()])
    }
}

/// File unit view state
#[derive(Debug, Default)]
pub struct FileUnitView {
    files: Vec<FileUnits>,
    colors: TypeColors,
}

pub mod empty_text {
    pub const TITLE: &str = "No files edited yet.";
    pub const HINT: &str = "Move the time control forward to include commits";
}

impl FileUnitView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn files(&self) -> &[FileUnits] {
        &self.files
    }

    pub fn colors(&self) -> &TypeColors {
        &self.colors
    }

    /// Sum of edited lines over all files
    pub fn total_lines(&self) -> usize {
        self.files.iter().map(FileUnits::line_count).sum()
    }

    /// Build display lines, wrapping unit dots to `width` columns
    pub(crate) fn build_lines(&self, width: usize) -> Vec<Line<'static>> {
        let width = width.max(1);
        let mut lines = Vec::new();

        for file in &self.files {
            lines.push(Line::from(vec![
                Span::raw(file.name.clone()).bold(),
                Span::raw(" "),
                Span::raw(format!("{} lines", file.line_count())).dark_gray(),
            ]));

            let units: Vec<Span<'static>> = file
                .kinds
                .iter()
                .map(|kind| {
                    let color = self.colors.get(kind).unwrap_or(Color::Reset);
                    Span::styled(symbols::UNIT, Style::default().fg(color))
                })
                .collect();
            for chunk in units.chunks(width) {
                lines.push(Line::from(chunk.to_vec()));
            }
        }

        lines
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let block = components::bordered_block(Line::from(" Files "));

        if self.files.is_empty() {
            let empty = components::empty_state(empty_text::TITLE, Some(empty_text::HINT));
            frame.render_widget(empty.block(block), area);
            return;
        }

        let inner_width = area.width.saturating_sub(2) as usize;
        frame.render_widget(
            Paragraph::new(self.build_lines(inner_width)).block(block),
            area,
        );
    }
}

impl LinkedView for FileUnitView {
    fn name(&self) -> &'static str {
        "files"
    }

    fn refresh(&mut self, update: &ViewUpdate<'_>) {
        self.files = group_files(update.log, update.active.iter());
        for file in &self.files {
            for kind in &file.kinds {
                self.colors.color(kind);
            }
        }
    }
}
