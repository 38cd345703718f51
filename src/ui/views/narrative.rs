//! Narrative View - the scroll-driven story
//!
//! One text block per commit in timestamp order, built once at startup. The
//! line at half the viewport height is the trigger line: the block under it
//! is the active narrative step. Scrolling across block boundaries produces
//! [`StepEvent`]s for the [`NarrativeController`], which settles on the most
//! recent one.

use std::cell::Cell;

use crossterm::event::{KeyEvent, MouseEvent, MouseEventKind};
use ratatui::{
    Frame,
    layout::{Position, Rect},
    style::{Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::keys;
use crate::model::CommitLog;
use crate::timeline::{NarrativeController, StepEvent};
use crate::ui::{components, symbols, theme};

/// Date format of narrative text: "Monday, October 7, 2024"
pub const DATE_FORMAT: &str = "%A, %B %-d, %Y";
/// Time format of narrative text: "9:15 AM"
pub const TIME_FORMAT: &str = "%-I:%M %p";

/// Lines scrolled per mouse wheel notch
const WHEEL_LINES: isize = 3;

/// Width of the active-step gutter in front of each line
const GUTTER: u16 = 2;

/// Viewport assumed before the first render
const INITIAL_VIEWPORT: (u16, u16) = (40, 20);

/// Actions that NarrativeView can request from App
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NarrativeAction {
    /// No action needed
    None,
    /// Pin the time bound to this narrative step
    AdvanceToStep(usize),
}

/// Text of one narrative step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NarrativeBlock {
    pub text: String,
    pub url: String,
}

/// Build one block per commit, in narrative order
pub fn narrate(log: &CommitLog) -> Vec<NarrativeBlock> {
    log.commits()
        .iter()
        .enumerate()
        .map(|(i, commit)| {
            let which = if i == 0 {
                "my first commit"
            } else {
                "another commit"
            };
            NarrativeBlock {
                text: format!(
                    "On {} at {}, I made {which}. I edited {} lines across {} files.",
                    commit.datetime.format(DATE_FORMAT),
                    commit.datetime.format(TIME_FORMAT),
                    commit.total_lines,
                    log.file_count(commit),
                ),
                url: commit.url.clone(),
            }
        })
        .collect()
}

/// Greedy word wrap to `width` columns
///
/// Words longer than the width are split.
pub fn wrap_words(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();
        while word.len() > width {
            if current_len > 0 {
                lines.push(std::mem::take(&mut current));
                current_len = 0;
            }
            lines.push(word.drain(..width).collect());
        }
        if word.is_empty() {
            continue;
        }

        let needed = if current_len == 0 {
            word.len()
        } else {
            current_len + 1 + word.len()
        };
        if needed > width {
            lines.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if current_len > 0 {
            current.push(' ');
            current_len += 1;
        }
        current.extend(word.iter());
        current_len += word.len();
    }

    if current_len > 0 {
        lines.push(current);
    }
    lines
}

/// Crossings when the trigger line moves from block `from` to block `to`
///
/// One Exit/Enter pair per boundary, in scroll order. Staying inside a block
/// that is not yet current enters it.
pub(crate) fn crossings(from: usize, to: usize, current: Option<usize>) -> Vec<StepEvent> {
    use std::cmp::Ordering;

    match from.cmp(&to) {
        Ordering::Equal if current == Some(to) => Vec::new(),
        Ordering::Equal => vec![StepEvent::Enter(to)],
        Ordering::Less => (from..to)
            .flat_map(|step| [StepEvent::Exit(step), StepEvent::Enter(step + 1)])
            .collect(),
        Ordering::Greater => (to + 1..=from)
            .rev()
            .flat_map(|step| [StepEvent::Exit(step), StepEvent::Enter(step - 1)])
            .collect(),
    }
}

/// Narrative View state
#[derive(Debug)]
pub struct NarrativeView {
    blocks: Vec<NarrativeBlock>,
    controller: NarrativeController,
    /// Block line under the trigger line
    scroll: usize,
    /// Pane area from the last render
    area: Cell<Rect>,
    /// Text area (inside borders) from the last render
    viewport: Cell<(u16, u16)>,
}

pub mod empty_text {
    pub const TITLE: &str = "Nothing to tell yet.";
    pub const HINT: &str = "The change log has no commits";
}

impl NarrativeView {
    /// Build the story for `log`
    pub fn new(log: &CommitLog) -> Self {
        let blocks = narrate(log);
        Self {
            controller: NarrativeController::new(blocks.len()),
            blocks,
            scroll: 0,
            area: Cell::new(Rect::default()),
            viewport: Cell::new(INITIAL_VIEWPORT),
        }
    }

    pub fn blocks(&self) -> &[NarrativeBlock] {
        &self.blocks
    }

    /// Step most recently entered by scrolling
    pub fn current_step(&self) -> Option<usize> {
        self.controller.current()
    }

    /// Block line currently under the trigger line
    pub fn scroll(&self) -> usize {
        self.scroll
    }

    fn text_width(&self) -> usize {
        self.viewport.get().0.saturating_sub(GUTTER).max(1) as usize
    }

    /// Height of each block at the current width: text, link and a blank line
    fn block_heights(&self) -> Vec<usize> {
        let width = self.text_width();
        self.blocks
            .iter()
            .map(|block| wrap_words(&block.text, width).len() + 2)
            .collect()
    }

    /// Block containing block line `line`
    fn block_at(heights: &[usize], line: usize) -> usize {
        let mut start = 0;
        for (step, height) in heights.iter().enumerate() {
            if line < start + height {
                return step;
            }
            start += height;
        }
        heights.len().saturating_sub(1)
    }

    /// Move the trigger line by `delta` lines and report the step to pin
    pub fn scroll_by(&mut self, delta: isize) -> NarrativeAction {
        let heights = self.block_heights();
        let total: usize = heights.iter().sum();
        if total == 0 {
            return NarrativeAction::None;
        }

        let from = Self::block_at(&heights, self.scroll);
        self.scroll = self.scroll.saturating_add_signed(delta).min(total - 1);
        let to = Self::block_at(&heights, self.scroll);

        let events = crossings(from, to, self.controller.current());
        match self.controller.apply(&events) {
            Some(step) => NarrativeAction::AdvanceToStep(step),
            None => NarrativeAction::None,
        }
    }

    /// Handle key event and return action
    pub fn handle_key(&mut self, key: KeyEvent) -> NarrativeAction {
        let page = self.viewport.get().1.max(1) as isize;
        match key.code {
            k if keys::is_move_down(k) => self.scroll_by(1),
            k if keys::is_move_up(k) => self.scroll_by(-1),
            keys::PAGE_DOWN => self.scroll_by(page),
            keys::PAGE_UP => self.scroll_by(-page),
            _ => NarrativeAction::None,
        }
    }

    /// Handle mouse wheel over the pane
    pub fn handle_mouse(&mut self, event: MouseEvent) -> NarrativeAction {
        if !self.area.get().contains(Position::new(event.column, event.row)) {
            return NarrativeAction::None;
        }
        match event.kind {
            MouseEventKind::ScrollDown => self.scroll_by(WHEEL_LINES),
            MouseEventKind::ScrollUp => self.scroll_by(-WHEEL_LINES),
            _ => NarrativeAction::None,
        }
    }

    /// All content lines with half a viewport of padding before and after
    ///
    /// The padding puts block line `scroll` at the trigger line when the
    /// content is drawn from line `scroll`.
    pub(crate) fn build_lines(&self, pinned: Option<usize>) -> Vec<Line<'static>> {
        let width = self.text_width();
        let pad = (self.viewport.get().1 / 2) as usize;
        let mut lines = vec![Line::from(""); pad];

        for (step, block) in self.blocks.iter().enumerate() {
            let active = pinned == Some(step);
            let (gutter, style) = if active {
                (
                    format!("{:<width$}", symbols::ACTIVE_STEP, width = GUTTER as usize),
                    Style::default()
                        .fg(theme::narrative::ACTIVE)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                (
                    " ".repeat(GUTTER as usize),
                    Style::default().fg(theme::narrative::INACTIVE),
                )
            };

            for text in wrap_words(&block.text, width) {
                lines.push(Line::from(vec![
                    Span::styled(gutter.clone(), Style::default().fg(theme::narrative::LINK)),
                    Span::styled(text, style),
                ]));
            }
            lines.push(Line::from(vec![
                Span::raw(gutter),
                Span::raw(symbols::LINK).fg(theme::narrative::LINK),
                Span::raw(block.url.clone())
                    .fg(theme::narrative::LINK)
                    .underlined(),
            ]));
            lines.push(Line::from(""));
        }

        lines.extend(std::iter::repeat_n(Line::from(""), pad));
        lines
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, pinned: Option<usize>) {
        let title = match pinned {
            Some(step) => format!(" Story [{}/{}] ", step + 1, self.blocks.len()),
            None => " Story ".to_string(),
        };
        let block = components::bordered_block(Line::from(title).bold());
        let inner = block.inner(area);
        self.area.set(area);
        self.viewport.set((inner.width, inner.height));

        if self.blocks.is_empty() {
            let empty = components::empty_state(empty_text::TITLE, Some(empty_text::HINT));
            frame.render_widget(empty.block(block), area);
            return;
        }

        let visible: Vec<Line> = self
            .build_lines(pinned)
            .into_iter()
            .skip(self.scroll)
            .take(inner.height as usize)
            .collect();
        frame.render_widget(Paragraph::new(visible).block(block), area);
    }
}
