//! Manual time control
//!
//! A 0..=100 slider over the commit history. Key presses produce
//! [`TimeControlAction::SetProgress`]; the displayed value and label are
//! written back from the view state on every refresh, so after a narrative
//! step the slider shows where the pinned commit sits.

use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::Gauge,
};

use crate::keys;
use crate::model::Timestamp;
use crate::timeline::scale::PROGRESS_RANGE;
use crate::timeline::{LinkedView, ViewUpdate};
use crate::ui::{components, theme};

/// Label format: "October 7, 2024 at 11:07 AM"
pub const LABEL_FORMAT: &str = "%B %-d, %Y at %-I:%M %p";

/// Multiplier applied to the step for `H`/`L`
const FAST_FACTOR: f64 = 10.0;

/// Actions that the time control can request from App
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TimeControlAction {
    /// No action needed
    None,
    /// Move the time bound to this slider value
    SetProgress(f64),
}

/// Long-date, short-time label of a time bound
pub fn format_bound(bound: &Timestamp) -> String {
    bound.format(LABEL_FORMAT).to_string()
}

/// Time control state
#[derive(Debug)]
pub struct TimeControl {
    progress: f64,
    label: String,
    step: f64,
}

impl TimeControl {
    /// Create a time control moving `step` units per key press
    pub fn new(step: u8) -> Self {
        Self {
            progress: PROGRESS_RANGE.1,
            label: String::new(),
            step: f64::from(step.max(1)),
        }
    }

    /// Current slider value in 0..=100
    pub fn progress(&self) -> f64 {
        self.progress
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Handle key event and return action
    pub fn handle_key(&self, key: KeyEvent) -> TimeControlAction {
        let target = match key.code {
            k if keys::is_time_back(k) => self.progress - self.step,
            k if keys::is_time_forward(k) => self.progress + self.step,
            keys::TIME_BACK_FAST => self.progress - self.step * FAST_FACTOR,
            keys::TIME_FORWARD_FAST => self.progress + self.step * FAST_FACTOR,
            keys::TIME_START => PROGRESS_RANGE.0,
            keys::TIME_END => PROGRESS_RANGE.1,
            _ => return TimeControlAction::None,
        };
        TimeControlAction::SetProgress(target.clamp(PROGRESS_RANGE.0, PROGRESS_RANGE.1))
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let block = components::bordered_block(Line::from(" Time "));
        let ratio = (self.progress / PROGRESS_RANGE.1).clamp(0.0, 1.0);
        let gauge = Gauge::default()
            .block(block)
            .gauge_style(Style::default().fg(theme::time_control::GAUGE))
            .ratio(ratio)
            .label(Span::from(self.label.clone()).fg(theme::time_control::LABEL).bold());
        frame.render_widget(gauge, area);
    }
}

impl LinkedView for TimeControl {
    fn name(&self) -> &'static str {
        "time_control"
    }

    fn refresh(&mut self, update: &ViewUpdate<'_>) {
        match update.state.time_bound() {
            Some(bound) => {
                self.progress = update
                    .scales
                    .progress
                    .apply(&bound)
                    .clamp(PROGRESS_RANGE.0, PROGRESS_RANGE.1);
                self.label = format_bound(&bound);
            }
            None => {
                self.progress = PROGRESS_RANGE.0;
                self.label = "No commits".to_string();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::DateTime;
    use crossterm::event::{KeyCode, KeyModifiers};

    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn control_at(progress: f64, step: u8) -> TimeControl {
        let mut control = TimeControl::new(step);
        control.progress = progress;
        control
    }

    #[test]
    fn test_format_bound() {
        let bound = DateTime::parse_from_rfc3339("2024-10-07T11:07:00-07:00").unwrap();
        assert_eq!(format_bound(&bound), "October 7, 2024 at 11:07 AM");
        let evening = DateTime::parse_from_rfc3339("2024-12-25T22:30:00+00:00").unwrap();
        assert_eq!(format_bound(&evening), "December 25, 2024 at 10:30 PM");
    }

    #[test]
    fn test_arrow_keys_step() {
        let control = control_at(50.0, 1);
        assert_eq!(
            control.handle_key(key(KeyCode::Left)),
            TimeControlAction::SetProgress(49.0)
        );
        assert_eq!(
            control.handle_key(key(KeyCode::Char('l'))),
            TimeControlAction::SetProgress(51.0)
        );
        assert_eq!(
            control.handle_key(key(KeyCode::Char('L'))),
            TimeControlAction::SetProgress(60.0)
        );
    }

    #[test]
    fn test_step_is_clamped() {
        let control = control_at(98.0, 5);
        assert_eq!(
            control.handle_key(key(KeyCode::Right)),
            TimeControlAction::SetProgress(100.0)
        );
        let control = control_at(3.0, 5);
        assert_eq!(
            control.handle_key(key(KeyCode::Char('H'))),
            TimeControlAction::SetProgress(0.0)
        );
    }

    #[test]
    fn test_home_end() {
        let control = control_at(42.0, 1);
        assert_eq!(
            control.handle_key(key(KeyCode::Home)),
            TimeControlAction::SetProgress(0.0)
        );
        assert_eq!(
            control.handle_key(key(KeyCode::End)),
            TimeControlAction::SetProgress(100.0)
        );
    }

    #[test]
    fn test_other_keys_ignored() {
        let control = control_at(42.0, 1);
        assert_eq!(
            control.handle_key(key(KeyCode::Char('j'))),
            TimeControlAction::None
        );
    }
}
