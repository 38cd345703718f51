//! Input handling for the application

use crossterm::event::{KeyEvent, MouseEvent};

use super::state::App;
use crate::keys;
use crate::model::{Notification, NotificationKind};
use crate::ui::views::{NarrativeAction, ScatterAction, TimeControlAction};

impl App {
    /// Handle key events
    pub fn on_key_event(&mut self, key: KeyEvent) {
        // Handle Ctrl+C globally
        if keys::is_interrupt_key(&key) {
            self.quit();
            return;
        }

        if self.show_help {
            if matches!(key.code, keys::QUIT | keys::HELP | keys::ESC) {
                self.show_help = false;
            }
            return;
        }

        if self.handle_global_key(key) {
            return;
        }

        let action = self.controller.views().time_control.handle_key(key);
        if action != TimeControlAction::None {
            self.handle_time_control_action(action);
            return;
        }

        let action = self.controller.views_mut().scatter.handle_key(key);
        if action != ScatterAction::None {
            self.handle_scatter_action(action);
            return;
        }

        let action = self.narrative.handle_key(key);
        self.handle_narrative_action(action);
    }

    /// Handle mouse events
    pub fn on_mouse_event(&mut self, event: MouseEvent) {
        if self.show_help {
            return;
        }

        let action = self.controller.views_mut().scatter.handle_mouse(event);
        self.handle_scatter_action(action);

        let action = self.narrative.handle_mouse(event);
        self.handle_narrative_action(action);
    }

    fn handle_global_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            keys::QUIT => {
                self.quit();
                true
            }
            keys::HELP => {
                self.show_help = true;
                true
            }
            _ => false,
        }
    }

    fn handle_time_control_action(&mut self, action: TimeControlAction) {
        match action {
            TimeControlAction::None => {}
            TimeControlAction::SetProgress(progress) => {
                self.controller.set_progress(progress);
            }
        }
    }

    fn handle_scatter_action(&mut self, action: ScatterAction) {
        match action {
            ScatterAction::None => {}
            ScatterAction::Brush(region) => {
                self.controller.set_brush_region(region);
                if region.is_some() {
                    let count = self.controller.selection_set().len();
                    self.notification = Some(Notification::selection(count));
                } else if self
                    .notification
                    .as_ref()
                    .is_some_and(|n| n.kind == NotificationKind::Info)
                {
                    self.notification = None;
                }
            }
        }
    }

    fn handle_narrative_action(&mut self, action: NarrativeAction) {
        match action {
            NarrativeAction::None => {}
            NarrativeAction::AdvanceToStep(step) => {
                // Out-of-range steps keep the current bound
                if let Err(err) = self.controller.advance_to_step(step) {
                    tracing::debug!(%err, "ignored narrative step");
                }
            }
        }
    }
}
