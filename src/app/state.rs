//! Application state

use crate::config::Config;
use crate::loc::Dataset;
use crate::model::Notification;
use crate::timeline::ViewController;
use crate::ui::views::NarrativeView;

/// The main application state
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    pub running: bool,
    /// Help overlay visible
    pub show_help: bool,
    /// View state and the views kept in sync with it
    pub controller: ViewController,
    /// Scroll-driven story
    pub narrative: NarrativeView,
    /// Notification shown in the plot title
    pub notification: Option<Notification>,
}

impl App {
    /// Construct the application around a fully loaded dataset
    ///
    /// Views only ever see a complete, aggregated log.
    pub fn new(dataset: Dataset, config: &Config) -> Self {
        let Dataset { log, warnings } = dataset;

        let notification = Notification::warnings(&warnings);

        let narrative = NarrativeView::new(&log);
        let controller = ViewController::new(log, config.step);

        Self {
            running: true,
            show_help: false,
            controller,
            narrative,
            notification,
        }
    }

    /// Set running to false to quit the application.
    pub(crate) fn quit(&mut self) {
        self.running = false;
    }

    /// Clear expired notification
    pub fn clear_expired_notification(&mut self) {
        if let Some(ref notification) = self.notification
            && notification.is_expired()
        {
            self.notification = None;
        }
    }
}
