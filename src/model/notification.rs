//! Notification model
//!
//! Short-lived feedback shown in the plot title: data warnings found while
//! loading, and the size of a fresh brush selection.

use std::fmt::Display;
use std::time::{Duration, Instant};

/// How long a notification stays on screen
const LIFETIME: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    /// Feedback on the user's own action
    Info,
    /// Data-quality problem in the loaded log
    Warning,
}

/// A message in the plot title, gone after [`LIFETIME`]
#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
    pub created_at: Instant,
}

impl Notification {
    fn with_kind(message: String, kind: NotificationKind) -> Self {
        Self {
            message,
            kind,
            created_at: Instant::now(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::with_kind(message.into(), NotificationKind::Info)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::with_kind(message.into(), NotificationKind::Warning)
    }

    /// One warning for a batch of problems: the first, then a count of the rest
    ///
    /// `None` when there is nothing to report.
    pub fn warnings<T: Display>(problems: &[T]) -> Option<Self> {
        let (first, rest) = problems.split_first()?;
        let message = match rest.len() {
            0 => first.to_string(),
            more => format!("{first} (+{more} more)"),
        };
        Some(Self::warning(message))
    }

    /// Size of a brush selection
    pub fn selection(count: usize) -> Self {
        let noun = if count == 1 { "commit" } else { "commits" };
        Self::info(format!("{count} {noun} selected"))
    }

    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= LIFETIME
    }
}
