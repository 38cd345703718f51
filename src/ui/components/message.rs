//! Notification title suffix

use ratatui::{
    prelude::*,
    text::{Line, Span},
};

use crate::model::{Notification, NotificationKind};

/// Separator between a pane title and its notification
const SEPARATOR: &str = " | ";

/// Label text and colour of a notification kind
fn kind_label(kind: NotificationKind) -> (&'static str, Color) {
    match kind {
        NotificationKind::Info => ("Info:", Color::Cyan),
        NotificationKind::Warning => ("Warning:", Color::Yellow),
    }
}

/// Build the `" | Label: message "` suffix appended to a pane title
///
/// With `max_width`, an over-long message is cut and ends in "…"; when not
/// even one character of it fits the line is empty.
pub fn build_notification_title(
    notification: &Notification,
    max_width: Option<usize>,
) -> Line<'static> {
    let (label, color) = kind_label(notification.kind);
    let fixed = SEPARATOR.len() + label.len() + 1;
    let message_width = notification.message.chars().count();

    let message = match max_width {
        Some(max) if fixed + message_width + 1 > max => {
            let room = max.saturating_sub(fixed + 2);
            let cut: String = notification.message.chars().take(room).collect();
            if cut.trim().is_empty() {
                return Line::default();
            }
            format!("{cut}… ")
        }
        _ => format!("{} ", notification.message),
    };

    Line::from(vec![
        Span::raw(SEPARATOR),
        Span::styled(
            format!("{label} "),
            Style::default().fg(Color::Black).bg(color),
        ),
        Span::styled(message, Style::default().fg(color)),
    ])
}
