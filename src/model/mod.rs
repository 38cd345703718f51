//! Data models for locscope
//!
//! UI-independent data structures: change records, commits and the
//! notifications shown to the user.

mod commit;
mod notification;
mod record;

pub use commit::{Commit, CommitLog};
pub use notification::{Notification, NotificationKind};
pub use record::{ChangeRecord, Timestamp};
