//! Change record data model

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime};

/// Timestamp with the committer's own UTC offset
pub type Timestamp = DateTime<FixedOffset>;

/// One changed source line in one commit
///
/// The atomic unit of the change log. Immutable once parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeRecord {
    /// Commit identifier (hash)
    pub commit: String,

    /// Path of the changed file
    pub file: String,

    /// Line number within the file (1-based)
    pub line: u32,

    /// Nesting depth of the line
    pub depth: u32,

    /// Length of the line in characters
    pub length: u32,

    /// File type / technology category (e.g. `js`, `css`)
    pub kind: String,

    /// Commit author
    pub author: String,

    /// Calendar date of the commit as written in the log
    pub date: NaiveDate,

    /// Local time-of-day of the commit
    pub time: NaiveTime,

    /// UTC offset of the commit
    pub timezone: FixedOffset,

    /// Full commit timestamp (authoritative)
    pub datetime: Timestamp,
}

impl ChangeRecord {
    /// `datetime` seen from the row's own `timezone`
    ///
    /// The datetime column may carry any offset (often `Z`); the local date
    /// and hour of a commit are read in `timezone`.
    pub fn local_datetime(&self) -> Timestamp {
        self.datetime.with_timezone(&self.timezone)
    }

    /// Whether the date column agrees with the local date of `datetime`
    pub fn date_matches_datetime(&self) -> bool {
        self.local_datetime().date_naive() == self.date
    }
}
