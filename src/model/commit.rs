//! Commit data model
//!
//! A [`Commit`] is the lightweight summary of one commit. Its change records
//! are bulk payload kept apart in the owning [`CommitLog`] and reached through
//! [`CommitLog::lines`].

use std::collections::HashSet;

use chrono::{FixedOffset, Timelike};

use super::record::{ChangeRecord, Timestamp};

/// Summary of all change records sharing one commit id
#[derive(Debug, Clone, PartialEq)]
pub struct Commit {
    /// Commit identifier
    pub id: String,

    /// Canonical link to the commit
    pub url: String,

    /// Commit author
    pub author: String,

    /// Commit timestamp, expressed in the commit's own offset
    pub datetime: Timestamp,

    /// Fractional hour of day (hours + minutes / 60), in the commit's own offset
    pub hour_frac: f64,

    /// Number of changed lines (= number of change records)
    pub total_lines: usize,

    /// Position of this commit's records inside the owning log
    slot: usize,
}

impl Commit {
    pub(crate) fn new(
        id: String,
        url: String,
        author: String,
        datetime: Timestamp,
        timezone: FixedOffset,
        total_lines: usize,
        slot: usize,
    ) -> Self {
        let datetime = datetime.with_timezone(&timezone);
        let hour_frac = datetime.hour() as f64 + datetime.minute() as f64 / 60.0;
        Self {
            id,
            url,
            author,
            datetime,
            hour_frac,
            total_lines,
            slot,
        }
    }

    /// Get a display-friendly short ID
    pub fn short_id(&self) -> &str {
        let end = self
            .id
            .char_indices()
            .nth(7)
            .map(|(i, _)| i)
            .unwrap_or(self.id.len());
        &self.id[..end]
    }
}

/// Immutable, timestamp-sorted list of commits with their change records
#[derive(Debug, Clone, Default)]
pub struct CommitLog {
    commits: Vec<Commit>,
    lines: Vec<Vec<ChangeRecord>>,
}

impl CommitLog {
    /// Assemble a log from commits and their record groups
    ///
    /// `groups[i]` must hold the records of the commit whose slot is `i`.
    pub(crate) fn from_parts(commits: Vec<Commit>, groups: Vec<Vec<ChangeRecord>>) -> Self {
        debug_assert!(commits.iter().all(|c| c.slot < groups.len()));
        Self {
            commits,
            lines: groups,
        }
    }

    /// All commits, ascending by timestamp
    pub fn commits(&self) -> &[Commit] {
        &self.commits
    }

    /// Change records of a commit, in encounter order
    pub fn lines(&self, commit: &Commit) -> &[ChangeRecord] {
        self.lines
            .get(commit.slot)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Number of commits
    pub fn len(&self) -> usize {
        self.commits.len()
    }

    /// Whether the log holds no commits
    pub fn is_empty(&self) -> bool {
        self.commits.is_empty()
    }

    /// Commit at a narrative position
    pub fn get(&self, index: usize) -> Option<&Commit> {
        self.commits.get(index)
    }

    /// Earliest and latest commit timestamps
    pub fn time_extent(&self) -> Option<(Timestamp, Timestamp)> {
        Some((self.commits.first()?.datetime, self.commits.last()?.datetime))
    }

    /// Smallest and largest per-commit line counts
    pub fn lines_extent(&self) -> Option<(usize, usize)> {
        let min = self.commits.iter().map(|c| c.total_lines).min()?;
        let max = self.commits.iter().map(|c| c.total_lines).max()?;
        Some((min, max))
    }

    /// Number of distinct files touched by a commit
    pub fn file_count(&self, commit: &Commit) -> usize {
        self.lines(commit)
            .iter()
            .map(|record| record.file.as_str())
            .collect::<HashSet<_>>()
            .len()
    }
}
