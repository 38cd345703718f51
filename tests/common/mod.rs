//! Common test utilities for integration and scenario tests.
//!
//! Builds small change logs through the public ingestion API and reads
//! rendered text back out of a `TestBackend`.
//!
//! Note: Each integration test file compiles as a separate crate,
//! so not all helpers are used in every test file. We suppress
//! dead_code warnings at the module level.

#![allow(dead_code)]
#![allow(unused_imports)]

use ratatui::backend::TestBackend;

use locscope::loc::{Dataset, Ingestor, aggregate_commits};
use locscope::model::CommitLog;

pub const HEADER: &str = "commit,file,line,depth,length,type,author,date,time,timezone,datetime";

pub const REPO_URL: &str = "https://github.com/me/site";

/// Incrementally built change log text
#[derive(Debug, Clone)]
pub struct LogBuilder {
    text: String,
}

impl Default for LogBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LogBuilder {
    pub fn new() -> Self {
        Self {
            text: HEADER.to_string(),
        }
    }

    /// Add `count` changed lines of `file` to `commit` at `datetime`
    /// (`YYYY-MM-DD HH:MM`, UTC)
    pub fn lines(
        mut self,
        commit: &str,
        datetime: &str,
        file: &str,
        kind: &str,
        count: u32,
    ) -> Self {
        let (date, time) = datetime.split_at(10);
        let time = time.trim();
        for n in 1..=count {
            self.text.push_str(&format!(
                "\n{commit},{file},{n},{},{},{kind},me,{date},{time},+00:00,{date}T{time}:00Z",
                n % 4,
                10 + n * 3
            ));
        }
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn build(&self) -> CommitLog {
        let ingested = Ingestor::parse_str(&self.text).expect("change log parses");
        aggregate_commits(ingested.records, Some(REPO_URL)).expect("change log aggregates")
    }

    pub fn dataset(&self) -> Dataset {
        let ingested = Ingestor::parse_str(&self.text).expect("change log parses");
        Dataset {
            log: aggregate_commits(ingested.records, Some(REPO_URL))
                .expect("change log aggregates"),
            warnings: ingested.warnings,
        }
    }
}

/// Four commits over four days, written out of order
///
/// | commit | time (UTC)       | lines | files                     |
/// |--------|------------------|-------|---------------------------|
/// | c1     | 2024-10-01 08:00 | 6     | index.html 4, style.css 2 |
/// | c2     | 2024-10-02 13:30 | 9     | app.js 9                  |
/// | c3     | 2024-10-03 19:45 | 4     | index.html 1, app.js 3    |
/// | c4     | 2024-10-04 23:15 | 2     | README.md 2               |
pub fn four_commit_builder() -> LogBuilder {
    LogBuilder::new()
        .lines("c3", "2024-10-03 19:45", "index.html", "html", 1)
        .lines("c1", "2024-10-01 08:00", "index.html", "html", 4)
        .lines("c2", "2024-10-02 13:30", "app.js", "js", 9)
        .lines("c4", "2024-10-04 23:15", "README.md", "md", 2)
        .lines("c1", "2024-10-01 08:00", "style.css", "css", 2)
        .lines("c3", "2024-10-03 19:45", "app.js", "js", 3)
}

pub fn four_commit_log() -> CommitLog {
    four_commit_builder().build()
}

/// Rendered buffer as one string per row, trailing spaces trimmed
pub fn buffer_lines(backend: &TestBackend) -> Vec<String> {
    let buffer = backend.buffer();
    let width = buffer.area.width as usize;
    buffer
        .content
        .chunks(width)
        .map(|row| {
            let line: String = row.iter().map(|cell| cell.symbol()).collect();
            line.trim_end().to_string()
        })
        .collect()
}

/// Rendered buffer as a single newline-joined string
pub fn buffer_text(backend: &TestBackend) -> String {
    buffer_lines(backend).join("\n")
}
