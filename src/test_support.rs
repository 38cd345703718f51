//! Shared fixtures for unit tests

use crate::loc::{Ingestor, aggregate_commits};
use crate::model::CommitLog;

pub(crate) const HEADER: &str =
    "commit,file,line,depth,length,type,author,date,time,timezone,datetime";

/// CSV rows for one commit at `datetime` (UTC, `YYYY-MM-DDTHH:MM`)
///
/// `files` lists `(path, type, changed lines)`. Within a file, line `n` has
/// depth `(n - 1) % 3` and length `20 + n`.
pub(crate) fn commit_rows(
    commit: &str,
    datetime: &str,
    files: &[(&str, &str, u32)],
) -> Vec<String> {
    let date = &datetime[..10];
    let time = &datetime[11..16];
    files
        .iter()
        .flat_map(|&(path, kind, count)| {
            (1..=count).map(move |n| {
                format!(
                    "{commit},{path},{n},{},{},{kind},dev,{date},{time},+00:00,{datetime}:00Z",
                    (n - 1) % 3,
                    20 + n
                )
            })
        })
        .collect()
}

pub(crate) fn log_from_rows(rows: &[String]) -> CommitLog {
    let mut text = String::from(HEADER);
    for row in rows {
        text.push('\n');
        text.push_str(row);
    }
    let ingested = Ingestor::parse_str(&text).expect("fixture rows parse");
    aggregate_commits(ingested.records, Some("https://example.com/site"))
        .expect("fixture aggregates")
}

/// Three commits at 09:15, 14:30 and 22:00 with 5, 12 and 3 changed lines
pub(crate) fn three_commit_log() -> CommitLog {
    let mut rows = commit_rows(
        "aaa1111",
        "2024-10-07T09:15",
        &[("index.html", "html", 3), ("style.css", "css", 2)],
    );
    rows.extend(commit_rows(
        "bbb2222",
        "2024-10-08T14:30",
        &[("main.js", "js", 10), ("index.html", "html", 2)],
    ));
    rows.extend(commit_rows(
        "ccc3333",
        "2024-10-09T22:00",
        &[("main.js", "js", 3)],
    ));
    log_from_rows(&rows)
}
