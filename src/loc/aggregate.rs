//! Commit aggregation (change records → sorted [`CommitLog`])

use std::collections::HashMap;

use super::LocError;
use super::constants::{COMMIT_PATH, fields};
use crate::model::{ChangeRecord, Commit, CommitLog};

/// Build the canonical link for a commit
///
/// Without a repository URL the link is the relative `commit/<id>`.
pub fn commit_url(repo_url: Option<&str>, id: &str) -> String {
    match repo_url.map(|url| url.trim_end_matches('/')) {
        Some(base) if !base.is_empty() => format!("{base}/{COMMIT_PATH}/{id}"),
        _ => format!("{COMMIT_PATH}/{id}"),
    }
}

/// Group change records into commits
///
/// Records are grouped by commit id in first-seen order. The first record of
/// each group supplies the commit's author and timestamp; every other record
/// must agree with it. The result is sorted ascending by timestamp, with ties
/// kept in first-seen order.
pub fn aggregate_commits(
    records: Vec<ChangeRecord>,
    repo_url: Option<&str>,
) -> Result<CommitLog, LocError> {
    let mut group_index: HashMap<String, usize> = HashMap::new();
    let mut groups: Vec<Vec<ChangeRecord>> = Vec::new();

    for record in records {
        match group_index.get(&record.commit) {
            Some(&slot) => groups[slot].push(record),
            None => {
                group_index.insert(record.commit.clone(), groups.len());
                groups.push(vec![record]);
            }
        }
    }

    let mut commits = Vec::with_capacity(groups.len());
    for (slot, group) in groups.iter().enumerate() {
        let Some((first, rest)) = group.split_first() else {
            continue;
        };
        check_consistent(first, rest)?;

        commits.push(Commit::new(
            first.commit.clone(),
            commit_url(repo_url, &first.commit),
            first.author.clone(),
            first.datetime,
            first.timezone,
            group.len(),
            slot,
        ));
    }

    // Stable: equal timestamps keep group order
    commits.sort_by_key(|commit| commit.datetime);

    tracing::debug!(commits = commits.len(), "aggregated commits");
    Ok(CommitLog::from_parts(commits, groups))
}

fn check_consistent(first: &ChangeRecord, rest: &[ChangeRecord]) -> Result<(), LocError> {
    for record in rest {
        let field = if record.author != first.author {
            fields::AUTHOR
        } else if record.datetime != first.datetime || record.timezone != first.timezone {
            fields::DATETIME
        } else {
            continue;
        };
        return Err(LocError::DataIntegrity {
            commit: first.commit.clone(),
            field,
        });
    }
    Ok(())
}
