//! Change log loading layer
//!
//! Reads the line-level change log and aggregates it into commits.

mod aggregate;
pub mod constants;
/// Ingestor module (public for integration testing)
pub mod ingest;

pub use aggregate::{aggregate_commits, commit_url};
pub use ingest::{Ingested, Ingestor};

use std::fmt;
use std::io;
use std::path::Path;

use chrono::NaiveDate;
use thiserror::Error;

use crate::model::{CommitLog, Timestamp};

/// Errors that can occur while loading or navigating the change log
#[derive(Error, Debug)]
pub enum LocError {
    #[error("Malformed record at row {row}: field `{field}` has invalid value {value:?}")]
    MalformedRecord {
        row: usize,
        field: &'static str,
        value: String,
    },

    #[error("Commit {commit} has inconsistent `{field}` across its records")]
    DataIntegrity { commit: String, field: &'static str },

    #[error("Narrative step {step} is out of range (have {len} steps)")]
    StepOutOfRange { step: usize, len: usize },

    #[error("Failed to read change log: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] io::Error),
}

/// Data-quality issue found during ingestion that does not abort loading
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataWarning {
    /// The `date` column disagrees with the date part of `datetime`;
    /// `datetime` is kept.
    DateMismatch {
        commit: String,
        row: usize,
        date: NaiveDate,
        datetime: Timestamp,
    },
}

impl fmt::Display for DataWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataWarning::DateMismatch {
                commit,
                row,
                date,
                datetime,
            } => write!(
                f,
                "commit {commit} (row {row}): date {date} disagrees with datetime {}, using datetime",
                datetime.to_rfc3339()
            ),
        }
    }
}

/// Fully loaded change log
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    /// Aggregated, timestamp-sorted commits
    pub log: CommitLog,
    /// Non-fatal data-quality warnings
    pub warnings: Vec<DataWarning>,
}

/// Read and aggregate a change log file
///
/// Any malformed row or inconsistent commit aborts the whole load; no
/// partial dataset is returned.
pub fn load(path: &Path, repo_url: Option<&str>) -> Result<Dataset, LocError> {
    let Ingested { records, warnings } = Ingestor::parse_path(path)?;
    let record_count = records.len();
    let log = aggregate_commits(records, repo_url)?;

    for warning in &warnings {
        tracing::warn!(%warning, "data quality");
    }
    tracing::info!(
        path = %path.display(),
        records = record_count,
        commits = log.len(),
        warnings = warnings.len(),
        "loaded change log"
    );

    Ok(Dataset { log, warnings })
}
