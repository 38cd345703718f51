//! Change log ingestion (CSV rows → [`ChangeRecord`])
//!
//! Every row must parse completely: numeric columns are integers, the date,
//! time, timezone and datetime columns are well formed. The first bad field
//! aborts ingestion with [`LocError::MalformedRecord`].

use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::sync::LazyLock;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime};
use regex::Regex;
use serde::Deserialize;

use super::constants::{self, datetime_formats, fields};
use super::{DataWarning, LocError};
use crate::model::{ChangeRecord, Timestamp};

/// Regex for the `timezone` column: `Z`, `+HH:MM` or `+HHMM`
///
/// Groups:
/// 1. sign
/// 2. hours
/// 3. minutes
static TIMEZONE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:Z|([+-])(\d{2}):?(\d{2}))$").expect("Invalid timezone regex")
});

/// Regex for the `time` column: `HH:MM[:SS[.fff]]`, optionally followed by an offset
///
/// Groups:
/// 1. hours
/// 2. minutes
/// 3. seconds (optional)
static TIME_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{1,2}):(\d{2})(?::(\d{2})(?:\.\d+)?)?(?:Z|[+-]\d{2}:?\d{2})?$")
        .expect("Invalid time regex")
});

/// One row of the change log, before validation
#[derive(Debug, Deserialize)]
struct RawRow {
    commit: String,
    file: String,
    line: String,
    depth: String,
    length: String,
    #[serde(rename = "type")]
    kind: String,
    author: String,
    date: String,
    time: String,
    timezone: String,
    datetime: String,
}

/// Result of ingesting a change log
#[derive(Debug, Clone, Default)]
pub struct Ingested {
    /// Parsed records, in file order
    pub records: Vec<ChangeRecord>,
    /// Data-quality warnings (at most one per commit)
    pub warnings: Vec<DataWarning>,
}

/// Parser for change log rows
pub struct Ingestor;

impl Ingestor {
    /// Parse a change log file
    pub fn parse_path(path: &Path) -> Result<Ingested, LocError> {
        let file = File::open(path)?;
        Self::parse_reader(file)
    }

    /// Parse change log text (header row first)
    pub fn parse_str(input: &str) -> Result<Ingested, LocError> {
        Self::parse_reader(input.as_bytes())
    }

    /// Parse a change log from any reader (header row first)
    pub fn parse_reader<R: Read>(reader: R) -> Result<Ingested, LocError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut ingested = Ingested::default();
        let mut warned_commits: HashSet<String> = HashSet::new();

        for (index, raw) in csv_reader.deserialize::<RawRow>().enumerate() {
            // Row 1 is the header
            let row = index + 2;
            let record = Self::parse_row(raw?, row)?;

            if !record.date_matches_datetime() && warned_commits.insert(record.commit.clone()) {
                ingested.warnings.push(DataWarning::DateMismatch {
                    commit: record.commit.clone(),
                    row,
                    date: record.date,
                    datetime: record.datetime,
                });
            }
            ingested.records.push(record);
        }

        Ok(ingested)
    }

    fn parse_row(raw: RawRow, row: usize) -> Result<ChangeRecord, LocError> {
        let line = parse_count(&raw.line, fields::LINE, row)?;
        if line == 0 {
            return Err(malformed(row, fields::LINE, &raw.line));
        }
        let depth = parse_count(&raw.depth, fields::DEPTH, row)?;
        let length = parse_count(&raw.length, fields::LENGTH, row)?;

        let date = NaiveDate::parse_from_str(&raw.date, constants::DATE_FORMAT)
            .map_err(|_| malformed(row, fields::DATE, &raw.date))?;
        let time = parse_time(&raw.time).ok_or_else(|| malformed(row, fields::TIME, &raw.time))?;
        let timezone = parse_timezone(&raw.timezone)
            .ok_or_else(|| malformed(row, fields::TIMEZONE, &raw.timezone))?;
        let datetime = parse_datetime(&raw.datetime, timezone)
            .ok_or_else(|| malformed(row, fields::DATETIME, &raw.datetime))?;

        Ok(ChangeRecord {
            commit: raw.commit,
            file: raw.file,
            line,
            depth,
            length,
            kind: raw.kind,
            author: raw.author,
            date,
            time,
            timezone,
            datetime,
        })
    }
}

fn malformed(row: usize, field: &'static str, value: &str) -> LocError {
    LocError::MalformedRecord {
        row,
        field,
        value: value.to_string(),
    }
}

fn parse_count(value: &str, field: &'static str, row: usize) -> Result<u32, LocError> {
    value.parse::<u32>().map_err(|_| malformed(row, field, value))
}

/// Parse a UTC offset such as `-07:00`, `+0530` or `Z`
pub(crate) fn parse_timezone(value: &str) -> Option<FixedOffset> {
    let caps = TIMEZONE_REGEX.captures(value)?;
    let Some(sign) = caps.get(1) else {
        return FixedOffset::east_opt(0);
    };
    let hours: i32 = caps.get(2)?.as_str().parse().ok()?;
    let minutes: i32 = caps.get(3)?.as_str().parse().ok()?;
    if minutes >= 60 {
        return None;
    }
    let seconds = hours * 3600 + minutes * 60;
    if sign.as_str() == "-" {
        FixedOffset::west_opt(seconds)
    } else {
        FixedOffset::east_opt(seconds)
    }
}

/// Parse a local time-of-day, ignoring any trailing offset
pub(crate) fn parse_time(value: &str) -> Option<NaiveTime> {
    let caps = TIME_REGEX.captures(value)?;
    let hours: u32 = caps.get(1)?.as_str().parse().ok()?;
    let minutes: u32 = caps.get(2)?.as_str().parse().ok()?;
    let seconds: u32 = match caps.get(3) {
        Some(s) => s.as_str().parse().ok()?,
        None => 0,
    };
    NaiveTime::from_hms_opt(hours, minutes, seconds)
}

/// Parse the authoritative `datetime` column
///
/// Values without an offset are placed in the row's `timezone`.
pub(crate) fn parse_datetime(value: &str, timezone: FixedOffset) -> Option<Timestamp> {
    if let Ok(datetime) = DateTime::parse_from_rfc3339(value) {
        return Some(datetime);
    }
    if let Ok(datetime) = DateTime::parse_from_str(value, datetime_formats::SPACED_WITH_OFFSET) {
        return Some(datetime);
    }
    [datetime_formats::ISO_NAIVE, datetime_formats::SPACED_NAIVE]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .and_then(|naive| naive.and_local_timezone(timezone).single())
}
