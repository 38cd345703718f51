//! Constants for reading the line-level change log

/// Default change log file name
pub const DEFAULT_DATA_FILE: &str = "loc.csv";

/// Path segment between the repository URL and a commit id
pub const COMMIT_PATH: &str = "commit";

/// Calendar date format of the `date` column
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Fallback formats for the `datetime` column (tried after RFC 3339)
pub mod datetime_formats {
    /// Space-separated date and time with numeric offset
    pub const SPACED_WITH_OFFSET: &str = "%Y-%m-%d %H:%M:%S %z";
    /// ISO 8601 date and time without offset
    pub const ISO_NAIVE: &str = "%Y-%m-%dT%H:%M:%S%.f";
    /// Space-separated date and time without offset
    pub const SPACED_NAIVE: &str = "%Y-%m-%d %H:%M:%S%.f";
}

/// Field names as they appear in error messages
pub mod fields {
    pub const LINE: &str = "line";
    pub const DEPTH: &str = "depth";
    pub const LENGTH: &str = "length";
    pub const DATE: &str = "date";
    pub const TIME: &str = "time";
    pub const TIMEZONE: &str = "timezone";
    pub const DATETIME: &str = "datetime";
    pub const AUTHOR: &str = "author";
}
