//! Command-line configuration

use std::path::PathBuf;

use clap::Parser;

use crate::loc::constants::DEFAULT_DATA_FILE;

/// Explore a project's commit history in the terminal
#[derive(Debug, Clone, Parser)]
#[command(name = "locscope", version, about)]
pub struct Config {
    /// Line-level change log (CSV)
    #[arg(env = "LOCSCOPE_DATA", default_value = DEFAULT_DATA_FILE)]
    pub data: PathBuf,

    /// Repository web URL; commit links become `<repo-url>/commit/<id>`
    #[arg(long, env = "LOCSCOPE_REPO_URL")]
    pub repo_url: Option<String>,

    /// Write logs to this file (the terminal is owned by the UI)
    #[arg(long, env = "LOCSCOPE_LOG_FILE")]
    pub log_file: Option<PathBuf>,

    /// Time control units moved per key press
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u8).range(1..=50))]
    pub step: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data: PathBuf::from(DEFAULT_DATA_FILE),
            repo_url: None,
            log_file: None,
            step: 1,
        }
    }
}
