//! locscope - commit history explorer
//!
//! A TUI that replays a project's line-level change log: a scatter plot of
//! commits by date and time of day, summary statistics, a per-file breakdown,
//! a brush selection and a scroll-driven story, all kept in sync with one
//! time bound.
//!
//! This library provides:
//! - [`app`]: Application state and logic
//! - [`config`]: Command-line configuration
//! - [`keys`]: Key binding definitions
//! - [`loc`]: Change log ingestion and commit aggregation
//! - [`model`]: Domain models
//! - [`timeline`]: View state, scales and linked-view synchronization
//! - [`ui`]: User interface components

pub mod app;
pub mod config;
pub mod keys;
pub mod loc;
pub mod model;
pub mod timeline;
pub mod ui;

#[cfg(test)]
pub(crate) mod test_support;
