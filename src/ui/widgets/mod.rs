//! Reusable UI widgets

mod help_panel;
mod status_bar;

pub use help_panel::{build_help_lines, render_help_panel};
pub use status_bar::render_status_bar;
