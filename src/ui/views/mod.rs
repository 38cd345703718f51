//! View components
//!
//! Each view is one pane of the screen. Linked views refresh from the view
//! state; input-handling views return actions for App to apply.

mod files;
mod narrative;
mod scatter;
mod selection;
mod stats;
mod time_control;

pub use files::{FileUnitView, FileUnits, TypeColors, group_files};
pub use narrative::{NarrativeAction, NarrativeBlock, NarrativeView, narrate, wrap_words};
pub use scatter::{CommitDetail, ScatterAction, ScatterView, Tooltip};
pub use selection::{SelectionPanel, TypeShare, breakdown, format_percent};
pub use stats::{Stats, StatsPanel};
pub use time_control::{TimeControl, TimeControlAction, format_bound};
