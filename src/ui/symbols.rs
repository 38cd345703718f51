//! UI symbols (units, links, step marker)

/// One edited line in the file unit view
pub const UNIT: &str = "●";

/// Tooltip link prefix
pub const LINK: &str = "↗ ";

/// Marker of the narrative step currently driving the time bound
pub const ACTIVE_STEP: &str = "▌";
