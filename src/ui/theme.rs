//! Color theme definitions
//!
//! Centralized color constants for consistent UI appearance.

use ratatui::style::Color;

/// Colors for the scatter plot
pub mod scatter {
    use super::*;

    /// Mark color at resting opacity
    pub const MARK: Color = Color::Rgb(70, 130, 180);
    /// Mark color while hovered (full opacity)
    pub const MARK_HOVER: Color = Color::Rgb(135, 185, 230);
    /// Mark color when inside the brush region
    pub const MARK_SELECTED: Color = Color::Rgb(255, 107, 107);
    /// Axis lines and labels
    pub const AXIS: Color = Color::Gray;
    /// Horizontal gridlines
    pub const GRIDLINE: Color = Color::DarkGray;
    /// Brush rectangle outline
    pub const BRUSH: Color = Color::Yellow;
    /// Resting opacity of marks
    pub const RESTING_OPACITY: f32 = 0.7;
}

/// Colors for the summary statistics row
pub mod stats {
    use super::*;

    pub const LABEL: Color = Color::DarkGray;
    pub const VALUE: Color = Color::White;
}

/// Colors for the narrative pane
pub mod narrative {
    use super::*;

    /// Text of the step currently driving the time bound
    pub const ACTIVE: Color = Color::White;
    /// Text of other steps
    pub const INACTIVE: Color = Color::DarkGray;
    /// Commit link
    pub const LINK: Color = Color::Cyan;
}

/// Colors for the time control
pub mod time_control {
    use super::*;

    pub const GAUGE: Color = Color::Rgb(70, 130, 180);
    pub const LABEL: Color = Color::Yellow;
}

/// Categorical palette for file types, assigned in first-seen order
pub const TYPE_PALETTE: [Color; 10] = [
    Color::Rgb(78, 121, 167),
    Color::Rgb(242, 142, 44),
    Color::Rgb(225, 87, 89),
    Color::Rgb(118, 183, 178),
    Color::Rgb(89, 161, 79),
    Color::Rgb(237, 201, 73),
    Color::Rgb(175, 122, 161),
    Color::Rgb(255, 157, 167),
    Color::Rgb(156, 117, 95),
    Color::Rgb(186, 176, 171),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_colors_distinct() {
        for (i, a) in TYPE_PALETTE.iter().enumerate() {
            for b in &TYPE_PALETTE[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_selected_mark_differs_from_resting() {
        assert_ne!(scatter::MARK, scatter::MARK_SELECTED);
        assert_ne!(scatter::MARK, scatter::MARK_HOVER);
    }
}
