//! Common styling utilities for TUI components

use ratatui::style::Color;
use ratatui::widgets::{Block, Borders};

/// Standard color for focused panels
pub const FOCUS_COLOR: Color = Color::Yellow;

/// Standard color for help text
pub const HELP_COLOR: Color = Color::DarkGray;

/// Standard color for section headers
pub const HEADER_COLOR: Color = Color::Cyan;

/// Standard color for favorable deltas
pub const POSITIVE_COLOR: Color = Color::Green;

/// Standard color for unfavorable deltas
pub const NEGATIVE_COLOR: Color = Color::Red;

/// Standard color for baseline/reference values
pub const BASELINE_COLOR: Color = Color::Gray;

/// Standard color for scenario values
pub const SCENARIO_COLOR: Color = Color::Cyan;

/// Create a bordered block with a title.
pub fn titled_block(title: &str) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", title))
}

/// Color for a delta where an increase is favorable (revenue, net position).
pub fn delta_color(delta: f64) -> Color {
    if delta >= 0.0 {
        POSITIVE_COLOR
    } else {
        NEGATIVE_COLOR
    }
}

/// Color for a delta where an increase is unfavorable (costs).
pub fn inverted_delta_color(delta: f64) -> Color {
    if delta > 0.0 {
        NEGATIVE_COLOR
    } else {
        POSITIVE_COLOR
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delta_colors() {
        assert_eq!(delta_color(100.0), POSITIVE_COLOR);
        assert_eq!(delta_color(-100.0), NEGATIVE_COLOR);
        assert_eq!(inverted_delta_color(100.0), NEGATIVE_COLOR);
        assert_eq!(inverted_delta_color(-100.0), POSITIVE_COLOR);
        assert_eq!(inverted_delta_color(0.0), POSITIVE_COLOR);
    }
}
