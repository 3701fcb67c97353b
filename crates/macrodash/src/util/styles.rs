//! Common styling utilities for TUI components

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders};

/// Standard color for focused panels
pub const FOCUS_COLOR: Color = Color::Yellow;

/// Standard color for help text
pub const HELP_COLOR: Color = Color::DarkGray;

/// Standard color for headers
pub const HEADER_COLOR: Color = Color::Cyan;

/// Result highlight, e.g. the equilibrium line under a chart
pub const RESULT_COLOR: Color = Color::Green;

/// IS curve and aggregate supply curve
pub const PRIMARY_CURVE_COLOR: Color = Color::Blue;

/// LM curve and aggregate demand line
pub const SECONDARY_CURVE_COLOR: Color = Color::Red;

/// Equilibrium marker
pub const MARKER_COLOR: Color = Color::White;

/// Create a block with a title that shows focused state via border color.
///
/// When focused, the border is yellow. When unfocused, it's the default color.
pub fn focused_block(title: &str, focused: bool) -> Block<'static> {
    let border_style = if focused {
        Style::default().fg(FOCUS_COLOR)
    } else {
        Style::default()
    };

    Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(title.to_string())
}

/// Bold cyan heading line
pub fn heading(text: &str) -> Line<'static> {
    Line::from(Span::styled(
        text.to_string(),
        Style::default()
            .fg(HEADER_COLOR)
            .add_modifier(Modifier::BOLD),
    ))
}

/// Dimmed hint line
pub fn hint(text: &str) -> Line<'static> {
    Line::from(Span::styled(text.to_string(), Style::default().fg(HELP_COLOR)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focused_block_has_title() {
        let block = focused_block("Inputs", true);
        assert!(format!("{:?}", block).contains("Inputs"));
    }

    #[test]
    fn test_heading_is_bold() {
        let line = heading("IS-LM");
        assert_eq!(line.spans[0].content, "IS-LM");
        assert!(line.spans[0].style.add_modifier.contains(Modifier::BOLD));
    }
}
