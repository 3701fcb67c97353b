//! Collapsible panel component for explanatory text.
//!
//! A panel shows only its title bar until expanded with the toggle key.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use crate::util::styles::focused_block;

/// State for a collapsible panel
#[derive(Debug, Clone)]
pub struct CollapsibleState {
    /// Whether the panel is expanded
    pub expanded: bool,
}

impl Default for CollapsibleState {
    fn default() -> Self {
        Self { expanded: true }
    }
}

impl CollapsibleState {
    pub fn new(expanded: bool) -> Self {
        Self { expanded }
    }

    pub fn toggle(&mut self) {
        self.expanded = !self.expanded;
    }
}

/// Configuration for rendering a collapsible panel
pub struct CollapsiblePanel<'a> {
    title: &'a str,
    expanded: bool,
    focused: bool,
}

impl<'a> CollapsiblePanel<'a> {
    pub fn new(title: &'a str, expanded: bool) -> Self {
        Self {
            title,
            expanded,
            focused: false,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Rows needed to show `body_lines` of content, or the bare title bar when collapsed
    pub fn height(&self, body_lines: usize) -> u16 {
        if self.expanded {
            body_lines as u16 + 2
        } else {
            COLLAPSED_HEIGHT
        }
    }

    /// Render the panel with `body` shown only when expanded
    pub fn render(&self, frame: &mut Frame, area: Rect, body: Vec<Line<'a>>) {
        let indicator = if self.expanded { "[-]" } else { "[+]" };

        let title_line = Line::from(vec![
            Span::styled(
                format!(" {} ", indicator),
                Style::default().fg(Color::DarkGray),
            ),
            Span::styled(self.title, Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(" "),
        ]);
        let block = focused_block("", self.focused).title(title_line);

        if self.expanded {
            let paragraph = Paragraph::new(body)
                .block(block)
                .wrap(Wrap { trim: false });
            frame.render_widget(paragraph, area);
        } else {
            frame.render_widget(block, area);
        }
    }
}

/// Height of a collapsed panel (borders + title)
pub const COLLAPSED_HEIGHT: u16 = 2;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapsible_state_toggle() {
        let mut state = CollapsibleState::default();
        assert!(state.expanded);

        state.toggle();
        assert!(!state.expanded);

        state.toggle();
        assert!(state.expanded);
    }

    #[test]
    fn test_panel_height() {
        assert_eq!(CollapsiblePanel::new("Cases", true).height(4), 6);
        assert_eq!(CollapsiblePanel::new("Cases", false).height(4), COLLAPSED_HEIGHT);
    }
}
