//! Slider panel for the policy inputs of the active view.

use crossterm::event::KeyEvent;
use macrodash_core::ParamRange;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::{Component, EventResult};
use crate::keybindings::KeyAction;
use crate::state::{AppState, ControlId};
use crate::util::format::format_input;
use crate::util::styles::{FOCUS_COLOR, HELP_COLOR, focused_block};

/// Width of the slider track in cells
const TRACK_WIDTH: usize = 24;

/// Renders every control of the active view and routes navigation keys to them
pub struct SliderPanel;

impl SliderPanel {
    pub fn new() -> Self {
        Self
    }

    /// Rows needed for `count` controls plus borders
    pub fn height(count: usize) -> u16 {
        count as u16 + 2
    }

    fn track(range: &ParamRange, value: f64) -> String {
        let filled = (range.ratio(value) * TRACK_WIDTH as f64).round() as usize;
        let filled = filled.min(TRACK_WIDTH);
        format!(
            "{}{}",
            "━".repeat(filled),
            "─".repeat(TRACK_WIDTH - filled)
        )
    }

    fn control_line(control: ControlId, state: &AppState, focused: bool) -> Line<'static> {
        let marker = if focused { "▶ " } else { "  " };
        let label_style = if focused {
            Style::default()
                .fg(FOCUS_COLOR)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };

        let mut spans = vec![
            Span::styled(marker, Style::default().fg(FOCUS_COLOR)),
            Span::styled(format!("{:<24}", control.label()), label_style),
        ];

        match control.range() {
            Some(range) => {
                let value = state.inputs.value(control);
                spans.push(Span::styled(
                    format!("{:>4} ", format_input(range.min)),
                    Style::default().fg(HELP_COLOR),
                ));
                spans.push(Span::styled(
                    Self::track(&range, value),
                    Style::default().fg(Color::Cyan),
                ));
                spans.push(Span::styled(
                    format!(" {:<4}", format_input(range.max)),
                    Style::default().fg(HELP_COLOR),
                ));
                spans.push(Span::styled(
                    format!(" {} = {}", range.symbol, format_input(value)),
                    Style::default().add_modifier(Modifier::BOLD),
                ));
            }
            None => {
                spans.push(Span::raw("◀ "));
                spans.push(Span::styled(
                    state.inputs.scenario.label(),
                    Style::default().add_modifier(Modifier::BOLD),
                ));
                spans.push(Span::raw(" ▶"));
            }
        }

        Line::from(spans)
    }
}

impl Default for SliderPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for SliderPanel {
    fn handle_key(&mut self, key: KeyEvent, state: &mut AppState) -> EventResult {
        if state.active_view.controls().is_empty() {
            return EventResult::NotHandled;
        }

        match state.keybindings.action_for(&key) {
            Some(KeyAction::NextControl) => state.focus_next(),
            Some(KeyAction::PrevControl) => state.focus_prev(),
            Some(KeyAction::Increase) => {
                state.adjust_focused(true);
            }
            Some(KeyAction::Decrease) => {
                state.adjust_focused(false);
            }
            _ => return EventResult::NotHandled,
        }
        EventResult::Handled
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let lines: Vec<Line> = state
            .active_view
            .controls()
            .iter()
            .enumerate()
            .map(|(i, control)| Self::control_line(*control, state, i == state.focus))
            .collect();

        let block = focused_block(" Inputs ", true);
        frame.render_widget(Paragraph::new(lines).block(block), area);
    }
}
