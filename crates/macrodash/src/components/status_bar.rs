use super::{Component, EventResult};
use crate::state::{AppState, ViewId};
use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

pub struct StatusBar;

impl StatusBar {
    pub fn new() -> Self {
        Self
    }

    fn get_help_text(state: &AppState) -> String {
        fn first(bindings: &[String]) -> String {
            bindings.first().cloned().unwrap_or_default()
        }

        let kb = &state.keybindings;

        let views = format!(
            "1-{}: views | {}/{}: cycle",
            state.dashboard().views().len(),
            first(&kb.next_view),
            first(&kb.prev_view)
        );
        let sliders = format!(
            "{}/{}: select | {}/{}: adjust",
            first(&kb.next_control),
            first(&kb.prev_control),
            first(&kb.decrease),
            first(&kb.increase)
        );
        let toggle = format!("{}: expand", first(&kb.toggle));
        let tail = format!(
            "{}: switch dashboard | {}: quit",
            first(&kb.switch_dashboard),
            first(&kb.quit)
        );

        match state.active_view {
            ViewId::AdAsSimulation => format!("{views} | {sliders} | {toggle} | {tail}"),
            ViewId::IsCurve | ViewId::LmCurve | ViewId::Equilibrium => {
                format!("{views} | {sliders} | {tail}")
            }
            ViewId::Shocks => format!(
                "{views} | {}/{}: select panel | {toggle} | {tail}",
                first(&kb.next_control),
                first(&kb.prev_control)
            ),
            ViewId::SupplyHorizon => {
                format!("{views} | {}: short/long run | {tail}", first(&kb.toggle))
            }
            _ => format!("{views} | {tail}"),
        }
    }
}

impl Default for StatusBar {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for StatusBar {
    fn handle_key(&mut self, _key: KeyEvent, _state: &mut AppState) -> EventResult {
        EventResult::NotHandled
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let content = if let Some(error) = &state.error_message {
            Line::from(vec![
                Span::styled("Error: ", Style::default().fg(Color::Red)),
                Span::raw(error),
            ])
        } else {
            Line::from(Span::styled(
                Self::get_help_text(state),
                Style::default().fg(Color::DarkGray),
            ))
        };

        let paragraph = Paragraph::new(content).block(Block::default().borders(Borders::TOP));

        frame.render_widget(paragraph, area);
    }
}
