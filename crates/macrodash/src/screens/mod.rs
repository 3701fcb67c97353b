pub mod ad_as;
pub mod equilibrium;
pub mod home;
pub mod is_curve;
pub mod lessons;
pub mod lm_curve;

use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::components::{Component, EventResult, slider::SliderPanel};
use crate::keybindings::KeyAction;
use crate::state::AppState;
use crate::util::styles::RESULT_COLOR;

/// Trait for full screen views
pub trait Screen: Component {
    /// Get the screen title
    fn title(&self) -> &str;
}

/// Sliders first, then the view's toggle
fn handle_control_keys(
    sliders: &mut SliderPanel,
    key: KeyEvent,
    state: &mut AppState,
) -> EventResult {
    if sliders.handle_key(key, state) == EventResult::Handled {
        return EventResult::Handled;
    }

    match state.keybindings.action_for(&key) {
        Some(KeyAction::Toggle) if state.toggle() => EventResult::Handled,
        _ => EventResult::NotHandled,
    }
}

/// Intro line, sliders, chart and result line for the curve views
struct ChartLayout {
    intro: Rect,
    sliders: Rect,
    chart: Rect,
    result: Rect,
}

impl ChartLayout {
    fn split(area: Rect, control_count: usize) -> Self {
        let chunks = Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(SliderPanel::height(control_count)),
            Constraint::Min(8),
            Constraint::Length(3),
        ])
        .split(area);

        Self {
            intro: chunks[0],
            sliders: chunks[1],
            chart: chunks[2],
            result: chunks[3],
        }
    }
}

fn render_intro(frame: &mut Frame, area: Rect, text: &str) {
    let paragraph = Paragraph::new(Line::from(text.to_string())).wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

fn render_result(frame: &mut Frame, area: Rect, text: String) {
    let line = Line::from(Span::styled(
        text,
        Style::default()
            .fg(RESULT_COLOR)
            .add_modifier(Modifier::BOLD),
    ));
    let paragraph = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
    frame.render_widget(paragraph, area);
}

/// Shown in place of a chart when its resolver failed
fn render_unavailable(frame: &mut Frame, area: Rect, title: &str, message: &str) {
    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("  Cannot draw this chart: {message}"),
            Style::default().fg(Color::Red),
        )),
    ];
    let paragraph = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" {title} ")),
    );
    frame.render_widget(paragraph, area);
}
