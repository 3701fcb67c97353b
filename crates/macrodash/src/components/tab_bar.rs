use super::{Component, EventResult};
use crate::state::{AppState, ViewId};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
};

pub struct TabBar;

impl Component for TabBar {
    fn handle_key(&mut self, key: KeyEvent, state: &mut AppState) -> EventResult {
        let KeyCode::Char(c) = key.code else {
            return EventResult::NotHandled;
        };

        // Digits 1-N jump straight to a view of the active dashboard
        let target = c
            .to_digit(10)
            .and_then(|d| (d as usize).checked_sub(1))
            .and_then(|idx| ViewId::from_index(state.dashboard(), idx));

        match target {
            Some(view) => {
                state.switch_view(view);
                EventResult::Handled
            }
            None => EventResult::NotHandled,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let dashboard = state.dashboard();
        let title = format!(" {} ", dashboard.name());
        let chunks = Layout::horizontal([
            Constraint::Length(title.len() as u16 + 1),
            Constraint::Min(0),
        ])
        .split(area);

        let header = Paragraph::new(Line::from(Span::styled(
            title,
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )))
        .block(Block::default().borders(Borders::BOTTOM));
        frame.render_widget(header, chunks[0]);

        let titles: Vec<Line> = dashboard
            .views()
            .iter()
            .enumerate()
            .map(|(idx, view)| {
                let content = format!("[{}] {}", idx + 1, view.name());

                if *view == state.active_view {
                    Line::from(Span::styled(
                        content,
                        Style::default()
                            .fg(Color::Yellow)
                            .add_modifier(Modifier::BOLD),
                    ))
                } else {
                    Line::from(Span::styled(content, Style::default().fg(Color::Gray)))
                }
            })
            .collect();

        let tabs = Tabs::new(titles)
            .block(Block::default().borders(Borders::BOTTOM))
            .select(state.active_view.index())
            .style(Style::default())
            .highlight_style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            );

        frame.render_widget(tabs, chunks[1]);
    }
}
