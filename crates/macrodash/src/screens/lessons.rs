//! Text-only lesson views of the AD-AS dashboard.

use crossterm::event::KeyEvent;
use macrodash_core::is_lm::MPC;
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::Screen;
use crate::components::{Component, EventResult, collapsible::CollapsiblePanel};
use crate::keybindings::KeyAction;
use crate::state::{AppState, ShockPanel, ViewId};
use crate::util::format::format_value;
use crate::util::styles::{heading, hint};

pub const KEYNES_IMAGE_URL: &str =
    "https://drive.google.com/file/d/1tuvlYa9QRmwqXRGpFirVp_z7zV0LFplg/view?usp=drive_link";

pub const KEYNES_WIKI_URL: &str =
    "https://zh.wikipedia.org/zh-tw/%E7%BA%A6%E7%BF%B0%C2%B7%E6%A2%85%E7%BA%B3%E5%BE%B7%C2%B7%E5%87%AF0";

const DEMAND_CASES: [&str; 2] = [
    "2020 COVID-19 stimulus → AD shifts right → GDP rises, but inflation pressure builds",
    "2008 financial crisis → investment collapses → AD shifts left → GDP falls, deflation risk",
];

const SUPPLY_CASES: [&str; 2] = [
    "1970s oil crisis → AS shifts left → prices rise, GDP falls (stagflation)",
    "2022 supply chain crisis → AS shifts left → production costs rise, inflation accelerates",
];

/// Demand multiplier `1 / (1 - MPC)`
pub fn multiplier(mpc: f64) -> f64 {
    1.0 / (1.0 - mpc)
}

/// Multiplier, shocks, short vs long run AS and the Keynes biography
pub struct LessonsScreen;

impl LessonsScreen {
    pub fn new() -> Self {
        Self
    }

    fn framed(title: &str, lines: Vec<Line<'static>>) -> Paragraph<'static> {
        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!(" {title} ")),
            )
            .wrap(Wrap { trim: false })
    }

    fn multiplier_lines() -> Vec<Line<'static>> {
        vec![
            Line::from(
                "How demand shocks, supply shocks and the short and long run differ.",
            ),
            Line::from(""),
            heading("Demand multiplier"),
            Line::from(Span::styled(
                "    Multiplier = 1 / (1 - MPC)",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(
                "The higher the MPC (marginal propensity to consume), the larger the multiplier.",
            ),
            hint(&format!(
                "With MPC = {} the multiplier is {}.",
                MPC,
                format_value(multiplier(MPC), 1)
            )),
            Line::from(""),
            heading("Effect of supply shocks"),
            Line::from(
                "Supply shocks have no fixed multiplier, but they can raise costs and cause stagflation.",
            ),
        ]
    }

    fn case_lines(cases: &[&'static str]) -> Vec<Line<'static>> {
        cases
            .iter()
            .map(|case| Line::from(format!("  • {case}")))
            .collect()
    }

    fn render_shocks(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let focused = ShockPanel::from_focus(state.focus);
        let demand_body = Self::case_lines(&DEMAND_CASES);
        let supply_body = Self::case_lines(&SUPPLY_CASES);

        let demand = CollapsiblePanel::new("Demand shock cases", state.panels.demand_cases.expanded)
            .focused(focused == ShockPanel::Demand);
        let supply = CollapsiblePanel::new("Supply shock cases", state.panels.supply_cases.expanded)
            .focused(focused == ShockPanel::Supply);

        let chunks = Layout::vertical([
            Constraint::Length(demand.height(demand_body.len())),
            Constraint::Length(supply.height(supply_body.len())),
            Constraint::Min(0),
        ])
        .split(area);

        demand.render(frame, chunks[0], demand_body);
        supply.render(frame, chunks[1], supply_body);
    }

    fn supply_horizon_lines(show_lras: bool) -> Vec<Line<'static>> {
        let checkbox = if show_lras { "[x]" } else { "[ ]" };
        let explanation = if show_lras {
            "LRAS is a vertical line: in the long run GDP is set by productivity, not by prices."
        } else {
            "Short-run AS responds to price changes and slopes upward to the right."
        };

        vec![
            Line::from(format!("{checkbox} Show long-run AS (LRAS)")),
            Line::from(""),
            Line::from(explanation),
        ]
    }

    fn keynes_lines() -> Vec<Line<'static>> {
        vec![
            Line::from(
                "One of the most influential economists of the 20th century, regarded as the \
                 founder of modern macroeconomics. In The General Theory of Employment, Interest \
                 and Money he challenged classical economics, arguing that aggregate demand \
                 determines economic activity and employment, and stressed the active role of \
                 government in fighting recessions. His ideas shaped post-war economic policy \
                 worldwide and guided policymakers through economic crises.",
            ),
            Line::from(""),
            Line::from(format!("Portrait: {KEYNES_IMAGE_URL}")),
            Line::from(format!("More: {KEYNES_WIKI_URL}")),
        ]
    }
}

impl Default for LessonsScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for LessonsScreen {
    fn handle_key(&mut self, key: KeyEvent, state: &mut AppState) -> EventResult {
        let action = state.keybindings.action_for(&key);

        match (state.active_view, action) {
            (ViewId::Shocks, Some(KeyAction::NextControl)) => state.focus_next(),
            (ViewId::Shocks, Some(KeyAction::PrevControl)) => state.focus_prev(),
            (ViewId::Shocks | ViewId::SupplyHorizon, Some(KeyAction::Toggle)) => {
                state.toggle();
            }
            _ => return EventResult::NotHandled,
        }
        EventResult::Handled
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let title = state.active_view.name();

        match state.active_view {
            ViewId::Multiplier => {
                frame.render_widget(Self::framed(title, Self::multiplier_lines()), area)
            }
            ViewId::Shocks => self.render_shocks(frame, area, state),
            ViewId::SupplyHorizon => frame.render_widget(
                Self::framed(title, Self::supply_horizon_lines(state.panels.show_lras)),
                area,
            ),
            ViewId::Keynes => frame.render_widget(
                Self::framed("John Maynard Keynes", Self::keynes_lines()),
                area,
            ),
            _ => {}
        }
    }
}

impl Screen for LessonsScreen {
    fn title(&self) -> &str {
        "Lessons"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_multiplier() {
        assert!((multiplier(0.8) - 5.0).abs() < 1e-12);
        assert_eq!(multiplier(0.5), 2.0);
    }

    #[test]
    fn test_supply_horizon_toggle_swaps_text() {
        let mut state = AppState::default();
        state.switch_view(ViewId::SupplyHorizon);
        let mut screen = LessonsScreen::new();

        let before = LessonsScreen::supply_horizon_lines(state.panels.show_lras);
        assert_eq!(screen.handle_key(key(KeyCode::Enter), &mut state), EventResult::Handled);
        let after = LessonsScreen::supply_horizon_lines(state.panels.show_lras);

        assert_ne!(before[2], after[2]);
        assert_eq!(after[0], Line::from("[x] Show long-run AS (LRAS)"));
    }

    #[test]
    fn test_shock_panels_expand_independently() {
        let mut state = AppState::default();
        state.switch_view(ViewId::Shocks);
        let mut screen = LessonsScreen::new();

        screen.handle_key(key(KeyCode::Enter), &mut state);
        assert!(state.panels.demand_cases.expanded);
        assert!(!state.panels.supply_cases.expanded);

        screen.handle_key(key(KeyCode::Down), &mut state);
        screen.handle_key(key(KeyCode::Enter), &mut state);
        assert!(state.panels.supply_cases.expanded);
    }

    #[test]
    fn test_keys_ignored_on_static_views() {
        let mut state = AppState::default();
        state.switch_view(ViewId::Keynes);
        let mut screen = LessonsScreen::new();

        assert_eq!(
            screen.handle_key(key(KeyCode::Enter), &mut state),
            EventResult::NotHandled
        );
    }
}
