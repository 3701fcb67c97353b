use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::Rect,
    text::Line,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::Screen;
use crate::components::{Component, EventResult};
use crate::state::{AppState, Dashboard};
use crate::util::styles::{heading, hint};

/// Illustration on the AD-AS landing view
pub const AD_AS_IMAGE_URL: &str =
    "https://upload.wikimedia.org/wikipedia/commons/2/25/AS_%2B_AD_graph.svg";

/// Landing view of either dashboard
pub struct HomeScreen;

impl HomeScreen {
    pub fn new() -> Self {
        Self
    }

    fn ad_as_lines() -> Vec<Line<'static>> {
        vec![
            heading("Macroeconomics: AD-AS Simulation"),
            Line::from(""),
            Line::from(
                "Adjust government spending (G) and money supply (M) and watch how \
                 aggregate demand (AD) and aggregate supply (AS) move GDP and the price level.",
            ),
            Line::from(""),
            Line::from("Features:"),
            Line::from("  • Interactive AD-AS model"),
            Line::from("  • Economic scenarios: demand shock and supply shock"),
            Line::from("  • Live charts of the macroeconomy"),
            Line::from(""),
            Line::from(format!("Illustration: {AD_AS_IMAGE_URL}")),
            Line::from(""),
            hint("Press 2 or Tab to open the AD-AS simulation."),
        ]
    }

    fn is_lm_lines() -> Vec<Line<'static>> {
        vec![
            heading("IS-LM Model Simulation"),
            Line::from(""),
            Line::from(
                "The IS-LM model describes how fiscal and monetary policy affect \
                 total output (Y) and the interest rate (r).",
            ),
            Line::from("  • The IS curve is goods-market equilibrium (investment = saving)"),
            Line::from("  • The LM curve is money-market equilibrium (money supply = money demand)"),
            Line::from(""),
            heading("Interactive simulation"),
            hint("Pick a view from the tab bar to explore each variable."),
        ]
    }
}

impl Default for HomeScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for HomeScreen {
    fn handle_key(&mut self, _key: KeyEvent, _state: &mut AppState) -> EventResult {
        EventResult::NotHandled
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let lines = match state.dashboard() {
            Dashboard::AdAs => Self::ad_as_lines(),
            Dashboard::IsLm => Self::is_lm_lines(),
        };

        let paragraph = Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!(" {} ", self.title())),
            )
            .wrap(Wrap { trim: false });
        frame.render_widget(paragraph, area);
    }
}

impl Screen for HomeScreen {
    fn title(&self) -> &str {
        "Home"
    }
}
