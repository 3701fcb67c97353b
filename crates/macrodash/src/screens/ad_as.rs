use crossterm::event::KeyEvent;
use macrodash_core::ad_as::{GDP_MAX, GDP_MIN};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    text::Line,
};

use super::{Screen, handle_control_keys, render_result};
use crate::components::{
    Component, EventResult, charts::CurveChart, collapsible::CollapsiblePanel,
    slider::SliderPanel,
};
use crate::state::AppState;
use crate::util::format::format_value;
use crate::util::styles::{PRIMARY_CURVE_COLOR, SECONDARY_CURVE_COLOR};

const EXPLAINER_TITLE: &str = "What is the AD-AS model?";

/// AS curve against the AD line for the chosen scenario
pub struct AdAsScreen {
    sliders: SliderPanel,
}

impl AdAsScreen {
    pub fn new() -> Self {
        Self {
            sliders: SliderPanel::new(),
        }
    }

    fn explainer_lines() -> Vec<Line<'static>> {
        vec![
            Line::from(
                "The AD-AS (aggregate demand / aggregate supply) model relates the price \
                 level of the whole economy to its GDP.",
            ),
            Line::from(""),
            Line::from(
                "  • AD (aggregate demand) is driven by government spending (G), money supply (M), \
                 investment and consumption.",
            ),
            Line::from(
                "  • AS (aggregate supply) depends on production costs, technology and the labour market.",
            ),
            Line::from(""),
            Line::from(
                "  • Higher demand, e.g. more government spending, shifts AD right and raises GDP and inflation.",
            ),
            Line::from(
                "  • A supply shock, e.g. rising costs, shifts AS left and can cause stagflation.",
            ),
            Line::from(""),
            Line::from("Adjust G and M above to see how the economy responds."),
        ]
    }

    fn render_chart(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let outcome = &state.outputs.ad_as;

        CurveChart::new(format!("AD-AS model ({})", outcome.scenario.label()))
            .x_axis("GDP", GDP_MIN, GDP_MAX.max(outcome.aggregate_demand))
            .y_axis("Price level")
            .curve("AS", &outcome.aggregate_supply, PRIMARY_CURVE_COLOR)
            .vertical_line("AD (adjusted)", outcome.aggregate_demand, SECONDARY_CURVE_COLOR)
            .render(frame, area);
    }
}

impl Default for AdAsScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for AdAsScreen {
    fn handle_key(&mut self, key: KeyEvent, state: &mut AppState) -> EventResult {
        handle_control_keys(&mut self.sliders, key, state)
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let body = Self::explainer_lines();
        let explainer = CollapsiblePanel::new(EXPLAINER_TITLE, state.panels.ad_as_explainer.expanded);

        let chunks = Layout::vertical([
            Constraint::Length(SliderPanel::height(state.active_view.controls().len())),
            Constraint::Min(8),
            Constraint::Length(3),
            Constraint::Length(explainer.height(body.len())),
        ])
        .split(area);

        self.sliders.render(frame, chunks[0], state);
        self.render_chart(frame, chunks[1], state);
        render_result(
            frame,
            chunks[2],
            format!(
                "Adjusted GDP equilibrium: {}",
                format_value(state.outputs.ad_as.aggregate_demand, 2)
            ),
        );
        explainer.render(frame, chunks[3], body);
    }
}

impl Screen for AdAsScreen {
    fn title(&self) -> &str {
        "AD-AS Simulation"
    }
}
