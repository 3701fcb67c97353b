use crossterm::event::KeyEvent;
use macrodash_core::is_lm::{OUTPUT_MAX, OUTPUT_MIN};
use ratatui::{Frame, layout::Rect};

use super::{
    ChartLayout, Screen, handle_control_keys, render_intro, render_result, render_unavailable,
};
use crate::components::{Component, EventResult, charts::CurveChart, slider::SliderPanel};
use crate::state::AppState;
use crate::util::format::format_value;
use crate::util::styles::{PRIMARY_CURVE_COLOR, SECONDARY_CURVE_COLOR};

/// Both curves and their nearest crossing on the output grid
pub struct EquilibriumScreen {
    sliders: SliderPanel,
}

impl EquilibriumScreen {
    pub fn new() -> Self {
        Self {
            sliders: SliderPanel::new(),
        }
    }
}

impl Default for EquilibriumScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for EquilibriumScreen {
    fn handle_key(&mut self, key: KeyEvent, state: &mut AppState) -> EventResult {
        handle_control_keys(&mut self.sliders, key, state)
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let layout = ChartLayout::split(area, state.active_view.controls().len());

        render_intro(
            frame,
            layout.intro,
            "Adjust fiscal or monetary inputs and watch the equilibrium (Y*, r*) move.",
        );
        self.sliders.render(frame, layout.sliders, state);

        match &state.outputs.equilibrium {
            Ok(eq) => {
                CurveChart::new(self.title())
                    .x_axis("Output Y", OUTPUT_MIN, OUTPUT_MAX)
                    .y_axis("Interest rate r")
                    .curve("IS (goods market)", &eq.is_curve, PRIMARY_CURVE_COLOR)
                    .curve("LM (money market)", &eq.lm_curve, SECONDARY_CURVE_COLOR)
                    .marker(eq.output(), eq.rate())
                    .render(frame, layout.chart);

                render_result(
                    frame,
                    layout.result,
                    format!(
                        "IS = LM equilibrium: output Y* = {}, rate r* = {}",
                        format_value(eq.output(), 1),
                        format_value(eq.rate(), 2)
                    ),
                );
            }
            Err(e) => render_unavailable(frame, layout.chart, self.title(), &e.to_string()),
        }
    }
}

impl Screen for EquilibriumScreen {
    fn title(&self) -> &str {
        "IS-LM equilibrium"
    }
}
