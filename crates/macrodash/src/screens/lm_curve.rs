use crossterm::event::KeyEvent;
use macrodash_core::Y_FIXED;
use macrodash_core::is_lm::{OUTPUT_MAX, OUTPUT_MIN};
use ratatui::{Frame, layout::Rect};

use super::{
    ChartLayout, Screen, handle_control_keys, render_intro, render_result, render_unavailable,
};
use crate::components::{Component, EventResult, charts::CurveChart, slider::SliderPanel};
use crate::state::AppState;
use crate::util::format::{format_input, format_value};
use crate::util::styles::SECONDARY_CURVE_COLOR;

/// LM curve under monetary policy, solved at the fixed output
pub struct LmCurveScreen {
    sliders: SliderPanel,
}

impl LmCurveScreen {
    pub fn new() -> Self {
        Self {
            sliders: SliderPanel::new(),
        }
    }
}

impl Default for LmCurveScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for LmCurveScreen {
    fn handle_key(&mut self, key: KeyEvent, state: &mut AppState) -> EventResult {
        handle_control_keys(&mut self.sliders, key, state)
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let layout = ChartLayout::split(area, state.active_view.controls().len());

        render_intro(
            frame,
            layout.intro,
            "Adjust money supply (M) or the price level (P) and watch the LM curve move.",
        );
        self.sliders.render(frame, layout.sliders, state);

        match &state.outputs.lm {
            Ok(lm) => {
                CurveChart::new(self.title())
                    .x_axis("Output Y", OUTPUT_MIN, OUTPUT_MAX)
                    .y_axis("Interest rate r")
                    .curve(
                        format!(
                            "LM (M={}, P={})",
                            format_input(state.inputs.is_lm_m),
                            format_input(state.inputs.is_lm_p)
                        ),
                        &lm.curve,
                        SECONDARY_CURVE_COLOR,
                    )
                    .marker(Y_FIXED, lm.rate)
                    .render(frame, layout.chart);

                render_result(
                    frame,
                    layout.result,
                    format!(
                        "Equilibrium rate: r* = {} (at fixed output Y = {})",
                        format_value(lm.rate, 2),
                        format_input(Y_FIXED)
                    ),
                );
            }
            Err(e) => render_unavailable(frame, layout.chart, self.title(), &e.to_string()),
        }
    }
}

impl Screen for LmCurveScreen {
    fn title(&self) -> &str {
        "LM curve and monetary policy"
    }
}
