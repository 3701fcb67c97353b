use crossterm::event::KeyEvent;
use macrodash_core::R_FIXED;
use macrodash_core::is_lm::{OUTPUT_MAX, OUTPUT_MIN};
use ratatui::{Frame, layout::Rect};

use super::{ChartLayout, Screen, handle_control_keys, render_intro, render_result};
use crate::components::{Component, EventResult, charts::CurveChart, slider::SliderPanel};
use crate::state::AppState;
use crate::util::format::{format_input, format_value};
use crate::util::styles::PRIMARY_CURVE_COLOR;

/// IS curve under fiscal policy, solved at the fixed rate
pub struct IsCurveScreen {
    sliders: SliderPanel,
}

impl IsCurveScreen {
    pub fn new() -> Self {
        Self {
            sliders: SliderPanel::new(),
        }
    }
}

impl Default for IsCurveScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for IsCurveScreen {
    fn handle_key(&mut self, key: KeyEvent, state: &mut AppState) -> EventResult {
        handle_control_keys(&mut self.sliders, key, state)
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let layout = ChartLayout::split(area, state.active_view.controls().len());
        let is = &state.outputs.is;

        render_intro(
            frame,
            layout.intro,
            "Adjust government spending (G) or taxes (T) and watch the IS curve move.",
        );
        self.sliders.render(frame, layout.sliders, state);

        CurveChart::new(self.title())
            .x_axis("Output Y", OUTPUT_MIN, OUTPUT_MAX.max(is.output))
            .y_axis("Interest rate r")
            .curve(
                format!(
                    "IS (G={}, T={})",
                    format_input(state.inputs.is_lm_g),
                    format_input(state.inputs.is_lm_t)
                ),
                &is.curve,
                PRIMARY_CURVE_COLOR,
            )
            .marker(is.output, R_FIXED)
            .render(frame, layout.chart);

        render_result(
            frame,
            layout.result,
            format!(
                "Equilibrium output: Y* = {} (at fixed rate r = {})",
                format_value(is.output, 1),
                format_input(R_FIXED)
            ),
        );
    }
}

impl Screen for IsCurveScreen {
    fn title(&self) -> &str {
        "IS curve and fiscal policy"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ViewId;
    use ratatui::{Terminal, backend::TestBackend};

    fn marker_drawn(government_spending: f64, taxes: f64) -> bool {
        let mut state = AppState::default();
        state.switch_view(ViewId::IsCurve);
        state.inputs.is_lm_g = government_spending;
        state.inputs.is_lm_t = taxes;
        state.recompute();

        let mut screen = IsCurveScreen::new();
        let mut terminal = Terminal::new(TestBackend::new(120, 50)).unwrap();
        terminal
            .draw(|frame| screen.render(frame, frame.area(), &state))
            .unwrap();

        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .any(|cell| cell.symbol() == "•")
    }

    #[test]
    fn test_marker_drawn_inside_default_range() {
        assert!(marker_drawn(100.0, 100.0));
    }

    #[test]
    fn test_marker_drawn_when_output_exceeds_grid() {
        // Y* = 531.25 and 731.25, both past the sampled grid
        assert!(marker_drawn(300.0, 100.0));
        assert!(marker_drawn(300.0, 300.0));
    }
}
