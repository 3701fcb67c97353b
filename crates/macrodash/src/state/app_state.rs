use crate::config::{DashboardConfig, KeybindingsConfig};

use super::{ControlId, Dashboard, ModelOutputs, PanelState, PolicyInputs, ShockPanel, ViewId};

#[derive(Debug)]
pub struct AppState {
    pub active_view: ViewId,
    pub inputs: PolicyInputs,
    pub outputs: ModelOutputs,
    /// Index of the focused control (or panel) on the active view
    pub focus: usize,
    pub panels: PanelState,
    pub keybindings: KeybindingsConfig,
    pub error_message: Option<String>,
    pub exit: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(&DashboardConfig::default(), Dashboard::default())
    }
}

impl AppState {
    pub fn new(config: &DashboardConfig, dashboard: Dashboard) -> Self {
        let inputs = config.defaults.sanitized();
        let outputs = ModelOutputs::compute(&inputs);

        Self {
            active_view: dashboard.home(),
            inputs,
            outputs,
            focus: 0,
            panels: PanelState::default(),
            keybindings: config.keybindings.clone(),
            error_message: None,
            exit: false,
        }
    }

    pub fn dashboard(&self) -> Dashboard {
        self.active_view.dashboard()
    }

    pub fn switch_view(&mut self, view: ViewId) {
        if view != self.active_view {
            tracing::debug!("Switching view to {}", view.name());
            self.active_view = view;
            self.focus = 0;
        }
    }

    pub fn next_view(&mut self) {
        self.switch_view(self.active_view.next());
    }

    pub fn prev_view(&mut self) {
        self.switch_view(self.active_view.prev());
    }

    pub fn switch_dashboard(&mut self) {
        let dashboard = self.dashboard().other();
        tracing::info!("Switching to {}", dashboard.name());
        self.switch_view(dashboard.home());
    }

    /// Number of focusable items on the active view
    fn focus_count(&self) -> usize {
        match self.active_view {
            ViewId::Shocks => ShockPanel::ALL.len(),
            view => view.controls().len(),
        }
    }

    pub fn focus_next(&mut self) {
        let count = self.focus_count();
        if count > 0 {
            self.focus = (self.focus + 1) % count;
        }
    }

    pub fn focus_prev(&mut self) {
        let count = self.focus_count();
        if count > 0 {
            self.focus = (self.focus + count - 1) % count;
        }
    }

    pub fn focused_control(&self) -> Option<ControlId> {
        self.active_view.controls().get(self.focus).copied()
    }

    /// Step the focused control. Recomputes only when a value changed.
    pub fn adjust_focused(&mut self, increase: bool) -> bool {
        let Some(control) = self.focused_control() else {
            return false;
        };

        let changed = self.inputs.adjust(control, increase);
        if changed {
            self.recompute();
        }
        changed
    }

    /// Flip the expandable panel or toggle belonging to the active view.
    pub fn toggle(&mut self) -> bool {
        match self.active_view {
            ViewId::AdAsSimulation => self.panels.ad_as_explainer.toggle(),
            ViewId::SupplyHorizon => self.panels.show_lras = !self.panels.show_lras,
            ViewId::Shocks => match ShockPanel::from_focus(self.focus) {
                ShockPanel::Demand => self.panels.demand_cases.toggle(),
                ShockPanel::Supply => self.panels.supply_cases.toggle(),
            },
            _ => return false,
        }
        true
    }

    pub fn recompute(&mut self) {
        self.outputs = ModelOutputs::compute(&self.inputs);

        match self.outputs.error() {
            Some(message) => {
                tracing::warn!("Model evaluation failed: {message}");
                self.set_error(message);
            }
            None => self.clear_error(),
        }
    }

    pub fn set_error(&mut self, message: String) {
        self.error_message = Some(message);
    }

    pub fn clear_error(&mut self) {
        self.error_message = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use macrodash_core::Scenario;

    #[test]
    fn test_starts_on_dashboard_home() {
        let state = AppState::new(&DashboardConfig::default(), Dashboard::IsLm);
        assert_eq!(state.active_view, ViewId::IsLmHome);
        assert_eq!(state.dashboard(), Dashboard::IsLm);
    }

    #[test]
    fn test_config_defaults_seed_outputs() {
        let mut config = DashboardConfig::default();
        config.defaults.ad_as_g = 200.0;
        config.defaults.ad_as_m = 50.0;

        let state = AppState::new(&config, Dashboard::AdAs);
        assert_eq!(state.outputs.ad_as.aggregate_demand, 340.0);
    }

    #[test]
    fn test_adjust_recomputes_outputs() {
        let mut state = AppState::default();
        state.switch_view(ViewId::AdAsSimulation);

        // Focus starts on the scenario selector
        assert_eq!(state.focused_control(), Some(ControlId::Scenario));
        assert!(state.adjust_focused(true));
        assert_eq!(state.outputs.ad_as.scenario, Scenario::DemandShock);

        state.focus_next();
        assert_eq!(state.focused_control(), Some(ControlId::AdAsSpending));
        assert!(state.adjust_focused(true));
        assert_eq!(state.outputs.ad_as.aggregate_demand, 1.5 * 110.0 + 0.8 * 100.0);
    }

    #[test]
    fn test_adjust_at_bound_is_a_no_op() {
        let mut state = AppState::default();
        state.switch_view(ViewId::LmCurve);
        state.focus_prev();
        assert_eq!(state.focused_control(), Some(ControlId::PriceLevel));

        for _ in 0..4 {
            state.adjust_focused(false);
        }
        assert_eq!(state.inputs.is_lm_p, 1.0);
        assert!(!state.adjust_focused(false));
        assert!(state.outputs.lm.is_ok());
    }

    #[test]
    fn test_focus_resets_on_view_change() {
        let mut state = AppState::default();
        state.switch_view(ViewId::Equilibrium);
        state.focus_next();
        state.focus_next();
        assert_eq!(state.focused_control(), Some(ControlId::IsLmMoney));

        state.next_view();
        assert_eq!(state.active_view, ViewId::IsLmHome);
        assert_eq!(state.focus, 0);
        assert_eq!(state.focused_control(), None);
        assert!(!state.adjust_focused(true));
    }

    #[test]
    fn test_toggle_targets_active_view() {
        let mut state = AppState::default();

        assert!(!state.toggle());

        state.switch_view(ViewId::SupplyHorizon);
        assert!(state.toggle());
        assert!(state.panels.show_lras);

        state.switch_view(ViewId::Shocks);
        state.focus_next();
        assert!(state.toggle());
        assert!(state.panels.supply_cases.expanded);
        assert!(!state.panels.demand_cases.expanded);
    }

    #[test]
    fn test_switch_dashboard() {
        let mut state = AppState::default();
        state.switch_view(ViewId::Keynes);

        state.switch_dashboard();
        assert_eq!(state.active_view, ViewId::IsLmHome);

        state.switch_dashboard();
        assert_eq!(state.active_view, ViewId::AdAsHome);
    }
}
