use crate::components::collapsible::CollapsibleState;

/// Expandable panels and toggles on the text views
#[derive(Debug, Clone)]
pub struct PanelState {
    /// "What is the AD-AS model?" on the simulation view
    pub ad_as_explainer: CollapsibleState,
    pub demand_cases: CollapsibleState,
    pub supply_cases: CollapsibleState,
    /// Long-run AS explanation instead of the short-run one
    pub show_lras: bool,
}

impl Default for PanelState {
    fn default() -> Self {
        Self {
            ad_as_explainer: CollapsibleState::new(false),
            demand_cases: CollapsibleState::new(false),
            supply_cases: CollapsibleState::new(false),
            show_lras: false,
        }
    }
}

/// Which panel on the shocks view has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShockPanel {
    Demand,
    Supply,
}

impl ShockPanel {
    pub const ALL: [ShockPanel; 2] = [ShockPanel::Demand, ShockPanel::Supply];

    pub fn from_focus(focus: usize) -> Self {
        Self::ALL[focus % Self::ALL.len()]
    }
}
