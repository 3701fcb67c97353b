/// Dashboards and the views each one offers.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Dashboard {
    #[default]
    AdAs,
    IsLm,
}

impl Dashboard {
    pub fn name(&self) -> &'static str {
        match self {
            Dashboard::AdAs => "AD-AS Explorer",
            Dashboard::IsLm => "IS-LM Explorer",
        }
    }

    pub fn views(&self) -> &'static [ViewId] {
        match self {
            Dashboard::AdAs => &ViewId::AD_AS,
            Dashboard::IsLm => &ViewId::IS_LM,
        }
    }

    pub fn home(&self) -> ViewId {
        self.views()[0]
    }

    pub fn other(&self) -> Self {
        match self {
            Dashboard::AdAs => Dashboard::IsLm,
            Dashboard::IsLm => Dashboard::AdAs,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewId {
    AdAsHome,
    AdAsSimulation,
    Multiplier,
    Shocks,
    SupplyHorizon,
    Keynes,
    IsLmHome,
    IsCurve,
    LmCurve,
    Equilibrium,
}

impl ViewId {
    pub const AD_AS: [ViewId; 6] = [
        ViewId::AdAsHome,
        ViewId::AdAsSimulation,
        ViewId::Multiplier,
        ViewId::Shocks,
        ViewId::SupplyHorizon,
        ViewId::Keynes,
    ];

    pub const IS_LM: [ViewId; 4] = [
        ViewId::IsLmHome,
        ViewId::IsCurve,
        ViewId::LmCurve,
        ViewId::Equilibrium,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ViewId::AdAsHome | ViewId::IsLmHome => "Home",
            ViewId::AdAsSimulation => "AD-AS Simulation",
            ViewId::Multiplier => "Multiplier",
            ViewId::Shocks => "Demand vs Supply",
            ViewId::SupplyHorizon => "Short vs Long AS",
            ViewId::Keynes => "Keynes",
            ViewId::IsCurve => "IS Curve",
            ViewId::LmCurve => "LM Curve",
            ViewId::Equilibrium => "IS-LM Equilibrium",
        }
    }

    pub fn dashboard(&self) -> Dashboard {
        match self {
            ViewId::AdAsHome
            | ViewId::AdAsSimulation
            | ViewId::Multiplier
            | ViewId::Shocks
            | ViewId::SupplyHorizon
            | ViewId::Keynes => Dashboard::AdAs,
            ViewId::IsLmHome | ViewId::IsCurve | ViewId::LmCurve | ViewId::Equilibrium => {
                Dashboard::IsLm
            }
        }
    }

    /// Position within the owning dashboard's view list
    pub fn index(&self) -> usize {
        self.dashboard()
            .views()
            .iter()
            .position(|v| v == self)
            .unwrap_or(0)
    }

    pub fn from_index(dashboard: Dashboard, index: usize) -> Option<Self> {
        dashboard.views().get(index).copied()
    }

    pub fn next(&self) -> Self {
        let views = self.dashboard().views();
        views[(self.index() + 1) % views.len()]
    }

    pub fn prev(&self) -> Self {
        let views = self.dashboard().views();
        views[(self.index() + views.len() - 1) % views.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_views_belong_to_their_dashboard() {
        for dashboard in [Dashboard::AdAs, Dashboard::IsLm] {
            for (i, view) in dashboard.views().iter().enumerate() {
                assert_eq!(view.dashboard(), dashboard);
                assert_eq!(view.index(), i);
                assert_eq!(ViewId::from_index(dashboard, i), Some(*view));
            }
        }
        assert_eq!(ViewId::from_index(Dashboard::IsLm, 4), None);
    }

    #[test]
    fn test_cycling_wraps_within_dashboard() {
        assert_eq!(ViewId::Keynes.next(), ViewId::AdAsHome);
        assert_eq!(ViewId::AdAsHome.prev(), ViewId::Keynes);
        assert_eq!(ViewId::Equilibrium.next(), ViewId::IsLmHome);
        assert_eq!(ViewId::IsCurve.prev(), ViewId::IsLmHome);
    }

    #[test]
    fn test_dashboard_home() {
        assert_eq!(Dashboard::AdAs.home(), ViewId::AdAsHome);
        assert_eq!(Dashboard::IsLm.home(), ViewId::IsLmHome);
        assert_eq!(Dashboard::AdAs.other(), Dashboard::IsLm);
    }
}
