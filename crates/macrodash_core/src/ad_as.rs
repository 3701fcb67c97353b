//! Aggregate demand / aggregate supply.
//!
//! Aggregate demand is a single GDP level, drawn as a vertical line. The
//! aggregate supply curve maps GDP to a price level with a power law whose
//! coefficients depend on the selected scenario. The two are presented side
//! by side and no intersection is solved for.

use serde::{Deserialize, Serialize};

use crate::grid::{CurveSample, EquilibriumPoint, SAMPLE_COUNT, linspace};

/// Weight of government spending in aggregate demand
pub const AD_SPENDING_WEIGHT: f64 = 1.5;
/// Weight of money supply in aggregate demand
pub const AD_MONEY_WEIGHT: f64 = 0.8;

/// Lower end of the GDP grid the AS curve is sampled on
pub const GDP_MIN: f64 = 50.0;
/// Upper end of the GDP grid the AS curve is sampled on
pub const GDP_MAX: f64 = 500.0;

/// Economic scenario selecting the aggregate supply coefficients
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scenario {
    #[default]
    Normal,
    /// Demand-driven boom; prices respond less steeply to growth
    DemandShock,
    /// Cost-push inflation; prices respond more steeply
    SupplyShock,
}

impl Scenario {
    pub const ALL: [Scenario; 3] = [
        Scenario::Normal,
        Scenario::DemandShock,
        Scenario::SupplyShock,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Scenario::Normal => "Normal",
            Scenario::DemandShock => "Demand shock (boom)",
            Scenario::SupplyShock => "Supply shock (cost increase)",
        }
    }

    /// `(k, p)` in `price = k * GDP^p`
    pub fn coefficients(&self) -> (f64, f64) {
        match self {
            Scenario::Normal => (0.02, 1.2),
            Scenario::DemandShock => (0.015, 1.1),
            Scenario::SupplyShock => (0.03, 1.3),
        }
    }

    pub fn next(&self) -> Self {
        match self {
            Scenario::Normal => Scenario::DemandShock,
            Scenario::DemandShock => Scenario::SupplyShock,
            Scenario::SupplyShock => Scenario::Normal,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            Scenario::Normal => Scenario::SupplyShock,
            Scenario::DemandShock => Scenario::Normal,
            Scenario::SupplyShock => Scenario::DemandShock,
        }
    }
}

/// Result of one AD-AS evaluation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdAsOutcome {
    pub scenario: Scenario,
    /// GDP level implied by aggregate demand
    pub aggregate_demand: f64,
    /// Price level over the GDP grid
    pub aggregate_supply: CurveSample,
}

impl AdAsOutcome {
    /// The adjusted GDP level shown to the reader. Only output is determined.
    pub fn equilibrium(&self) -> EquilibriumPoint {
        EquilibriumPoint::output_only(self.aggregate_demand)
    }
}

#[inline]
pub fn aggregate_demand(government_spending: f64, money_supply: f64) -> f64 {
    AD_SPENDING_WEIGHT * government_spending + AD_MONEY_WEIGHT * money_supply
}

/// Price level at `gdp` under `scenario`.
#[inline]
pub fn aggregate_supply(scenario: Scenario, gdp: f64) -> f64 {
    let (k, p) = scenario.coefficients();
    k * gdp.powf(p)
}

/// Evaluate aggregate demand and sample the AS curve over `[GDP_MIN, GDP_MAX]`.
pub fn compute_ad_as(scenario: Scenario, government_spending: f64, money_supply: f64) -> AdAsOutcome {
    let gdp = linspace(GDP_MIN, GDP_MAX, SAMPLE_COUNT);

    AdAsOutcome {
        scenario,
        aggregate_demand: aggregate_demand(government_spending, money_supply),
        aggregate_supply: CurveSample::from_fn(&gdp, |x| aggregate_supply(scenario, x)),
    }
}
