//! Slider and selector state for the policy inputs.

use macrodash_core::{ParamRange, Scenario};
use serde::{Deserialize, Serialize};

use super::ViewId;

/// Current value of every policy input across both dashboards.
///
/// The IS, LM and equilibrium views share one set of IS-LM inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PolicyInputs {
    pub scenario: Scenario,
    pub ad_as_g: f64,
    pub ad_as_m: f64,
    pub is_lm_g: f64,
    pub is_lm_t: f64,
    pub is_lm_m: f64,
    pub is_lm_p: f64,
}

impl Default for PolicyInputs {
    fn default() -> Self {
        Self {
            scenario: Scenario::Normal,
            ad_as_g: ParamRange::GOVERNMENT_SPENDING.default,
            ad_as_m: ParamRange::AD_AS_MONEY_SUPPLY.default,
            is_lm_g: ParamRange::GOVERNMENT_SPENDING.default,
            is_lm_t: ParamRange::TAXES.default,
            is_lm_m: ParamRange::IS_LM_MONEY_SUPPLY.default,
            is_lm_p: ParamRange::PRICE_LEVEL.default,
        }
    }
}

impl PolicyInputs {
    /// Snap every value onto its slider's range and step.
    pub fn sanitized(&self) -> Self {
        let mut inputs = self.clone();
        for control in ControlId::SLIDERS {
            if let Some(range) = control.range() {
                let value = range.snap(inputs.value(control));
                inputs.set_value(control, value);
            }
        }
        inputs
    }

    /// Numeric value behind a slider. The scenario selector has none.
    pub fn value(&self, control: ControlId) -> f64 {
        match control {
            ControlId::Scenario => f64::NAN,
            ControlId::AdAsSpending => self.ad_as_g,
            ControlId::AdAsMoney => self.ad_as_m,
            ControlId::IsLmSpending => self.is_lm_g,
            ControlId::Taxes => self.is_lm_t,
            ControlId::IsLmMoney => self.is_lm_m,
            ControlId::PriceLevel => self.is_lm_p,
        }
    }

    fn set_value(&mut self, control: ControlId, value: f64) {
        match control {
            ControlId::Scenario => {}
            ControlId::AdAsSpending => self.ad_as_g = value,
            ControlId::AdAsMoney => self.ad_as_m = value,
            ControlId::IsLmSpending => self.is_lm_g = value,
            ControlId::Taxes => self.is_lm_t = value,
            ControlId::IsLmMoney => self.is_lm_m = value,
            ControlId::PriceLevel => self.is_lm_p = value,
        }
    }

    /// Move a control one step. Returns whether the value changed.
    pub fn adjust(&mut self, control: ControlId, increase: bool) -> bool {
        let Some(range) = control.range() else {
            let before = self.scenario;
            self.scenario = if increase {
                self.scenario.next()
            } else {
                self.scenario.prev()
            };
            return self.scenario != before;
        };

        let before = self.value(control);
        let after = if increase {
            range.step_up(before)
        } else {
            range.step_down(before)
        };
        self.set_value(control, after);
        after != before
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlId {
    Scenario,
    AdAsSpending,
    AdAsMoney,
    IsLmSpending,
    Taxes,
    IsLmMoney,
    PriceLevel,
}

impl ControlId {
    pub const SLIDERS: [ControlId; 6] = [
        ControlId::AdAsSpending,
        ControlId::AdAsMoney,
        ControlId::IsLmSpending,
        ControlId::Taxes,
        ControlId::IsLmMoney,
        ControlId::PriceLevel,
    ];

    pub fn range(&self) -> Option<ParamRange> {
        match self {
            ControlId::Scenario => None,
            ControlId::AdAsSpending | ControlId::IsLmSpending => {
                Some(ParamRange::GOVERNMENT_SPENDING)
            }
            ControlId::AdAsMoney => Some(ParamRange::AD_AS_MONEY_SUPPLY),
            ControlId::IsLmMoney => Some(ParamRange::IS_LM_MONEY_SUPPLY),
            ControlId::Taxes => Some(ParamRange::TAXES),
            ControlId::PriceLevel => Some(ParamRange::PRICE_LEVEL),
        }
    }

    pub fn label(&self) -> String {
        match self.range() {
            Some(range) => format!("{} ({})", range.name, range.symbol),
            None => "Economic scenario".to_string(),
        }
    }
}

impl ViewId {
    /// Controls shown on this view, in focus order
    pub fn controls(&self) -> &'static [ControlId] {
        match self {
            ViewId::AdAsSimulation => &[
                ControlId::Scenario,
                ControlId::AdAsSpending,
                ControlId::AdAsMoney,
            ],
            ViewId::IsCurve => &[ControlId::IsLmSpending, ControlId::Taxes],
            ViewId::LmCurve => &[ControlId::IsLmMoney, ControlId::PriceLevel],
            ViewId::Equilibrium => &[
                ControlId::IsLmSpending,
                ControlId::Taxes,
                ControlId::IsLmMoney,
                ControlId::PriceLevel,
            ],
            _ => &[],
        }
    }
}
