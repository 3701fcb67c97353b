use macrodash_core::{
    AdAsOutcome, EquilibriumOutcome, IsOutcome, LmOutcome, ModelResult, compute_ad_as,
    compute_equilibrium, compute_is, compute_lm,
};

use super::PolicyInputs;

/// Resolver results for the current inputs.
///
/// Rebuilt from scratch whenever an input changes; nothing from an earlier
/// evaluation is kept.
#[derive(Debug, Clone)]
pub struct ModelOutputs {
    pub ad_as: AdAsOutcome,
    pub is: IsOutcome,
    pub lm: ModelResult<LmOutcome>,
    pub equilibrium: ModelResult<EquilibriumOutcome>,
}

impl ModelOutputs {
    pub fn compute(inputs: &PolicyInputs) -> Self {
        let outputs = Self {
            ad_as: compute_ad_as(inputs.scenario, inputs.ad_as_g, inputs.ad_as_m),
            is: compute_is(inputs.is_lm_g, inputs.is_lm_t),
            lm: compute_lm(inputs.is_lm_m, inputs.is_lm_p),
            equilibrium: compute_equilibrium(
                inputs.is_lm_g,
                inputs.is_lm_t,
                inputs.is_lm_m,
                inputs.is_lm_p,
            ),
        };

        tracing::debug!(
            scenario = ?inputs.scenario,
            aggregate_demand = outputs.ad_as.aggregate_demand,
            is_output = outputs.is.output,
            lm_rate = ?outputs.lm.as_ref().map(|lm| lm.rate),
            equilibrium = ?outputs.equilibrium.as_ref().map(|eq| eq.point),
            "Recomputed model outputs"
        );

        outputs
    }

    /// First resolver error, if any.
    pub fn error(&self) -> Option<String> {
        self.lm
            .as_ref()
            .err()
            .or(self.equilibrium.as_ref().err())
            .map(|e| e.to_string())
    }
}
