//! Investment-savings / liquidity-money.
//!
//! Both curves are evaluated over the same output grid `[0, 500]`. The IS
//! curve here rises with output, a simplification of the textbook shape that
//! the dashboards keep on purpose.
//!
//! Three resolutions are offered:
//! - [`compute_is`]: output that puts the IS curve at a fixed rate, solved in
//!   closed form
//! - [`compute_lm`]: rate on the LM curve at a fixed output, by evaluation
//! - [`compute_equilibrium`]: the grid point where the two curves are closest

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, ModelResult};
use crate::grid::{CurveSample, EquilibriumPoint, SAMPLE_COUNT, linspace, nearest_crossing};

/// Autonomous consumption
pub const C0: f64 = 50.0;
/// Autonomous investment
pub const I0: f64 = 50.0;
/// Marginal propensity to consume
pub const MPC: f64 = 0.8;

/// Income sensitivity of money demand
pub const MONEY_DEMAND_INCOME: f64 = 0.5;
/// Interest sensitivity of money demand
pub const MONEY_DEMAND_RATE: f64 = 0.5;

/// Rate the IS solve targets
pub const R_FIXED: f64 = 5.0;
/// Output the LM solve evaluates at
pub const Y_FIXED: f64 = 300.0;

/// Intercept used by the fixed-rate IS solve.
///
/// This is only the autonomous consumption term, not `C0 + I0`, so the
/// solved output is not the root of [`is_rate`] at [`R_FIXED`].
const IS_SOLVE_INTERCEPT: f64 = C0;

pub const OUTPUT_MIN: f64 = 0.0;
pub const OUTPUT_MAX: f64 = 500.0;

/// IS curve: `C0 + I0 + MPC * (y - t) + g`
#[inline]
pub fn is_rate(output: f64, government_spending: f64, taxes: f64) -> f64 {
    C0 + I0 + MPC * (output - taxes) + government_spending
}

/// LM curve: `(m / p - k * y) / h`
///
/// This is the raw formula; a zero price level yields a non-finite value.
/// The `compute_*` functions reject such inputs before calling it.
#[inline]
pub fn lm_rate(output: f64, money_supply: f64, price_level: f64) -> f64 {
    (money_supply / price_level - MONEY_DEMAND_INCOME * output) / MONEY_DEMAND_RATE
}

fn output_grid() -> Vec<f64> {
    linspace(OUTPUT_MIN, OUTPUT_MAX, SAMPLE_COUNT)
}

fn check_price_level(price_level: f64) -> ModelResult<()> {
    if price_level.is_finite() && price_level > 0.0 {
        Ok(())
    } else {
        Err(ModelError::NonPositivePriceLevel(price_level))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IsOutcome {
    pub curve: CurveSample,
    /// Output at which the IS relation meets [`R_FIXED`]
    pub output: f64,
}

impl IsOutcome {
    pub fn equilibrium(&self) -> EquilibriumPoint {
        EquilibriumPoint::new(self.output, R_FIXED)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LmOutcome {
    pub curve: CurveSample,
    /// LM rate at [`Y_FIXED`]
    pub rate: f64,
}

impl LmOutcome {
    pub fn equilibrium(&self) -> EquilibriumPoint {
        EquilibriumPoint::new(Y_FIXED, self.rate)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquilibriumOutcome {
    pub is_curve: CurveSample,
    pub lm_curve: CurveSample,
    /// Grid index of the selected crossing
    pub index: usize,
    pub point: EquilibriumPoint,
}

impl EquilibriumOutcome {
    pub fn output(&self) -> f64 {
        self.point.output
    }

    /// Always present: the scan reports the IS value at the crossing.
    pub fn rate(&self) -> f64 {
        self.point.rate.unwrap_or_default()
    }
}

/// Sample the IS curve and solve for output at the fixed rate.
pub fn compute_is(government_spending: f64, taxes: f64) -> IsOutcome {
    let curve = CurveSample::from_fn(&output_grid(), |y| {
        is_rate(y, government_spending, taxes)
    });
    let output = (R_FIXED - IS_SOLVE_INTERCEPT - government_spending) / -MPC + taxes;

    IsOutcome { curve, output }
}

/// Sample the LM curve and evaluate the rate at the fixed output.
pub fn compute_lm(money_supply: f64, price_level: f64) -> ModelResult<LmOutcome> {
    check_price_level(price_level)?;

    let curve = CurveSample::from_fn(&output_grid(), |y| lm_rate(y, money_supply, price_level));
    let rate = lm_rate(Y_FIXED, money_supply, price_level);

    Ok(LmOutcome { curve, rate })
}

/// Sample both curves and pick the grid point where they are closest.
///
/// The result is bounded by grid resolution (about 5.05 output units per
/// step); it is not refined toward the continuous intersection. The reported
/// rate is the IS value at that point.
pub fn compute_equilibrium(
    government_spending: f64,
    taxes: f64,
    money_supply: f64,
    price_level: f64,
) -> ModelResult<EquilibriumOutcome> {
    check_price_level(price_level)?;

    let grid = output_grid();
    let is_curve = CurveSample::from_fn(&grid, |y| is_rate(y, government_spending, taxes));
    let lm_curve = CurveSample::from_fn(&grid, |y| lm_rate(y, money_supply, price_level));

    let is_values = is_curve.ys();
    let index = nearest_crossing(&is_values, &lm_curve.ys()).unwrap_or(0);
    let point = EquilibriumPoint::new(grid[index], is_values[index]);

    Ok(EquilibriumOutcome {
        is_curve,
        lm_curve,
        index,
        point,
    })
}
