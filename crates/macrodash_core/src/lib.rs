//! Macroeconomics teaching models
//!
//! This crate provides the numerical core behind the AD-AS and IS-LM
//! dashboards. Every operation is a pure function: inputs go in, sampled
//! curves and equilibrium values come out, nothing is cached.
//! It supports:
//! - Aggregate demand as a linear combination of government spending and money supply
//! - Aggregate supply as a scenario-dependent power law over a GDP grid
//! - IS and LM curves over an output grid
//! - Equilibrium resolution by closed-form solve or nearest-crossing grid scan
//!
//! ```
//! use macrodash_core::{Scenario, compute_ad_as, compute_is};
//!
//! let ad_as = compute_ad_as(Scenario::Normal, 100.0, 100.0);
//! assert_eq!(ad_as.aggregate_demand, 230.0);
//! assert_eq!(ad_as.aggregate_supply.len(), 100);
//!
//! let is = compute_is(100.0, 100.0);
//! assert_eq!(is.output, 281.25);
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod ad_as;
pub mod error;
pub mod grid;
pub mod inputs;
pub mod is_lm;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use ad_as::{AdAsOutcome, Scenario, aggregate_demand, aggregate_supply, compute_ad_as};
pub use error::{ModelError, ModelResult};
pub use grid::{
    CurvePoint, CurveSample, EquilibriumPoint, SAMPLE_COUNT, linspace, nearest_crossing,
};
pub use inputs::ParamRange;
pub use is_lm::{
    EquilibriumOutcome, IsOutcome, LmOutcome, R_FIXED, Y_FIXED, compute_equilibrium, compute_is,
    compute_lm, is_rate, lm_rate,
};
