//! Unit tests for the resolvers
//!
//! Tests are organized by topic:
//! - `grid` - Grid sampling and the nearest-crossing scan
//! - `ad_as` - Aggregate demand and scenario-dependent supply curves
//! - `is_lm` - IS and LM curves and the three equilibrium resolutions
