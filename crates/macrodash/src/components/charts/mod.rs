//! Chart components for the model curves.

mod curve_chart;

pub use curve_chart::{CurveChart, padded_bounds};
