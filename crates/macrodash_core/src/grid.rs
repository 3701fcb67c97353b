//! Grid sampling shared by both resolvers.
//!
//! Curves are evaluated over a fixed, evenly spaced grid. The grid matches
//! the usual `linspace` convention: both endpoints are included and the last
//! point is pinned to `stop` exactly, so accumulated step error never moves
//! the right edge of a chart.

use serde::{Deserialize, Serialize};

/// Number of points every curve is sampled at
pub const SAMPLE_COUNT: usize = 100;

/// Evenly spaced values over `[start, stop]`, inclusive at both ends.
///
/// `count == 0` yields an empty grid and `count == 1` yields `[start]`.
pub fn linspace(start: f64, stop: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (count - 1) as f64;
            let mut values: Vec<f64> = (0..count).map(|i| start + i as f64 * step).collect();
            values[count - 1] = stop;
            values
        }
    }
}

/// Index of the smallest `|a[i] - b[i]|`, keeping the first index on ties.
///
/// Returns `None` when either slice is empty. Only the common prefix of the
/// two slices is scanned.
pub fn nearest_crossing(a: &[f64], b: &[f64]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;

    for (i, (ya, yb)) in a.iter().zip(b.iter()).enumerate() {
        let distance = (ya - yb).abs();
        match best {
            // Strict comparison keeps the earliest index when distances tie
            Some((_, best_distance)) if distance >= best_distance => {}
            _ => best = Some((i, distance)),
        }
    }

    best.map(|(i, _)| i)
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    pub x: f64,
    pub y: f64,
}

/// An ordered sequence of `(x, y)` samples with ascending `x`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CurveSample {
    points: Vec<CurvePoint>,
}

impl CurveSample {
    /// Evaluate `f` at every grid value.
    pub fn from_fn(xs: &[f64], f: impl Fn(f64) -> f64) -> Self {
        Self {
            points: xs.iter().map(|&x| CurvePoint { x, y: f(x) }).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[CurvePoint] {
        &self.points
    }

    pub fn get(&self, index: usize) -> Option<CurvePoint> {
        self.points.get(index).copied()
    }

    pub fn first(&self) -> Option<CurvePoint> {
        self.points.first().copied()
    }

    pub fn last(&self) -> Option<CurvePoint> {
        self.points.last().copied()
    }

    pub fn xs(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.x).collect()
    }

    pub fn ys(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.y).collect()
    }

    /// Samples as `(x, y)` tuples, the shape chart datasets consume.
    pub fn as_pairs(&self) -> Vec<(f64, f64)> {
        self.points.iter().map(|p| (p.x, p.y)).collect()
    }

    /// Smallest and largest `y`, or `None` for an empty curve.
    pub fn y_bounds(&self) -> Option<(f64, f64)> {
        self.points.iter().fold(None, |acc, p| match acc {
            None => Some((p.y, p.y)),
            Some((lo, hi)) => Some((lo.min(p.y), hi.max(p.y))),
        })
    }
}

/// A resolved intersection or constrained solution.
///
/// `rate` is `None` when the model only pins down output.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EquilibriumPoint {
    pub output: f64,
    pub rate: Option<f64>,
}

impl EquilibriumPoint {
    pub fn new(output: f64, rate: f64) -> Self {
        Self {
            output,
            rate: Some(rate),
        }
    }

    pub fn output_only(output: f64) -> Self {
        Self { output, rate: None }
    }
}
