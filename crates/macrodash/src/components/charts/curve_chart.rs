//! Line chart for sampled model curves.
//!
//! Each curve becomes a braille line dataset. Vertical reference lines
//! (aggregate demand, the IS solution) are two-point datasets spanning the
//! y-range, and an optional equilibrium marker is drawn as a scatter point.

use macrodash_core::CurveSample;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style, Stylize},
    symbols,
    text::Span,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType},
};

use crate::util::format::axis_labels;
use crate::util::styles::MARKER_COLOR;

/// Number of tick labels on each axis
const TICK_COUNT: usize = 5;

struct Series {
    name: String,
    data: Vec<(f64, f64)>,
    color: Color,
    graph_type: GraphType,
    marker: symbols::Marker,
}

/// Builder for a titled chart of one or more curves
pub struct CurveChart {
    title: String,
    x_title: String,
    y_title: String,
    x_bounds: Option<(f64, f64)>,
    curves: Vec<Series>,
    vertical_lines: Vec<(String, f64, Color)>,
    marker: Option<(f64, f64)>,
}

impl CurveChart {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            x_title: String::new(),
            y_title: String::new(),
            x_bounds: None,
            curves: Vec::new(),
            vertical_lines: Vec::new(),
            marker: None,
        }
    }

    pub fn x_axis(mut self, title: impl Into<String>, min: f64, max: f64) -> Self {
        self.x_title = title.into();
        self.x_bounds = Some((min, max));
        self
    }

    pub fn y_axis(mut self, title: impl Into<String>) -> Self {
        self.y_title = title.into();
        self
    }

    pub fn curve(mut self, name: impl Into<String>, sample: &CurveSample, color: Color) -> Self {
        self.curves.push(Series {
            name: name.into(),
            data: sample.as_pairs(),
            color,
            graph_type: GraphType::Line,
            marker: symbols::Marker::Braille,
        });
        self
    }

    /// Vertical line at `x` spanning the chart's y-range
    pub fn vertical_line(mut self, name: impl Into<String>, x: f64, color: Color) -> Self {
        self.vertical_lines.push((name.into(), x, color));
        self
    }

    pub fn marker(mut self, x: f64, y: f64) -> Self {
        self.marker = Some((x, y));
        self
    }

    /// Y-range covering every curve and the marker
    fn y_bounds(&self) -> (f64, f64) {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;

        let ys = self
            .curves
            .iter()
            .flat_map(|s| s.data.iter().map(|(_, y)| *y))
            .chain(self.marker.map(|(_, y)| y));
        for y in ys.filter(|y| y.is_finite()) {
            min = min.min(y);
            max = max.max(y);
        }

        padded_bounds(min, max)
    }

    fn x_bounds(&self) -> (f64, f64) {
        if let Some(bounds) = self.x_bounds {
            return bounds;
        }

        let xs = self.curves.iter().flat_map(|s| s.data.iter().map(|(x, _)| *x));
        let (min, max) = xs.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), x| {
            (lo.min(x), hi.max(x))
        });
        padded_bounds(min, max)
    }

    pub fn render(self, frame: &mut Frame, area: Rect) {
        let (x_min, x_max) = self.x_bounds();
        let (y_min, y_max) = self.y_bounds();

        let mut series: Vec<Series> = Vec::new();
        for (name, x, color) in &self.vertical_lines {
            series.push(Series {
                name: name.clone(),
                data: vec![(*x, y_min), (*x, y_max)],
                color: *color,
                graph_type: GraphType::Line,
                marker: symbols::Marker::Braille,
            });
        }
        if let Some(point) = self.marker {
            series.push(Series {
                name: "Equilibrium".to_string(),
                data: vec![point],
                color: MARKER_COLOR,
                graph_type: GraphType::Scatter,
                marker: symbols::Marker::Dot,
            });
        }

        let datasets: Vec<Dataset> = self
            .curves
            .iter()
            .chain(series.iter())
            .map(|s| {
                Dataset::default()
                    .name(s.name.clone())
                    .marker(s.marker)
                    .graph_type(s.graph_type)
                    .style(Style::default().fg(s.color))
                    .data(&s.data)
            })
            .collect();

        let x_axis = Axis::default()
            .title(self.x_title.clone().dark_gray())
            .bounds([x_min, x_max])
            .labels(axis_labels(x_min, x_max, TICK_COUNT).into_iter().map(Span::raw));

        let y_axis = Axis::default()
            .title(self.y_title.clone().dark_gray())
            .bounds([y_min, y_max])
            .labels(axis_labels(y_min, y_max, TICK_COUNT).into_iter().map(Span::raw));

        let chart = Chart::new(datasets)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!(" {} ", self.title)),
            )
            .x_axis(x_axis)
            .y_axis(y_axis);

        frame.render_widget(chart, area);
    }
}

/// Pad a data range by 5% on each side. Flat or empty ranges get a unit span.
pub fn padded_bounds(min: f64, max: f64) -> (f64, f64) {
    if !min.is_finite() || !max.is_finite() {
        return (0.0, 1.0);
    }

    let span = max - min;
    if span <= f64::EPSILON {
        return (min - 1.0, max + 1.0);
    }

    let padding = span * 0.05;
    (min - padding, max + padding)
}

#[cfg(test)]
mod tests {
    use super::*;
    use macrodash_core::{Scenario, compute_ad_as, compute_is};

    #[test]
    fn test_padded_bounds() {
        assert_eq!(padded_bounds(0.0, 100.0), (-5.0, 105.0));
        assert_eq!(padded_bounds(5.0, 5.0), (4.0, 6.0));
        assert_eq!(padded_bounds(f64::INFINITY, f64::NEG_INFINITY), (0.0, 1.0));
    }

    #[test]
    fn test_y_bounds_cover_curve_and_marker() {
        let is = compute_is(100.0, 100.0);
        let chart = CurveChart::new("IS")
            .curve("IS", &is.curve, Color::Blue)
            .marker(is.output, 1000.0);

        let (lo, hi) = chart.y_bounds();
        let (curve_lo, _) = is.curve.y_bounds().unwrap_or((0.0, 0.0));
        assert!(lo < curve_lo);
        assert!(hi > 1000.0);
    }

    #[test]
    fn test_explicit_x_bounds_win() {
        let ad_as = compute_ad_as(Scenario::Normal, 100.0, 100.0);
        let chart = CurveChart::new("AD-AS")
            .x_axis("GDP", 0.0, 600.0)
            .curve("AS", &ad_as.aggregate_supply, Color::Blue);

        assert_eq!(chart.x_bounds(), (0.0, 600.0));
    }
}
