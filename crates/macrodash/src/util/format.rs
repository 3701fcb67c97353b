/// Format a model value with a fixed number of decimals
pub fn format_value(value: f64, decimals: usize) -> String {
    if value.is_finite() {
        format!("{:.*}", decimals, value)
    } else {
        "n/a".to_string()
    }
}

/// Format a slider value: whole numbers without decimals
pub fn format_input(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.1}", value)
    }
}

/// Axis tick labels spread evenly across `[min, max]`
pub fn axis_labels(min: f64, max: f64, count: usize) -> Vec<String> {
    macrodash_core::linspace(min, max, count)
        .into_iter()
        .map(|v| format!("{:.0}", v))
        .collect()
}
