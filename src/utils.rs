/// Default value-to-text formatting for tick labels, tooltips and
/// `show_values` text. Integers print bare, tiny and large magnitudes get
/// adjusted precision.
pub fn format_value(value: f64) -> String {
    if !value.is_finite() {
        return String::from("-");
    }
    if value == value.trunc() {
        format!("{:.0}", value)
    } else if value.abs() < 0.001 {
        format!("{:.4}", value)
    } else if value.abs() > 1000.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.2}", value)
    }
}
