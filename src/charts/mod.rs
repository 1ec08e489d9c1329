// Chart types module

pub mod bar;
pub mod line;
pub mod pie;
pub mod stacked_area;
pub mod stacked_bar;

pub use bar::BarChart;
pub use line::LineChart;
pub use pie::PieChart;
pub use stacked_area::StackedAreaChart;
pub use stacked_bar::StackedBarChart;

use crate::interaction::ChartOutput;
use crate::scene::{SceneNode, TextNode};
use crate::theme::ChartTheme;

/// Trait for rendering chart types.
///
/// One call is one full redraw: the output is built entirely from the
/// chart's current data and config, never from a previous scene. Empty data
/// short-circuits into a valid empty scene that still carries the declared
/// size and accessible name.
pub trait ChartRenderer {
    fn render(&self) -> ChartOutput;
}

/// Chart title at the top-left, as the original places it.
pub(crate) fn title_node(title: &str, margin_left: f32, theme: &ChartTheme) -> SceneNode {
    let mut text = TextNode::new(margin_left, 25.0, title, theme.title_size);
    text.bold = true;
    text.fill = theme.title_color;
    SceneNode::Text(text)
}

/// Max over the finite values, 0 when there are none. Keeps degenerate
/// datasets inside the no-NaN scale contract.
pub(crate) fn finite_max(values: impl Iterator<Item = f64>) -> f64 {
    values
        .filter(|v| v.is_finite())
        .fold(0.0f64, |acc, v| acc.max(v))
}

/// First-seen de-duplication for band domains.
pub(crate) fn unique_labels<'a>(labels: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for label in labels {
        if !out.iter().any(|l| l == label) {
            out.push(label.to_string());
        }
    }
    out
}
