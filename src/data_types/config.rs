use serde::{Deserialize, Serialize};

use crate::color::{Color, ColorScheme};

/// Insets between the outer scene size and the plot area.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Margin {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Margin {
    pub const fn new(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Orientation {
    #[default]
    Vertical,
    Horizontal,
}

/// Value-to-display-string hook (`show_values`, tooltips). A plain fn
/// pointer keeps configs comparable and cloneable.
pub type ValueFormatter = fn(f64) -> String;

#[derive(Clone, Debug, PartialEq)]
pub struct BarChartConfig {
    pub width: u32,
    pub height: u32,
    pub margin: Margin,
    pub color: Color,
    pub aria_label: String,
    pub show_tooltip: bool,
}

impl Default for BarChartConfig {
    fn default() -> Self {
        Self {
            width: 600,
            height: 400,
            margin: Margin::new(20.0, 20.0, 30.0, 40.0),
            color: Color::rgb(0x21, 0x96, 0xf3),
            aria_label: "Bar Chart".into(),
            show_tooltip: true,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LineChartConfig {
    pub width: u32,
    pub height: u32,
    pub margin: Margin,
    pub colors: Option<Vec<Color>>,
    pub color_scheme: ColorScheme,
    pub aria_label: String,
    pub show_points: bool,
    pub show_area: bool,
    pub show_tooltip: bool,
    pub title: Option<String>,
    pub x_axis_label: Option<String>,
    pub y_axis_label: Option<String>,
}

impl Default for LineChartConfig {
    fn default() -> Self {
        Self {
            width: 600,
            height: 600,
            margin: Margin::new(40.0, 20.0, 70.0, 60.0),
            colors: None,
            color_scheme: ColorScheme::Category10,
            aria_label: "Line Chart".into(),
            show_points: true,
            show_area: false,
            show_tooltip: true,
            title: None,
            x_axis_label: None,
            y_axis_label: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PieChartConfig {
    pub width: u32,
    pub height: u32,
    pub margin: Margin,
    pub colors: Option<Vec<Color>>,
    pub color_scheme: ColorScheme,
    pub aria_label: String,
    /// 0 renders a full pie, anything larger a donut hole.
    pub inner_radius: f64,
    pub pad_angle: f64,
    pub title: Option<String>,
    pub show_tooltip: bool,
    pub show_legend: bool,
}

impl Default for PieChartConfig {
    fn default() -> Self {
        Self {
            width: 600,
            height: 400,
            margin: Margin::new(40.0, 20.0, 30.0, 40.0),
            colors: None,
            color_scheme: ColorScheme::Pastel2,
            aria_label: "Pie Chart".into(),
            inner_radius: 0.0,
            pad_angle: 0.02,
            title: None,
            show_tooltip: true,
            show_legend: true,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct StackedBarChartConfig {
    pub width: u32,
    pub height: u32,
    pub margin: Margin,
    pub colors: Option<Vec<Color>>,
    pub color_scheme: ColorScheme,
    pub aria_label: String,
    pub show_legend: bool,
    pub show_tooltip: bool,
    pub title: Option<String>,
    pub orientation: Orientation,
    pub x_axis_label: Option<String>,
    pub y_axis_label: Option<String>,
    pub bar_padding: f32,
    pub show_values: bool,
    pub value_format: Option<ValueFormatter>,
    pub rounded_corners: bool,
    pub corner_radius: f32,
}

impl Default for StackedBarChartConfig {
    fn default() -> Self {
        Self {
            width: 600,
            height: 600,
            margin: Margin::new(40.0, 20.0, 60.0, 70.0),
            colors: None,
            color_scheme: ColorScheme::Pastel2,
            aria_label: "Stacked Bar Chart".into(),
            show_legend: true,
            show_tooltip: true,
            title: None,
            orientation: Orientation::Vertical,
            x_axis_label: None,
            y_axis_label: None,
            bar_padding: 0.3,
            show_values: false,
            value_format: None,
            rounded_corners: false,
            corner_radius: 4.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct StackedAreaChartConfig {
    pub width: u32,
    pub height: u32,
    pub margin: Margin,
    pub colors: Option<Vec<Color>>,
    pub color_scheme: ColorScheme,
    pub aria_label: String,
    pub show_tooltip: bool,
    pub title: Option<String>,
    pub x_axis_label: Option<String>,
    pub y_axis_label: Option<String>,
}

impl Default for StackedAreaChartConfig {
    fn default() -> Self {
        Self {
            width: 600,
            height: 600,
            margin: Margin::new(40.0, 20.0, 60.0, 70.0),
            colors: None,
            color_scheme: ColorScheme::Pastel2,
            aria_label: "Stacked Area Chart".into(),
            show_tooltip: true,
            title: None,
            x_axis_label: None,
            y_axis_label: None,
        }
    }
}
