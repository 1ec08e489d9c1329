//! svg_chart crate for rendering charts as SVG scenes
//!
//! Five chart types (bar, line, pie/donut, stacked bar, stacked area) that
//! each turn `(data, config)` into an immutable scene description on every
//! `render()` call, plus a per-instance hover state machine for tooltips.

pub mod axis_renderer;
pub mod charts;
pub mod color;
pub mod data_types;
pub mod interaction;
pub mod legend;
pub mod scales;
pub mod scene;
pub mod shapes;
pub mod theme;
pub mod tooltip;
pub mod utils;

pub use charts::{
    BarChart, ChartRenderer, LineChart, PieChart, StackedAreaChart, StackedBarChart,
};
pub use color::{Color, ColorScheme};
pub use data_types::{
    BarDatum, CategoryValue, PlotPoint, Series, StackedAreaDatum, StackedDatum, TooltipState,
};
pub use interaction::{ChartOutput, HoverController};
pub use scene::Scene;
