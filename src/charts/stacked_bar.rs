use glam::Vec2;
use tracing::debug;

use super::{title_node, unique_labels, ChartRenderer};
use crate::axis_renderer::{AxisEdge, AxisRenderer};
use crate::data_types::{
    Orientation, StackedBarChartConfig, StackedDatum, TooltipContent, TooltipLine,
};
use crate::interaction::{ChartOutput, HitRegion, HitShape};
use crate::legend::{legend_row, LEGEND_MARGIN};
use crate::scales::{BandScale, ColorScale, LinearScale};
use crate::scene::{GroupNode, RectNode, Role, Scene, SceneNode, TextAnchor, TextNode};
use crate::shapes::{first_seen_categories, stack_intervals};
use crate::theme::ChartTheme;
use crate::utils::format_value;

/// Stacked bar chart, vertical or horizontal. Categories stack in
/// first-seen order; each label's segments are cumulative `[start, end]`
/// intervals on the linear axis.
pub struct StackedBarChart {
    pub data: Vec<StackedDatum>,
    pub config: StackedBarChartConfig,
    pub theme: ChartTheme,
}

impl StackedBarChart {
    pub fn new(data: Vec<StackedDatum>) -> Self {
        Self {
            data,
            config: StackedBarChartConfig::default(),
            theme: ChartTheme::default(),
        }
    }

    pub fn with_config(data: Vec<StackedDatum>, config: StackedBarChartConfig) -> Self {
        Self {
            data,
            config,
            theme: ChartTheme::default(),
        }
    }
}

impl ChartRenderer for StackedBarChart {
    fn render(&self) -> ChartOutput {
        let cfg = &self.config;
        let mut scene = Scene::new(cfg.width, cfg.height, cfg.aria_label.clone());
        let mut hit_regions = Vec::new();
        if self.data.is_empty() {
            debug!(chart = "stacked_bar", "empty data, rendering bare scene");
            return ChartOutput { scene, hit_regions };
        }

        let m = cfg.margin;
        let bottom = if cfg.show_legend {
            m.bottom + LEGEND_MARGIN
        } else {
            m.bottom
        };
        let inner_width = (cfg.width as f32 - m.left - m.right).max(0.0);
        let inner_height = (cfg.height as f32 - m.top - bottom).max(0.0);

        let categories = first_seen_categories(self.data.iter().map(|d| d.values.as_slice()));
        let rows: Vec<&[_]> = self.data.iter().map(|d| d.values.as_slice()).collect();
        let stacked = stack_intervals(&rows, &categories);

        // The linear domain runs to the tallest stack.
        let max_total = stacked
            .last()
            .map(|tops| tops.iter().fold(0.0f64, |acc, (_, end)| acc.max(*end)))
            .unwrap_or(0.0);

        let labels = unique_labels(self.data.iter().map(|d| d.label.as_str()));
        let (band, linear) = match cfg.orientation {
            Orientation::Vertical => (
                BandScale::new(labels, (0.0, inner_width), cfg.bar_padding),
                LinearScale::new((0.0, max_total), (inner_height, 0.0)),
            ),
            Orientation::Horizontal => (
                BandScale::new(labels, (0.0, inner_height), cfg.bar_padding),
                LinearScale::new((0.0, max_total), (0.0, inner_width)),
            ),
        };

        let colors = ColorScale::resolve(
            categories.clone(),
            cfg.colors.as_deref(),
            cfg.color_scheme,
        );
        let value_format = cfg.value_format.unwrap_or(format_value);

        if let Some(title) = &cfg.title {
            scene.push(title_node(title, m.left, &self.theme));
        }

        let mut plot = GroupNode {
            translate: Some((m.left, m.top)),
            ..Default::default()
        };
        let rx = if cfg.rounded_corners {
            cfg.corner_radius
        } else {
            0.0
        };

        for (ci, category) in categories.iter().enumerate() {
            let mut layer = GroupNode {
                fill: Some(colors.color(category)),
                ..Default::default()
            };
            for (ri, datum) in self.data.iter().enumerate() {
                let (start, end) = stacked[ci][ri];
                let Some(band_pos) = band.position(&datum.label) else {
                    continue;
                };
                // Zero-extent segments still occupy their spot on the band
                // axis; they just have no visible area.
                let (x, y, width, height) = match cfg.orientation {
                    Orientation::Vertical => {
                        let y1 = linear.map(end);
                        let y0 = linear.map(start);
                        (band_pos, y1, band.bandwidth(), (y0 - y1).max(0.0))
                    }
                    Orientation::Horizontal => {
                        let x0 = linear.map(start);
                        let x1 = linear.map(end);
                        (x0, band_pos, (x1 - x0).max(0.0), band.bandwidth())
                    }
                };
                let value = end - start;
                layer.children.push(SceneNode::Rect(RectNode {
                    x,
                    y,
                    width,
                    height,
                    rx,
                    fill: None,
                    stroke: None,
                    role: Some(Role::Img),
                    aria_label: Some(format!(
                        "{} - {}: {}",
                        datum.label,
                        category,
                        format_value(value)
                    )),
                }));

                if cfg.show_tooltip {
                    let min = Vec2::new(x + m.left, y + m.top);
                    hit_regions.push(HitRegion {
                        shape: HitShape::Rect {
                            min,
                            max: min + Vec2::new(width, height),
                        },
                        anchor: min + Vec2::new(width / 2.0, 0.0),
                        content: TooltipContent::new(vec![
                            TooltipLine::new("Category", datum.label.clone()),
                            TooltipLine::new("Value", value_format(value)),
                        ]),
                    });
                }
            }
            plot.children.push(SceneNode::Group(layer));
        }

        if cfg.show_values {
            for (ci, _) in categories.iter().enumerate() {
                for (ri, datum) in self.data.iter().enumerate() {
                    let (start, end) = stacked[ci][ri];
                    if end - start <= 0.0 {
                        continue;
                    }
                    let Some(band_pos) = band.position(&datum.label) else {
                        continue;
                    };
                    let band_center = band_pos + band.bandwidth() / 2.0;
                    let along = linear.map((start + end) / 2.0);
                    let (x, y) = match cfg.orientation {
                        Orientation::Vertical => (band_center, along),
                        Orientation::Horizontal => (along, band_center),
                    };
                    let mut text = TextNode::new(x, y, value_format(end - start), 10.0);
                    text.anchor = TextAnchor::Middle;
                    text.fill = crate::color::Color::rgb(255, 255, 255);
                    plot.children.push(SceneNode::Text(text));
                }
            }
        }

        match cfg.orientation {
            Orientation::Vertical => {
                plot.children.push(AxisRenderer::band_axis(
                    &band,
                    AxisEdge::Bottom,
                    (0.0, inner_height),
                    3.0,
                    &self.theme,
                ));
                plot.children.push(AxisRenderer::linear_axis(
                    &linear,
                    AxisEdge::Left,
                    (0.0, 0.0),
                    10,
                    10.0,
                    &self.theme,
                ));
            }
            Orientation::Horizontal => {
                plot.children.push(AxisRenderer::linear_axis(
                    &linear,
                    AxisEdge::Bottom,
                    (0.0, inner_height),
                    10,
                    3.0,
                    &self.theme,
                ));
                plot.children.push(AxisRenderer::band_axis(
                    &band,
                    AxisEdge::Left,
                    (0.0, 0.0),
                    10.0,
                    &self.theme,
                ));
            }
        }
        if let Some(label) = &cfg.x_axis_label {
            plot.children.push(AxisRenderer::x_axis_title(
                label,
                inner_width,
                inner_height,
                m.bottom,
                &self.theme,
            ));
        }
        if let Some(label) = &cfg.y_axis_label {
            plot.children
                .push(AxisRenderer::y_axis_title(label, inner_height, m.left, &self.theme));
        }

        scene.push(SceneNode::Group(plot));

        if cfg.show_legend {
            scene.push(legend_row(
                &colors,
                (m.left, cfg.height as f32 - bottom + 50.0),
                &self.theme,
            ));
        }

        debug!(
            chart = "stacked_bar",
            labels = self.data.len(),
            categories = categories.len(),
            "rendered"
        );
        ChartOutput { scene, hit_regions }
    }
}
