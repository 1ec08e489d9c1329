use glam::Vec2;
use tracing::debug;

use super::{title_node, ChartRenderer};
use crate::axis_renderer::{AxisEdge, AxisRenderer};
use crate::data_types::{StackedAreaChartConfig, StackedAreaDatum, TooltipContent, TooltipLine};
use crate::interaction::{ChartOutput, HitRegion, HitShape};
use crate::scales::{ColorScale, LinearScale};
use crate::scene::{GroupNode, PathNode, Role, Scene, SceneNode};
use crate::shapes::{first_seen_categories, monotone_band_path, stack_intervals};
use crate::theme::ChartTheme;
use crate::utils::format_value;

/// Stacked area chart: one monotone-interpolated band per category between
/// its cumulative stack boundaries.
pub struct StackedAreaChart {
    pub data: Vec<StackedAreaDatum>,
    pub config: StackedAreaChartConfig,
    pub theme: ChartTheme,
}

impl StackedAreaChart {
    pub fn new(data: Vec<StackedAreaDatum>) -> Self {
        Self {
            data,
            config: StackedAreaChartConfig::default(),
            theme: ChartTheme::default(),
        }
    }

    pub fn with_config(data: Vec<StackedAreaDatum>, config: StackedAreaChartConfig) -> Self {
        Self {
            data,
            config,
            theme: ChartTheme::default(),
        }
    }
}

impl ChartRenderer for StackedAreaChart {
    fn render(&self) -> ChartOutput {
        let cfg = &self.config;
        let mut scene = Scene::new(cfg.width, cfg.height, cfg.aria_label.clone());
        let mut hit_regions = Vec::new();

        // Rows drawn left to right along the continuous axis.
        let mut ordered: Vec<&StackedAreaDatum> =
            self.data.iter().filter(|d| d.x.is_finite()).collect();
        ordered.sort_by(|a, b| a.x.total_cmp(&b.x));
        if ordered.is_empty() {
            debug!(chart = "stacked_area", "empty data, rendering bare scene");
            return ChartOutput { scene, hit_regions };
        }

        let m = cfg.margin;
        let inner_width = (cfg.width as f32 - m.left - m.right).max(0.0);
        let inner_height = (cfg.height as f32 - m.top - m.bottom).max(0.0);

        let categories = first_seen_categories(ordered.iter().map(|d| d.values.as_slice()));
        let rows: Vec<&[_]> = ordered.iter().map(|d| d.values.as_slice()).collect();
        let stacked = stack_intervals(&rows, &categories);
        let max_total = stacked
            .last()
            .map(|tops| tops.iter().fold(0.0f64, |acc, (_, end)| acc.max(*end)))
            .unwrap_or(0.0);

        let x = LinearScale::new(
            (ordered[0].x, ordered[ordered.len() - 1].x),
            (0.0, inner_width),
        );
        let y = LinearScale::new((0.0, max_total), (inner_height, 0.0));

        let colors = ColorScale::resolve(
            categories.clone(),
            cfg.colors.as_deref(),
            cfg.color_scheme,
        );

        if let Some(title) = &cfg.title {
            scene.push(title_node(title, m.left, &self.theme));
        }

        let mut plot = GroupNode {
            translate: Some((m.left, m.top)),
            ..Default::default()
        };

        for (ci, category) in categories.iter().enumerate() {
            let top: Vec<Vec2> = ordered
                .iter()
                .enumerate()
                .map(|(ri, d)| Vec2::new(x.map(d.x), y.map(stacked[ci][ri].1)))
                .collect();
            let bottom: Vec<Vec2> = ordered
                .iter()
                .enumerate()
                .map(|(ri, d)| Vec2::new(x.map(d.x), y.map(stacked[ci][ri].0)))
                .collect();
            let band_total: f64 = stacked[ci].iter().map(|(s, e)| e - s).sum();

            plot.children.push(SceneNode::Path(PathNode {
                d: monotone_band_path(&top, &bottom),
                fill: Some(colors.color(category)),
                role: Some(Role::Img),
                aria_label: Some(category.clone()),
                ..Default::default()
            }));

            if cfg.show_tooltip {
                // The exact band outline is a curve; the hover region is its
                // bounding box, topmost band winning on overlap.
                let min_y = top.iter().fold(f32::INFINITY, |acc, p| acc.min(p.y));
                let max_y = bottom.iter().fold(f32::NEG_INFINITY, |acc, p| acc.max(p.y));
                let offset = Vec2::new(m.left, m.top);
                hit_regions.push(HitRegion {
                    shape: HitShape::Rect {
                        min: Vec2::new(0.0, min_y) + offset,
                        max: Vec2::new(inner_width, max_y) + offset,
                    },
                    anchor: Vec2::new(inner_width / 2.0, min_y) + offset,
                    content: TooltipContent::new(vec![
                        TooltipLine::new(category.clone(), ""),
                        TooltipLine::new("Total", format_value(band_total)),
                    ]),
                });
            }
        }

        plot.children.push(AxisRenderer::linear_axis(
            &x,
            AxisEdge::Bottom,
            (0.0, inner_height),
            10,
            10.0,
            &self.theme,
        ));
        plot.children.push(AxisRenderer::linear_axis(
            &y,
            AxisEdge::Left,
            (0.0, 0.0),
            10,
            10.0,
            &self.theme,
        ));
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
        debug!(
            chart = "stacked_area",
            rows = ordered.len(),
            categories = categories.len(),
            "rendered"
        );
        ChartOutput { scene, hit_regions }
    }
}
