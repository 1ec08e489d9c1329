use glam::Vec2;
use tracing::debug;

use super::{title_node, ChartRenderer};
use crate::data_types::{BarDatum, PieChartConfig, TooltipContent, TooltipLine};
use crate::interaction::{ChartOutput, HitRegion, HitShape};
use crate::legend::{legend_row, LEGEND_MARGIN};
use crate::scales::ColorScale;
use crate::scene::{GroupNode, PathNode, Role, Scene, SceneNode};
use crate::shapes::{arc_path, pie_layout};
use crate::theme::ChartTheme;
use crate::utils::format_value;

/// Pie or donut chart; `inner_radius` 0 is a full pie. Slices keep the
/// input order and their angular spans are proportional to value over the
/// total, separated by the pad angle.
pub struct PieChart {
    pub data: Vec<BarDatum>,
    pub config: PieChartConfig,
    pub theme: ChartTheme,
}

impl PieChart {
    pub fn new(data: Vec<BarDatum>) -> Self {
        Self {
            data,
            config: PieChartConfig::default(),
            theme: ChartTheme::default(),
        }
    }

    pub fn with_config(data: Vec<BarDatum>, config: PieChartConfig) -> Self {
        Self {
            data,
            config,
            theme: ChartTheme::default(),
        }
    }
}

impl ChartRenderer for PieChart {
    fn render(&self) -> ChartOutput {
        let cfg = &self.config;
        let mut scene = Scene::new(cfg.width, cfg.height, cfg.aria_label.clone());
        let mut hit_regions = Vec::new();
        if self.data.is_empty() {
            debug!(chart = "pie", "empty data, rendering bare scene");
            return ChartOutput { scene, hit_regions };
        }

        let m = cfg.margin;
        // The legend takes its space from the bottom margin.
        let bottom = if cfg.show_legend {
            m.bottom + LEGEND_MARGIN
        } else {
            m.bottom
        };
        let inner_width = (cfg.width as f32 - m.left - m.right).max(0.0);
        let inner_height = (cfg.height as f32 - m.top - bottom).max(0.0);
        let radius = (inner_width.min(inner_height) / 2.0) as f64;

        let colors = ColorScale::resolve(
            self.data.iter().map(|d| d.label.clone()).collect(),
            cfg.colors.as_deref(),
            cfg.color_scheme,
        );

        if let Some(title) = &cfg.title {
            scene.push(title_node(title, m.left, &self.theme));
        }

        let center = Vec2::new(cfg.width as f32 / 2.0, cfg.height as f32 / 2.0);
        let mut plot = GroupNode {
            translate: Some((center.x, center.y)),
            ..Default::default()
        };

        let values: Vec<f64> = self.data.iter().map(|d| d.value).collect();
        let total: f64 = values
            .iter()
            .filter(|v| v.is_finite() && **v > 0.0)
            .sum();
        let slices = pie_layout(&values, cfg.pad_angle);

        for slice in &slices {
            let datum = &self.data[slice.index];
            plot.children.push(SceneNode::Path(PathNode {
                d: arc_path(slice, cfg.inner_radius, radius),
                fill: Some(colors.color(&datum.label)),
                role: Some(Role::Img),
                aria_label: Some(format!("{}: {}", datum.label, format_value(datum.value))),
                ..Default::default()
            }));

            if cfg.show_tooltip {
                let half_pad = (slice.pad_angle / 2.0) as f32;
                let mid = ((slice.start_angle + slice.end_angle) / 2.0
                    - std::f64::consts::FRAC_PI_2) as f32;
                let mid_radius = ((cfg.inner_radius + radius) / 2.0) as f32;
                let percentage = if total > 0.0 {
                    datum.value.max(0.0) / total * 100.0
                } else {
                    0.0
                };
                hit_regions.push(HitRegion {
                    shape: HitShape::Sector {
                        center,
                        inner_radius: cfg.inner_radius as f32,
                        outer_radius: radius as f32,
                        start_angle: slice.start_angle as f32 + half_pad,
                        end_angle: slice.end_angle as f32 - half_pad,
                    },
                    anchor: center + Vec2::new(mid.cos(), mid.sin()) * mid_radius,
                    content: TooltipContent::new(vec![
                        TooltipLine::new(datum.label.clone(), ""),
                        TooltipLine::new("Value", format_value(datum.value)),
                        TooltipLine::new("Percentage", format!("{:.1}%", percentage)),
                    ]),
                });
            }
        }
        scene.push(SceneNode::Group(plot));

        if cfg.show_legend {
            scene.push(legend_row(
                &colors,
                (m.left, cfg.height as f32 - bottom + 50.0),
                &self.theme,
            ));
        }

        debug!(chart = "pie", slices = slices.len(), "rendered");
        ChartOutput { scene, hit_regions }
    }
}
