use glam::Vec2;
use tracing::debug;

use super::{finite_max, unique_labels, ChartRenderer};
use crate::axis_renderer::{AxisEdge, AxisRenderer};
use crate::data_types::{BarChartConfig, BarDatum, TooltipContent, TooltipLine};
use crate::interaction::{ChartOutput, HitRegion, HitShape};
use crate::scales::{BandScale, LinearScale};
use crate::scene::{GroupNode, RectNode, Role, Scene, SceneNode};
use crate::theme::ChartTheme;
use crate::utils::format_value;

/// Single-series vertical bar chart: band x-scale over the labels, linear
/// y-scale over `[0, max]`.
pub struct BarChart {
    pub data: Vec<BarDatum>,
    pub config: BarChartConfig,
    pub theme: ChartTheme,
}

impl BarChart {
    pub fn new(data: Vec<BarDatum>) -> Self {
        Self {
            data,
            config: BarChartConfig::default(),
            theme: ChartTheme::default(),
        }
    }

    pub fn with_config(data: Vec<BarDatum>, config: BarChartConfig) -> Self {
        Self {
            data,
            config,
            theme: ChartTheme::default(),
        }
    }
}

impl ChartRenderer for BarChart {
    fn render(&self) -> ChartOutput {
        let cfg = &self.config;
        let mut scene = Scene::new(cfg.width, cfg.height, cfg.aria_label.clone());
        if self.data.is_empty() {
            debug!(chart = "bar", "empty data, rendering bare scene");
            return ChartOutput {
                scene,
                hit_regions: Vec::new(),
            };
        }

        let m = cfg.margin;
        let inner_width = (cfg.width as f32 - m.left - m.right).max(0.0);
        let inner_height = (cfg.height as f32 - m.top - m.bottom).max(0.0);

        let x = BandScale::new(
            unique_labels(self.data.iter().map(|d| d.label.as_str())),
            (0.0, inner_width),
            0.1,
        );
        let y = LinearScale::new(
            (0.0, finite_max(self.data.iter().map(|d| d.value))),
            (inner_height, 0.0),
        );

        let mut plot = GroupNode {
            translate: Some((m.left, m.top)),
            ..Default::default()
        };
        let mut hit_regions = Vec::new();

        for datum in &self.data {
            let Some(bx) = x.position(&datum.label) else {
                continue;
            };
            let top = y.map(datum.value);
            let height = (inner_height - top).max(0.0);
            plot.children.push(SceneNode::Rect(RectNode {
                x: bx,
                y: top,
                width: x.bandwidth(),
                height,
                rx: 0.0,
                fill: Some(cfg.color),
                stroke: None,
                role: Some(Role::Img),
                aria_label: Some(format!("{}: {}", datum.label, format_value(datum.value))),
            }));

            if cfg.show_tooltip {
                let min = Vec2::new(bx + m.left, top + m.top);
                hit_regions.push(HitRegion {
                    shape: HitShape::Rect {
                        min,
                        max: min + Vec2::new(x.bandwidth(), height),
                    },
                    anchor: min + Vec2::new(x.bandwidth() / 2.0, 0.0),
                    content: TooltipContent::new(vec![
                        TooltipLine::new("Category", datum.label.clone()),
                        TooltipLine::new("Value", format_value(datum.value)),
                    ]),
                });
            }
        }

        plot.children.push(AxisRenderer::band_axis(
            &x,
            AxisEdge::Bottom,
            (0.0, inner_height),
            3.0,
            &self.theme,
        ));
        plot.children.push(AxisRenderer::linear_axis(
            &y,
            AxisEdge::Left,
            (0.0, 0.0),
            10,
            3.0,
            &self.theme,
        ));

        scene.push(SceneNode::Group(plot));
        debug!(chart = "bar", bars = self.data.len(), "rendered");
        ChartOutput { scene, hit_regions }
    }
}
