use glam::Vec2;
use tracing::debug;

use super::{finite_max, title_node, ChartRenderer};
use crate::axis_renderer::{AxisEdge, AxisRenderer};
use crate::data_types::{LineChartConfig, Series, TooltipContent, TooltipLine};
use crate::interaction::{ChartOutput, HitRegion, HitShape};
use crate::scales::{ColorScale, LinearScale};
use crate::scene::{CircleNode, GroupNode, PathNode, Role, Scene, SceneNode};
use crate::shapes::{area_path, line_path};
use crate::theme::ChartTheme;
use crate::utils::format_value;

const POINT_RADIUS: f32 = 4.0;
const LINE_WIDTH: f32 = 2.0;
const AREA_OPACITY: f32 = 0.1;

/// Multi-series line chart with optional under-line area fill and point
/// markers. Series names key both the color scale and tooltip grouping.
pub struct LineChart {
    pub data: Vec<Series>,
    pub config: LineChartConfig,
    pub theme: ChartTheme,
}

impl LineChart {
    pub fn new(data: Vec<Series>) -> Self {
        Self {
            data,
            config: LineChartConfig::default(),
            theme: ChartTheme::default(),
        }
    }

    pub fn with_config(data: Vec<Series>, config: LineChartConfig) -> Self {
        Self {
            data,
            config,
            theme: ChartTheme::default(),
        }
    }

    /// Every series' value at `x`, the multi-series tooltip body.
    fn values_at(&self, x: f64, colors: &ColorScale) -> Vec<TooltipLine> {
        self.data
            .iter()
            .filter_map(|series| {
                let point = series.data.iter().find(|p| p.x == x)?;
                Some(TooltipLine::colored(
                    series.name.clone(),
                    format_value(point.y),
                    colors.color(&series.name),
                ))
            })
            .collect()
    }
}

impl ChartRenderer for LineChart {
    fn render(&self) -> ChartOutput {
        let cfg = &self.config;
        let mut scene = Scene::new(cfg.width, cfg.height, cfg.aria_label.clone());
        let mut hit_regions = Vec::new();

        // Only finite points can be drawn; a dataset without any is treated
        // the same as an empty one.
        let finite_xs: Vec<f64> = self
            .data
            .iter()
            .flat_map(|s| s.data.iter())
            .filter(|p| p.x.is_finite() && p.y.is_finite())
            .map(|p| p.x)
            .collect();
        if self.data.is_empty() || finite_xs.is_empty() {
            debug!(chart = "line", "empty data, rendering bare scene");
            return ChartOutput { scene, hit_regions };
        }

        let m = cfg.margin;
        let inner_width = (cfg.width as f32 - m.left - m.right).max(0.0);
        let inner_height = (cfg.height as f32 - m.top - m.bottom).max(0.0);

        let x_min = finite_xs.iter().copied().fold(f64::INFINITY, f64::min);
        let x_max = finite_xs.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let x = LinearScale::new((x_min, x_max), (0.0, inner_width));
        let y = LinearScale::new(
            (
                0.0,
                finite_max(self.data.iter().flat_map(|s| s.data.iter().map(|p| p.y))),
            ),
            (inner_height, 0.0),
        );

        let colors = ColorScale::resolve(
            self.data.iter().map(|s| s.name.clone()).collect(),
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

        // Per series: points sorted by x, drawn area -> line -> markers.
        let sorted: Vec<(usize, Vec<Vec2>)> = self
            .data
            .iter()
            .enumerate()
            .map(|(i, series)| {
                let mut pts: Vec<_> = series
                    .data
                    .iter()
                    .filter(|p| p.x.is_finite() && p.y.is_finite())
                    .collect();
                pts.sort_by(|a, b| a.x.total_cmp(&b.x));
                let px: Vec<Vec2> = pts
                    .iter()
                    .map(|p| Vec2::new(x.map(p.x), y.map(p.y)))
                    .collect();
                (i, px)
            })
            .collect();

        if cfg.show_area {
            for (i, pts) in &sorted {
                plot.children.push(SceneNode::Path(PathNode {
                    d: area_path(pts, inner_height),
                    fill: Some(colors.color(&self.data[*i].name)),
                    fill_opacity: Some(AREA_OPACITY),
                    role: Some(Role::Presentation),
                    ..Default::default()
                }));
            }
        }

        for (i, pts) in &sorted {
            plot.children.push(SceneNode::Path(PathNode {
                d: line_path(pts),
                fill: None,
                stroke: Some(colors.color(&self.data[*i].name)),
                stroke_width: Some(LINE_WIDTH),
                role: Some(Role::Presentation),
                ..Default::default()
            }));
        }

        if cfg.show_points {
            for series in &self.data {
                let color = colors.color(&series.name);
                for point in &series.data {
                    if !point.x.is_finite() || !point.y.is_finite() {
                        continue;
                    }
                    let center = Vec2::new(x.map(point.x), y.map(point.y));
                    plot.children.push(SceneNode::Circle(CircleNode {
                        cx: center.x,
                        cy: center.y,
                        r: POINT_RADIUS,
                        fill: color,
                        role: Some(Role::Img),
                        aria_label: Some(format!(
                            "{} point at x: {}, y: {}",
                            series.name,
                            format_value(point.x),
                            format_value(point.y)
                        )),
                    }));

                    if cfg.show_tooltip {
                        let abs = center + Vec2::new(m.left, m.top);
                        let mut lines = vec![TooltipLine::new("X", format_value(point.x))];
                        lines.extend(self.values_at(point.x, &colors));
                        hit_regions.push(HitRegion {
                            shape: HitShape::Circle {
                                center: abs,
                                radius: POINT_RADIUS,
                            },
                            anchor: abs,
                            content: TooltipContent::new(lines),
                        });
                    }
                }
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
        debug!(chart = "line", series = self.data.len(), "rendered");
        ChartOutput { scene, hit_regions }
    }
}
