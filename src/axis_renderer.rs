use crate::scales::{BandScale, LinearScale};
use crate::scene::{GroupNode, LineNode, Role, SceneNode, TextAnchor, TextNode};
use crate::theme::ChartTheme;
use crate::utils::format_value;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AxisEdge {
    Bottom,
    Left,
}

const TICK_SIZE: f32 = 6.0;

/// Draws axes in the d3 `axisBottom`/`axisLeft` shape: a domain line, short
/// tick marks and a label per tick. The returned group is positioned by the
/// caller via its translate (bottom axes sit at the inner height).
pub struct AxisRenderer;

impl AxisRenderer {
    /// Band axis: one tick per label, centered on its band.
    pub fn band_axis(
        scale: &BandScale,
        edge: AxisEdge,
        translate: (f32, f32),
        tick_padding: f32,
        theme: &ChartTheme,
    ) -> SceneNode {
        let ticks: Vec<(f32, String)> = scale
            .domain()
            .iter()
            .filter_map(|label| Some((scale.center(label)?, label.clone())))
            .collect();
        Self::axis(scale.range(), &ticks, edge, translate, tick_padding, theme)
    }

    /// Linear axis with nice tick values.
    pub fn linear_axis(
        scale: &LinearScale,
        edge: AxisEdge,
        translate: (f32, f32),
        tick_count: usize,
        tick_padding: f32,
        theme: &ChartTheme,
    ) -> SceneNode {
        let ticks: Vec<(f32, String)> = scale
            .ticks(tick_count)
            .into_iter()
            .map(|v| (scale.map(v), format_value(v)))
            .collect();
        Self::axis(scale.range(), &ticks, edge, translate, tick_padding, theme)
    }

    fn axis(
        range: (f32, f32),
        ticks: &[(f32, String)],
        edge: AxisEdge,
        translate: (f32, f32),
        tick_padding: f32,
        theme: &ChartTheme,
    ) -> SceneNode {
        let mut children = Vec::with_capacity(ticks.len() * 2 + 1);
        let (r0, r1) = (range.0.min(range.1), range.0.max(range.1));
        let domain_line = match edge {
            AxisEdge::Bottom => LineNode {
                x1: r0,
                y1: 0.0,
                x2: r1,
                y2: 0.0,
                stroke: theme.axis_line,
                stroke_width: 1.0,
            },
            AxisEdge::Left => LineNode {
                x1: 0.0,
                y1: r0,
                x2: 0.0,
                y2: r1,
                stroke: theme.axis_line,
                stroke_width: 1.0,
            },
        };
        children.push(SceneNode::Line(domain_line));

        for (pos, label) in ticks {
            match edge {
                AxisEdge::Bottom => {
                    children.push(SceneNode::Line(LineNode {
                        x1: *pos,
                        y1: 0.0,
                        x2: *pos,
                        y2: TICK_SIZE,
                        stroke: theme.axis_line,
                        stroke_width: 1.0,
                    }));
                    let mut text =
                        TextNode::new(*pos, TICK_SIZE + tick_padding, label.clone(), theme.axis_label_size);
                    text.anchor = TextAnchor::Middle;
                    text.fill = theme.axis_label;
                    children.push(SceneNode::Text(text));
                }
                AxisEdge::Left => {
                    children.push(SceneNode::Line(LineNode {
                        x1: -TICK_SIZE,
                        y1: *pos,
                        x2: 0.0,
                        y2: *pos,
                        stroke: theme.axis_line,
                        stroke_width: 1.0,
                    }));
                    let mut text = TextNode::new(
                        -(TICK_SIZE + tick_padding),
                        *pos + theme.axis_label_size / 3.0,
                        label.clone(),
                        theme.axis_label_size,
                    );
                    text.anchor = TextAnchor::End;
                    text.fill = theme.axis_label;
                    children.push(SceneNode::Text(text));
                }
            }
        }

        SceneNode::Group(GroupNode {
            translate: Some(translate),
            fill: None,
            role: Some(Role::Presentation),
            children,
        })
    }

    /// Centered title under the x axis.
    pub fn x_axis_title(
        label: &str,
        inner_width: f32,
        inner_height: f32,
        bottom_margin: f32,
        theme: &ChartTheme,
    ) -> SceneNode {
        let mut text = TextNode::new(
            inner_width / 2.0,
            inner_height + bottom_margin,
            label,
            theme.axis_title_size,
        );
        text.anchor = TextAnchor::Middle;
        SceneNode::Text(text)
    }

    /// Rotated title beside the y axis. Coordinates are pre-rotation; the
    /// node carries `rotate(-90)` like the original markup.
    pub fn y_axis_title(
        label: &str,
        inner_height: f32,
        left_margin: f32,
        theme: &ChartTheme,
    ) -> SceneNode {
        let mut text = TextNode::new(
            -inner_height / 2.0,
            -left_margin + 25.0,
            label,
            theme.axis_title_size,
        );
        text.anchor = TextAnchor::Middle;
        text.rotate = Some(-90.0);
        SceneNode::Text(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_axis_one_tick_per_label() {
        let scale = BandScale::new(vec!["A".into(), "B".into()], (0.0, 100.0), 0.1);
        let theme = ChartTheme::default();
        let node = AxisRenderer::band_axis(&scale, AxisEdge::Bottom, (0.0, 50.0), 3.0, &theme);
        let SceneNode::Group(g) = node else {
            panic!("expected group")
        };
        assert_eq!(g.role, Some(Role::Presentation));
        // Domain line + (tick + label) per entry.
        assert_eq!(g.children.len(), 1 + 2 * 2);
        assert_eq!(g.translate, Some((0.0, 50.0)));
    }

    #[test]
    fn test_linear_axis_labels_are_nice() {
        let scale = LinearScale::new((0.0, 20.0), (100.0, 0.0));
        let theme = ChartTheme::default();
        let node = AxisRenderer::linear_axis(&scale, AxisEdge::Left, (0.0, 0.0), 5, 10.0, &theme);
        let SceneNode::Group(g) = node else {
            panic!("expected group")
        };
        let labels: Vec<&str> = g
            .children
            .iter()
            .filter_map(|n| match n {
                SceneNode::Text(t) => Some(t.content.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(labels, vec!["0", "5", "10", "15", "20"]);
    }
}
