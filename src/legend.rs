use crate::scales::ColorScale;
use crate::scene::{GroupNode, RectNode, Role, SceneNode, TextNode};
use crate::theme::ChartTheme;

pub const LEGEND_ITEM_WIDTH: f32 = 120.0;
pub const LEGEND_SPACING: f32 = 10.0;
pub const SWATCH_SIZE: f32 = 15.0;

/// Extra bottom margin reserved when a legend is shown.
pub const LEGEND_MARGIN: f32 = 60.0;

/// One row of swatch + label per category at a fixed item width. Wrapping is
/// the caller's problem (it positions the row); items simply run right.
pub fn legend_row(colors: &ColorScale, origin: (f32, f32), theme: &ChartTheme) -> SceneNode {
    let mut children = Vec::with_capacity(colors.domain().len() * 2);
    for (i, category) in colors.domain().iter().enumerate() {
        let x = origin.0 + i as f32 * (LEGEND_ITEM_WIDTH + LEGEND_SPACING);
        children.push(SceneNode::Rect(RectNode {
            x,
            y: origin.1,
            width: SWATCH_SIZE,
            height: SWATCH_SIZE,
            rx: 0.0,
            fill: Some(colors.color(category)),
            stroke: None,
            role: Some(Role::Presentation),
            aria_label: None,
        }));
        let mut text = TextNode::new(
            x + SWATCH_SIZE + 5.0,
            origin.1 + 12.0,
            category.clone(),
            theme.legend_label_size,
        );
        text.fill = theme.axis_label;
        children.push(SceneNode::Text(text));
    }
    SceneNode::Group(GroupNode {
        translate: None,
        fill: None,
        role: Some(Role::Presentation),
        children,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::ColorScheme;

    #[test]
    fn test_legend_layout() {
        let colors = ColorScale::resolve(
            vec!["a".into(), "b".into(), "c".into()],
            None,
            ColorScheme::Pastel2,
        );
        let node = legend_row(&colors, (40.0, 500.0), &ChartTheme::default());
        let SceneNode::Group(g) = node else {
            panic!("expected group")
        };
        assert_eq!(g.children.len(), 6);
        let swatch_xs: Vec<f32> = g
            .children
            .iter()
            .filter_map(|n| match n {
                SceneNode::Rect(r) => Some(r.x),
                _ => None,
            })
            .collect();
        assert_eq!(swatch_xs, vec![40.0, 170.0, 300.0]);
    }
}
