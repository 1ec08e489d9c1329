use crate::data_types::TooltipState;
use crate::scene::{GroupNode, RectNode, Role, SceneNode, TextNode};
use crate::theme::ChartTheme;

const PADDING_X: f32 = 12.0;
const PADDING_Y: f32 = 8.0;
const LINE_HEIGHT: f32 = 18.0;
const CORNER_RADIUS: f32 = 4.0;
// Rough advance width per character at 14px; the box only needs to be
// plausible, text layout happens in the rendering host.
const CHAR_WIDTH: f32 = 7.5;
const MAX_WIDTH: f32 = 200.0;

/// Stateless tooltip surface: nothing when hidden, otherwise a fixed-style
/// box at the given position. Never initiates state changes.
pub fn render_tooltip(state: &TooltipState, theme: &ChartTheme) -> Option<SceneNode> {
    let TooltipState::Shown { content, position } = state else {
        return None;
    };

    let texts: Vec<String> = content
        .lines
        .iter()
        .map(|line| {
            if line.value.is_empty() {
                line.label.clone()
            } else {
                format!("{}: {}", line.label, line.value)
            }
        })
        .collect();
    let widest = texts.iter().map(|t| t.chars().count()).max().unwrap_or(0);
    let width = (widest as f32 * CHAR_WIDTH + 2.0 * PADDING_X).min(MAX_WIDTH);
    let height = texts.len() as f32 * LINE_HEIGHT + 2.0 * PADDING_Y;

    let mut children = Vec::with_capacity(texts.len() + 1);
    children.push(SceneNode::Rect(RectNode {
        x: 0.0,
        y: 0.0,
        width,
        height,
        rx: CORNER_RADIUS,
        fill: Some(theme.tooltip_background),
        stroke: Some((theme.tooltip_border, 1.0)),
        role: Some(Role::Presentation),
        aria_label: None,
    }));
    for (i, (text, line)) in texts.iter().zip(&content.lines).enumerate() {
        let mut node = TextNode::new(
            PADDING_X,
            PADDING_Y + LINE_HEIGHT * (i as f32 + 0.75),
            text.clone(),
            theme.tooltip_text_size,
        );
        node.fill = line.color.unwrap_or(theme.tooltip_text);
        children.push(SceneNode::Text(node));
    }

    Some(SceneNode::Group(GroupNode {
        translate: Some((position.x, position.y)),
        fill: None,
        role: Some(Role::Presentation),
        children,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_types::{TooltipContent, TooltipLine};
    use glam::Vec2;

    #[test]
    fn test_hidden_renders_nothing() {
        assert_eq!(
            render_tooltip(&TooltipState::Hidden, &ChartTheme::default()),
            None
        );
    }

    #[test]
    fn test_shown_renders_box_at_position() {
        let state = TooltipState::Shown {
            content: TooltipContent::new(vec![
                TooltipLine::new("Category", "A"),
                TooltipLine::new("Value", "10"),
            ]),
            position: Vec2::new(50.0, 60.0),
        };
        let node = render_tooltip(&state, &ChartTheme::default()).unwrap();
        let SceneNode::Group(g) = node else {
            panic!("expected group")
        };
        assert_eq!(g.translate, Some((50.0, 60.0)));
        // Box + one text per line.
        assert_eq!(g.children.len(), 3);
    }
}
