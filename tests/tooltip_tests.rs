use glam::Vec2;
use svg_chart::data_types::{BarChartConfig, TooltipState};
use svg_chart::interaction::HitShape;
use svg_chart::tooltip::render_tooltip;
use svg_chart::{BarChart, BarDatum, ChartRenderer, HoverController};

fn bar_output() -> svg_chart::ChartOutput {
    BarChart::new(vec![BarDatum::new("A", 10.0), BarDatum::new("B", 20.0)]).render()
}

fn center_of(region: &svg_chart::interaction::HitRegion) -> Vec2 {
    match region.shape {
        HitShape::Rect { min, max } => (min + max) / 2.0,
        HitShape::Circle { center, .. } => center,
        HitShape::Sector { center, .. } => center,
    }
}

#[test]
fn test_hover_shows_category_and_value() {
    let output = bar_output();
    assert_eq!(output.hit_regions.len(), 2);

    let mut hover = HoverController::new(true);
    hover.pointer_enter(&output, center_of(&output.hit_regions[0]));
    let TooltipState::Shown { content, .. } = hover.state() else {
        panic!("tooltip should be visible");
    };
    assert_eq!(content.lines[0].label, "Category");
    assert_eq!(content.lines[0].value, "A");
    assert_eq!(content.lines[1].label, "Value");
    assert_eq!(content.lines[1].value, "10");
}

#[test]
fn test_move_within_shape_keeps_content() {
    let output = bar_output();
    let mut hover = HoverController::new(true);
    let center = center_of(&output.hit_regions[1]);

    hover.pointer_enter(&output, center);
    let before = hover.state().content().unwrap().clone();
    let pos_before = hover.state().position().unwrap();

    hover.pointer_move(&output, center + Vec2::new(3.0, 4.0));
    assert_eq!(hover.state().content().unwrap(), &before);
    assert_eq!(
        hover.state().position().unwrap(),
        pos_before + Vec2::new(3.0, 4.0)
    );
}

#[test]
fn test_moving_between_shapes_swaps_content() {
    let output = bar_output();
    let mut hover = HoverController::new(true);

    hover.pointer_enter(&output, center_of(&output.hit_regions[0]));
    assert_eq!(hover.state().content().unwrap().lines[0].value, "A");

    hover.pointer_move(&output, center_of(&output.hit_regions[1]));
    assert_eq!(hover.state().content().unwrap().lines[0].value, "B");
}

#[test]
fn test_leave_hides() {
    let output = bar_output();
    let mut hover = HoverController::new(true);
    hover.pointer_enter(&output, center_of(&output.hit_regions[0]));
    assert!(hover.state().is_visible());
    hover.pointer_leave();
    assert_eq!(hover.state(), &TooltipState::Hidden);
}

#[test]
fn test_show_tooltip_false_attaches_nothing() {
    let output = BarChart::with_config(
        vec![BarDatum::new("A", 10.0)],
        BarChartConfig {
            show_tooltip: false,
            ..Default::default()
        },
    )
    .render();
    // No regions are produced at all, so no pointer event can show state.
    assert!(output.hit_regions.is_empty());

    let mut hover = HoverController::new(false);
    hover.pointer_enter(&output, Vec2::new(300.0, 200.0));
    assert!(!hover.state().is_visible());
}

#[test]
fn test_reset_clears_state_on_data_change() {
    let output = bar_output();
    let mut hover = HoverController::new(true);
    hover.pointer_enter(&output, center_of(&output.hit_regions[0]));
    assert!(hover.state().is_visible());

    // Dataset changed: the chart re-renders, the hover state resets.
    hover.reset();
    assert_eq!(hover.state(), &TooltipState::Hidden);
}

#[test]
fn test_overlay_tracks_state() {
    let output = bar_output();
    let theme = svg_chart::theme::ChartTheme::default();
    let mut hover = HoverController::new(true);

    assert!(render_tooltip(hover.state(), &theme).is_none());

    hover.pointer_enter(&output, center_of(&output.hit_regions[0]));
    let node = render_tooltip(hover.state(), &theme).expect("overlay renders when shown");
    let svg_chart::scene::SceneNode::Group(g) = node else {
        panic!("expected group")
    };
    let pos = hover.state().position().unwrap();
    assert_eq!(g.translate, Some((pos.x, pos.y)));
}
