use svg_chart::data_types::{Orientation, StackedBarChartConfig};
use svg_chart::scene::Role;
use svg_chart::{
    CategoryValue, ChartRenderer, StackedAreaChart, StackedAreaDatum, StackedBarChart,
    StackedDatum,
};

fn row(label: &str, values: &[(&str, f64)]) -> StackedDatum {
    StackedDatum {
        label: label.into(),
        values: values
            .iter()
            .map(|(c, v)| CategoryValue::new(*c, *v))
            .collect(),
    }
}

fn area_row(x: f64, values: &[(&str, f64)]) -> StackedAreaDatum {
    StackedAreaDatum {
        x,
        values: values
            .iter()
            .map(|(c, v)| CategoryValue::new(*c, *v))
            .collect(),
    }
}

#[test]
fn test_segments_are_cumulative_per_label() {
    let output = StackedBarChart::new(vec![
        row("2023", &[("hw", 40.0), ("sw", 80.0)]),
        row("2024", &[("hw", 55.0), ("sw", 95.0)]),
    ])
    .render();

    let segments: Vec<_> = output
        .scene
        .rects()
        .into_iter()
        .filter(|r| r.role == Some(Role::Img))
        .collect();
    assert_eq!(segments.len(), 4);

    // Default 600x600, margins {40,20,60,70} plus 60 legend margin: inner
    // height 440, linear domain [0, 150].
    let inner_height = 440.0;
    // Layer order is category order: hw rows then sw rows.
    let (hw_2023, sw_2023) = (&segments[0], &segments[2]);
    // Bottom segment starts at the axis.
    assert!((hw_2023.y + hw_2023.height - inner_height).abs() < 1e-3);
    // Second segment starts exactly where the first ends.
    assert!((sw_2023.y + sw_2023.height - hw_2023.y).abs() < 1e-3);

    // Stack-then-sum-back equals the original total.
    let total_px: f32 = hw_2023.height + sw_2023.height;
    assert!((total_px - inner_height * (120.0 / 150.0)).abs() < 1e-3);

    // Segments report their own category, not the first one.
    assert_eq!(segments[0].aria_label.as_deref(), Some("2023 - hw: 40"));
    assert_eq!(segments[2].aria_label.as_deref(), Some("2023 - sw: 80"));
}

#[test]
fn test_missing_category_counts_as_zero() {
    let output = StackedBarChart::new(vec![
        row("a", &[("x", 10.0), ("y", 5.0)]),
        row("b", &[("y", 7.0)]),
    ])
    .render();
    let segments: Vec<_> = output
        .scene
        .rects()
        .into_iter()
        .filter(|r| r.role == Some(Role::Img))
        .collect();
    // Zero-extent segments still occupy their slot.
    assert_eq!(segments.len(), 4);
    // x segment of row "b" has no extent, and y starts at the axis there.
    assert_eq!(segments[1].height, 0.0);
    let inner_height = 440.0;
    assert!((segments[3].y + segments[3].height - inner_height).abs() < 1e-3);
}

#[test]
fn test_negative_and_non_finite_contribute_zero() {
    let output = StackedBarChart::new(vec![row(
        "a",
        &[("x", -10.0), ("y", f64::NAN), ("z", 30.0)],
    )])
    .render();
    let segments: Vec<_> = output
        .scene
        .rects()
        .into_iter()
        .filter(|r| r.role == Some(Role::Img))
        .collect();
    assert_eq!(segments.len(), 3);
    assert_eq!(segments[0].height, 0.0);
    assert_eq!(segments[1].height, 0.0);
    // The whole inner height belongs to the one valid category.
    assert!((segments[2].height - 440.0).abs() < 1e-3);
}

#[test]
fn test_horizontal_orientation_stacks_along_x() {
    let output = StackedBarChart::with_config(
        vec![row("a", &[("x", 10.0), ("y", 10.0)])],
        StackedBarChartConfig {
            orientation: Orientation::Horizontal,
            ..Default::default()
        },
    )
    .render();
    let segments: Vec<_> = output
        .scene
        .rects()
        .into_iter()
        .filter(|r| r.role == Some(Role::Img))
        .collect();
    assert_eq!(segments.len(), 2);
    assert_eq!(segments[0].x, 0.0);
    assert!((segments[1].x - segments[0].width).abs() < 1e-3);
    // Both segments share the band height.
    assert_eq!(segments[0].height, segments[1].height);
}

#[test]
fn test_rounded_corners_and_values() {
    let output = StackedBarChart::with_config(
        vec![row("a", &[("x", 10.0), ("y", 20.0)])],
        StackedBarChartConfig {
            rounded_corners: true,
            corner_radius: 6.0,
            show_values: true,
            value_format: Some(|v| format!("{v:.1} units")),
            ..Default::default()
        },
    )
    .render();
    for rect in output
        .scene
        .rects()
        .into_iter()
        .filter(|r| r.role == Some(Role::Img))
    {
        assert_eq!(rect.rx, 6.0);
    }
    let texts: Vec<String> = output
        .scene
        .texts()
        .into_iter()
        .map(|t| t.content.clone())
        .collect();
    assert!(texts.contains(&"10.0 units".to_string()));
    assert!(texts.contains(&"20.0 units".to_string()));
}

#[test]
fn test_stacked_area_band_per_category() {
    let output = StackedAreaChart::new(vec![
        area_row(0.0, &[("x", 10.0), ("y", 5.0)]),
        area_row(1.0, &[("x", 12.0), ("y", 6.0)]),
        area_row(2.0, &[("x", 8.0), ("y", 9.0)]),
    ])
    .render();
    let bands: Vec<_> = output
        .scene
        .paths()
        .into_iter()
        .filter(|p| p.role == Some(Role::Img))
        .collect();
    assert_eq!(bands.len(), 2);
    assert_eq!(bands[0].aria_label.as_deref(), Some("x"));
    // Bands are closed shapes.
    assert!(bands.iter().all(|p| p.d.ends_with('Z')));
}

#[test]
fn test_stacked_area_rows_sorted_by_x() {
    let sorted = StackedAreaChart::new(vec![
        area_row(0.0, &[("x", 1.0)]),
        area_row(1.0, &[("x", 2.0)]),
        area_row(2.0, &[("x", 3.0)]),
    ])
    .render();
    let shuffled = StackedAreaChart::new(vec![
        area_row(2.0, &[("x", 3.0)]),
        area_row(0.0, &[("x", 1.0)]),
        area_row(1.0, &[("x", 2.0)]),
    ])
    .render();
    assert_eq!(sorted.scene, shuffled.scene);
}
