use svg_chart::data_types::{
    BarChartConfig, LineChartConfig, PieChartConfig, StackedAreaChartConfig, StackedBarChartConfig,
};
use svg_chart::{
    BarChart, BarDatum, ChartRenderer, LineChart, PieChart, PlotPoint, Series, StackedAreaChart,
    StackedBarChart,
};

fn assert_container(svg: &str, width: u32, height: u32, label: &str) {
    assert!(svg.starts_with("<svg "), "root must be an svg element");
    assert!(svg.contains(&format!("width=\"{width}\"")));
    assert!(svg.contains(&format!("height=\"{height}\"")));
    assert!(svg.contains("role=\"img\""));
    assert!(svg.contains(&format!("aria-label=\"{label}\"")));
}

#[test]
fn test_default_container_attributes() {
    let bar = BarChart::new(vec![BarDatum::new("A", 1.0)]).render();
    assert_container(&bar.scene.to_svg(), 600, 400, "Bar Chart");

    let line = LineChart::new(vec![Series::new("s", vec![PlotPoint::new(0.0, 1.0)])]).render();
    assert_container(&line.scene.to_svg(), 600, 600, "Line Chart");

    let pie = PieChart::new(vec![BarDatum::new("A", 1.0)]).render();
    assert_container(&pie.scene.to_svg(), 600, 400, "Pie Chart");

    let stacked = StackedBarChart::new(vec![]).render();
    assert_container(&stacked.scene.to_svg(), 600, 600, "Stacked Bar Chart");

    let area = StackedAreaChart::new(vec![]).render();
    assert_container(&area.scene.to_svg(), 600, 600, "Stacked Area Chart");
}

#[test]
fn test_configured_size_applied_verbatim() {
    let output = BarChart::with_config(
        vec![BarDatum::new("A", 1.0)],
        BarChartConfig {
            width: 123,
            height: 77,
            ..Default::default()
        },
    )
    .render();
    assert_eq!(output.scene.width, 123);
    assert_eq!(output.scene.height, 77);
    assert_container(&output.scene.to_svg(), 123, 77, "Bar Chart");
}

#[test]
fn test_zero_size_still_renders() {
    // Degenerate sizes are not validated; the container contract holds.
    let output = BarChart::with_config(
        vec![BarDatum::new("A", 1.0)],
        BarChartConfig {
            width: 0,
            height: 0,
            ..Default::default()
        },
    )
    .render();
    assert_container(&output.scene.to_svg(), 0, 0, "Bar Chart");
}

#[test]
fn test_custom_aria_label() {
    let output = LineChart::with_config(
        vec![Series::new("s", vec![PlotPoint::new(0.0, 1.0)])],
        LineChartConfig {
            aria_label: "Monthly revenue".into(),
            ..Default::default()
        },
    )
    .render();
    assert_container(&output.scene.to_svg(), 600, 600, "Monthly revenue");
}

#[test]
fn test_empty_data_renders_empty_scene() {
    let bar = BarChart::new(vec![]).render();
    assert_eq!(bar.scene.shape_count(), 0);
    assert!(bar.hit_regions.is_empty());
    assert_container(&bar.scene.to_svg(), 600, 400, "Bar Chart");

    let line = LineChart::new(vec![]).render();
    assert_eq!(line.scene.shape_count(), 0);

    // Series present but no drawable points is the same Empty state.
    let hollow = LineChart::new(vec![Series::new("s", vec![])]).render();
    assert_eq!(hollow.scene.shape_count(), 0);

    let pie = PieChart::with_config(vec![], PieChartConfig::default()).render();
    assert_eq!(pie.scene.shape_count(), 0);

    let stacked = StackedBarChart::with_config(vec![], StackedBarChartConfig::default()).render();
    assert_eq!(stacked.scene.shape_count(), 0);

    let area = StackedAreaChart::with_config(vec![], StackedAreaChartConfig::default()).render();
    assert_eq!(area.scene.shape_count(), 0);
}

#[test]
fn test_render_is_idempotent() {
    // Rendered -> Rendered: the output is a pure function of data + config.
    let chart = PieChart::new(vec![BarDatum::new("A", 2.0), BarDatum::new("B", 3.0)]);
    let first = chart.render();
    let second = chart.render();
    assert_eq!(first.scene, second.scene);
    assert_eq!(first.hit_regions, second.hit_regions);
}
