use glam::Vec2;
use rand::Rng;
use svg_chart::data_types::{LineChartConfig, StackedBarChartConfig};
use svg_chart::tooltip::render_tooltip;
use svg_chart::{
    BarChart, BarDatum, CategoryValue, ChartRenderer, HoverController, LineChart, PieChart,
    PlotPoint, Series, StackedBarChart, StackedDatum,
};

fn main() {
    let bar = BarChart::new(vec![
        BarDatum::new("Q1", 120.0),
        BarDatum::new("Q2", 200.0),
        BarDatum::new("Q3", 150.0),
        BarDatum::new("Q4", 230.0),
    ]);
    println!("{}\n", bar.render().scene.to_svg());

    let mut rng = rand::rng();
    let noisy: Vec<PlotPoint> = (0..20)
        .map(|i| {
            let x = i as f64;
            PlotPoint::new(x, (x * 0.4).sin() * 40.0 + 60.0 + rng.random_range(-5.0..5.0))
        })
        .collect();
    let smooth: Vec<PlotPoint> = (0..20)
        .map(|i| PlotPoint::new(i as f64, i as f64 * 4.0 + 10.0))
        .collect();
    let line = LineChart::with_config(
        vec![Series::new("noisy", noisy), Series::new("trend", smooth)],
        LineChartConfig {
            title: Some("Measurements".into()),
            show_area: true,
            x_axis_label: Some("time".into()),
            y_axis_label: Some("value".into()),
            ..Default::default()
        },
    );
    let output = line.render();
    println!("{}\n", output.scene.to_svg());

    // Hover over the first point marker and print the tooltip scene node.
    let mut hover = HoverController::new(true);
    if let Some(region) = output.hit_regions.first() {
        hover.pointer_enter(&output, region.anchor);
    }
    if let Some(node) = render_tooltip(hover.state(), &line.theme) {
        println!("tooltip: {:?}\n", node);
    }
    hover.pointer_move(&output, Vec2::new(-100.0, -100.0));
    assert!(!hover.state().is_visible());

    let pie = PieChart::new(vec![
        BarDatum::new("rust", 45.0),
        BarDatum::new("go", 30.0),
        BarDatum::new("zig", 25.0),
    ]);
    println!("{}\n", pie.render().scene.to_svg());

    let stacked = StackedBarChart::with_config(
        vec![
            StackedDatum {
                label: "2023".into(),
                values: vec![
                    CategoryValue::new("hardware", 40.0),
                    CategoryValue::new("software", 80.0),
                ],
            },
            StackedDatum {
                label: "2024".into(),
                values: vec![
                    CategoryValue::new("hardware", 55.0),
                    CategoryValue::new("software", 95.0),
                ],
            },
        ],
        StackedBarChartConfig {
            title: Some("Revenue".into()),
            show_values: true,
            ..Default::default()
        },
    );
    println!("{}", stacked.render().scene.to_svg());
}
