use crate::color::Color;

pub const FONT_FAMILY: &str = "skolar-sans-latin, Helvetica, sans-serif";

#[derive(Clone, Debug, PartialEq)]
pub struct ChartTheme {
    pub title_color: Color,
    pub title_size: f32,
    pub axis_line: Color,
    pub axis_label: Color,
    pub axis_label_size: f32,
    pub axis_title_size: f32,
    pub legend_label_size: f32,
    pub tooltip_background: Color,
    pub tooltip_text: Color,
    pub tooltip_border: Color,
    pub tooltip_text_size: f32,
}

impl Default for ChartTheme {
    fn default() -> Self {
        Self {
            title_color: Color::rgb(0, 0, 0),
            title_size: 16.0,
            axis_line: Color::rgb(0, 0, 0),
            axis_label: Color::rgb(0, 0, 0),
            axis_label_size: 10.0,
            axis_title_size: 12.0,
            legend_label_size: 12.0,
            tooltip_background: Color::rgb(255, 255, 255),
            tooltip_text: Color::rgb(0, 0, 0),
            tooltip_border: Color::rgb(0xdd, 0xdd, 0xdd),
            tooltip_text_size: 14.0,
        }
    }
}
