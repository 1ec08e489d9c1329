use eyre::{Result, WrapErr};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// One labeled value, the row shape of bar and pie charts.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BarDatum {
    pub label: String,
    pub value: f64,
}

impl BarDatum {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PlotPoint {
    pub x: f64,
    pub y: f64,
}

impl PlotPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A named line-chart series. The name doubles as the color-scale key and
/// the tooltip grouping key, so it must be unique within one chart.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub name: String,
    pub data: Vec<PlotPoint>,
}

impl Series {
    pub fn new(name: impl Into<String>, data: Vec<PlotPoint>) -> Self {
        Self {
            name: name.into(),
            data,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CategoryValue {
    pub category: String,
    pub value: f64,
}

impl CategoryValue {
    pub fn new(category: impl Into<String>, value: f64) -> Self {
        Self {
            category: category.into(),
            value,
        }
    }
}

/// Stacked-bar row: one label on the band axis, one value per category.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StackedDatum {
    pub label: String,
    pub values: Vec<CategoryValue>,
}

/// Stacked-area row: one continuous x, one value per category.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StackedAreaDatum {
    pub x: f64,
    pub values: Vec<CategoryValue>,
}

/// Deserializes a JSON array into any of the chart data shapes.
pub fn data_from_json<T: DeserializeOwned>(json: &str) -> Result<Vec<T>> {
    serde_json::from_str(json).wrap_err("invalid chart data JSON")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_data_from_json() {
        let rows: Vec<BarDatum> =
            data_from_json(r#"[{"label":"A","value":10},{"label":"B","value":20}]"#).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], BarDatum::new("A", 10.0));
    }

    #[test]
    fn test_stacked_data_from_json() {
        let rows: Vec<StackedDatum> = data_from_json(
            r#"[{"label":"Q1","values":[{"category":"a","value":1.5}]}]"#,
        )
        .unwrap();
        assert_eq!(rows[0].values[0].category, "a");
    }

    #[test]
    fn test_bad_json_is_an_error() {
        assert!(data_from_json::<Vec<BarDatum>>("not json").is_err());
    }
}
