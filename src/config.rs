use crate::error::ChartError;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// The closed set of supported chart kinds. Wire names match the
/// backend's `chart_type` field; anything else is an UnsupportedKind
/// error before any data processing happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum ChartKind {
    #[serde(rename = "bar_chart")]
    Bar,
    #[serde(rename = "multi_bar_chart")]
    MultiBar,
    #[serde(rename = "stacked_bar_chart")]
    StackedBar,
    #[serde(rename = "line_chart")]
    Line,
    #[serde(rename = "area_chart")]
    Area,
    #[serde(rename = "pie_chart")]
    Pie,
    #[serde(rename = "scatter_chart")]
    Scatter,
    #[serde(rename = "radar_chart")]
    Radar,
    #[serde(rename = "heatmap")]
    Heatmap,
    #[serde(rename = "gauge")]
    Gauge,
}

impl ChartKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChartKind::Bar => "bar_chart",
            ChartKind::MultiBar => "multi_bar_chart",
            ChartKind::StackedBar => "stacked_bar_chart",
            ChartKind::Line => "line_chart",
            ChartKind::Area => "area_chart",
            ChartKind::Pie => "pie_chart",
            ChartKind::Scatter => "scatter_chart",
            ChartKind::Radar => "radar_chart",
            ChartKind::Heatmap => "heatmap",
            ChartKind::Gauge => "gauge",
        }
    }
}

impl FromStr for ChartKind {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bar_chart" => Ok(ChartKind::Bar),
            "multi_bar_chart" => Ok(ChartKind::MultiBar),
            "stacked_bar_chart" => Ok(ChartKind::StackedBar),
            "line_chart" => Ok(ChartKind::Line),
            "area_chart" => Ok(ChartKind::Area),
            "pie_chart" => Ok(ChartKind::Pie),
            "scatter_chart" => Ok(ChartKind::Scatter),
            "radar_chart" => Ok(ChartKind::Radar),
            "heatmap" => Ok(ChartKind::Heatmap),
            "gauge" => Ok(ChartKind::Gauge),
            other => Err(ChartError::UnsupportedKind(other.to_string())),
        }
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum SortOrder {
    #[serde(rename = "asc")]
    Asc,
    #[serde(rename = "desc")]
    #[default]
    Desc,
}

/// Sparse per-request overrides from the backend's `chart_config` field.
/// Every field is optional; absent fields take the documented defaults
/// inside each builder. Unknown fields are ignored so the backend can
/// grow its config without breaking older clients.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// Category field; defaults to the first field of the first record.
    pub x_axis: Option<String>,
    /// Value field; defaults to the first numeric column.
    pub y_axis: Option<String>,
    /// Value fields for multi-series kinds; defaults to the first 3
    /// numeric columns.
    pub y_axes: Option<Vec<String>>,
    /// Pie slice name field; same default as `x_axis`.
    pub name_col: Option<String>,
    /// Pie slice value field; same default as `y_axis`.
    pub value_col: Option<String>,
    /// Radar indicator fields; defaults to the first 6 numeric columns.
    pub indicators: Option<Vec<String>>,
    /// Scatter grouping field; enables palette cycling per point.
    pub color_by: Option<String>,
    /// Overrides the kind's default series color.
    pub color: Option<String>,
    pub title: Option<String>,
    /// Sort (category, value) pairs by value before limiting.
    pub sorted: bool,
    pub sort_order: SortOrder,
    /// Truncates to the first N entries, strictly after sorting.
    pub limit: Option<usize>,
    /// Forces value labels on; default is derived from dataset size.
    pub show_values: Option<bool>,
    /// Pie slice labels; default derived from slice count.
    pub show_label: Option<bool>,
    pub show_legend: Option<bool>,
    /// Line smoothing; on unless explicitly false.
    pub smooth: Option<bool>,
    /// Render surface height hint, passed through untouched.
    pub height: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_roundtrip() {
        for name in [
            "bar_chart",
            "multi_bar_chart",
            "stacked_bar_chart",
            "line_chart",
            "area_chart",
            "pie_chart",
            "scatter_chart",
            "radar_chart",
            "heatmap",
            "gauge",
        ] {
            let kind: ChartKind = name.parse().unwrap();
            assert_eq!(kind.as_str(), name);
        }
    }

    #[test]
    fn test_unknown_kind_is_hard_error() {
        let err = "treemap".parse::<ChartKind>().unwrap_err();
        assert!(matches!(err, ChartError::UnsupportedKind(ref k) if k == "treemap"));
    }

    #[test]
    fn test_config_defaults() {
        let config: ChartConfig = serde_json::from_str("{}").unwrap();
        assert!(!config.sorted);
        assert_eq!(config.sort_order, SortOrder::Desc);
        assert!(config.limit.is_none());
        assert!(config.show_legend.is_none());
    }

    #[test]
    fn test_config_ignores_unknown_fields() {
        let config: ChartConfig =
            serde_json::from_str(r#"{"sorted": true, "sort_order": "asc", "show_toolbox": false}"#)
                .unwrap();
        assert!(config.sorted);
        assert_eq!(config.sort_order, SortOrder::Asc);
    }
}
