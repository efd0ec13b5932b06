use crate::config::ChartConfig;
use crate::data::Dataset;
use crate::infer::to_number;
use crate::spec::{
    Axis, ChartSpec, Emphasis, GaugeAxisLine, GaugeDatum, GaugeDetail, GaugeLineStyle, ItemStyle,
    Orient, Series, SeriesLabel, Title, Tooltip, VisualMap,
};

const WEEKDAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];
const DAY_PARTS: [&str; 3] = ["Morning", "Afternoon", "Evening"];

/// Heatmap scaffold: fixed week-by-daypart axes and a color scale, with
/// the cell values left for the caller to fill in.
pub fn heatmap(config: &ChartConfig) -> ChartSpec {
    let title = config.title.clone().unwrap_or_else(|| "热力图".to_string());

    ChartSpec {
        title: Some(Title::centered(title)),
        tooltip: Some(Tooltip::item()),
        x_axis: Some(Axis::Category {
            data: WEEKDAYS.iter().map(|d| d.to_string()).collect(),
            boundary_gap: None,
            axis_label: None,
        }),
        y_axis: Some(Axis::Category {
            data: DAY_PARTS.iter().map(|p| p.to_string()).collect(),
            boundary_gap: None,
            axis_label: None,
        }),
        visual_map: Some(VisualMap {
            min: 0.0,
            max: 10.0,
            calculable: true,
            orient: Orient::Horizontal,
            left: "center".to_string(),
            bottom: "15%".to_string(),
        }),
        series: vec![Series::Heatmap {
            name: "热度".to_string(),
            data: Vec::new(),
            label: SeriesLabel {
                show: true,
                ..SeriesLabel::default()
            },
            emphasis: Some(Emphasis {
                item_style: Some(ItemStyle {
                    shadow_blur: Some(10),
                    shadow_color: Some("rgba(0, 0, 0, 0.5)".to_string()),
                    ..ItemStyle::default()
                }),
                ..Emphasis::default()
            }),
        }],
        ..ChartSpec::default()
    }
}

/// Gauge showing a single value: the first field of the first record,
/// coerced to a number, or zero for an empty dataset.
pub fn gauge(dataset: &Dataset, config: &ChartConfig) -> ChartSpec {
    let value = dataset
        .records
        .first()
        .and_then(|record| record.values().next())
        .map(to_number)
        .unwrap_or(0.0);
    let title = config.title.clone().unwrap_or_else(|| "仪表盘".to_string());

    let mut tooltip = Tooltip::item();
    tooltip.formatter = Some("{a} <br/>{b} : {c}".to_string());

    ChartSpec {
        title: Some(Title::centered(title)),
        tooltip: Some(tooltip),
        series: vec![Series::Gauge {
            name: "指标".to_string(),
            detail: GaugeDetail {
                formatter: "{value}".to_string(),
            },
            data: vec![GaugeDatum {
                value,
                name: "数值".to_string(),
            }],
            axis_line: GaugeAxisLine {
                line_style: GaugeLineStyle {
                    width: 10,
                    color: vec![
                        (0.3, "#67e0e3".to_string()),
                        (0.7, "#37a2da".to_string()),
                        (1.0, "#fd666d".to_string()),
                    ],
                },
            },
        }],
        ..ChartSpec::default()
    }
}
