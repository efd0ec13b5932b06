use super::scalar_label;
use crate::config::ChartConfig;
use crate::data::Dataset;
use crate::infer::{default_x_axis, default_y_axis, field_number};
use crate::spec::{
    AreaStyle, Axis, AxisLabel, ChartSpec, Color, Emphasis, Grid, ItemStyle, LinearGradient,
    LineStyle, PointerKind, Series, Title, Tooltip,
};

const AREA_GRADIENT: [(f64, &str); 2] = [
    (0.0, "rgba(58, 77, 233, 0.8)"),
    (1.0, "rgba(58, 77, 233, 0.1)"),
];

/// Line chart; `area` additionally fills under the curve with a
/// vertical gradient, which is the only difference between the two
/// kinds.
pub fn build(dataset: &Dataset, config: &ChartConfig, area: bool) -> ChartSpec {
    let x_field = config
        .x_axis
        .clone()
        .unwrap_or_else(|| default_x_axis(dataset));
    let y_field = config
        .y_axis
        .clone()
        .unwrap_or_else(|| default_y_axis(dataset));
    let title = config
        .title
        .clone()
        .unwrap_or_else(|| format!("{} 趋势图", y_field));

    let x_data: Vec<String> = dataset
        .records
        .iter()
        .map(|record| scalar_label(record.get(&x_field)))
        .collect();
    let y_data: Vec<f64> = dataset
        .records
        .iter()
        .map(|record| field_number(record, &y_field))
        .collect();
    let count = x_data.len();

    let color = config
        .color
        .clone()
        .unwrap_or_else(|| "#ff4d4f".to_string());

    ChartSpec {
        title: Some(Title::centered(title)),
        tooltip: Some(Tooltip::axis(PointerKind::Line)),
        grid: Some(Grid::standard("10%", "15%")),
        x_axis: Some(Axis::Category {
            data: x_data,
            // First and last points sit on the axis edges.
            boundary_gap: Some(false),
            axis_label: Some(AxisLabel {
                rotate: Some(if count > 8 { 45 } else { 0 }),
                interval: Some(0),
                font_size: Some(12),
                compact: false,
            }),
        }),
        y_axis: Some(Axis::Value {
            name: Some(y_field.clone()),
            scale: None,
            axis_label: Some(AxisLabel {
                compact: true,
                ..AxisLabel::default()
            }),
        }),
        series: vec![Series::Line {
            name: y_field,
            data: y_data,
            smooth: config.smooth != Some(false),
            line_style: LineStyle {
                width: Some(3),
                color: Some(color.clone()),
            },
            item_style: ItemStyle::solid(&color),
            area_style: area.then(|| AreaStyle {
                color: Color::Gradient(LinearGradient::vertical(&AREA_GRADIENT)),
            }),
            symbol: "circle".to_string(),
            symbol_size: 8,
            emphasis: Some(Emphasis {
                focus: Some("series".to_string()),
                ..Emphasis::default()
            }),
        }],
        ..ChartSpec::default()
    }
}
