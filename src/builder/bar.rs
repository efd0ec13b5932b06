use super::{scalar_label, sort_and_limit};
use crate::config::ChartConfig;
use crate::data::Dataset;
use crate::infer::{default_x_axis, default_y_axis, field_number};
use crate::spec::{
    Axis, AxisLabel, BorderRadius, ChartSpec, Color, Emphasis, Grid, ItemStyle, LabelPosition,
    LinearGradient, PointerKind, Series, SeriesLabel, Title, Tooltip,
};

const DEFAULT_GRADIENT: [(f64, &str); 3] =
    [(0.0, "#3498db"), (0.5, "#2980b9"), (1.0, "#1f618d")];

/// Single-series bar chart: one category field, one value field.
pub fn build(dataset: &Dataset, config: &ChartConfig) -> ChartSpec {
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
        .unwrap_or_else(|| format!("{} 按 {} 统计", y_field, x_field));

    let mut pairs: Vec<(String, f64)> = dataset
        .records
        .iter()
        .map(|record| {
            (
                scalar_label(record.get(&x_field)),
                field_number(record, &y_field),
            )
        })
        .collect();
    sort_and_limit(&mut pairs, config, |pair| pair.1);

    let count = pairs.len();
    let (x_data, y_data): (Vec<String>, Vec<f64>) = pairs.into_iter().unzip();

    let color = match &config.color {
        Some(c) => Color::Solid(c.clone()),
        None => Color::Gradient(LinearGradient::vertical(&DEFAULT_GRADIENT)),
    };

    let mut tooltip = Tooltip::axis(PointerKind::Shadow);
    tooltip.formatter = Some(format!("{{b}}<br/>{}: <b>{{c}}</b>", y_field));

    ChartSpec {
        title: Some(Title::centered(title)),
        tooltip: Some(tooltip),
        grid: Some(Grid::standard("10%", "15%")),
        x_axis: Some(Axis::Category {
            data: x_data,
            boundary_gap: None,
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
        series: vec![Series::Bar {
            name: y_field,
            data: y_data,
            item_style: ItemStyle {
                color: Some(color),
                border_radius: Some(BorderRadius::PerCorner([4, 4, 0, 0])),
                ..ItemStyle::default()
            },
            // Wide bars for few categories, never wider than 50 or
            // narrower than 20.
            bar_width: (400.0 / count as f64).clamp(20.0, 50.0),
            label: SeriesLabel {
                show: config.show_values.unwrap_or(false) || count <= 15,
                position: Some(LabelPosition::Top),
                compact: true,
                ..SeriesLabel::default()
            },
            stack: None,
            emphasis: Some(Emphasis {
                item_style: Some(ItemStyle {
                    shadow_color: Some("rgba(0, 0, 0, 0.5)".to_string()),
                    shadow_blur: Some(10),
                    ..ItemStyle::default()
                }),
                ..Emphasis::default()
            }),
        }],
        ..ChartSpec::default()
    }
}
