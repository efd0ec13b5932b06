use super::{display_number, sort_and_limit, UNKNOWN_LABEL};
use crate::config::ChartConfig;
use crate::data::Dataset;
use crate::error::ChartError;
use crate::infer::{default_x_axis, default_y_axis, field_number};
use crate::spec::{
    BorderRadius, ChartSpec, Emphasis, ItemStyle, LabelLine, LabelPosition, Legend, Offset,
    Orient, PieDatum, Series, SeriesLabel, Title, Tooltip,
};
use serde_json::Value;

/// Pie chart. Slice values come from the strictly preprocessed dataset;
/// slice names and default field inference use the caller's raw records,
/// because the pie preprocessing zeroes every non-numeric field and
/// would otherwise erase the name column before we read it.
pub fn build(
    dataset: &Dataset,
    raw: &Dataset,
    config: &ChartConfig,
) -> Result<ChartSpec, ChartError> {
    let mut config = config.clone();
    let scrollable = adjust_for_row_count(&mut config, dataset.len());

    let name_field = config
        .name_col
        .clone()
        .unwrap_or_else(|| default_x_axis(raw));
    let value_field = config
        .value_col
        .clone()
        .unwrap_or_else(|| default_y_axis(raw));
    let title = config
        .title
        .clone()
        .unwrap_or_else(|| format!("{} 分布", name_field));

    let mut slices: Vec<PieDatum> = dataset
        .records
        .iter()
        .zip(raw.records.iter())
        .map(|(processed, original)| PieDatum {
            name: slice_name(original.get(&name_field)),
            value: field_number(processed, &value_field),
        })
        .filter(|slice| slice.value > 0.0)
        .collect();

    if slices.is_empty() {
        return Err(ChartError::EmptyPieData);
    }

    sort_and_limit(&mut slices, &config, |slice| slice.value);
    let count = slices.len();

    let mut legend = Legend {
        show: config.show_legend != Some(false),
        data: slices.iter().map(|slice| slice.name.clone()).collect(),
        ..Legend::default()
    };
    if count <= 5 {
        legend.orient = Some(Orient::Vertical);
        legend.left = Some("left".to_string());
        legend.top = Some(Offset::Named("middle".to_string()));
    } else if count <= 10 {
        legend.orient = Some(Orient::Horizontal);
        legend.left = Some("center".to_string());
        legend.top = Some(Offset::Named("top".to_string()));
    } else {
        legend.scrollable();
        legend.orient = Some(Orient::Horizontal);
        legend.left = Some("center".to_string());
        legend.top = Some(Offset::Named("top".to_string()));
    }
    // Row-count adjustment layers on top of the slice-count defaults.
    if scrollable {
        legend.scrollable();
    }

    let show_label = config.show_label != Some(false);
    let label = if count > 8 {
        SeriesLabel {
            show: show_label,
            position: Some(LabelPosition::Inside),
            formatter: Some("{d}%".to_string()),
            color: Some("#fff".to_string()),
            ..SeriesLabel::default()
        }
    } else {
        SeriesLabel {
            show: show_label,
            position: Some(LabelPosition::Outside),
            formatter: Some("{b}: {d}%".to_string()),
            ..SeriesLabel::default()
        }
    };

    let mut tooltip = Tooltip::item();
    tooltip.formatter = Some("{b}<br/>数值: {c}<br/>占比: {d}%".to_string());

    Ok(ChartSpec {
        title: Some(Title::centered(title.clone())),
        tooltip: Some(tooltip),
        legend: Some(legend),
        series: vec![Series::Pie {
            name: title,
            radius: "70%".to_string(),
            center: ["50%".to_string(), "55%".to_string()],
            data: slices,
            item_style: ItemStyle {
                border_radius: Some(BorderRadius::Uniform(8)),
                border_color: Some("#fff".to_string()),
                border_width: Some(2),
                ..ItemStyle::default()
            },
            label,
            label_line: LabelLine { show: count <= 8 },
            emphasis: Some(Emphasis {
                label: Some(SeriesLabel {
                    show: true,
                    font_size: Some(14),
                    font_weight: Some("bold".to_string()),
                    ..SeriesLabel::default()
                }),
                scale: Some(true),
                scale_size: Some(8),
                ..Emphasis::default()
            }),
        }],
        ..ChartSpec::default()
    })
}

/// Dataset-size override applied before anything else: very large
/// datasets drop legend and labels entirely, moderately large ones get
/// a scrollable legend. Returns whether to force scrolling.
fn adjust_for_row_count(config: &mut ChartConfig, rows: usize) -> bool {
    if rows > 15 {
        config.show_legend = Some(false);
        config.show_label = Some(false);
        false
    } else {
        rows > 10
    }
}

fn slice_name(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => UNKNOWN_LABEL.to_string(),
        Some(Value::String(s)) if s.is_empty() => UNKNOWN_LABEL.to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) if n.as_f64() == Some(0.0) => UNKNOWN_LABEL.to_string(),
        Some(Value::Number(n)) => display_number(n),
        Some(Value::Bool(false)) => UNKNOWN_LABEL.to_string(),
        Some(Value::Bool(true)) => "true".to_string(),
        Some(other) => other.to_string(),
    }
}
