use crate::config::ChartConfig;
use crate::data::Dataset;
use crate::infer::{field_number, numeric_columns};
use crate::palette::Palette;
use crate::spec::{
    ChartSpec, ItemStyle, RadarAxes, RadarDatum, RadarIndicator, Series, Title, Tooltip,
};
use serde_json::Value;

const MAX_SERIES: usize = 3;
const MAX_INDICATORS: usize = 6;

/// Radar chart: the first few records become polygons over a shared set
/// of numeric indicators. Indicator maxima get 20% headroom so the
/// largest polygon never touches the rim.
pub fn build(dataset: &Dataset, config: &ChartConfig, palette: &Palette) -> ChartSpec {
    let indicators = config
        .indicators
        .clone()
        .filter(|fields| !fields.is_empty())
        .unwrap_or_else(|| {
            numeric_columns(dataset)
                .into_iter()
                .take(MAX_INDICATORS)
                .collect()
        });
    let title = config
        .title
        .clone()
        .unwrap_or_else(|| "雷达图分析".to_string());

    // Headroom over every record, not just the plotted ones.
    let indicator_axes: Vec<RadarIndicator> = indicators
        .iter()
        .map(|field| {
            let max = dataset
                .records
                .iter()
                .map(|record| field_number(record, field))
                .fold(f64::NEG_INFINITY, f64::max);
            RadarIndicator {
                name: field.clone(),
                max: if max.is_finite() { max * 1.2 } else { 0.0 },
            }
        })
        .collect();

    let data: Vec<RadarDatum> = dataset
        .records
        .iter()
        .take(MAX_SERIES)
        .enumerate()
        .map(|(index, record)| RadarDatum {
            name: series_name(record.get("name"), index),
            value: indicators
                .iter()
                .map(|field| field_number(record, field))
                .collect(),
            item_style: ItemStyle::solid(palette.color(index)),
        })
        .collect();

    ChartSpec {
        title: Some(Title::centered(title)),
        tooltip: Some(Tooltip::item()),
        radar: Some(RadarAxes {
            indicator: indicator_axes,
        }),
        series: vec![Series::Radar { data }],
        ..ChartSpec::default()
    }
}

fn series_name(value: Option<&Value>, index: usize) -> String {
    match value {
        Some(Value::String(s)) if !s.is_empty() => s.clone(),
        Some(Value::Number(n)) if n.as_f64() != Some(0.0) => super::display_number(n),
        _ => format!("系列{}", index + 1),
    }
}
