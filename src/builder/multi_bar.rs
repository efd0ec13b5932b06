use super::{scalar_label, sort_and_limit};
use crate::config::ChartConfig;
use crate::data::{Dataset, Record};
use crate::infer::{default_x_axis, field_number, numeric_columns};
use crate::palette::Palette;
use crate::spec::{
    Axis, AxisLabel, ChartSpec, Grid, ItemStyle, LabelPosition, Legend, Offset, PointerKind,
    Series, SeriesLabel, TextStyle, Title, Tooltip,
};

/// Multi-series bar chart: one category field, up to several value
/// fields side by side. `stacked` tags every series with a shared stack
/// identifier instead, which is all a stacked bar chart is.
pub fn build(
    dataset: &Dataset,
    config: &ChartConfig,
    palette: &Palette,
    stacked: bool,
) -> ChartSpec {
    let x_field = config
        .x_axis
        .clone()
        .unwrap_or_else(|| default_x_axis(dataset));
    let y_fields = config
        .y_axes
        .clone()
        .filter(|fields| !fields.is_empty())
        .unwrap_or_else(|| numeric_columns(dataset).into_iter().take(3).collect());
    let title = config
        .title
        .clone()
        .unwrap_or_else(|| "多维度对比".to_string());

    // Sort/limit reorders whole rows here; the first value field drives
    // the ordering so all series stay aligned with the category axis.
    let mut rows: Vec<&Record> = dataset.records.iter().collect();
    if let Some(first_y) = y_fields.first() {
        sort_and_limit(&mut rows, config, |row| field_number(row, first_y));
    }
    let count = rows.len();

    let x_data: Vec<String> = rows
        .iter()
        .map(|row| scalar_label(row.get(&x_field)))
        .collect();

    let series: Vec<Series> = y_fields
        .iter()
        .enumerate()
        .map(|(index, y_field)| Series::Bar {
            name: y_field.clone(),
            data: rows.iter().map(|row| field_number(row, y_field)).collect(),
            item_style: ItemStyle::solid(palette.color(index)),
            bar_width: 25.0,
            label: SeriesLabel {
                show: config.show_values.unwrap_or(false) && count <= 10,
                position: Some(LabelPosition::Top),
                font_size: Some(11),
                ..SeriesLabel::default()
            },
            stack: stacked.then(|| "total".to_string()),
            emphasis: None,
        })
        .collect();

    ChartSpec {
        title: Some(Title::centered(title)),
        tooltip: Some(Tooltip::axis(PointerKind::Shadow)),
        legend: Some(Legend {
            show: true,
            data: y_fields,
            top: Some(Offset::Px(30)),
            text_style: Some(TextStyle {
                color: Some("#666".to_string()),
                ..TextStyle::default()
            }),
            ..Legend::default()
        }),
        grid: Some(Grid::standard("12%", "20%")),
        x_axis: Some(Axis::Category {
            data: x_data,
            boundary_gap: None,
            axis_label: Some(AxisLabel {
                rotate: Some(if count > 5 { 45 } else { 0 }),
                interval: Some(0),
                font_size: Some(12),
                compact: false,
            }),
        }),
        y_axis: Some(Axis::Value {
            name: Some("数值".to_string()),
            scale: None,
            axis_label: Some(AxisLabel {
                compact: true,
                ..AxisLabel::default()
            }),
        }),
        series,
        ..ChartSpec::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn dataset() -> Dataset {
        Dataset::from_json(&json!([
            {"quarter": "Q1", "sales": 30, "cost": 12, "profit": 18, "note": "a"},
            {"quarter": "Q2", "sales": 10, "cost": 8, "profit": 2, "note": "b"},
            {"quarter": "Q3", "sales": 20, "cost": 9, "profit": 11, "note": "c"}
        ]))
        .unwrap()
    }

    #[test]
    fn test_defaults_to_first_three_numeric_columns() {
        let spec = build(&dataset(), &ChartConfig::default(), &Palette::default(), false);
        assert_eq!(spec.series.len(), 3);
        let names: Vec<&str> = spec
            .series
            .iter()
            .map(|s| match s {
                Series::Bar { name, .. } => name.as_str(),
                _ => panic!("expected bar series"),
            })
            .collect();
        assert_eq!(names, vec!["sales", "cost", "profit"]);
        assert_eq!(spec.title.as_ref().unwrap().text, "多维度对比");
    }

    #[test]
    fn test_stacked_tags_every_series() {
        let spec = build(&dataset(), &ChartConfig::default(), &Palette::default(), true);
        for series in &spec.series {
            match series {
                Series::Bar { stack, .. } => assert_eq!(stack.as_deref(), Some("total")),
                _ => panic!("expected bar series"),
            }
        }
    }

    #[test]
    fn test_sort_reorders_whole_rows() {
        let config = ChartConfig {
            sorted: true,
            sort_order: crate::config::SortOrder::Asc,
            limit: Some(2),
            ..ChartConfig::default()
        };
        let spec = build(&dataset(), &config, &Palette::default(), false);
        match spec.x_axis.as_ref().unwrap() {
            Axis::Category { data, .. } => assert_eq!(data, &vec!["Q2", "Q3"]),
            _ => panic!("expected category x axis"),
        }
        // Secondary series follow the same row order.
        match &spec.series[1] {
            Series::Bar { data, .. } => assert_eq!(data, &vec![8.0, 9.0]),
            _ => panic!("expected bar series"),
        }
    }

    #[test]
    fn test_explicit_y_axes_win() {
        let config = ChartConfig {
            y_axes: Some(vec!["profit".to_string()]),
            ..ChartConfig::default()
        };
        let spec = build(&dataset(), &config, &Palette::default(), false);
        assert_eq!(spec.series.len(), 1);
        match &spec.series[0] {
            Series::Bar { name, data, .. } => {
                assert_eq!(name, "profit");
                assert_eq!(data, &vec![18.0, 2.0, 11.0]);
            }
            _ => panic!("expected bar series"),
        }
    }
}
