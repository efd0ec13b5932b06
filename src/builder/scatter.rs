use crate::config::ChartConfig;
use crate::data::Dataset;
use crate::infer::{default_x_axis, default_y_axis, field_number};
use crate::palette::Palette;
use crate::spec::{
    Axis, AxisLabel, ChartSpec, Emphasis, Grid, ItemStyle, LabelPosition, Series, SeriesLabel,
    Title, Tooltip,
};
use serde_json::Value;

/// Scatter plot over two numeric fields. Point size grows with the
/// square root of the y value so large outliers stay on screen.
pub fn build(dataset: &Dataset, config: &ChartConfig, palette: &Palette) -> ChartSpec {
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
        .unwrap_or_else(|| format!("{} 与 {} 关系", y_field, x_field));

    let points: Vec<crate::spec::ScatterPoint> = dataset
        .records
        .iter()
        .enumerate()
        .map(|(index, record)| {
            let x = field_number(record, &x_field);
            let y = field_number(record, &y_field);
            crate::spec::ScatterPoint {
                name: config
                    .color_by
                    .as_deref()
                    .map(|field| group_name(record.get(field)))
                    .unwrap_or_default(),
                value: [x, y],
                symbol_size: y.max(0.0).sqrt() / 5.0 + 8.0,
                item_style: config
                    .color_by
                    .is_some()
                    .then(|| ItemStyle::solid(palette.color(index))),
            }
        })
        .collect();

    ChartSpec {
        title: Some(Title::centered(title)),
        tooltip: Some(Tooltip::item()),
        grid: Some(Grid {
            right: "7%".to_string(),
            ..Grid::standard("10%", "15%")
        }),
        x_axis: Some(Axis::Value {
            name: Some(x_field.clone()),
            scale: Some(true),
            axis_label: Some(AxisLabel {
                compact: true,
                ..AxisLabel::default()
            }),
        }),
        y_axis: Some(Axis::Value {
            name: Some(y_field.clone()),
            scale: Some(true),
            axis_label: Some(AxisLabel {
                compact: true,
                ..AxisLabel::default()
            }),
        }),
        series: vec![Series::Scatter {
            name: y_field,
            data: points,
            // The series color only applies when points are not colored
            // individually by a grouping field.
            item_style: config
                .color_by
                .is_none()
                .then(|| ItemStyle::solid("#3498db")),
            emphasis: Some(Emphasis {
                label: Some(SeriesLabel {
                    show: true,
                    position: Some(LabelPosition::Top),
                    ..SeriesLabel::default()
                }),
                ..Emphasis::default()
            }),
        }],
        ..ChartSpec::default()
    }
}

fn group_name(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::{Color, ScatterPoint};
    use serde_json::json;

    fn dataset() -> Dataset {
        Dataset::from_json(&json!([
            {"w": 10, "h": 100, "group": "a"},
            {"w": 20, "h": 400, "group": "b"},
            {"w": 30, "h": -9, "group": "c"}
        ]))
        .unwrap()
    }

    // Both columns are numeric, so default inference would pick "w" for
    // y as well; the pairing tests name the y column explicitly.
    fn wh_config() -> ChartConfig {
        ChartConfig {
            y_axis: Some("h".to_string()),
            ..ChartConfig::default()
        }
    }

    fn points(spec: &ChartSpec) -> &Vec<ScatterPoint> {
        match &spec.series[0] {
            Series::Scatter { data, .. } => data,
            _ => panic!("expected scatter series"),
        }
    }

    #[test]
    fn test_symbol_size_follows_sqrt_of_y() {
        let spec = build(&dataset(), &wh_config(), &Palette::default());
        let data = points(&spec);
        assert_eq!(data[0].value, [10.0, 100.0]);
        assert_eq!(data[0].symbol_size, 10.0); // sqrt(100)/5 + 8
        assert_eq!(data[1].symbol_size, 12.0); // sqrt(400)/5 + 8
    }

    #[test]
    fn test_negative_y_clamped_for_sizing() {
        let spec = build(&dataset(), &wh_config(), &Palette::default());
        let data = points(&spec);
        assert_eq!(data[2].value[1], -9.0); // position keeps the sign
        assert_eq!(data[2].symbol_size, 8.0); // size clamps at the floor
    }

    #[test]
    fn test_title_and_value_axes() {
        let spec = build(&dataset(), &wh_config(), &Palette::default());
        assert_eq!(spec.title.as_ref().unwrap().text, "h 与 w 关系");
        match spec.x_axis.as_ref().unwrap() {
            Axis::Value { name, scale, .. } => {
                assert_eq!(name.as_deref(), Some("w"));
                assert_eq!(*scale, Some(true));
            }
            _ => panic!("expected value x axis"),
        }
    }

    #[test]
    fn test_default_y_is_first_numeric_column() {
        let spec = build(&dataset(), &ChartConfig::default(), &Palette::default());
        assert_eq!(spec.title.as_ref().unwrap().text, "w 与 w 关系");
        assert_eq!(points(&spec)[0].value, [10.0, 10.0]);
    }

    #[test]
    fn test_color_by_moves_color_to_points() {
        let config = ChartConfig {
            color_by: Some("group".to_string()),
            ..ChartConfig::default()
        };
        let spec = build(&dataset(), &config, &Palette::default());
        match &spec.series[0] {
            Series::Scatter { item_style, .. } => assert!(item_style.is_none()),
            _ => panic!("expected scatter series"),
        }
        let data = points(&spec);
        assert_eq!(data[0].name, "a");
        assert!(data.iter().all(|p| p.item_style.is_some()));
        // Consecutive points cycle through distinct palette colors.
        let color = |p: &ScatterPoint| match &p.item_style.as_ref().unwrap().color {
            Some(Color::Solid(c)) => c.clone(),
            _ => panic!("expected solid color"),
        };
        assert_ne!(color(&data[0]), color(&data[1]));
    }

    #[test]
    fn test_without_color_by_series_color_applies() {
        let spec = build(&dataset(), &ChartConfig::default(), &Palette::default());
        match &spec.series[0] {
            Series::Scatter { item_style, .. } => {
                let style = item_style.as_ref().expect("series color missing");
                assert!(matches!(style.color, Some(Color::Solid(ref c)) if c == "#3498db"));
            }
            _ => panic!("expected scatter series"),
        }
        assert!(points(&spec).iter().all(|p| p.item_style.is_none()));
    }
}
