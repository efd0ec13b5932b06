use crate::config::{ChartConfig, ChartKind, SortOrder};
use crate::data::Dataset;
use crate::error::ChartError;
use crate::palette::Palette;
use crate::spec::ChartSpec;
use serde_json::Value;
use std::cmp::Ordering;

pub mod bar;
pub mod basic;
pub mod line;
pub mod multi_bar;
pub mod pie;
pub mod radar;
pub mod scatter;

/// Placeholder category label for missing values.
pub const UNKNOWN_LABEL: &str = "未知";

/// Dispatch to the per-kind builder. The match is exhaustive over the
/// closed ChartKind enum, so adding a kind forces this (and only this)
/// site to grow a new arm.
///
/// `raw` is the caller's dataset before normalization; the pie builder
/// resolves slice names against it because the strict pie preprocessing
/// zeroes non-numeric fields, name columns included.
pub fn build(
    dataset: &Dataset,
    raw: &Dataset,
    kind: ChartKind,
    config: &ChartConfig,
    palette: &Palette,
) -> Result<ChartSpec, ChartError> {
    match kind {
        ChartKind::Bar => Ok(bar::build(dataset, config)),
        ChartKind::MultiBar => Ok(multi_bar::build(dataset, config, palette, false)),
        ChartKind::StackedBar => Ok(multi_bar::build(dataset, config, palette, true)),
        ChartKind::Line => Ok(line::build(dataset, config, false)),
        ChartKind::Area => Ok(line::build(dataset, config, true)),
        ChartKind::Pie => pie::build(dataset, raw, config),
        ChartKind::Scatter => Ok(scatter::build(dataset, config, palette)),
        ChartKind::Radar => Ok(radar::build(dataset, config, palette)),
        ChartKind::Heatmap => Ok(basic::heatmap(config)),
        ChartKind::Gauge => Ok(basic::gauge(dataset, config)),
    }
}

/// Display form of a scalar for a categorical axis: missing or null
/// values become the unknown placeholder, integral numbers print
/// without a trailing ".0".
pub(crate) fn scalar_label(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => UNKNOWN_LABEL.to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => display_number(n),
        Some(Value::Bool(b)) => b.to_string(),
        Some(other) => other.to_string(),
    }
}

pub(crate) fn display_number(n: &serde_json::Number) -> String {
    if let Some(i) = n.as_i64() {
        i.to_string()
    } else if let Some(u) = n.as_u64() {
        u.to_string()
    } else {
        let f = n.as_f64().unwrap_or(0.0);
        if f.fract() == 0.0 && f.abs() < 9.0e15 {
            (f as i64).to_string()
        } else {
            f.to_string()
        }
    }
}

/// Sort by value (asc, or desc for anything else) and truncate to the
/// first `limit` entries strictly afterwards. The sort is stable: ties
/// retain their original relative order. A limit of 0 or one at least
/// as large as the data is a no-op.
pub(crate) fn sort_and_limit<T>(
    items: &mut Vec<T>,
    config: &ChartConfig,
    value: impl Fn(&T) -> f64,
) {
    if config.sorted {
        match config.sort_order {
            SortOrder::Asc => items.sort_by(|a, b| {
                value(a).partial_cmp(&value(b)).unwrap_or(Ordering::Equal)
            }),
            SortOrder::Desc => items.sort_by(|a, b| {
                value(b).partial_cmp(&value(a)).unwrap_or(Ordering::Equal)
            }),
        }
    }

    if let Some(limit) = config.limit {
        if limit > 0 && items.len() > limit {
            items.truncate(limit);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn pairs() -> Vec<(String, f64)> {
        vec![
            ("A".to_string(), 3.0),
            ("B".to_string(), 1.0),
            ("C".to_string(), 2.0),
        ]
    }

    #[test]
    fn test_sort_asc_then_limit() {
        let mut items = pairs();
        let config = ChartConfig {
            sorted: true,
            sort_order: SortOrder::Asc,
            limit: Some(2),
            ..ChartConfig::default()
        };
        sort_and_limit(&mut items, &config, |p| p.1);
        assert_eq!(
            items,
            vec![("B".to_string(), 1.0), ("C".to_string(), 2.0)]
        );
    }

    #[test]
    fn test_sort_defaults_to_desc() {
        let mut items = pairs();
        let config = ChartConfig {
            sorted: true,
            ..ChartConfig::default()
        };
        sort_and_limit(&mut items, &config, |p| p.1);
        assert_eq!(items[0].0, "A");
        assert_eq!(items[2].0, "B");
    }

    #[test]
    fn test_limit_without_sort_keeps_order() {
        let mut items = pairs();
        let config = ChartConfig {
            limit: Some(2),
            ..ChartConfig::default()
        };
        sort_and_limit(&mut items, &config, |p| p.1);
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].0, "A");
    }

    #[test]
    fn test_oversized_limit_is_noop() {
        let mut items = pairs();
        let config = ChartConfig {
            sorted: true,
            limit: Some(10),
            ..ChartConfig::default()
        };
        sort_and_limit(&mut items, &config, |p| p.1);
        assert_eq!(items.len(), 3);
    }

    #[test]
    fn test_sort_is_stable_on_ties() {
        let mut items = vec![
            ("first".to_string(), 1.0),
            ("second".to_string(), 1.0),
            ("third".to_string(), 0.5),
        ];
        let config = ChartConfig {
            sorted: true,
            sort_order: SortOrder::Asc,
            ..ChartConfig::default()
        };
        sort_and_limit(&mut items, &config, |p| p.1);
        assert_eq!(items[1].0, "first");
        assert_eq!(items[2].0, "second");
    }

    #[test]
    fn test_scalar_label() {
        assert_eq!(scalar_label(None), UNKNOWN_LABEL);
        assert_eq!(scalar_label(Some(&json!(null))), UNKNOWN_LABEL);
        assert_eq!(scalar_label(Some(&json!("east"))), "east");
        assert_eq!(scalar_label(Some(&json!(2023))), "2023");
        assert_eq!(scalar_label(Some(&json!(2.5))), "2.5");
    }
}
