use crate::builder;
use crate::config::{ChartConfig, ChartKind};
use crate::data::Dataset;
use crate::error::ChartError;
use crate::palette::Palette;
use crate::preprocess::preprocess;
use crate::spec::ChartSpec;

/// Build a renderer-ready option tree for the given data and kind.
///
/// Pure with respect to its inputs: the dataset is never mutated and
/// identical inputs always yield an identical tree.
pub fn generate(
    dataset: &Dataset,
    kind: ChartKind,
    config: &ChartConfig,
) -> Result<ChartSpec, ChartError> {
    generate_with(dataset, kind, config, &Palette::default())
}

/// Like [`generate`] but with a caller-supplied series palette.
pub fn generate_with(
    dataset: &Dataset,
    kind: ChartKind,
    config: &ChartConfig,
    palette: &Palette,
) -> Result<ChartSpec, ChartError> {
    log::debug!("building {} option from {} records", kind, dataset.len());
    let processed = preprocess(dataset, kind);
    let mut spec = builder::build(&processed, dataset, kind, config, palette)?;
    apply_base(&mut spec);
    Ok(spec)
}

/// Fill the shared top-level defaults without clobbering anything a
/// builder already set.
fn apply_base(spec: &mut ChartSpec) {
    spec.background_color.get_or_insert_with(|| "#fff".to_string());
    spec.animation.get_or_insert(true);
    spec.animation_duration.get_or_insert(1000);
    spec.animation_easing
        .get_or_insert_with(|| "cubicOut".to_string());
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn dataset() -> Dataset {
        Dataset::from_json(&json!([
            {"region": "east", "sales": 120},
            {"region": "west", "sales": 80}
        ]))
        .unwrap()
    }

    #[test]
    fn test_base_defaults_applied() {
        let spec = generate(&dataset(), ChartKind::Bar, &ChartConfig::default()).unwrap();
        assert_eq!(spec.background_color.as_deref(), Some("#fff"));
        assert_eq!(spec.animation, Some(true));
        assert_eq!(spec.animation_duration, Some(1000));
        assert_eq!(spec.animation_easing.as_deref(), Some("cubicOut"));
    }

    #[test]
    fn test_generate_is_deterministic() {
        let config = ChartConfig::default();
        let a = generate(&dataset(), ChartKind::Line, &config).unwrap();
        let b = generate(&dataset(), ChartKind::Line, &config).unwrap();
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }

    #[test]
    fn test_dataset_left_untouched() {
        let before = dataset();
        let snapshot = serde_json::to_string(&before.records).unwrap();
        generate(&before, ChartKind::Pie, &ChartConfig::default()).unwrap();
        assert_eq!(serde_json::to_string(&before.records).unwrap(), snapshot);
    }

    #[test]
    fn test_custom_palette_reaches_the_series() {
        let wide = Dataset::from_json(&json!([
            {"q": "Q1", "sales": 3, "cost": 1},
            {"q": "Q2", "sales": 4, "cost": 2}
        ]))
        .unwrap();
        let palette = Palette::new(vec!["#111111", "#222222"]);
        let spec =
            generate_with(&wide, ChartKind::MultiBar, &ChartConfig::default(), &palette).unwrap();
        let colors: Vec<_> = spec
            .series
            .iter()
            .map(|s| match s {
                crate::spec::Series::Bar { item_style, .. } => match &item_style.color {
                    Some(crate::spec::Color::Solid(c)) => c.clone(),
                    _ => panic!("expected solid color"),
                },
                _ => panic!("expected bar series"),
            })
            .collect();
        assert_eq!(colors, vec!["#111111", "#222222"]);
    }

    #[test]
    fn test_builder_errors_propagate() {
        let zeros = Dataset::from_json(&json!([{"n": "x", "v": 0}])).unwrap();
        let err = generate(&zeros, ChartKind::Pie, &ChartConfig::default()).unwrap_err();
        assert!(matches!(err, ChartError::EmptyPieData));
    }
}
