use crate::data::{Dataset, Record};
use serde_json::Value;

/// Coerce any scalar to a number. Lossy: currency symbols, thousands
/// separators and units are stripped from strings, then the longest
/// valid float prefix of what remains is parsed ("2023-01" -> 2023,
/// "1.2.3" -> 1.2), and anything still unparsable degrades to 0 rather
/// than erroring. This must hold for numeric fields that arrive as
/// formatted text ("$1,234.50" -> 1234.5).
pub fn to_number(value: &Value) -> f64 {
    match value {
        Value::Null => 0.0,
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => {
            let cleaned: String = s
                .chars()
                .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
                .collect();
            parse_float_prefix(&cleaned)
        }
        _ => 0.0,
    }
}

/// Parse the longest leading run that still forms a float: an optional
/// sign, digits, at most one decimal point. A trailing "-01" or second
/// ".3" is ignored, not an error.
fn parse_float_prefix(s: &str) -> f64 {
    let mut end = 0;
    let mut seen_dot = false;
    for (i, c) in s.char_indices() {
        let accept = match c {
            '-' => i == 0,
            '.' => !seen_dot,
            _ => c.is_ascii_digit(),
        };
        if !accept {
            break;
        }
        if c == '.' {
            seen_dot = true;
        }
        end = i + 1;
    }
    s[..end].parse::<f64>().unwrap_or(0.0)
}

/// `to_number` for a possibly missing record field.
pub fn field_number(record: &Record, field: &str) -> f64 {
    record.get(field).map(to_number).unwrap_or(0.0)
}

/// True when the string parses fully as a float (no symbol stripping
/// here; this backs column-type detection, not value coercion).
pub fn is_numeric_string(s: &str) -> bool {
    s.trim().parse::<f64>().is_ok()
}

/// Default category field: the first field of the first record, or ""
/// for an empty dataset.
pub fn default_x_axis(dataset: &Dataset) -> String {
    dataset.fields().into_iter().next().unwrap_or_default()
}

/// Fields of the first record holding a number or a fully numeric
/// string, in declaration order.
pub fn numeric_columns(dataset: &Dataset) -> Vec<String> {
    let first = match dataset.records.first() {
        Some(record) => record,
        None => return Vec::new(),
    };

    first
        .iter()
        .filter(|(_, value)| match value {
            Value::Number(_) => true,
            Value::String(s) => is_numeric_string(s),
            _ => false,
        })
        .map(|(name, _)| name.clone())
        .collect()
}

/// Default value field: the first numeric column, else the second
/// field, else the first. Non-empty whenever the dataset is non-empty.
pub fn default_y_axis(dataset: &Dataset) -> String {
    let fields = dataset.fields();
    if fields.is_empty() {
        return String::new();
    }
    let numeric = numeric_columns(dataset);
    if let Some(first) = numeric.into_iter().next() {
        first
    } else if fields.len() > 1 {
        fields[1].clone()
    } else {
        fields[0].clone()
    }
}

/// Compact display for axis and value labels: 1_500_000 -> "1.5M",
/// 2_500 -> "2.5K", otherwise a thousands-grouped plain number.
pub fn format_number(value: f64) -> String {
    if value >= 1_000_000.0 {
        format!("{:.1}M", value / 1_000_000.0)
    } else if value >= 1_000.0 {
        format!("{:.1}K", value / 1_000.0)
    } else {
        group_thousands(value)
    }
}

fn group_thousands(value: f64) -> String {
    let negative = value < 0.0;
    // Round to 3 fraction digits, the display precision for plain numbers.
    let abs = (value.abs() * 1000.0).round() / 1000.0;
    let int_part = abs.trunc() as i64;
    let frac_part = abs - abs.trunc();

    let digits = int_part.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    let mut out = String::new();
    if negative && (int_part != 0 || frac_part != 0.0) {
        out.push('-');
    }
    out.push_str(&grouped);

    if frac_part != 0.0 {
        let frac = format!("{:.3}", frac_part);
        let frac = frac.trim_start_matches("0.").trim_end_matches('0');
        out.push('.');
        out.push_str(frac);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn dataset(value: serde_json::Value) -> Dataset {
        Dataset::from_json(&value).unwrap()
    }

    #[test]
    fn test_to_number_plain() {
        assert_eq!(to_number(&json!(42)), 42.0);
        assert_eq!(to_number(&json!("42")), 42.0);
        assert_eq!(to_number(&json!(-3.5)), -3.5);
    }

    #[test]
    fn test_to_number_strips_symbols() {
        assert_eq!(to_number(&json!("$1,234.50")), 1234.5);
        assert_eq!(to_number(&json!("12 kg")), 12.0);
        assert_eq!(to_number(&json!("-5%")), -5.0);
    }

    #[test]
    fn test_to_number_parses_longest_prefix() {
        assert_eq!(to_number(&json!("2023-01")), 2023.0);
        assert_eq!(to_number(&json!("1.2.3")), 1.2);
        assert_eq!(to_number(&json!("-5-6")), -5.0);
        assert_eq!(to_number(&json!(".5")), 0.5);
    }

    #[test]
    fn test_to_number_degrades_to_zero() {
        assert_eq!(to_number(&json!("abc")), 0.0);
        assert_eq!(to_number(&json!(null)), 0.0);
        assert_eq!(to_number(&json!(true)), 0.0);
        assert_eq!(to_number(&json!("-")), 0.0);
        assert_eq!(to_number(&json!(".")), 0.0);
    }

    #[test]
    fn test_default_axes() {
        let data = dataset(json!([
            {"id": "a", "score": 10},
            {"id": "b", "score": 20}
        ]));
        assert_eq!(default_x_axis(&data), "id");
        assert_eq!(default_y_axis(&data), "score");
    }

    #[test]
    fn test_default_y_axis_without_numeric_column() {
        let data = dataset(json!([{"name": "a", "tag": "x"}]));
        assert_eq!(default_y_axis(&data), "tag");
        let data = dataset(json!([{"name": "a"}]));
        assert_eq!(default_y_axis(&data), "name");
    }

    #[test]
    fn test_numeric_columns_order_preserved() {
        let data = dataset(json!([
            {"label": "a", "count": 3, "rate": "0.5", "note": "n/a"}
        ]));
        assert_eq!(numeric_columns(&data), vec!["count", "rate"]);
    }

    #[test]
    fn test_empty_dataset_inference() {
        let data = Dataset::default();
        assert_eq!(default_x_axis(&data), "");
        assert_eq!(default_y_axis(&data), "");
        assert!(numeric_columns(&data).is_empty());
    }

    #[test]
    fn test_format_number_suffixes() {
        assert_eq!(format_number(1_500_000.0), "1.5M");
        assert_eq!(format_number(2_500.0), "2.5K");
        assert_eq!(format_number(42.0), "42");
        assert_eq!(format_number(1_234_567.0), "1.2M");
    }

    #[test]
    fn test_format_number_grouping() {
        assert_eq!(format_number(999.0), "999");
        assert_eq!(format_number(2.5), "2.5");
        assert_eq!(format_number(-2500.0), "-2,500");
        assert_eq!(format_number(0.0), "0");
    }
}
