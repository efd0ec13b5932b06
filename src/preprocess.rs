use crate::config::ChartKind;
use crate::data::Dataset;
use crate::infer::is_numeric_string;
use serde_json::{Number, Value};

/// Normalize a raw dataset before any builder runs. The caller's
/// dataset is never touched: normalization operates on a deep copy and
/// returns a new Dataset, so the same input can back a table and a
/// chart without aliasing surprises.
///
/// Rules: null fields become 0; string fields that parse fully as
/// floats become numbers. For the pie kind only, any field that is
/// still neither a number nor numeric-looking is forced to 0 as well;
/// pie values must be comparable magnitudes. The other kinds keep such
/// fields untouched.
pub fn preprocess(dataset: &Dataset, kind: ChartKind) -> Dataset {
    let mut copy = dataset.clone();
    let strict = kind == ChartKind::Pie;

    for record in &mut copy.records {
        for value in record.values_mut() {
            normalize(value, strict);
        }
    }

    copy
}

fn normalize(value: &mut Value, strict: bool) {
    match value {
        Value::Null => *value = Value::from(0),
        Value::Number(_) => {}
        Value::String(s) => {
            if is_numeric_string(s) {
                // Unwrap is safe: is_numeric_string just parsed it.
                *value = number_value(s.trim().parse::<f64>().unwrap());
            } else if strict {
                *value = Value::from(0);
            }
        }
        _ => {
            if strict {
                *value = Value::from(0);
            }
        }
    }
}

/// Store integral values as integers so category labels round-trip:
/// a "2023" that happens to land on a categorical axis must print as
/// "2023", not "2023.0".
fn number_value(n: f64) -> Value {
    if n.fract() == 0.0 && n.abs() < 9.0e15 {
        Value::Number(Number::from(n as i64))
    } else {
        Number::from_f64(n)
            .map(Value::Number)
            .unwrap_or_else(|| Value::from(0))
    }
}
