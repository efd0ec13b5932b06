use anyhow::{anyhow, Result};
use serde_json::{Map, Value};
use std::io::Read;

/// One row of input tabular data: field name -> scalar value.
/// serde_json's map preserves insertion order (the `preserve_order`
/// feature), which matters because default-axis inference reads the
/// first record's fields in declaration order.
pub type Record = Map<String, Value>;

/// An ordered sequence of records submitted for one chart render.
/// Row order is meaningful: it becomes category order on categorical
/// axes unless a sort directive overrides it.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub records: Vec<Record>,
}

impl Dataset {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Field names of the first record, in declaration order.
    /// Inference deliberately inspects only the first record; a dataset
    /// with a non-uniform field set is not an error here.
    pub fn fields(&self) -> Vec<String> {
        self.records
            .first()
            .map(|r| r.keys().cloned().collect())
            .unwrap_or_default()
    }

    /// Build a Dataset from the backend's `data` field (a JSON array of
    /// flat objects).
    pub fn from_json(value: &Value) -> Result<Self> {
        let array = value
            .as_array()
            .ok_or_else(|| anyhow!("Input data must be a JSON array of objects"))?;

        let mut records = Vec::with_capacity(array.len());
        for item in array {
            let obj = item
                .as_object()
                .ok_or_else(|| anyhow!("Items in array must be objects"))?;
            records.push(obj.clone());
        }

        Ok(Self { records })
    }

    /// Build a Dataset from CSV. Every value comes in as a string; the
    /// preprocessor and `to_number` apply the same coercion rules as for
    /// JSON input, so "1,234" in a CSV cell behaves like "1,234" in JSON.
    pub fn from_csv<R: Read>(reader: R) -> Result<Self> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let headers: Vec<String> = csv_reader
            .headers()?
            .iter()
            .map(|h| h.to_string())
            .collect();

        let mut records = Vec::new();
        for row in csv_reader.records() {
            let row = row?;
            let mut record = Record::new();
            for (header, field) in headers.iter().zip(row.iter()) {
                record.insert(header.clone(), Value::String(field.to_string()));
            }
            records.push(record);
        }

        Ok(Self { records })
    }
}
