//! Input channels that produce raw field maps for intake.

pub mod batch;
pub mod text;

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

use crate::assessment::FieldName;

pub use batch::{read_rows, read_rows_up_to};
pub use text::{extract_fields, ExtractedFields};

/// Untyped field values keyed by field name. A field that is not present here is absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RawFields {
    values: BTreeMap<FieldName, String>,
}

impl RawFields {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: FieldName, value: impl Into<String>) {
        self.values.insert(field, value.into());
    }

    /// Builder-style insert, handy for fixtures.
    pub fn with(mut self, field: FieldName, value: impl Into<String>) -> Self {
        self.insert(field, value);
        self
    }

    pub fn remove(&mut self, field: FieldName) -> Option<String> {
        self.values.remove(&field)
    }

    pub fn get(&self, field: FieldName) -> Option<&str> {
        self.values.get(&field).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Converts a JSON object. Unknown keys are ignored and `null` counts as absent.
    ///
    /// Numbers keep their JSON text and booleans become `1`/`0`, so the same
    /// coercion rules apply as for CSV and OCR input.
    pub fn from_json(object: &serde_json::Map<String, Value>) -> Self {
        let mut fields = Self::new();
        for (key, value) in object {
            let Some(field) = FieldName::from_key(key) else {
                continue;
            };
            let text = match value {
                Value::Null => continue,
                Value::String(text) => text.clone(),
                Value::Bool(flag) => String::from(if *flag { "1" } else { "0" }),
                Value::Number(number) => number.to_string(),
                other => other.to_string(),
            };
            fields.values.entry(field).or_insert(text);
        }
        fields
    }
}

impl FromIterator<(FieldName, String)> for RawFields {
    fn from_iter<I: IntoIterator<Item = (FieldName, String)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}
