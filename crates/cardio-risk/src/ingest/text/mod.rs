//! Field extraction from OCR or PDF text.

mod normalizer;
mod patterns;

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::warn;

use super::RawFields;
use crate::assessment::FieldName;

/// Outcome of extraction: every field is either a matched value or absent.
///
/// Absent is distinct from an empty value and serializes as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ExtractedFields {
    values: BTreeMap<FieldName, Option<String>>,
}

impl ExtractedFields {
    pub fn get(&self, field: FieldName) -> Option<&str> {
        self.values.get(&field).and_then(|value| value.as_deref())
    }

    pub fn is_absent(&self, field: FieldName) -> bool {
        self.get(field).is_none()
    }

    /// Absent fields in canonical order.
    pub fn missing(&self) -> Vec<FieldName> {
        FieldName::ordered()
            .into_iter()
            .filter(|field| self.is_absent(*field))
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.missing().is_empty()
    }

    /// Matched values only; absent fields stay absent for intake to reject.
    pub fn to_raw_fields(&self) -> RawFields {
        self.values
            .iter()
            .filter_map(|(field, value)| value.clone().map(|value| (*field, value)))
            .collect()
    }
}

/// Recovers the eleven clinical fields from free text. Never fails.
///
/// Only the first match per field counts. Each miss is logged.
pub fn extract_fields(raw_text: &str) -> ExtractedFields {
    let text = normalizer::normalize_text(raw_text);

    let values = FieldName::ordered()
        .into_iter()
        .map(|field| {
            let value = patterns::first_match(field, &text).map(str::to_string);
            if value.is_none() {
                warn!(%field, "field not found in extracted text");
            }
            (field, value)
        })
        .collect();

    ExtractedFields { values }
}
