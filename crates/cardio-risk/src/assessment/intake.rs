use std::fmt;

use serde::Serialize;
use tracing::warn;

use super::domain::{Categorical, Coded, FieldName, PatientRecord};
use crate::ingest::RawFields;

/// Reasons a raw field map cannot become a [`PatientRecord`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RecordError {
    #[error("missing required field {field}")]
    MissingField { field: FieldName },
    #[error("field {field} has invalid value '{raw}' (expected {expected})")]
    InvalidValue {
        field: FieldName,
        raw: String,
        expected: &'static str,
    },
}

impl RecordError {
    pub fn field(&self) -> FieldName {
        match self {
            RecordError::MissingField { field } | RecordError::InvalidValue { field, .. } => *field,
        }
    }
}

/// Non-fatal findings raised while building a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum IntakeWarning {
    UnrecognizedValue { field: FieldName, raw: String },
}

impl fmt::Display for IntakeWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntakeWarning::UnrecognizedValue { field, raw } => write!(
                f,
                "unrecognized {} value '{}' contributes no score",
                field, raw
            ),
        }
    }
}

/// A validated record plus whatever warnings intake raised for it.
#[derive(Debug, Clone, PartialEq)]
pub struct Intake {
    pub record: PatientRecord,
    pub warnings: Vec<IntakeWarning>,
}

impl PatientRecord {
    /// Validates and coerces a raw field map. The same rules apply to every input channel.
    ///
    /// No defaults are substituted: an absent or blank field is a
    /// [`RecordError::MissingField`] and an unparseable number an
    /// [`RecordError::InvalidValue`]. Categorical values outside their vocabulary
    /// are kept as [`Coded::Unrecognized`] and reported as warnings.
    pub fn from_raw(raw: &RawFields) -> Result<Intake, RecordError> {
        let mut reader = FieldReader {
            raw,
            warnings: Vec::new(),
        };

        let record = PatientRecord {
            age: reader.whole(FieldName::Age)?,
            sex: reader.coded(FieldName::Sex)?,
            chest_pain_type: reader.coded(FieldName::ChestPainType)?,
            resting_bp: reader.whole(FieldName::RestingBp)?,
            cholesterol: reader.whole(FieldName::Cholesterol)?,
            fasting_bs: reader.flag(FieldName::FastingBs)?,
            resting_ecg: reader.coded(FieldName::RestingEcg)?,
            max_hr: reader.whole(FieldName::MaxHr)?,
            exercise_angina: reader.coded(FieldName::ExerciseAngina)?,
            oldpeak: reader.decimal(FieldName::Oldpeak)?,
            st_slope: reader.coded(FieldName::StSlope)?,
        };

        Ok(Intake {
            record,
            warnings: reader.warnings,
        })
    }
}

struct FieldReader<'a> {
    raw: &'a RawFields,
    warnings: Vec<IntakeWarning>,
}

impl<'a> FieldReader<'a> {
    fn required(&self, field: FieldName) -> Result<&'a str, RecordError> {
        self.raw
            .get(field)
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .ok_or(RecordError::MissingField { field })
    }

    fn whole(&self, field: FieldName) -> Result<u32, RecordError> {
        let raw = self.required(field)?;
        parse_whole(raw).ok_or_else(|| RecordError::InvalidValue {
            field,
            raw: raw.to_string(),
            expected: "a non-negative whole number",
        })
    }

    fn flag(&self, field: FieldName) -> Result<bool, RecordError> {
        let raw = self.required(field)?;
        match parse_whole(raw) {
            Some(0) => Ok(false),
            Some(1) => Ok(true),
            _ => Err(RecordError::InvalidValue {
                field,
                raw: raw.to_string(),
                expected: "0 or 1",
            }),
        }
    }

    fn decimal(&self, field: FieldName) -> Result<f64, RecordError> {
        let raw = self.required(field)?;
        raw.parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
            .ok_or_else(|| RecordError::InvalidValue {
                field,
                raw: raw.to_string(),
                expected: "a decimal number",
            })
    }

    fn coded<T: Categorical>(&mut self, field: FieldName) -> Result<Coded<T>, RecordError> {
        let raw = self.required(field)?;
        let coded = Coded::<T>::from_raw(raw);
        if let Coded::Unrecognized(value) = &coded {
            warn!(%field, raw = %value, "unrecognized categorical value");
            self.warnings.push(IntakeWarning::UnrecognizedValue {
                field,
                raw: value.clone(),
            });
        }
        Ok(coded)
    }
}

/// Accepts `45` and also `45.0`, which spreadsheet exports produce for integer columns.
fn parse_whole(raw: &str) -> Option<u32> {
    if let Ok(value) = raw.parse::<u32>() {
        return Some(value);
    }

    let value = raw.parse::<f64>().ok()?;
    let representable = value.is_finite()
        && value.fract() == 0.0
        && value >= 0.0
        && value <= f64::from(u32::MAX);
    representable.then_some(value as u32)
}
