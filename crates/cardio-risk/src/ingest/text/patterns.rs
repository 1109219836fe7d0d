use std::sync::OnceLock;

use regex::Regex;
use tracing::error;

use crate::assessment::FieldName;

static FIELD_PATTERNS: OnceLock<Vec<(FieldName, Regex)>> = OnceLock::new();

// Label, optional `:` separator, then a value token shaped per field. Capture group 1 is the value.
const PATTERN_SOURCES: &[(FieldName, &str)] = &[
    (FieldName::Age, r"(?i)\bAge\s*:?\s*([0-9]+)"),
    (FieldName::Sex, r"(?i)\bSex\s*:?\s*([MF])"),
    (
        FieldName::ChestPainType,
        r"(?i)\bChest[ _]?Pain[ _]?Type\s*:?\s*(ATA|NAP|ASY|TA)",
    ),
    (FieldName::RestingBp, r"(?i)\b(?:Resting[ _]?BP|BP)\s*:?\s*([0-9]+)"),
    (FieldName::Cholesterol, r"(?i)\bCholesterol\s*:?\s*([0-9]+)"),
    (FieldName::FastingBs, r"(?i)\bFasting[ _]?BS\s*:?\s*([01])"),
    (
        FieldName::RestingEcg,
        r"(?i)\bResting[ _]?ECG\s*:?\s*(Normal|ST|LVH)",
    ),
    (FieldName::MaxHr, r"(?i)\bMax[ _]?HR\s*:?\s*([0-9]+)"),
    (
        FieldName::ExerciseAngina,
        r"(?i)\bExercise[ _]?Angina\s*:?\s*([YN])",
    ),
    (FieldName::Oldpeak, r"(?i)\bOld[ _]?peak\s*:?\s*([0-9]+(?:\.[0-9]+)?)"),
    (FieldName::StSlope, r"(?i)\bST[ _]?Slope\s*:?\s*(Up|Flat|Down)"),
];

/// First value matched for `field` in normalized text.
pub(crate) fn first_match<'t>(field: FieldName, text: &'t str) -> Option<&'t str> {
    let (_, regex) = field_patterns()
        .iter()
        .find(|(candidate, _)| *candidate == field)?;
    regex
        .captures(text)
        .and_then(|captures| captures.get(1))
        .map(|value| value.as_str().trim())
}

fn field_patterns() -> &'static [(FieldName, Regex)] {
    FIELD_PATTERNS.get_or_init(|| {
        PATTERN_SOURCES
            .iter()
            .filter_map(|(field, source)| match Regex::new(source) {
                Ok(regex) => Some((*field, regex)),
                Err(err) => {
                    error!(%field, %err, "field pattern failed to compile");
                    None
                }
            })
            .collect()
    })
}
