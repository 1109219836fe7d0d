use std::fmt;

use serde::{Serialize, Serializer};

/// The eleven clinical measurements every record carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum FieldName {
    Age,
    Sex,
    ChestPainType,
    #[serde(rename = "RestingBP")]
    RestingBp,
    Cholesterol,
    #[serde(rename = "FastingBS")]
    FastingBs,
    #[serde(rename = "RestingECG")]
    RestingEcg,
    #[serde(rename = "MaxHR")]
    MaxHr,
    ExerciseAngina,
    Oldpeak,
    #[serde(rename = "ST_Slope")]
    StSlope,
}

impl FieldName {
    pub const fn ordered() -> [Self; 11] {
        [
            Self::Age,
            Self::Sex,
            Self::ChestPainType,
            Self::RestingBp,
            Self::Cholesterol,
            Self::FastingBs,
            Self::RestingEcg,
            Self::MaxHr,
            Self::ExerciseAngina,
            Self::Oldpeak,
            Self::StSlope,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Age => "Age",
            Self::Sex => "Sex",
            Self::ChestPainType => "ChestPainType",
            Self::RestingBp => "RestingBP",
            Self::Cholesterol => "Cholesterol",
            Self::FastingBs => "FastingBS",
            Self::RestingEcg => "RestingECG",
            Self::MaxHr => "MaxHR",
            Self::ExerciseAngina => "ExerciseAngina",
            Self::Oldpeak => "Oldpeak",
            Self::StSlope => "ST_Slope",
        }
    }

    /// Resolves an inbound column or JSON key, ignoring case, `_`, `-` and spaces.
    ///
    /// `age`, `Age`, `chestPainType`, `Chest Pain Type`, `ST_Slope` and `stSlope`
    /// all resolve to their field.
    pub fn from_key(key: &str) -> Option<Self> {
        let folded: String = key
            .trim_start_matches('\u{feff}')
            .chars()
            .filter(|ch| !matches!(ch, '_' | '-' | ' ' | '\t'))
            .map(|ch| ch.to_ascii_lowercase())
            .collect();

        Self::ordered()
            .into_iter()
            .find(|field| field.label().replace('_', "").eq_ignore_ascii_case(&folded))
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

/// Closed vocabulary for a categorical field.
pub trait Categorical: Copy + PartialEq + 'static {
    const ALL: &'static [Self];

    fn code(self) -> &'static str;

    /// Case-insensitive lookup returning the canonical value.
    fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|value| value.code().eq_ignore_ascii_case(trimmed))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sex {
    Male,
    Female,
}

impl Categorical for Sex {
    const ALL: &'static [Self] = &[Self::Male, Self::Female];

    fn code(self) -> &'static str {
        match self {
            Self::Male => "M",
            Self::Female => "F",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChestPainType {
    TypicalAngina,
    AtypicalAngina,
    NonAnginalPain,
    Asymptomatic,
}

impl Categorical for ChestPainType {
    const ALL: &'static [Self] = &[
        Self::TypicalAngina,
        Self::AtypicalAngina,
        Self::NonAnginalPain,
        Self::Asymptomatic,
    ];

    fn code(self) -> &'static str {
        match self {
            Self::TypicalAngina => "TA",
            Self::AtypicalAngina => "ATA",
            Self::NonAnginalPain => "NAP",
            Self::Asymptomatic => "ASY",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RestingEcg {
    Normal,
    StTAbnormality,
    LeftVentricularHypertrophy,
}

impl Categorical for RestingEcg {
    const ALL: &'static [Self] = &[
        Self::Normal,
        Self::StTAbnormality,
        Self::LeftVentricularHypertrophy,
    ];

    fn code(self) -> &'static str {
        match self {
            Self::Normal => "Normal",
            Self::StTAbnormality => "ST",
            Self::LeftVentricularHypertrophy => "LVH",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExerciseAngina {
    Yes,
    No,
}

impl Categorical for ExerciseAngina {
    const ALL: &'static [Self] = &[Self::Yes, Self::No];

    fn code(self) -> &'static str {
        match self {
            Self::Yes => "Y",
            Self::No => "N",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StSlope {
    Up,
    Flat,
    Down,
}

impl Categorical for StSlope {
    const ALL: &'static [Self] = &[Self::Up, Self::Flat, Self::Down];

    fn code(self) -> &'static str {
        match self {
            Self::Up => "Up",
            Self::Flat => "Flat",
            Self::Down => "Down",
        }
    }
}

/// A categorical value that is either in its vocabulary or kept verbatim.
///
/// Unrecognized values never trigger a rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Coded<T> {
    Known(T),
    Unrecognized(String),
}

impl<T: Categorical> Coded<T> {
    pub fn from_raw(raw: &str) -> Self {
        match T::parse(raw) {
            Some(value) => Self::Known(value),
            None => Self::Unrecognized(raw.trim().to_string()),
        }
    }

    pub fn known(&self) -> Option<T> {
        match self {
            Self::Known(value) => Some(*value),
            Self::Unrecognized(_) => None,
        }
    }

    pub fn is(&self, expected: T) -> bool {
        self.known() == Some(expected)
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Known(value) => value.code(),
            Self::Unrecognized(raw) => raw,
        }
    }
}

impl<T: Categorical> From<T> for Coded<T> {
    fn from(value: T) -> Self {
        Self::Known(value)
    }
}

impl<T: Categorical> fmt::Display for Coded<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<T: Categorical> Serialize for Coded<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// One evaluated subject. Built through intake, read-only during scoring.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PatientRecord {
    pub age: u32,
    pub sex: Coded<Sex>,
    pub chest_pain_type: Coded<ChestPainType>,
    pub resting_bp: u32,
    pub cholesterol: u32,
    /// Fasting blood sugar above 120 mg/dL.
    pub fasting_bs: bool,
    pub resting_ecg: Coded<RestingEcg>,
    pub max_hr: u32,
    pub exercise_angina: Coded<ExerciseAngina>,
    pub oldpeak: f64,
    pub st_slope: Coded<StSlope>,
}
