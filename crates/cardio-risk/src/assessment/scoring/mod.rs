mod rules;

use serde::Serialize;

use super::domain::PatientRecord;

/// Every rule in the scoring table, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskRule {
    AgeThreshold,
    HighRestingBp,
    HighCholesterol,
    BorderlineCholesterol,
    ElevatedFastingSugar,
    AbnormalEcg,
    TypicalAngina,
    AtypicalAngina,
    ExerciseAngina,
    LowMaxHr,
    SignificantStDepression,
    ModerateStDepression,
    DownslopingSt,
    FlatSt,
}

impl RiskRule {
    pub const fn ordered() -> [Self; 14] {
        [
            Self::AgeThreshold,
            Self::HighRestingBp,
            Self::HighCholesterol,
            Self::BorderlineCholesterol,
            Self::ElevatedFastingSugar,
            Self::AbnormalEcg,
            Self::TypicalAngina,
            Self::AtypicalAngina,
            Self::ExerciseAngina,
            Self::LowMaxHr,
            Self::SignificantStDepression,
            Self::ModerateStDepression,
            Self::DownslopingSt,
            Self::FlatSt,
        ]
    }

    pub const fn points(self) -> f64 {
        match self {
            Self::HighRestingBp
            | Self::HighCholesterol
            | Self::TypicalAngina
            | Self::SignificantStDepression
            | Self::DownslopingSt => 2.0,
            Self::AgeThreshold
            | Self::BorderlineCholesterol
            | Self::ElevatedFastingSugar
            | Self::AbnormalEcg
            | Self::AtypicalAngina
            | Self::ExerciseAngina
            | Self::LowMaxHr
            | Self::ModerateStDepression
            | Self::FlatSt => 1.0,
        }
    }

    /// The other half of an either/or pair; at most one of the two fires.
    pub const fn excludes(self) -> Option<Self> {
        match self {
            Self::HighCholesterol => Some(Self::BorderlineCholesterol),
            Self::BorderlineCholesterol => Some(Self::HighCholesterol),
            Self::TypicalAngina => Some(Self::AtypicalAngina),
            Self::AtypicalAngina => Some(Self::TypicalAngina),
            Self::SignificantStDepression => Some(Self::ModerateStDepression),
            Self::ModerateStDepression => Some(Self::SignificantStDepression),
            Self::DownslopingSt => Some(Self::FlatSt),
            Self::FlatSt => Some(Self::DownslopingSt),
            _ => None,
        }
    }
}

/// Discrete contribution of a fired rule, kept for the explanation trail.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RuleContribution {
    pub rule: RiskRule,
    pub points: f64,
    pub reason: String,
}

/// Ordered risk categories assigned from the total score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskTier {
    Minimal,
    Low,
    Moderate,
    High,
}

impl RiskTier {
    pub const fn ordered() -> [Self; 4] {
        [Self::Minimal, Self::Low, Self::Moderate, Self::High]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Minimal => "Minimal Risk",
            Self::Low => "Low Risk",
            Self::Moderate => "Moderate Risk",
            Self::High => "High Risk",
        }
    }

    /// Inclusive lower bounds checked highest first: 7, 4, 1.
    pub fn from_score(score: f64) -> Self {
        if score >= 7.0 {
            Self::High
        } else if score >= 4.0 {
            Self::Moderate
        } else if score >= 1.0 {
            Self::Low
        } else {
            Self::Minimal
        }
    }
}

/// Scoring output: total, tier and the rules that produced them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreResult {
    pub score: f64,
    pub tier: RiskTier,
    pub contributions: Vec<RuleContribution>,
}

impl ScoreResult {
    /// One reason per fired rule, in evaluation order.
    pub fn reasons(&self) -> Vec<&str> {
        self.contributions
            .iter()
            .map(|contribution| contribution.reason.as_str())
            .collect()
    }

    pub fn fired(&self, rule: RiskRule) -> bool {
        self.contributions
            .iter()
            .any(|contribution| contribution.rule == rule)
    }
}

/// Scores a validated record. Total: every record gets a tier.
pub fn score_risk(record: &PatientRecord) -> ScoreResult {
    let (contributions, score) = rules::evaluate_rules(record);

    ScoreResult {
        score,
        tier: RiskTier::from_score(score),
        contributions,
    }
}
