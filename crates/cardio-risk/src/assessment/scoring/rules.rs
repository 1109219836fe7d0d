use super::super::domain::{
    ChestPainType, ExerciseAngina, PatientRecord, RestingEcg, Sex, StSlope,
};
use super::{RiskRule, RuleContribution};

const MALE_AGE_THRESHOLD: u32 = 55;
const FEMALE_AGE_THRESHOLD: u32 = 65;
const HIGH_RESTING_BP: u32 = 140;
const HIGH_CHOLESTEROL: u32 = 240;
const BORDERLINE_CHOLESTEROL: u32 = 200;
const MAX_HR_EXPECTED_FRACTION: f64 = 0.8;
const SIGNIFICANT_OLDPEAK: f64 = 2.0;
const MODERATE_OLDPEAK: f64 = 1.0;

/// Runs the rule table in its fixed order and returns the fired rules with the running total.
pub(crate) fn evaluate_rules(record: &PatientRecord) -> (Vec<RuleContribution>, f64) {
    let mut contributions = Vec::new();
    let mut total_score = 0.0;
    let mut fire = |rule: RiskRule, reason: String| {
        total_score += rule.points();
        contributions.push(RuleContribution {
            rule,
            points: rule.points(),
            reason,
        });
    };

    let older = match record.sex.known() {
        Some(Sex::Male) => record.age >= MALE_AGE_THRESHOLD,
        Some(Sex::Female) => record.age >= FEMALE_AGE_THRESHOLD,
        None => false,
    };
    if older {
        fire(
            RiskRule::AgeThreshold,
            "Older age based on sex-specific threshold (M \u{2265} 55, F \u{2265} 65)".to_string(),
        );
    }

    if record.resting_bp >= HIGH_RESTING_BP {
        fire(
            RiskRule::HighRestingBp,
            "High RestingBP (\u{2265}140 mmHg)".to_string(),
        );
    }

    if record.cholesterol >= HIGH_CHOLESTEROL {
        fire(
            RiskRule::HighCholesterol,
            "High Cholesterol (\u{2265}240 mg/dL)".to_string(),
        );
    } else if record.cholesterol >= BORDERLINE_CHOLESTEROL {
        fire(
            RiskRule::BorderlineCholesterol,
            "Borderline high Cholesterol (200\u{2013}239 mg/dL)".to_string(),
        );
    }

    if record.fasting_bs {
        fire(
            RiskRule::ElevatedFastingSugar,
            "Elevated Fasting Blood Sugar (>120 mg/dL)".to_string(),
        );
    }

    if matches!(
        record.resting_ecg.known(),
        Some(RestingEcg::StTAbnormality | RestingEcg::LeftVentricularHypertrophy)
    ) {
        fire(
            RiskRule::AbnormalEcg,
            format!("Abnormal ECG ({})", record.resting_ecg),
        );
    }

    match record.chest_pain_type.known() {
        Some(ChestPainType::TypicalAngina) => fire(
            RiskRule::TypicalAngina,
            "Typical angina chest pain (TA)".to_string(),
        ),
        Some(ChestPainType::AtypicalAngina) => fire(
            RiskRule::AtypicalAngina,
            "Atypical angina chest pain (ATA)".to_string(),
        ),
        Some(ChestPainType::NonAnginalPain | ChestPainType::Asymptomatic) | None => {}
    }

    if record.exercise_angina.is(ExerciseAngina::Yes) {
        fire(
            RiskRule::ExerciseAngina,
            "Exercise-induced angina".to_string(),
        );
    }

    let expected_max_hr = (220.0 - f64::from(record.age)) * MAX_HR_EXPECTED_FRACTION;
    if f64::from(record.max_hr) < expected_max_hr {
        fire(
            RiskRule::LowMaxHr,
            format!(
                "Low MaxHR ({} < expected {})",
                record.max_hr,
                expected_max_hr.round() as i64
            ),
        );
    }

    if record.oldpeak >= SIGNIFICANT_OLDPEAK {
        fire(
            RiskRule::SignificantStDepression,
            "Significant ST depression (Oldpeak \u{2265} 2.0)".to_string(),
        );
    } else if record.oldpeak >= MODERATE_OLDPEAK {
        fire(
            RiskRule::ModerateStDepression,
            "Moderate ST depression (Oldpeak 1.0\u{2013}1.99)".to_string(),
        );
    }

    match record.st_slope.known() {
        Some(StSlope::Down) => fire(
            RiskRule::DownslopingSt,
            "Downsloping ST segment (ST_Slope: Down)".to_string(),
        ),
        Some(StSlope::Flat) => fire(
            RiskRule::FlatSt,
            "Flat ST segment (ST_Slope: Flat)".to_string(),
        ),
        Some(StSlope::Up) | None => {}
    }

    (contributions, total_score)
}
