use super::common::*;
use crate::assessment::domain::{ChestPainType, Coded, ExerciseAngina, Sex, StSlope};
use crate::assessment::recommendations::resolve_recommendations;
use crate::assessment::scoring::{score_risk, RiskRule, RiskTier, ScoreResult};

fn assert_consistent(result: &ScoreResult) {
    let total: f64 = result
        .contributions
        .iter()
        .map(|contribution| contribution.points)
        .sum();
    assert_eq!(result.score, total);
    assert!(result.score >= 0.0);
    assert_eq!(result.reasons().len(), result.contributions.len());
    assert_eq!(result.tier, RiskTier::from_score(result.score));

    for contribution in &result.contributions {
        if let Some(other) = contribution.rule.excludes() {
            assert!(
                !result.fired(other),
                "{:?} and {:?} fired together",
                contribution.rule,
                other
            );
        }
    }
}

#[test]
fn reference_record_scores_fifteen_and_high() {
    let result = score_risk(&reference_record());

    assert_eq!(result.score, 15.0);
    assert_eq!(result.tier, RiskTier::High);
    assert_eq!(result.contributions.len(), 10);
    assert_consistent(&result);

    let fired: Vec<RiskRule> = result
        .contributions
        .iter()
        .map(|contribution| contribution.rule)
        .collect();
    assert_eq!(
        fired,
        vec![
            RiskRule::AgeThreshold,
            RiskRule::HighRestingBp,
            RiskRule::HighCholesterol,
            RiskRule::ElevatedFastingSugar,
            RiskRule::AbnormalEcg,
            RiskRule::TypicalAngina,
            RiskRule::ExerciseAngina,
            RiskRule::LowMaxHr,
            RiskRule::SignificantStDepression,
            RiskRule::DownslopingSt,
        ]
    );

    let reasons = result.reasons();
    assert!(reasons.contains(&"Abnormal ECG (ST)"));
    assert!(reasons.contains(&"Low MaxHR (100 < expected 128)"));
}

#[test]
fn baseline_record_is_minimal() {
    let result = score_risk(&baseline_record());

    assert_eq!(result.score, 0.0);
    assert_eq!(result.tier, RiskTier::Minimal);
    assert!(result.reasons().is_empty());
}

#[test]
fn scoring_is_deterministic() {
    let record = reference_record();
    assert_eq!(score_risk(&record), score_risk(&record));
}

#[test]
fn cholesterol_crossings_strictly_increase_score() {
    let scores: Vec<f64> = [180, 210, 250]
        .into_iter()
        .map(|cholesterol| {
            let mut record = baseline_record();
            record.cholesterol = cholesterol;
            score_risk(&record).score
        })
        .collect();

    assert_eq!(scores, vec![0.0, 1.0, 2.0]);
}

#[test]
fn tier_boundaries_are_inclusive_lower_bounds() {
    assert_eq!(RiskTier::from_score(7.0), RiskTier::High);
    assert_eq!(RiskTier::from_score(6.999), RiskTier::Moderate);
    assert_eq!(RiskTier::from_score(4.0), RiskTier::Moderate);
    assert_eq!(RiskTier::from_score(3.999), RiskTier::Low);
    assert_eq!(RiskTier::from_score(1.0), RiskTier::Low);
    assert_eq!(RiskTier::from_score(0.999), RiskTier::Minimal);
    assert_eq!(RiskTier::from_score(0.0), RiskTier::Minimal);
}

#[test]
fn record_scoring_exactly_seven_is_high() {
    let mut record = baseline_record();
    record.resting_bp = 150;
    record.chest_pain_type = Coded::Known(ChestPainType::TypicalAngina);
    record.oldpeak = 2.5;
    record.exercise_angina = Coded::Known(ExerciseAngina::Yes);

    let result = score_risk(&record);

    assert_eq!(result.score, 7.0);
    assert_eq!(result.tier, RiskTier::High);
}

#[test]
fn age_threshold_depends_on_sex() {
    let cases = [
        (Sex::Male, 54, false),
        (Sex::Male, 55, true),
        (Sex::Female, 60, false),
        (Sex::Female, 65, true),
    ];
    for (sex, age, expected) in cases {
        let mut record = baseline_record();
        record.sex = Coded::Known(sex);
        record.age = age;
        let result = score_risk(&record);
        assert_eq!(
            result.fired(RiskRule::AgeThreshold),
            expected,
            "{sex:?} aged {age}"
        );
    }
}

#[test]
fn non_anginal_and_asymptomatic_pain_add_nothing() {
    for chest_pain in [ChestPainType::NonAnginalPain, ChestPainType::Asymptomatic] {
        let mut record = baseline_record();
        record.chest_pain_type = Coded::Known(chest_pain);
        assert_eq!(score_risk(&record).score, 0.0);
    }

    let mut record = baseline_record();
    record.chest_pain_type = Coded::Known(ChestPainType::AtypicalAngina);
    let result = score_risk(&record);
    assert_eq!(result.score, 1.0);
    assert!(result.fired(RiskRule::AtypicalAngina));
}

#[test]
fn unrecognized_categories_contribute_zero() {
    let mut record = reference_record();
    record.sex = Coded::Unrecognized("X".to_string());
    record.chest_pain_type = Coded::Unrecognized("XYZ".to_string());
    record.resting_ecg = Coded::Unrecognized("Abnormal".to_string());
    record.exercise_angina = Coded::Unrecognized("Maybe".to_string());
    record.st_slope = Coded::Unrecognized("Sideways".to_string());

    let result = score_risk(&record);

    // BP, cholesterol, fasting sugar, MaxHR and oldpeak remain.
    assert_eq!(result.score, 8.0);
    assert!(!result.fired(RiskRule::AgeThreshold));
    assert!(!result.fired(RiskRule::TypicalAngina));
    assert!(!result.fired(RiskRule::AbnormalEcg));
    assert_consistent(&result);
}

#[test]
fn max_hr_reason_rounds_expected_value() {
    let mut record = baseline_record();
    record.age = 57;
    record.max_hr = 120;
    assert!(score_risk(&record)
        .reasons()
        .contains(&"Low MaxHR (120 < expected 130)"));

    record.age = 59;
    assert!(score_risk(&record)
        .reasons()
        .contains(&"Low MaxHR (120 < expected 129)"));

    record.max_hr = 129;
    assert!(!score_risk(&record).fired(RiskRule::LowMaxHr));
}

#[test]
fn oldpeak_bands() {
    let cases = [
        (0.99, None),
        (1.0, Some(RiskRule::ModerateStDepression)),
        (1.99, Some(RiskRule::ModerateStDepression)),
        (2.0, Some(RiskRule::SignificantStDepression)),
        (-1.5, None),
    ];
    for (oldpeak, expected) in cases {
        let mut record = baseline_record();
        record.oldpeak = oldpeak;
        let result = score_risk(&record);
        let fired = result.contributions.first().map(|contribution| contribution.rule);
        assert_eq!(fired, expected, "oldpeak {oldpeak}");
    }
}

#[test]
fn paired_rules_never_fire_together() {
    for cholesterol in [150, 200, 239, 240, 400] {
        for chest_pain in [
            ChestPainType::TypicalAngina,
            ChestPainType::AtypicalAngina,
            ChestPainType::NonAnginalPain,
        ] {
            for oldpeak in [0.0, 1.5, 3.0] {
                for slope in [StSlope::Up, StSlope::Flat, StSlope::Down] {
                    let mut record = reference_record();
                    record.cholesterol = cholesterol;
                    record.chest_pain_type = Coded::Known(chest_pain);
                    record.oldpeak = oldpeak;
                    record.st_slope = Coded::Known(slope);
                    assert_consistent(&score_risk(&record));
                }
            }
        }
    }
}

#[test]
fn bundle_depends_only_on_tier() {
    let mut other_high = reference_record();
    other_high.cholesterol = 205;
    other_high.age = 30;

    let first = score_risk(&reference_record());
    let second = score_risk(&other_high);

    assert_eq!(first.tier, second.tier);
    assert_ne!(first.score, second.score);
    assert_eq!(
        resolve_recommendations(first.tier),
        resolve_recommendations(second.tier)
    );
}

#[test]
fn rule_table_pairs_are_symmetric() {
    let rules = RiskRule::ordered();
    let max_score: f64 = rules
        .iter()
        .filter(|rule| {
            rule.excludes()
                .map_or(true, |other| rule.points() >= other.points())
        })
        .map(|rule| rule.points())
        .sum();

    for rule in rules {
        if let Some(other) = rule.excludes() {
            assert_eq!(other.excludes(), Some(rule), "{rule:?}");
            assert!(rules.contains(&other));
        }
    }
    assert_eq!(max_score, 15.0);
}
