use serde::Serialize;

use super::scoring::RiskTier;

/// Guidance attached to a tier. Depends on nothing but the tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RecommendationBundle {
    pub medicine_classes: &'static [&'static str],
    pub preventions: &'static [&'static str],
    pub treatment_plan: &'static str,
}

const HIGH: RecommendationBundle = RecommendationBundle {
    medicine_classes: &[
        "Statin (lipid-lowering)",
        "ACE inhibitors or ARBs (antihypertensive)",
        "Beta-blockers (if symptomatic)",
    ],
    preventions: &[
        "Adopt a heart-healthy diet (e.g., DASH/Mediterranean)",
        "Minimum 150 min moderate exercise/week",
        "Strict BP, sugar, and cholesterol control",
        "No smoking",
        "Sleep hygiene: 7\u{2013}9 hours/night",
    ],
    treatment_plan: "Refer to cardiologist, initiate medication, consider ECHO or stress testing, follow-up every 1\u{2013}2 months",
};

const MODERATE: RecommendationBundle = RecommendationBundle {
    medicine_classes: &[
        "Consider statin if borderline cholesterol",
        "ACE-I if BP elevated",
    ],
    preventions: &[
        "Lifestyle improvements (diet, activity)",
        "Monitor vitals quarterly",
        "Avoid smoking",
    ],
    treatment_plan:
        "Primary care review every 3\u{2013}6 months; consider diagnostics if new symptoms",
};

const LOW: RecommendationBundle = RecommendationBundle {
    medicine_classes: &[],
    preventions: &[
        "Maintain regular physical activity",
        "Balanced diet",
        "Annual screenings",
    ],
    treatment_plan: "Routine checkup annually",
};

const MINIMAL: RecommendationBundle = RecommendationBundle {
    medicine_classes: &[],
    preventions: &["General healthy living habits"],
    treatment_plan: "No specific intervention needed",
};

pub fn resolve_recommendations(tier: RiskTier) -> RecommendationBundle {
    match tier {
        RiskTier::High => HIGH,
        RiskTier::Moderate => MODERATE,
        RiskTier::Low => LOW,
        RiskTier::Minimal => MINIMAL,
    }
}
