use std::fmt::Write;

use super::recommendations::RecommendationBundle;
use super::scoring::RiskTier;

/// Renders the patient-facing text report. Formatting only.
pub fn render_report<S: AsRef<str>>(
    tier: RiskTier,
    score: f64,
    reasons: &[S],
    bundle: &RecommendationBundle,
) -> String {
    let mut report = String::new();

    // Writing into a String cannot fail.
    let _ = writeln!(
        report,
        "Risk Level: {} (Score: {})",
        tier.label(),
        format_score(score)
    );

    push_section(
        &mut report,
        "Reasons for Risk Score:",
        reasons.iter().map(|reason| reason.as_ref()),
    );
    push_section(
        &mut report,
        "Recommended Medication Classes:",
        bundle.medicine_classes.iter().copied(),
    );
    push_section(
        &mut report,
        "Preventive Measures:",
        bundle.preventions.iter().copied(),
    );

    let _ = write!(report, "\nTreatment Plan:\n{}\n", bundle.treatment_plan);
    report
}

fn push_section<'a>(report: &mut String, heading: &str, items: impl Iterator<Item = &'a str>) {
    let _ = write!(report, "\n{heading}\n");
    for item in items {
        let _ = writeln!(report, " - {item}");
    }
}

/// `15` for integral scores, `4.5` otherwise.
pub(crate) fn format_score(score: f64) -> String {
    if score.fract() == 0.0 {
        format!("{score:.0}")
    } else {
        format!("{score}")
    }
}
