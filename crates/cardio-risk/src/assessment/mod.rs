//! Record intake, risk scoring, recommendations and report rendering.

pub mod domain;
pub mod intake;
pub mod recommendations;
pub mod report;
pub mod router;
pub mod scoring;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{
    Categorical, ChestPainType, Coded, ExerciseAngina, FieldName, PatientRecord, RestingEcg, Sex,
    StSlope,
};
pub use intake::{Intake, IntakeWarning, RecordError};
pub use recommendations::{resolve_recommendations, RecommendationBundle};
pub use report::render_report;
pub use router::assessment_router;
pub use scoring::{score_risk, RiskRule, RiskTier, RuleContribution, ScoreResult};
pub use service::{Assessment, AssessmentService, AssessmentView, BatchError, TextAssessment};
