use std::io::Read;

use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, info};

use super::domain::PatientRecord;
use super::intake::{IntakeWarning, RecordError};
use super::recommendations::{resolve_recommendations, RecommendationBundle};
use super::report::render_report;
use super::scoring::{score_risk, RiskTier, ScoreResult};
use crate::config::AssessmentConfig;
use crate::ingest::{extract_fields, read_rows_up_to, ExtractedFields, RawFields};

/// Everything produced for one record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Assessment {
    pub result: ScoreResult,
    pub recommendations: RecommendationBundle,
    pub report: String,
    pub warnings: Vec<IntakeWarning>,
}

impl Assessment {
    pub fn view(&self) -> AssessmentView {
        AssessmentView {
            tier: self.result.tier,
            tier_label: self.result.tier.label(),
            score: self.result.score,
            reasons: self
                .result
                .reasons()
                .into_iter()
                .map(str::to_string)
                .collect(),
            recommendations: self.recommendations,
            report: self.report.clone(),
            warnings: self.warnings.clone(),
        }
    }
}

/// Public payload returned to API callers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssessmentView {
    pub tier: RiskTier,
    pub tier_label: &'static str,
    pub score: f64,
    pub reasons: Vec<String>,
    pub recommendations: RecommendationBundle,
    pub report: String,
    pub warnings: Vec<IntakeWarning>,
}

/// Assessment of OCR/PDF text, keeping the extracted fields for audit.
#[derive(Debug, Clone, PartialEq)]
pub struct TextAssessment {
    pub extracted: ExtractedFields,
    pub assessment: Assessment,
}

#[derive(Debug, thiserror::Error)]
pub enum BatchError {
    #[error("invalid CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("batch exceeds the limit of {limit} rows")]
    TooManyRows { limit: usize },
    #[error("row {row}: {source}")]
    Row {
        row: usize,
        #[source]
        source: RecordError,
    },
}

/// Composes intake, scoring, recommendations and rendering.
#[derive(Debug, Clone, Default)]
pub struct AssessmentService {
    config: AssessmentConfig,
}

impl AssessmentService {
    pub fn new(config: AssessmentConfig) -> Self {
        Self { config }
    }

    /// Validates a raw field map and assesses it.
    pub fn assess(&self, raw: &RawFields) -> Result<Assessment, RecordError> {
        let intake = PatientRecord::from_raw(raw)?;
        let mut assessment = self.assess_record(&intake.record);
        assessment.warnings = intake.warnings;
        Ok(assessment)
    }

    /// Scores an already-typed record. Never fails.
    pub fn assess_record(&self, record: &PatientRecord) -> Assessment {
        let result = score_risk(record);
        let recommendations = resolve_recommendations(result.tier);
        let reasons = result.reasons();
        let report = render_report(
            result.tier,
            result.score,
            reasons.as_slice(),
            &recommendations,
        );
        debug!(tier = ?result.tier, score = result.score, "record assessed");

        Assessment {
            result,
            recommendations,
            report,
            warnings: Vec::new(),
        }
    }

    /// Extracts fields from free text, then assesses them.
    ///
    /// Absent fields fail intake as [`RecordError::MissingField`].
    pub fn assess_text(&self, text: &str) -> Result<TextAssessment, RecordError> {
        let extracted = extract_fields(text);
        let assessment = self.assess(&extracted.to_raw_fields())?;
        Ok(TextAssessment {
            extracted,
            assessment,
        })
    }

    /// Reads a CSV export and assesses every row.
    ///
    /// Reading stops one row past the configured limit, so an oversized export
    /// is rejected without parsing the remainder.
    pub fn assess_batch_csv<R: Read>(&self, reader: R) -> Result<Vec<Assessment>, BatchError> {
        let cap = self.config.max_batch_rows.saturating_add(1);
        let rows = read_rows_up_to(reader, cap)?;
        self.assess_batch(&rows)
    }

    /// Assesses rows in parallel. Output order matches input order.
    ///
    /// The lowest-numbered invalid row (1-based) fails the whole batch.
    pub fn assess_batch(&self, rows: &[RawFields]) -> Result<Vec<Assessment>, BatchError> {
        if rows.len() > self.config.max_batch_rows {
            return Err(BatchError::TooManyRows {
                limit: self.config.max_batch_rows,
            });
        }

        let outcomes: Vec<Result<Assessment, RecordError>> =
            rows.par_iter().map(|raw| self.assess(raw)).collect();

        let assessments = outcomes
            .into_iter()
            .enumerate()
            .map(|(index, outcome)| {
                outcome.map_err(|source| BatchError::Row {
                    row: index + 1,
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        info!(rows = assessments.len(), "batch assessed");
        Ok(assessments)
    }
}
