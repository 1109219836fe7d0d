use std::sync::Arc;

use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::domain::FieldName;
use super::service::{AssessmentService, AssessmentView};
use crate::error::AppError;
use crate::ingest::{extract_fields, ExtractedFields, RawFields};

#[derive(Debug, Deserialize)]
pub(crate) struct BatchRequest {
    pub(crate) csv: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct BatchResponse {
    pub(crate) reports: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TextRequest {
    pub(crate) text: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct TextReportResponse {
    pub(crate) extracted: ExtractedFields,
    #[serde(flatten)]
    pub(crate) assessment: AssessmentView,
}

#[derive(Debug, Serialize)]
pub(crate) struct ExtractResponse {
    pub(crate) fields: ExtractedFields,
    pub(crate) missing: Vec<FieldName>,
}

/// Router builder exposing single, batch, text and extraction endpoints.
pub fn assessment_router(service: Arc<AssessmentService>) -> Router {
    Router::new()
        .route("/api/v1/reports", post(report_handler))
        .route("/api/v1/reports/batch", post(batch_handler))
        .route("/api/v1/reports/text", post(text_report_handler))
        .route("/api/v1/extract", post(extract_handler))
        .with_state(service)
}

pub(crate) async fn report_handler(
    State(service): State<Arc<AssessmentService>>,
    Json(payload): Json<serde_json::Map<String, Value>>,
) -> Result<Json<AssessmentView>, AppError> {
    let raw = RawFields::from_json(&payload);
    let assessment = service.assess(&raw)?;
    Ok(Json(assessment.view()))
}

pub(crate) async fn batch_handler(
    State(service): State<Arc<AssessmentService>>,
    Json(payload): Json<BatchRequest>,
) -> Result<Json<BatchResponse>, AppError> {
    let assessments = tokio::task::spawn_blocking(move || {
        service.assess_batch_csv(payload.csv.as_bytes())
    })
    .await??;

    let reports = assessments
        .into_iter()
        .map(|assessment| assessment.report)
        .collect();
    Ok(Json(BatchResponse { reports }))
}

pub(crate) async fn text_report_handler(
    State(service): State<Arc<AssessmentService>>,
    Json(payload): Json<TextRequest>,
) -> Result<Json<TextReportResponse>, AppError> {
    let outcome = service.assess_text(&payload.text)?;
    Ok(Json(TextReportResponse {
        assessment: outcome.assessment.view(),
        extracted: outcome.extracted,
    }))
}

pub(crate) async fn extract_handler(Json(payload): Json<TextRequest>) -> Json<ExtractResponse> {
    let fields = extract_fields(&payload.text);
    let missing = fields.missing();
    Json(ExtractResponse { fields, missing })
}
