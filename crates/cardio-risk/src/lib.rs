//! Rule-based cardiovascular risk assessment.
//!
//! Raw measurements arrive as field maps (JSON, CSV rows) or as OCR/PDF text,
//! pass through a single intake stage into a typed [`assessment::PatientRecord`],
//! and come out as a scored, explained and rendered report.

pub mod assessment;
pub mod config;
pub mod error;
pub mod ingest;
pub mod telemetry;
