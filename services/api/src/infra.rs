use metrics_exporter_prometheus::PrometheusHandle;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// How an input file is routed through the assessment service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InputKind {
    CsvBatch,
    JsonRecord,
    Text,
}

impl InputKind {
    /// Guesses from the file extension; anything unknown is read as OCR text.
    pub(crate) fn from_path(path: &Path) -> Self {
        let guessed = mime_guess::from_path(path).first_or_text_plain();
        match guessed.essence_str() {
            "text/csv" | "text/comma-separated-values" => InputKind::CsvBatch,
            "application/json" => InputKind::JsonRecord,
            _ => InputKind::Text,
        }
    }
}
