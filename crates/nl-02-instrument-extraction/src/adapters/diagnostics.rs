use crate::domain::{ExtractionCategory, ExtractionDiagnostic};
use crate::ports::DiagnosticSink;
use parking_lot::Mutex;
use tracing::{debug, info, warn};

/// Writes diagnostics to `tracing`.
///
/// Type mismatches are routine traffic and go to debug. Unavailable receipts
/// go to info. Everything else is a warning.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingDiagnostics;

impl DiagnosticSink for TracingDiagnostics {
    fn record(&self, d: ExtractionDiagnostic) {
        let number = d.number.value();
        match d.category {
            ExtractionCategory::TypeMismatch => debug!(
                number,
                stage = %d.stage,
                category = %d.category,
                "[nl-02] No instrument: {}",
                d.detail
            ),
            ExtractionCategory::Unavailable => info!(
                number,
                stage = %d.stage,
                category = %d.category,
                "[nl-02] No instrument: {}",
                d.detail
            ),
            _ => warn!(
                number,
                stage = %d.stage,
                category = %d.category,
                "[nl-02] No instrument: {}",
                d.detail
            ),
        }
    }
}

/// Keeps diagnostics in memory for inspection.
#[derive(Debug, Default)]
pub struct RecordingDiagnostics {
    records: Mutex<Vec<ExtractionDiagnostic>>,
}

impl RecordingDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of everything recorded so far.
    pub fn records(&self) -> Vec<ExtractionDiagnostic> {
        self.records.lock().clone()
    }

    /// Number of records in a category.
    pub fn count(&self, category: ExtractionCategory) -> usize {
        self.records
            .lock()
            .iter()
            .filter(|d| d.category == category)
            .count()
    }

    /// Most recent record.
    pub fn last(&self) -> Option<ExtractionDiagnostic> {
        self.records.lock().last().cloned()
    }

    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }

    pub fn clear(&self) {
        self.records.lock().clear();
    }
}

impl DiagnosticSink for RecordingDiagnostics {
    fn record(&self, diagnostic: ExtractionDiagnostic) {
        self.records.lock().push(diagnostic);
    }
}
