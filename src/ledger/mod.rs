use tracing::{debug, info, warn};

use crate::engine::{EvaluationResult, Sportsbook};
use crate::error::{EvalError, EvalResult};

pub mod models;
pub use models::EvaluationRecord;

/// Session-lifetime list of saved evaluations.
///
/// Append-only between resets; insertion order is display order. Each
/// session owns its own ledger, nothing here is shared or persisted.
#[derive(Debug, Clone, Default)]
pub struct EvaluationLedger {
    records: Vec<EvaluationRecord>,
    /// Size past which each append logs a warning. Records are never dropped.
    warn_threshold: Option<usize>,
}

impl EvaluationLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_warn_threshold(threshold: usize) -> Self {
        EvaluationLedger {
            records: Vec::new(),
            warn_threshold: Some(threshold),
        }
    }

    /// Add a record to the end.
    pub fn append(&mut self, record: EvaluationRecord) -> EvalResult<()> {
        if record.name.trim().is_empty() {
            return Err(EvalError::EmptyName);
        }
        self.records.push(record);
        if let Some(threshold) = self.warn_threshold {
            if self.records.len() > threshold {
                warn!(
                    "Evaluation ledger holds {} records (threshold {})",
                    self.records.len(),
                    threshold
                );
            }
        }
        Ok(())
    }

    /// Records in insertion order.
    pub fn list(&self) -> &[EvaluationRecord] {
        &self.records
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

// ── Session operations ───────────────────────────────────────────────────────

/// Save `result` under `name`. A blank name is a routine omission, not an
/// error: nothing is appended and `false` is returned.
///
/// Whitespace-only names count as blank and saved names are trimmed; this
/// deliberately departs from saving any non-empty string verbatim.
pub fn save_evaluation(
    ledger: &mut EvaluationLedger,
    name: &str,
    result: &EvaluationResult,
    sportsbook: &Sportsbook,
) -> bool {
    let record = match EvaluationRecord::new(name, result, sportsbook) {
        Ok(record) => record,
        Err(EvalError::EmptyName) => {
            debug!("Skipping save: empty bet name");
            return false;
        }
        Err(e) => {
            warn!("Skipping save: {}", e);
            return false;
        }
    };
    info!(
        "Saved evaluation '{}' ({} grade, EV {}, {})",
        record.name, record.grade, record.ev_percent_display, record.sportsbook_name
    );
    // EvaluationRecord::new already rejected blank names
    ledger.append(record).is_ok()
}

pub fn list_evaluations(ledger: &EvaluationLedger) -> &[EvaluationRecord] {
    ledger.list()
}

/// Full reset; drops every saved record.
pub fn reset_ledger(ledger: &mut EvaluationLedger) {
    let dropped = ledger.len();
    ledger.clear();
    info!("Evaluation ledger reset ({} record(s) cleared)", dropped);
}
