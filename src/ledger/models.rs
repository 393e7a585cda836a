use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::engine::{EvaluationResult, Grade, Sportsbook};
use crate::error::{EvalError, EvalResult};

/// A saved evaluation, formatted for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationRecord {
    /// User-supplied bet name; never empty
    pub name: String,
    /// e.g. "64.00%"
    pub win_probability_display: String,
    /// e.g. "14.84%"
    pub ev_percent_display: String,
    pub grade: Grade,
    /// e.g. "80/100"
    pub confidence_display: String,
    pub sportsbook_name: String,
    pub saved_at: DateTime<Utc>,
}

impl EvaluationRecord {
    /// Snapshot a result under `name`. Surrounding whitespace is trimmed and
    /// a blank name is rejected.
    pub fn new(name: &str, result: &EvaluationResult, sportsbook: &Sportsbook) -> EvalResult<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(EvalError::EmptyName);
        }
        Ok(EvaluationRecord {
            name: name.to_string(),
            win_probability_display: result.win_probability_display(),
            ev_percent_display: result.ev_percent_display(),
            grade: result.grade,
            confidence_display: result.confidence_display(),
            sportsbook_name: sportsbook.label().to_string(),
            saved_at: Utc::now(),
        })
    }
}
