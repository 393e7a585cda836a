use serde::{Deserialize, Serialize};
use std::fmt;

/// Confidence at or above which middling grades are promoted.
pub const HIGH_CONFIDENCE: f64 = 85.0;
/// Confidence at or below which strong grades are demoted.
pub const LOW_CONFIDENCE: f64 = 40.0;

/// EV thresholds (inclusive lower bounds), best grade first.
const EV_THRESHOLDS: [(f64, Grade); 4] = [
    (15.0, Grade::APlus),
    (10.0, Grade::A),
    (5.0, Grade::B),
    (0.0, Grade::C),
];

/// Bet quality, `A+` best to `D` worst.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Grade {
    #[serde(rename = "A+")]
    APlus,
    A,
    B,
    C,
    D,
}

impl Grade {
    pub fn as_str(&self) -> &'static str {
        match self {
            Grade::APlus => "A+",
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Grade from EV alone. First matching threshold wins; negative EV is `D`.
pub fn base_grade(ev_percent: f64) -> Grade {
    EV_THRESHOLDS
        .iter()
        .find(|(threshold, _)| ev_percent >= *threshold)
        .map(|(_, grade)| *grade)
        .unwrap_or(Grade::D)
}

/// Shift a base grade according to the confidence band.
///
/// High confidence lifts B→A and C→B. Low confidence drops A+/A→B and B→C.
/// Confidence strictly between the two bands leaves the grade alone.
pub fn adjust_for_confidence(base: Grade, ai_confidence: f64) -> Grade {
    if ai_confidence >= HIGH_CONFIDENCE {
        match base {
            Grade::B => Grade::A,
            Grade::C => Grade::B,
            other => other,
        }
    } else if ai_confidence <= LOW_CONFIDENCE {
        match base {
            Grade::APlus | Grade::A => Grade::B,
            Grade::B => Grade::C,
            other => other,
        }
    } else {
        base
    }
}

/// Final grade: base grade from EV, adjusted once by confidence.
pub fn classify(ev_percent: f64, ai_confidence: f64) -> Grade {
    adjust_for_confidence(base_grade(ev_percent), ai_confidence)
}
