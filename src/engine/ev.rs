//! Confidence-adjusted expected value.
//!
//!   confidence_factor = ai_confidence / 100
//!   raw_edge          = win_prob_pct / 100 − implied_prob
//!   ev_percent        = raw_edge · confidence_factor · 100
//!
//! The confidence factor only ever shrinks the edge toward zero, so a
//! low-confidence estimate cannot produce a large EV in either direction.

use super::odds::edge;

/// Intermediate values of one EV calculation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EvBreakdown {
    pub confidence_factor: f64,
    pub raw_edge: f64,
    pub adjusted_edge: f64,
    /// `adjusted_edge` as a percentage, rounded to 2 decimals.
    pub ev_percent: f64,
}

/// Full EV calculation.
///
/// # Arguments
/// * `win_prob_pct`  – Estimated win probability (0–100).
/// * `implied_prob`  – Market implied probability (0.0–1.0).
/// * `ai_confidence` – Model confidence score (1–100).
pub fn ev_breakdown(win_prob_pct: f64, implied_prob: f64, ai_confidence: f64) -> EvBreakdown {
    let confidence_factor = ai_confidence / 100.0;
    let raw_edge = edge(win_prob_pct / 100.0, implied_prob);
    let adjusted_edge = raw_edge * confidence_factor;
    EvBreakdown {
        confidence_factor,
        raw_edge,
        adjusted_edge,
        ev_percent: round2(adjusted_edge * 100.0),
    }
}

/// Signed EV percentage, rounded to 2 decimals.
pub fn ev_percent(win_prob_pct: f64, implied_prob: f64, ai_confidence: f64) -> f64 {
    ev_breakdown(win_prob_pct, implied_prob, ai_confidence).ev_percent
}

/// Round half away from zero to 2 decimal places.
pub fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}
