//! Weighted win-probability estimate.
//!
//! The estimate is a weighted mean of recent-form, head-to-head and season
//! success rates plus the model's own confidence score. Weights are fixed
//! business constants; they are not fitted to outcome data.
//!
//! | signal        | weight |
//! |---------------|--------|
//! | last 5 games  | 0.10   |
//! | last 10 games | 0.20   |
//! | last 20 games | 0.05   |
//! | head-to-head  | 0.15   |
//! | this season   | 0.25   |
//! | last season   | 0.05   |
//! | AI confidence | 0.20   |

use super::models::PerformanceSignals;

/// Per-signal weights, in the order of [`SIGNAL_NAMES`].
pub const SIGNAL_WEIGHTS: [f64; 7] = [0.10, 0.20, 0.05, 0.15, 0.25, 0.05, 0.20];

/// Field names used in validation errors.
pub const SIGNAL_NAMES: [&str; 7] = [
    "last5",
    "last10",
    "last20",
    "h2h",
    "season",
    "prevSeason",
    "aiConfidence",
];

/// Estimated win probability as a percentage in [0, 100].
///
/// The weighted sum is divided by the weight total rather than assuming the
/// table sums to one. The result is not rounded.
pub fn estimate_win_probability(signals: &PerformanceSignals) -> f64 {
    weighted_mean(&signals.inputs().values(), &SIGNAL_WEIGHTS)
}

/// Weighted arithmetic mean. Returns 0.0 for a zero weight total.
fn weighted_mean(values: &[f64], weights: &[f64]) -> f64 {
    debug_assert_eq!(values.len(), weights.len());
    let total_weight: f64 = weights.iter().sum();
    if total_weight <= 0.0 {
        return 0.0;
    }
    let weighted: f64 = values.iter().zip(weights).map(|(v, w)| v * w).sum();
    weighted / total_weight
}
