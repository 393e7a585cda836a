//! American odds conversion.
//!
//! American odds quote the payout relative to a 100-unit reference:
//!   +k  → a 100 stake returns k profit   (underdog)
//!   −k  → a k stake returns 100 profit   (favourite)
//!
//! The implied probability is the break-even win rate for that price:
//!   p = 100 / (k + 100)       for +k
//!   p = k / (k + 100)         for −k
//!
//! Zero has no meaning in either branch and is rejected.

use crate::error::{EvalError, EvalResult};

use super::models::OddsInput;

/// Convert American odds to the implied probability (0.0–1.0, exclusive).
///
/// # Arguments
/// * `odds` – American odds; must be non-zero. Magnitudes below 100 are
///            unconventional but still accepted.
///
/// # Errors
/// `EvalError::InvalidOdds` when `odds == 0`.
pub fn implied_probability(odds: i32) -> EvalResult<f64> {
    if odds == 0 {
        return Err(EvalError::InvalidOdds(odds.to_string()));
    }
    Ok(nonzero_implied_probability(odds))
}

fn nonzero_implied_probability(odds: i32) -> f64 {
    let abs_odds = (odds as f64).abs();
    if odds > 0 {
        100.0 / (abs_odds + 100.0)
    } else {
        abs_odds / (abs_odds + 100.0)
    }
}

impl OddsInput {
    /// Implied probability of this price. Infallible because `OddsInput`
    /// can only be built from non-zero odds.
    pub fn implied_probability(&self) -> f64 {
        nonzero_implied_probability(self.value())
    }

    /// Equivalent decimal odds (total return per unit staked).
    pub fn decimal_odds(&self) -> f64 {
        1.0 / self.implied_probability()
    }
}

/// Signed edge of an estimate over the market.
///
/// Edge = win_prob − implied_prob
///
/// Positive edge means the price underrates the estimated probability.
pub fn edge(win_prob: f64, implied_prob: f64) -> f64 {
    win_prob - implied_prob
}
