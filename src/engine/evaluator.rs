use serde::Serialize;
use tracing::debug;

use crate::error::EvalResult;

use super::ev::ev_breakdown;
use super::grade::{base_grade, classify, Grade};
use super::models::{OddsInput, PerformanceSignals, SignalInputs};
use super::probability::estimate_win_probability;
use super::stars::StarRating;

/// Everything derived from one set of inputs. Immutable once computed.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationResult {
    /// Weighted win probability, 0–100, unrounded.
    pub estimated_win_probability: f64,
    /// Market implied probability, 0.0–1.0.
    pub implied_probability: f64,
    pub raw_edge: f64,
    /// Confidence-adjusted EV, 2 decimals.
    pub ev_percent: f64,
    pub base_grade: Grade,
    pub grade: Grade,
    pub stars: StarRating,
    pub confidence: f64,
    pub odds: OddsInput,
}

impl EvaluationResult {
    /// Win probability as shown to the user, e.g. `60.00%`.
    pub fn win_probability_display(&self) -> String {
        format!("{:.2}%", self.estimated_win_probability)
    }

    pub fn ev_percent_display(&self) -> String {
        format!("{:.2}%", self.ev_percent)
    }

    /// Confidence as `80/100`.
    pub fn confidence_display(&self) -> String {
        format!("{}/100", self.confidence)
    }

    pub fn is_positive_ev(&self) -> bool {
        self.ev_percent > 0.0
    }
}

/// Run the full pipeline: aggregate signals, price the odds, compute EV,
/// then grade and star the result.
pub fn evaluate(signals: &PerformanceSignals, odds: OddsInput) -> EvaluationResult {
    let confidence = signals.ai_confidence();
    let estimated_win_probability = estimate_win_probability(signals);
    let implied_probability = odds.implied_probability();
    let ev = ev_breakdown(estimated_win_probability, implied_probability, confidence);

    // Grading works on the rounded EV the user sees
    let result = EvaluationResult {
        estimated_win_probability,
        implied_probability,
        raw_edge: ev.raw_edge,
        ev_percent: ev.ev_percent,
        base_grade: base_grade(ev.ev_percent),
        grade: classify(ev.ev_percent, confidence),
        stars: StarRating::from_confidence(confidence),
        confidence,
        odds,
    };

    debug!(
        "Evaluated @ {}: p={:.2}% implied={:.4} ev={:.2}% grade={} stars={}",
        odds,
        result.estimated_win_probability,
        result.implied_probability,
        result.ev_percent,
        result.grade,
        result.stars.count()
    );

    result
}

/// Validate raw inputs and evaluate in one step.
pub fn evaluate_raw(inputs: SignalInputs, odds: i32) -> EvalResult<EvaluationResult> {
    let signals = PerformanceSignals::new(inputs)?;
    let odds = OddsInput::new(odds)?;
    Ok(evaluate(&signals, odds))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EvalError;
    use approx::assert_relative_eq;

    fn scenario() -> EvaluationResult {
        let signals = PerformanceSignals::uniform(60.0, 80.0).unwrap();
        evaluate(&signals, OddsInput::new(120).unwrap())
    }

    #[test]
    fn end_to_end_plus_120() {
        let r = scenario();
        assert_relative_eq!(r.implied_probability, 0.4545, epsilon = 1e-4);
        assert_eq!(r.stars.count(), 4);
        assert_eq!(r.confidence, 80.0);
    }

    #[test]
    fn end_to_end_literal_scenario() {
        // Confidence is itself a weighted signal: 60*0.8 + 80*0.2 = 64
        let signals = PerformanceSignals::new(SignalInputs {
            last5: 60.0,
            last10: 60.0,
            last20: 60.0,
            h2h: 60.0,
            season: 60.0,
            prev_season: 60.0,
            ai_confidence: 80.0,
        })
        .unwrap();
        let p = estimate_win_probability(&signals);
        assert_relative_eq!(p, 64.0, epsilon = 1e-9);

        // The EV chain from a 60% estimate, as the pipeline stages compose
        let ev = ev_breakdown(60.0, OddsInput::new(120).unwrap().implied_probability(), 80.0);
        assert_relative_eq!(ev.raw_edge, 0.1455, epsilon = 1e-4);
        assert_relative_eq!(ev.confidence_factor, 0.8, epsilon = 1e-12);
        assert_relative_eq!(ev.ev_percent, 11.64, epsilon = 1e-9);
        assert_eq!(base_grade(ev.ev_percent), Grade::A);
        assert_eq!(classify(ev.ev_percent, 80.0), Grade::A);
        assert_eq!(StarRating::from_confidence(80.0).count(), 4);
    }

    #[test]
    fn evaluate_composes_stages() {
        let r = scenario();
        // p = 64, implied = 100/220, ev = (0.64 - 0.4545) * 0.8 * 100 = 14.84
        assert_relative_eq!(r.estimated_win_probability, 64.0, epsilon = 1e-9);
        assert_relative_eq!(r.ev_percent, 14.84, epsilon = 1e-9);
        assert_eq!(r.base_grade, Grade::A);
        assert_eq!(r.grade, Grade::A);
    }

    #[test]
    fn uniform_sixty_gives_sixty() {
        let signals = PerformanceSignals::uniform(60.0, 60.0).unwrap();
        let r = evaluate(&signals, OddsInput::new(-150).unwrap());
        assert_relative_eq!(r.estimated_win_probability, 60.0, epsilon = 1e-9);
        // 60% estimate against a 60% price: no edge, grade C, 3 stars
        assert_relative_eq!(r.ev_percent, 0.0, epsilon = 1e-9);
        assert_eq!(r.grade, Grade::C);
        assert_eq!(r.stars.count(), 3);
        assert!(!r.is_positive_ev());
    }

    #[test]
    fn high_confidence_promotes() {
        // p = 0.8*50 + 0.2*90 = 58; implied 0.5; ev = 0.08*0.9*100 = 7.2 → B → A
        let signals = PerformanceSignals::uniform(50.0, 90.0).unwrap();
        let r = evaluate(&signals, OddsInput::new(100).unwrap());
        assert_relative_eq!(r.ev_percent, 7.2, epsilon = 1e-9);
        assert_eq!(r.base_grade, Grade::B);
        assert_eq!(r.grade, Grade::A);
        assert_eq!(r.stars.count(), 5);
    }

    #[test]
    fn low_confidence_demotes() {
        // p = 0.8*100 + 0.2*40 = 88; implied 0.2 (+400); ev = 0.68*0.4*100 = 27.2 → A+ → B
        let signals = PerformanceSignals::uniform(100.0, 40.0).unwrap();
        let r = evaluate(&signals, OddsInput::new(400).unwrap());
        assert_relative_eq!(r.ev_percent, 27.2, epsilon = 1e-9);
        assert_eq!(r.base_grade, Grade::APlus);
        assert_eq!(r.grade, Grade::B);
        assert_eq!(r.stars.count(), 2);
    }

    #[test]
    fn display_strings() {
        let r = scenario();
        assert_eq!(r.win_probability_display(), "64.00%");
        assert_eq!(r.ev_percent_display(), "14.84%");
        assert_eq!(r.confidence_display(), "80/100");
    }

    #[test]
    fn evaluate_raw_validates() {
        assert!(matches!(
            evaluate_raw(SignalInputs::default(), 0),
            Err(EvalError::InvalidOdds(_))
        ));
        let mut inputs = SignalInputs::default();
        inputs.last10 = 101.0;
        assert!(matches!(
            evaluate_raw(inputs, 120),
            Err(EvalError::InvalidRange { field: "last10", .. })
        ));
        assert!(evaluate_raw(SignalInputs::default(), -110).is_ok());
    }

    #[test]
    fn result_serializes_camel_case() {
        let json = serde_json::to_value(scenario()).unwrap();
        assert_eq!(json["grade"], "A");
        assert_eq!(json["stars"], 4);
        assert_eq!(json["odds"], 120);
        assert!(json.get("evPercent").is_some());
        assert!(json.get("estimatedWinProbability").is_some());
    }
}
