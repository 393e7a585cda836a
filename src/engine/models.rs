use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{EvalError, EvalResult};

use super::probability::SIGNAL_NAMES;

/// Default slider position for every performance signal and the confidence score.
pub const DEFAULT_SIGNAL: f64 = 50.0;
/// Default odds shown on a fresh form.
pub const DEFAULT_ODDS: i32 = 100;

/// Lower bound per signal, in the order of [`SIGNAL_NAMES`]. Every upper bound is 100.
const SIGNAL_MINIMUMS: [f64; 7] = [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0];

/// Raw, unvalidated signal values as collected from a form or request body.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignalInputs {
    pub last5: f64,
    pub last10: f64,
    pub last20: f64,
    pub h2h: f64,
    pub season: f64,
    pub prev_season: f64,
    pub ai_confidence: f64,
}

impl SignalInputs {
    /// Values in the order of [`SIGNAL_NAMES`].
    pub fn values(&self) -> [f64; 7] {
        [
            self.last5,
            self.last10,
            self.last20,
            self.h2h,
            self.season,
            self.prev_season,
            self.ai_confidence,
        ]
    }
}

impl Default for SignalInputs {
    fn default() -> Self {
        SignalInputs {
            last5: DEFAULT_SIGNAL,
            last10: DEFAULT_SIGNAL,
            last20: DEFAULT_SIGNAL,
            h2h: DEFAULT_SIGNAL,
            season: DEFAULT_SIGNAL,
            prev_season: DEFAULT_SIGNAL,
            ai_confidence: DEFAULT_SIGNAL,
        }
    }
}

/// Validated performance signals for one bet.
///
/// Success rates are percentages in [0, 100]; the AI confidence score is in
/// [1, 100]. Out-of-range values are rejected rather than clamped.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "SignalInputs", into = "SignalInputs")]
pub struct PerformanceSignals {
    inputs: SignalInputs,
}

impl PerformanceSignals {
    pub fn new(inputs: SignalInputs) -> EvalResult<Self> {
        let bounds = SIGNAL_NAMES.iter().zip(SIGNAL_MINIMUMS);
        for ((&field, min), value) in bounds.zip(inputs.values()) {
            check_range(field, value, min, 100.0)?;
        }
        Ok(PerformanceSignals { inputs })
    }

    /// All six success rates set to `rate`, with the given confidence.
    pub fn uniform(rate: f64, ai_confidence: f64) -> EvalResult<Self> {
        Self::new(SignalInputs {
            last5: rate,
            last10: rate,
            last20: rate,
            h2h: rate,
            season: rate,
            prev_season: rate,
            ai_confidence,
        })
    }

    pub fn last5(&self) -> f64 {
        self.inputs.last5
    }
    pub fn last10(&self) -> f64 {
        self.inputs.last10
    }
    pub fn last20(&self) -> f64 {
        self.inputs.last20
    }
    pub fn h2h(&self) -> f64 {
        self.inputs.h2h
    }
    pub fn season(&self) -> f64 {
        self.inputs.season
    }
    pub fn prev_season(&self) -> f64 {
        self.inputs.prev_season
    }
    pub fn ai_confidence(&self) -> f64 {
        self.inputs.ai_confidence
    }

    pub fn inputs(&self) -> &SignalInputs {
        &self.inputs
    }
}

impl TryFrom<SignalInputs> for PerformanceSignals {
    type Error = EvalError;

    fn try_from(inputs: SignalInputs) -> EvalResult<Self> {
        Self::new(inputs)
    }
}

impl From<PerformanceSignals> for SignalInputs {
    fn from(signals: PerformanceSignals) -> Self {
        signals.inputs
    }
}

fn check_range(field: &'static str, value: f64, min: f64, max: f64) -> EvalResult<()> {
    // NaN fails the contains() check, so non-numeric floats are rejected too
    if !(min..=max).contains(&value) {
        return Err(EvalError::InvalidRange {
            field,
            value,
            min,
            max,
        });
    }
    Ok(())
}

/// A non-zero American odds price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub struct OddsInput(i32);

impl OddsInput {
    pub fn new(odds: i32) -> EvalResult<Self> {
        if odds == 0 {
            return Err(EvalError::InvalidOdds(odds.to_string()));
        }
        Ok(OddsInput(odds))
    }

    pub fn value(&self) -> i32 {
        self.0
    }
}

impl Default for OddsInput {
    fn default() -> Self {
        OddsInput(DEFAULT_ODDS)
    }
}

impl TryFrom<i32> for OddsInput {
    type Error = EvalError;

    fn try_from(odds: i32) -> EvalResult<Self> {
        Self::new(odds)
    }
}

impl From<OddsInput> for i32 {
    fn from(odds: OddsInput) -> Self {
        odds.0
    }
}

/// Accepts "+120", "-135" and "150".
impl FromStr for OddsInput {
    type Err = EvalError;

    fn from_str(s: &str) -> EvalResult<Self> {
        let odds: i32 = s
            .trim()
            .parse()
            .map_err(|_| EvalError::InvalidOdds(s.to_string()))?;
        Self::new(odds)
    }
}

impl fmt::Display for OddsInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:+}", self.0)
    }
}

/// Where the quoted odds were found.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Sportsbook {
    #[default]
    DraftKings,
    FanDuel,
    BetMGM,
    Caesars,
    PointsBet,
    NoVig,
    Custom(String),
}

impl Sportsbook {
    /// The fixed sportsbook choices, in display order.
    pub const KNOWN: [Sportsbook; 6] = [
        Sportsbook::DraftKings,
        Sportsbook::FanDuel,
        Sportsbook::BetMGM,
        Sportsbook::Caesars,
        Sportsbook::PointsBet,
        Sportsbook::NoVig,
    ];

    pub fn label(&self) -> &str {
        match self {
            Sportsbook::DraftKings => "DraftKings",
            Sportsbook::FanDuel => "FanDuel",
            Sportsbook::BetMGM => "BetMGM",
            Sportsbook::Caesars => "Caesars",
            Sportsbook::PointsBet => "PointsBet",
            Sportsbook::NoVig => "NoVig",
            Sportsbook::Custom(label) => label,
        }
    }
}

/// Known labels match case-insensitively; anything else becomes a custom label.
impl FromStr for Sportsbook {
    type Err = EvalError;

    fn from_str(s: &str) -> EvalResult<Self> {
        let label = s.trim();
        if label.is_empty() {
            return Err(EvalError::InvalidSportsbook);
        }
        Ok(Sportsbook::KNOWN
            .iter()
            .find(|known| known.label().eq_ignore_ascii_case(label))
            .cloned()
            .unwrap_or_else(|| Sportsbook::Custom(label.to_string())))
    }
}

impl TryFrom<String> for Sportsbook {
    type Error = EvalError;

    fn try_from(s: String) -> EvalResult<Self> {
        s.parse()
    }
}

impl From<Sportsbook> for String {
    fn from(book: Sportsbook) -> Self {
        book.label().to_string()
    }
}

impl fmt::Display for Sportsbook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signals_accept_bounds() {
        assert!(PerformanceSignals::uniform(0.0, 1.0).is_ok());
        assert!(PerformanceSignals::uniform(100.0, 100.0).is_ok());
    }

    #[test]
    fn signals_reject_out_of_range() {
        let mut inputs = SignalInputs::default();
        inputs.h2h = 100.5;
        match PerformanceSignals::new(inputs) {
            Err(EvalError::InvalidRange { field, .. }) => assert_eq!(field, "h2h"),
            other => panic!("Expected InvalidRange, got {:?}", other),
        }
    }

    #[test]
    fn confidence_zero_rejected() {
        let err = PerformanceSignals::uniform(50.0, 0.0).unwrap_err();
        assert_eq!(
            err,
            EvalError::InvalidRange {
                field: "aiConfidence",
                value: 0.0,
                min: 1.0,
                max: 100.0
            }
        );
    }

    #[test]
    fn range_errors_name_each_signal() {
        for (i, expected) in SIGNAL_NAMES.iter().enumerate() {
            let mut values = SignalInputs::default().values();
            values[i] = 101.0;
            let inputs = SignalInputs {
                last5: values[0],
                last10: values[1],
                last20: values[2],
                h2h: values[3],
                season: values[4],
                prev_season: values[5],
                ai_confidence: values[6],
            };
            match PerformanceSignals::new(inputs) {
                Err(EvalError::InvalidRange { field, value, .. }) => {
                    assert_eq!(field, *expected);
                    assert_eq!(value, 101.0);
                }
                other => panic!("Expected InvalidRange for {}, got {:?}", expected, other),
            }
        }
    }

    #[test]
    fn nan_signal_rejected() {
        let mut inputs = SignalInputs::default();
        inputs.season = f64::NAN;
        assert!(PerformanceSignals::new(inputs).is_err());
    }

    #[test]
    fn signals_deserialize_through_validation() {
        let ok = r#"{"last5":60,"last10":60,"last20":60,"h2h":60,"season":60,"prevSeason":60,"aiConfidence":80}"#;
        let signals: PerformanceSignals = serde_json::from_str(ok).unwrap();
        assert_eq!(signals.prev_season(), 60.0);
        assert_eq!(signals.ai_confidence(), 80.0);

        let bad = r#"{"last5":-1,"last10":60,"last20":60,"h2h":60,"season":60,"prevSeason":60,"aiConfidence":80}"#;
        assert!(serde_json::from_str::<PerformanceSignals>(bad).is_err());
    }

    #[test]
    fn default_form_values() {
        let signals = PerformanceSignals::default();
        assert_eq!(signals.last5(), 50.0);
        assert_eq!(signals.ai_confidence(), 50.0);
        assert_eq!(OddsInput::default().value(), 100);
    }

    #[test]
    fn odds_parse_forms() {
        assert_eq!("+120".parse::<OddsInput>().unwrap().value(), 120);
        assert_eq!("-135".parse::<OddsInput>().unwrap().value(), -135);
        assert_eq!(" 150 ".parse::<OddsInput>().unwrap().value(), 150);
    }

    #[test]
    fn odds_parse_rejects_zero_and_garbage() {
        assert!(matches!("0".parse::<OddsInput>(), Err(EvalError::InvalidOdds(_))));
        assert!(matches!("+0".parse::<OddsInput>(), Err(EvalError::InvalidOdds(_))));
        assert!(matches!("abc".parse::<OddsInput>(), Err(EvalError::InvalidOdds(_))));
        assert!(matches!("".parse::<OddsInput>(), Err(EvalError::InvalidOdds(_))));
    }

    #[test]
    fn odds_display_is_signed() {
        assert_eq!(OddsInput::new(120).unwrap().to_string(), "+120");
        assert_eq!(OddsInput::new(-135).unwrap().to_string(), "-135");
    }

    #[test]
    fn odds_deserialize_rejects_zero() {
        assert!(serde_json::from_str::<OddsInput>("0").is_err());
        assert_eq!(serde_json::from_str::<OddsInput>("-110").unwrap().value(), -110);
    }

    #[test]
    fn sportsbook_parsing() {
        assert_eq!("fanduel".parse::<Sportsbook>().unwrap(), Sportsbook::FanDuel);
        assert_eq!("NoVig".parse::<Sportsbook>().unwrap(), Sportsbook::NoVig);
        assert_eq!(
            "Bet365".parse::<Sportsbook>().unwrap(),
            Sportsbook::Custom("Bet365".into())
        );
        assert_eq!("  ".parse::<Sportsbook>(), Err(EvalError::InvalidSportsbook));
    }

    #[test]
    fn sportsbook_serializes_as_label() {
        let json = serde_json::to_string(&Sportsbook::BetMGM).unwrap();
        assert_eq!(json, r#""BetMGM""#);
        let custom: Sportsbook = serde_json::from_str(r#""Pinnacle""#).unwrap();
        assert_eq!(custom.label(), "Pinnacle");
    }
}
