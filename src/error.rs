use thiserror::Error;

/// Validation failures surfaced by the evaluation engine and ledger.
///
/// Every computation past input validation is total, so these are the only
/// ways an evaluation can fail.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    /// Odds were zero or could not be parsed as an American-odds integer.
    #[error("invalid odds {0:?}: American odds must be a non-zero integer such as +120 or -135")]
    InvalidOdds(String),

    /// A performance signal or the confidence score fell outside its range.
    #[error("{field} must be between {min} and {max}, got {value}")]
    InvalidRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    /// A save was attempted without a bet name.
    #[error("bet name must not be empty")]
    EmptyName,

    /// A custom sportsbook label was blank.
    #[error("sportsbook label must not be empty")]
    InvalidSportsbook,
}

pub type EvalResult<T> = std::result::Result<T, EvalError>;
