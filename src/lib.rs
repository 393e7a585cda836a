//! Sports bet evaluation engine.
//!
//! Six performance signals and a model-confidence score are combined into a
//! weighted win probability, compared with the implied probability of the
//! quoted American odds, and turned into a confidence-adjusted EV percentage,
//! a letter grade and a star rating. Saved evaluations live in a per-session
//! [`EvaluationLedger`].

pub mod config;
pub mod dashboard;
pub mod engine;
pub mod error;
pub mod ledger;

pub use engine::{
    evaluate, evaluate_raw, EvaluationResult, Grade, OddsInput, PerformanceSignals, SignalInputs,
    Sportsbook, StarRating,
};
pub use error::{EvalError, EvalResult};
pub use ledger::{
    list_evaluations, reset_ledger, save_evaluation, EvaluationLedger, EvaluationRecord,
};
