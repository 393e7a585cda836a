pub mod ev;
pub mod evaluator;
pub mod grade;
pub mod models;
pub mod odds;
pub mod probability;
pub mod stars;

pub use evaluator::{evaluate, evaluate_raw, EvaluationResult};
pub use grade::Grade;
pub use models::{OddsInput, PerformanceSignals, SignalInputs, Sportsbook};
pub use stars::StarRating;
