//! The scoring engine: seven component scorers, stage-adjusted weights,
//! and the aggregator that assembles a ranked, explainable result.

pub mod base;
pub mod composition;
pub mod counter;
pub mod engine;
pub mod explain;
pub mod flexibility;
pub mod risk;
pub mod stage;
pub mod synergy;
pub mod threat;
pub mod weights;

pub use engine::{score_all, ScoreBreakdown, ScoredChampion, ScoringContext};
pub use stage::DraftStage;
pub use weights::WeightConfig;

/// Clamp a score to [0, 100].
pub(crate) fn clamp_score(value: f64) -> f64 {
    value.clamp(0.0, 100.0)
}

/// Round to 2 decimal places, matching the precision the UI displays.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
