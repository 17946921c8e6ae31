//! Weight configuration and stage adjustment.
//!
//! The numeric tables here are tuned configuration data, not derived
//! values. A stage-adjusted config is produced by adding the stage
//! modifier to each base weight, clamping to the per-component limits,
//! and rescaling the six positive components so they sum to exactly 1.0.
//! The risk weight is a separate subtractive multiplier and is never
//! part of that sum.

use crate::error::AppError;

use super::stage::DraftStage;

/// Per-component weights for score aggregation. The six positive
/// components sum to 1.0; `risk` multiplies the subtracted penalty.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightConfig {
    pub base: f64,
    pub synergy: f64,
    pub counter: f64,
    pub composition: f64,
    pub threat: f64,
    pub flexibility: f64,
    pub risk: f64,
}

#[derive(Debug, Clone, Copy)]
struct Limit {
    min: f64,
    max: f64,
}

/// Base weights before stage adjustment.
const BASE_WEIGHTS: [f64; 7] = [0.20, 0.20, 0.20, 0.20, 0.10, 0.05, 0.05];

/// Clamp limits applied after the stage modifier, before rescaling.
const LIMITS: [Limit; 7] = [
    Limit { min: 0.10, max: 0.35 }, // base
    Limit { min: 0.10, max: 0.35 }, // synergy
    Limit { min: 0.10, max: 0.35 }, // counter
    Limit { min: 0.10, max: 0.35 }, // composition
    Limit { min: 0.05, max: 0.25 }, // threat
    Limit { min: 0.00, max: 0.15 }, // flexibility
    Limit { min: 0.00, max: 0.15 }, // risk
];

/// Additive stage modifiers. Early picks favor flexibility over
/// counter information; late picks favor counter and composition fit.
const EARLY_MODIFIERS: [f64; 7] = [0.00, 0.00, -0.10, 0.00, 0.00, 0.10, -0.02];
const MID_MODIFIERS: [f64; 7] = [0.00, 0.00, 0.00, 0.00, 0.00, 0.00, 0.00];
const LATE_MODIFIERS: [f64; 7] = [0.00, 0.00, 0.15, 0.10, 0.00, -0.05, 0.05];

impl WeightConfig {
    /// Stage-adjusted weights: modifier, clamp, rescale positives to 1.0.
    pub fn for_stage(stage: DraftStage) -> Self {
        let modifiers = match stage {
            DraftStage::Early => EARLY_MODIFIERS,
            DraftStage::Mid => MID_MODIFIERS,
            DraftStage::Late => LATE_MODIFIERS,
        };

        let mut adjusted = [0.0; 7];
        for i in 0..7 {
            adjusted[i] = (BASE_WEIGHTS[i] + modifiers[i]).clamp(LIMITS[i].min, LIMITS[i].max);
        }

        let positive_sum: f64 = adjusted[..6].iter().sum();
        if positive_sum > 0.0 {
            for w in adjusted[..6].iter_mut() {
                *w /= positive_sum;
            }
        }

        WeightConfig {
            base: adjusted[0],
            synergy: adjusted[1],
            counter: adjusted[2],
            composition: adjusted[3],
            threat: adjusted[4],
            flexibility: adjusted[5],
            risk: adjusted[6],
        }
    }

    /// Sum of the six positive components.
    pub fn positive_sum(&self) -> f64 {
        self.base + self.synergy + self.counter + self.composition + self.threat + self.flexibility
    }

    /// Caller contract check: all weights non-negative, positive
    /// components summing to 1.0. A config that fails this would
    /// silently produce misleading scores, so it is a hard error.
    pub fn validate(&self) -> Result<(), AppError> {
        let components = [
            ("base", self.base),
            ("synergy", self.synergy),
            ("counter", self.counter),
            ("composition", self.composition),
            ("threat", self.threat),
            ("flexibility", self.flexibility),
            ("risk", self.risk),
        ];
        for (name, value) in components {
            if value < 0.0 || !value.is_finite() {
                return Err(AppError::InvalidWeights(format!(
                    "{} weight {} must be non-negative",
                    name, value
                )));
            }
        }

        let sum = self.positive_sum();
        if (sum - 1.0).abs() > 1e-6 {
            return Err(AppError::InvalidWeights(format!(
                "positive weights sum to {:.6}, expected 1.0",
                sum
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_weights_sum_to_one_for_every_stage() {
        for stage in [DraftStage::Early, DraftStage::Mid, DraftStage::Late] {
            let w = WeightConfig::for_stage(stage);
            assert!(
                (w.positive_sum() - 1.0).abs() < 1e-9,
                "{:?} sums to {}",
                stage,
                w.positive_sum()
            );
            w.validate().unwrap();
        }
    }

    #[test]
    fn late_draft_values_fit_over_flexibility() {
        let early = WeightConfig::for_stage(DraftStage::Early);
        let late = WeightConfig::for_stage(DraftStage::Late);

        assert!(late.counter > early.counter);
        assert!(late.composition > early.composition);
        assert!(early.flexibility > late.flexibility);
        assert!(late.risk > early.risk);
    }

    #[test]
    fn all_weights_non_negative() {
        for stage in [DraftStage::Early, DraftStage::Mid, DraftStage::Late] {
            let w = WeightConfig::for_stage(stage);
            for v in [
                w.base,
                w.synergy,
                w.counter,
                w.composition,
                w.threat,
                w.flexibility,
                w.risk,
            ] {
                assert!(v >= 0.0);
            }
        }
    }

    #[test]
    fn validate_rejects_unnormalized_table() {
        let mut w = WeightConfig::for_stage(DraftStage::Mid);
        w.base += 0.2;
        assert!(w.validate().is_err());

        w = WeightConfig::for_stage(DraftStage::Mid);
        w.risk = -0.1;
        assert!(w.validate().is_err());
    }
}
