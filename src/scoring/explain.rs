//! Explanation generator: canned, parameterized sentences derived from
//! the score breakdown. Output is never empty; if nothing stands out a
//! generic fallback is emitted.

use crate::data::models::Champion;

use super::engine::ScoreBreakdown;

/// Breakdown threshold above which the risk warning is emitted.
pub const RISK_WARNING_THRESHOLD: f64 = 15.0;

pub fn generate_explanations(breakdown: &ScoreBreakdown, allies: &[Champion]) -> Vec<String> {
    let mut explanations = Vec::new();

    if breakdown.synergy >= 75.0 {
        explanations.push(format!(
            "Excellent synergy with {} locked allies.",
            allies.len()
        ));
    } else if breakdown.synergy >= 60.0 {
        explanations.push("Good synergy with ally team.".to_string());
    }

    if breakdown.counter >= 75.0 {
        explanations.push("Strong direct counter to known enemy picks.".to_string());
    } else if breakdown.counter >= 60.0 {
        explanations.push("Has situational advantages against enemy team.".to_string());
    }

    if breakdown.composition >= 80.0 {
        explanations.push("Perfectly addresses gaps in team composition.".to_string());
    } else if breakdown.composition >= 60.0 {
        explanations.push("Provides missing compositional elements.".to_string());
    }

    if breakdown.threat >= 75.0 {
        explanations.push("Highly effective at mitigating enemy threat vectors.".to_string());
    }

    if breakdown.risk >= RISK_WARNING_THRESHOLD {
        explanations.push(
            "Warning: Amplifies critical vulnerabilities in the drafted composition.".to_string(),
        );
    }

    if explanations.is_empty() {
        explanations.push("Solid base statistics and standard fit for the draft.".to_string());
    }

    explanations
}

#[cfg(test)]
mod tests {
    use super::*;

    fn breakdown() -> ScoreBreakdown {
        ScoreBreakdown {
            base: 50.0,
            synergy: 50.0,
            counter: 50.0,
            composition: 50.0,
            threat: 50.0,
            flexibility: 50.0,
            risk: 0.0,
        }
    }

    #[test]
    fn fallback_is_never_empty() {
        let ex = generate_explanations(&breakdown(), &[]);
        assert_eq!(
            ex,
            vec!["Solid base statistics and standard fit for the draft."]
        );
    }

    #[test]
    fn risk_threshold_triggers_warning() {
        let mut b = breakdown();
        b.risk = 15.0;
        let ex = generate_explanations(&b, &[]);
        assert!(ex.iter().any(|s| s.starts_with("Warning:")));

        b.risk = 14.99;
        let ex = generate_explanations(&b, &[]);
        assert!(!ex.iter().any(|s| s.starts_with("Warning:")));
    }

    #[test]
    fn strong_breakdown_emits_one_sentence_per_component() {
        let b = ScoreBreakdown {
            base: 90.0,
            synergy: 80.0,
            counter: 76.0,
            composition: 85.0,
            threat: 75.0,
            flexibility: 70.0,
            risk: 0.0,
        };
        let ex = generate_explanations(&b, &[]);
        assert_eq!(ex.len(), 4);
        assert!(ex[0].contains("Excellent synergy with 0 locked allies"));
    }
}
