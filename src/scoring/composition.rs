//! Composition score: gap analysis against the current ally team.
//!
//! Team-level presence flags are derived from per-member thresholds; a
//! gap is a flag the locked allies do not yet satisfy. The candidate is
//! scored by the fraction of open gaps it would close on its own.

use crate::data::models::Champion;

use super::{clamp_score, round2};

/// Score awarded when the ally team already satisfies every flag.
const HEALTHY_TEAM_SCORE: f64 = 75.0;

const NUM_ELEMENTS: usize = 7;

// Flag order: ad, ap, frontline, engage, peel, waveclear, cc
const ELEMENT_LABELS: [&str; NUM_ELEMENTS] =
    ["ad", "ap", "frontline", "engage", "peel", "waveclear", "cc"];

/// Minimum member count for each flag to be considered satisfied.
const REQUIRED_COUNTS: [usize; NUM_ELEMENTS] = [1, 1, 1, 1, 1, 2, 2];

/// Per-member thresholds for contributing to each flag.
fn member_flags(c: &Champion) -> [bool; NUM_ELEMENTS] {
    [
        c.damage_profile.ad > 0.5,
        c.damage_profile.ap > 0.5,
        c.durability_score >= 7.0,
        c.engage_score >= 6.0,
        c.peel_score >= 5.0,
        c.waveclear_score >= 5.0,
        c.cc_score >= 4.0,
    ]
}

/// Shared per-batch context: the open gaps over the locked allies.
#[derive(Debug, Clone)]
pub struct CompositionContext {
    gaps: [bool; NUM_ELEMENTS],
    total_gaps: usize,
}

impl CompositionContext {
    pub fn prepare(allies: &[Champion]) -> Self {
        let mut counts = [0usize; NUM_ELEMENTS];
        for ally in allies {
            for (count, present) in counts.iter_mut().zip(member_flags(ally)) {
                if present {
                    *count += 1;
                }
            }
        }

        let mut gaps = [false; NUM_ELEMENTS];
        for i in 0..NUM_ELEMENTS {
            gaps[i] = counts[i] < REQUIRED_COUNTS[i];
        }
        let total_gaps = gaps.iter().filter(|g| **g).count();

        CompositionContext { gaps, total_gaps }
    }

    pub fn total_gaps(&self) -> usize {
        self.total_gaps
    }

    /// Labels of the currently open gaps, in fixed flag order.
    pub fn gap_labels(&self) -> Vec<&'static str> {
        ELEMENT_LABELS
            .iter()
            .zip(self.gaps)
            .filter_map(|(label, open)| open.then_some(*label))
            .collect()
    }

}

/// Compute the composition score for a candidate. No allies → neutral
/// 50; no open gaps → the fixed healthy-team score.
pub fn compute_composition_score(
    champion: &Champion,
    allies: &[Champion],
    context: &CompositionContext,
) -> f64 {
    if allies.is_empty() {
        return 50.0;
    }
    if context.total_gaps == 0 {
        return HEALTHY_TEAM_SCORE;
    }

    let candidate = member_flags(champion);
    let gaps_filled = context
        .gaps
        .iter()
        .zip(candidate)
        .filter(|(open, fills)| **open && *fills)
        .count();

    let raw = (gaps_filled as f64 / context.total_gaps as f64) * 100.0;
    clamp_score(round2(raw))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::models::{DamageProfile, Role, Tier};

    fn champ(id: &str, ad: f64, ap: f64) -> Champion {
        Champion {
            id: id.to_string(),
            name: id.to_string(),
            roles: vec![Role::Mid],
            winrate: 50.0,
            pick_rate: 10.0,
            ban_rate: 0.0,
            tier: Tier::A,
            damage_profile: DamageProfile {
                ad,
                ap,
                true_dmg: 1.0 - ad - ap,
            },
            durability_score: 0.0,
            engage_score: 0.0,
            peel_score: 0.0,
            cc_score: 0.0,
            scaling_score: 5.0,
            early_game_score: 5.0,
            mobility_score: 5.0,
            healing_score: 0.0,
            shield_score: 0.0,
            waveclear_score: 0.0,
            tags: vec![],
        }
    }

    /// A member that satisfies every flag except the off-damage one.
    fn all_rounder(id: &str, ad: f64, ap: f64) -> Champion {
        let mut c = champ(id, ad, ap);
        c.durability_score = 8.0;
        c.engage_score = 7.0;
        c.peel_score = 6.0;
        c.waveclear_score = 6.0;
        c.cc_score = 5.0;
        c
    }

    fn balanced_team() -> Vec<Champion> {
        vec![
            all_rounder("top", 0.8, 0.2),
            all_rounder("jungle", 0.7, 0.3),
            all_rounder("mid", 0.2, 0.8),
            all_rounder("carry", 0.9, 0.1),
            all_rounder("support", 0.3, 0.7),
        ]
    }

    #[test]
    fn no_allies_is_neutral() {
        let context = CompositionContext::prepare(&[]);
        assert_eq!(
            compute_composition_score(&champ("cand", 0.8, 0.2), &[], &context),
            50.0
        );
    }

    #[test]
    fn balanced_team_scores_healthy_constant_for_any_candidate() {
        let allies = balanced_team();
        let context = CompositionContext::prepare(&allies);
        assert_eq!(context.total_gaps(), 0);

        for candidate in [champ("a", 0.9, 0.1), champ("b", 0.0, 1.0)] {
            assert_eq!(
                compute_composition_score(&candidate, &allies, &context),
                75.0
            );
        }
    }

    #[test]
    fn candidate_scores_by_fraction_of_gaps_filled() {
        // One pure-AD ally: open gaps are ap, frontline, engage, peel,
        // waveclear (needs 2), cc (needs 2) → 6 gaps
        let allies = vec![champ("ally", 0.9, 0.1)];
        let context = CompositionContext::prepare(&allies);
        assert_eq!(context.total_gaps(), 6);

        // AP candidate with waveclear fills 2 of 6
        let mut cand = champ("cand", 0.1, 0.9);
        cand.waveclear_score = 6.0;
        let score = compute_composition_score(&cand, &allies, &context);
        assert_eq!(score, round2(2.0 / 6.0 * 100.0));
    }

    #[test]
    fn candidate_filling_nothing_scores_zero() {
        let allies = vec![champ("ally", 0.9, 0.1)];
        let context = CompositionContext::prepare(&allies);

        // Another pure-AD hit-all-zero candidate closes no gap
        let score = compute_composition_score(&champ("cand", 0.9, 0.1), &allies, &context);
        assert_eq!(score, 0.0);
    }

    #[test]
    fn gap_labels_follow_flag_order() {
        let context = CompositionContext::prepare(&balanced_team());
        assert!(context.gap_labels().is_empty());

        let context = CompositionContext::prepare(&[champ("solo", 0.9, 0.1)]);
        assert_eq!(
            context.gap_labels(),
            vec!["ap", "frontline", "engage", "peel", "waveclear", "cc"]
        );
    }
}
