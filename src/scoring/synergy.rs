//! Synergy score: how well the candidate's tags pair with locked allies.
//!
//! For each locked ally, the rule scores for every (candidate tag,
//! ally tag) combination are summed and capped per pair, then the total
//! is normalized around the neutral 50 mark.

use crate::data::models::Champion;
use crate::data::tags::{pair_score, MAX_SYNERGY_PER_PAIR, MIN_SYNERGY_PER_PAIR};

use super::{clamp_score, round2};

/// Compute the synergy score for a candidate against the locked allies.
/// No allies → neutral 50.
pub fn compute_synergy_score(champion: &Champion, allies: &[Champion]) -> f64 {
    if allies.is_empty() {
        return 50.0;
    }

    let mut total_synergy = 0.0;

    for ally in allies {
        if ally.id == champion.id {
            continue;
        }

        let mut pair_synergy = 0.0;
        for c_tag in &champion.tags {
            for a_tag in &ally.tags {
                pair_synergy += pair_score(*c_tag, *a_tag);
            }
        }

        total_synergy += pair_synergy.clamp(MIN_SYNERGY_PER_PAIR, MAX_SYNERGY_PER_PAIR);
    }

    let max_synergy = allies.len() as f64 * 4.0;
    let raw = 50.0 + (total_synergy / max_synergy) * 50.0;
    clamp_score(round2(raw))
}
