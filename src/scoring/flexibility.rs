//! Flexibility score: role versatility and build adaptability.

use crate::data::models::Champion;

use super::{clamp_score, round2};

/// Fixed contribution for build-path adaptability not otherwise modeled.
const ADAPTIVE_SCORE: f64 = 15.0;

/// A 30/70 damage split already counts as fully hybrid.
const HYBRID_FLOOR: f64 = 0.3;

/// Compute the flexibility score for a candidate. Draft-independent.
pub fn compute_flexibility_score(champion: &Champion) -> f64 {
    let role_score = (champion.roles.len() as f64 / 3.0).min(1.0) * 40.0;

    let min_damage = champion.damage_profile.ad.min(champion.damage_profile.ap);
    let hybrid_damage_score = (min_damage / HYBRID_FLOOR).min(1.0) * 30.0;

    let raw = role_score + hybrid_damage_score + ADAPTIVE_SCORE;
    clamp_score(round2(raw))
}
