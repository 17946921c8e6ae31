//! Counter score: advantage against already-known enemy picks.
//!
//! A matchup against an enemy slot whose role the candidate can play
//! counts at full strength (direct counter); other slots count at half
//! weight (indirect). The summed advantage is normalized from
//! [-MAX_COUNTER_RANGE, +MAX_COUNTER_RANGE] onto [0, 100].

use crate::data::models::{Champion, CounterMatrix, TeamState, ALL_ROLES};

use super::{clamp_score, round2};

/// Widest plausible summed advantage across five matchups.
const MAX_COUNTER_RANGE: f64 = 15.0;

/// Compute the counter score for a candidate against the enemy slots.
/// No enemies known → neutral 50.
pub fn compute_counter_score(
    champion: &Champion,
    counter_matrix: &CounterMatrix,
    enemy_team: &TeamState,
) -> f64 {
    if enemy_team.picks() == 0 {
        return 50.0;
    }

    let mut direct = 0.0;
    let mut indirect = 0.0;

    for role in ALL_ROLES {
        let Some(enemy_id) = enemy_team.slot(role) else {
            continue;
        };
        let value = counter_matrix.advantage(&champion.id, enemy_id);

        if champion.plays_role(role) {
            direct += value;
        } else {
            indirect += value * 0.5;
        }
    }

    let raw = ((direct + indirect + MAX_COUNTER_RANGE) / (2.0 * MAX_COUNTER_RANGE)) * 100.0;
    clamp_score(round2(raw))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::models::{DamageProfile, Role, Tier};

    fn champ(id: &str, roles: Vec<Role>) -> Champion {
        Champion {
            id: id.to_string(),
            name: id.to_string(),
            roles,
            winrate: 50.0,
            pick_rate: 10.0,
            ban_rate: 0.0,
            tier: Tier::A,
            damage_profile: DamageProfile {
                ad: 0.5,
                ap: 0.5,
                true_dmg: 0.0,
            },
            durability_score: 5.0,
            engage_score: 5.0,
            peel_score: 5.0,
            cc_score: 5.0,
            scaling_score: 5.0,
            early_game_score: 5.0,
            mobility_score: 5.0,
            healing_score: 5.0,
            shield_score: 5.0,
            waveclear_score: 5.0,
            tags: vec![],
        }
    }

    #[test]
    fn no_known_enemies_is_neutral() {
        let c = champ("cand", vec![Role::Mid]);
        let matrix = CounterMatrix::new();
        assert_eq!(
            compute_counter_score(&c, &matrix, &TeamState::default()),
            50.0
        );
    }

    #[test]
    fn unknown_matchup_is_even() {
        let c = champ("cand", vec![Role::Mid]);
        let matrix = CounterMatrix::new();
        let mut enemies = TeamState::default();
        enemies.set_slot(Role::Mid, "foe".to_string());

        assert_eq!(compute_counter_score(&c, &matrix, &enemies), 50.0);
    }

    #[test]
    fn role_matched_counter_counts_at_full_strength() {
        let c = champ("cand", vec![Role::Mid]);
        let mut matrix = CounterMatrix::new();
        matrix.insert("cand", "foe", 3.0);

        let mut enemies = TeamState::default();
        enemies.set_slot(Role::Mid, "foe".to_string());

        // (3 + 15) / 30 × 100 = 60
        assert_eq!(compute_counter_score(&c, &matrix, &enemies), 60.0);
    }

    #[test]
    fn off_role_counter_counts_at_half_strength() {
        let c = champ("cand", vec![Role::Baron]);
        let mut matrix = CounterMatrix::new();
        matrix.insert("cand", "foe", 3.0);

        let mut enemies = TeamState::default();
        enemies.set_slot(Role::Mid, "foe".to_string());

        // (1.5 + 15) / 30 × 100 = 55
        assert_eq!(compute_counter_score(&c, &matrix, &enemies), 55.0);
    }

    #[test]
    fn disadvantage_pulls_below_neutral() {
        let c = champ("cand", vec![Role::Dragon]);
        let mut matrix = CounterMatrix::new();
        matrix.insert("cand", "foe", -5.0);

        let mut enemies = TeamState::default();
        enemies.set_slot(Role::Dragon, "foe".to_string());

        // (-5 + 15) / 30 × 100 = 33.33
        assert_eq!(compute_counter_score(&c, &matrix, &enemies), 33.33);
    }
}
