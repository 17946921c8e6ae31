//! Threat score: how well the candidate answers the enemy team's
//! aggregate threat profile.
//!
//! Five threat categories (burst, poke, dive, sustain, splitpush) are
//! accumulated from enemy tags and attributes, then the candidate's
//! mitigation capability per category is weighted by threat intensity.

use crate::data::models::{Champion, ChampionTag};

use super::{clamp_score, round2};

/// Shared per-batch context: enemy threat levels per category.
#[derive(Debug, Clone, Default)]
pub struct ThreatContext {
    pub burst: f64,
    pub poke: f64,
    pub dive: f64,
    pub sustain: f64,
    pub splitpush: f64,
}

impl ThreatContext {
    pub fn prepare(enemies: &[Champion]) -> Self {
        let mut ctx = ThreatContext::default();
        for e in enemies {
            if e.has_tag(ChampionTag::Burst) {
                ctx.burst += 1.0;
            }
            if e.has_tag(ChampionTag::Poke) {
                ctx.poke += 1.0;
            }
            ctx.dive += (e.engage_score + e.durability_score) / 20.0;
            ctx.sustain += e.healing_score / 10.0;
            if e.has_tag(ChampionTag::Splitpush) {
                ctx.splitpush += 1.0;
            }
        }
        ctx
    }

    pub fn total(&self) -> f64 {
        self.burst + self.poke + self.dive + self.sustain + self.splitpush
    }
}

/// Compute the threat mitigation score. No enemies or a zero threat
/// profile → neutral 50.
pub fn compute_threat_score(
    champion: &Champion,
    enemies: &[Champion],
    context: &ThreatContext,
) -> f64 {
    if enemies.is_empty() {
        return 50.0;
    }
    let total = context.total();
    if total == 0.0 {
        return 50.0;
    }

    let burst_mitigation =
        ((champion.durability_score + champion.shield_score + champion.peel_score) / 25.0).min(1.0);
    let poke_mitigation =
        ((champion.engage_score + champion.mobility_score + champion.healing_score) / 25.0).min(1.0);
    let dive_mitigation =
        ((champion.peel_score + champion.cc_score + champion.durability_score) / 25.0).min(1.0);
    let sustain_mitigation = if champion.has_tag(ChampionTag::Antiheal) {
        1.0
    } else if champion.has_tag(ChampionTag::Burst) {
        0.6
    } else {
        0.0
    };
    let splitpush_bonus = if champion.has_tag(ChampionTag::Splitpush) {
        5.0
    } else {
        0.0
    };
    let splitpush_mitigation =
        ((champion.waveclear_score + champion.mobility_score + splitpush_bonus) / 25.0).min(1.0);

    let weighted = (context.burst * burst_mitigation
        + context.poke * poke_mitigation
        + context.dive * dive_mitigation
        + context.sustain * sustain_mitigation
        + context.splitpush * splitpush_mitigation)
        / total;

    clamp_score(round2(weighted * 100.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::models::{DamageProfile, Role, Tier};

    fn champ(id: &str, tags: Vec<ChampionTag>) -> Champion {
        Champion {
            id: id.to_string(),
            name: id.to_string(),
            roles: vec![Role::Mid],
            winrate: 50.0,
            pick_rate: 10.0,
            ban_rate: 0.0,
            tier: Tier::A,
            damage_profile: DamageProfile {
                ad: 0.5,
                ap: 0.5,
                true_dmg: 0.0,
            },
            durability_score: 0.0,
            engage_score: 0.0,
            peel_score: 0.0,
            cc_score: 0.0,
            scaling_score: 0.0,
            early_game_score: 0.0,
            mobility_score: 0.0,
            healing_score: 0.0,
            shield_score: 0.0,
            waveclear_score: 0.0,
            tags,
        }
    }

    #[test]
    fn no_enemies_is_neutral() {
        let context = ThreatContext::prepare(&[]);
        let c = champ("cand", vec![]);
        assert_eq!(compute_threat_score(&c, &[], &context), 50.0);
    }

    #[test]
    fn zero_threat_profile_is_neutral() {
        // Enemies with all-zero attributes and no threat tags
        let enemies = vec![champ("e1", vec![]), champ("e2", vec![])];
        let context = ThreatContext::prepare(&enemies);
        assert_eq!(context.total(), 0.0);

        let c = champ("cand", vec![]);
        assert_eq!(compute_threat_score(&c, &enemies, &context), 50.0);
    }

    #[test]
    fn antiheal_fully_answers_sustain_threat() {
        // One enemy whose only threat is healing
        let mut healer = champ("healer", vec![]);
        healer.healing_score = 10.0;
        let enemies = vec![healer];
        let context = ThreatContext::prepare(&enemies);
        assert_eq!(context.sustain, 1.0);

        let answer = champ("answer", vec![ChampionTag::Antiheal]);
        assert_eq!(compute_threat_score(&answer, &enemies, &context), 100.0);

        let burst = champ("burst", vec![ChampionTag::Burst]);
        assert_eq!(compute_threat_score(&burst, &enemies, &context), 60.0);

        let nothing = champ("nothing", vec![]);
        assert_eq!(compute_threat_score(&nothing, &enemies, &context), 0.0);
    }

    #[test]
    fn tanky_peeler_mitigates_burst() {
        let enemies = vec![champ("assassin", vec![ChampionTag::Burst])];
        let context = ThreatContext::prepare(&enemies);

        let mut guardian = champ("guardian", vec![]);
        guardian.durability_score = 9.0;
        guardian.shield_score = 8.0;
        guardian.peel_score = 8.0;

        // (9 + 8 + 8) / 25 = 1.0 capped; burst is the only threat
        assert_eq!(compute_threat_score(&guardian, &enemies, &context), 100.0);
    }

    #[test]
    fn mitigation_is_weighted_by_threat_intensity() {
        // Two burst enemies and one splitpusher: burst 2.0, split 1.0
        let enemies = vec![
            champ("b1", vec![ChampionTag::Burst]),
            champ("b2", vec![ChampionTag::Burst]),
            champ("s", vec![ChampionTag::Splitpush]),
        ];
        let context = ThreatContext::prepare(&enemies);

        let mut c = champ("cand", vec![]);
        c.durability_score = 5.0; // burst mitigation 0.2
        c.waveclear_score = 5.0; // splitpush mitigation 0.2

        // (2×0.2 + 1×0.2) / 3 × 100 = 20
        assert_eq!(compute_threat_score(&c, &enemies, &context), 20.0);
    }
}
