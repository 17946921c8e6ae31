//! Tag-pair synergy rules.
//!
//! This is the data layer for tag-based reasoning; no scoring logic here.
//! Rules are bidirectional: (A, B) matches (B, A). Per ally pair the
//! matching rule scores are summed and capped to
//! [`MIN_SYNERGY_PER_PAIR`, `MAX_SYNERGY_PER_PAIR`].

use super::models::ChampionTag;

/// A deterministic synergy rule between two champion tags.
/// Positive score = synergy, negative = anti-synergy.
#[derive(Debug, Clone, Copy)]
pub struct SynergyRule {
    pub tag_a: ChampionTag,
    pub tag_b: ChampionTag,
    pub score: f64,
    pub reason: &'static str,
}

const fn rule(tag_a: ChampionTag, tag_b: ChampionTag, score: f64, reason: &'static str) -> SynergyRule {
    SynergyRule {
        tag_a,
        tag_b,
        score,
        reason,
    }
}

use ChampionTag::*;

/// All tag-pair synergy rules. Tuned configuration data; preserved
/// exactly for behavioral compatibility.
pub const SYNERGY_RULES: &[SynergyRule] = &[
    // Positive synergies
    rule(Engage, Burst, 3.0, "Engage creates burst window for follow-up damage"),
    rule(Engage, Hypercarry, 3.0, "Engage draws attention away from carry"),
    rule(Peel, Hypercarry, 4.0, "Peel directly enables carry to deal sustained damage safely"),
    rule(Frontline, Hypercarry, 3.0, "Frontline absorbs damage while carry deals damage behind"),
    rule(Frontline, Poke, 2.0, "Frontline creates space for poke siege composition"),
    rule(CcHeavy, Burst, 2.0, "CC chains extend burst damage window"),
    rule(Dive, Dive, 2.0, "Double dive overwhelms enemy backline"),
    rule(Engage, Engage, 1.0, "Multiple engage angles make initiation more reliable"),
    rule(Poke, Poke, 2.0, "Double poke creates dominant siege composition"),
    rule(Sustain, Scaling, 2.0, "Sustain helps team survive to reach scaling power spikes"),
    rule(Early, Early, 2.0, "Full early-game team can snowball before opponent scales"),
    rule(Peel, Poke, 2.0, "Peel protects poke champions maintaining safe range"),
    rule(Engage, CcHeavy, 2.0, "Engage + layered CC creates extended lockdown chains"),
    rule(Shield, Hypercarry, 3.0, "Shields amplify hypercarry survivability during fights"),
    rule(Engage, Assassin, 2.0, "Engage creates chaos for assassin to find targets"),
    rule(Waveclear, Scaling, 1.0, "Waveclear stalls game for scaling champions"),
    rule(Frontline, Sustain, 2.0, "Healing on a frontline champion extends teamfight duration"),
    // Anti-synergies
    rule(Splitpush, Engage, -2.0, "Splitpush wants 1-3-1, engage wants 5v5 teamfights"),
    rule(Splitpush, Splitpush, -1.0, "Double splitpush leaves team too weak in teamfights"),
    rule(Early, Scaling, -1.0, "Tempo mismatch: early wants to close, scaling wants to stall"),
    rule(Poke, Engage, -1.0, "Poke wants to maintain distance, engage closes distance"),
    rule(Assassin, Assassin, -2.0, "Multiple assassins lack frontline and sustained damage"),
];

/// Cap on the summed rule scores for a single ally pair.
pub const MAX_SYNERGY_PER_PAIR: f64 = 8.0;
pub const MIN_SYNERGY_PER_PAIR: f64 = -5.0;

/// Sum of all rule scores matching the two tags, in either order.
pub fn pair_score(a: ChampionTag, b: ChampionTag) -> f64 {
    SYNERGY_RULES
        .iter()
        .filter(|r| (r.tag_a == a && r.tag_b == b) || (r.tag_a == b && r.tag_b == a))
        .map(|r| r.score)
        .sum()
}
